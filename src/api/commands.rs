use serde::{Deserialize, Serialize};

use crate::domain::denomination::{ChipSet, Denomination};
use crate::domain::ChipSetId;
use crate::infra::persistence::{ChipSetPatch, ChipSetRepository};

use super::errors::ApiError;

/// Команды, которые меняют каталог наборов.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать пользовательский набор.
    CreateChipSet(CreateChipSetCommand),

    /// Изменить набор. Правка пресета сохраняется как новый набор.
    UpdateChipSet(UpdateChipSetCommand),

    /// Удалить набор (кроме пресетов).
    DeleteChipSet(DeleteChipSetCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateChipSetCommand {
    pub name: String,
    pub denominations: Vec<Denomination>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateChipSetCommand {
    pub chip_set_id: ChipSetId,
    pub patch: ChipSetPatch,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteChipSetCommand {
    pub chip_set_id: ChipSetId,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Набор создан.
    Created(ChipSet),

    /// Набор сохранён (для пресета – это новая копия).
    Updated(ChipSet),

    /// Набор удалён.
    Deleted(ChipSetId),
}

/// Выполнить команду над репозиторием.
pub fn execute_command<R: ChipSetRepository>(
    repo: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateChipSet(cmd) => {
            let created = repo.create(&cmd.name, cmd.denominations)?;
            Ok(CommandResponse::Created(created))
        }
        Command::UpdateChipSet(cmd) => {
            let updated = repo.update(cmd.chip_set_id, cmd.patch)?;
            Ok(CommandResponse::Updated(updated))
        }
        Command::DeleteChipSet(cmd) => {
            // Защита пресетов на стороне вызывающего, до обращения к хранилищу.
            if let Some(existing) = repo.get(cmd.chip_set_id) {
                if existing.is_preset {
                    return Err(ApiError::PresetProtected(cmd.chip_set_id));
                }
            }
            repo.delete(cmd.chip_set_id)?;
            Ok(CommandResponse::Deleted(cmd.chip_set_id))
        }
    }
}
