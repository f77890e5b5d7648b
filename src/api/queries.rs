use serde::{Deserialize, Serialize};

use crate::domain::denomination::ChipSet;
use crate::domain::points::Points;
use crate::domain::ChipSetId;
use crate::engine::allocator::calculate;
use crate::infra::persistence::ChipSetRepository;

use super::dto::{CalculationViewDto, ChipSetSummaryDto};
use super::errors::ApiError;
use super::export::format_for_clipboard;

/// Ввод калькулятора в том виде, в каком его прислал UI (может быть мусор).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationRequest {
    pub chip_set_id: ChipSetId,
    pub target_value: i64,
    pub player_count: i64,
}

impl CalculationRequest {
    /// Привести к минимально допустимым значениям: игроков >= 1, цель >= 0.
    pub fn normalized(&self) -> (Points, u64) {
        let target = Points(self.target_value.max(0).unsigned_abs());
        let players = self.player_count.max(1).unsigned_abs();
        (target, players)
    }
}

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Список наборов (для выпадающего списка).
    ListChipSets,

    /// Полный набор с номиналами.
    GetChipSet { chip_set_id: ChipSetId },

    /// Проверка ёмкости + раскладка.
    Calculate(CalculationRequest),

    /// Текст раскладки для буфера обмена.
    Export(CalculationRequest),
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    ChipSets(Vec<ChipSetSummaryDto>),
    ChipSet(ChipSet),
    Calculation(CalculationViewDto),
    Export(String),
}

pub fn run_query<R: ChipSetRepository>(repo: &R, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::ListChipSets => Ok(QueryResponse::ChipSets(
            repo.list().iter().map(ChipSetSummaryDto::from).collect(),
        )),

        Query::GetChipSet { chip_set_id } => repo
            .get(chip_set_id)
            .map(QueryResponse::ChipSet)
            .ok_or(ApiError::ChipSetNotFound(chip_set_id)),

        Query::Calculate(request) => {
            let chip_set = load(repo, request.chip_set_id)?;
            let (target, players) = request.normalized();

            Ok(QueryResponse::Calculation(CalculationViewDto {
                chip_set_id: chip_set.id,
                target_value: target,
                player_count: players,
                calculation: calculate(&chip_set, target, players),
            }))
        }

        Query::Export(request) => {
            let chip_set = load(repo, request.chip_set_id)?;
            let (target, players) = request.normalized();
            let calc = calculate(&chip_set, target, players);

            Ok(QueryResponse::Export(format_for_clipboard(
                &calc.distribution,
                players,
                &chip_set,
            )))
        }
    }
}

fn load<R: ChipSetRepository>(repo: &R, id: ChipSetId) -> Result<ChipSet, ApiError> {
    repo.get(id).ok_or(ApiError::ChipSetNotFound(id))
}
