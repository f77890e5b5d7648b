use serde::{Deserialize, Serialize};

use crate::domain::denomination::Denomination;
use crate::domain::points::Points;

/// Ответ на вопрос "хватит ли фишек на столько игроков".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeasibilityResult {
    pub feasible: bool,
    pub max_players: u64,
    /// Пусто, если `feasible`.
    pub message: String,
}

/// Суммарная стоимость всех фишек с ненулевым количеством.
pub fn aggregate_value(denominations: &[Denomination]) -> Points {
    denominations
        .iter()
        .filter(|d| d.quantity > 0)
        .map(Denomination::total_value)
        .sum()
}

/// Проверка по суммарной стоимости набора, без попытки разложить фишки по номиналам.
///
/// max_players = floor(total / target). Нулевой target считаем невыполнимым.
/// Дёшево, можно звать на каждое нажатие клавиши.
pub fn check_feasibility(
    denominations: &[Denomination],
    target_per_player: Points,
    player_count: u64,
) -> FeasibilityResult {
    if target_per_player.is_zero() {
        return FeasibilityResult {
            feasible: false,
            max_players: 0,
            message: "not enough chips: target value per player must be positive".to_string(),
        };
    }

    let total = aggregate_value(denominations);
    let max_players = total.units_of(target_per_player);
    let feasible = max_players >= player_count;

    let message = if feasible {
        String::new()
    } else {
        format!(
            "not enough chips: {} in total supports only {} players at {} each, {} requested",
            total, max_players, target_per_player, player_count
        )
    };

    FeasibilityResult {
        feasible,
        max_players,
        message,
    }
}
