use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::denomination::{ChipSet, Denomination};
use crate::domain::points::Points;
use crate::engine::config::AllocatorConfig;
use crate::engine::feasibility::{aggregate_value, check_feasibility, FeasibilityResult};

pub const WARN_NO_DENOMINATIONS: &str = "no denominations defined";

/// Сколько фишек одного номинала выдано (одному игроку или всему столу).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipDistribution {
    pub value: Points,
    pub count: u64,
    pub color: String,
    pub name: Option<String>,
}

impl ChipDistribution {
    fn from_denomination(d: &Denomination, count: u64) -> Self {
        Self {
            value: d.value,
            count,
            color: d.color.clone(),
            name: d.name.clone(),
        }
    }

    /// Имя для отображения: `name`, если задано, иначе номинал.
    pub fn label(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.value.to_string(),
        }
    }

    pub fn subtotal(&self) -> Points {
        self.value * self.count
    }
}

/// Результат раскладки. Не хранится, пересчитывается на каждое изменение ввода.
///
/// `per_player[i]` и `table_total[i]` описывают один и тот же номинал,
/// `table_total[i].count = per_player[i].count * player_count`.
/// Оба списка упорядочены от крупного номинала к мелкому.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistributionResult {
    pub per_player: Vec<ChipDistribution>,
    pub total_chips: u64,
    pub total_value: Points,
    pub table_total: Vec<ChipDistribution>,
    pub warnings: Vec<String>,
}

impl DistributionResult {
    fn empty(warning: &str) -> Self {
        Self {
            warnings: vec![warning.to_string()],
            ..Self::default()
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Всё, что UI показывает после изменения ввода: проверка ёмкости + раскладка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Calculation {
    pub feasibility: FeasibilityResult,
    pub distribution: DistributionResult,
}

/// Рабочая ячейка раскладчика: номинал, лимит на игрока и сколько уже выдано.
#[derive(Debug)]
struct Slot<'a> {
    denom: &'a Denomination,
    cap: u64,
    used: u64,
}

impl Slot<'_> {
    fn headroom(&self) -> u64 {
        self.cap.saturating_sub(self.used)
    }
}

/// Раскладка с настройками по умолчанию.
pub fn calculate_distribution(
    denominations: &[Denomination],
    target_per_player: Points,
    player_count: u64,
) -> DistributionResult {
    calculate_distribution_with(
        denominations,
        target_per_player,
        player_count,
        &AllocatorConfig::default(),
    )
}

/// Основной алгоритм раскладки фишек.
///
/// Вход:
///   - denominations: номиналы с доступным количеством (только чтение);
///   - target_per_player: сколько очков должен получить каждый игрок;
///   - player_count: сколько игроков (0 трактуется как 1).
///
/// Алгоритм:
///   1. Выкидываем номиналы с нулевым количеством.
///   2. Лимит на игрока: cap = floor(quantity / player_count),
///      так стол в сумме никогда не превысит физический запас.
///   3. Проход приближения: от крупного номинала к мелкому берём
///      min(floor(remaining / value), cap). Перебора цели не бывает.
///   4. Проход диверсификации: если номиналов слишком мало, меняем
///      часть самого крупного на мелкие той же суммой (в пределах лимитов,
///      точный перебор с минимумом фишек).
///   5. Стол = раскладка игрока * player_count, плюс предупреждения о нехватке.
pub fn calculate_distribution_with(
    denominations: &[Denomination],
    target_per_player: Points,
    player_count: u64,
    config: &AllocatorConfig,
) -> DistributionResult {
    if denominations.is_empty() {
        return DistributionResult::empty(WARN_NO_DENOMINATIONS);
    }

    let players = player_count.max(1);

    let mut slots: Vec<Slot<'_>> = denominations
        .iter()
        .filter(|d| d.is_usable())
        .map(|d| Slot {
            denom: d,
            cap: d.quantity / players,
            used: 0,
        })
        .collect();

    // Порядок входа не должен влиять на результат.
    slots.sort_by(|a, b| {
        b.denom
            .value
            .cmp(&a.denom.value)
            .then_with(|| b.denom.quantity.cmp(&a.denom.quantity))
            .then_with(|| a.denom.color.cmp(&b.denom.color))
            .then_with(|| a.denom.name.cmp(&b.denom.name))
    });

    let remaining = approach_pass(&mut slots, target_per_player);
    let reached = target_per_player - remaining;
    log::debug!(
        "approach pass: target {} reached {} remaining {} ({} players)",
        target_per_player,
        reached,
        remaining,
        players
    );

    if config.diversify && diversify_pass(&mut slots, config.min_distinct_denominations) {
        log::debug!("diversification pass redistributed the largest denomination");
    }

    let per_player: Vec<ChipDistribution> = slots
        .iter()
        .filter(|s| s.used > 0)
        .map(|s| ChipDistribution::from_denomination(s.denom, s.used))
        .collect();

    let table_total: Vec<ChipDistribution> = per_player
        .iter()
        .map(|c| ChipDistribution {
            count: c.count.saturating_mul(players),
            ..c.clone()
        })
        .collect();

    let total_chips = per_player
        .iter()
        .map(|c| c.count)
        .fold(0u64, u64::saturating_add);

    let mut warnings = Vec::new();

    if !remaining.is_zero() {
        warnings.push(format!(
            "target not reachable: only {} reachable per player, {} short",
            reached, remaining
        ));
    }

    if !target_per_player.is_zero() {
        let supply = aggregate_value(denominations);
        let needed = target_per_player * players;
        if supply < needed {
            warnings.push(format!(
                "not enough chips, you need {} for {} players but the set only holds {}",
                needed, players, supply
            ));
        }
    }

    for w in &warnings {
        log::warn!("{}", w);
    }

    DistributionResult {
        per_player,
        total_chips,
        total_value: reached,
        table_total,
        warnings,
    }
}

/// Проверка ёмкости и раскладка для одного набора.
pub fn calculate(chip_set: &ChipSet, target_per_player: Points, player_count: u64) -> Calculation {
    calculate_with(chip_set, target_per_player, player_count, &AllocatorConfig::default())
}

pub fn calculate_with(
    chip_set: &ChipSet,
    target_per_player: Points,
    player_count: u64,
    config: &AllocatorConfig,
) -> Calculation {
    Calculation {
        feasibility: check_feasibility(&chip_set.denominations, target_per_player, player_count),
        distribution: calculate_distribution_with(
            &chip_set.denominations,
            target_per_player,
            player_count,
            config,
        ),
    }
}

/// Жадный проход от крупного к мелкому. Возвращает недобор.
fn approach_pass(slots: &mut [Slot<'_>], target: Points) -> Points {
    let mut remaining = target;

    for slot in slots.iter_mut() {
        let desired = remaining.units_of(slot.denom.value);
        let count = desired.min(slot.cap);
        slot.used = count;
        remaining -= slot.denom.value * count;
    }

    remaining
}

/// Разменять k фишек самого крупного использованного номинала на мелкие
/// (минимальное k, при котором размен точный). Сумма не меняется.
///
/// Возвращает true, если что-то поменялось.
fn diversify_pass(slots: &mut [Slot<'_>], min_distinct: usize) -> bool {
    let distinct = slots.iter().filter(|s| s.used > 0).count();
    if distinct == 0 || distinct >= min_distinct {
        return false;
    }

    // slots отсортированы по убыванию, всё правее `big` мельче.
    let big = match slots.iter().position(|s| s.used > 0) {
        Some(idx) => idx,
        None => return false,
    };

    let (head, smaller) = slots.split_at_mut(big + 1);
    let source = &mut head[big];

    // Общий делитель мелких номиналов со свободным лимитом: шаг таблицы размена.
    let unit = smaller
        .iter()
        .filter(|s| s.headroom() > 0)
        .fold(0, |g, s| gcd(g, s.denom.value.0));
    if unit == 0 {
        return false;
    }

    let value = source.denom.value.0;
    let max_k = source
        .used
        .min(MAX_CHANGE_STATES.saturating_mul(unit) / value);
    if max_k == 0 {
        return false;
    }

    let table = ChangeTable::build(smaller, unit, max_k * value / unit);

    for k in 1..=max_k {
        let amount = k * value;
        if amount % unit != 0 {
            continue;
        }
        if let Some(plan) = table.plan(smaller, amount / unit) {
            source.used -= k;
            for (slot, extra) in smaller.iter_mut().zip(plan) {
                slot.used += extra;
            }
            return true;
        }
    }

    false
}

/// Предел размера таблицы размена (в шагах `unit`).
const MAX_CHANGE_STATES: u64 = 100_000;

const UNREACHABLE: u32 = u32::MAX;

/// Таблица точного размена мелкими номиналами в пределах их свободного лимита.
///
/// `layers[i][s]` = минимальное число фишек из `slots[..=i]`, дающее сумму
/// `s * unit`, или `UNREACHABLE`. Минимум фишек делает выбор однозначным.
struct ChangeTable {
    unit: u64,
    layers: Vec<Vec<u32>>,
}

impl ChangeTable {
    fn build(slots: &[Slot<'_>], unit: u64, max_state: u64) -> Self {
        let size = usize::try_from(max_state).map_or(0, |m| m + 1);
        let mut prev = vec![UNREACHABLE; size];
        if let Some(zero) = prev.first_mut() {
            *zero = 0;
        }

        let mut layers = Vec::with_capacity(slots.len());
        for slot in slots {
            let next = match slot.headroom() {
                0 => prev.clone(),
                limit => bounded_min(&prev, step_of(slot, unit), limit),
            };
            layers.push(next.clone());
            prev = next;
        }

        Self { unit, layers }
    }

    /// Раскладка суммы `state * unit` по слотам или None.
    fn plan(&self, slots: &[Slot<'_>], state: u64) -> Option<Vec<u64>> {
        let mut s = usize::try_from(state).ok()?;
        if *self.layers.last()?.get(s)? == UNREACHABLE {
            return None;
        }

        let mut counts = vec![0u64; slots.len()];

        // Обратный ход от мелкого к крупному: у мелкого берём как можно меньше.
        for i in (0..slots.len()).rev() {
            let limit = slots[i].headroom();
            if limit == 0 {
                continue;
            }
            let here = u64::from(self.layers[i][s]);
            let step = step_of(&slots[i], self.unit);

            let mut found = false;
            for c in 0..=limit {
                let back = match usize::try_from(c).ok().and_then(|c| c.checked_mul(step)) {
                    Some(back) if back <= s => back,
                    _ => break,
                };
                let before = if i == 0 {
                    if s == back {
                        0
                    } else {
                        UNREACHABLE
                    }
                } else {
                    self.layers[i - 1][s - back]
                };
                if before != UNREACHABLE && u64::from(before) + c == here {
                    counts[i] = c;
                    s -= back;
                    found = true;
                    break;
                }
            }
            if !found {
                return None;
            }
        }

        (s == 0).then_some(counts)
    }
}

fn step_of(slot: &Slot<'_>, unit: u64) -> usize {
    usize::try_from(slot.denom.value.0 / unit).unwrap_or(usize::MAX)
}

/// Ограниченный рюкзак на минимум: `next[s] = min(prev[s - c*step] + c)`
/// по `c` в `0..=limit`. Скользящий минимум по каждому остатку от `step`.
fn bounded_min(prev: &[u32], step: usize, limit: u64) -> Vec<u32> {
    let mut next = vec![UNREACHABLE; prev.len()];
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    for residue in 0..step.min(prev.len()) {
        // (j, prev[residue + j*step] - j), ключи возрастают от начала к концу.
        let mut window: VecDeque<(usize, i64)> = VecDeque::new();

        for (j, s) in (residue..prev.len()).step_by(step).enumerate() {
            if prev[s] != UNREACHABLE {
                let key = i64::from(prev[s]) - j as i64;
                while matches!(window.back(), Some(&(_, k)) if k >= key) {
                    window.pop_back();
                }
                window.push_back((j, key));
            }
            while matches!(window.front(), Some(&(t, _)) if j - t > limit) {
                window.pop_front();
            }
            if let Some(&(_, key)) = window.front() {
                next[s] = u32::try_from(key + j as i64).unwrap_or(UNREACHABLE);
            }
        }
    }

    next
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
