use std::fmt;

use crate::domain::denomination::ChipSet;
use crate::engine::allocator::{ChipDistribution, DistributionResult};

/// Текст для буфера обмена: набор, игроки, раскладка на игрока, стол, предупреждения.
///
/// Пример:
/// ```text
/// Chip set: Home Game 500
/// Players: 4
///
/// Per player:
///   100 (black) x 5
///   25 (blue) x 2
/// Per player total: 550 in 7 chips
///
/// Table total:
///   100 (black) x 20
///   25 (blue) x 8
/// ```
pub fn format_for_clipboard(result: &DistributionResult, player_count: u64, chip_set: &ChipSet) -> String {
    ClipboardReport {
        result,
        player_count,
        chip_set,
    }
    .to_string()
}

struct ClipboardReport<'a> {
    result: &'a DistributionResult,
    player_count: u64,
    chip_set: &'a ChipSet,
}

impl fmt::Display for ClipboardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Chip set: {}", self.chip_set.name.trim())?;
        writeln!(f, "Players: {}", self.player_count)?;

        writeln!(f)?;
        writeln!(f, "Per player:")?;
        write_rows(f, &result.per_player)?;
        writeln!(
            f,
            "Per player total: {} in {} chips",
            result.total_value, result.total_chips
        )?;

        writeln!(f)?;
        writeln!(f, "Table total:")?;
        write_rows(f, &result.table_total)?;

        if !result.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for w in &result.warnings {
                writeln!(f, "  - {}", w)?;
            }
        }

        Ok(())
    }
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[ChipDistribution]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "  (none)");
    }
    for row in rows {
        writeln!(f, "  {} ({}) x {}", row.label(), row.color, row.count)?;
    }
    Ok(())
}
