use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Стоимость в очках: номинал фишки, цель на игрока, итоги раскладки.
///
/// Отдельный тип, чтобы очки не смешивались с количеством фишек (`u64`).
/// Вся арифметика насыщающая: недобор не уходит в минус, стол не переполняется.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Points(pub u64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Сколько целых `unit` помещается в сумму. Для нулевого `unit` 0.
    pub fn units_of(self, unit: Points) -> u64 {
        self.0.checked_div(unit.0).unwrap_or(0)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! saturating_points_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $raw:ident) => {
        impl $op for Points {
            type Output = Points;

            fn $method(self, rhs: Points) -> Points {
                Points(self.0.$raw(rhs.0))
            }
        }

        impl $assign for Points {
            fn $assign_method(&mut self, rhs: Points) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

saturating_points_op!(Add, add, AddAssign, add_assign, saturating_add);
saturating_points_op!(Sub, sub, SubAssign, sub_assign, saturating_sub);

/// Номинал × число фишек.
impl Mul<u64> for Points {
    type Output = Points;

    fn mul(self, count: u64) -> Points {
        Points(self.0.saturating_mul(count))
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
