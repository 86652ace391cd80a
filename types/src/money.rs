use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// An amount in whole Indonesian rupiah.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(pub i64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0 + rhs.0)
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::ZERO, Add::add)
    }
}

/// Formats as id-ID currency with no fraction digits, e.g. `Rp 120.000`
/// (the separator after `Rp` is a no-break space).
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(f, "{sign}Rp\u{a0}{grouped}")
    }
}

pub fn format_rp(amount: impl Into<Rupiah>) -> String {
    amount.into().to_string()
}

impl From<i64> for Rupiah {
    fn from(value: i64) -> Self {
        Rupiah(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_id_locale() {
        assert_eq!(format_rp(120_000), "Rp\u{a0}120.000");
        assert_eq!(format_rp(1_250_000), "Rp\u{a0}1.250.000");
        assert_eq!(format_rp(42_800_000), "Rp\u{a0}42.800.000");
        assert_eq!(format_rp(20_000), "Rp\u{a0}20.000");
    }

    #[test]
    fn small_and_edge_amounts() {
        assert_eq!(format_rp(0), "Rp\u{a0}0");
        assert_eq!(format_rp(999), "Rp\u{a0}999");
        assert_eq!(format_rp(1_000), "Rp\u{a0}1.000");
        assert_eq!(format_rp(-50_000), "-Rp\u{a0}50.000");
        assert_eq!(
            format_rp(i64::MIN),
            "-Rp\u{a0}9.223.372.036.854.775.808"
        );
    }

    #[test]
    fn sums() {
        let total: Rupiah = [120_000, 230_000, 20_000].into_iter().map(Rupiah).sum();
        assert_eq!(total, Rupiah(370_000));
    }
}
