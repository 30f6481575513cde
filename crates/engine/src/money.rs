use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency symbol used for every amount shown to the user.
pub const CURRENCY_SYMBOL: &str = "₹";
/// Largest amount a single record or budget may hold (₹100 crore).
///
/// Sums of bounded amounts stay far from `i64` limits; arithmetic still
/// saturates so a corrupt row cannot panic a report.
pub const MAX_AMOUNT: MoneyCents = MoneyCents(100_000_000_000);

/// Signed money amount represented as **integer paise** (1/100 rupee).
///
/// Use this type for **all** monetary values in the engine (transaction
/// amounts, budgets, totals) to avoid floating-point drift.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(1_23_456_00);
/// assert_eq!(amount.cents(), 12345600);
/// assert_eq!(amount.to_string(), "₹1,23,456");
/// ```
///
/// Parsing from user input (`,` is a grouping separator, `.` the decimal
/// one; rejects > 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("1,250.5".parse::<MoneyCents>().unwrap().cents(), 125050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer paise.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a new amount from whole rupees.
    #[must_use]
    pub const fn from_major(rupees: i64) -> Self {
        Self(rupees.saturating_mul(100))
    }

    /// Returns the raw value in paise.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `true` when the magnitude exceeds [`MAX_AMOUNT`].
    #[must_use]
    pub const fn exceeds_limit(self) -> bool {
        self.0.unsigned_abs() > MAX_AMOUNT.0.unsigned_abs()
    }

    /// Amount in rupees as a float, for ratios and charts only.
    #[must_use]
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Ratio `self / whole` as a percentage, `0` when `whole` is not positive.
    #[must_use]
    pub fn percent_of(self, whole: MoneyCents) -> f64 {
        if whole.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 * 100.0 / whole.0 as f64
    }

    /// Integer division used for averages; `ZERO` when `count` is 0.
    #[must_use]
    pub fn div_count(self, count: usize) -> MoneyCents {
        match i64::try_from(count) {
            Ok(count) if count > 0 => MoneyCents(self.0 / count),
            _ => MoneyCents::ZERO,
        }
    }

    /// Plain decimal without symbol or grouping (`"45"`, `"45.50"`), as
    /// used in CSV exports.
    #[must_use]
    pub fn major_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (rupees, paise) = (abs / 100, abs % 100);
        if paise == 0 {
            format!("{sign}{rupees}")
        } else {
            format!("{sign}{rupees}.{paise:02}")
        }
    }

    /// Short form for tight spaces: `₹1.2K`, `₹5.5L`, `₹1.2Cr`.
    #[must_use]
    pub fn compact(self) -> String {
        let rupees = self.as_major_f64();
        if rupees >= 10_000_000.0 {
            format!("{CURRENCY_SYMBOL}{:.1}Cr", rupees / 10_000_000.0)
        } else if rupees >= 100_000.0 {
            format!("{CURRENCY_SYMBOL}{:.1}L", rupees / 100_000.0)
        } else if rupees >= 1_000.0 {
            format!("{CURRENCY_SYMBOL}{:.1}K", rupees / 1_000.0)
        } else {
            self.to_string()
        }
    }
}

/// Groups digits the Indian way: last three, then pairs (`12,34,567`).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

impl fmt::Display for MoneyCents {
    /// Whole amounts drop the decimals, fractional ones show two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (rupees, paise) = (abs / 100, abs % 100);
        if paise == 0 {
            write!(f, "{sign}{CURRENCY_SYMBOL}{}", group_indian(rupees))
        } else {
            write!(f, "{sign}{CURRENCY_SYMBOL}{}.{paise:02}", group_indian(rupees))
        }
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(self.0.saturating_neg())
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into paise.
    ///
    /// Accepts an optional leading `+`/`-`, an optional `₹` and `,` grouping
    /// separators.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - magnitude at most [`MAX_AMOUNT`]
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        let rest = rest.strip_prefix(CURRENCY_SYMBOL).unwrap_or(rest).trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', "");
        let mut parts = rest.split('.');
        let rupees_str = parts.next().ok_or_else(invalid)?;
        let paise_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if rupees_str.is_empty() || !rupees_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let rupees: i64 = rupees_str.parse().map_err(|_| overflow())?;

        let paise: i64 = match paise_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = rupees
            .checked_mul(100)
            .and_then(|v| v.checked_add(paise))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        let amount = MoneyCents(signed);
        if amount.exceeds_limit() {
            return Err(overflow());
        }
        Ok(amount)
    }
}
