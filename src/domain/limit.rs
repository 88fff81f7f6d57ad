use derive_more::derive::Display;
use std::num::NonZeroU64;

/// Upper bound on the number of rows a list request returns.
///
/// Parsed from the raw `limit` query value as a positive integer that fits
/// the store's signed 64-bit `LIMIT`. Absent, empty, zero and unparsable
/// values (negatives, fractions, trailing garbage, anything past `i64::MAX`)
/// all resolve to [`Limit::DEFAULT`]. No tighter bound is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", _0)]
pub struct Limit(NonZeroU64);

impl Limit {
    pub const DEFAULT: Limit = match NonZeroU64::new(10) {
        Some(n) => Limit(n),
        None => unreachable!(),
    };

    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|val| val.parse::<NonZeroU64>().ok())
            .filter(|n| i64::try_from(n.get()).is_ok())
            .map(Limit)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn get(&self) -> i64 {
        // from_query never admits a value past i64::MAX
        i64::try_from(self.0.get()).unwrap_or(i64::MAX)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}
