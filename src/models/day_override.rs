//! Day override map model.
//!
//! An override pairs a date forced to be non-working with a date forced to be
//! working, layered on top of the weekly holiday pattern. The usual use is a
//! swapped working day, e.g. a Thursday off worked back on the following Saturday.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Explicit date-level exceptions: non-working date → working date.
///
/// Keys are treated as holidays regardless of weekday. Values are treated as
/// working days regardless of weekday. A date that is both a key and a value
/// resolves as a holiday.
///
/// # Example
///
/// ```
/// use due_date_engine::models::DayOverrideMap;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2021, 2, 18).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2021, 2, 20).unwrap();
///
/// let overrides: DayOverrideMap = [(thursday, saturday)].into_iter().collect();
/// assert!(overrides.is_forced_holiday(thursday));
/// assert!(overrides.is_forced_working(saturday));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<NaiveDate, NaiveDate>",
    into = "BTreeMap<NaiveDate, NaiveDate>"
)]
pub struct DayOverrideMap {
    pairs: BTreeMap<NaiveDate, NaiveDate>,
    /// Value set, precomputed so lookups in either direction are logarithmic.
    working: BTreeSet<NaiveDate>,
}

impl DayOverrideMap {
    /// Creates an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the date is declared non-working.
    pub fn is_forced_holiday(&self, date: NaiveDate) -> bool {
        self.pairs.contains_key(&date)
    }

    /// Whether the date is declared working.
    pub fn is_forced_working(&self, date: NaiveDate) -> bool {
        self.working.contains(&date)
    }

    /// Iterates the `(non-working, working)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of override pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Dates that appear both as a key and as a value.
    ///
    /// These resolve as holidays.
    pub fn conflicts(&self) -> Vec<NaiveDate> {
        self.pairs
            .keys()
            .filter(|date| self.working.contains(*date))
            .copied()
            .collect()
    }
}

impl From<BTreeMap<NaiveDate, NaiveDate>> for DayOverrideMap {
    fn from(pairs: BTreeMap<NaiveDate, NaiveDate>) -> Self {
        let working = pairs.values().copied().collect();
        Self { pairs, working }
    }
}

impl From<DayOverrideMap> for BTreeMap<NaiveDate, NaiveDate> {
    fn from(map: DayOverrideMap) -> Self {
        map.pairs
    }
}

impl FromIterator<(NaiveDate, NaiveDate)> for DayOverrideMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, NaiveDate)>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}
