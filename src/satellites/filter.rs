// Filterer - narrows a collection to the records matching the history criteria
//
// Three conjunctive conditions: free-text search over name and orbit type,
// exact orbit type, exact status. Input order is preserved.

use super::model::SatelliteRecord;
use std::fmt;

/// A categorical filter: everything, or one exact value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Step through `["all", options...]`, wrapping at both ends
    ///
    /// A selection that is no longer among the options restarts from `All`.
    pub fn cycle(&self, options: &[String], forward: bool) -> Selection {
        if options.is_empty() {
            return Selection::All;
        }

        // Position 0 is "all", 1..=len are the options
        let len = options.len() + 1;
        let current = match self {
            Selection::All => 0,
            Selection::Only(v) => match options.iter().position(|o| o == v) {
                Some(i) => i + 1,
                None => 0,
            },
        };
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        match next {
            0 => Selection::All,
            i => Selection::Only(options[i - 1].clone()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(v) => f.write_str(v),
        }
    }
}

/// Active search text plus categorical selections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub orbit_type: Selection,
    pub status: Selection,
}

impl FilterCriteria {
    /// True when every record passes
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty()
            && self.orbit_type == Selection::All
            && self.status == Selection::All
    }

    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        self.matches_search(record)
            && self.orbit_type.matches(&record.orbit_type)
            && self.status.matches(&record.status)
    }

    fn matches_search(&self, record: &SatelliteRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.orbit_type.to_lowercase().contains(&needle)
    }
}

/// Records matching `criteria`, in input order
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a SatelliteRecord>
where
    I: IntoIterator<Item = &'a SatelliteRecord>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
