// Sorter - orders records by one field
//
// Comparators come from a single dispatch table keyed by SortKey: launch dates
// compare chronologically, everything else compares as case-sensitive strings.
// The sort is unstable; records with equal keys may come out in any order.

use super::model::SatelliteRecord;
use std::cmp::Ordering;
use std::fmt;

/// Field to sort the history table by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    LaunchDate,
    OrbitType,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::LaunchDate,
        SortKey::OrbitType,
        SortKey::Status,
    ];

    /// Wire/field name, as used by the API
    pub fn field(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::LaunchDate => "launch_date",
            SortKey::OrbitType => "orbit_type",
            SortKey::Status => "status",
        }
    }

    /// Ascending comparator for this field
    fn comparator(self) -> Comparator {
        match self {
            SortKey::Name => by_name,
            SortKey::LaunchDate => by_launch_date,
            SortKey::OrbitType => by_orbit_type,
            SortKey::Status => by_status,
        }
    }
}

type Comparator = fn(&SatelliteRecord, &SatelliteRecord) -> Ordering;

fn by_name(a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
    a.name.cmp(&b.name)
}

// None (unparseable) sorts before every real date
fn by_launch_date(a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
    a.launch_date.date().cmp(&b.launch_date.date())
}

fn by_orbit_type(a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
    a.orbit_type.cmp(&b.orbit_type)
}

fn by_status(a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
    a.status.cmp(&b.status)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow shown next to the active column header
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Full comparator: field ordering with direction applied to the result
    pub fn compare(&self, a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
        self.direction.apply((self.key.comparator())(a, b))
    }
}

/// Sort records by `spec`
///
/// Takes ownership so callers can chain straight off `filter`.
pub fn sort<'a>(
    mut records: Vec<&'a SatelliteRecord>,
    spec: &SortSpec,
) -> Vec<&'a SatelliteRecord> {
    records.sort_unstable_by(|a, b| spec.compare(a, b));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellites::fixtures::{fleet, record};

    fn names<'a>(records: &[&'a SatelliteRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_names_case_sensitively() {
        let records = vec![
            record(1, "beta", "LEO", "Active", "2020-01-01"),
            record(2, "Alpha", "LEO", "Active", "2020-01-01"),
            record(3, "Zulu", "LEO", "Active", "2020-01-01"),
        ];
        let sorted = sort(records.iter().collect(), &SortSpec::default());
        // Uppercase sorts before lowercase
        assert_eq!(names(&sorted), ["Alpha", "Zulu", "beta"]);
    }

    #[test]
    fn launch_dates_compare_chronologically() {
        let records = vec![
            record(1, "A", "LEO", "Active", "2021-06-15"),
            record(2, "B", "LEO", "Active", "1990-04-24"),
            record(3, "C", "LEO", "Active", "2021-12-25T00:00:00Z"),
            record(4, "D", "LEO", "Active", "not a date"),
        ];
        let spec = SortSpec::new(SortKey::LaunchDate, SortDirection::Asc);
        assert_eq!(names(&sort(records.iter().collect(), &spec)), ["D", "B", "A", "C"]);

        let spec = SortSpec::new(SortKey::LaunchDate, SortDirection::Desc);
        assert_eq!(names(&sort(records.iter().collect(), &spec)), ["C", "A", "B", "D"]);
    }

    #[test]
    fn output_is_permutation_of_input() {
        let records = fleet();
        for key in SortKey::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let sorted = sort(records.iter().collect(), &SortSpec::new(key, direction));
                assert_eq!(sorted.len(), records.len());

                let mut got: Vec<String> = sorted.iter().map(|r| r.id.to_string()).collect();
                let mut want: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
                got.sort();
                want.sort();
                assert_eq!(got, want, "key={} direction={:?}", key, direction);
            }
        }
    }

    #[test]
    fn descending_mirrors_ascending_keys() {
        let records = fleet();
        for key in SortKey::ALL {
            let asc = sort(records.iter().collect(), &SortSpec::new(key, SortDirection::Asc));
            let desc = sort(records.iter().collect(), &SortSpec::new(key, SortDirection::Desc));

            // Compare by key value only; tie order is unspecified
            let cmp = SortSpec::new(key, SortDirection::Asc);
            for (a, b) in asc.iter().rev().zip(desc.iter()) {
                assert_eq!(cmp.compare(a, b), Ordering::Equal, "key={}", key);
            }
        }
    }

    #[test]
    fn empty_input() {
        assert!(sort(Vec::new(), &SortSpec::default()).is_empty());
    }

    #[test]
    fn toggled_direction() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
