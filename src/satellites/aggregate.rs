// Aggregator - grouped counts for the dashboard charts
//
// - orbit_distribution / status_overview: share of the fleet per distinct value,
//   in first-seen order
// - launch_timeline: launches per calendar year, ascending
//
// An empty collection aggregates to nothing; there is no total to divide by.

use super::model::SatelliteRecord;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Status value counted as an active mission
pub const ACTIVE_STATUS: &str = "Active";

/// Named aggregation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    OrbitDistribution,
    LaunchTimeline,
    StatusOverview,
}

impl Metric {
    /// Selector order on the dashboard
    pub const ALL: [Metric; 3] = [
        Metric::OrbitDistribution,
        Metric::LaunchTimeline,
        Metric::StatusOverview,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::OrbitDistribution => "orbit_distribution",
            Metric::LaunchTimeline => "launch_timeline",
            Metric::StatusOverview => "status_overview",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::OrbitDistribution => "Orbit Distribution",
            Metric::LaunchTimeline => "Launch Timeline",
            Metric::StatusOverview => "Status Overview",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Metric::OrbitDistribution => Metric::LaunchTimeline,
            Metric::LaunchTimeline => Metric::StatusOverview,
            Metric::StatusOverview => Metric::OrbitDistribution,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Metric::OrbitDistribution => Metric::StatusOverview,
            Metric::LaunchTimeline => Metric::OrbitDistribution,
            Metric::StatusOverview => Metric::LaunchTimeline,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| format!("unknown metric '{}'", s))
    }
}

/// One slice of a categorical breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub name: String,
    pub count: usize,
    /// Percent of the total, rounded to one decimal
    pub percentage: f64,
}

/// Launches in one calendar year (`None` = launch date could not be parsed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    pub year: Option<i32>,
    pub count: usize,
}

impl YearBucket {
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// Result of aggregating by a metric
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    Shares(Vec<Share>),
    Timeline(Vec<YearBucket>),
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        match self {
            Aggregate::Shares(shares) => shares.is_empty(),
            Aggregate::Timeline(buckets) => buckets.is_empty(),
        }
    }

    /// Sum of all group counts
    #[cfg(test)]
    pub fn total(&self) -> usize {
        match self {
            Aggregate::Shares(shares) => shares.iter().map(|s| s.count).sum(),
            Aggregate::Timeline(buckets) => buckets.iter().map(|b| b.count).sum(),
        }
    }
}

/// Group `records` according to `metric`
pub fn aggregate(records: &[SatelliteRecord], metric: Metric) -> Aggregate {
    match metric {
        Metric::OrbitDistribution => Aggregate::Shares(shares_by(records, |r| &r.orbit_type)),
        Metric::StatusOverview => Aggregate::Shares(shares_by(records, |r| &r.status)),
        Metric::LaunchTimeline => Aggregate::Timeline(launches_per_year(records)),
    }
}

fn shares_by<F>(records: &[SatelliteRecord], field: F) -> Vec<Share>
where
    F: Fn(&SatelliteRecord) -> &String,
{
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    // Vec keeps first-seen order; the map only finds the slot
    let mut groups: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let value = field(record).as_str();
        match slots.get(value) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                slots.insert(value, groups.len());
                groups.push((value, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(name, count)| Share {
            name: name.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn launches_per_year(records: &[SatelliteRecord]) -> Vec<YearBucket> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    let mut unknown = 0usize;
    for record in records {
        match record.launch_date.year() {
            Some(year) => *years.entry(year).or_insert(0) += 1,
            None => unknown += 1,
        }
    }

    let mut buckets: Vec<YearBucket> = years
        .into_iter()
        .map(|(year, count)| YearBucket {
            year: Some(year),
            count,
        })
        .collect();
    if unknown > 0 {
        buckets.push(YearBucket {
            year: None,
            count: unknown,
        });
    }
    buckets
}

/// `100 * count / total` rounded to one decimal place
fn percentage(count: usize, total: usize) -> f64 {
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Headline numbers shown on the home and dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub orbit_types: usize,
}

impl Summary {
    pub fn of(records: &[SatelliteRecord]) -> Self {
        let orbit_types = records
            .iter()
            .map(|r| r.orbit_type.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        Self {
            total: records.len(),
            active: records.iter().filter(|r| r.status == ACTIVE_STATUS).count(),
            orbit_types,
        }
    }
}

/// Up to `limit` active satellites, in collection order
pub fn active_satellites(records: &[SatelliteRecord], limit: usize) -> Vec<&SatelliteRecord> {
    records
        .iter()
        .filter(|r| r.status == ACTIVE_STATUS)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellites::fixtures::{fleet, pair, record};

    #[test]
    fn orbit_distribution_of_pair() {
        let shares = aggregate(&pair(), Metric::OrbitDistribution);
        assert_eq!(
            shares,
            Aggregate::Shares(vec![
                Share {
                    name: "LEO".to_string(),
                    count: 1,
                    percentage: 50.0
                },
                Share {
                    name: "GEO".to_string(),
                    count: 1,
                    percentage: 50.0
                },
            ])
        );
    }

    #[test]
    fn shares_keep_first_seen_order() {
        let records = vec![
            record(1, "A", "MEO", "Active", "2020-01-01"),
            record(2, "B", "GEO", "Inactive", "2020-01-01"),
            record(3, "C", "MEO", "Active", "2020-01-01"),
            record(4, "D", "LEO", "Decommissioned", "2020-01-01"),
        ];
        let Aggregate::Shares(shares) = aggregate(&records, Metric::OrbitDistribution) else {
            panic!("Expected shares");
        };
        let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["MEO", "GEO", "LEO"]);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].percentage, 25.0);

        let Aggregate::Shares(statuses) = aggregate(&records, Metric::StatusOverview) else {
            panic!("Expected shares");
        };
        let names: Vec<_> = statuses.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Active", "Inactive", "Decommissioned"]);
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        let records = vec![
            record(1, "A", "LEO", "Active", "2020-01-01"),
            record(2, "B", "GEO", "Active", "2020-01-01"),
            record(3, "C", "GEO", "Active", "2020-01-01"),
        ];
        let Aggregate::Shares(shares) = aggregate(&records, Metric::OrbitDistribution) else {
            panic!("Expected shares");
        };
        assert_eq!(shares[0].percentage, 33.3);
        assert_eq!(shares[1].percentage, 66.7);
    }

    #[test]
    fn timeline_sorted_by_year_with_unknown_last() {
        let records = vec![
            record(1, "A", "LEO", "Active", "2021-06-15"),
            record(2, "B", "LEO", "Active", "1998-11-20"),
            record(3, "C", "LEO", "Active", "garbage"),
            record(4, "D", "LEO", "Active", "2021-01-01"),
        ];
        assert_eq!(
            aggregate(&records, Metric::LaunchTimeline),
            Aggregate::Timeline(vec![
                YearBucket {
                    year: Some(1998),
                    count: 1
                },
                YearBucket {
                    year: Some(2021),
                    count: 2
                },
                YearBucket {
                    year: None,
                    count: 1
                },
            ])
        );
    }

    #[test]
    fn counts_sum_to_collection_size() {
        let records = fleet();
        for metric in Metric::ALL {
            assert_eq!(aggregate(&records, metric).total(), records.len(), "{}", metric);
        }
    }

    #[test]
    fn empty_collection_aggregates_to_nothing() {
        for metric in Metric::ALL {
            assert!(aggregate(&[], metric).is_empty());
        }
    }

    #[test]
    fn metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
            assert_eq!(metric.next().prev(), metric);
        }
        assert!("pie_chart".parse::<Metric>().is_err());
    }

    #[test]
    fn summary_counts() {
        let summary = Summary::of(&pair());
        assert_eq!(
            summary,
            Summary {
                total: 2,
                active: 1,
                orbit_types: 2
            }
        );
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn active_list_is_capped() {
        let records = fleet();
        let active = active_satellites(&records, 3);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|r| r.status == ACTIVE_STATUS));
    }
}
