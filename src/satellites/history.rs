// History view state: criteria, sort and page, plus the policies that tie them
//
// The pure pipeline pieces (filter/sort/paginate) know nothing about UI rules.
// This is where "reset to page 1 when anything changes" and "clicking the same
// column flips direction" live.

use super::filter::{filter, FilterCriteria, Selection};
use super::model::SatelliteRecord;
use super::paginate::{self, PAGE_SIZE};
use super::sort::{sort, SortDirection, SortKey, SortSpec};
use std::collections::HashSet;
use std::sync::Arc;

/// One rendered page of the history table
#[derive(Debug, Clone)]
pub struct HistoryPage<'a> {
    pub rows: Vec<&'a SatelliteRecord>,
    pub page_index: usize,
    pub total_pages: usize,
    /// Records passing the filter
    pub matched: usize,
    /// Records in the collection
    pub total: usize,
}

impl HistoryPage<'_> {
    /// "Showing X of Y satellites (filtered from Z total)"
    pub fn caption(&self) -> String {
        let mut caption = format!("Showing {} of {} satellites", self.rows.len(), self.matched);
        if self.matched != self.total {
            caption.push_str(&format!(" (filtered from {} total)", self.total));
        }
        caption
    }
}

/// View-local state of the satellite history table
#[derive(Debug, Clone)]
pub struct HistoryState {
    criteria: FilterCriteria,
    sort: SortSpec,
    page_index: usize,
    /// Collection the page index was computed against
    source: Option<Arc<Vec<SatelliteRecord>>>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page_index: 1,
            source: None,
        }
    }
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    #[cfg(test)]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.page_index = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.criteria.search_text.push(c);
        self.page_index = 1;
    }

    pub fn pop_search_char(&mut self) {
        if self.criteria.search_text.pop().is_some() {
            self.page_index = 1;
        }
    }

    pub fn set_orbit_type(&mut self, selection: Selection) {
        self.criteria.orbit_type = selection;
        self.page_index = 1;
    }

    pub fn set_status(&mut self, selection: Selection) {
        self.criteria.status = selection;
        self.page_index = 1;
    }

    /// Advance the orbit filter through `all` and the values present in `records`
    pub fn cycle_orbit_type(&mut self, records: &[SatelliteRecord], forward: bool) {
        let next = self
            .criteria
            .orbit_type
            .cycle(&orbit_options(records), forward);
        self.set_orbit_type(next);
    }

    /// Advance the status filter through `all` and the values present in `records`
    pub fn cycle_status(&mut self, records: &[SatelliteRecord], forward: bool) {
        let next = self.criteria.status.cycle(&status_options(records), forward);
        self.set_status(next);
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page_index = 1;
    }

    /// Column header click: same column flips direction, new column starts ascending
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec::new(key, SortDirection::Asc);
        }
        self.page_index = 1;
    }

    /// Reset to the first page whenever a different collection arrives
    pub fn sync_with(&mut self, satellites: &Arc<Vec<SatelliteRecord>>) {
        let same = self
            .source
            .as_ref()
            .is_some_and(|prev| Arc::ptr_eq(prev, satellites));
        if !same {
            self.source = Some(Arc::clone(satellites));
            self.page_index = 1;
        }
    }

    pub fn next_page(&mut self, records: &[SatelliteRecord]) {
        let pages = self.total_pages(records);
        if self.page_index < pages {
            self.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page_index > 1 {
            self.page_index -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.page_index = 1;
    }

    pub fn last_page(&mut self, records: &[SatelliteRecord]) {
        self.page_index = self.total_pages(records).max(1);
    }

    fn total_pages(&self, records: &[SatelliteRecord]) -> usize {
        let matched = records.iter().filter(|r| self.criteria.matches(r)).count();
        paginate::total_pages(matched, PAGE_SIZE)
    }

    /// Run filter → sort → paginate for the current state
    pub fn view<'a>(&self, records: &'a [SatelliteRecord]) -> HistoryPage<'a> {
        let matched = sort(filter(records, &self.criteria), &self.sort);
        let page = paginate::paginate(&matched, self.page_index, PAGE_SIZE);

        HistoryPage {
            rows: page.visible.to_vec(),
            page_index: self.page_index,
            total_pages: page.total_pages,
            matched: matched.len(),
            total: records.len(),
        }
    }
}

/// Distinct orbit types in first-seen order
pub fn orbit_options(records: &[SatelliteRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.orbit_type.as_str()))
}

/// Distinct statuses in first-seen order
pub fn status_options(records: &[SatelliteRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.status.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellites::fixtures::{fleet, pair};

    #[test]
    fn starts_sorted_by_name_on_page_one() {
        let state = HistoryState::new();
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.sort_spec(), SortSpec::new(SortKey::Name, SortDirection::Asc));
        assert!(state.criteria().is_identity());
    }

    #[test]
    fn same_column_toggles_new_column_resets() {
        let mut state = HistoryState::new();
        state.sort_by(SortKey::Name);
        assert_eq!(state.sort_spec().direction, SortDirection::Desc);

        state.sort_by(SortKey::LaunchDate);
        assert_eq!(
            state.sort_spec(),
            SortSpec::new(SortKey::LaunchDate, SortDirection::Asc)
        );
    }

    #[test]
    fn criteria_changes_reset_page() {
        let records = fleet();
        let mut state = HistoryState::new();
        state.next_page(&records);
        assert_eq!(state.page_index(), 2);

        state.push_search_char('a');
        assert_eq!(state.page_index(), 1);

        state.next_page(&records);
        state.sort_by(SortKey::Status);
        assert_eq!(state.page_index(), 1);

        state.set_search("");
        state.next_page(&records);
        state.cycle_status(&records, true);
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let records = fleet();
        assert_eq!(records.len(), 12);

        let mut state = HistoryState::new();
        state.prev_page();
        assert_eq!(state.page_index(), 1);

        state.next_page(&records);
        state.next_page(&records);
        assert_eq!(state.page_index(), 2);

        state.first_page();
        state.last_page(&records);
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn view_runs_full_pipeline() {
        let records = fleet();
        let mut state = HistoryState::new();

        let page = state.view(&records);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.matched, 12);
        assert_eq!(page.caption(), "Showing 10 of 12 satellites");
        // Sorted by name ascending
        assert!(page.rows.windows(2).all(|w| w[0].name <= w[1].name));

        state.set_orbit_type(Selection::Only("Sun-synchronous".to_string()));
        let page = state.view(&records);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.iter().all(|r| r.orbit_type == "Sun-synchronous"));
        assert_eq!(
            page.caption(),
            format!("Showing {} of {} satellites (filtered from 12 total)", page.rows.len(), page.matched)
        );
    }

    #[test]
    fn new_collection_resets_page() {
        let records = Arc::new(fleet());
        let mut state = HistoryState::new();
        state.sync_with(&records);
        state.next_page(&records);
        assert_eq!(state.page_index(), 2);

        // Same Arc: untouched
        state.sync_with(&records);
        assert_eq!(state.page_index(), 2);

        // Fresh refresh, even with equal content
        state.sync_with(&Arc::new(fleet()));
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn options_in_first_seen_order() {
        assert_eq!(orbit_options(&pair()), ["LEO", "GEO"]);
        assert_eq!(status_options(&pair()), ["Active", "Inactive"]);
    }

    #[test]
    fn cycling_orbit_filter_walks_options() {
        let records = pair();
        let mut state = HistoryState::new();
        state.cycle_orbit_type(&records, true);
        assert_eq!(state.criteria().orbit_type, Selection::Only("LEO".to_string()));
        state.cycle_orbit_type(&records, true);
        state.cycle_orbit_type(&records, true);
        assert_eq!(state.criteria().orbit_type, Selection::All);
    }
}
