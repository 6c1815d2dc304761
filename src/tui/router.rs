// View routing
//
// Which top-level view is on screen, and whether arriving at it should pull a
// fresh copy of the satellite collection.

/// Top-level views of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Dashboard,
    History,
    Videos,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Dashboard, View::History, View::Videos];

    /// Get the next view in cycle
    pub fn next(self) -> Self {
        match self {
            View::Home => View::Dashboard,
            View::Dashboard => View::History,
            View::History => View::Videos,
            View::Videos => View::Home,
        }
    }

    /// Get the previous view in cycle
    pub fn prev(self) -> Self {
        match self {
            View::Home => View::Videos,
            View::Dashboard => View::Home,
            View::History => View::Dashboard,
            View::Videos => View::History,
        }
    }

    /// Get display name for tabs and status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Dashboard => "Dashboard",
            View::History => "History",
            View::Videos => "Live Feeds",
        }
    }

    /// Views that show satellite data refetch when entered
    pub fn requires_fresh_data(&self) -> bool {
        matches!(self, View::Dashboard | View::History)
    }

    /// F-key that jumps to this view
    pub fn hotkey(&self) -> u8 {
        match self {
            View::Home => 1,
            View::Dashboard => 2,
            View::History => 3,
            View::Videos => 4,
        }
    }

    pub fn from_hotkey(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.hotkey() == n)
    }

    pub fn index(&self) -> usize {
        self.hotkey() as usize - 1
    }
}

/// Tracks the active view
#[derive(Debug, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switch views. Returns true when the caller should start a refresh.
    ///
    /// Data views ask for one on every selection, including re-selection.
    pub fn navigate(&mut self, view: View) -> bool {
        if view != self.current {
            tracing::debug!("View {} -> {}", self.current.name(), view.name());
            self.current = view;
        }
        view.requires_fresh_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(ViewRouter::new().current(), View::Home);
    }

    #[test]
    fn data_views_ask_for_refresh() {
        let mut router = ViewRouter::new();
        assert!(router.navigate(View::Dashboard));
        assert!(router.navigate(View::History));
        assert!(!router.navigate(View::Videos));
        assert!(!router.navigate(View::Home));
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn reselecting_data_view_refreshes_again() {
        let mut router = ViewRouter::new();
        router.navigate(View::History);
        assert!(router.navigate(View::History));
        assert_eq!(router.current(), View::History);

        router.navigate(View::Videos);
        assert!(!router.navigate(View::Videos));
    }

    #[test]
    fn cycle_and_hotkeys_agree() {
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
            assert_eq!(View::from_hotkey(view.hotkey()), Some(view));
            assert_eq!(View::ALL[view.index()], view);
        }
        assert_eq!(View::from_hotkey(9), None);
    }
}
