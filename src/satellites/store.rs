// DataStore - the single owner of the satellite snapshot
//
// A refresh has two halves:
// - begin_refresh(): synchronous, flips `loading` on and clears the error
// - complete(): applies the outcome of that fetch
//
// The TUI runs the fetch on a spawned task and hands the result back to the
// event loop, so every mutation below happens on one thread. Each refresh is
// stamped with a sequence number; only the newest request may write.

use super::client::FetchError;
#[cfg(test)]
use super::client::SatelliteClient;
use super::model::SatelliteRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Prefix for every user-facing fetch error
const ERROR_PREFIX: &str = "Failed to load satellite data";

/// The store's current state, replaced wholesale on every refresh
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Satellites in the order the API sent them
    pub satellites: Arc<Vec<SatelliteRecord>>,
    pub loading: bool,
    pub error: Option<String>,
    /// When the last successful refresh landed
    pub last_updated: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}

/// Proof that a refresh was started, carried back with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Holds the satellite collection plus loading/error flags
#[derive(Debug, Default)]
pub struct DataStore {
    snapshot: Snapshot,
    /// Sequence number of the most recently issued refresh
    latest_issued: u64,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Start a refresh: loading on, error cleared, new ticket issued
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_issued += 1;
        self.snapshot.loading = true;
        self.snapshot.error = None;
        tracing::debug!("Satellite refresh #{} started", self.latest_issued);
        RefreshTicket(self.latest_issued)
    }

    /// Apply the outcome of a refresh
    ///
    /// Returns false (and changes nothing) when a newer refresh has been issued
    /// since `ticket`; that newer one owns the snapshot now.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<SatelliteRecord>, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest_issued {
            tracing::debug!(
                "Dropping stale refresh #{} (latest is #{})",
                ticket.0,
                self.latest_issued
            );
            return false;
        }

        match result {
            Ok(satellites) => {
                tracing::info!("Loaded {} satellites", satellites.len());
                self.snapshot = Snapshot {
                    satellites: Arc::new(satellites),
                    loading: false,
                    error: None,
                    last_updated: Some(Utc::now()),
                };
            }
            Err(err) => {
                tracing::warn!("Failed to fetch satellites: {}", err.detail());
                self.snapshot = Snapshot {
                    satellites: Arc::new(Vec::new()),
                    loading: false,
                    error: Some(format!("{}: {}", ERROR_PREFIX, err)),
                    last_updated: self.snapshot.last_updated,
                };
            }
        }
        true
    }

    /// Fetch and apply in one go (used by tests)
    ///
    /// The TUI never awaits a fetch on its loop; it goes through
    /// `App::refresh`, which spawns the fetch and applies it with `complete`.
    #[cfg(test)]
    pub async fn refresh(&mut self, client: &SatelliteClient) {
        let ticket = self.begin_refresh();
        let result = client.fetch_satellites().await;
        self.complete(ticket, result);
    }

    /// Hide the current error without touching the data
    pub fn dismiss_error(&mut self) {
        self.snapshot.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellites::fixtures::{pair, record};
    use reqwest::StatusCode;

    #[test]
    fn starts_empty_and_idle() {
        let store = DataStore::new();
        let snap = store.snapshot();
        assert!(snap.is_empty());
        assert!(!snap.loading);
        assert!(snap.error.is_none());
        assert!(snap.last_updated.is_none());
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut store = DataStore::new();
        let ticket = store.begin_refresh();
        store.complete(
            ticket,
            Err(FetchError::MalformedResponse("missing".into())),
        );
        assert!(store.snapshot().error.is_some());

        store.begin_refresh();
        assert!(store.snapshot().loading);
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn success_replaces_collection() {
        let mut store = DataStore::new();
        let ticket = store.begin_refresh();
        assert!(store.complete(ticket, Ok(pair())));

        let snap = store.snapshot();
        assert_eq!(snap.satellites.len(), 2);
        assert!(!snap.loading);
        assert!(snap.error.is_none());
        assert!(snap.last_updated.is_some());

        // Second refresh replaces, never merges
        let ticket = store.begin_refresh();
        store.complete(
            ticket,
            Ok(vec![record(9, "Gamma", "MEO", "Active", "2019-03-03")]),
        );
        assert_eq!(store.snapshot().satellites.len(), 1);
        assert_eq!(store.snapshot().satellites[0].name, "Gamma");
    }

    #[test]
    fn http_failure_empties_collection() {
        let mut store = DataStore::new();
        let ticket = store.begin_refresh();
        store.complete(ticket, Ok(pair()));

        let ticket = store.begin_refresh();
        store.complete(
            ticket,
            Err(FetchError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            }),
        );

        let snap = store.snapshot();
        assert!(snap.satellites.is_empty());
        assert!(!snap.loading);
        assert_eq!(
            snap.error.as_deref(),
            Some("Failed to load satellite data: HTTP error! status: 500")
        );
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut store = DataStore::new();
        let first = store.begin_refresh();
        let second = store.begin_refresh();

        // Newest lands first, then the older one straggles in
        assert!(store.complete(second, Ok(pair())));
        assert!(!store.complete(first, Err(FetchError::MalformedResponse("late".into()))));

        assert_eq!(store.snapshot().satellites.len(), 2);
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn loading_holds_until_newest_completes() {
        let mut store = DataStore::new();
        let first = store.begin_refresh();
        let second = store.begin_refresh();

        store.complete(first, Ok(pair()));
        assert!(store.snapshot().loading);
        assert!(store.snapshot().is_empty());

        store.complete(second, Ok(pair()));
        assert!(!store.snapshot().loading);
    }

    #[test]
    fn dismiss_keeps_data() {
        let mut store = DataStore::new();
        let ticket = store.begin_refresh();
        store.complete(ticket, Err(FetchError::MalformedResponse("x".into())));
        store.dismiss_error();
        assert!(store.snapshot().error.is_none());
        assert!(!store.snapshot().loading);
    }

    #[tokio::test]
    async fn refresh_against_live_api() {
        use axum::{routing::get, Router};

        let body = r#"{"satellites": [
            {"id": 1, "name": "Terra", "orbit_type": "Sun-synchronous", "status": "Active", "launch_date": "1999-12-18"},
            {"id": 2, "name": "Aqua", "orbit_type": "Sun-synchronous", "status": "Active", "launch_date": "2002-05-04"},
            {"id": 3, "name": "Landsat 8", "orbit_type": "Sun-synchronous", "status": "Active", "launch_date": "2013-02-11"}
        ]}"#;
        let app = Router::new().route("/satellites", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = SatelliteClient::new(format!("http://{}", addr), None).unwrap();
        let mut store = DataStore::new();
        store.refresh(&client).await;

        assert_eq!(store.snapshot().satellites.len(), 3);
        assert!(store.snapshot().error.is_none());
        assert!(!store.snapshot().loading);
    }
}
