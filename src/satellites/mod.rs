// Satellites module - fetch, hold and derive views of the satellite collection
//
// Data flows one way:
//
//   SatelliteClient ──► DataStore (snapshot) ──┬─► filter ─► sort ─► paginate  (history)
//                                              └─► aggregate                    (dashboard)
//
// Everything after the store is a pure function of the snapshot.

pub mod aggregate;
pub mod client;
pub mod filter;
pub mod history;
pub mod model;
pub mod paginate;
pub mod sort;
pub mod store;

pub use aggregate::{aggregate, Aggregate, Metric, Summary};
pub use client::{FetchError, SatelliteClient};
pub use history::HistoryState;
pub use model::SatelliteRecord;
pub use store::{DataStore, RefreshTicket, Snapshot};
