//! # Summary History
//!
//! This crate provides the session-scoped history of past summarization
//! requests: the `HistoryEntry` domain type and the `HistoryLedger`, a
//! capacity-bounded, insertion-ordered log with FIFO eviction.
//!
//! The ledger is owned by the presentation layer (one per session) and is
//! mutated only through `append` and `delete`; entries themselves are never
//! mutated in place.

mod domain;
mod ledger;

pub use domain::{HistoryEntry, ModelProfile};
pub use ledger::{HistoryLedger, LedgerError, HISTORY_CAP};
