//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic attendance library**. Members present a tag to
//! check in or out; the library keeps a ledger of who is present and of
//! completed visits, and composes a CSV report that is cleared once it has
//! been delivered.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (tag reader, presentation, mail dispatcher)         │
//! │  - Lives outside this crate (see the `rollcall` CLI)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, clock and report settings                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Attendance state machine, report composer                │
//! │  - Returns Outcome / Effect / ReportStatus values            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - LedgerStore over a StorageBackend (fs or memory)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never formats
//! user-facing messages. A scan yields an [`commands::Outcome`] plus a list of
//! [`commands::Effect`]s the client applies (e.g. show the "send report"
//! button). Sending mail is a [`report::ReportDelivery`] the client provides.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Scan and report logic
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Record encoding and tag decoding
//! - [`model`]: Core data types
//! - [`report`]: CSV rendering and the delivery seam
//! - [`tag`]: Tag reader seam
//! - [`clock`]: Time source
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
pub mod tag;

#[cfg(test)]
pub(crate) mod test_utils;
