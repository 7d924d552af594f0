//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. For the library architecture see `rollcallapp`.
//!
//! ## Scanning
//!
//! `rollcall check-in` and `rollcall check-out` take the tag record from
//! `--tag '<json>'`. Without `--tag`, piped stdin is read as the single record
//! (`nfc-read | rollcall check-in`). Repeating `--tag` simulates a tag carrying
//! several records, which is rejected as an invalid tag.
//!
//! ## Reporting
//!
//! `rollcall report` writes the mail into `<data dir>/outbox/` (or `--outbox`)
//! and clears the pending sessions only when the write succeeded.
//! `--dry-run` previews without clearing.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: outcome and ledger formatting
//! - `setup`: argument parsing via clap
//! - `adapters`: tag reader and mail delivery for the terminal

mod adapters;
mod commands;
mod render;
pub mod setup;

pub use commands::run;
