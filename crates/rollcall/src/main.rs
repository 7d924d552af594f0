//! # Rollcall CLI
//!
//! A terminal client for the `rollcallapp` library. It stands in for the three
//! collaborators the library leaves open:
//!
//! - **Tag reader**: the tag's JSON record comes from `--tag` or stdin.
//! - **Presentation**: outcomes and report-action effects are printed.
//! - **Mail dispatcher**: the report is written to an outbox directory as a
//!   mail file (or printed with `--stdout`) for the system mailer to pick up.
//!
//! The binary is intentionally thin: `cli::run()` does the work and this file
//! only handles process termination.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
