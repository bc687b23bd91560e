//! # Lendadmin CLI Architecture
//!
//! The admin console ships with a terminal client, but the binary is intentionally
//! thin: the CLI lives in `src/cli/`, while this file only starts the runtime,
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/lendadminapp/`: the UI-agnostic data core (store, listing pipeline,
//!   status mutator, async facade, session, configuration)
//! - `crates/lendadmin/`: this CLI, a client of `lendadminapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/lendadmin/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, login gate, dispatch (commands.rs)       │
//! │  - Tables, pager, detail view, stats cards (render.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/lendadminapp/src/api.rs)                 │
//! │  - Async facade with simulated latency                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/lendadminapp/src/commands/*)         │
//! │  - filter, sort, paginate, status, stats, search            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Output
//!
//! Rendering goes to stdout; logs go to stderr through `tracing-subscriber`, so
//! `--output json` stays machine-readable even with `--verbose`.
//!
//! ## Testing Approach
//!
//! - Library logic is tested in `lendadminapp`.
//! - `render.rs` has unit tests over canned users and pages.
//! - `tests/cli_e2e.rs` runs the binary against a temporary data directory.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
