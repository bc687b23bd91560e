//! # CLI Behavior
//!
//! This is **one possible UI client** for the console, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Session Gate
//!
//! `login`, `logout`, `whoami` and `config` work without a session. Every other
//! command needs one and fails with an authentication error otherwise, the way the
//! console's protected pages sent a logged-out visitor to the login screen.
//!
//! ## Naked Execution
//!
//! Running `lendadmin` with no arguments shows the first page of users.
//!
//! ## Status Changes
//!
//! `activate`, `blacklist` and `status` change the record in the running process
//! only. Records are reloaded from the dataset on every run, so the change is
//! visible in the command's own output and gone afterwards.
//!
//! ## Module Structure
//!
//! - `commands`: context wiring and per-command handlers
//! - `render`: tables, pager, detail view, stats cards
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
