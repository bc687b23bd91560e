//! # Lendadmin Architecture
//!
//! Lendadmin is the **UI-agnostic data core** of a lending platform's admin
//! console. It answers the questions the console pages ask (a page of users, one
//! user's details, the dashboard counters) and performs the one write they need,
//! a status change. The terminal client in the `lendadmin` crate is one client of
//! this library; nothing in here prints or parses arguments.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (the lendadmin binary)                           │
//! │  - Parses arguments, renders tables, handles exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Async facade, one simulated latency per operation        │
//! │  - Validates queries before waiting                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - filter -> sort -> paginate, lookups, status, stats       │
//! │  - Plain functions over a RecordStore                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, InMemoryStore, dataset sources        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Listing Pipeline
//!
//! A listing request carries its own page, page size, filter criteria and sort.
//! The facade never remembers them between calls:
//!
//! ```text
//! UserQuery { page, page_size, filter, sort }
//!     -> store.all()          load order
//!     -> filter::apply        ordered subset
//!     -> sort::apply          stable, one column
//!     -> paginate::apply      items + { current_page, page_size, total_items, total_pages }
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests per module against
//!    [`StoreFixture`](store::memory::fixtures::StoreFixture) stores.
//! 2. **API**: `#[tokio::test]` with paused time for latency and cancellation,
//!    plus a multi-threaded reader/writer check.
//! 3. **CLI**: end-to-end runs of the binary in the `lendadmin` crate.
//!
//! ## Module Overview
//!
//! - [`api`]: the async facade
//! - [`commands`]: listing pipeline and the other operations
//! - [`store`]: storage abstraction, in-memory store, dataset sources
//! - [`model`]: `User`, `UserStatus`, sub-records, `UserStats`
//! - [`auth`]: the persisted operator session
//! - [`config`]: configuration keys and defaults
//! - [`init`]: data directory, config loading and context assembly
//! - [`error`]: error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
