//! # Command Layer
//!
//! The business logic of the console. Each operation lives in its own submodule
//! as plain functions over a [`RecordStore`](crate::store::RecordStore) and the
//! domain types; nothing here sleeps, prints or parses arguments. Latency is the
//! facade's job ([`crate::api`]) and presentation belongs to the UI client.
//!
//! ## Listing pipeline
//!
//! - [`filter`]: narrow users by optional criteria
//! - [`sort`]: order users by one column
//! - [`paginate`]: slice into a 1-based page with totals
//! - [`list`]: the three stages composed in that order
//!
//! ## Other operations
//!
//! - [`get`]: lookup by id
//! - [`status`]: the status mutator
//! - [`stats`]: dashboard counters
//! - [`search`]: free-text search
//! - [`organizations`]: distinct organization names
//!
//! ## Testing Strategy
//!
//! Most of the crate's tests live here, against stores built with
//! [`StoreFixture`](crate::store::memory::fixtures::StoreFixture).

pub mod filter;
pub mod get;
pub mod list;
pub mod organizations;
pub mod paginate;
pub mod search;
pub mod sort;
pub mod stats;
pub mod status;
