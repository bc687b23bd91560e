//! # User Listing
//!
//! The read path behind the users table. A [`UserQuery`] carries everything the
//! caller owns (page, page size, filter criteria, sort) and [`run`] composes the
//! three stages in a fixed order:
//!
//! ```text
//! store.all() -> filter::apply -> sort::apply -> paginate::apply
//! ```
//!
//! Filtering happens before sorting so the sort never sees rows it would drop,
//! and pagination comes last so page totals describe the filtered set.

use super::filter::{self, UserFilter};
use super::paginate::{self, Page};
use super::sort::{self, SortSpec};
use crate::error::{AdminError, Result};
use crate::model::User;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

pub type UserPage = Page<User>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(default)]
    pub filter: UserFilter,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: UserFilter::default(),
            sort: None,
        }
    }
}

impl UserQuery {
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn filter(mut self, filter: UserFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Reject the inputs the paginator does not accept.
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(AdminError::Validation(
                "Page numbers start at 1".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(AdminError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn run<S: RecordStore + ?Sized>(store: &S, query: &UserQuery) -> Result<UserPage> {
    query.validate()?;

    let users = store.all();
    let loaded = users.len();

    let users = filter::apply(users, &query.filter);
    tracing::debug!(loaded, matched = users.len(), "filtered users");

    let users = sort::apply(users, query.sort);
    if let Some(spec) = query.sort {
        tracing::debug!(key = %spec.key, direction = ?spec.direction, "sorted users");
    }

    let page = paginate::apply(users, query.page, query.page_size);
    tracing::debug!(
        page = page.meta.current_page,
        total_pages = page.meta.total_pages,
        items = page.items.len(),
        "paginated users"
    );
    Ok(page)
}
