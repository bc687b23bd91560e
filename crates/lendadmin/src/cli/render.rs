//! Terminal rendering.
//!
//! Every function here turns library data into a `String`; the handlers in
//! `commands.rs` decide where it goes. Column widths are measured with
//! `unicode-width` on the plain text, before any style is applied, so escape
//! codes never skew the layout.

use super::styles;
use chrono::{DateTime, Utc};
use lendadminapp::auth::AuthUser;
use lendadminapp::commands::list::UserPage;
use lendadminapp::commands::paginate::{PageLink, PageMeta};
use lendadminapp::commands::sort::{SortDirection, SortKey, SortSpec};
use lendadminapp::model::{User, UserStats};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const DATE_FORMAT: &str = "%b %d, %Y %I:%M %p";

const COLUMNS: [(SortKey, &str); 6] = [
    (SortKey::Organization, "ORGANIZATION"),
    (SortKey::Username, "USERNAME"),
    (SortKey::Email, "EMAIL"),
    (SortKey::PhoneNumber, "PHONE NUMBER"),
    (SortKey::DateJoined, "DATE JOINED"),
    (SortKey::Status, "STATUS"),
];

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn cell(user: &User, key: SortKey) -> String {
    match key {
        SortKey::Organization => user.org_name.clone(),
        SortKey::Username => user.user_name.clone(),
        SortKey::Email => user.email.clone(),
        SortKey::PhoneNumber => user.phone_number.clone(),
        SortKey::DateJoined => format_date(user.date_joined),
        SortKey::Status => user.status.to_string(),
    }
}

fn header_label(key: SortKey, label: &str, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Ascending => format!("{} ▲", label),
            SortDirection::Descending => format!("{} ▼", label),
        },
        _ => label.to_string(),
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// "3 years ago" style distance between `date` and `now`.
pub fn format_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now
        .signed_duration_since(date)
        .to_std()
        .unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

/// The users table: an id column followed by the six sortable columns. The
/// active sort column carries an arrow.
pub fn user_table(users: &[User], sort: Option<SortSpec>) -> String {
    let headers: Vec<String> = std::iter::once("ID".to_string())
        .chain(
            COLUMNS
                .iter()
                .map(|(key, label)| header_label(*key, label, sort)),
        )
        .collect();

    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|user| {
            std::iter::once(user.id.clone())
                .chain(COLUMNS.iter().map(|(key, _)| cell(user, *key)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.width());
        }
    }
    let last = headers.len() - 1;

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let text = if i == last { h.clone() } else { pad(h, widths[i]) };
            styles::header().apply_to(text).to_string()
        })
        .collect();
    out.push_str(&header_line.join(COLUMN_GAP));
    out.push('\n');

    for (user, row) in users.iter().zip(&rows) {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if i == last {
                    styles::status(user.status).apply_to(value).to_string()
                } else if i == 0 {
                    styles::muted().apply_to(pad(value, widths[i])).to_string()
                } else {
                    pad(value, widths[i])
                }
            })
            .collect();
        out.push_str(&line.join(COLUMN_GAP));
        out.push('\n');
    }
    out
}

/// "Showing 11-20 of 250   1 … 7 [8] 9 … 16   10 per page"
pub fn pager(meta: &PageMeta) -> String {
    let range = match meta.item_range() {
        Some((first, last)) => format!("Showing {}-{} of {}", first, last, meta.total_items),
        None => format!("Showing 0 of {}", meta.total_items),
    };

    let links: Vec<String> = meta
        .window()
        .into_iter()
        .map(|link| match link {
            PageLink::Page(n) if n == meta.current_page => styles::current_page()
                .apply_to(format!("[{}]", n))
                .to_string(),
            PageLink::Page(n) => n.to_string(),
            PageLink::Gap => "…".to_string(),
        })
        .collect();

    let prev = if meta.has_previous() { "‹" } else { " " };
    let next = if meta.has_next() { "›" } else { " " };
    let per_page = styles::muted().apply_to(format!("{} per page", meta.page_size));

    if links.is_empty() {
        format!("{}   {}", range, per_page)
    } else {
        format!(
            "{}   {} {} {}   {}",
            range,
            prev,
            links.join(" "),
            next,
            per_page
        )
    }
}

pub fn list_view(page: &UserPage, sort: Option<SortSpec>) -> String {
    if page.items.is_empty() {
        let message = if page.meta.total_items == 0 {
            "No users found.".to_string()
        } else {
            format!(
                "No users on page {} (last page is {}).",
                page.meta.current_page, page.meta.total_pages
            )
        };
        return format!("{}\n", styles::warning().apply_to(message));
    }
    format!("{}\n{}\n", user_table(&page.items, sort), pager(&page.meta))
}

pub fn search_view(query: &str, users: &[User]) -> String {
    if users.is_empty() {
        return format!(
            "{}\n",
            styles::warning().apply_to(format!("No users match \"{}\".", query.trim()))
        );
    }
    let noun = if users.len() == 1 { "user" } else { "users" };
    format!(
        "{}{}\n",
        user_table(users, None),
        styles::muted().apply_to(format!("{} {} found", users.len(), noun))
    )
}

fn section(out: &mut String, title: &str, fields: &[(&str, &str)]) {
    let width = fields.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    out.push('\n');
    out.push_str(&styles::title().apply_to(title).to_string());
    out.push('\n');
    for (label, value) in fields {
        let value = if value.is_empty() { "-" } else { *value };
        out.push_str(&format!(
            "  {}  {}\n",
            styles::muted().apply_to(pad(label, width)),
            value
        ));
    }
}

pub fn user_detail(user: &User, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let name = if user.personal_information.full_name.is_empty() {
        user.user_name.as_str()
    } else {
        user.personal_information.full_name.as_str()
    };

    out.push_str(&format!(
        "{}  {}  {}\n",
        styles::title().apply_to(name),
        styles::muted().apply_to(&user.id),
        styles::status(user.status).apply_to(user.status)
    ));
    out.push_str(&format!(
        "{} · {} · joined {} {}\n",
        user.org_name,
        user.user_name,
        format_date(user.date_joined),
        styles::time().apply_to(format!("({})", format_ago(user.date_joined, now)))
    ));

    let p = &user.personal_information;
    section(
        &mut out,
        "Personal Information",
        &[
            ("Full Name", p.full_name.as_str()),
            ("Phone Number", p.phone_number.as_str()),
            ("Email Address", p.email_address.as_str()),
            ("BVN", p.bvn.as_str()),
            ("Gender", p.gender.as_str()),
            ("Marital Status", p.marital_status.as_str()),
            ("Children", p.children.as_str()),
            ("Type of Residence", p.type_of_residence.as_str()),
        ],
    );

    let e = &user.education_and_employment;
    section(
        &mut out,
        "Education and Employment",
        &[
            ("Level of Education", e.level_of_education.as_str()),
            ("Employment Status", e.employment_status.as_str()),
            ("Sector of Employment", e.sector_of_employment.as_str()),
            ("Duration of Employment", e.duration_of_employment.as_str()),
            ("Office Email", e.office_email.as_str()),
            ("Monthly Income", e.monthly_income.as_str()),
            ("Loan Repayment", e.loan_repayment.as_str()),
        ],
    );

    let s = &user.socials;
    section(
        &mut out,
        "Socials",
        &[
            ("Twitter", s.twitter.as_str()),
            ("Facebook", s.facebook.as_str()),
            ("Instagram", s.instagram.as_str()),
        ],
    );

    let g = &user.guarantor;
    section(
        &mut out,
        "Guarantor",
        &[
            ("Full Name", g.full_name.as_str()),
            ("Phone Number", g.phone_number.as_str()),
            ("Email Address", g.email_address.as_str()),
            ("Relationship", g.relationship.as_str()),
        ],
    );

    let b = &user.bank_details;
    section(
        &mut out,
        "Bank Details",
        &[("Account Number", b.account_number.as_str()), ("Bank Name", b.bank_name.as_str())],
    );
    out
}

pub fn stats_cards(stats: &UserStats) -> String {
    let cards = [
        ("USERS", stats.total_users),
        ("ACTIVE USERS", stats.active_users),
        ("USERS WITH LOANS", stats.users_with_loans),
        ("USERS WITH SAVINGS", stats.users_with_savings),
    ];
    let width = cards.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    cards
        .iter()
        .map(|(label, value)| {
            format!(
                "{}  {}\n",
                styles::header().apply_to(pad(label, width)),
                styles::stat_value().apply_to(value)
            )
        })
        .collect()
}

pub fn status_changed(user: &User) -> String {
    format!(
        "{} {} ({}) is now {}\n",
        styles::success().apply_to("✓"),
        user.user_name,
        styles::muted().apply_to(&user.id),
        styles::status(user.status).apply_to(user.status)
    )
}

pub fn organizations(names: &[String]) -> String {
    names.iter().map(|name| format!("{}\n", name)).collect()
}

pub fn whoami(user: &AuthUser) -> String {
    format!(
        "{} <{}> {}\n",
        styles::title().apply_to(&user.name),
        user.email,
        styles::muted().apply_to(format!("({})", user.role))
    )
}
