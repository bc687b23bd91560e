//! Styles for the lendadmin CLI.
//!
//! Renderers never pick colors directly. They ask for a semantic style (a
//! header, a muted label, a status badge) and this module maps it to a
//! `console::Style`. `console` drops the escape codes on its own when stdout is
//! not a terminal, so piped output and the e2e tests see plain text.
//!
//! Status colors follow the console's badges: Active green, Inactive grey,
//! Pending yellow, Blacklisted red.

use console::Style;
use lendadminapp::model::UserStatus;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn header() -> Style {
    Style::new().color256(244).bold()
}

pub fn muted() -> Style {
    Style::new().color256(244)
}

pub fn time() -> Style {
    muted().italic()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}

pub fn current_page() -> Style {
    Style::new().black().on_color256(45).bold()
}

pub fn stat_value() -> Style {
    Style::new().color256(33).bold()
}

pub fn status(status: UserStatus) -> Style {
    match status {
        UserStatus::Active => Style::new().green(),
        UserStatus::Inactive => Style::new().color256(246),
        UserStatus::Pending => Style::new().yellow(),
        UserStatus::Blacklisted => Style::new().red().bold(),
    }
}
