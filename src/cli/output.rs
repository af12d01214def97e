//! Colored terminal output helpers.
//!
//! All status output goes to stderr so that stdout carries nothing but
//! the password printed by `find` (and tables printed by `list`).

use chrono::DateTime;
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Login;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of logins (URL, Username, Last used).  Passwords are
/// never shown.
pub fn print_logins_table(logins: &[Login]) {
    if logins.is_empty() {
        info("No logins in the store yet.");
        tip("Run `ff-pwd import --file logins.csv` to import a Firefox export.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["URL", "Username", "Last used"]);

    for login in logins {
        let username = if login.username.is_empty() {
            "(none)".to_string()
        } else {
            login.username.clone()
        };
        table.add_row(vec![
            login.url.clone(),
            username,
            format_firefox_time(&login.time_last_used),
        ]);
    }

    println!("{table}");
}

/// Render a Firefox timestamp (milliseconds since the Unix epoch).
///
/// Values that are not a valid millisecond count are shown verbatim.
pub fn format_firefox_time(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(
            || raw.to_string(),
            |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}
