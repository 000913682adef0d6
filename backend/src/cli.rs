use clap::Parser;

/// Print the admin-authored daily tip for a date, if there is one.
///
/// Nothing is printed when the scraper has to run. Logs go to stderr.
///
/// ```sh
/// ADMIN_TIP=$(get_admin_tip 2025-01-15)
/// ```
#[derive(Parser, Debug)]
#[command(name = "get_admin_tip", version, about)]
pub struct Cli {
    /// Newsletter date, formatted YYYY-MM-DD
    pub date: String,
}
