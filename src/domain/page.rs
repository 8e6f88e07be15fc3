use crate::domain::{Entry, PageWindow};
use std::fmt::Write as _;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const COMMIT_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub const PREVIOUS_OPTION: &str = "P\tPrevious\n";
pub const NEXT_OPTION: &str = "N\tNext\n";
pub const QUIT_OPTION: &str = "Q\tQuit and reboot\n";

/// Builds the option list for one page, laid out like `show system commit`:
///
/// ```text
/// P   Previous
/// 5   2016-11-22 09:54:57 by configd
///     sixth
/// 6   2016-11-22 09:52:11 by configd
/// Q   Quit and reboot
/// ```
///
/// Indices past the end of `entries` are skipped rather than padded, and
/// `Next` is only offered while entries remain beyond the window.
pub fn render_page(entries: &[Entry], window: PageWindow, offset: UtcOffset) -> String {
    let mut menu = String::new();
    if window.has_previous() {
        menu.push_str(PREVIOUS_OPTION);
    }

    for index in window.first()..=window.last() {
        let Some(entry) = entries.get(index) else {
            break;
        };
        let _ = writeln!(
            menu,
            "{index}\t{} by {}",
            format_commit_time(entry.timestamp, offset),
            entry.user
        );
        if !entry.comment.is_empty() {
            let _ = writeln!(menu, "\t{}", entry.comment);
        }
    }

    if window.has_next(entries.len()) {
        menu.push_str(NEXT_OPTION);
    }
    menu.push_str(QUIT_OPTION);
    menu
}

pub fn format_commit_time(timestamp: i64, offset: UtcOffset) -> String {
    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|utc| utc.checked_to_offset(offset))
        .and_then(|local| local.format(COMMIT_TIME_FORMAT).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
