use crate::app::{MenuModel, Notice};
use crate::domain::render_page;
use time::UtcOffset;

pub const BANNER: &str = "Configuration Recovery\n======================\n\n";
pub const PROMPT: &str = "Please choose option: ";
pub const CONTINUE_PROMPT: &str = "Press any key to continue ...";

/// Full screen for one redraw: banner, the current page, then a blank line
/// before the prompt.
pub fn render_screen(model: &MenuModel, offset: UtcOffset) -> String {
    let page = render_page(&model.entries, model.window, offset);
    format!("{BANNER}{page}\n")
}

pub fn render_notice(notice: &Notice) -> String {
    format!("{notice}\n")
}
