use crate::app::{MenuCommand, MenuModel, update};
use crate::domain::Selection;
use crate::ui::{CONTINUE_PROMPT, PROMPT, render_notice, render_screen};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use time::UtcOffset;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented terminal: the menu is drawn as plain text and answered with
/// a line of input, so it works on serial consoles as well as local VTs.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Shows `prompt` and reads one line. `None` means input is closed.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        // Invalid UTF-8 is decoded lossily and reaches `update` like any other text.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Redraws the menu and feeds input lines to [`update`] until a choice is
/// made. Closed input counts as quit.
pub fn run_menu<R: BufRead, W: Write>(
    mut model: MenuModel,
    console: &mut Console<R, W>,
    offset: UtcOffset,
) -> Result<Selection, ConsoleError> {
    loop {
        console.clear_screen()?;
        console.write_text(&render_screen(&model, offset))?;

        let Some(line) = console.prompt(PROMPT)? else {
            tracing::warn!("input closed before a choice was made; keeping current config");
            console.write_text("\n")?;
            return Ok(Selection::NO_CHANGE);
        };

        let (next, command) = update(model, &line);
        model = next;
        match command {
            MenuCommand::Redraw => {}
            MenuCommand::Reject(notice) => {
                console.write_text(&render_notice(&notice))?;
                if console.prompt(CONTINUE_PROMPT)?.is_none() {
                    tracing::warn!("input closed at notice; keeping current config");
                    console.write_text("\n")?;
                    return Ok(Selection::NO_CHANGE);
                }
            }
            MenuCommand::Finish(selection) => {
                if let Some(entry) = usize::try_from(selection.get())
                    .ok()
                    .filter(|_| !selection.is_no_change())
                    .and_then(|index| model.entries.get(index))
                {
                    tracing::info!(
                        selection = selection.get(),
                        user = %entry.user,
                        via = %entry.via,
                        "config version selected"
                    );
                } else {
                    tracing::info!("no config change selected");
                }
                return Ok(selection);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use std::io::Cursor;

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|index| Entry {
                timestamp: 1479808707 - index as i64 * 60,
                user: format!("user{index}"),
                via: "cli".to_string(),
                comment: String::new(),
            })
            .collect()
    }

    fn drive(count: usize, input: &str) -> (Selection, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let selection =
            run_menu(MenuModel::new(entries(count)), &mut console, UtcOffset::UTC).expect("run");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        (selection, output)
    }

    #[test]
    fn quit_returns_no_change() {
        let (selection, output) = drive(3, "q\n");
        assert_eq!(selection, Selection::NO_CHANGE);
        assert!(output.contains("Configuration Recovery"));
        assert!(output.contains(PROMPT));
    }

    #[test]
    fn pages_forward_then_selects() {
        let (selection, output) = drive(12, "n\n7\n");
        assert_eq!(selection, Selection::new(7));
        assert!(output.contains("7\t"));
        assert!(output.contains("P\tPrevious\n"));
    }

    #[test]
    fn invalid_version_is_reported_and_menu_redrawn() {
        let (selection, output) = drive(12, "9\n\n2\n");
        assert_eq!(selection, Selection::new(2));
        assert!(output.contains("Invalid config version: 9\n"));
        assert!(output.contains(CONTINUE_PROMPT));
        assert_eq!(output.matches("Configuration Recovery").count(), 2);
    }

    #[test]
    fn invalid_option_is_reported() {
        let (selection, output) = drive(2, "what\n\nQ\n");
        assert_eq!(selection, Selection::NO_CHANGE);
        assert!(output.contains("Invalid option: what\n"));
    }

    #[test]
    fn closed_input_keeps_current_config() {
        let (selection, _) = drive(5, "");
        assert_eq!(selection, Selection::NO_CHANGE);

        let (selection, _) = drive(5, "nope\n");
        assert_eq!(selection, Selection::NO_CHANGE);
    }

    #[test]
    fn each_redraw_clears_the_screen() {
        let (_, output) = drive(12, "n\np\nq\n");
        assert_eq!(output.matches("\x1b[2J").count(), 3);
    }

    #[test]
    fn prompt_strips_line_ending() {
        let mut console = Console::new(Cursor::new(b"3\r\n".to_vec()), Vec::new());
        let line = console.prompt(PROMPT).expect("prompt");
        assert_eq!(line.as_deref(), Some("3"));
    }

    #[test]
    fn non_utf8_input_is_an_invalid_option() {
        let mut console = Console::new(Cursor::new(b"\xff\n\n0\n".to_vec()), Vec::new());
        let selection =
            run_menu(MenuModel::new(entries(1)), &mut console, UtcOffset::UTC).expect("run");
        assert_eq!(selection, Selection::NO_CHANGE);

        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert!(output.contains("Invalid option: \u{fffd}\n"), "{output}");
        assert_eq!(output.matches("Configuration Recovery").count(), 2);
    }
}
