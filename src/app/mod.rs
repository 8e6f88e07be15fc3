use crate::domain::{Entry, PageWindow, Selection};
use std::fmt;
use std::num::IntErrorKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuState {
    Paging,
    Done(Selection),
}

#[derive(Clone, Debug)]
pub struct MenuModel {
    pub entries: Vec<Entry>,
    pub window: PageWindow,
    pub state: MenuState,
}

impl MenuModel {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            window: PageWindow::first_page(),
            state: MenuState::Paging,
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            MenuState::Paging => None,
            MenuState::Done(selection) => Some(selection),
        }
    }

    fn finish(mut self, selection: Selection) -> (Self, MenuCommand) {
        self.state = MenuState::Done(selection);
        (self, MenuCommand::Finish(selection))
    }
}

/// Rejected input, shown to the user before the page is redrawn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notice {
    InvalidVersion(String),
    InvalidOption(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVersion(raw) => write!(f, "Invalid config version: {raw}"),
            Self::InvalidOption(raw) => write!(f, "Invalid option: {raw}"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MenuCommand {
    Redraw,
    Reject(Notice),
    Finish(Selection),
}

pub fn update(model: MenuModel, input: &str) -> (MenuModel, MenuCommand) {
    if let Some(selection) = model.selection() {
        return (model, MenuCommand::Finish(selection));
    }

    let option = input.trim();
    if option.eq_ignore_ascii_case("p") {
        return previous_page(model);
    }
    if option.eq_ignore_ascii_case("n") {
        return next_page(model);
    }
    if option.eq_ignore_ascii_case("q") {
        return model.finish(Selection::NO_CHANGE);
    }

    choose_version(model, option)
}

fn previous_page(mut model: MenuModel) -> (MenuModel, MenuCommand) {
    if model.window.has_previous() {
        model.window = model.window.previous();
        tracing::debug!(first = model.window.first(), "previous page");
    }
    (model, MenuCommand::Redraw)
}

fn next_page(mut model: MenuModel) -> (MenuModel, MenuCommand) {
    if model.window.has_next(model.entries.len()) {
        model.window = model.window.next();
        tracing::debug!(first = model.window.first(), "next page");
    }
    (model, MenuCommand::Redraw)
}

fn choose_version(model: MenuModel, option: &str) -> (MenuModel, MenuCommand) {
    let version = match option.parse::<i64>() {
        Ok(version) => version,
        Err(error)
            if matches!(
                error.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            return reject(model, Notice::InvalidVersion(option.to_string()));
        }
        Err(_) => {
            return reject(model, Notice::InvalidOption(option.to_string()));
        }
    };

    let selection = usize::try_from(version)
        .ok()
        .filter(|index| model.window.contains(*index) && *index < model.entries.len())
        .and_then(|index| u32::try_from(index).ok())
        .map(Selection::new);

    match selection {
        Some(selection) => model.finish(selection),
        None => reject(model, Notice::InvalidVersion(option.to_string())),
    }
}

fn reject(model: MenuModel, notice: Notice) -> (MenuModel, MenuCommand) {
    tracing::debug!(%notice, first = model.window.first(), "input rejected");
    (model, MenuCommand::Reject(notice))
}
