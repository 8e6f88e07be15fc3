mod console;
mod history;

pub use console::*;
pub use history::*;
