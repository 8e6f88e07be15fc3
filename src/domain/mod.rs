mod page;
mod parse;
mod types;

pub use page::*;
pub use parse::*;
pub use types::*;
