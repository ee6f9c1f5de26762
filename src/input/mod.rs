//! Reading documents from files and stdin.

mod reader;

pub use reader::{InputReader, SourceDocument};
