pub mod format;
pub mod lock;
pub mod parse;
