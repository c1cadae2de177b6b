pub mod conversion;
pub mod formats;
pub mod parse;
