pub mod convert;
pub mod parse;
pub mod render;
