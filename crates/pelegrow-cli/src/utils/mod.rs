pub mod parser;
pub mod templates;
