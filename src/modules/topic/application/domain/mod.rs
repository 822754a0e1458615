pub mod entities;
pub mod reply_parser;
