pub mod channels;
pub mod color;
pub mod config;
pub mod discover;
pub mod error;
pub mod template;
