pub mod color;
pub mod config;
pub mod matching;
pub mod scan;
pub mod split;
