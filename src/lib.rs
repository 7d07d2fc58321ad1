pub mod analysis;
pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod lexicon;
pub mod logging;
pub mod models;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
pub use lexicon::Lexicon;
