pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod utils;

mod patches;

pub use error::{ApiError, TriviaError};
