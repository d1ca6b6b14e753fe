mod api;
mod trivia;

pub use api::ApiError;
pub use trivia::TriviaError;
