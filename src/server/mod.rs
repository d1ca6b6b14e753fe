pub mod router;
pub mod routes;

pub use router::{TriviaState, trivia_router};
