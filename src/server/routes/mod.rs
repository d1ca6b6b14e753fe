pub mod categories;
pub mod extract;
pub mod questions;
pub mod quizzes;
