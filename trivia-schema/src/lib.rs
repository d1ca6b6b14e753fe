//! Wire types for the trivia HTTP API.
//!
//! Everything that crosses the HTTP boundary as JSON lives here: the formatted
//! question, the category map, per-endpoint request bodies and response bodies.

pub mod question;
pub mod requests;
pub mod responses;

pub use question::{CategoryMap, QuestionView};
pub use requests::{
    CreateQuestionRequest, NewQuestion, QuizCategory, QuizRequest, SearchRequest,
    UpdateCategoryRequest,
};
pub use responses::{
    CategoriesResponse, CategoryQuestionsResponse, ErrorResponse, QuestionCreatedResponse,
    QuestionDeletedResponse, QuestionUpdatedResponse, QuestionsPageResponse, QuizQuestion,
    QuizResponse, SearchResponse,
};
