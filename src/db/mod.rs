//! Database module: models, schema and the actor that owns the SQLite pool.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `actor.rs`: `DbActor` and its cloneable handle
//! - `seed.rs`: optional startup fixture loading

pub mod actor;
pub mod models;
pub mod patch;
pub mod schema;
pub mod seed;

mod patch_impl;

pub use models::{DbCategory, DbQuestion};
pub use patch::{CategoryCreate, QuestionCreate, QuestionPatch, QuizFilter};
pub use schema::SQLITE_INIT;
pub use seed::{SeedData, SeedOutcome};

pub use actor::{DbActorHandle, spawn};
