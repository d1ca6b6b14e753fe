mod common;

use common::{TempDb, add_category, add_question};
use std::path::Path;
use trivia::TriviaError;
use trivia::db::{QuestionCreate, QuestionPatch, QuizFilter, SeedData, SeedOutcome};

#[tokio::test]
async fn test_question_db_actor_baseline() {
    let tmp = TempDb::new("db-baseline");
    let db = tmp.spawn().await;

    // 1. Fresh store is empty
    assert!(db.list_questions().await.unwrap().is_empty());
    assert!(db.list_categories().await.unwrap().is_empty());
    assert_eq!(db.count_questions().await.unwrap(), 0);

    // 2. Create a category and a question
    add_category(&db, 1, "Science").await;
    let create = QuestionCreate {
        question: "What is the heaviest organ in the human body?".to_string(),
        answer: "The Liver".to_string(),
        difficulty: 4,
        category: Some("1".to_string()),
    };
    let created = db.create_question(create.clone()).await.unwrap();
    assert!(created.id > 0, "Expected a valid ID after creation");
    assert_eq!(created.question, create.question);
    assert_eq!(created.answer, create.answer);
    assert_eq!(created.difficulty, 4);
    assert_eq!(created.category.as_deref(), Some("1"));

    // 3. It is retrievable and counted
    let fetched = db.get_question(created.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));
    assert_eq!(db.count_questions().await.unwrap(), 1);

    let category = db.get_category(1).await.unwrap().expect("category 1");
    assert_eq!(category.kind, "Science");
    assert!(db.get_category(2).await.unwrap().is_none());

    // 4. Patch only the category
    db.patch_question(QuestionPatch::category(created.id, Some("2".to_string())))
        .await
        .unwrap();
    let patched = db.get_question(created.id).await.unwrap().unwrap();
    assert_eq!(patched.category.as_deref(), Some("2"));
    assert_eq!(patched.question, created.question);
    assert_eq!(patched.answer, created.answer);
    assert_eq!(patched.difficulty, created.difficulty);

    // 5. Clearing the category stores NULL; other fields stay
    db.patch_question(QuestionPatch::category(created.id, None))
        .await
        .unwrap();
    let cleared = db.get_question(created.id).await.unwrap().unwrap();
    assert_eq!(cleared.category, None);

    // 6. Re-assigning keeps the other fields
    db.patch_question(QuestionPatch::category(created.id, Some("5".to_string())))
        .await
        .unwrap();
    let reassigned = db.get_question(created.id).await.unwrap().unwrap();
    assert_eq!(reassigned.category.as_deref(), Some("5"));
    assert_eq!(reassigned.difficulty, created.difficulty);

    // 7. Patching a missing row reports QuestionNotFound
    let err = db
        .patch_question(QuestionPatch::category(999_999, Some("2".to_string())))
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::QuestionNotFound(999_999)));

    // 8. Delete returns the removed row; a second delete is QuestionNotFound
    let deleted = db.delete_question(created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(db.get_question(created.id).await.unwrap().is_none());
    assert_eq!(db.count_questions().await.unwrap(), 0);

    let err = db.delete_question(created.id).await.unwrap_err();
    assert!(matches!(err, TriviaError::QuestionNotFound(id) if id == created.id));
}

#[tokio::test]
async fn test_search_is_case_insensitive_literal_substring() {
    let tmp = TempDb::new("db-search");
    let db = tmp.spawn().await;

    let a = add_question(&db, "What is the Title of this song?", "1").await;
    let b = add_question(&db, "title case or TITLE case?", "1").await;
    let _c = add_question(&db, "Nothing to see here", "2").await;
    let d = add_question(&db, "Are you 100% sure?", "2").await;

    let ids = |rows: Vec<trivia::db::DbQuestion>| rows.into_iter().map(|q| q.id).collect::<Vec<_>>();

    assert_eq!(ids(db.search_questions("tItLe".to_string()).await.unwrap()), vec![a, b]);
    assert_eq!(ids(db.search_questions("%".to_string()).await.unwrap()), vec![d]);
    assert!(db.search_questions("_".to_string()).await.unwrap().is_empty());
    assert!(db.search_questions("zebra".to_string()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let tmp = TempDb::new("db-search-unicode");
    let db = tmp.spawn().await;

    let painted = add_question(&db, "Who painted ÉTOILE BLEUE?", "2").await;
    let city = add_question(&db, "Which city is called Zürich in German?", "3").await;
    add_question(&db, "Plain ascii question", "1").await;

    let found: Vec<i64> = db
        .search_questions("étoile".to_string())
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(found, vec![painted]);

    let found: Vec<i64> = db
        .search_questions("ZÜRICH".to_string())
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(found, vec![city]);
}

#[tokio::test]
async fn test_category_and_quiz_filters() {
    let tmp = TempDb::new("db-quiz");
    let db = tmp.spawn().await;

    let q1 = add_question(&db, "q1", "2").await;
    let q2 = add_question(&db, "q2", "2").await;
    let q3 = add_question(&db, "q3", "2").await;
    let q4 = add_question(&db, "q4", "1").await;

    let by_category: Vec<i64> = db
        .list_questions_by_category("2".to_string())
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(by_category, vec![q1, q2, q3]);

    let only_third = db
        .list_quiz_candidates(QuizFilter {
            exclude: vec![q1, q2],
            category: Some("2".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(only_third.len(), 1);
    assert_eq!(only_third[0].id, q3);

    let any_category = db
        .list_quiz_candidates(QuizFilter {
            exclude: vec![q4],
            category: None,
        })
        .await
        .unwrap();
    assert_eq!(
        any_category.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![q1, q2, q3]
    );

    let exhausted = db
        .list_quiz_candidates(QuizFilter {
            exclude: vec![q1, q2, q3, q4],
            category: None,
        })
        .await
        .unwrap();
    assert!(exhausted.is_empty());
}

#[tokio::test]
async fn test_seed_applies_once() {
    let tmp = TempDb::new("db-seed");
    let db = tmp.spawn().await;

    let seed_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("seed/trivia.json");
    let seed = SeedData::load(&seed_path).await.unwrap();
    let expected_categories = seed.categories.len();
    let expected_questions = seed.questions.len();

    let outcome = seed.clone().apply(&db).await.unwrap();
    assert_eq!(
        outcome,
        SeedOutcome::Applied {
            categories: expected_categories,
            questions: expected_questions,
        }
    );
    assert_eq!(db.list_categories().await.unwrap().len(), expected_categories);
    assert_eq!(
        db.count_questions().await.unwrap(),
        i64::try_from(expected_questions).unwrap()
    );

    let outcome = seed.apply(&db).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Skipped);
    assert_eq!(
        db.count_questions().await.unwrap(),
        i64::try_from(expected_questions).unwrap()
    );
}

#[tokio::test]
async fn test_seed_load_reports_missing_file() {
    let err = SeedData::load(Path::new("/nonexistent/trivia-seed.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::IoError(_)));
}
