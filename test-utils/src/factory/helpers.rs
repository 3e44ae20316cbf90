//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for default titles, names and emails so repeated factory calls never
/// collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a survey with a single question.
///
/// # Returns
/// - `Ok((survey, question))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_question_with_survey(
    db: &DatabaseConnection,
) -> Result<(entity::survey::Model, entity::question::Model), DbErr> {
    let survey = crate::factory::survey::create_survey(db).await?;
    let question = crate::factory::question::create_question(db, survey.id).await?;

    Ok((survey, question))
}

/// Creates a survey, a question in it, a user, and that user's answer to the question.
///
/// # Returns
/// - `Ok((survey, question, user, answer))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_answer_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::survey::Model,
        entity::question::Model,
        entity::user::Model,
        entity::answer::Model,
    ),
    DbErr,
> {
    let (survey, question) = create_question_with_survey(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let answer = crate::factory::answer::create_answer(db, question.id, user.id).await?;

    Ok((survey, question, user, answer))
}
