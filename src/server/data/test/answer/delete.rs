use super::*;

/// Tests deleting a single answer.
///
/// Expected: Ok with only that answer removed
#[tokio::test]
async fn deletes_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question, user, answer) =
        factory::helpers::create_answer_with_dependencies(db).await?;
    let kept = factory::create_answer(db, question.id, user.id).await?;

    let repo = AnswerRepository::new(db);
    repo.delete(answer.id).await?;

    assert!(!repo.exists(answer.id).await?);
    assert!(repo.exists(kept.id).await?);
    assert_eq!(entity::prelude::Answer::find().count(db).await?, 1);

    Ok(())
}
