use super::*;

/// Tests deleting a question with answers.
///
/// Expected: Ok with the question and its answers removed, the survey kept
#[tokio::test]
async fn deletes_question_and_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (survey, question, user, _) =
        factory::helpers::create_answer_with_dependencies(db).await?;
    let sibling = factory::create_question(db, survey.id).await?;
    let kept_answer = factory::create_answer(db, sibling.id, user.id).await?;

    QuestionRepository::new(db).delete(question.id).await?;

    assert!(entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Answer::find().count(db).await?, 1);
    assert!(entity::prelude::Answer::find_by_id(kept_answer.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
