use super::*;

/// Tests deleting a survey with questions and answers.
///
/// Verifies that the survey's questions and the answers to those questions are
/// removed, while the answering user is kept.
///
/// Expected: Ok with no orphaned rows left behind
#[tokio::test]
async fn deletes_survey_with_questions_and_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (survey, question, user, _) =
        factory::helpers::create_answer_with_dependencies(db).await?;
    let second_question = factory::create_question(db, survey.id).await?;
    factory::create_answer(db, second_question.id, user.id).await?;
    factory::create_answer(db, question.id, user.id).await?;

    SurveyRepository::new(db).delete(survey.id).await?;

    assert!(entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Question::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Answer::find().count(db).await?, 0);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting one survey leaves other surveys' data intact.
///
/// Expected: Ok with the other survey, its question and its answer still present
#[tokio::test]
async fn keeps_other_surveys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _, _, _) = factory::helpers::create_answer_with_dependencies(db).await?;
    let (kept, kept_question, _, kept_answer) =
        factory::helpers::create_answer_with_dependencies(db).await?;

    SurveyRepository::new(db).delete(doomed.id).await?;

    assert!(entity::prelude::Survey::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Question::find_by_id(kept_question.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Answer::find_by_id(kept_answer.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a survey without questions.
///
/// Expected: Ok with the survey removed
#[tokio::test]
async fn deletes_survey_without_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    SurveyRepository::new(db).delete(survey.id).await?;

    assert_eq!(entity::prelude::Survey::find().count(db).await?, 0);

    Ok(())
}
