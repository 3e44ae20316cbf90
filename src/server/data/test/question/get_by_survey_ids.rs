use super::*;

/// Tests fetching questions for a set of surveys.
///
/// Expected: Ok with only the questions of the listed surveys, ordered by id
#[tokio::test]
async fn returns_questions_of_listed_surveys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_survey(db).await?;
    let second = factory::create_survey(db).await?;
    let other = factory::create_survey(db).await?;
    let q1 = factory::create_question(db, first.id).await?;
    let q2 = factory::create_question(db, second.id).await?;
    let q3 = factory::create_question(db, first.id).await?;
    factory::create_question(db, other.id).await?;

    let questions = QuestionRepository::new(db)
        .get_by_survey_ids(vec![first.id, second.id])
        .await?;

    let ids: Vec<i32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![q1.id, q2.id, q3.id]);

    Ok(())
}

/// Tests fetching questions with no survey ids.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_question_with_survey(db).await?;

    let questions = QuestionRepository::new(db).get_by_survey_ids(vec![]).await?;

    assert!(questions.is_empty());

    Ok(())
}
