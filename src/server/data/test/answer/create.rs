use super::*;

/// Tests recording an answer.
///
/// Expected: Ok with answer linked to question and user
#[tokio::test]
async fn creates_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_survey(db).await?;
    let user = factory::create_user(db).await?;
    let recorded_at = Utc::now();

    let answer = AnswerRepository::new(db)
        .create(
            CreateAnswerParam {
                question_id: question.id,
                user_id: user.id,
                text: "Sí".to_string(),
            },
            recorded_at,
        )
        .await?;

    assert!(answer.id > 0);
    assert_eq!(answer.question_id, question.id);
    assert_eq!(answer.user_id, user.id);
    assert_eq!(answer.text, "Sí");
    assert_eq!(answer.recorded_at, recorded_at);

    Ok(())
}

/// Tests recording an answer by a user that does not exist.
///
/// Expected: Err from the foreign key, nothing stored
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_survey(db).await?;

    let result = AnswerRepository::new(db)
        .create(
            CreateAnswerParam {
                question_id: question.id,
                user_id: 999,
                text: "Sí".to_string(),
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Answer::find().count(db).await?, 0);

    Ok(())
}
