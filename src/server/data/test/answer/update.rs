use super::*;

/// Tests changing the text of an answer.
///
/// Expected: Ok with new text and original timestamp
#[tokio::test]
async fn updates_text_keeps_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_survey(db).await?;
    let user = factory::create_user(db).await?;
    let recorded_at = Utc::now() - Duration::hours(2);
    let answer = factory::answer::AnswerFactory::new(db, question.id, user.id)
        .recorded_at(recorded_at)
        .build()
        .await?;

    let updated = AnswerRepository::new(db)
        .update(
            answer.id,
            UpdateAnswerParam {
                text: Some("No".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.text, "No");
    assert_eq!(updated.recorded_at, recorded_at);

    Ok(())
}

/// Tests an update with no text.
///
/// Expected: Ok with the stored answer unchanged
#[tokio::test]
async fn empty_update_returns_stored_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, answer) = factory::helpers::create_answer_with_dependencies(db).await?;

    let updated = AnswerRepository::new(db)
        .update(answer.id, UpdateAnswerParam::default())
        .await?;

    assert_eq!(updated, answer);

    Ok(())
}

/// Tests updating an answer that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AnswerRepository::new(db)
        .update(
            999,
            UpdateAnswerParam {
                text: Some("No".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
