use super::*;

/// Tests changing the text of a question.
///
/// Expected: Ok with new text and the same survey
#[tokio::test]
async fn updates_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (survey, question) = factory::helpers::create_question_with_survey(db).await?;

    let updated = QuestionRepository::new(db)
        .update(
            question.id,
            UpdateQuestionParam {
                text: Some("¿Texto nuevo?".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.text, "¿Texto nuevo?");
    assert_eq!(updated.survey_id, survey.id);

    Ok(())
}

/// Tests moving a question to another survey.
///
/// Expected: Ok with the new survey id
#[tokio::test]
async fn moves_question_to_other_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_survey(db).await?;
    let target = factory::create_survey(db).await?;

    let updated = QuestionRepository::new(db)
        .update(
            question.id,
            UpdateQuestionParam {
                survey_id: Some(target.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.survey_id, target.id);
    assert_eq!(updated.text, question.text);

    Ok(())
}

/// Tests updating a question that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = QuestionRepository::new(db)
        .update(999, UpdateQuestionParam::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
