use super::*;

/// Tests updating only the description.
///
/// Verifies that absent fields keep their stored values and that the server
/// managed creation timestamp is never touched.
///
/// Expected: Ok with description changed and everything else unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::days(3);
    let survey = factory::survey::SurveyFactory::new(db)
        .title("Original")
        .description(Some("Old".to_string()))
        .created_at(created_at)
        .build()
        .await?;

    let updated = SurveyRepository::new(db)
        .update(
            survey.id,
            UpdateSurveyParam {
                description: Some("Nueva".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.description.as_deref(), Some("Nueva"));
    assert_eq!(updated.created_at, created_at);
    assert!(updated.active);

    Ok(())
}

/// Tests deactivating a survey.
///
/// Expected: Ok with active set to false
#[tokio::test]
async fn updates_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    let updated = SurveyRepository::new(db)
        .update(
            survey.id,
            UpdateSurveyParam {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated.active);

    let stored = entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests that an empty update leaves the row as stored.
///
/// Expected: Ok with the unchanged survey
#[tokio::test]
async fn empty_update_returns_stored_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    let updated = SurveyRepository::new(db)
        .update(survey.id, UpdateSurveyParam::default())
        .await?;

    assert_eq!(updated, survey);

    Ok(())
}

/// Tests updating a survey that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SurveyRepository::new(db)
        .update(
            999,
            UpdateSurveyParam {
                title: Some("X".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
