use super::*;

/// Tests fetching an existing survey.
///
/// Expected: Ok(Some) with matching survey
#[tokio::test]
async fn returns_survey_when_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    let result = SurveyRepository::new(db).get_by_id(survey.id).await?;

    assert_eq!(result, Some(survey));

    Ok(())
}

/// Tests fetching a survey that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SurveyRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}

/// Tests the existence check for a stored survey.
///
/// Expected: true
#[tokio::test]
async fn exists_for_stored_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    assert!(SurveyRepository::new(db).exists(survey.id).await?);

    Ok(())
}
