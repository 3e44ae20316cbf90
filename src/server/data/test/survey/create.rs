use super::*;

/// Tests creating a survey with a description.
///
/// Expected: Ok with the survey stored using the given timestamp and flag
#[tokio::test]
async fn creates_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let repo = SurveyRepository::new(db);
    let survey = repo
        .create(
            CreateSurveyParam {
                title: "Satisfacción".to_string(),
                description: Some("Trimestral".to_string()),
            },
            created_at,
            true,
        )
        .await?;

    assert!(survey.id > 0);
    assert_eq!(survey.title, "Satisfacción");
    assert_eq!(survey.description.as_deref(), Some("Trimestral"));
    assert_eq!(survey.created_at, created_at);
    assert!(survey.active);

    let stored = entity::prelude::Survey::find_by_id(survey.id).one(db).await?;
    assert_eq!(stored, Some(survey));

    Ok(())
}

/// Tests creating a survey without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_survey_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = SurveyRepository::new(db)
        .create(
            CreateSurveyParam {
                title: "Sin descripción".to_string(),
                description: None,
            },
            Utc::now(),
            true,
        )
        .await?;

    assert!(survey.description.is_none());

    Ok(())
}

/// Tests that consecutive creates get distinct, increasing ids.
///
/// Expected: second id greater than first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SurveyRepository::new(db);
    let first = repo
        .create(
            CreateSurveyParam {
                title: "A".to_string(),
                description: None,
            },
            Utc::now(),
            true,
        )
        .await?;
    let second = repo
        .create(
            CreateSurveyParam {
                title: "B".to_string(),
                description: None,
            },
            Utc::now(),
            true,
        )
        .await?;

    assert!(second.id > first.id);
    assert_eq!(entity::prelude::Survey::find().count(db).await?, 2);

    Ok(())
}
