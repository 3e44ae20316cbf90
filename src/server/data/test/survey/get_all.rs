use super::*;

/// Tests listing surveys from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_surveys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surveys = SurveyRepository::new(db).get_all().await?;

    assert!(surveys.is_empty());

    Ok(())
}

/// Tests that surveys are listed in id order.
///
/// Expected: Ok with surveys ordered by ascending id
#[tokio::test]
async fn returns_surveys_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_survey(db).await?;
    let second = factory::create_survey(db).await?;
    let third = factory::create_survey(db).await?;

    let surveys = SurveyRepository::new(db).get_all().await?;

    let ids: Vec<i32> = surveys.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
