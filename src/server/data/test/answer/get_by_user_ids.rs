use super::*;

/// Tests fetching the answers of specific users.
///
/// Expected: Ok with only the listed users' answers
#[tokio::test]
async fn returns_answers_of_listed_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question, user, first) = factory::helpers::create_answer_with_dependencies(db).await?;
    let second = factory::create_answer(db, question.id, user.id).await?;
    let other_user = factory::create_user(db).await?;
    factory::create_answer(db, question.id, other_user.id).await?;

    let answers = AnswerRepository::new(db)
        .get_by_user_ids(vec![user.id])
        .await?;

    let ids: Vec<i32> = answers.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests fetching answers with no user ids.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_answer_with_dependencies(db).await?;

    let answers = AnswerRepository::new(db).get_by_user_ids(vec![]).await?;

    assert!(answers.is_empty());

    Ok(())
}
