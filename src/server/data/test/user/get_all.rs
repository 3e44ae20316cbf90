use super::*;

/// Tests listing users.
///
/// Expected: Ok with users ordered by id
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users, vec![first, second]);

    Ok(())
}

/// Tests fetching a user by id.
///
/// Expected: Some for a stored user, None otherwise
#[tokio::test]
async fn gets_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.get_by_id(user.id).await?, Some(user));
    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
