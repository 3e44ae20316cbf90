use super::*;

/// Tests creating a user with every field.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Ana".to_string(),
            surname: "López".to_string(),
            email: "ana@x.com".to_string(),
            phone: Some("555-0101".to_string()),
            gender: Some("F".to_string()),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ana");
    assert_eq!(user.surname, "López");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.phone.as_deref(), Some("555-0101"));
    assert_eq!(user.gender.as_deref(), Some("F"));

    Ok(())
}

/// Tests creating a second user with an email already in use.
///
/// Expected: Err from the unique constraint, one user stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ana@x.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Otra".to_string(),
            surname: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: None,
            gender: None,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
