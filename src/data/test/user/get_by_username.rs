use super::*;

/// Tests fetching a user by username.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_username(db, "bainesface").await?;

    let repo = UserRepository::new(db);
    let user = repo.get_by_username("bainesface").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().username, "bainesface");

    Ok(())
}

/// Tests fetching an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.get_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
