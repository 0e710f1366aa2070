use super::*;

/// Tests getting all users.
///
/// Expected: Ok with all seeded users
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    for user in &users {
        assert!(!user.username.is_empty());
        assert!(!user.name.is_empty());
        assert!(!user.avatar_url.is_empty());
    }

    Ok(())
}
