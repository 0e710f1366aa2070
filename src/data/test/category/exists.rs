use super::*;

/// Tests existence check for a seeded slug.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_existing_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_slug(db, "dexterity").await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.exists("dexterity").await?);

    Ok(())
}

/// Tests existence check for an unknown slug.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_slug(db, "dexterity").await?;

    let repo = CategoryRepository::new(db);
    assert!(!repo.exists("trivia").await?);

    Ok(())
}
