use super::*;

/// Tests getting all categories.
///
/// Verifies that every seeded category comes back with its slug and
/// description.
///
/// Expected: Ok with all categories
#[tokio::test]
async fn returns_all_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_slug(db, "dexterity").await?;
    factory::category::create_category_with_slug(db, "euro game").await?;
    factory::category::create_category_with_slug(db, "social deduction").await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 3);
    for category in &categories {
        assert!(!category.slug.is_empty());
        assert!(!category.description.is_empty());
    }

    Ok(())
}

/// Tests getting categories from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
