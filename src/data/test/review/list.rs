use super::*;

/// Tests listing reviews with live comment counts.
///
/// Verifies that each summary carries the number of comments attached to its
/// review, computed from live rows.
///
/// Expected: Ok with per-review counts
#[tokio::test]
async fn returns_summaries_with_comment_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;

    let commented = factory::review::create_review(db, &category.slug, &user.username).await?;
    let quiet = factory::review::create_review(db, &category.slug, &user.username).await?;

    factory::comment::create_comment(db, commented.review_id, &user.username).await?;
    factory::comment::create_comment(db, commented.review_id, &user.username).await?;
    factory::comment::create_comment(db, commented.review_id, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let summaries = repo.list(None).await?;

    assert_eq!(summaries.len(), 2);

    let counted = summaries
        .iter()
        .find(|s| s.review_id == commented.review_id)
        .unwrap();
    assert_eq!(counted.comment_count, 3);

    let uncounted = summaries
        .iter()
        .find(|s| s.review_id == quiet.review_id)
        .unwrap();
    assert_eq!(uncounted.comment_count, 0);

    Ok(())
}

/// Tests filtering the list by category slug.
///
/// Expected: Ok with only the matching category's reviews
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dexterity = factory::category::create_category_with_slug(db, "dexterity").await?;
    let euro = factory::category::create_category_with_slug(db, "euro game").await?;
    let user = factory::user::create_user(db).await?;

    let wanted = factory::review::create_review(db, &dexterity.slug, &user.username).await?;
    factory::review::create_review(db, &euro.slug, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let summaries = repo.list(Some("dexterity")).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].review_id, wanted.review_id);
    assert_eq!(summaries[0].category, "dexterity");

    Ok(())
}

/// Tests listing a category with no reviews.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unmatched_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::review::create_review(db, &category.slug, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let summaries = repo.list(Some("empty-slug")).await?;

    assert!(summaries.is_empty());

    Ok(())
}

/// Tests that the list projection omits nothing the list endpoint needs.
///
/// Expected: Ok with populated projection fields
#[tokio::test]
async fn carries_the_list_projection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::review::ReviewFactory::new(db, &category.slug, &user.username)
        .title("Jenga")
        .designer("Leslie Scott")
        .votes(5)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let summaries = repo.list(None).await?;

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.title, "Jenga");
    assert_eq!(summary.designer, "Leslie Scott");
    assert_eq!(summary.votes, 5);
    assert_eq!(summary.owner, user.username);
    assert!(!summary.review_img_url.is_empty());

    Ok(())
}
