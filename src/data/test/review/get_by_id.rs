use super::*;

/// Tests fetching a review by id with its comment count.
///
/// Expected: Ok(Some) with full fields and live count
#[tokio::test]
async fn finds_review_with_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let created = factory::review::ReviewFactory::new(db, &category.slug, &user.username)
        .review_body("A classic tower of tension.")
        .build()
        .await?;
    factory::comment::create_comment(db, created.review_id, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let review = repo.get_by_id(created.review_id).await?.unwrap();

    assert_eq!(review.review_id, created.review_id);
    assert_eq!(review.review_body, "A classic tower of tension.");
    assert_eq!(review.comment_count, 1);

    Ok(())
}

/// Tests fetching an unknown review id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let review = repo.get_by_id(9999).await?;

    assert!(review.is_none());

    Ok(())
}
