use super::*;

/// Tests applying a relative vote change.
///
/// Expected: Ok(true) and the stored count moves by the delta
#[tokio::test]
async fn increments_and_decrements_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::ReviewFactory::new(db, &category.slug, &user.username)
        .votes(5)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.increment_votes(review.review_id, 7).await?);
    assert_eq!(repo.get_by_id(review.review_id).await?.unwrap().votes, 12);

    // Round trip back to the original count
    assert!(repo.increment_votes(review.review_id, -7).await?);
    assert_eq!(repo.get_by_id(review.review_id).await?.unwrap().votes, 5);

    Ok(())
}

/// Tests that votes may go negative.
///
/// Expected: Ok with a negative stored count
#[tokio::test]
async fn votes_may_go_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let repo = ReviewRepository::new(db);
    repo.increment_votes(review.review_id, -3).await?;

    assert_eq!(repo.get_by_id(review.review_id).await?.unwrap().votes, -3);

    Ok(())
}

/// Tests incrementing an unknown review.
///
/// Expected: Ok(false), nothing updated
#[tokio::test]
async fn returns_false_for_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);

    assert!(!repo.increment_votes(9999, 1).await?);

    Ok(())
}
