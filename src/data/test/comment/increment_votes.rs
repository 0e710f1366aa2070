use super::*;

/// Tests applying a negative vote change.
///
/// Expected: Ok(true) and 16 votes minus 15 leaves 1
#[tokio::test]
async fn applies_negative_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;
    let comment = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .votes(16)
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    assert!(repo.increment_votes(comment.comment_id, -15).await?);
    assert_eq!(repo.get_by_id(comment.comment_id).await?.unwrap().votes, 1);

    Ok(())
}

/// Tests incrementing an unknown comment.
///
/// Expected: Ok(false), nothing updated
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(!repo.increment_votes(9999, 1).await?);

    Ok(())
}
