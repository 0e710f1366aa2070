use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(true), then the comment is gone
#[tokio::test]
async fn deletes_existing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;
    let comment = factory::comment::create_comment(db, review.review_id, &user.username).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.comment_id).await?);
    assert!(repo.get_by_id(comment.comment_id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown comment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(!repo.delete(9999).await?);

    Ok(())
}
