use super::*;

/// Tests creating a comment with server-assigned fields.
///
/// Expected: Ok with zero votes and a fresh id
#[tokio::test]
async fn creates_comment_with_server_assigned_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            review_id: review.review_id,
            author: user.username.clone(),
            body: "I loved this game too!".to_string(),
        })
        .await?;

    assert!(comment.comment_id > 0);
    assert_eq!(comment.votes, 0);
    assert_eq!(comment.review_id, review.review_id);
    assert_eq!(comment.author, user.username);
    assert_eq!(comment.body, "I loved this game too!");

    Ok(())
}

/// Tests that an unknown author surfaces as a foreign-key violation.
///
/// The service layer maps this onto the external `username` name.
///
/// Expected: Err with SqlErr::ForeignKeyConstraintViolation
#[tokio::test]
async fn unknown_author_violates_foreign_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let repo = CommentRepository::new(db);
    let err = repo
        .create(CreateCommentParams {
            review_id: review.review_id,
            author: "not-a-user".to_string(),
            body: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
