use super::*;

fn params(category: &str, owner: &str) -> CreateReviewParams {
    CreateReviewParams {
        owner: owner.to_string(),
        title: "Jenga".to_string(),
        review_body: "Fiddly fun for all the family".to_string(),
        designer: "Leslie Scott".to_string(),
        category: category.to_string(),
    }
}

/// Tests creating a review with server-assigned fields.
///
/// Expected: Ok with zero votes, zero comments, and a default image
#[tokio::test]
async fn creates_review_with_server_assigned_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo.create(params(&category.slug, &user.username)).await?;

    assert!(review.review_id > 0);
    assert_eq!(review.votes, 0);
    assert_eq!(review.comment_count, 0);
    assert_eq!(review.title, "Jenga");
    assert!(!review.review_img_url.is_empty());

    Ok(())
}

/// Tests that an unknown owner surfaces as a foreign-key violation.
///
/// The service layer maps this onto the external `username` name.
///
/// Expected: Err with SqlErr::ForeignKeyConstraintViolation
#[tokio::test]
async fn unknown_owner_violates_foreign_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = ReviewRepository::new(db);
    let err = repo
        .create(params(&category.slug, "not-a-user"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
