use super::*;
use chrono::{Duration, Utc};

/// Tests that comments come back newest first.
///
/// Expected: Ok with descending created_at order
#[tokio::test]
async fn orders_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let base = Utc::now();
    let oldest = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .created_at(base)
        .build()
        .await?;
    let middle = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo.get_by_review_paginated(review.review_id, 10, 0).await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, vec![newest.comment_id, middle.comment_id, oldest.comment_id]);

    Ok(())
}

/// Tests pagination with multiple pages.
///
/// Verifies chunking, a shorter last page, and that the total stays the full
/// comment count on every page.
///
/// Expected: Ok with correct pages and constant total
#[tokio::test]
async fn paginates_comments_correctly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let base = Utc::now();
    for i in 0..5 {
        factory::comment::CommentFactory::new(db, review.review_id, &user.username)
            .created_at(base - Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = CommentRepository::new(db);

    let (page1, total) = repo.get_by_review_paginated(review.review_id, 2, 0).await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    let (page2, total) = repo.get_by_review_paginated(review.review_id, 2, 1).await?;
    assert_eq!(page2.len(), 2);
    assert_eq!(total, 5);

    let (page3, total) = repo.get_by_review_paginated(review.review_id, 2, 2).await?;
    assert_eq!(page3.len(), 1);
    assert_eq!(total, 5);

    // No overlap across pages
    assert_ne!(page1[0].comment_id, page2[0].comment_id);
    assert_ne!(page2[0].comment_id, page3[0].comment_id);

    Ok(())
}

/// Tests a review with no comments.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_for_review_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, &category.slug, &user.username).await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo.get_by_review_paginated(review.review_id, 10, 0).await?;

    assert!(comments.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that another review's comments never leak into the page.
///
/// Expected: Ok with only the requested review's comments
#[tokio::test]
async fn filters_by_review_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let user = factory::user::create_user(db).await?;
    let review1 = factory::review::create_review(db, &category.slug, &user.username).await?;
    let review2 = factory::review::create_review(db, &category.slug, &user.username).await?;

    factory::comment::create_comment(db, review1.review_id, &user.username).await?;
    factory::comment::create_comment(db, review2.review_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo.get_by_review_paginated(review1.review_id, 10, 0).await?;

    assert_eq!(total, 1);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].review_id, review1.review_id);

    Ok(())
}
