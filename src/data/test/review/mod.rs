use crate::data::review::ReviewRepository;
use crate::model::review::CreateReviewParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod increment_votes;
mod list;
