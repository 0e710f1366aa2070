use crate::data::comment::CommentRepository;
use crate::model::comment::CreateCommentParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_review_paginated;
mod increment_votes;
