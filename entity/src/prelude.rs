pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
