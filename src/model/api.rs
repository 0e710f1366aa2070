use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body shared by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}
