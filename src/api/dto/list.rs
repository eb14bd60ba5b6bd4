//! DTOs for listing and deleting links.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Query parameters for `GET /api/urls`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ListQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
}

/// Acknowledgement returned by `DELETE /api/urls/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
