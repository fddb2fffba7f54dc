use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckItemRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "item_name must be between 1 and 200 characters"
    ))]
    #[schema(example = "Laptop")]
    pub item_name: String,
}
