use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    item_check::{entities::ItemVerdict, value_objects::CheckItemInput},
};

/// Chat client trait for calling the upstream model
#[cfg_attr(test, mockall::automock)]
pub trait ChatModelClient: Send + Sync {
    fn complete(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the item-check business logic
#[cfg_attr(test, mockall::automock)]
pub trait ItemCheckService: Send + Sync {
    fn check_item(
        &self,
        input: CheckItemInput,
    ) -> impl Future<Output = Result<ItemVerdict, CoreError>> + Send;
}
