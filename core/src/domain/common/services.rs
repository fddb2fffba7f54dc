use std::sync::Arc;

/// Carrier for the service implementations, generic over the outbound ports.
///
/// The usage-log repository is optional: without a configured log store the
/// service answers requests but records nothing.
pub struct Service<C, U> {
    pub chat_client: C,
    pub usage_log_repository: Option<Arc<U>>,
}

impl<C, U> Service<C, U> {
    pub fn new(chat_client: C, usage_log_repository: Option<U>) -> Self {
        Self {
            chat_client,
            usage_log_repository: usage_log_repository.map(Arc::new),
        }
    }
}

impl<C: Clone, U> Clone for Service<C, U> {
    fn clone(&self) -> Self {
        Self {
            chat_client: self.chat_client.clone(),
            usage_log_repository: self.usage_log_repository.clone(),
        }
    }
}
