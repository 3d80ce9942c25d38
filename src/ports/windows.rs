use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::WindowId;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait WindowsPort {
    async fn focus(&self, window_id: WindowId) -> Result<(), MessagingError>;
}
