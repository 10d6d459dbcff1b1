use crate::domain::model::{Number, Response, SaveReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The save capability handed to business logic.
#[async_trait]
pub trait Persistence: Send + Sync {
    async fn save(&self, value: &Number) -> Result<SaveReceipt>;
}

/// Computes a new value from the request number and persists it through the
/// capability it is given. Implementations decide what to return.
#[async_trait]
pub trait BusinessLogic: Send + Sync {
    async fn calculate_new_value_and_save(
        &self,
        number: Number,
        persistence: &dyn Persistence,
    ) -> Result<Response>;
}
