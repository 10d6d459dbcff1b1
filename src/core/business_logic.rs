use crate::core::{BusinessLogic, Number, Persistence, Response, Result};
use async_trait::async_trait;

/// Saves the request number as-is and answers with the save receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughCalculator;

impl PassThroughCalculator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BusinessLogic for PassThroughCalculator {
    async fn calculate_new_value_and_save(
        &self,
        number: Number,
        persistence: &dyn Persistence,
    ) -> Result<Response> {
        tracing::debug!(%number, "Calculating new value");
        let receipt = persistence.save(&number).await?;
        Ok(Response::from(receipt))
    }
}
