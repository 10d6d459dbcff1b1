use crate::core::{Number, Persistence, Result, SaveReceipt};
use async_trait::async_trait;

pub const DEFAULT_TABLE: &str = "numbers";

/// Stand-in for a DynamoDB write. Never touches the network and never fails.
#[derive(Debug, Clone)]
pub struct DatabaseStub {
    table: String,
}

impl DatabaseStub {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl Default for DatabaseStub {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE)
    }
}

#[async_trait]
impl Persistence for DatabaseStub {
    async fn save(&self, value: &Number) -> Result<SaveReceipt> {
        tracing::info!(table = %self.table, number = %value, "Simulated database write");
        Ok(SaveReceipt::new(format!(
            "successfully saved to database: {}",
            value
        )))
    }
}
