pub mod business_logic;

pub use crate::domain::model::{CalculationRequest, Number, Response, SaveReceipt};
pub use crate::domain::ports::{BusinessLogic, Persistence};
pub use crate::utils::error::Result;
