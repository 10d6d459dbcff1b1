use crate::core::{BusinessLogic, CalculationRequest, Number, Persistence, Response, Result};
use crate::utils::error::AppError;
use serde_json::Value;

const NUMBER_FIELD: &str = "number";

/// Entry adapter: turns an inbound event into a business logic call and hands
/// the result back as the response.
pub struct ApiAdapter<L: BusinessLogic, P: Persistence> {
    logic: L,
    persistence: P,
}

impl<L: BusinessLogic, P: Persistence> ApiAdapter<L, P> {
    pub fn new(logic: L, persistence: P) -> Self {
        Self { logic, persistence }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Validates the event shape. Only `number` is read; other fields are ignored.
    pub fn parse_event(event: &Value) -> Result<CalculationRequest> {
        let fields = match event {
            Value::Object(fields) => fields,
            other => {
                return Err(AppError::InvalidEvent {
                    reason: format!("expected a JSON object, got {}", json_kind(other)),
                })
            }
        };

        match fields.get(NUMBER_FIELD) {
            None | Some(Value::Null) => Err(AppError::MissingField {
                field: NUMBER_FIELD.to_string(),
            }),
            Some(Value::Number(n)) => Ok(CalculationRequest {
                number: Number::from(n.clone()),
            }),
            Some(other) => Err(AppError::InvalidField {
                field: NUMBER_FIELD.to_string(),
                value: other.to_string(),
                reason: format!("expected a number, got {}", json_kind(other)),
            }),
        }
    }

    pub async fn handle(&self, event: Value) -> Result<Response> {
        let request = Self::parse_event(&event)?;
        tracing::debug!(number = %request.number, "Received event");

        let response = self
            .logic
            .calculate_new_value_and_save(request.number, &self.persistence)
            .await?;

        tracing::debug!(response = %response, "Returning response");
        Ok(response)
    }

    /// Same as [`handle`](Self::handle) for an event given as raw JSON text.
    pub async fn handle_json(&self, raw: &str) -> Result<Response> {
        let event: Value = serde_json::from_str(raw)?;
        self.handle(event).await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
