use async_trait::async_trait;
use calc_shim::{
    ApiAdapter, AppError, BusinessLogic, DatabaseStub, Number, Persistence, Response, Result,
    SaveReceipt,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Business logic double that ignores its input and answers "ok".
#[derive(Default, Clone)]
struct OkLogic {
    received: Arc<Mutex<Vec<Number>>>,
}

#[async_trait]
impl BusinessLogic for OkLogic {
    async fn calculate_new_value_and_save(
        &self,
        number: Number,
        _persistence: &dyn Persistence,
    ) -> Result<Response> {
        self.received.lock().unwrap().push(number);
        Ok(Response::from("ok"))
    }
}

/// Business logic double that calls the capability it was handed.
struct CallsCapability;

#[async_trait]
impl BusinessLogic for CallsCapability {
    async fn calculate_new_value_and_save(
        &self,
        number: Number,
        persistence: &dyn Persistence,
    ) -> Result<Response> {
        let receipt = persistence.save(&number).await?;
        Ok(Response::from(format!("logic saw: {}", receipt)))
    }
}

struct FailingLogic;

#[async_trait]
impl BusinessLogic for FailingLogic {
    async fn calculate_new_value_and_save(
        &self,
        _number: Number,
        _persistence: &dyn Persistence,
    ) -> Result<Response> {
        Err(AppError::CalculationError {
            message: "out of range".to_string(),
        })
    }
}

#[derive(Default, Clone)]
struct CountingPersistence {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Persistence for CountingPersistence {
    async fn save(&self, value: &Number) -> Result<SaveReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SaveReceipt::new(format!("counted {}", value)))
    }
}

#[tokio::test]
async fn test_returns_business_logic_result_verbatim() {
    let adapter = ApiAdapter::new(OkLogic::default(), DatabaseStub::default());

    let response = adapter.handle(json!({"number": 6})).await.unwrap();

    assert_eq!(response, Response::from("ok"));
}

#[tokio::test]
async fn test_adapter_passes_capability_without_calling_it() {
    let persistence = CountingPersistence::default();
    let calls = persistence.calls.clone();
    let adapter = ApiAdapter::new(OkLogic::default(), persistence);

    adapter.handle(json!({"number": 6})).await.unwrap();

    // 適配器本身不呼叫 save
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_business_logic_can_invoke_capability() {
    let persistence = CountingPersistence::default();
    let calls = persistence.calls.clone();
    let adapter = ApiAdapter::new(CallsCapability, persistence);

    let response = adapter.handle(json!({"number": 9})).await.unwrap();

    assert_eq!(response.as_str(), "logic saw: counted 9");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_number_reaches_business_logic_unchanged() {
    let logic = OkLogic::default();
    let received = logic.received.clone();
    let adapter = ApiAdapter::new(logic, DatabaseStub::default());

    let events = [
        json!({"number": 6}),
        json!({"number": -6}),
        json!({"number": 2.5}),
        json!({"number": i64::MIN}),
        json!({"number": u64::MAX}),
    ];
    for event in &events {
        adapter.handle(event.clone()).await.unwrap();
    }

    let received = received.lock().unwrap();
    let expected: Vec<Number> = vec![
        Number::from(6i64),
        Number::from(-6i64),
        Number::from_f64(2.5).unwrap(),
        Number::from(i64::MIN),
        Number::from(u64::MAX),
    ];
    assert_eq!(*received, expected);
    assert_eq!(received[4].to_string(), u64::MAX.to_string());
}

#[tokio::test]
async fn test_missing_number_never_reaches_business_logic() {
    let logic = OkLogic::default();
    let received = logic.received.clone();
    let adapter = ApiAdapter::new(logic, DatabaseStub::default());

    let result = adapter.handle(json!({"value": 6})).await;

    assert!(matches!(result, Err(AppError::MissingField { ref field }) if field == "number"));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_business_logic_errors_propagate_unchanged() {
    let adapter = ApiAdapter::new(FailingLogic, DatabaseStub::default());

    let err = adapter.handle(json!({"number": 1})).await.unwrap_err();

    match err {
        AppError::CalculationError { message } => assert_eq!(message, "out of range"),
        other => panic!("expected CalculationError, got {:?}", other),
    }
}
