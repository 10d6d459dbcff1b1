use calc_shim::utils::{logger, validation::Validate};
use calc_shim::{ApiAdapter, DatabaseStub, LambdaConfig, PassThroughCalculator, Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

type Adapter = ApiAdapter<PassThroughCalculator, DatabaseStub>;

async fn function_handler(adapter: &Adapter, event: LambdaEvent<Value>) -> Result<Response, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling event");

    let response = adapter.handle(event.payload).await.map_err(|e| {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        Box::new(e) as Error
    })?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env();
    logger::init_lambda_logger(config.json_logs());

    config.validate()?;

    // 冷啟動時建立一次，之後每次調用共用
    let adapter = ApiAdapter::new(
        PassThroughCalculator::new(),
        DatabaseStub::new(config.table_name.clone()),
    );
    let adapter = &adapter;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(adapter, event).await
    }))
    .await
}
