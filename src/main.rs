use calc_shim::utils::error::{AppError, ErrorSeverity};
use calc_shim::utils::{logger, validation::Validate};
use calc_shim::{ApiAdapter, CliConfig, DatabaseStub, PassThroughCalculator};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 載入配置檔 (在初始化日誌前，錯誤直接輸出)
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => fail(&e),
    };
    let settings = config.resolve(file_config.as_ref());

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        fail(&e);
    }

    let event = match config.event_json() {
        Ok(event) => event,
        Err(e) => fail(&e),
    };

    // 組裝適配器
    let adapter = ApiAdapter::new(
        PassThroughCalculator::new(),
        DatabaseStub::new(settings.table.clone()),
    );

    match adapter.handle(event).await {
        Ok(response) => {
            tracing::info!("✅ Request handled");
            println!("{}", response);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            fail(&e);
        }
    }

    Ok(())
}

fn fail(e: &AppError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
