use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use gosellr_trust::{
    EngineConfig, TrustApiState, TrustScorer, ValidatorApiState, ValidatorEvaluator,
    create_trust_router, create_upgrade_router, create_validator_router,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first - this validates threshold consistency
    let config = EngineConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        eprintln!("Please check GOSELLR_* environment variables.");
        e
    })?;

    init_logging(&config)?;

    info!("Starting GoSellr Trust Engine");
    info!(
        "Trust thresholds: normal>={}, review>={}",
        config.trust.normal_threshold, config.trust.review_threshold
    );
    info!(
        "Validator floors: locked>={}, wallet>={}, level>={}, ratio<{}",
        config.validator.min_locked_coins,
        config.validator.min_wallet_balance,
        config.validator.min_sql_level,
        config.validator.max_complaint_ratio
    );

    // Initialize the engines from configured policy
    let scorer = Arc::new(RwLock::new(TrustScorer::new(config.trust.to_thresholds())));
    let evaluator = Arc::new(RwLock::new(ValidatorEvaluator::new(
        config.validator.to_requirements(),
    )));

    let admin_api_key = std::env::var("GOSELLR_ADMIN_API_KEY").ok();
    if admin_api_key.is_none() {
        info!("No admin API key configured - governance endpoints are disabled");
    }

    // Build the application with nested routers
    let app = Router::new()
        .nest(
            "/trust",
            create_trust_router(TrustApiState {
                scorer,
                admin_api_key: admin_api_key.clone(),
            }),
        )
        .nest(
            "/validator",
            create_validator_router(ValidatorApiState {
                evaluator,
                admin_api_key,
            }),
        )
        .nest("/sql/upgrade", create_upgrade_router())
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))?;

    info!("Trust engine listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize logging from the configured level
fn init_logging(config: &EngineConfig) -> Result<()> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(if config.logging.log_requests {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set logging subscriber: {}", e))?;

    Ok(())
}
