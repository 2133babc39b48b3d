use lending_desk::{
    adapters::{
        SmtpConfig, SmtpNotificationSender, SystemClock,
        json_file::{
            JsonFileCatalog, JsonFileFineRepository, JsonFileLoanRepository,
            JsonFileUserRepository,
        },
    },
    api::{handlers::AppState, router::create_router},
    application::ServiceDependencies,
    domain::fine::FineCalculator,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env (SMTP credentials, data directory) if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lending_desk=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Snapshot files live under the data directory
    let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()));
    tracing::info!("Data directory: {}", data_dir.display());

    // Initialize adapters
    let loan_repository = Arc::new(JsonFileLoanRepository::new(&data_dir));
    let fine_repository = Arc::new(JsonFileFineRepository::new(&data_dir));
    let user_repository = Arc::new(JsonFileUserRepository::new(&data_dir));
    let catalog = Arc::new(JsonFileCatalog::new(&data_dir));

    let smtp_config = SmtpConfig {
        host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".into()),
        port: std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(25),
        username: std::env::var("SMTP_USERNAME").ok(),
        password: std::env::var("SMTP_PASSWORD").ok(),
        from: std::env::var("SMTP_FROM").unwrap_or_else(|_| "library@example.com".into()),
        use_starttls: std::env::var("SMTP_STARTTLS").is_ok_and(|v| v == "true"),
    };
    let notification_sender = Arc::new(SmtpNotificationSender::new(smtp_config));

    // Create service dependencies
    let service_deps = ServiceDependencies {
        loan_repository,
        fine_repository,
        user_repository,
        catalog,
        notification_sender,
        clock: Arc::new(SystemClock::new()),
        fine_calculator: Arc::new(FineCalculator::new()),
    };

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps,
        write_lock: tokio::sync::Mutex::new(()),
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
