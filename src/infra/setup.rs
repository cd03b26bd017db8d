use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::{config::AppConfig, email_provider::build_notifier, postgres_persistence},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;

    let repo: Option<Arc<dyn WaitlistRepo>> = match config.database_url.as_deref() {
        Some(url) => {
            let postgres = postgres_persistence(url, config.database_max_connections).await?;
            Some(Arc::new(postgres) as Arc<dyn WaitlistRepo>)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; waitlist submissions will be rejected");
            None
        }
    };

    let notifier = Arc::new(build_notifier(&config.email)?);

    let waitlist_use_cases = WaitlistUseCases::new(repo, notifier);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "konecbo_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped if the file can't be created
    let log_path = std::env::var("LOG_FILE").unwrap_or_else(|_| "app.log".to_string());
    let (json_layer, file_error) = match File::create(&log_path) {
        Ok(file) => {
            let layer = fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true);
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some(err) = file_error {
        tracing::warn!(path = %log_path, error = %err, "JSON log file disabled");
    }
}
