use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use intent_proxy::config::Config;
use intent_proxy::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("intent_proxy=debug,tower_http=debug")),
        )
        .init();

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut loaded = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                loaded = Some((cfg, path.clone()));
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let config = match loaded {
        Some((cfg, path)) => {
            info!("Loaded configuration from: {}", path);
            cfg
        }
        None => {
            info!("No configuration file found (tried {:?}), using defaults", config_paths);
            Config::default()
        }
    };

    let host: std::net::IpAddr = config.system_config.host.parse()?;
    let addr = SocketAddr::from((host, config.system_config.port));

    let app_state = AppState::new(&config)?;
    let app = intent_proxy::create_app(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
