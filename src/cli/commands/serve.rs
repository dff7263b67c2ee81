//! Implementation of the `legacy-bridge serve` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use super::load_config;
use crate::adapters::cache::{spawn_expiry_sweeper, ResourceCache};
use crate::api::{router, AppState};
use crate::domain::ports::{Clock, UpstreamClient};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::legacy::{LegacyHttpClient, RetryPolicy};
use crate::infrastructure::logging::LoggerImpl;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Configuration file to load instead of `.legacy-bridge/config.yaml`
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding the configured one
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
        ConfigLoader::validate(&config)?;
    }

    let _logger = LoggerImpl::init(&config.logging)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let cache = Arc::new(ResourceCache::new(&config.cache, Arc::clone(&clock)));
    let upstream: Arc<dyn UpstreamClient> = Arc::new(LegacyHttpClient::new(
        &config.legacy_api,
        RetryPolicy::from_config(&config.retry),
        clock,
    )?);

    let sweeper = config.cache.enabled.then(|| {
        spawn_expiry_sweeper(
            Arc::clone(&cache),
            Duration::from_secs(config.cache.cleanup_interval_secs),
        )
    });

    let app = router(
        AppState::new(cache, upstream, &config.server.api_prefix),
        &config.server.cors_origins,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        %addr,
        api_prefix = %config.server.api_prefix,
        cache_enabled = config.cache.enabled,
        "legacy bridge listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("legacy bridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
