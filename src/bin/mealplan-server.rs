// ABOUTME: Server binary for the meal-plan recommendation API
// ABOUTME: Loads configuration and the recipe catalog, then serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Server Binary
//!
//! Starts the HTTP API. Configuration comes from the environment; the flags
//! below override individual values.

#[cfg(not(unix))]
use std::future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mealplan_server::{
    catalog::InMemoryCatalog,
    config::ServerConfig,
    constants::routes::MEAL_PLAN,
    llm::composer_from_config,
    logging,
    routes::{build_router, ReadinessInfo},
    services::MealPlanService,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealplan-server")]
#[command(about = "Meal-plan recommendation API with LLM planning and deterministic fallback")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Recipe catalog JSON file (overrides `RECIPE_CATALOG_PATH`)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    info!("Starting meal-plan server");
    info!("{}", config.summary());

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_json_file(path).await?,
        None => {
            info!("No recipe catalog configured, every plan will be empty");
            InMemoryCatalog::default()
        }
    };
    let readiness = ReadinessInfo {
        catalog_size: catalog.len(),
        planner_enabled: config.planner.is_enabled(),
    };

    let planner = composer_from_config(&config.planner);
    let service = Arc::new(MealPlanService::from_config(
        &config,
        Arc::new(catalog),
        planner,
    ));
    let app = build_router(&config, service, readiness);

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("Listening on {bind_address}");
    info!("  POST {MEAL_PLAN}");
    info!("  GET  /health");
    info!("  GET  /ready");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
