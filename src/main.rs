// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::Api;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metrics_collector_simulator::config::Config;
use metrics_collector_simulator::kubernetes::{create_hub_client, is_addon_enabled};
use metrics_collector_simulator::reconcilers::{cluster_events, reap_all, ClusterReconciler};
use metrics_collector_simulator::simulator::Simulator;

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config)?;

    info!("Starting metrics collector simulator");
    info!(
        "Configuration loaded: prefix='{}', clean={}, seen_policy={:?}",
        config.prefix,
        config.clean,
        config.seen_policy()
    );

    // Create Kubernetes client for the hub
    let client = create_hub_client(config.hub_config.as_deref()).await?;
    info!("Connected to hub cluster");

    let simulator = Simulator::new(client.clone());

    if config.clean {
        return match reap_all(&Api::all(client), &simulator, &config.prefix).await {
            Ok(_) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                error!("failed to clean up the simulators, err {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    if !is_addon_enabled(&client).await? {
        error!("Observability add-on is not up, cannot read the simulator templates");
        return Ok(ExitCode::FAILURE);
    }

    // Watch ManagedClusters and run a simulator in each added cluster's namespace
    ClusterReconciler::new(simulator, config.prefix.clone(), config.seen_policy())
        .run(cluster_events(client))
        .await?;

    warn!("Cluster watch stopped");
    Ok(ExitCode::SUCCESS)
}
