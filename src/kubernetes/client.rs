// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub cluster client creation and kubeconfig utilities

use crate::error::{Result, SimulatorError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the hub cluster.
/// Uses the given kubeconfig file, or infers the configuration when none is set.
#[instrument]
pub async fn create_hub_client(hub_config: Option<&Path>) -> Result<Client> {
    match hub_config {
        Some(path) => {
            info!("Loading hub kubeconfig from {}", path.display());
            let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
                SimulatorError::KubeconfigError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            create_client_from_kubeconfig(&kubeconfig).await
        }
        None => {
            debug!("No hub kubeconfig given, inferring client configuration");
            let config = infer_hub_config().await?;
            Client::try_from(config).map_err(|e| {
                SimulatorError::KubeconfigError(format!("Failed to create client: {}", e))
            })
        }
    }
}

/// Infer the hub configuration from the environment. Every file listed in
/// KUBECONFIG is merged, falling back to the in-cluster configuration.
async fn infer_hub_config() -> Result<KConfig> {
    KConfig::infer()
        .await
        .map_err(|e| SimulatorError::KubeconfigError(format!("Failed to infer config: {}", e)))
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed = parse_kubeconfig(kubeconfig)?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                SimulatorError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| SimulatorError::KubeconfigError(format!("Failed to create client: {}", e)))
}

fn parse_kubeconfig(kubeconfig: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(kubeconfig)
        .map_err(|e| SimulatorError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
