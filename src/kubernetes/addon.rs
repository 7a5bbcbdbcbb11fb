// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Observability add-on readiness check

use crate::constants::ADDON_NAMESPACE;
use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Check whether the observability add-on runs on the hub, i.e. whether its
/// namespace holds at least one pod. The simulator templates live there.
#[instrument(skip(client))]
pub async fn is_addon_enabled(client: &Client) -> Result<bool> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), ADDON_NAMESPACE);
    let pod_list = pods.list(&ListParams::default().limit(1)).await?;

    debug!(
        "Found {} pod(s) in namespace {}",
        pod_list.items.len(),
        ADDON_NAMESPACE
    );
    Ok(!pod_list.items.is_empty())
}
