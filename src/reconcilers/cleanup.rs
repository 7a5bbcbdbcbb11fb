// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot removal of the simulators of every matching managed cluster.

use crate::error::Result;
use crate::simulator::ClusterHandler;
use crate::types::ManagedCluster;
use kube::{api::ListParams, Api, ResourceExt};
use tracing::{info, instrument};

/// Reap the simulator of every managed cluster whose name starts with `prefix`.
///
/// Only listing the clusters can fail; every matching cluster is reaped no
/// matter how the previous ones went. Returns the number of clusters reaped.
#[instrument(skip(clusters, handler))]
pub async fn reap_all<H: ClusterHandler>(
    clusters: &Api<ManagedCluster>,
    handler: &H,
    prefix: &str,
) -> Result<usize> {
    let cluster_list = clusters.list(&ListParams::default()).await?;

    let mut reaped = 0;
    for cluster in cluster_list.items.iter().filter(|c| c.matches_prefix(prefix)) {
        let cluster_name = cluster.name_any();
        info!(
            "deleting resources on cluster {} (available: {})",
            cluster_name,
            cluster.is_available()
        );
        handler.reap(&cluster_name).await;
        reaped += 1;
    }

    info!("Removed simulators from {} cluster(s)", reaped);
    Ok(reaped)
}
