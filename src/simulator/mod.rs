// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Metrics-collector simulator objects: building, provisioning and removal.

pub mod provisioner;
pub mod reaper;
pub mod templates;

pub use provisioner::{create_cluster_role_binding, provision};
pub use reaper::reap;

use crate::error::Result;
use async_trait::async_trait;
use kube::Client;

/// What the reconcilers do to a managed cluster
#[async_trait]
pub trait ClusterHandler: Send + Sync {
    /// Set up the simulator for a cluster
    async fn provision(&self, cluster_name: &str) -> Result<()>;

    /// Tear down the simulator of a cluster, logging any failure
    async fn reap(&self, cluster_name: &str);
}

/// Runs simulators on the hub through the Kubernetes API
#[derive(Clone)]
pub struct Simulator {
    client: Client,
}

impl Simulator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterHandler for Simulator {
    async fn provision(&self, cluster_name: &str) -> Result<()> {
        provision(&self.client, cluster_name).await
    }

    async fn reap(&self, cluster_name: &str) {
        reap(&self.client, cluster_name).await;
    }
}
