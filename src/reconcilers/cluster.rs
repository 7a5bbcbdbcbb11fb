// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster reconciler - watches ManagedCluster resources and runs a simulator
//! for every added cluster.

use crate::error::{Result, SimulatorError};
use crate::simulator::ClusterHandler;
use crate::types::ManagedCluster;
use futures::{Stream, TryStreamExt};
use kube::{runtime::watcher, Api, Client, ResourceExt};
use kube_runtime::watcher::Config as WatcherConfig;
use std::collections::HashSet;
use std::fmt::Display;
use std::pin::pin;
use tracing::{debug, error, info};

/// Lifecycle event of a managed cluster, as far as the reconciler cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterEvent {
    Added(String),
    Deleted(String),
    Other,
}

impl From<watcher::Event<ManagedCluster>> for ClusterEvent {
    fn from(event: watcher::Event<ManagedCluster>) -> Self {
        match event {
            watcher::Event::Apply(cluster) | watcher::Event::InitApply(cluster) => {
                ClusterEvent::Added(cluster.name_any())
            }
            watcher::Event::Delete(cluster) => ClusterEvent::Deleted(cluster.name_any()),
            watcher::Event::Init | watcher::Event::InitDone => ClusterEvent::Other,
        }
    }
}

/// What happens to the seen set when a tracked cluster is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeenPolicy {
    /// Keep the cluster in the seen set, so a re-added cluster with the same
    /// name is not provisioned again until restart
    #[default]
    Retain,
    /// Drop the cluster from the seen set, so a re-added cluster is provisioned
    Forget,
}

/// Watch ManagedCluster resources on the hub as a stream of [`ClusterEvent`]s
pub fn cluster_events(
    client: Client,
) -> impl Stream<Item = std::result::Result<ClusterEvent, watcher::Error>> {
    let clusters: Api<ManagedCluster> = Api::all(client);
    watcher(clusters, WatcherConfig::default()).map_ok(ClusterEvent::from)
}

/// Provisions a simulator for every added cluster in scope and reaps it again
/// when the cluster is deleted. Events are handled one at a time.
pub struct ClusterReconciler<H> {
    handler: H,
    prefix: String,
    seen_policy: SeenPolicy,
    /// Clusters provisioned during this run
    seen: HashSet<String>,
}

impl<H: ClusterHandler> ClusterReconciler<H> {
    pub fn new(handler: H, prefix: impl Into<String>, seen_policy: SeenPolicy) -> Self {
        Self {
            handler,
            prefix: prefix.into(),
            seen_policy,
            seen: HashSet::new(),
        }
    }

    /// Consume events until the stream ends. A stream error ends the watch.
    pub async fn run<S, E>(mut self, events: S) -> Result<()>
    where
        S: Stream<Item = std::result::Result<ClusterEvent, E>>,
        E: Display,
    {
        info!(
            "Start watching cluster.open-cluster-management.io/v1/ManagedCluster with prefix '{}'",
            self.prefix
        );

        let mut events = pin!(events);
        loop {
            match events.try_next().await {
                Ok(Some(event)) => self.handle_event(event).await,
                Ok(None) => {
                    info!("Cluster watch stream ended");
                    return Ok(());
                }
                Err(e) => {
                    error!("Cluster watch failed: {}", e);
                    return Err(SimulatorError::WatchError(e.to_string()));
                }
            }
        }
    }

    pub async fn handle_event(&mut self, event: ClusterEvent) {
        match event {
            ClusterEvent::Added(name) => {
                info!("event: ADDED on cluster {}", name);
                self.handle_added(name).await;
            }
            ClusterEvent::Deleted(name) => {
                info!("event: DELETED on cluster {}", name);
                self.handle_deleted(&name).await;
            }
            ClusterEvent::Other => {}
        }
    }

    async fn handle_added(&mut self, name: String) {
        if self.seen.contains(&name) {
            debug!("Cluster {} already handled, skipping", name);
            return;
        }
        if !self.is_in_scope(&name) {
            debug!("Cluster {} does not match prefix '{}'", name, self.prefix);
            return;
        }

        self.seen.insert(name.clone());
        if let Err(e) = self.handler.provision(&name).await {
            error!("failed to create simulator for cluster: {}, err: {}", name, e);
        }
    }

    async fn handle_deleted(&mut self, name: &str) {
        if !self.is_in_scope(name) {
            debug!("Cluster {} does not match prefix '{}'", name, self.prefix);
            return;
        }

        self.handler.reap(name).await;

        if self.seen_policy == SeenPolicy::Forget {
            self.seen.remove(name);
        }
    }

    fn is_in_scope(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }

    /// Clusters provisioned so far
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }
}
