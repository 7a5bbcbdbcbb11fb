// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconcilers driving simulators from ManagedCluster state.

pub mod cleanup;
pub mod cluster;

pub use cleanup::reap_all;
pub use cluster::{cluster_events, ClusterEvent, ClusterReconciler, SeenPolicy};
