// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types read from the hub.

pub mod managed_cluster;

pub use managed_cluster::ManagedCluster;
