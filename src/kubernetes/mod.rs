// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for hub client creation and add-on discovery.

pub mod addon;
pub mod client;

pub use addon::is_addon_enabled;
pub use client::create_hub_client;
