// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_PREFIX;
use crate::reconcilers::SeenPolicy;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Watches ManagedCluster resources on the hub and runs a metrics-collector
/// simulator in the namespace of every added cluster. With `--clean` the
/// simulators of all matching clusters are removed instead.
#[derive(Parser, Debug, Clone)]
#[command(name = "metrics-collector-simulator", version)]
pub struct Config {
    /// Hub cluster kubeconfig. Without it the configuration is inferred,
    /// honouring every path listed in KUBECONFIG.
    #[arg(long = "hub-config")]
    pub hub_config: Option<PathBuf>,

    /// Only managed clusters whose name starts with this prefix are processed
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Clean up the simulators instead of watching (accepts True, yes, 1, ...)
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub clean: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Forget a deleted cluster so it is provisioned again when re-added
    #[arg(long = "forget-deleted")]
    pub forget_deleted: bool,
}

impl Config {
    pub fn seen_policy(&self) -> SeenPolicy {
        if self.forget_deleted {
            SeenPolicy::Forget
        } else {
            SeenPolicy::Retain
        }
    }
}
