// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load hub kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("cluster name is empty")]
    EmptyClusterName,

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("{0}")]
    ProvisionError(ProvisionStep),

    #[error("Cluster watch failed: {0}")]
    WatchError(String),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;

/// A single step of simulator provisioning, reported when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    CaBundleConfigMap,
    SignerCertSecret,
    ManagedCertSecret,
    ServiceAccount,
    Deployment,
    ClusterRoleBinding,
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ProvisionStep::CaBundleConfigMap => "failed to create cert configmap",
            ProvisionStep::SignerCertSecret | ProvisionStep::ManagedCertSecret => {
                "failed to create cert secrets"
            }
            ProvisionStep::ServiceAccount => "failed to create cert serviceAccount",
            ProvisionStep::Deployment => "failed to create simulator deployment",
            ProvisionStep::ClusterRoleBinding => "failed to create clusterrolebinding",
        };
        f.write_str(msg)
    }
}

/// How a failed API call should be treated by idempotent create/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOutcome {
    AlreadyExists,
    NotFound,
    Other,
}

impl ApiOutcome {
    pub fn classify(err: &kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 409 => ApiOutcome::AlreadyExists,
            kube::Error::Api(resp) if resp.code == 404 => ApiOutcome::NotFound,
            _ => ApiOutcome::Other,
        }
    }
}

/// Status code and reason of an API error, for log lines
pub fn status_of(err: &kube::Error) -> (u16, String) {
    match err {
        kube::Error::Api(resp) => (resp.code, resp.reason.clone()),
        other => (0, other.to_string()),
    }
}
