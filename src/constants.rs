// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Hub namespace holding the observability add-on and its template objects
pub const ADDON_NAMESPACE: &str = "open-cluster-management-addon-observability";

/// Default managed cluster name prefix
pub const DEFAULT_PREFIX: &str = "spoke";

/// Names of the template objects cloned into each managed cluster namespace
pub mod templates {
    pub const CA_BUNDLE_CONFIGMAP: &str = "metrics-collector-serving-certs-ca-bundle";
    pub const SIGNER_CLIENT_CERT_SECRET: &str =
        "observability-controller-open-cluster-management.io-observability-signer-client-cert";
    pub const MANAGED_CLUSTER_CERTS_SECRET: &str = "observability-managed-cluster-certs";
    pub const ENDPOINT_SERVICE_ACCOUNT: &str = "endpoint-observability-operator-sa";
    pub const METRICS_COLLECTOR_DEPLOYMENT: &str = "metrics-collector-deployment";
}

/// Cluster role binding granting the simulator read access to cluster metrics
pub mod rbac {
    pub const API_GROUP: &str = "rbac.authorization.k8s.io";
    pub const CLUSTER_ROLE: &str = "cluster-monitoring-view";
    /// Appended to the cluster name to form the binding name
    pub const BINDING_SUFFIX: &str = "-clusters-metrics-collector-view";
    pub const OWNER_ANNOTATION: &str = "owner";
    pub const OWNER: &str = "multicluster-operator";
}

/// Simulator wiring injected into the cloned metrics-collector deployment
pub mod simulator {
    pub const METRICS_IMAGE: &str = "quay.io/haoqing/metrics-data:latest";
    pub const INIT_CONTAINER_NAME: &str = "init-metrics";
    pub const VOLUME_NAME: &str = "metrics-volume";
    pub const VOLUME_MOUNT_PATH: &str = "/metrics-volume";
    pub const SEED_COMMAND: &str = "cp /tmp/timeseries.txt /metrics-volume";
    pub const TIMESERIES_FILE: &str = "/metrics-volume/timeseries.txt";
}
