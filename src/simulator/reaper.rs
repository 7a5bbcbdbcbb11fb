// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Best-effort removal of the simulator objects from a managed cluster namespace

use crate::constants::templates;
use crate::error::status_of;
use crate::simulator::templates::cluster_role_binding_name;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::ClusterRoleBinding;
use kube::{api::DeleteParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{error, info, instrument};

/// Delete a single object, logging instead of returning any failure.
/// A missing object is a failure like any other. Returns whether the object
/// was deleted.
async fn delete_logged<K>(api: &Api<K>, name: &str, cluster_name: &str) -> bool
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let kind = K::kind(&());
    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {
            info!("Deleted {} {} for cluster {}", kind, name, cluster_name);
            true
        }
        Err(e) => {
            let (code, reason) = status_of(&e);
            error!(
                "failed to delete {} {} for {}, err: {}:{}",
                kind, name, cluster_name, code, reason
            );
            false
        }
    }
}

/// Remove every simulator object belonging to a managed cluster.
///
/// Each deletion is attempted regardless of the outcome of the previous ones.
/// Returns the number of objects actually deleted.
#[instrument(skip(client))]
pub async fn reap(client: &Client, cluster_name: &str) -> usize {
    let bindings: Api<ClusterRoleBinding> = Api::all(client.clone());
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), cluster_name);
    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), cluster_name);
    let secrets: Api<Secret> = Api::namespaced(client.clone(), cluster_name);
    let configmaps: Api<ConfigMap> = Api::namespaced(client.clone(), cluster_name);

    let results = [
        delete_logged(&bindings, &cluster_role_binding_name(cluster_name), cluster_name).await,
        delete_logged(&deployments, templates::METRICS_COLLECTOR_DEPLOYMENT, cluster_name).await,
        delete_logged(&service_accounts, templates::ENDPOINT_SERVICE_ACCOUNT, cluster_name).await,
        delete_logged(&secrets, templates::SIGNER_CLIENT_CERT_SECRET, cluster_name).await,
        delete_logged(&secrets, templates::MANAGED_CLUSTER_CERTS_SECRET, cluster_name).await,
        delete_logged(&configmaps, templates::CA_BUNDLE_CONFIGMAP, cluster_name).await,
    ];

    let deleted = results.iter().filter(|deleted| **deleted).count();
    info!(
        "Removed {}/{} simulator objects for cluster {}",
        deleted,
        results.len(),
        cluster_name
    );
    deleted
}
