// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creates the simulator objects in a managed cluster namespace

use crate::constants::{templates, ADDON_NAMESPACE};
use crate::error::{ApiOutcome, ProvisionStep, Result, SimulatorError};
use crate::simulator::templates::{
    reset_object, reset_owned_object, simulator_cluster_role_binding, simulator_deployment,
};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::ClusterRoleBinding;
use k8s_openapi::NamespaceResourceScope;
use kube::{api::PostParams, Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Create an object, treating an already existing one as success
async fn create_if_absent<K>(api: &Api<K>, obj: &K) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
{
    match api.create(&PostParams::default(), obj).await {
        Ok(_) => {
            info!("Created {} {}", K::kind(&()), obj.name_any());
            Ok(())
        }
        Err(e) => match ApiOutcome::classify(&e) {
            ApiOutcome::AlreadyExists => {
                debug!("{} {} already exists", K::kind(&()), obj.name_any());
                Ok(())
            }
            ApiOutcome::NotFound | ApiOutcome::Other => Err(e.into()),
        },
    }
}

/// Read a template object from the add-on namespace
async fn get_template<K>(client: &Client, name: &str) -> Result<K>
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let api: Api<K> = Api::namespaced(client.clone(), ADDON_NAMESPACE);
    Ok(api.get(name).await?)
}

async fn create_in_cluster_namespace<K>(client: &Client, cluster_name: &str, obj: &K) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Serialize
        + Debug,
{
    let api: Api<K> = Api::namespaced(client.clone(), cluster_name);
    create_if_absent(&api, obj).await
}

/// Copy the metrics collector CA bundle config map into the cluster namespace
pub async fn reuse_ca_bundle_config_map(client: &Client, cluster_name: &str) -> Result<()> {
    let template: ConfigMap = get_template(client, templates::CA_BUNDLE_CONFIGMAP).await?;
    create_in_cluster_namespace(client, cluster_name, &reset_object(template, cluster_name)).await
}

/// Copy the observability signer client certificate secret into the cluster namespace
pub async fn reuse_signer_cert_secret(client: &Client, cluster_name: &str) -> Result<()> {
    let template: Secret = get_template(client, templates::SIGNER_CLIENT_CERT_SECRET).await?;
    create_in_cluster_namespace(client, cluster_name, &reset_object(template, cluster_name)).await
}

/// Copy the managed cluster certificate secret into the cluster namespace
pub async fn reuse_managed_cert_secret(client: &Client, cluster_name: &str) -> Result<()> {
    let template: Secret = get_template(client, templates::MANAGED_CLUSTER_CERTS_SECRET).await?;
    create_in_cluster_namespace(
        client,
        cluster_name,
        &reset_owned_object(template, cluster_name),
    )
    .await
}

/// Copy the endpoint operator service account into the cluster namespace
pub async fn reuse_service_account(client: &Client, cluster_name: &str) -> Result<()> {
    let template: ServiceAccount =
        get_template(client, templates::ENDPOINT_SERVICE_ACCOUNT).await?;
    create_in_cluster_namespace(
        client,
        cluster_name,
        &reset_owned_object(template, cluster_name),
    )
    .await
}

/// Create the simulator deployment from the metrics collector deployment template.
/// Every call generates a fresh cluster ID.
pub async fn reuse_deployment(client: &Client, cluster_name: &str) -> Result<()> {
    let template: Deployment =
        get_template(client, templates::METRICS_COLLECTOR_DEPLOYMENT).await?;
    let cluster_id = Uuid::new_v4();
    debug!("Simulating cluster {} with clusterID {}", cluster_name, cluster_id);

    let deploy = simulator_deployment(template, cluster_name, &cluster_id)?;
    create_in_cluster_namespace(client, cluster_name, &deploy).await
}

/// Bind the cluster's endpoint service account to the cluster monitoring view role.
/// An empty cluster name is rejected before the API is called.
pub async fn create_cluster_role_binding(client: &Client, cluster_name: &str) -> Result<()> {
    let binding = simulator_cluster_role_binding(cluster_name)?;
    let api: Api<ClusterRoleBinding> = Api::all(client.clone());
    create_if_absent(&api, &binding).await
}

fn step_failed(step: ProvisionStep, cause: SimulatorError) -> SimulatorError {
    debug!("Provisioning step {:?} failed: {}", step, cause);
    SimulatorError::ProvisionError(step)
}

/// Create all simulator objects for a managed cluster.
///
/// Steps run in order and stop at the first failure, which is reported by the
/// step that failed. Objects that already exist are left untouched, so calling
/// this again for the same cluster is harmless.
#[instrument(skip(client))]
pub async fn provision(client: &Client, cluster_name: &str) -> Result<()> {
    reuse_ca_bundle_config_map(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::CaBundleConfigMap, e))?;

    reuse_signer_cert_secret(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::SignerCertSecret, e))?;

    reuse_managed_cert_secret(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::ManagedCertSecret, e))?;

    reuse_service_account(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::ServiceAccount, e))?;

    reuse_deployment(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::Deployment, e))?;

    create_cluster_role_binding(client, cluster_name)
        .await
        .map_err(|e| step_failed(ProvisionStep::ClusterRoleBinding, e))?;

    info!("Simulator provisioned for cluster {}", cluster_name);
    Ok(())
}
