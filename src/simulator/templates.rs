// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders turning add-on template objects into per-cluster simulator objects

use crate::constants::{rbac, simulator, templates};
use crate::error::{Result, SimulatorError};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Container, EmptyDirVolumeSource, Volume, VolumeMount};
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleRef, Subject};
use kube::api::ObjectMeta;
use kube::Resource;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Move a template object into the cluster namespace and drop the metadata
/// that ties it to the template instance.
pub fn reset_object<K: Resource>(mut obj: K, namespace: &str) -> K {
    let meta = obj.meta_mut();
    meta.namespace = Some(namespace.to_string());
    meta.resource_version = None;
    meta.uid = None;
    meta.creation_timestamp = None;
    meta.managed_fields = None;
    obj
}

/// Like [`reset_object`], also dropping owner references
pub fn reset_owned_object<K: Resource>(mut obj: K, namespace: &str) -> K {
    obj.meta_mut().owner_references = None;
    reset_object(obj, namespace)
}

/// Name of the cluster role binding created for a managed cluster
pub fn cluster_role_binding_name(cluster_name: &str) -> String {
    format!("{}{}", cluster_name, rbac::BINDING_SUFFIX)
}

/// Flags appended to the metrics collector command to run it as a simulator
pub fn simulator_flags(cluster_name: &str, cluster_id: &Uuid) -> Vec<String> {
    vec![
        format!("--label=\"cluster={}\"", cluster_name),
        format!("--label=\"clusterID={}\"", cluster_id),
        format!("--simulated-timeseries-file={}", simulator::TIMESERIES_FILE),
    ]
}

fn metrics_volume_mount() -> VolumeMount {
    VolumeMount {
        mount_path: simulator::VOLUME_MOUNT_PATH.to_string(),
        name: simulator::VOLUME_NAME.to_string(),
        ..Default::default()
    }
}

fn seed_container() -> Container {
    Container {
        name: simulator::INIT_CONTAINER_NAME.to_string(),
        image: Some(simulator::METRICS_IMAGE.to_string()),
        image_pull_policy: Some("Always".to_string()),
        command: Some(vec![
            "sh".to_string(),
            "-c".to_string(),
            simulator::SEED_COMMAND.to_string(),
        ]),
        volume_mounts: Some(vec![metrics_volume_mount()]),
        ..Default::default()
    }
}

/// Build the simulator deployment for a cluster from the metrics collector template.
///
/// The first container keeps its command, extended with [`simulator_flags`], and
/// loses its resource requirements so it schedules regardless of quota. An init
/// container seeds the time series file into a shared `emptyDir` volume.
pub fn simulator_deployment(
    template: Deployment,
    cluster_name: &str,
    cluster_id: &Uuid,
) -> Result<Deployment> {
    let mut deploy = reset_owned_object(template, cluster_name);

    let pod_spec = deploy
        .spec
        .as_mut()
        .and_then(|s| s.template.spec.as_mut())
        .ok_or_else(|| {
            SimulatorError::InvalidTemplate(format!(
                "deployment {} has no pod spec",
                templates::METRICS_COLLECTOR_DEPLOYMENT
            ))
        })?;

    let container = pod_spec.containers.first_mut().ok_or_else(|| {
        SimulatorError::InvalidTemplate(format!(
            "deployment {} has no containers",
            templates::METRICS_COLLECTOR_DEPLOYMENT
        ))
    })?;

    container
        .command
        .get_or_insert_with(Vec::new)
        .extend(simulator_flags(cluster_name, cluster_id));
    container
        .volume_mounts
        .get_or_insert_with(Vec::new)
        .push(metrics_volume_mount());
    container.resources = None;

    pod_spec.init_containers = Some(vec![seed_container()]);
    pod_spec.volumes.get_or_insert_with(Vec::new).push(Volume {
        name: simulator::VOLUME_NAME.to_string(),
        empty_dir: Some(EmptyDirVolumeSource::default()),
        ..Default::default()
    });

    Ok(deploy)
}

/// Build the cluster role binding giving the cluster's endpoint service account
/// read access to cluster metrics.
pub fn simulator_cluster_role_binding(cluster_name: &str) -> Result<ClusterRoleBinding> {
    if cluster_name.is_empty() {
        return Err(SimulatorError::EmptyClusterName);
    }

    Ok(ClusterRoleBinding {
        metadata: ObjectMeta {
            name: Some(cluster_role_binding_name(cluster_name)),
            annotations: Some(BTreeMap::from([(
                rbac::OWNER_ANNOTATION.to_string(),
                rbac::OWNER.to_string(),
            )])),
            ..Default::default()
        },
        subjects: Some(vec![Subject {
            kind: "ServiceAccount".to_string(),
            name: templates::ENDPOINT_SERVICE_ACCOUNT.to_string(),
            namespace: Some(cluster_name.to_string()),
            ..Default::default()
        }]),
        role_ref: RoleRef {
            api_group: rbac::API_GROUP.to_string(),
            kind: "ClusterRole".to_string(),
            name: rbac::CLUSTER_ROLE.to_string(),
        },
    })
}
