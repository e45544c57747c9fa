// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the Multus admission controller manifests.

use crate::bootstrap::{admission_controller_replicas, API_SERVER_DEFAULT_LOCAL};
use crate::config::Config;
use crate::constants::{
    service_ca, CLUSTER_ID_LABEL, DEFAULT_ADMISSION_CONTROLLER_NAMESPACE, MANAGEMENT_CLUSTER_NAME,
    MANIFEST_SUBDIR, MULTUS_VALIDATING_WEBHOOK,
};
use crate::error::{MultusError, Result};
use crate::kubernetes::{ClusterClients, IgnoredNamespaces};
use crate::render::{render_dir, RenderData};
use crate::types::HostedControlPlane;
use base64::{engine::general_purpose::URL_SAFE, Engine};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{api::DynamicObject, Api, Client};
use tracing::{debug, info, instrument};

/// Renders the admission controller manifests for one cluster.
///
/// The ignored namespace list is looked up on first use and reused for the
/// lifetime of the renderer.
pub struct AdmissionControllerRenderer {
    config: Config,
    ignored_namespaces: IgnoredNamespaces,
}

impl AdmissionControllerRenderer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ignored_namespaces: IgnoredNamespaces::new(),
        }
    }

    /// Render the manifests with values resolved from the clusters
    #[instrument(skip(self, clients))]
    pub async fn render(&self, clients: &ClusterClients) -> Result<Vec<DynamicObject>> {
        let data = self.render_data(clients).await?;
        let dir = self.config.manifest_dir.join(MANIFEST_SUBDIR);
        let objects = render_dir(&dir, &data)?;
        info!(
            "Rendered {} multus admission controller objects from {}",
            objects.len(),
            dir.display()
        );
        Ok(objects)
    }

    /// Resolve every template value
    pub async fn render_data(&self, clients: &ClusterClients) -> Result<RenderData> {
        let config = &self.config;
        let hypershift = &config.hypershift;
        let ignored = self.ignored_namespaces.get(clients.default_client()).await;

        let mut data = RenderData::new();
        data.insert("ReleaseVersion", config.release_version.as_str());
        data.insert(
            "MultusAdmissionControllerImage",
            config.multus_admission_controller_image.as_str(),
        );
        data.insert("IgnoredNamespace", ignored);
        data.insert("MultusValidatingWebhookName", MULTUS_VALIDATING_WEBHOOK);
        data.insert("KubeRBACProxyImage", config.kube_rbac_proxy_image.as_str());
        data.insert("ExternalControlPlane", config.external_control_plane);
        data.insert("Replicas", admission_controller_replicas(&config.bootstrap));
        data.insert("HyperShiftEnabled", hypershift.enabled);
        data.insert("ManagementClusterName", MANAGEMENT_CLUSTER_NAME);
        data.insert("AdmissionControllerNamespace", DEFAULT_ADMISSION_CONTROLLER_NAMESPACE);
        data.insert("RHOBSMonitoring", config.rhobs_monitoring.as_str());

        if hypershift.enabled {
            let api_server = config
                .bootstrap
                .api_server(API_SERVER_DEFAULT_LOCAL)
                .ok_or_else(|| MultusError::MissingApiServer(API_SERVER_DEFAULT_LOCAL.to_string()))?;

            data.insert("AdmissionControllerNamespace", hypershift.namespace.as_str());
            data.insert("KubernetesServiceHost", api_server.host.as_str());
            data.insert("KubernetesServicePort", api_server.port.as_str());
            data.insert("CLIImage", config.cli_image.as_str());
            data.insert("TokenMinterImage", config.token_minter_image.as_str());
            data.insert("TokenAudience", config.token_audience.as_str());

            // The webhook service lives on the management cluster, so its CA does too
            let management = clients.client_for(MANAGEMENT_CLUSTER_NAME)?;
            let ca = get_service_ca(management, &hypershift.namespace).await?;
            data.insert("ManagementServiceCABundle", URL_SAFE.encode(ca.as_bytes()));

            let cluster_id = get_cluster_id(management, &hypershift.namespace, &hypershift.name).await?;
            data.insert("ClusterIDLabel", CLUSTER_ID_LABEL);
            data.insert("ClusterID", cluster_id);
        }

        debug!("Resolved {} template values", data.len());
        Ok(data)
    }
}

/// Read the service CA bundle published in `namespace`
#[instrument(skip(client))]
async fn get_service_ca(client: &Client, namespace: &str) -> Result<String> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), namespace);
    let cm = config_maps
        .get(service_ca::CONFIG_MAP)
        .await
        .map_err(MultusError::ServiceCaError)?;

    cm.data
        .and_then(|mut d| d.remove(service_ca::KEY))
        .ok_or_else(|| MultusError::MissingServiceCaKey {
            namespace: namespace.to_string(),
            name: service_ca::CONFIG_MAP.to_string(),
            key: service_ca::KEY.to_string(),
        })
}

/// Read the cluster ID of the hosted control plane
#[instrument(skip(client))]
async fn get_cluster_id(client: &Client, namespace: &str, name: &str) -> Result<String> {
    let hcps: Api<HostedControlPlane> = Api::namespaced(client.clone(), namespace);
    let hcp = hcps
        .get(name)
        .await
        .map_err(MultusError::HostedControlPlaneError)?;
    Ok(hcp.cluster_id().to_string())
}
