// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "hypershift.openshift.io",
    version = "v1beta1",
    kind = "HostedControlPlane"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct HostedControlPlaneSpec {
    #[serde(rename = "clusterID", default, skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_image: Option<String>,
}

impl HostedControlPlane {
    /// Cluster ID of the hosted cluster, if one has been assigned
    pub fn cluster_id(&self) -> &str {
        &self.spec.cluster_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_cluster_id() {
        let hcp: HostedControlPlane = serde_json::from_value(serde_json::json!({
            "apiVersion": "hypershift.openshift.io/v1beta1",
            "kind": "HostedControlPlane",
            "metadata": { "name": "guest", "namespace": "clusters-guest" },
            "spec": {
                "clusterID": "1b2c3d4e",
                "releaseImage": "quay.io/openshift-release-dev/ocp-release:4.16.0"
            }
        }))
        .unwrap();

        assert_eq!(hcp.cluster_id(), "1b2c3d4e");
        assert_eq!(
            hcp.spec.release_image.as_deref(),
            Some("quay.io/openshift-release-dev/ocp-release:4.16.0")
        );
    }

    #[test]
    fn test_missing_cluster_id_is_empty() {
        let hcp: HostedControlPlane = serde_json::from_value(serde_json::json!({
            "apiVersion": "hypershift.openshift.io/v1beta1",
            "kind": "HostedControlPlane",
            "metadata": { "name": "guest" },
            "spec": {}
        }))
        .unwrap();

        assert_eq!(hcp.cluster_id(), "");
    }
}
