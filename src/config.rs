// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::bootstrap::{ApiServer, BootstrapResult, InfraStatus, TopologyMode, API_SERVER_DEFAULT_LOCAL};
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// HyperShift hosted cluster settings
#[derive(Debug, Clone, Default)]
pub struct HyperShiftConfig {
    pub enabled: bool,
    /// Name of the hosted cluster (and its HostedControlPlane)
    pub name: String,
    /// Namespace of the hosted control plane on the management cluster
    pub namespace: String,
}

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the manifest templates
    pub manifest_dir: PathBuf,
    pub release_version: String,
    pub multus_admission_controller_image: String,
    pub kube_rbac_proxy_image: String,
    pub rhobs_monitoring: String,
    pub cli_image: String,
    pub token_minter_image: String,
    pub token_audience: String,
    pub external_control_plane: bool,
    /// Print rendered manifests instead of applying them
    pub dry_run: bool,
    pub hypershift: HyperShiftConfig,
    pub bootstrap: BootstrapResult,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        let flag = |key: &str| {
            lookup(key)
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false)
        };

        let multus_admission_controller_image = lookup("MULTUS_ADMISSION_CONTROLLER_IMAGE")
            .context("MULTUS_ADMISSION_CONTROLLER_IMAGE environment variable not set")?;

        let hypershift = HyperShiftConfig {
            enabled: var("HYPERSHIFT") == "true",
            name: var("HOSTED_CLUSTER_NAME"),
            namespace: var("HOSTED_CLUSTER_NAMESPACE"),
        };
        if hypershift.enabled && (hypershift.name.is_empty() || hypershift.namespace.is_empty()) {
            bail!("HOSTED_CLUSTER_NAME and HOSTED_CLUSTER_NAMESPACE must be set when HYPERSHIFT is enabled");
        }

        let mut api_servers = BTreeMap::new();
        if let Some(host) = lookup("KUBERNETES_SERVICE_HOST") {
            api_servers.insert(
                API_SERVER_DEFAULT_LOCAL.to_string(),
                ApiServer {
                    host,
                    port: lookup("KUBERNETES_SERVICE_PORT").unwrap_or_else(|| "443".to_string()),
                },
            );
        }

        let bootstrap = BootstrapResult {
            infra: InfraStatus {
                control_plane_topology: TopologyMode::from(var("CONTROL_PLANE_TOPOLOGY").as_str()),
                infrastructure_topology: TopologyMode::from(var("INFRASTRUCTURE_TOPOLOGY").as_str()),
                api_servers,
            },
        };

        Ok(Config {
            manifest_dir: lookup("MANIFEST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("bindata")),
            release_version: var("RELEASE_VERSION"),
            multus_admission_controller_image,
            kube_rbac_proxy_image: var("KUBE_RBAC_PROXY_IMAGE"),
            rhobs_monitoring: var("RHOBS_MONITORING"),
            cli_image: var("CLI_IMAGE"),
            token_minter_image: var("TOKEN_MINTER_IMAGE"),
            token_audience: var("TOKEN_AUDIENCE"),
            external_control_plane: flag("EXTERNAL_CONTROL_PLANE"),
            dry_run: flag("DRY_RUN"),
            hypershift,
            bootstrap,
        })
    }
}
