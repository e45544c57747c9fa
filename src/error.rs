// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultusError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to discover resources for {group_version}: {source}")]
    DiscoveryError {
        group_version: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to get namespaces to render multus admission controller manifests: {0}")]
    NamespaceError(#[source] kube::Error),

    #[error("Failed to get management cluster service CA: {0}")]
    ServiceCaError(#[source] kube::Error),

    #[error("(/v1, Kind=ConfigMap) {namespace}/{name} missing '{key}' key")]
    MissingServiceCaKey {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Failed to get hosted control plane: {0}")]
    HostedControlPlaneError(#[source] kube::Error),

    #[error("No API server registered as '{0}'")]
    MissingApiServer(String),

    #[error("No client registered for cluster '{0}'")]
    MissingClusterClient(String),

    #[error("Failed to read manifests from {path}: {source}")]
    ManifestIoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template {path}: {source}")]
    TemplateError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to decode manifest {path}: {source}")]
    ManifestDecodeError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, MultusError>;
