// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use multus_admission::admission_controller::AdmissionControllerRenderer;
use multus_admission::config::Config;
use multus_admission::constants::{MANAGEMENT_CLUSTER_NAME, OPERATOR_NAME};
use multus_admission::kubernetes::{is_scc_supported, ClusterClients};
use multus_admission::render::apply_objects;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Multus admission controller renderer");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: manifest_dir={}, hypershift={}",
        config.manifest_dir.display(),
        config.hypershift.enabled
    );

    // Create Kubernetes client
    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");

    match is_scc_supported(&client).await {
        Ok(supported) => info!("SecurityContextConstraints supported: {}", supported),
        Err(e) => warn!("Failed to check SecurityContextConstraints support: {}", e),
    }

    // With HyperShift the management cluster is reached through the in-cluster
    // config while the hosted cluster comes from the kubeconfig; without it
    // both are the same cluster.
    let clients = if config.hypershift.enabled {
        let management = Client::try_from(
            kube::Config::incluster().context("Failed to load in-cluster config for the management cluster")?,
        )
        .context("Failed to create management cluster client")?;
        ClusterClients::new(client.clone()).with_cluster(MANAGEMENT_CLUSTER_NAME, management)
    } else {
        ClusterClients::new(client.clone()).with_cluster(MANAGEMENT_CLUSTER_NAME, client.clone())
    };

    let dry_run = config.dry_run;
    let renderer = AdmissionControllerRenderer::new(config);
    let objects = renderer
        .render(&clients)
        .await
        .context("Failed to render multus admission controller manifests")?;

    if dry_run {
        for obj in &objects {
            println!("---\n{}", serde_yaml::to_string(obj)?);
        }
        return Ok(());
    }

    apply_objects(&clients, &objects, OPERATOR_NAME)
        .await
        .context("Failed to apply multus admission controller manifests")?;

    info!("Multus admission controller manifests applied");
    Ok(())
}
