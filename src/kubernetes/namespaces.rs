// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lookup utilities

use crate::constants::MONITORED_NAMESPACE_SELECTOR;
use crate::error::{MultusError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Collect the OpenShift monitored namespaces as a comma separated list
#[instrument(skip(client))]
pub async fn get_openshift_namespaces(client: &Client) -> Result<String> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let lp = ListParams::default().labels(MONITORED_NAMESPACE_SELECTOR);

    let list = namespaces
        .list(&lp)
        .await
        .map_err(MultusError::NamespaceError)?;

    let names: Vec<String> = list.items.iter().map(|ns| ns.name_any()).collect();
    debug!("Found {} monitored namespaces", names.len());
    Ok(names.join(","))
}

/// Namespaces ignored by the admission controller, looked up once.
///
/// Lookups are serialised; a failed or empty lookup is not remembered so the
/// next render tries again.
#[derive(Debug, Default)]
pub struct IgnoredNamespaces {
    cached: Mutex<Option<String>>,
}

impl IgnoredNamespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list, fetching it if nothing has been cached yet.
    /// Fetch failures are logged and yield an empty list.
    pub async fn get(&self, client: &Client) -> String {
        let mut cached = self.cached.lock().await;
        if let Some(namespaces) = cached.as_ref() {
            return namespaces.clone();
        }

        match get_openshift_namespaces(client).await {
            Ok(namespaces) if namespaces.is_empty() => namespaces,
            Ok(namespaces) => {
                *cached = Some(namespaces.clone());
                namespaces
            }
            Err(e) => {
                warn!("Failed to get openshift namespaces: {}", e);
                String::new()
            }
        }
    }
}
