// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Clients for the cluster being configured and for related clusters

use crate::error::{MultusError, Result};
use kube::Client;
use std::collections::HashMap;

/// The default cluster client plus clients for other named clusters
#[derive(Clone)]
pub struct ClusterClients {
    default: Client,
    named: HashMap<String, Client>,
}

impl ClusterClients {
    pub fn new(default: Client) -> Self {
        Self {
            default,
            named: HashMap::new(),
        }
    }

    /// Register a client for a named cluster
    pub fn with_cluster(mut self, name: impl Into<String>, client: Client) -> Self {
        self.named.insert(name.into(), client);
        self
    }

    /// Client for the cluster being configured
    pub fn default_client(&self) -> &Client {
        &self.default
    }

    /// Client for a named cluster
    pub fn client_for(&self, name: &str) -> Result<&Client> {
        self.named
            .get(name)
            .ok_or_else(|| MultusError::MissingClusterClient(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockService;

    #[tokio::test]
    async fn test_client_for_unknown_cluster() {
        let clients = ClusterClients::new(MockService::new().into_client());

        let err = clients.client_for("management").err().unwrap();
        assert!(matches!(err, MultusError::MissingClusterClient(name) if name == "management"));
    }

    #[tokio::test]
    async fn test_client_for_registered_cluster() {
        let clients = ClusterClients::new(MockService::new().into_client())
            .with_cluster("management", MockService::new().into_client());

        assert!(clients.client_for("management").is_ok());
    }
}
