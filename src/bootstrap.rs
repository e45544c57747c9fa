// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster topology and API server information gathered at startup.

use std::collections::BTreeMap;

/// API server entry pointing at the local cluster's default endpoint
pub const API_SERVER_DEFAULT_LOCAL: &str = "default-local";

/// Control plane or infrastructure topology of the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopologyMode {
    #[default]
    HighlyAvailable,
    SingleReplica,
    External,
}

impl From<&str> for TopologyMode {
    fn from(s: &str) -> Self {
        match s {
            "SingleReplica" => TopologyMode::SingleReplica,
            "External" => TopologyMode::External,
            _ => TopologyMode::HighlyAvailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServer {
    pub host: String,
    pub port: String,
}

#[derive(Debug, Clone, Default)]
pub struct InfraStatus {
    pub control_plane_topology: TopologyMode,
    pub infrastructure_topology: TopologyMode,
    pub api_servers: BTreeMap<String, ApiServer>,
}

#[derive(Debug, Clone, Default)]
pub struct BootstrapResult {
    pub infra: InfraStatus,
}

impl BootstrapResult {
    pub fn api_server(&self, name: &str) -> Option<&ApiServer> {
        self.infra.api_servers.get(name)
    }
}

/// Number of admission controller replicas for the cluster topology
pub fn admission_controller_replicas(bootstrap: &BootstrapResult) -> u32 {
    let infra = &bootstrap.infra;
    match infra.control_plane_topology {
        TopologyMode::External if infra.infrastructure_topology == TopologyMode::SingleReplica => 1,
        TopologyMode::SingleReplica => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bootstrap(control_plane: TopologyMode, infrastructure: TopologyMode) -> BootstrapResult {
        BootstrapResult {
            infra: InfraStatus {
                control_plane_topology: control_plane,
                infrastructure_topology: infrastructure,
                api_servers: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_replicas_highly_available() {
        let bootstrap = make_bootstrap(TopologyMode::HighlyAvailable, TopologyMode::HighlyAvailable);
        assert_eq!(admission_controller_replicas(&bootstrap), 2);
    }

    #[test]
    fn test_replicas_single_node() {
        let bootstrap = make_bootstrap(TopologyMode::SingleReplica, TopologyMode::SingleReplica);
        assert_eq!(admission_controller_replicas(&bootstrap), 1);
    }

    #[test]
    fn test_replicas_external_control_plane() {
        let bootstrap = make_bootstrap(TopologyMode::External, TopologyMode::HighlyAvailable);
        assert_eq!(admission_controller_replicas(&bootstrap), 2);

        let bootstrap = make_bootstrap(TopologyMode::External, TopologyMode::SingleReplica);
        assert_eq!(admission_controller_replicas(&bootstrap), 1);
    }

    #[test]
    fn test_topology_parsing() {
        assert_eq!(TopologyMode::from("SingleReplica"), TopologyMode::SingleReplica);
        assert_eq!(TopologyMode::from("External"), TopologyMode::External);
        assert_eq!(TopologyMode::from("HighlyAvailable"), TopologyMode::HighlyAvailable);
        assert_eq!(TopologyMode::from("bogus"), TopologyMode::HighlyAvailable);
    }
}
