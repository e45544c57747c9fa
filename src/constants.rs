// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used for server-side apply
pub const OPERATOR_NAME: &str = "multus-admission";

/// Name under which the management cluster client is registered
pub const MANAGEMENT_CLUSTER_NAME: &str = "management";

/// Annotation naming the cluster a rendered object is applied to
pub const CLUSTER_NAME_ANNOTATION: &str = "network.operator.openshift.io/cluster-name";

/// Name of the validating webhook served by the admission controller
pub const MULTUS_VALIDATING_WEBHOOK: &str = "multus.openshift.io";

/// Namespace the admission controller runs in on standalone clusters
pub const DEFAULT_ADMISSION_CONTROLLER_NAMESPACE: &str = "openshift-multus";

/// Manifest directory, relative to the configured manifest root
pub const MANIFEST_SUBDIR: &str = "network/multus-admission-controller";

/// Label carrying the hosted cluster ID
pub const CLUSTER_ID_LABEL: &str = "_id";

/// Label selector for namespaces the admission controller ignores
pub const MONITORED_NAMESPACE_SELECTOR: &str = "openshift.io/cluster-monitoring==true";

/// Service CA published by the management cluster
pub mod service_ca {
    pub const CONFIG_MAP: &str = "openshift-service-ca.crt";
    pub const KEY: &str = "service-ca.crt";
}

/// SecurityContextConstraints API
pub mod scc {
    pub const GROUP: &str = "security.openshift.io";
    pub const VERSION: &str = "v1";
    pub const RESOURCE: &str = "securitycontextconstraints";
}
