// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for resource discovery, cluster clients, and namespace lookup.

pub mod client;
pub mod discovery;
pub mod namespaces;

pub use client::ClusterClients;
pub use discovery::{api_resource_registration, is_api_resource_registered, is_scc_supported, Registration};
pub use namespaces::{get_openshift_namespaces, IgnoredNamespaces};
