// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API resource discovery utilities

use crate::constants::scc;
use crate::error::{MultusError, Result};
use crate::status::is_not_found_error;
use kube::{core::GroupVersion, Client};
use tracing::{debug, instrument};

/// Outcome of looking up a resource through the discovery API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The group/version serves the resource
    Registered,
    /// The group/version exists but does not serve the resource
    NotRegistered,
    /// The group/version itself is not served by the cluster
    GroupVersionNotFound,
}

impl Registration {
    pub fn is_registered(self) -> bool {
        self == Registration::Registered
    }
}

fn api_version(gv: &GroupVersion) -> String {
    if gv.group.is_empty() {
        gv.version.clone()
    } else {
        format!("{}/{}", gv.group, gv.version)
    }
}

/// Look up `resource_name` (plural or singular) in the resources served for
/// `gv`. A not found response for the group/version is not an error.
#[instrument(skip(client), fields(group_version = %api_version(gv)))]
pub async fn api_resource_registration(
    client: &Client,
    gv: &GroupVersion,
    resource_name: &str,
) -> Result<Registration> {
    let group_version = api_version(gv);
    let response = if gv.group.is_empty() {
        client.list_core_api_resources(&gv.version).await
    } else {
        client.list_api_group_resources(&group_version).await
    };

    let resources = match response {
        Ok(list) => list,
        Err(e) if is_not_found_error(&e) => {
            debug!("Group version {} is not served", group_version);
            return Ok(Registration::GroupVersionNotFound);
        }
        Err(source) => {
            return Err(MultusError::DiscoveryError {
                group_version,
                source,
            })
        }
    };

    let found = resources
        .resources
        .iter()
        .any(|r| r.name == resource_name || r.singular_name == resource_name);

    if found {
        Ok(Registration::Registered)
    } else {
        Ok(Registration::NotRegistered)
    }
}

/// Determine if a specified API resource is registered on the cluster
pub async fn is_api_resource_registered(
    client: &Client,
    gv: &GroupVersion,
    resource_name: &str,
) -> Result<bool> {
    Ok(api_resource_registration(client, gv, resource_name)
        .await?
        .is_registered())
}

/// Check whether the cluster serves SecurityContextConstraints
pub async fn is_scc_supported(client: &Client) -> Result<bool> {
    is_api_resource_registered(client, &GroupVersion::gv(scc::GROUP, scc::VERSION), scc::RESOURCE).await
}
