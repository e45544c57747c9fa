// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply of rendered objects

use crate::constants::CLUSTER_NAME_ANNOTATION;
use crate::error::{MultusError, Result};
use crate::kubernetes::ClusterClients;
use kube::{
    api::{Api, DynamicObject, GroupVersionKind, Patch, PatchParams},
    discovery::ApiResource,
    Client, ResourceExt,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

fn api_resource_for(obj: &DynamicObject) -> Result<ApiResource> {
    let types = obj.types.as_ref().ok_or_else(|| MultusError::InvalidManifest {
        path: PathBuf::from(obj.name_any()),
        reason: "object has no apiVersion or kind".to_string(),
    })?;

    let (group, version) = match types.api_version.split_once('/') {
        Some((group, version)) => (group.to_string(), version.to_string()),
        None => (String::new(), types.api_version.clone()),
    };

    let gvk = GroupVersionKind {
        group,
        version,
        kind: types.kind.clone(),
    };
    Ok(ApiResource::from_gvk(&gvk))
}

/// Client an object is applied with: the cluster named by its cluster-name
/// annotation, or the default cluster
fn client_for_object<'a>(clients: &'a ClusterClients, obj: &DynamicObject) -> Result<&'a Client> {
    match obj.annotations().get(CLUSTER_NAME_ANNOTATION) {
        Some(cluster) => clients.client_for(cluster),
        None => Ok(clients.default_client()),
    }
}

/// Apply objects in order with server-side apply, forcing ownership for `field_manager`
#[instrument(skip(clients, objects), fields(count = objects.len()))]
pub async fn apply_objects(
    clients: &ClusterClients,
    objects: &[DynamicObject],
    field_manager: &str,
) -> Result<()> {
    let params = PatchParams::apply(field_manager).force();

    for obj in objects {
        let resource = api_resource_for(obj)?;
        let client = client_for_object(clients, obj)?;
        let name = obj.name_any();
        let api: Api<DynamicObject> = match obj.namespace() {
            Some(ns) => Api::namespaced_with(client.clone(), &ns, &resource),
            None => Api::all_with(client.clone(), &resource),
        };

        api.patch(&name, &params, &Patch::Apply(obj)).await?;
        debug!("Applied {} {}", resource.kind, name);
    }

    info!("Applied {} objects", objects.len());
    Ok(())
}
