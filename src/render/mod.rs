// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest rendering.
//!
//! A manifest directory holds YAML (or JSON) templates. Each file is rendered
//! with the values of a [`RenderData`] and may yield several documents; every
//! non-empty document becomes one [`DynamicObject`].

pub mod apply;

pub use apply::apply_objects;

use crate::error::{MultusError, Result};
use kube::api::DynamicObject;
use minijinja::{Environment, UndefinedBehavior};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const TEMPLATE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Values available to manifest templates
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RenderData {
    data: BTreeMap<String, serde_json::Value>,
}

impl RenderData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Render every template below `dir` into Kubernetes objects
#[instrument(skip(data))]
pub fn render_dir(dir: &Path, data: &RenderData) -> Result<Vec<DynamicObject>> {
    let mut files = Vec::new();
    collect_templates(dir, &mut files)?;
    files.sort();

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let mut objects = Vec::new();
    for path in files {
        let source = fs::read_to_string(&path).map_err(|source| MultusError::ManifestIoError {
            path: path.clone(),
            source,
        })?;
        let rendered = env
            .render_str(&source, data)
            .map_err(|source| MultusError::TemplateError {
                path: path.clone(),
                source,
            })?;
        let decoded = decode_documents(&path, &rendered)?;
        debug!("Rendered {} objects from {}", decoded.len(), path.display());
        objects.extend(decoded);
    }

    Ok(objects)
}

fn collect_templates(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let io_error = |source| MultusError::ManifestIoError {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            collect_templates(&path, files)?;
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| TEMPLATE_EXTENSIONS.contains(&e))
        {
            files.push(path);
        }
    }
    Ok(())
}

fn decode_documents(path: &Path, rendered: &str) -> Result<Vec<DynamicObject>> {
    let decode_error = |source| MultusError::ManifestDecodeError {
        path: path.to_path_buf(),
        source,
    };

    let mut objects = Vec::new();
    for document in serde_yaml::Deserializer::from_str(rendered) {
        let value = serde_yaml::Value::deserialize(document).map_err(decode_error)?;
        if value.is_null() {
            continue;
        }
        if value.get("apiVersion").is_none() || value.get("kind").is_none() {
            return Err(MultusError::InvalidManifest {
                path: path.to_path_buf(),
                reason: "document is missing apiVersion or kind".to_string(),
            });
        }
        objects.push(serde_yaml::from_value(value).map_err(decode_error)?);
    }
    Ok(objects)
}
