// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! Deserializes the YAML input document into an unvalidated draft record.
//!
//! This module only rejects documents that don't match the expected shape
//! at all (malformed YAML, wrong types, unknown keys). Semantic checks —
//! missing sizes, empty correspondence lists, zero scale, and so on — are
//! [`crate::validate`]'s job, not this one.

use serde::Deserialize;

use crate::error::InputFault;

/// One `[x, y]` pair as written in the document.
pub type RawPoint = (f64, f64);

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawMap {
    pub name: String,
    #[serde(default)]
    pub image_file: Option<String>,
    #[serde(default)]
    pub size: Option<RawPoint>,
    #[serde(default)]
    pub correspondence_points: Option<Vec<RawPoint>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawTransform {
    #[serde(default)]
    pub scale: Option<RawPoint>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub translation: Option<RawPoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRobotMap {
    pub name: String,
    #[serde(default)]
    pub image_file: Option<String>,
    #[serde(default)]
    pub size: Option<RawPoint>,
    #[serde(default)]
    pub correspondence_points: Option<Vec<RawPoint>>,
    #[serde(default)]
    pub transform: Option<RawTransform>,
}

/// Top-level document shape. Note there is no `base_map` alias: a document
/// written against the historical schema fails here as an unknown field,
/// per the modern-schema-only decision recorded in DESIGN.md.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDocument {
    pub ref_map: RawMap,
    pub robot_map: RawRobotMap,
}

/// Parses `text` as the YAML input document. Fails only on structurally
/// invalid documents; never panics.
pub(crate) fn parse_document(text: &str) -> Result<RawDocument, InputFault> {
    serde_yaml::from_str(text).map_err(|e| InputFault::Parse(e.to_string()))
}
