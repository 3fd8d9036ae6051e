// Copyright 2026 The map_transformer Contributors under the terms of the MIT
// License as detailed at <http://opensource.org/licenses/MIT>.

//! The error taxonomy: *input faults* (bad external data) and *logic faults*
//! (the caller broke the API contract). See the crate docs for which calls
//! can produce which.

use std::path::PathBuf;

/// A problem with the document or files being loaded. Always aborts the
/// current [`load`](crate::MapTransformer::load) and leaves the instance
/// empty; never indicates a bug in this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InputFault {
    #[error("failed to parse input document: {0}")]
    Parse(String),

    #[error("correspondence point list for {map} is missing or empty")]
    EmptyCorrespondence { map: MapName },

    #[error(
        "correspondence point lists have different lengths: \
         ref has {ref_len}, robot has {robot_len}"
    )]
    LengthMismatch { ref_len: usize, robot_len: usize },

    #[error("{map} map size is missing or not positive")]
    InvalidSize { map: MapName },

    #[error("robot map transform scale must be non-zero in both axes, got ({sx}, {sy})")]
    ZeroScale { sx: f64, sy: f64 },

    #[error(
        "ref map rectangle and translated robot map rectangle do not overlap"
    )]
    NonOverlappingRects,

    #[error("image file for {map} not found: {path}")]
    ImageMissing { map: MapName, path: PathBuf },

    #[error("image file for {map} could not be decoded: {path} ({source})")]
    ImageDecode {
        map: MapName,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "image file for {map} has size {actual_w}x{actual_h}, \
         but the map declares {declared_w}x{declared_h}"
    )]
    ImageSizeMismatch {
        map: MapName,
        declared_w: f64,
        declared_h: f64,
        actual_w: u32,
        actual_h: u32,
    },
}

/// Which map descriptor an [`InputFault`] or log message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapName {
    Ref,
    Robot,
}

impl std::fmt::Display for MapName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapName::Ref => write!(f, "ref_map"),
            MapName::Robot => write!(f, "robot_map"),
        }
    }
}

/// The caller violated this crate's state-machine contract. Never caused by
/// the content of a document.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LogicFault {
    #[error("load() called on an instance that is already loaded")]
    AlreadyLoaded,

    #[error("operation requires a loaded instance, but this instance is empty")]
    NotLoaded,

    #[error("triangulator produced a degenerate (zero-area) triangle")]
    DegenerateTriangle,
}

/// Either disjoint error kind, returned by every fallible public operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputFault),
    #[error(transparent)]
    Logic(#[from] LogicFault),
}

pub type Result<T> = std::result::Result<T, Error>;
