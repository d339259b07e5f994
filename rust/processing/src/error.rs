// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the elevation pipeline.

use crate::host::{RoomId, ViewId};
use thiserror::Error;

/// Failures raised by a host document.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("view not found: {0}")]
    ViewNotFound(ViewId),

    #[error("elevation placement failed: {0}")]
    Placement(String),

    #[error("mask region creation failed: {0}")]
    Region(String),

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("model parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that stops one room from being processed.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Geometry(#[from] interior_elevations_geometry::Error),

    #[error(transparent)]
    Host(#[from] HostError),
}

pub type Result<T> = std::result::Result<T, ProcessError>;
