// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Interior Elevations Processing
//!
//! Drives the geometry core across a whole document: rooms are visited one at
//! a time, elevation views are placed by the host, and each view gets a fitted
//! crop box and a masking region. Failures are recorded per room in a
//! [`BatchReport`] and never stop the batch.

pub mod error;
pub mod host;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{HostError, ProcessError, Result};
pub use host::{ElevationHost, RoomId, ViewId};
pub use model::{InMemoryModel, ModelInput, RoomInput};
pub use pipeline::{process_room, run_batch, ElevationContext};
pub use report::{BatchReport, RoomOutcome, RoomReport, SkipReason, ViewReport};
