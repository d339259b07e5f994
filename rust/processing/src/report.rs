// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable batch results

use crate::host::{RoomId, ViewId};
use interior_elevations_geometry::{BoundaryLoop, BoundingBox, MaskBoundary, Point3};
use serde::{Deserialize, Serialize};

/// Point as a plain `[x, y, z]` array for JSON output.
pub type Coords = [f64; 3];

#[inline]
pub fn coords(p: &Point3<f64>) -> Coords {
    [p.x, p.y, p.z]
}

/// Why a room produced no elevations without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The room has no boundary data.
    Unbound,
    /// No plan view hosts the room.
    NoPlan,
}

/// One elevation view after its crop box and mask were computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewReport {
    pub view: ViewId,
    pub crop_min: Coords,
    pub crop_max: Coords,
    /// Inner mask loop corners, crop frame.
    pub inner: [Coords; 4],
    /// Outer mask loop corners, crop frame.
    pub outer: [Coords; 4],
    /// Facing relative to project north, degrees.
    pub facing_degrees: f64,
}

impl ViewReport {
    pub fn new(view: ViewId, crop: &BoundingBox, mask: &MaskBoundary, facing_degrees: f64) -> Self {
        Self {
            view,
            crop_min: coords(&crop.min),
            crop_max: coords(&crop.max),
            inner: loop_corners(&mask.inner),
            outer: loop_corners(&mask.outer),
            facing_degrees,
        }
    }
}

fn loop_corners(boundary: &BoundaryLoop) -> [Coords; 4] {
    boundary.corners().map(|c| coords(&c))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoomOutcome {
    Placed { center: Coords, views: Vec<ViewReport> },
    Skipped { reason: SkipReason },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    pub room: RoomId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub outcome: RoomOutcome,
}

/// Outcome of a full batch, one entry per room in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub north_offset_degrees: f64,
    pub rooms: Vec<RoomReport>,
}

impl BatchReport {
    pub fn push(&mut self, report: RoomReport) {
        self.rooms.push(report);
    }

    pub fn placed(&self) -> usize {
        self.count(|o| matches!(o, RoomOutcome::Placed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RoomOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RoomOutcome::Failed { .. }))
    }

    pub fn view_count(&self) -> usize {
        self.rooms
            .iter()
            .map(|r| match &r.outcome {
                RoomOutcome::Placed { views, .. } => views.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn get(&self, room: RoomId) -> Option<&RoomReport> {
        self.rooms.iter().find(|r| r.room == room)
    }

    fn count(&self, pred: impl Fn(&RoomOutcome) -> bool) -> usize {
        self.rooms.iter().filter(|r| pred(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let report = RoomReport {
            room: RoomId(7),
            name: None,
            outcome: RoomOutcome::Skipped {
                reason: SkipReason::NoPlan,
            },
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["room"], 7);
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "no_plan");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn counts_by_outcome() {
        let mut batch = BatchReport::default();
        batch.push(RoomReport {
            room: RoomId(1),
            name: Some("Kitchen".into()),
            outcome: RoomOutcome::Failed {
                reason: "boom".into(),
            },
        });
        batch.push(RoomReport {
            room: RoomId(2),
            name: None,
            outcome: RoomOutcome::Placed {
                center: [0.0; 3],
                views: Vec::new(),
            },
        });

        assert_eq!(batch.failed(), 1);
        assert_eq!(batch.placed(), 1);
        assert_eq!(batch.skipped(), 0);
        assert_eq!(batch.get(RoomId(1)).and_then(|r| r.name.as_deref()), Some("Kitchen"));
    }
}
