// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory host document
//!
//! A small document model loaded from JSON. Rooms are plan polygons extruded
//! to a height; placing elevations creates one view per marker slot, each
//! looking out from the room anchor. View frames sit at the world origin, the
//! same origin-free convention the crop box is fitted in. Mask regions are
//! stored in world coordinates on the view plane through the anchor, the way
//! a host document would persist them.

use crate::error::HostError;
use crate::host::{ElevationHost, RoomId, ViewId};
use interior_elevations_geometry::angles::degrees_to_radians;
use interior_elevations_geometry::{
    AffineTransform, BoundingBox, Line, MaskBoundary, Point3, Room, Vector3, View,
    ViewFrameProjector,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Half width and half height of a freshly placed view's crop box.
pub const INITIAL_CROP_HALF_SIZE: f64 = 10.0;

/// Depth of a freshly placed view's crop box in front of the anchor.
pub const INITIAL_FAR_CLIP: f64 = 30.0;

/// Plan bearings of an elevation marker's slots in degrees, counterclockwise
/// from +X, in slot order: −Y, +X, +Y, −X.
pub const MARKER_SLOT_BEARINGS: [f64; 4] = [270.0, 0.0, 90.0, 180.0];

/// Room as it appears in the JSON model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInput {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    /// Floor elevation.
    #[serde(default)]
    pub level: f64,
    pub height: f64,
    /// Plan loops as `[x, y]` vertices. Empty for an unbound room.
    #[serde(default)]
    pub loops: Vec<Vec<[f64; 2]>>,
    /// Plan view that hosts the room's elevation marker.
    #[serde(default)]
    pub plan: Option<String>,
}

/// Whole document as it appears in JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelInput {
    /// Project north rotation as reported by the project location, radians.
    #[serde(default)]
    pub north_offset_radians: f64,
    pub rooms: Vec<RoomInput>,
    /// Marker slots to create per room (1..=4).
    #[serde(default = "default_slots")]
    pub marker_slots: usize,
}

fn default_slots() -> usize {
    MARKER_SLOT_BEARINGS.len()
}

/// Extruded plan polygon room.
#[derive(Debug, Clone)]
pub struct PlanRoom {
    pub id: RoomId,
    pub name: Option<String>,
    pub level: f64,
    pub height: f64,
    pub loops: Vec<Vec<Point3<f64>>>,
    pub plan: Option<String>,
}

impl PlanRoom {
    fn from_input(input: RoomInput) -> Result<Self, HostError> {
        if !(input.height.is_finite() && input.height >= 0.0) {
            return Err(HostError::InvalidModel(format!(
                "room {} has invalid height {}",
                input.id, input.height
            )));
        }
        let mut loops = Vec::with_capacity(input.loops.len());
        for (index, vertices) in input.loops.into_iter().enumerate() {
            if vertices.len() < 3 {
                return Err(HostError::InvalidModel(format!(
                    "room {} loop {} has {} vertices, need at least 3",
                    input.id,
                    index,
                    vertices.len()
                )));
            }
            loops.push(
                vertices
                    .into_iter()
                    .map(|[x, y]| Point3::new(x, y, input.level))
                    .collect(),
            );
        }
        Ok(Self {
            id: RoomId(input.id),
            name: input.name,
            level: input.level,
            height: input.height,
            loops,
            plan: input.plan,
        })
    }

    /// Even-odd crossing test over every loop in plan.
    fn contains_in_plan(&self, x: f64, y: f64) -> bool {
        let mut inside = false;
        for vertices in &self.loops {
            let n = vertices.len();
            for i in 0..n {
                let a = vertices[i];
                let b = vertices[(i + n - 1) % n];
                if (a.y > y) != (b.y > y) && x < (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl Room for PlanRoom {
    fn boundary_loops(&self) -> Vec<Vec<Line>> {
        self.loops
            .iter()
            .map(|vertices| {
                let n = vertices.len();
                (0..n)
                    .map(|i| Line::new(vertices[i], vertices[(i + 1) % n]))
                    .collect()
            })
            .collect()
    }

    fn is_point_inside(&self, point: &Point3<f64>) -> bool {
        let top = self.level + self.height;
        point.z >= self.level
            && point.z <= top
            && self
                .world_bounding_box()
                .is_some_and(|bbox| bbox.contains_xy(point))
            && self.contains_in_plan(point.x, point.y)
    }

    fn world_bounding_box(&self) -> Option<BoundingBox> {
        let mut points = self.loops.iter().flatten();
        let first = points.next()?;
        let (min, max) = points.fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
        Some(BoundingBox::world(
            Point3::new(min.x, min.y, self.level),
            Point3::new(max.x, max.y, self.level + self.height),
        ))
    }
}

/// Elevation view created by a marker.
#[derive(Debug, Clone)]
pub struct ElevationView {
    pub id: ViewId,
    pub room: RoomId,
    pub plan: String,
    /// Marker location in world space.
    pub anchor: Point3<f64>,
    pub crop: BoundingBox,
}

impl View for ElevationView {
    fn crop_box(&self) -> BoundingBox {
        self.crop
    }

    fn set_crop_box(&mut self, crop_box: BoundingBox) {
        self.crop = crop_box;
    }
}

/// Mask region persisted on a view, loops in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskRegion {
    pub view: ViewId,
    pub inner: [Point3<f64>; 4],
    pub outer: [Point3<f64>; 4],
}

/// In-memory document implementing [`ElevationHost`].
#[derive(Debug, Default)]
pub struct InMemoryModel {
    north_offset_radians: f64,
    marker_slots: usize,
    rooms: Vec<PlanRoom>,
    room_index: FxHashMap<RoomId, usize>,
    views: FxHashMap<ViewId, ElevationView>,
    regions: Vec<MaskRegion>,
    next_view: u32,
}

impl InMemoryModel {
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        let input: ModelInput = serde_json::from_str(json)?;
        Self::from_input(input)
    }

    pub fn from_input(input: ModelInput) -> Result<Self, HostError> {
        if input.marker_slots == 0 || input.marker_slots > MARKER_SLOT_BEARINGS.len() {
            return Err(HostError::InvalidModel(format!(
                "marker_slots must be between 1 and {}, got {}",
                MARKER_SLOT_BEARINGS.len(),
                input.marker_slots
            )));
        }

        let mut model = Self {
            north_offset_radians: input.north_offset_radians,
            marker_slots: input.marker_slots,
            ..Self::default()
        };
        for room_input in input.rooms {
            let room = PlanRoom::from_input(room_input)?;
            if model.room_index.contains_key(&room.id) {
                return Err(HostError::InvalidModel(format!("duplicate room id {}", room.id)));
            }
            model.room_index.insert(room.id, model.rooms.len());
            model.rooms.push(room);
        }
        Ok(model)
    }

    pub fn north_offset_radians(&self) -> f64 {
        self.north_offset_radians
    }

    pub fn rooms(&self) -> &[PlanRoom] {
        &self.rooms
    }

    /// Views created so far, ordered by id.
    pub fn views(&self) -> Vec<&ElevationView> {
        let mut views: Vec<_> = self.views.values().collect();
        views.sort_by_key(|v| v.id);
        views
    }

    pub fn regions(&self) -> &[MaskRegion] {
        &self.regions
    }

    fn initial_view(
        &mut self,
        room: RoomId,
        plan: &str,
        bearing: f64,
        anchor: Point3<f64>,
    ) -> ElevationView {
        let radians = degrees_to_radians(bearing);
        let direction = Vector3::new(radians.cos(), radians.sin(), 0.0);
        let transform = AffineTransform::elevation(direction, Point3::origin());
        let local = Point3::new(
            transform.basis_x.dot(&anchor.coords),
            transform.basis_y.dot(&anchor.coords),
            transform.basis_z.dot(&anchor.coords),
        );
        let id = ViewId(self.next_view);
        self.next_view += 1;

        ElevationView {
            id,
            room,
            plan: plan.to_string(),
            anchor,
            crop: BoundingBox::new(
                Point3::new(
                    local.x - INITIAL_CROP_HALF_SIZE,
                    local.y - INITIAL_CROP_HALF_SIZE,
                    local.z - INITIAL_FAR_CLIP,
                ),
                Point3::new(
                    local.x + INITIAL_CROP_HALF_SIZE,
                    local.y + INITIAL_CROP_HALF_SIZE,
                    local.z,
                ),
                transform,
            ),
        }
    }
}

impl ElevationHost for InMemoryModel {
    type Room = PlanRoom;
    type View = ElevationView;

    fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| r.id).collect()
    }

    fn room(&self, id: RoomId) -> Option<&PlanRoom> {
        self.room_index.get(&id).map(|&i| &self.rooms[i])
    }

    fn room_name(&self, id: RoomId) -> Option<String> {
        self.room(id).and_then(|r| r.name.clone())
    }

    fn place_elevations(
        &mut self,
        room: RoomId,
        center: Point3<f64>,
    ) -> Result<Vec<ViewId>, HostError> {
        let plan = self
            .room(room)
            .ok_or(HostError::RoomNotFound(room))?
            .plan
            .clone();
        let Some(plan) = plan else {
            return Ok(Vec::new());
        };
        if !center.coords.iter().all(|c| c.is_finite()) {
            return Err(HostError::Placement(format!("anchor for room {room} is not finite")));
        }

        let mut ids = Vec::with_capacity(self.marker_slots);
        for &bearing in MARKER_SLOT_BEARINGS.iter().take(self.marker_slots) {
            let view = self.initial_view(room, &plan, bearing, center);
            ids.push(view.id);
            self.views.insert(view.id, view);
        }
        Ok(ids)
    }

    fn view(&self, id: ViewId) -> Option<&ElevationView> {
        self.views.get(&id)
    }

    fn room_and_view_mut(
        &mut self,
        room: RoomId,
        view: ViewId,
    ) -> Result<(&PlanRoom, &mut ElevationView), HostError> {
        let index = *self.room_index.get(&room).ok_or(HostError::RoomNotFound(room))?;
        let elevation = self.views.get_mut(&view).ok_or(HostError::ViewNotFound(view))?;
        Ok((&self.rooms[index], elevation))
    }

    fn create_mask_region(&mut self, view: ViewId, mask: &MaskBoundary) -> Result<(), HostError> {
        let elevation = self.views.get(&view).ok_or(HostError::ViewNotFound(view))?;
        let projector = ViewFrameProjector::new(&elevation.crop.transform)
            .map_err(|e| HostError::Region(format!("view {view}: {e}")))?;
        // Loops are laid on the view plane through the marker anchor.
        let depth = projector.to_local(&elevation.anchor).z;
        let to_world = |corners: [Point3<f64>; 4]| {
            corners.map(|c| projector.to_world(&Point3::new(c.x, c.y, depth)))
        };

        self.regions.push(MaskRegion {
            view,
            inner: to_world(mask.inner.corners()),
            outer: to_world(mask.outer.corners()),
        });
        Ok(())
    }
}
