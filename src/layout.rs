//! The authoritative in-memory layout model: room dimensions, typed
//! objects, exit points and ID allocation.
//!
//! `Layout` is pure data plus CRUD — it never runs placement or validation
//! rules itself (those live in [`crate::placement`] and
//! [`crate::validation`]), keeping with the Design Note in the spec that
//! mutation funnels through narrow, borrow-checker-friendly entry points
//! rather than handing out long-lived `&mut LayoutObject` references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::geometry::{Point, Rect};
use crate::object_types::{recommended_capacity, MAX_ROOM_CAPACITY_DEFAULT, ObjectType};

/// Free-form string metadata attached to a [`LayoutObject`]. The editor
/// uses a `"ui_type"` key to remember a finer UI label than [`ObjectType`]
/// distinguishes; this crate treats every key the same way.
pub type Metadata = BTreeMap<String, String>;

/// The default grid size for a freshly constructed [`Layout`]. The
/// persisted format's own default, used when `grid_size` is absent from
/// loaded JSON, is `50.0` (see [`crate::persistence`]) — the spec records
/// both defaults as deliberate, not a typo.
pub const DEFAULT_GRID_SIZE: f64 = 40.0;

/// A single placed item: furniture, a wall segment, a door, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutObject {
    pub id: u64,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub metadata: Metadata,
}

/// The axis-aligned rectangle an object physically covers, after applying
/// the wall centerline convention.
///
/// For every type other than [`ObjectType::Wall`], `(x, y)` is the
/// top-left corner. For a wall, `thickness = min(width, height)` and:
/// - if `width >= height` (horizontal wall), `y` is the centerline Y and
///   the occupied rectangle is `Rect(x, y - thickness/2, width, thickness)`;
/// - otherwise (vertical wall), `x` is the centerline X and the occupied
///   rectangle is `Rect(x - thickness/2, y, thickness, height)`.
///
/// This is the only legal way to obtain a wall's geometry; placement,
/// validation and routing all go through it rather than re-deriving it
/// from the raw fields.
pub fn occupied_rect(obj: &LayoutObject) -> Rect {
    if obj.object_type != ObjectType::Wall {
        return Rect::new(obj.x, obj.y, obj.width, obj.height);
    }

    let thickness = obj.width.min(obj.height);
    if obj.width >= obj.height {
        Rect::new(obj.x, obj.y - thickness / 2.0, obj.width, thickness)
    } else {
        Rect::new(obj.x - thickness / 2.0, obj.y, thickness, obj.height)
    }
}

/// The in-memory state of a single room: dimensions, objects, exits, and
/// the parameters placement/routing read (`grid_size`, `min_clearance`).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub room_width: f64,
    pub room_height: f64,
    pub grid_size: f64,
    /// Layout-level minimum clearance the placement engine enforces
    /// between every pair of objects, regardless of type. Per-type
    /// clearance rules live in [`crate::validation`] instead.
    pub min_clearance: f64,
    /// Advisory maximum occupancy; see [`crate::object_types::recommended_capacity`].
    pub max_capacity: u32,
    pub exit_points: Vec<Point>,
    objects: BTreeMap<u64, LayoutObject>,
    next_id: u64,
}

impl Layout {
    /// Creates an empty room with the fresh-layout default grid size
    /// (`40.0`, see [`DEFAULT_GRID_SIZE`]).
    pub fn new(room_width: f64, room_height: f64) -> Self {
        Self::with_grid_size(room_width, room_height, DEFAULT_GRID_SIZE)
    }

    pub fn with_grid_size(room_width: f64, room_height: f64, grid_size: f64) -> Self {
        Self {
            room_width,
            room_height,
            grid_size,
            min_clearance: 0.0,
            max_capacity: MAX_ROOM_CAPACITY_DEFAULT,
            exit_points: Vec::new(),
            objects: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn room_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.room_width, self.room_height)
    }

    pub fn room_area(&self) -> f64 {
        self.room_width * self.room_height
    }

    /// Advisory recommended headcount for this room's floor area.
    pub fn recommended_capacity(&self) -> u32 {
        recommended_capacity(self.room_area())
    }

    /// Creates an object and adds it to the layout, returning a reference
    /// to it.
    ///
    /// Fails with [`ModelError::NonPositiveSize`] if `width` or `height` is
    /// not strictly positive, or [`ModelError::DuplicateId`] if
    /// `forced_id` collides with an existing object. On success, the ID
    /// allocator is advanced so the next generated ID is strictly greater
    /// than any ID currently in the layout.
    #[allow(clippy::too_many_arguments)]
    pub fn add_object(
        &mut self,
        object_type: ObjectType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
        metadata: Metadata,
        forced_id: Option<u64>,
    ) -> Result<&LayoutObject, ModelError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ModelError::NonPositiveSize { width, height });
        }

        let id = match forced_id {
            Some(id) if self.objects.contains_key(&id) => {
                return Err(ModelError::DuplicateId(id));
            }
            Some(id) => id,
            None => self.next_id,
        };

        if id >= self.next_id {
            self.next_id = id + 1;
        }

        let object = LayoutObject {
            id,
            object_type,
            x,
            y,
            width,
            height,
            rotation,
            metadata,
        };
        self.objects.insert(id, object);
        Ok(self.objects.get(&id).expect("just inserted"))
    }

    /// Removes the object with the given id. Silently no-ops if no such
    /// object exists.
    pub fn remove_object(&mut self, id: u64) {
        self.objects.remove(&id);
    }

    pub fn get_object(&self, id: u64) -> Option<&LayoutObject> {
        self.objects.get(&id)
    }

    /// Visits every object exactly once; iteration order is the object's
    /// id order (stable and deterministic, though the spec does not
    /// require any particular order).
    pub fn all_objects(&self) -> impl Iterator<Item = &LayoutObject> {
        self.objects.values()
    }

    pub fn objects_by_type(&self, object_type: ObjectType) -> impl Iterator<Item = &LayoutObject> {
        self.objects
            .values()
            .filter(move |o| o.object_type == object_type)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The id [`Layout::add_object`] would assign on the next call without
    /// a `forced_id`.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn object_mut(&mut self, id: u64) -> Option<&mut LayoutObject> {
        self.objects.get_mut(&id)
    }
}
