//! Local placement decisions: can a candidate rectangle go here? Can an
//! existing object move to a new position?
//!
//! Both checks enforce room containment, pairwise non-overlap and a single
//! global [`crate::layout::Layout::min_clearance`]. Per-type distance rules
//! are the validator's job (§4.4), not this module's.

use std::fmt;

use crate::geometry::{distance_rect_to_rect, intersects, Rect};
use crate::layout::{occupied_rect, Layout};

/// The outcome of a placement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementReason {
    Ok,
    OutOfBounds,
    Collision,
    TooClose,
    NotFound,
    InvalidInput,
}

impl fmt::Display for PlacementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Checks whether `candidate` can be placed in `layout`.
///
/// `ignore_id`, when given, excludes that object from the collision and
/// clearance checks (used by [`move_object`] to let an object pass through
/// its own current footprint).
pub fn can_place(layout: &Layout, candidate: &Rect, ignore_id: Option<u64>) -> (bool, PlacementReason) {
    if candidate.width <= 0.0 || candidate.height <= 0.0 {
        return (false, PlacementReason::InvalidInput);
    }

    if !crate::geometry::contains(&layout.room_rect(), candidate) {
        return (false, PlacementReason::OutOfBounds);
    }

    for other in layout.all_objects() {
        if Some(other.id) == ignore_id {
            continue;
        }

        let other_rect = occupied_rect(other);

        if intersects(candidate, &other_rect) {
            return (false, PlacementReason::Collision);
        }

        if layout.min_clearance > 0.0
            && distance_rect_to_rect(candidate, &other_rect) < layout.min_clearance
        {
            return (false, PlacementReason::TooClose);
        }
    }

    (true, PlacementReason::Ok)
}

/// Attempts to move the object `id` to a new origin `(new_x, new_y)`,
/// keeping its existing width/height and wall-centerline convention.
///
/// The candidate rectangle is checked *before* any mutation; on failure
/// the layout is left exactly as it was. On success, only `x` and `y` are
/// updated — width, height, rotation and metadata are untouched.
pub fn move_object(layout: &mut Layout, id: u64, new_x: f64, new_y: f64) -> (bool, PlacementReason) {
    let Some(existing) = layout.get_object(id) else {
        return (false, PlacementReason::NotFound);
    };

    // Build the candidate rect at the new origin using the object's own
    // wall-centerline convention: a horizontal wall's `y` is a centerline
    // Y, not a top-left Y, and the occupied rect must be recomputed
    // accordingly rather than simply translating the current one.
    let mut candidate_object = existing.clone();
    candidate_object.x = new_x;
    candidate_object.y = new_y;
    let candidate_rect = occupied_rect(&candidate_object);

    let (ok, reason) = can_place(layout, &candidate_rect, Some(id));
    if !ok {
        return (false, reason);
    }

    let object = layout
        .object_mut(id)
        .expect("existence already confirmed above");
    object.x = new_x;
    object.y = new_y;

    (true, PlacementReason::Ok)
}

impl Layout {
    /// Attempts to move the object `id` to `(x, y)`. See [`move_object`].
    pub fn try_move(&mut self, id: u64, x: f64, y: f64) -> (bool, PlacementReason) {
        move_object(self, id, x, y)
    }

    /// Checks whether `candidate` could be placed in this layout. See
    /// [`can_place`].
    pub fn can_place(&self, candidate: &Rect, ignore_id: Option<u64>) -> (bool, PlacementReason) {
        can_place(self, candidate, ignore_id)
    }
}
