//! Whole-layout audits: out-of-bounds objects, collisions, per-type
//! distance violations, overcrowding, and exit reachability.
//!
//! `validate` accumulates every problem it finds rather than
//! short-circuiting on the first one, and iterates objects in a
//! deterministic (ascending id) order so results are reproducible for a
//! given layout.

use crate::geometry::{contains, distance_rect_to_rect, intersects};
use crate::layout::{occupied_rect, Layout, LayoutObject};
use crate::object_types::ObjectType;
use crate::routing::find_shortest_path_to_exit;

/// Euclidean distance between rectangle centers below which two objects are
/// flagged as [`ValidationKind::Overcrowding`]. Hard-coded in the original
/// implementation with no stated rationale; kept as a named constant here
/// so a caller who disagrees has one place to override it.
pub const OVERCROWDING_THRESHOLD: f64 = 25.0;

/// The kind of problem a [`ValidationError`] reports.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationKind {
    OutOfBounds,
    Collision,
    DistanceTooSmall { required: f64, actual: f64 },
    /// Advisory: flagged for UX feedback, does not render the layout
    /// invalid.
    Overcrowding,
    NoPathToExit,
}

impl ValidationKind {
    /// `true` for findings that are surfaced for feedback but do not mean
    /// the layout is invalid.
    pub const fn is_advisory(&self) -> bool {
        matches!(self, ValidationKind::Overcrowding)
    }
}

/// A single finding from [`validate`], naming the objects involved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub object_ids: Vec<u64>,
}

impl ValidationError {
    fn new(kind: ValidationKind, object_ids: Vec<u64>) -> Self {
        Self { kind, object_ids }
    }

    pub fn is_advisory(&self) -> bool {
        self.kind.is_advisory()
    }
}

fn required_distance(a: &LayoutObject, b: &LayoutObject) -> f64 {
    let same_type = a.object_type == b.object_type;
    let info_a = a.object_type.info();
    let info_b = b.object_type.info();
    if same_type {
        info_a
            .min_distance_to_same_type
            .max(info_b.min_distance_to_same_type)
    } else {
        info_a.min_distance_to_other.max(info_b.min_distance_to_other)
    }
}

/// Runs every check in §4.4 against `layout` and returns the accumulated
/// findings. An empty result means the layout is fully valid (ignoring any
/// advisory [`ValidationKind::Overcrowding`] findings, which can still be
/// present).
pub fn validate(layout: &Layout) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let objects: Vec<&LayoutObject> = layout.all_objects().collect();
    let room = layout.room_rect();

    // 1. Out of bounds.
    for obj in &objects {
        let rect = occupied_rect(obj);
        if !contains(&room, &rect) {
            errors.push(ValidationError::new(ValidationKind::OutOfBounds, vec![obj.id]));
        }
    }

    // 2-4. Pairwise checks: collision, per-type distance, overcrowding.
    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            let a = objects[i];
            let b = objects[j];
            let rect_a = occupied_rect(a);
            let rect_b = occupied_rect(b);

            let both_walls = a.object_type == ObjectType::Wall && b.object_type == ObjectType::Wall;
            if !both_walls && intersects(&rect_a, &rect_b) {
                errors.push(ValidationError::new(
                    ValidationKind::Collision,
                    vec![a.id, b.id],
                ));
            }

            let required = required_distance(a, b);
            if required > 0.0 {
                let actual = distance_rect_to_rect(&rect_a, &rect_b);
                if actual < required {
                    errors.push(ValidationError::new(
                        ValidationKind::DistanceTooSmall { required, actual },
                        vec![a.id, b.id],
                    ));
                }
            }

            let center_a = rect_a.center();
            let center_b = rect_b.center();
            let center_distance = (center_a.x - center_b.x).hypot(center_a.y - center_b.y);
            if center_distance < OVERCROWDING_THRESHOLD {
                errors.push(ValidationError::new(
                    ValidationKind::Overcrowding,
                    vec![a.id, b.id],
                ));
            }
        }
    }

    // 5. Reachability.
    if !layout.exit_points.is_empty() {
        if let Some(start_obj) = objects.iter().find(|o| o.object_type != ObjectType::Wall) {
            let start = occupied_rect(start_obj).center();
            if find_shortest_path_to_exit(layout, start, None).is_none() {
                errors.push(ValidationError::new(ValidationKind::NoPathToExit, vec![]));
            }
        }
    }

    errors
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::Metadata;
    use crate::object_types::ObjectType;

    #[test]
    fn simple_overlap_reports_collision_and_distance() {
        let mut layout = Layout::new(100.0, 100.0);
        let a = layout
            .add_object(ObjectType::Desk, 10.0, 10.0, 20.0, 20.0, 0.0, Metadata::new(), None)
            .unwrap()
            .id;
        let b = layout
            .add_object(ObjectType::Desk, 25.0, 15.0, 20.0, 20.0, 0.0, Metadata::new(), None)
            .unwrap()
            .id;

        let errors = validate(&layout);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationKind::Collision && e.object_ids == vec![a, b]));
        assert!(errors.iter().any(|e| matches!(
            e.kind,
            ValidationKind::DistanceTooSmall { required, .. } if required == 50.0
        ) && e.object_ids == vec![a, b]));
    }

    #[test]
    fn wall_convention_collision_with_desk() {
        let mut layout = Layout::new(100.0, 40.0);
        let wall = layout
            .add_object(
                ObjectType::Wall,
                0.0,
                20.0,
                100.0,
                10.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap()
            .id;
        let desk = layout
            .add_object(ObjectType::Desk, 10.0, 14.0, 10.0, 10.0, 0.0, Metadata::new(), None)
            .unwrap()
            .id;

        let errors = validate(&layout);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationKind::Collision && e.object_ids == vec![wall, desk]));
    }

    #[test]
    fn crossing_walls_do_not_collide() {
        let mut layout = Layout::new(200.0, 200.0);
        layout
            .add_object(
                ObjectType::Wall,
                0.0,
                50.0,
                100.0,
                10.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();
        layout
            .add_object(
                ObjectType::Wall,
                50.0,
                0.0,
                10.0,
                100.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();

        let errors = validate(&layout);
        assert!(!errors.iter().any(|e| e.kind == ValidationKind::Collision));
    }

    #[test]
    fn empty_layout_is_valid() {
        let layout = Layout::new(100.0, 100.0);
        assert!(validate(&layout).is_empty());
    }

    #[test]
    fn no_path_to_exit_is_reported() {
        let mut layout = Layout::with_grid_size(100.0, 40.0, 10.0);
        layout
            .add_object(
                ObjectType::Wall,
                50.0,
                0.0,
                10.0,
                40.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();
        layout
            .add_object(ObjectType::Desk, 10.0, 10.0, 10.0, 10.0, 0.0, Metadata::new(), None)
            .unwrap();
        layout.exit_points.push(crate::geometry::Point::new(90.0, 20.0));

        let errors = validate(&layout);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationKind::NoPathToExit));
    }

    #[test]
    fn nearby_objects_are_flagged_as_advisory_overcrowding() {
        let mut layout = Layout::new(200.0, 200.0);
        // Centers 10 units apart, well under the 25-unit threshold, but far
        // enough apart (and different enough in type) that collision and
        // distance-too-small stay silent.
        layout
            .add_object(
                ObjectType::Plant,
                0.0,
                0.0,
                1.0,
                1.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();
        layout
            .add_object(
                ObjectType::Plant,
                10.0,
                0.0,
                1.0,
                1.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();

        let errors = validate(&layout);
        let overcrowding: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationKind::Overcrowding)
            .collect();
        assert_eq!(overcrowding.len(), 1);
        assert!(overcrowding[0].is_advisory());
    }

    #[test]
    fn distant_objects_are_not_flagged_as_overcrowding() {
        let mut layout = Layout::new(200.0, 200.0);
        layout
            .add_object(
                ObjectType::Plant,
                0.0,
                0.0,
                1.0,
                1.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();
        layout
            .add_object(
                ObjectType::Plant,
                100.0,
                100.0,
                1.0,
                1.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();

        let errors = validate(&layout);
        assert!(!errors.iter().any(|e| e.kind == ValidationKind::Overcrowding));
    }
}
