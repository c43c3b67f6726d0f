//! The closed set of furniture/wall/infrastructure types a [`crate::layout::LayoutObject`]
//! can take, and their static metadata (§6.3 of the design).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Informational grouping for an [`ObjectType`], surfaced to editors but not
/// otherwise consulted by placement, validation or routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Furniture,
    Decoration,
    Infrastructure,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Furniture => "furniture",
            Category::Decoration => "decoration",
            Category::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed enumeration of object kinds a layout can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Desk,
    Chair,
    Armchair,
    Plant,
    Wall,
    Door,
    Printer,
    #[serde(rename = "meeting_table")]
    MeetingTable,
    Sink,
    Toilet,
    Washbasin,
}

impl ObjectType {
    pub const ALL: [ObjectType; 11] = [
        ObjectType::Desk,
        ObjectType::Chair,
        ObjectType::Armchair,
        ObjectType::Plant,
        ObjectType::Wall,
        ObjectType::Door,
        ObjectType::Printer,
        ObjectType::MeetingTable,
        ObjectType::Sink,
        ObjectType::Toilet,
        ObjectType::Washbasin,
    ];

    /// The lowercase name used in the persisted JSON format and in
    /// diagnostics (`"meeting_table"` for [`ObjectType::MeetingTable`]).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Desk => "desk",
            ObjectType::Chair => "chair",
            ObjectType::Armchair => "armchair",
            ObjectType::Plant => "plant",
            ObjectType::Wall => "wall",
            ObjectType::Door => "door",
            ObjectType::Printer => "printer",
            ObjectType::MeetingTable => "meeting_table",
            ObjectType::Sink => "sink",
            ObjectType::Toilet => "toilet",
            ObjectType::Washbasin => "washbasin",
        }
    }

    /// Static metadata for this type (§6.3).
    pub const fn info(&self) -> ObjectTypeInfo {
        match self {
            ObjectType::Desk => ObjectTypeInfo {
                default_width: 120.0,
                default_height: 60.0,
                min_distance_to_same_type: 50.0,
                min_distance_to_other: 30.0,
                category: Category::Furniture,
                walkable: false,
            },
            ObjectType::Chair => ObjectTypeInfo {
                default_width: 40.0,
                default_height: 40.0,
                min_distance_to_same_type: 20.0,
                min_distance_to_other: 20.0,
                category: Category::Furniture,
                walkable: false,
            },
            ObjectType::Armchair => ObjectTypeInfo {
                default_width: 60.0,
                default_height: 60.0,
                min_distance_to_same_type: 20.0,
                min_distance_to_other: 20.0,
                category: Category::Furniture,
                walkable: false,
            },
            ObjectType::Plant => ObjectTypeInfo {
                default_width: 40.0,
                default_height: 40.0,
                min_distance_to_same_type: 10.0,
                min_distance_to_other: 10.0,
                category: Category::Decoration,
                walkable: false,
            },
            ObjectType::Wall => ObjectTypeInfo {
                default_width: 100.0,
                default_height: 10.0,
                min_distance_to_same_type: 0.0,
                min_distance_to_other: 0.0,
                category: Category::Infrastructure,
                walkable: false,
            },
            ObjectType::Door => ObjectTypeInfo {
                default_width: 80.0,
                default_height: 10.0,
                min_distance_to_same_type: 0.0,
                min_distance_to_other: 0.0,
                category: Category::Infrastructure,
                walkable: true,
            },
            ObjectType::Printer => ObjectTypeInfo {
                default_width: 50.0,
                default_height: 50.0,
                min_distance_to_same_type: 20.0,
                min_distance_to_other: 20.0,
                category: Category::Infrastructure,
                walkable: false,
            },
            ObjectType::MeetingTable => ObjectTypeInfo {
                default_width: 200.0,
                default_height: 100.0,
                min_distance_to_same_type: 50.0,
                min_distance_to_other: 40.0,
                category: Category::Furniture,
                walkable: false,
            },
            ObjectType::Sink => ObjectTypeInfo {
                default_width: 60.0,
                default_height: 40.0,
                min_distance_to_same_type: 10.0,
                min_distance_to_other: 10.0,
                category: Category::Infrastructure,
                walkable: false,
            },
            ObjectType::Toilet => ObjectTypeInfo {
                default_width: 60.0,
                default_height: 60.0,
                min_distance_to_same_type: 10.0,
                min_distance_to_other: 10.0,
                category: Category::Infrastructure,
                walkable: false,
            },
            ObjectType::Washbasin => ObjectTypeInfo {
                default_width: 50.0,
                default_height: 40.0,
                min_distance_to_same_type: 10.0,
                min_distance_to_other: 10.0,
                category: Category::Infrastructure,
                walkable: false,
            },
        }
    }

    pub const fn walkable(&self) -> bool {
        self.info().walkable
    }
}

/// Static per-type metadata (§6.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTypeInfo {
    pub default_width: f64,
    pub default_height: f64,
    pub min_distance_to_same_type: f64,
    pub min_distance_to_other: f64,
    pub category: Category,
    pub walkable: bool,
}

/// Minimum recommended corridor width, carried from the original rule table
/// as a named constant for callers that want to check it themselves; no
/// check in this crate consults it directly.
pub const MIN_CORRIDOR_WIDTH: f64 = 90.0;

/// Default recommended maximum occupancy for a room with no explicit
/// capacity override.
pub const MAX_ROOM_CAPACITY_DEFAULT: u32 = 20;

/// People per unit area used by [`recommended_capacity`].
pub const MAX_PERSONS_PER_SQUARE_UNIT: f64 = 0.0025;

/// Advisory recommended headcount for a room of the given floor area.
/// Returns `0` for non-positive area.
pub fn recommended_capacity(area: f64) -> u32 {
    if area <= 0.0 {
        0
    } else {
        (area * MAX_PERSONS_PER_SQUARE_UNIT) as u32
    }
}
