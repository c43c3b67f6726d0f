//! ## Spatial planning core
//! `officelayout` is the logical model behind an office-layout editor: a
//! room populated with typed furniture and walls, the rules that decide
//! whether a placement is valid, and a grid-based router that finds a
//! walkable path from anywhere in the room to a designated exit.
//!
//! The crate is organized leaf-first, the same order the editor calls into
//! it:
//!
//! 1. [`geometry`] — rectangles, distances, grid rasterization. No notion
//!    of a "layout" at all.
//! 2. [`object_types`] — the closed set of furniture/wall/infrastructure
//!    kinds and their static metadata (default size, clearance, whether
//!    routing may cross it).
//! 3. [`layout`] — the authoritative in-memory state: room dimensions,
//!    objects, exits, ID allocation.
//! 4. [`placement`] — can a candidate rectangle go here? Can an existing
//!    object move there?
//! 5. [`validation`] — whole-layout audits: bounds, collisions, per-type
//!    distance rules, advisory overcrowding, exit reachability.
//! 6. [`routing`] — the occupancy grid and A* search `validation` and
//!    editors both use to recover an actual walkable path.
//! 7. [`persistence`] — the JSON format a [`layout::Layout`] round-trips
//!    through.
//!
//! ## Wall convention
//! Every object type other than [`object_types::ObjectType::Wall`] stores
//! `(x, y)` as its top-left corner. A wall stores a **centerline**: for a
//! horizontal wall (`width >= height`), `y` is the centerline Y; for a
//! vertical wall, `x` is the centerline X. [`layout::occupied_rect`] is the
//! only function that should ever turn a [`layout::LayoutObject`] into the
//! rectangle it physically occupies — every other module goes through it
//! rather than re-deriving the rectangle from the raw fields.
//!
//! ## Concurrency
//! The crate is single-threaded and synchronous: no operation here blocks,
//! suspends or performs I/O beyond [`persistence::save_layout`] /
//! [`persistence::load_layout`]. [`validation::validate`] and
//! [`routing::find_shortest_path_to_exit`] are pure functions of a
//! [`layout::Layout`] and safe to call concurrently on distinct layouts (or
//! snapshots of the same one); mutation through [`layout::Layout`] itself
//! requires exclusive access, same as any plain Rust value shared across
//! threads.
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::suspicious_operation_groupings)]

pub mod error;
pub mod geometry;
pub mod layout;
pub mod object_types;
pub mod persistence;
pub mod placement;
pub mod routing;
pub mod validation;

pub use error::{LayoutIoError, ModelError};
pub use geometry::{Point, Rect};
pub use layout::{occupied_rect, Layout, LayoutObject, Metadata};
pub use object_types::{Category, ObjectType, ObjectTypeInfo};
pub use persistence::{from_serializable, load_layout, save_layout, to_serializable};
pub use placement::{can_place, move_object, PlacementReason};
pub use routing::{build_occupancy_grid, find_shortest_path_to_exit, OccupancyGrid};
pub use validation::{validate, ValidationError, ValidationKind};
