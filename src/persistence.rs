//! JSON persistence for a [`Layout`] (§6.1): alphabetically-keyed,
//! 2-space-indented, UTF-8, trailing-newline JSON, written atomically via a
//! sibling temp file and rename.
//!
//! `serde_json::Value`'s object map is a `BTreeMap` as long as the
//! `preserve_order` feature stays off (it does — see `Cargo.toml`), so
//! routing every write through [`to_serializable`] gives alphabetical keys
//! for free rather than requiring a custom formatter.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LayoutIoError;
use crate::geometry::Point;
use crate::layout::{Layout, LayoutObject};

fn default_grid_size() -> f64 {
    // The persisted-format default differs from Layout::new's fresh-layout
    // default (40.0); see DESIGN.md's note on this split.
    50.0
}

#[derive(Debug, Serialize, Deserialize)]
struct RoomDto {
    width: f64,
    height: f64,
    #[serde(default = "default_grid_size")]
    grid_size: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayoutDto {
    exit_points: Vec<Point>,
    objects: Vec<LayoutObject>,
    room: RoomDto,
}

/// Converts a [`Layout`] into its serializable form.
///
/// The result's object keys are in alphabetical order (a property of
/// `serde_json::Value` as long as `preserve_order` is disabled), matching
/// the on-disk format exactly.
pub fn to_serializable(layout: &Layout) -> Value {
    let dto = LayoutDto {
        exit_points: layout.exit_points.clone(),
        objects: layout.all_objects().cloned().collect(),
        room: RoomDto {
            width: layout.room_width,
            height: layout.room_height,
            grid_size: layout.grid_size,
        },
    };
    serde_json::to_value(&dto).expect("LayoutDto always serializes")
}

/// Reconstructs a [`Layout`] from a value produced by [`to_serializable`]
/// (or an equivalent hand-written JSON object). Unknown keys are ignored;
/// `rotation`, `metadata` and `grid_size` adopt their documented defaults
/// when absent.
pub fn from_serializable(value: &Value) -> Result<Layout, LayoutIoError> {
    if !value.is_object() {
        return Err(LayoutIoError::InvalidRoot);
    }

    let dto: LayoutDto = serde_json::from_value(value.clone())?;

    let mut layout = Layout::with_grid_size(dto.room.width, dto.room.height, dto.room.grid_size);
    for obj in dto.objects {
        layout.add_object(
            obj.object_type,
            obj.x,
            obj.y,
            obj.width,
            obj.height,
            obj.rotation,
            obj.metadata,
            Some(obj.id),
        )?;
    }
    layout.exit_points = dto.exit_points;

    Ok(layout)
}

fn check_json_extension(path: &Path) -> Result<(), LayoutIoError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Ok(())
    } else {
        Err(LayoutIoError::BadExtension(path.display().to_string()))
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Writes `layout` to `path` as JSON, atomically (write to a sibling temp
/// file, then rename). Rejects any `path` whose extension is not
/// (case-insensitively) `.json`. On failure partway through the write, the
/// temp file is removed and the original `path`, if it existed, is
/// untouched.
pub fn save_layout(path: impl AsRef<Path>, layout: &Layout) -> Result<(), LayoutIoError> {
    let path = path.as_ref();
    check_json_extension(path)?;

    let value = to_serializable(layout);
    let mut buf = serde_json::to_vec_pretty(&value)?;
    buf.push(b'\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let result = std::fs::write(&tmp_path, &buf).and_then(|()| std::fs::rename(&tmp_path, path));

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(LayoutIoError::Io(e))
        }
    }
}

/// Reads and reconstructs a [`Layout`] previously written by
/// [`save_layout`]. Rejects any `path` whose extension is not
/// (case-insensitively) `.json`, and any root JSON value that is not an
/// object.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Layout, LayoutIoError> {
    let path = path.as_ref();
    check_json_extension(path)?;

    let data = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&data)?;
    from_serializable(&value)
}
