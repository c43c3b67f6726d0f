//! Grid-based occupancy rasterization and A* shortest-path recovery from a
//! point to the nearest reachable exit.
//!
//! The same grid construction backs both [`crate::validation`]'s
//! reachability check and [`find_shortest_path_to_exit`], so the two always
//! agree on what counts as walkable.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::geometry::{cell_center, rect_to_cells, Point, Rect};
use crate::layout::{occupied_rect, Layout};
use crate::object_types::ObjectType;

/// A rasterized occupancy grid: `true` means the cell is blocked.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    pub rows: i64,
    pub cols: i64,
    pub cell_size: f64,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    fn new(rows: i64, cols: i64, cell_size: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            blocked: vec![false; (rows * cols) as usize],
        }
    }

    fn index(&self, row: i64, col: i64) -> usize {
        (row * self.cols + col) as usize
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    pub fn is_blocked(&self, row: i64, col: i64) -> bool {
        if !self.in_bounds(row, col) {
            return true;
        }
        self.blocked[self.index(row, col)]
    }

    fn set_blocked(&mut self, row: i64, col: i64, blocked: bool) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.blocked[idx] = blocked;
        }
    }

    fn mark_cells(&mut self, cells: &[(i64, i64)], blocked: bool) {
        for &(row, col) in cells {
            self.set_blocked(row, col, blocked);
        }
    }
}

fn obstruction_inflate(cell_size: f64) -> f64 {
    (0.25 * cell_size).max(3.0)
}

/// Clears an anisotropic region around a door so the grid never blocks the
/// opening it carves. `thickness` is the larger padding, across the wall
/// the door sits in; `along` is the smaller padding, along the wall.
fn inflate_anisotropic(r: &Rect, pad_x: f64, pad_y: f64) -> Rect {
    let r = r.normalized();
    Rect::new(
        r.x - pad_x,
        r.y - pad_y,
        r.width + 2.0 * pad_x,
        r.height + 2.0 * pad_y,
    )
}

/// Builds the occupancy grid for a layout at the given cell size.
///
/// Returns the grid, the room rectangle used as the local-coordinate
/// origin, and the cell size (echoed back for convenience).
pub fn build_occupancy_grid(layout: &Layout, cell_size: f64) -> (OccupancyGrid, Rect, f64) {
    assert!(cell_size > 0.0, "cell_size must be > 0");

    let origin = layout.room_rect();
    let rows = ((layout.room_height / cell_size).ceil() as i64).max(1);
    let cols = ((layout.room_width / cell_size).ceil() as i64).max(1);
    let mut grid = OccupancyGrid::new(rows, cols, cell_size);

    let to_local = |r: &Rect| Rect::new(r.x - origin.x, r.y - origin.y, r.width, r.height);

    let inflate_amount = obstruction_inflate(cell_size);

    for obj in layout.all_objects() {
        if obj.object_type == ObjectType::Door {
            continue;
        }
        if obj.object_type.walkable() {
            continue;
        }

        let local = to_local(&occupied_rect(obj));
        let grown = crate::geometry::inflate(&local, inflate_amount);
        let cells = rect_to_cells(&grown, cell_size, rows, cols);
        grid.mark_cells(&cells, true);
    }

    let large = (inflate_amount + 0.15 * cell_size).max(0.5);
    let small = (0.05 * cell_size).max(0.5);

    for door in layout.objects_by_type(ObjectType::Door) {
        let rect = occupied_rect(door);
        let local = to_local(&rect);
        let vertical = local.height >= local.width;
        let (pad_x, pad_y) = if vertical { (large, small) } else { (small, large) };
        let cleared = inflate_anisotropic(&local, pad_x, pad_y);
        let cells = rect_to_cells(&cleared, cell_size, rows, cols);
        grid.mark_cells(&cells, false);
    }

    for exit in &layout.exit_points {
        let local_x = exit.x - origin.x;
        let local_y = exit.y - origin.y;
        let (row, col) = crate::geometry::world_to_cell(local_x, local_y, cell_size);
        for dr in -1..=1 {
            for dc in -1..=1 {
                grid.set_blocked(row + dr, col + dc, false);
            }
        }
    }

    (grid, origin, cell_size)
}

/// Finds the nearest free cell to `(row, col)` within Chebyshev radius 12,
/// scanning outward ring by ring. Returns `(row, col)` itself if already
/// free.
fn nearest_free_cell(grid: &OccupancyGrid, row: i64, col: i64) -> Option<(i64, i64)> {
    if grid.in_bounds(row, col) && !grid.is_blocked(row, col) {
        return Some((row, col));
    }

    for radius in 1..=12 {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr.abs() != radius && dc.abs() != radius {
                    continue;
                }
                let r = row + dr;
                let c = col + dc;
                if grid.in_bounds(r, c) && !grid.is_blocked(r, c) {
                    return Some((r, c));
                }
            }
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    f_score: i64,
    order: u64,
    cell: (i64, i64),
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.f_score, self.order).cmp(&(other.f_score, other.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

fn manhattan(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// 4-connected A* with uniform edge cost and a Manhattan heuristic.
/// Ties in `f`-score are broken by insertion order, so results are
/// deterministic across runs.
fn a_star(grid: &OccupancyGrid, start: (i64, i64), goal: (i64, i64)) -> Option<Vec<(i64, i64)>> {
    if grid.is_blocked(start.0, start.1) || grid.is_blocked(goal.0, goal.1) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    use std::collections::HashMap;

    let mut open = BinaryHeap::new();
    let mut order = 0u64;
    let mut g_score: HashMap<(i64, i64), i64> = HashMap::new();
    let mut came_from: HashMap<(i64, i64), (i64, i64)> = HashMap::new();

    g_score.insert(start, 0);
    open.push(Reverse(HeapEntry {
        f_score: manhattan(start, goal),
        order,
        cell: start,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let current = entry.cell;
        if current == goal {
            let mut path = vec![current];
            let mut node = current;
            while let Some(&prev) = came_from.get(&node) {
                path.push(prev);
                node = prev;
            }
            path.reverse();
            return Some(path);
        }

        let current_g = *g_score.get(&current).unwrap_or(&i64::MAX);
        let neighbours = [
            (current.0 - 1, current.1),
            (current.0 + 1, current.1),
            (current.0, current.1 - 1),
            (current.0, current.1 + 1),
        ];

        for next in neighbours {
            if grid.is_blocked(next.0, next.1) {
                continue;
            }
            let tentative_g = current_g + 1;
            if tentative_g < *g_score.get(&next).unwrap_or(&i64::MAX) {
                g_score.insert(next, tentative_g);
                came_from.insert(next, current);
                order += 1;
                open.push(Reverse(HeapEntry {
                    f_score: tentative_g + manhattan(next, goal),
                    order,
                    cell: next,
                }));
            }
        }
    }

    None
}

/// Finds the shortest walkable path from `start` to any of the layout's
/// exit points, returning a world-coordinate polyline.
///
/// `cell_size` defaults to `min(layout.grid_size, 12.0)` when `None`.
/// Returns `None` if `start` (after repair) or every exit is unreachable.
pub fn find_shortest_path_to_exit(
    layout: &Layout,
    start: Point,
    cell_size: Option<f64>,
) -> Option<Vec<Point>> {
    let cell_size = cell_size.unwrap_or_else(|| layout.grid_size.min(12.0));
    let (grid, origin, cell_size) = build_occupancy_grid(layout, cell_size);

    let start_cell_raw = crate::geometry::world_to_cell(start.x - origin.x, start.y - origin.y, cell_size);
    let start_cell = nearest_free_cell(&grid, start_cell_raw.0, start_cell_raw.1)?;

    let mut best: Option<(usize, Vec<(i64, i64)>, Point)> = None;

    for &exit in &layout.exit_points {
        let exit_cell_raw = crate::geometry::world_to_cell(exit.x - origin.x, exit.y - origin.y, cell_size);
        let Some(exit_cell) = nearest_free_cell(&grid, exit_cell_raw.0, exit_cell_raw.1) else {
            continue;
        };

        let Some(path) = a_star(&grid, start_cell, exit_cell) else {
            continue;
        };

        let is_better = match &best {
            None => true,
            Some((best_len, _, _)) => path.len() < *best_len,
        };
        if is_better {
            best = Some((path.len(), path, exit));
        }
    }

    let (_, cells, exit_point) = best?;

    let mut world_path: Vec<Point> = cells
        .into_iter()
        .map(|(row, col)| {
            let p = cell_center(row, col, cell_size);
            Point::new(p.x + origin.x, p.y + origin.y)
        })
        .collect();

    let last_matches_exit = world_path
        .last()
        .map(|p| (p.x - exit_point.x).abs() < 1e-6 && (p.y - exit_point.y).abs() < 1e-6)
        .unwrap_or(false);
    if !last_matches_exit {
        world_path.push(exit_point);
    }

    Some(world_path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::Metadata;

    fn room_with_center_wall(exit: Point) -> Layout {
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
        layout.exit_points.push(exit);
        layout
    }

    #[test]
    fn blocked_without_a_door() {
        let layout = room_with_center_wall(Point::new(90.0, 20.0));
        let path = find_shortest_path_to_exit(&layout, Point::new(15.0, 15.0), None);
        assert!(path.is_none());
    }

    #[test]
    fn door_opens_a_path() {
        let mut layout = room_with_center_wall(Point::new(90.0, 20.0));
        layout
            .add_object(
                ObjectType::Door,
                45.0,
                15.0,
                10.0,
                10.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();

        let path = find_shortest_path_to_exit(&layout, Point::new(15.0, 15.0), None).unwrap();
        let last = *path.last().unwrap();
        assert!((last.x - 90.0).abs() < 1e-6 && (last.y - 20.0).abs() < 1e-6);
    }

    #[test]
    fn empty_room_finds_a_direct_path() {
        let mut layout = Layout::with_grid_size(100.0, 100.0, 20.0);
        layout.exit_points.push(Point::new(90.0, 90.0));
        let path = find_shortest_path_to_exit(&layout, Point::new(10.0, 10.0), None).unwrap();
        assert_eq!(*path.last().unwrap(), Point::new(90.0, 90.0));
    }

    #[test]
    fn no_exit_points_returns_none() {
        let layout = Layout::with_grid_size(100.0, 100.0, 20.0);
        let path = find_shortest_path_to_exit(&layout, Point::new(10.0, 10.0), None);
        assert!(path.is_none());
    }

    #[test]
    fn build_occupancy_grid_skips_walkable_doors() {
        let mut layout = Layout::with_grid_size(100.0, 100.0, 10.0);
        layout
            .add_object(ObjectType::Door, 0.0, 0.0, 80.0, 10.0, 0.0, Metadata::new(), None)
            .unwrap();
        let (grid, _, _) = build_occupancy_grid(&layout, 10.0);
        assert!(!grid.is_blocked(0, 0));
    }
}
