use crate::grid::{Coord, Grid, DIRS};
use std::collections::VecDeque;

/// BFS distance field over the grid.
/// -1 means the tile was not reached; >= 0 is the distance from Moby.
#[derive(Clone)]
pub struct ReachMap {
    pub rows: i32,
    pub cols: i32,
    dist: Vec<i16>,
}

impl ReachMap {
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        ReachMap {
            rows,
            cols,
            dist: vec![-1; (rows * cols) as usize],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> i16 {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return -1;
        }
        self.dist[(x + y * self.cols) as usize]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, d: i16) {
        self.dist[(x + y * self.cols) as usize] = d;
    }

    /// Was (x, y) part of the region reachable by Moby?
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.get(x, y) >= 0
    }
}

/// Result of a full reachability scan
pub struct Reachability {
    pub map: ReachMap,
    /// True if any reachable tile lies on the map border
    pub escaped: bool,
    /// Number of tiles in Moby's connected region
    pub area_size: i32,
}

/// Scan the entire region reachable by Moby via BFS.
/// The search always runs to completion, even after the border has been
/// touched, so the map stays consistent for scoring and overlays.
/// Caller must guarantee that `moby` sits on a swimmable in-bounds tile.
pub fn analyze(grid: &Grid, moby: Coord) -> Reachability {
    let mut map = ReachMap::new(grid.rows, grid.cols);
    let mut queue: VecDeque<(i32, i32, i16)> = VecDeque::new();

    map.set(moby.x, moby.y, 0);
    queue.push_back((moby.x, moby.y, 0));

    let mut escaped = false;
    let mut area_size = 0;

    while let Some((x, y, d)) = queue.pop_front() {
        area_size += 1;

        if grid.is_border(x, y) {
            escaped = true;
        }

        for (dx, dy) in DIRS {
            let nx = x + dx;
            let ny = y + dy;
            if grid.in_bounds(nx, ny) && map.get(nx, ny) == -1 && grid.tile(nx, ny).is_swimmable() {
                map.set(nx, ny, d + 1);
                queue.push_back((nx, ny, d + 1));
            }
        }
    }

    Reachability {
        map,
        escaped,
        area_size,
    }
}
