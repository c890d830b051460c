use crate::grid::{Coord, Grid, DIRS};
use std::collections::VecDeque;

/// Shortest path from Moby to the map border via BFS, or None if the
/// region is enclosed. The first border tile dequeued is the nearest one,
/// so the search stops there and walks parent pointers back to Moby.
/// Parent pointers keep memory flat instead of copying a partial path
/// per queue entry.
///
/// The returned path starts at Moby's own tile. Paths of any length are
/// returned; the hint renderer decides what is worth displaying.
pub fn find_escape_path(grid: &Grid, moby: Coord) -> Option<Vec<Coord>> {
    let size = (grid.rows * grid.cols) as usize;
    let mut parent: Vec<Option<Coord>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut queue: VecDeque<Coord> = VecDeque::new();

    let idx = |x: i32, y: i32| (x + y * grid.cols) as usize;

    visited[idx(moby.x, moby.y)] = true;
    queue.push_back(moby);

    while let Some(pos) = queue.pop_front() {
        if grid.is_border(pos.x, pos.y) {
            // Reconstruct by walking parents back to Moby
            let mut path = Vec::new();
            let mut cur = pos;
            while cur != moby {
                path.push(cur);
                cur = parent[idx(cur.x, cur.y)].unwrap_or(moby);
            }
            path.push(moby);
            path.reverse();
            return Some(path);
        }

        for (dx, dy) in DIRS {
            let nx = pos.x + dx;
            let ny = pos.y + dy;
            if grid.in_bounds(nx, ny) && !visited[idx(nx, ny)] && grid.tile(nx, ny).is_swimmable() {
                visited[idx(nx, ny)] = true;
                parent[idx(nx, ny)] = Some(pos);
                queue.push_back(Coord::new(nx, ny));
            }
        }
    }

    None
}
