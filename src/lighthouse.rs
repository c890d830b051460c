use crate::grid::{Coord, Grid, Tile, DIRS};
use crate::reachability::ReachMap;

/// Candidate search bands: distance from the enclosed boundary, inclusive.
/// Tried in order; the first non-empty band wins.
const BANDS: [(i16, i16); 2] = [(3, 5), (1, 7)];

/// Find a spawn position for the lighthouse after a win: a 2x2 block of
/// open water outside the enclosed region, close to the region's centroid.
///
/// Search priority:
///   1. Boundary distance 3-5  (ideal)
///   2. Boundary distance 1-7  (wider fallback)
///   3. Any single outside water tile (last resort, one candidate)
///
/// `reach` must be the winning reachability map: >= 0 marks the enclosed
/// region. Returns None only when no outside water exists at all.
pub fn find_lighthouse_pos(grid: &Grid, reach: &ReachMap) -> Option<Coord> {
    let (rows, cols) = (grid.rows, grid.cols);

    // Step 1 - centroid of the enclosed area
    let mut sum_x = 0i64;
    let mut sum_y = 0i64;
    let mut count = 0i64;
    for y in 0..rows {
        for x in 0..cols {
            if reach.is_inside(x, y) {
                sum_x += x as i64;
                sum_y += y as i64;
                count += 1;
            }
        }
    }
    if count == 0 {
        return None;
    }
    let centroid_x = sum_x as f64 / count as f64;
    let centroid_y = sum_y as f64 / count as f64;

    // Step 2 - multi-source BFS outward from the enclosed boundary,
    // expanding through outside tiles only
    let dist_outside = outside_distance_map(grid, reach);

    // Steps 3-5 - try progressively looser candidate strategies
    let mut candidates = Vec::new();
    for (min_d, max_d) in BANDS {
        candidates = collect_block_candidates(grid, reach, &dist_outside, min_d, max_d);
        if !candidates.is_empty() {
            break;
        }
    }
    if candidates.is_empty() {
        // Last resort: the first outside water tile found by row scan.
        // Intentionally yields a single candidate, matching the row-wise
        // early exit of the shipped game.
        'scan: for y in 1..rows - 1 {
            for x in 1..cols - 1 {
                if dist_outside.get(x, y) >= 0 && grid.tile(x, y) == Tile::Water {
                    candidates.push(Coord::new(x, y));
                    break 'scan;
                }
            }
        }
    }

    // Step 6 - pick the candidate closest to the centroid.
    // Strict < keeps ties stable on scan order.
    let mut best: Option<Coord> = None;
    let mut best_dist = f64::INFINITY;
    for c in candidates {
        let d = c.center_distance_to(centroid_x, centroid_y);
        if d < best_dist {
            best_dist = d;
            best = Some(c);
        }
    }
    best
}

/// Distance of every outside tile from the enclosed boundary.
/// Seeds are outside tiles with at least one 4-neighbor inside the region.
fn outside_distance_map(grid: &Grid, reach: &ReachMap) -> ReachMap {
    let mut dist = ReachMap::new(grid.rows, grid.cols);
    let mut queue: Vec<Coord> = Vec::new();

    for y in 0..grid.rows {
        for x in 0..grid.cols {
            if reach.is_inside(x, y) {
                continue;
            }
            for (dx, dy) in DIRS {
                if reach.is_inside(x + dx, y + dy) {
                    dist.set(x, y, 0);
                    queue.push(Coord::new(x, y));
                    break;
                }
            }
        }
    }

    let mut head = 0;
    while head < queue.len() {
        let pos = queue[head];
        head += 1;
        for (dx, dy) in DIRS {
            let nx = pos.x + dx;
            let ny = pos.y + dy;
            if grid.in_bounds(nx, ny) && dist.get(nx, ny) == -1 && !reach.is_inside(nx, ny) {
                let d = dist.get(pos.x, pos.y) + 1;
                dist.set(nx, ny, d);
                queue.push(Coord::new(nx, ny));
            }
        }
    }

    dist
}

/// All 2x2 water blocks fully outside the enclosed region whose
/// top-left tile sits in the given boundary-distance band.
fn collect_block_candidates(
    grid: &Grid,
    reach: &ReachMap,
    dist_outside: &ReachMap,
    min_d: i16,
    max_d: i16,
) -> Vec<Coord> {
    let mut results = Vec::new();
    for y in 1..grid.rows - 1 {
        for x in 1..grid.cols - 2 {
            let d = dist_outside.get(x, y);
            if d < min_d || d > max_d {
                continue;
            }

            let water = |bx: i32, by: i32| grid.tile(bx, by) == Tile::Water && !reach.is_inside(bx, by);
            let all_water =
                water(x, y) && water(x + 1, y) && water(x, y + 1) && water(x + 1, y + 1);

            if all_water {
                results.push(Coord::new(x, y));
            }
        }
    }
    results
}
