/// What a grid cell holds. `Moby` only appears in authored maps;
/// after load the cell is water and the position lives in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Water,
    Land,
    Buoy,
    Moby,
}

impl Tile {
    /// Can Moby swim through this tile?
    pub fn is_swimmable(self) -> bool {
        !matches!(self, Tile::Land | Tile::Buoy)
    }
}

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Euclidean distance from this tile's center to an arbitrary point
    pub fn center_distance_to(&self, cx: f64, cy: f64) -> f64 {
        let dx = (self.x as f64 + 0.5) - cx;
        let dy = (self.y as f64 + 0.5) - cy;
        (dx * dx + dy * dy).sqrt()
    }
}

/// BFS neighbor order: down, up, right, left.
/// Enclosure is defined on 4-connectivity; diagonals never traverse.
pub const DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Which of the 8 neighbors of a tile are land.
/// Consumed by the presentation layer to pick shoreline sprites;
/// the flag-to-sprite mapping is not this module's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandNeighbors {
    pub n: bool,
    pub s: bool,
    pub e: bool,
    pub w: bool,
    pub nw: bool,
    pub ne: bool,
    pub sw: bool,
    pub se: bool,
}

#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<Tile>,
    /// Revision number - incremented whenever grid cells change
    revision: u64,
}

impl Grid {
    /// Create a new grid with all tiles set to water
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Tile::Water; (rows * cols) as usize],
            revision: 0,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Is (x, y) on the outer ring of the map?
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == 0 || x == self.cols - 1 || y == 0 || y == self.rows - 1
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        (x + y * self.cols) as usize
    }

    /// Get tile at (x, y). Out of bounds is treated as land (never traversable).
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        if !self.in_bounds(x, y) {
            return Tile::Land;
        }
        self.cells[self.idx(x, y)]
    }

    /// Set tile at (x, y); out-of-bounds writes are ignored
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let id = self.idx(x, y);
            if self.cells[id] != tile {
                self.cells[id] = tile;
                self.revision += 1;
            }
        }
    }

    /// Can Moby occupy (x, y)?
    pub fn is_swimmable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tile(x, y).is_swimmable()
    }

    /// Get current grid revision number
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Classify the 8 neighbors of (x, y) by whether they are land
    pub fn land_neighbors(&self, x: i32, y: i32) -> LandNeighbors {
        let land = |dx: i32, dy: i32| self.in_bounds(x + dx, y + dy) && self.tile(x + dx, y + dy) == Tile::Land;
        LandNeighbors {
            n: land(0, -1),
            s: land(0, 1),
            e: land(1, 0),
            w: land(-1, 0),
            nw: land(-1, -1),
            ne: land(1, -1),
            sw: land(-1, 1),
            se: land(1, 1),
        }
    }

    /// Render the grid as an ASCII layout (one row per line).
    /// Uses the level map alphabet: '.' water, '#' land, 'B' buoy, 'M' Moby.
    pub fn to_layout_string(&self, moby: Coord) -> String {
        let mut result = String::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                let symbol = if x == moby.x && y == moby.y {
                    'M'
                } else {
                    match self.tile(x, y) {
                        Tile::Water => '.',
                        Tile::Land => '#',
                        Tile::Buoy => 'B',
                        Tile::Moby => 'M',
                    }
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}
