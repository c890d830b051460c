use crate::grid::{Coord, Grid, Tile};
use serde::{Deserialize, Serialize};
use std::fs;

/// An authored level: ASCII map plus buoy budget and optional
/// precomputed optimal solution.
///
/// Map alphabet: '.' water, '#' land, 'B' pre-placed buoy (terrain,
/// not charged against the player budget), 'M' Moby's start tile
/// (exactly one per map).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub map: Vec<String>,
    pub max_buoys: usize,
    /// Authored optimal buoy placement, shown by the optimal-view toggle
    #[serde(default)]
    pub optimal_buoys: Vec<LevelCoord>,
    /// Enclosed area of the authored optimal solution (medal baseline)
    #[serde(default)]
    pub optimal_area: Option<i32>,
    /// Pins the lighthouse spawn, skipping the search
    #[serde(default)]
    pub lighthouse_pos: Option<LevelCoord>,
}

/// Coordinate as it appears in level JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelCoord {
    pub x: i32,
    pub y: i32,
}

impl From<LevelCoord> for Coord {
    fn from(c: LevelCoord) -> Coord {
        Coord::new(c.x, c.y)
    }
}

impl Level {
    /// Parse the ASCII map into a grid and Moby's start position.
    /// Fatal on malformed maps: searches must never run against an
    /// invalid grid.
    pub fn build_grid(&self) -> Result<(Grid, Coord), String> {
        if self.map.len() < 3 {
            return Err(format!("level '{}': map needs at least 3 rows", self.name));
        }
        let rows = self.map.len() as i32;
        let cols = self.map[0].chars().count() as i32;
        if cols < 3 {
            return Err(format!("level '{}': map needs at least 3 columns", self.name));
        }

        let mut grid = Grid::new(rows, cols);
        let mut moby: Option<Coord> = None;

        for (y, line) in self.map.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(format!(
                    "level '{}': row {} has {} columns, expected {}",
                    self.name,
                    y,
                    line.chars().count(),
                    cols
                ));
            }
            for (x, ch) in line.chars().enumerate() {
                let (x, y) = (x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_tile(x, y, Tile::Land),
                    'B' => grid.set_tile(x, y, Tile::Buoy),
                    'M' => {
                        if moby.is_some() {
                            return Err(format!("level '{}': more than one Moby start", self.name));
                        }
                        moby = Some(Coord::new(x, y));
                    }
                    _ => {
                        return Err(format!("level '{}': unknown map character '{}'", self.name, ch));
                    }
                }
            }
        }

        let moby = moby.ok_or_else(|| format!("level '{}': no Moby start found", self.name))?;
        Ok((grid, moby))
    }
}

/// The playable level sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<Level>,
}

impl LevelSet {
    /// Load levels from a JSON file, or fall back to the built-in set
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(set) => {
                    println!("Loaded levels from {}", path);
                    set
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path, e);
                    eprintln!("Using built-in levels");
                    Self::builtin()
                }
            },
            Err(_) => {
                println!("No level file at {}, using built-in levels", path);
                Self::builtin()
            }
        }
    }

    /// The authored default levels
    pub fn builtin() -> Self {
        let lagoon = Level {
            name: "Lagoon".to_string(),
            map: vec![
                "............".to_string(),
                "..##....##..".to_string(),
                "..#......#..".to_string(),
                "........M...".to_string(),
                "..#......#..".to_string(),
                "..##....##..".to_string(),
                "............".to_string(),
                "............".to_string(),
            ],
            max_buoys: 8,
            optimal_buoys: Vec::new(),
            optimal_area: None,
            lighthouse_pos: None,
        };
        let strait = Level {
            name: "Strait".to_string(),
            map: vec![
                "..............".to_string(),
                "..............".to_string(),
                "..####..####..".to_string(),
                "..#........#..".to_string(),
                "..#...M....#..".to_string(),
                "..#........#..".to_string(),
                "..####..####..".to_string(),
                "..............".to_string(),
                "..............".to_string(),
                "..............".to_string(),
            ],
            max_buoys: 4,
            optimal_buoys: vec![
                LevelCoord { x: 6, y: 2 },
                LevelCoord { x: 7, y: 2 },
                LevelCoord { x: 6, y: 6 },
                LevelCoord { x: 7, y: 6 },
            ],
            optimal_area: Some(24),
            lighthouse_pos: None,
        };
        let open_sea = Level {
            name: "Open Sea".to_string(),
            map: vec![
                "................".to_string(),
                "................".to_string(),
                "................".to_string(),
                "......#.........".to_string(),
                "........M.......".to_string(),
                "......#.........".to_string(),
                "................".to_string(),
                "................".to_string(),
                "................".to_string(),
                "................".to_string(),
            ],
            max_buoys: 10,
            optimal_buoys: Vec::new(),
            optimal_area: None,
            lighthouse_pos: None,
        };
        LevelSet {
            levels: vec![lagoon, strait, open_sea],
        }
    }
}
