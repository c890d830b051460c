use enclose::grid::{Coord, Grid};
use enclose::level::Level;
use enclose::session::Session;

/// Build a level from an ASCII map.
/// Alphabet: '.' water, '#' land, 'B' authored buoy, 'M' Moby start.
pub fn level_from(name: &str, rows: &[&str], max_buoys: usize) -> Level {
    Level {
        name: name.to_string(),
        map: rows.iter().map(|r| r.to_string()).collect(),
        max_buoys,
        optimal_buoys: Vec::new(),
        optimal_area: None,
        lighthouse_pos: None,
    }
}

/// Parse an ASCII map straight into a grid and Moby's position
pub fn parse_map(rows: &[&str]) -> (Grid, Coord) {
    level_from("test", rows, 0)
        .build_grid()
        .expect("test map should be valid")
}

/// Spin up a session for an ASCII map
pub fn session_from(rows: &[&str], max_buoys: usize) -> Session {
    Session::new(&level_from("test", rows, max_buoys)).expect("test map should be valid")
}

/// Scenario B fixture: 5x5 open water, Moby centered, all four orthogonal
/// neighbors already walled off
pub const ENCLOSED_CENTER: &[&str] = &[
    ".....",
    "..B..",
    ".BMB.",
    "..B..",
    ".....",
];

/// Scenario A fixture: 5x5 open water, Moby centered, no obstacles
pub const OPEN_5X5: &[&str] = &[
    ".....",
    ".....",
    "..M..",
    ".....",
    ".....",
];
