use crate::escape::find_escape_path;
use crate::grid::{Coord, Grid, Tile};
use crate::level::Level;
use crate::lighthouse::find_lighthouse_pos;
use crate::reachability::{analyze, ReachMap};
use std::time::Instant;

/// A player-placed buoy. The timestamp only drives the placement
/// animation; search logic never reads it.
#[derive(Debug, Clone, Copy)]
pub struct Buoy {
    pub pos: Coord,
    pub placed_at: Instant,
}

/// Outcome of a placement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    /// Buoy budget exhausted; grid unchanged. Caller owns the feedback.
    LimitReached,
    /// Target is not open water; grid unchanged
    Blocked,
}

/// Outcome of the optimal-view toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimalView {
    /// Level carries no authored optimal solution
    Unavailable,
    /// Player already matched the authored optimum; nothing to show
    AlreadyFound,
    Shown,
    Restored,
}

/// One play-through of a level: the grid, Moby, the buoy set and the
/// win state, mutated only through this struct. Every mutation is
/// immediately followed by a win recheck, never interleaved.
pub struct Session {
    level: Level,
    pub grid: Grid,
    pub moby_pos: Coord,
    buoys: Vec<Buoy>,
    pub max_buoys: usize,
    pub is_won: bool,
    /// Reachability map of the winning check, kept for the darkening
    /// overlay and the lighthouse search
    pub winning_map: Option<ReachMap>,
    pub last_score: i32,
    pub lighthouse_pos: Option<Coord>,
    pub showing_optimal: bool,
    saved_buoys: Vec<Buoy>,
    saved_score: i32,
    saved_map: Option<ReachMap>,
}

impl Session {
    pub fn new(level: &Level) -> Result<Session, String> {
        let (grid, moby_pos) = level.build_grid()?;
        Ok(Session {
            level: level.clone(),
            grid,
            moby_pos,
            buoys: Vec::new(),
            max_buoys: level.max_buoys,
            is_won: false,
            winning_map: None,
            last_score: 0,
            lighthouse_pos: None,
            showing_optimal: false,
            saved_buoys: Vec::new(),
            saved_score: 0,
            saved_map: None,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn buoys(&self) -> &[Buoy] {
        &self.buoys
    }

    pub fn buoys_left(&self) -> usize {
        self.max_buoys.saturating_sub(self.buoys.len())
    }

    /// Place a buoy on open water, then recheck the win condition.
    /// Rejected placements leave the grid untouched.
    pub fn place_buoy(&mut self, pos: Coord) -> PlaceOutcome {
        if self.grid.tile(pos.x, pos.y) != Tile::Water || pos == self.moby_pos {
            return PlaceOutcome::Blocked;
        }
        if self.buoys.len() >= self.max_buoys {
            return PlaceOutcome::LimitReached;
        }

        self.grid.set_tile(pos.x, pos.y, Tile::Buoy);
        self.buoys.push(Buoy {
            pos,
            placed_at: Instant::now(),
        });
        self.check_win();
        PlaceOutcome::Placed
    }

    /// Remove a player-placed buoy. Authored buoys are terrain and stay.
    /// Removing a buoy after a win re-opens the level.
    pub fn remove_buoy(&mut self, pos: Coord) -> bool {
        let Some(idx) = self.buoys.iter().position(|b| b.pos == pos) else {
            return false;
        };
        self.buoys.remove(idx);
        self.grid.set_tile(pos.x, pos.y, Tile::Water);
        if self.is_won {
            self.is_won = false;
            self.winning_map = None;
            self.lighthouse_pos = None;
        }
        true
    }

    /// Scan Moby's reachable region and latch the win state when the
    /// region no longer touches the border.
    pub fn check_win(&mut self) {
        let result = analyze(&self.grid, self.moby_pos);
        if result.escaped {
            self.is_won = false;
            self.winning_map = None;
            self.lighthouse_pos = None;
            return;
        }

        self.is_won = true;
        self.last_score = result.area_size;
        self.lighthouse_pos = match self.level.lighthouse_pos {
            Some(pinned) => Some(pinned.into()),
            None => find_lighthouse_pos(&self.grid, &result.map),
        };
        self.winning_map = Some(result.map);
    }

    /// Shortest escape route for hint rendering, recomputed on demand
    pub fn escape_hint(&self) -> Option<Vec<Coord>> {
        find_escape_path(&self.grid, self.moby_pos)
    }

    /// Swap the player's buoys for the authored optimal set, or swap
    /// back. Only meaningful once the level is won.
    pub fn toggle_optimal_view(&mut self) -> OptimalView {
        if self.level.optimal_buoys.is_empty() {
            return OptimalView::Unavailable;
        }

        if !self.showing_optimal {
            if let Some(optimal_area) = self.level.optimal_area {
                if self.last_score >= optimal_area {
                    return OptimalView::AlreadyFound;
                }
            }

            // Park the player's solution
            self.saved_buoys = self.buoys.clone();
            self.saved_score = self.last_score;
            self.saved_map = self.winning_map.clone();

            for buoy in &self.buoys {
                self.grid.set_tile(buoy.pos.x, buoy.pos.y, Tile::Water);
            }
            let optimal: Vec<Buoy> = self
                .level
                .optimal_buoys
                .iter()
                .map(|&c| Buoy {
                    pos: c.into(),
                    placed_at: Instant::now(),
                })
                .collect();
            for buoy in &optimal {
                self.grid.set_tile(buoy.pos.x, buoy.pos.y, Tile::Buoy);
            }
            self.buoys = optimal;

            self.check_win();
            if let Some(optimal_area) = self.level.optimal_area {
                self.last_score = optimal_area;
            }
            self.showing_optimal = true;
            OptimalView::Shown
        } else {
            let current = std::mem::take(&mut self.buoys);
            for buoy in &current {
                self.grid.set_tile(buoy.pos.x, buoy.pos.y, Tile::Water);
            }
            let restored = std::mem::take(&mut self.saved_buoys);
            for buoy in &restored {
                self.grid.set_tile(buoy.pos.x, buoy.pos.y, Tile::Buoy);
            }
            self.buoys = restored;

            self.last_score = self.saved_score;
            self.winning_map = self.saved_map.clone();
            self.is_won = self.winning_map.is_some();
            self.showing_optimal = false;
            OptimalView::Restored
        }
    }

    /// Back to a pristine run of the same level
    pub fn reset(&mut self) -> Result<(), String> {
        *self = Session::new(&self.level)?;
        Ok(())
    }
}
