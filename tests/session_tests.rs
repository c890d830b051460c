mod common;

use common::{level_from, session_from, OPEN_5X5};
use enclose::grid::{Coord, Tile};
use enclose::level::LevelCoord;
use enclose::reachability::analyze;
use enclose::session::{OptimalView, PlaceOutcome, Session};

/// Scenario D: zero buoy budget rejects every placement as a no-op
#[test]
fn zero_budget_rejects_placement() {
    let mut session = session_from(OPEN_5X5, 0);
    let before = session.grid.revision();

    assert_eq!(session.place_buoy(Coord::new(1, 1)), PlaceOutcome::LimitReached);
    assert_eq!(session.grid.tile(1, 1), Tile::Water);
    assert_eq!(session.grid.revision(), before);
    assert!(session.buoys().is_empty());
}

/// P7: place followed by remove restores grid, buoy set and reachability
#[test]
fn place_then_remove_is_idempotent() {
    let mut session = session_from(OPEN_5X5, 5);
    let pos = Coord::new(1, 2);

    let before = analyze(&session.grid, session.moby_pos);

    assert_eq!(session.place_buoy(pos), PlaceOutcome::Placed);
    assert_eq!(session.grid.tile(pos.x, pos.y), Tile::Buoy);
    assert!(session.remove_buoy(pos));
    assert_eq!(session.grid.tile(pos.x, pos.y), Tile::Water);
    assert!(session.buoys().is_empty());

    let after = analyze(&session.grid, session.moby_pos);
    assert_eq!(before.escaped, after.escaped);
    assert_eq!(before.area_size, after.area_size);
    for y in 0..session.grid.rows {
        for x in 0..session.grid.cols {
            assert_eq!(before.map.get(x, y), after.map.get(x, y));
        }
    }
}

/// Placement on land, on an authored buoy, or on Moby is rejected
#[test]
fn blocked_targets_are_rejected() {
    let mut session = session_from(
        &[
            ".....",
            ".#B..",
            "..M..",
            ".....",
            ".....",
        ],
        5,
    );

    assert_eq!(session.place_buoy(Coord::new(1, 1)), PlaceOutcome::Blocked);
    assert_eq!(session.place_buoy(Coord::new(2, 1)), PlaceOutcome::Blocked);
    assert_eq!(session.place_buoy(session.moby_pos), PlaceOutcome::Blocked);
    assert!(session.buoys().is_empty());
}

/// Authored buoys are terrain: they cannot be taken back
#[test]
fn authored_buoys_cannot_be_removed() {
    let mut session = session_from(
        &[
            ".....",
            "..B..",
            "..M..",
            ".....",
            ".....",
        ],
        5,
    );

    assert!(!session.remove_buoy(Coord::new(2, 1)));
    assert_eq!(session.grid.tile(2, 1), Tile::Buoy);
}

/// Closing the last gap wins; removing a buoy re-opens the level
#[test]
fn win_then_remove_unwins() {
    // Three walls authored, one gap at (2, 3)
    let mut session = session_from(
        &[
            ".....",
            "..B..",
            ".BMB.",
            ".....",
            ".....",
        ],
        2,
    );
    assert!(!session.is_won);

    assert_eq!(session.place_buoy(Coord::new(2, 3)), PlaceOutcome::Placed);
    assert!(session.is_won);
    assert_eq!(session.last_score, 1);
    assert!(session.winning_map.is_some());
    assert!(session.lighthouse_pos.is_some());

    assert!(session.remove_buoy(Coord::new(2, 3)));
    assert!(!session.is_won);
    assert!(session.winning_map.is_none());
    assert!(session.lighthouse_pos.is_none());
}

/// A pinned lighthouse position skips the search entirely
#[test]
fn pinned_lighthouse_overrides_search() {
    let mut level = level_from(
        "pinned",
        &[
            ".....",
            "..B..",
            ".BMB.",
            ".....",
            ".....",
        ],
        2,
    );
    level.lighthouse_pos = Some(LevelCoord { x: 3, y: 3 });

    let mut session = Session::new(&level).expect("valid level");
    session.place_buoy(Coord::new(2, 3));

    assert!(session.is_won);
    assert_eq!(session.lighthouse_pos, Some(Coord::new(3, 3)));
}

/// The optimal-view toggle swaps buoy sets and restores the player's
/// solution untouched
#[test]
fn optimal_view_roundtrip() {
    let mut level = level_from(
        "optimal",
        &[
            ".......",
            ".......",
            "..###..",
            "..#M#..",
            "..#.#..",
            ".......",
            ".......",
        ],
        3,
    );
    // Authored optimum closes the pocket at its mouth, enclosing two tiles
    level.optimal_buoys = vec![LevelCoord { x: 3, y: 5 }];
    level.optimal_area = Some(2);

    let mut session = Session::new(&level).expect("valid level");

    // Player plugs the gap right below Moby, enclosing only one tile
    assert_eq!(session.place_buoy(Coord::new(3, 4)), PlaceOutcome::Placed);
    assert!(session.is_won);
    assert_eq!(session.last_score, 1);
    let player_buoys: Vec<Coord> = session.buoys().iter().map(|b| b.pos).collect();

    assert_eq!(session.toggle_optimal_view(), OptimalView::Shown);
    assert!(session.showing_optimal);
    assert_eq!(session.last_score, 2);
    assert_eq!(session.buoys().len(), 1);
    assert_eq!(session.buoys()[0].pos, Coord::new(3, 5));
    assert_eq!(session.grid.tile(3, 4), Tile::Water);
    assert_eq!(session.grid.tile(3, 5), Tile::Buoy);

    assert_eq!(session.toggle_optimal_view(), OptimalView::Restored);
    assert!(!session.showing_optimal);
    assert_eq!(session.last_score, 1);
    let restored: Vec<Coord> = session.buoys().iter().map(|b| b.pos).collect();
    assert_eq!(restored, player_buoys);
    assert_eq!(session.grid.tile(3, 4), Tile::Buoy);
    assert_eq!(session.grid.tile(3, 5), Tile::Water);
    assert!(session.is_won);
}

/// Toggling with no authored solution is a no-op
#[test]
fn optimal_view_unavailable_without_data() {
    let mut session = session_from(OPEN_5X5, 3);
    assert_eq!(session.toggle_optimal_view(), OptimalView::Unavailable);
}

/// A matching score short-circuits the optimal view
#[test]
fn optimal_view_already_found() {
    let mut level = level_from(
        "already",
        &[
            ".....",
            "..B..",
            ".BMB.",
            ".....",
            ".....",
        ],
        2,
    );
    level.optimal_buoys = vec![LevelCoord { x: 2, y: 3 }];
    level.optimal_area = Some(1);

    let mut session = Session::new(&level).expect("valid level");
    session.place_buoy(Coord::new(2, 3));
    assert!(session.is_won);

    assert_eq!(session.toggle_optimal_view(), OptimalView::AlreadyFound);
    assert!(!session.showing_optimal);
}

/// Reset rebuilds a pristine run of the same level
#[test]
fn reset_restores_pristine_state() {
    let mut session = session_from(OPEN_5X5, 5);
    session.place_buoy(Coord::new(0, 0));
    session.place_buoy(Coord::new(4, 4));

    session.reset().expect("reset must succeed");

    assert!(session.buoys().is_empty());
    assert!(!session.is_won);
    assert_eq!(session.grid.tile(0, 0), Tile::Water);
    assert_eq!(session.grid.tile(4, 4), Tile::Water);
    assert_eq!(session.buoys_left(), 5);
}

/// The hint path matches the router; enclosed sessions have no hint
#[test]
fn escape_hint_follows_win_state() {
    let mut session = session_from(
        &[
            ".....",
            "..B..",
            ".BMB.",
            ".....",
            ".....",
        ],
        2,
    );

    let hint = session.escape_hint().expect("open level has a hint");
    assert_eq!(hint[0], session.moby_pos);
    assert_eq!(hint.len(), 3);

    session.place_buoy(Coord::new(2, 3));
    assert!(session.is_won);
    assert!(session.escape_hint().is_none());
}
