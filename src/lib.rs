pub mod config;
pub mod escape;
pub mod grid;
pub mod level;
pub mod lighthouse;
pub mod reachability;
pub mod scores;
pub mod session;

pub use escape::find_escape_path;
pub use grid::{Coord, Grid, Tile};
pub use lighthouse::find_lighthouse_pos;
pub use reachability::{analyze, ReachMap, Reachability};
pub use session::{PlaceOutcome, Session};
