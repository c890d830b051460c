use arboard::Clipboard;
use enclose::config::Config;
use enclose::grid::{Coord, Tile};
use enclose::level::LevelSet;
use enclose::scores::{Medal, ScoreStore};
use enclose::session::{OptimalView, PlaceOutcome, Session};
use macroquad::prelude::*;

/// Top margin reserved for the HUD text
const HUD_HEIGHT: f32 = 90.0;
const TILE_SIZE_MIN: f32 = 15.0;
/// How long the buoy-limit flash stays on screen, seconds
const LIMIT_FLASH_SECS: f64 = 0.4;

struct GameApp {
    config: Config,
    levels: LevelSet,
    scores: ScoreStore,
    session: Session,
    level_index: usize,
    hover: Option<Coord>,
    /// get_time() of the last rejected placement, for the limit flash
    limit_flash_at: f64,
    new_record: bool,
}

impl GameApp {
    fn new(config: Config) -> Result<Self, String> {
        let levels = LevelSet::load(&config.files.levels_path);
        if levels.levels.is_empty() {
            return Err("level set is empty".to_string());
        }
        let scores = ScoreStore::load(&config.files.scores_path);
        let session = Session::new(&levels.levels[0])?;

        Ok(GameApp {
            config,
            levels,
            scores,
            session,
            level_index: 0,
            hover: None,
            limit_flash_at: -1.0,
            new_record: false,
        })
    }

    fn load_level(&mut self, index: usize) {
        if index >= self.levels.levels.len() {
            return;
        }
        match Session::new(&self.levels.levels[index]) {
            Ok(session) => {
                self.level_index = index;
                self.session = session;
                self.new_record = false;
                self.limit_flash_at = -1.0;
            }
            Err(e) => eprintln!("Failed to load level {}: {}", index + 1, e),
        }
    }

    /// Tile size and map origin for the current window dimensions
    fn layout(&self) -> (f32, f32, f32) {
        let cols = self.session.grid.cols as f32;
        let rows = self.session.grid.rows as f32;
        let safe_w = screen_width() - 20.0;
        let safe_h = screen_height() - HUD_HEIGHT - 20.0;

        let ts = (safe_w / cols)
            .min(safe_h / rows)
            .clamp(TILE_SIZE_MIN, self.config.visual.tile_size);

        let offset_x = (screen_width() - cols * ts) / 2.0;
        let offset_y = HUD_HEIGHT + (safe_h - rows * ts) / 2.0;
        (ts, offset_x, offset_y)
    }

    fn tile_at_mouse(&self) -> Option<Coord> {
        let (ts, ox, oy) = self.layout();
        let (mx, my) = mouse_position();
        let x = ((mx - ox) / ts).floor() as i32;
        let y = ((my - oy) / ts).floor() as i32;
        if self.session.grid.in_bounds(x, y) {
            Some(Coord::new(x, y))
        } else {
            None
        }
    }

    fn handle_click(&mut self, pos: Coord) {
        let session = &mut self.session;

        // After a win the player can still take buoys back
        if session.is_won {
            if !session.showing_optimal && session.grid.tile(pos.x, pos.y) == Tile::Buoy {
                session.remove_buoy(pos);
            }
            return;
        }

        match session.grid.tile(pos.x, pos.y) {
            Tile::Buoy => {
                session.remove_buoy(pos);
            }
            Tile::Water => match session.place_buoy(pos) {
                PlaceOutcome::Placed => {
                    if session.is_won {
                        self.new_record = self.scores.record(self.level_index, session.last_score);
                        if let Err(e) = self.scores.save_to_file(&self.config.files.scores_path) {
                            eprintln!("{}", e);
                        }
                    }
                }
                PlaceOutcome::LimitReached => {
                    self.limit_flash_at = get_time();
                }
                PlaceOutcome::Blocked => {}
            },
            _ => {}
        }
    }

    fn copy_layout_to_clipboard(&self) {
        let layout = self.session.grid.to_layout_string(self.session.moby_pos);
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&layout) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Level layout copied to clipboard!");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        let v = &self.config.visual;
        clear_background(Color::from_rgba(v.background_r, v.background_g, v.background_b, 255));

        let (ts, ox, oy) = self.layout();
        let grid = &self.session.grid;

        // Terrain
        for y in 0..grid.rows {
            for x in 0..grid.cols {
                let px = ox + x as f32 * ts;
                let py = oy + y as f32 * ts;

                match grid.tile(x, y) {
                    Tile::Water | Tile::Moby => {
                        draw_rectangle(px, py, ts, ts, Color::from_rgba(31, 71, 104, 255));
                    }
                    Tile::Land => {
                        // Shade coastline tiles slightly lighter than inland ones
                        let n = grid.land_neighbors(x, y);
                        let inland = n.n && n.s && n.e && n.w;
                        let color = if inland {
                            Color::from_rgba(76, 153, 76, 255)
                        } else {
                            Color::from_rgba(104, 176, 92, 255)
                        };
                        draw_rectangle(px, py, ts, ts, color);
                    }
                    Tile::Buoy => {
                        draw_rectangle(px, py, ts, ts, Color::from_rgba(31, 71, 104, 255));
                    }
                }

                // Grid lines
                let line = Color::new(1.0, 1.0, 1.0, v.grid_opacity);
                draw_rectangle_lines(px, py, ts, ts, 1.0, line);
            }
        }

        // Darken everything outside the enclosed region after a win
        if let Some(map) = &self.session.winning_map {
            for y in 0..grid.rows {
                for x in 0..grid.cols {
                    if !map.is_inside(x, y) {
                        let px = ox + x as f32 * ts;
                        let py = oy + y as f32 * ts;
                        draw_rectangle(px, py, ts, ts, Color::new(0.0, 0.0, 0.0, 0.5));
                    }
                }
            }
        }

        // Buoys, with a short pop-in scale animation
        for buoy in self.session.buoys() {
            let age = buoy.placed_at.elapsed().as_secs_f32();
            let scale = (age * 5.0).min(1.0);
            let r = ts * 0.35 * scale;
            let cx = ox + buoy.pos.x as f32 * ts + ts / 2.0;
            let cy = oy + buoy.pos.y as f32 * ts + ts / 2.0;
            draw_circle(cx, cy, r, Color::from_rgba(230, 126, 34, 255));
            draw_circle_lines(cx, cy, r, 2.0, Color::from_rgba(120, 60, 10, 255));
        }

        // Moby
        let moby = self.session.moby_pos;
        let mx = ox + moby.x as f32 * ts + ts / 2.0;
        let my = oy + moby.y as f32 * ts + ts / 2.0;
        draw_circle(mx, my, ts * 0.4, Color::from_rgba(200, 210, 220, 255));
        draw_circle(mx + ts * 0.12, my - ts * 0.08, ts * 0.06, BLACK);

        // Lighthouse marker (top-left of the chosen 2x2 block)
        if let Some(pos) = self.session.lighthouse_pos {
            let px = ox + pos.x as f32 * ts;
            let py = oy + pos.y as f32 * ts;
            draw_rectangle(px, py, ts * 2.0, ts * 2.0, Color::from_rgba(240, 220, 120, 220));
            draw_rectangle_lines(px, py, ts * 2.0, ts * 2.0, 3.0, Color::from_rgba(120, 100, 30, 255));
        }

        // Escape hint while hovering Moby on an open level
        if !self.session.is_won && self.hover == Some(moby) {
            if let Some(path) = self.session.escape_hint() {
                if path.len() >= self.config.hints.min_path_len {
                    self.draw_escape_path(&path, ts, ox, oy);
                }
            }
        }

        // Buoy-limit feedback flash
        if get_time() - self.limit_flash_at < LIMIT_FLASH_SECS {
            let w = self.session.grid.cols as f32 * ts;
            let h = self.session.grid.rows as f32 * ts;
            draw_rectangle_lines(ox, oy, w, h, 6.0, Color::new(1.0, 0.2, 0.2, 0.8));
        }

        self.draw_hud();
    }

    fn draw_escape_path(&self, path: &[Coord], ts: f32, ox: f32, oy: f32) {
        let center = |c: &Coord| {
            (
                ox + c.x as f32 * ts + ts / 2.0,
                oy + c.y as f32 * ts + ts / 2.0,
            )
        };
        let color = Color::new(1.0, 1.0, 1.0, 0.8);
        let width = (ts / 12.0).max(2.0);

        for pair in path.windows(2) {
            let (x1, y1) = center(&pair[0]);
            let (x2, y2) = center(&pair[1]);
            draw_line(x1, y1, x2, y2, width, color);
        }

        // Arrowhead on the final segment
        if path.len() >= 2 {
            let (px, py) = center(&path[path.len() - 2]);
            let (tx, ty) = center(&path[path.len() - 1]);
            let angle = (ty - py).atan2(tx - px);
            let len = ts * 0.3;
            let spread = 0.5;
            for side in [-spread, spread] {
                draw_line(
                    tx,
                    ty,
                    tx - len * (angle + side).cos(),
                    ty - len * (angle + side).sin(),
                    width,
                    color,
                );
            }
        }
    }

    fn draw_hud(&self) {
        let level = self.session.level();
        let best = self.scores.best(self.level_index);

        let title = format!(
            "Day {} - {}   ({}x{}, buoy budget {})",
            self.level_index + 1,
            level.name,
            self.session.grid.cols,
            self.session.grid.rows,
            self.session.max_buoys
        );
        draw_text(&title, 10.0, 22.0, 24.0, WHITE);

        let status = if self.session.is_won {
            let medal = match Medal::for_score(self.session.last_score, level.optimal_area) {
                Medal::Gold => " [gold]",
                Medal::Silver => " [silver]",
                Medal::Bronze => " [bronze]",
                Medal::None => "",
            };
            let record = if self.new_record { " - new record!" } else { "" };
            format!(
                "Moby is trapped! Area: {}{}{}   Best: {}",
                self.session.last_score, medal, record, best
            )
        } else {
            format!(
                "Buoys left: {}   Best: {}",
                self.session.buoys_left(),
                best
            )
        };
        draw_text(&status, 10.0, 46.0, 20.0, WHITE);

        if self.session.showing_optimal {
            draw_text("Showing authored optimal solution (O to return)", 10.0, 66.0, 18.0, YELLOW);
        } else {
            draw_text(
                "Click: place/remove buoy | Hover Moby: escape hint | R: reset | N/P: level | O: optimal | C: copy layout | Esc: quit",
                10.0,
                66.0,
                16.0,
                GRAY,
            );
        }
    }
}

#[macroquad::main("Enclose")]
async fn main() {
    let config = Config::load();

    let mut app = match GameApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            return;
        }
    };

    loop {
        app.hover = app.tile_at_mouse();

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(pos) = app.tile_at_mouse() {
                app.handle_click(pos);
            }
        }

        if is_key_pressed(KeyCode::R) {
            if let Err(e) = app.session.reset() {
                eprintln!("{}", e);
            }
            app.new_record = false;
        }
        if is_key_pressed(KeyCode::N) && app.level_index + 1 < app.levels.levels.len() {
            app.load_level(app.level_index + 1);
        }
        if is_key_pressed(KeyCode::P) && app.level_index > 0 {
            app.load_level(app.level_index - 1);
        }
        if is_key_pressed(KeyCode::O) && app.session.is_won {
            match app.session.toggle_optimal_view() {
                OptimalView::Unavailable => println!("No authored optimal solution for this level"),
                OptimalView::AlreadyFound => println!("You already found the optimal solution!"),
                OptimalView::Shown | OptimalView::Restored => {}
            }
        }
        if is_key_pressed(KeyCode::C) {
            app.copy_layout_to_clipboard();
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.draw();

        next_frame().await
    }
}
