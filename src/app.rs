use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::entities::{
    Alien, Bullet, GameState, Particle, Ship, build_fleet, create_explosion_particles,
};
use crate::high_score::HighScoreStore;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::settings::Settings;
use crate::stats::GameStats;

/// Fixed frame budget, ~60 ticks per second.
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Ticks of gameplay suspension after a lost ship. Input and rendering keep
/// pumping; only entity updates pause.
const RESPAWN_COOLDOWN_FRAMES: u16 = 30;

/// Axis-aligned bounding-box overlap check.
#[allow(clippy::too_many_arguments)]
fn rects_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// The main application: owns the whole session object graph and is the
/// only place cross-entity state gets mutated.
pub struct App {
    pub running: bool,
    pub game_state: GameState,
    pub settings: Settings,
    pub ship: Ship,
    pub aliens: Vec<Alien>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub stats: GameStats,
    pub high_scores: HighScoreStore,
    /// Frames left before gameplay resumes after a lost ship.
    pub respawn_cooldown: u16,
    /// Frames info
    frame_count: u64,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Constructs a new session: fleet built, ship centered, high score
    /// loaded from the store.
    pub fn new(settings: Settings, high_scores: HighScoreStore) -> Self {
        let ship = Ship::new(&settings);
        let aliens = build_fleet(&settings);
        let stats = GameStats::new(&settings, high_scores.best());

        Self {
            running: true,
            game_state: GameState::Playing,
            ship,
            aliens,
            bullets: Vec::new(),
            particles: Vec::new(),
            stats,
            high_scores,
            settings,
            respawn_cooldown: 0,
            frame_count: 0,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Calculate FPS
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            // Render the frame
            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game_state,
                    ship: &self.ship,
                    aliens: &self.aliens,
                    bullets: &self.bullets,
                    particles: &self.particles,
                    stats: &self.stats,
                    frame_count: self.frame_count,
                    area: frame.area(),
                    fps: self.fps,
                    respawn_cooldown: self.respawn_cooldown,
                    bg_color: self.settings.bg_color,
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and apply them
            self.input_manager.poll_events(self.game_state)?;
            let actions: Vec<InputAction> = self.input_manager.actions().to_vec();
            self.process_actions(&actions);

            // Update game state
            if self.game_state == GameState::Playing {
                self.update_game();
            }

            // Sleep out the rest of the frame budget
            if let Some(remaining) = FRAME_DURATION.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }

        // Flush any pending high-score write before the terminal goes away.
        // A failed write is not worth dying over at this point.
        let _ = self.high_scores.save(self.stats.high_score);
        Ok(())
    }

    /// Applies one-shot input actions, then mirrors the held movement keys
    /// into the ship's movement flags.
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Pause => {
                    self.game_state = GameState::Paused;
                }
                InputAction::Resume => {
                    self.game_state = GameState::Playing;
                }
                InputAction::Restart => {
                    self.restart();
                }
                InputAction::Fire => {
                    self.fire_bullet();
                }
            }
        }

        let playing = self.game_state == GameState::Playing;
        self.ship.moving_left = playing && self.input_manager.left_held();
        self.ship.moving_right = playing && self.input_manager.right_held();
    }

    /// Fires a bullet from the ship's top-center, subject to the concurrent
    /// bullet cap and the respawn cooldown.
    pub fn fire_bullet(&mut self) {
        if self.respawn_cooldown > 0 {
            return;
        }
        if self.bullets.len() >= self.settings.bullets_allowed {
            return;
        }
        self.bullets
            .push(Bullet::from_ship(&self.ship, &self.settings));
    }

    /// Advances the session by one tick.
    ///
    /// Order matters: ship, bullets, bullet pruning, bullet-alien
    /// resolution, wave rebuild, fleet movement, ship-alien check. A tick
    /// that rebuilds the fleet (wave clear or lost ship) ends immediately so
    /// the new wave starts from its pristine layout.
    pub fn update_game(&mut self) {
        self.frame_count += 1;

        // Life-loss cooldown: gameplay is suspended, everything else pumps.
        if self.respawn_cooldown > 0 {
            self.respawn_cooldown -= 1;
            return;
        }

        self.ship.update(&self.settings);

        for bullet in &mut self.bullets {
            bullet.update(self.settings.bullet_speed);
        }
        // Drop bullets whose bottom edge passed above the screen top.
        self.bullets.retain(|b| b.bottom() > 0.0);

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| {
            !p.is_dead()
                && !p.is_out_of_bounds(self.settings.screen_width, self.settings.screen_height)
        });

        self.resolve_bullet_hits();

        if self.aliens.is_empty() {
            self.start_new_wave();
            return;
        }

        self.update_fleet();

        let ship_hit = self.aliens.iter().any(|alien| {
            rects_overlap(
                self.ship.x,
                self.ship.y,
                Ship::WIDTH,
                Ship::HEIGHT,
                alien.x,
                alien.y,
                Alien::WIDTH,
                Alien::HEIGHT,
            )
        });
        let aliens_landed = self
            .aliens
            .iter()
            .any(|alien| alien.bottom() >= self.settings.screen_height);

        if ship_hit || aliens_landed {
            self.ship_hit();
        }
    }

    /// Two-phase bullet-alien resolution: mark every overlapping pair, then
    /// remove. A bullet overlapping several aliens destroys all of them; an
    /// alien overlapping several bullets is destroyed (and scored) once.
    fn resolve_bullet_hits(&mut self) {
        let mut dead_bullets = vec![false; self.bullets.len()];
        let mut dead_aliens = vec![false; self.aliens.len()];
        let mut explosions: Vec<(f32, f32)> = Vec::new();

        for (bullet_idx, bullet) in self.bullets.iter().enumerate() {
            for (alien_idx, alien) in self.aliens.iter().enumerate() {
                if rects_overlap(
                    bullet.x,
                    bullet.y,
                    bullet.width,
                    bullet.height,
                    alien.x,
                    alien.y,
                    Alien::WIDTH,
                    Alien::HEIGHT,
                ) {
                    dead_bullets[bullet_idx] = true;
                    if !dead_aliens[alien_idx] {
                        dead_aliens[alien_idx] = true;
                        explosions.push((
                            alien.x + Alien::WIDTH / 2.0,
                            alien.y + Alien::HEIGHT / 2.0,
                        ));
                    }
                }
            }
        }

        let kills = explosions.len() as u32;
        if kills > 0 {
            self.stats.record_kills(kills, self.settings.alien_points);
            for (x, y) in explosions {
                self.particles.extend(create_explosion_particles(x, y));
            }
        }

        let mut index = 0;
        self.bullets.retain(|_| {
            let dead = dead_bullets[index];
            index += 1;
            !dead
        });
        let mut index = 0;
        self.aliens.retain(|_| {
            let dead = dead_aliens[index];
            index += 1;
            !dead
        });
    }

    /// The fleet cleared: ramp difficulty, advance the level, and rebuild.
    fn start_new_wave(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.stats.level += 1;
        self.aliens = build_fleet(&self.settings);
    }

    /// Moves the whole fleet: an edge touch flips the direction and drops
    /// every alien first, then all aliens drift horizontally.
    fn update_fleet(&mut self) {
        let hit_edge = self
            .aliens
            .iter()
            .any(|alien| alien.check_edge(self.settings.screen_width));

        if hit_edge {
            self.settings.fleet_direction = -self.settings.fleet_direction;
            for alien in &mut self.aliens {
                alien.drop_by(self.settings.fleet_drop_speed);
            }
        }

        let dx = self.settings.alien_speed * self.settings.fleet_direction;
        for alien in &mut self.aliens {
            alien.update(dx);
        }
    }

    /// A ship was lost to a collision or a landed alien.
    fn ship_hit(&mut self) {
        self.particles.extend(create_explosion_particles(
            self.ship.x + Ship::WIDTH / 2.0,
            self.ship.y + Ship::HEIGHT / 2.0,
        ));

        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);

        if self.stats.ships_left > 0 {
            self.bullets.clear();
            self.aliens = build_fleet(&self.settings);
            self.ship.center(&self.settings);
            self.respawn_cooldown = RESPAWN_COOLDOWN_FRAMES;
        } else {
            self.game_state = GameState::GameOver;
            // Persist now; quitting later flushes again as a no-op.
            let _ = self.high_scores.save(self.stats.high_score);
        }
    }

    /// Starts a fresh session from the game-over screen. The high score is
    /// the only stat that carries over.
    pub fn restart(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(&self.settings);
        self.bullets.clear();
        self.particles.clear();
        self.aliens = build_fleet(&self.settings);
        self.ship.center(&self.settings);
        self.respawn_cooldown = 0;
        self.game_state = GameState::Playing;
    }
}
