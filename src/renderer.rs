use crate::entities::{Alien, Bullet, GameState, Particle, Ship};
use crate::stats::GameStats;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// View struct that holds all game state needed for rendering. Built after
/// the tick completes, so a frame always shows a consistent end-of-tick
/// snapshot.
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub ship: &'a Ship,
    pub aliens: &'a [Alien],
    pub bullets: &'a [Bullet],
    pub particles: &'a [Particle],
    pub stats: &'a GameStats,
    pub frame_count: u64,
    pub area: Rect,
    pub fps: u32,
    /// Frames left in the life-loss cooldown; non-zero shows the respawn
    /// banner.
    pub respawn_cooldown: u16,
    pub bg_color: Color,
}

/// Converts a fractional-cell coordinate to a terminal cell.
fn cell(value: f32) -> u16 {
    value.round().max(0.0) as u16
}

/// Handles all rendering responsibilities for the game.
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Playing => self.render_game(frame, view),
            GameState::Paused => self.render_paused(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the active gameplay screen.
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        frame
            .buffer_mut()
            .set_style(area, Style::default().bg(view.bg_color));

        // Render stars (simple background)
        if view.frame_count % 10 < 5 {
            let star_text = (0..area.height)
                .map(|_| {
                    let mut rng = rand::rng();
                    if rng.random_bool(0.05) { "." } else { " " }
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }

        // Render the ship - batched multi-line rendering
        let sprite_lines = view.ship.get_sprite_lines();
        let ship_x = cell(view.ship.x);
        let ship_y = cell(view.ship.y);
        let ship_width = Ship::WIDTH as u16;

        let text: Vec<Line> = sprite_lines
            .iter()
            .map(|line| {
                Line::from(*line).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        if ship_y + sprite_lines.len() as u16 <= area.height && ship_x + ship_width <= area.width {
            let ship_area = Rect {
                x: area.x + ship_x,
                y: area.y + ship_y,
                width: ship_width,
                height: sprite_lines.len() as u16,
            };
            frame.render_widget(Paragraph::new(text), ship_area);
        }

        // Render aliens
        for alien in view.aliens {
            let sprite_lines = alien.get_sprite_lines();
            let alien_x = cell(alien.x);
            let alien_y = cell(alien.y);
            let alien_width = Alien::WIDTH as u16;

            let text: Vec<Line> = sprite_lines
                .iter()
                .map(|line| {
                    Line::from(*line).style(
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                })
                .collect();

            if alien_y + sprite_lines.len() as u16 <= area.height
                && alien_x + alien_width <= area.width
            {
                let alien_area = Rect {
                    x: area.x + alien_x,
                    y: area.y + alien_y,
                    width: alien_width,
                    height: sprite_lines.len() as u16,
                };
                frame.render_widget(Paragraph::new(text), alien_area);
            }
        }

        // Render bullets and particles - direct buffer access
        let buffer = frame.buffer_mut();
        for bullet in view.bullets {
            let bullet_x = cell(bullet.x);
            let bullet_y = cell(bullet.y);
            if bullet_x < area.width && bullet_y < area.height {
                buffer.set_string(
                    area.x + bullet_x,
                    area.y + bullet_y,
                    "|",
                    Style::default().fg(Color::Yellow),
                );
            }
        }

        for particle in view.particles {
            let particle_x = cell(particle.x);
            let particle_y = cell(particle.y);
            if particle_x < area.width && particle_y < area.height {
                // Fade from red to yellow as the particle burns out
                let color = if particle.lifetime > 4 {
                    Color::Red
                } else {
                    Color::Yellow
                };
                buffer.set_string(
                    area.x + particle_x,
                    area.y + particle_y,
                    particle.char.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Stats overlay at the top
        let stats_line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  High: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.high_score),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.level),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ships: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.ships_left),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(stats_line), stats_area);

        // Respawn banner while the life-loss cooldown runs
        if view.respawn_cooldown > 0 {
            let banner = Line::from(vec![Span::styled(
                "SHIP DOWN - GET READY",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]);

            let banner_area = Rect {
                x: area.x,
                y: area.y + area.height / 2,
                width: area.width,
                height: 1,
            };

            frame.render_widget(Paragraph::new(banner).centered(), banner_area);
        }

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause screen with overlay.
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        // First render the game screen
        self.render_game(frame, view);

        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = Rect {
            x: area.width.saturating_sub(30) / 2,
            y: area.height.saturating_sub(6) / 2,
            width: 30.min(area.width),
            height: 6.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Renders the game over screen.
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║      GAME OVER!           ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.stats.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("High Score: {}", view.stats.high_score))
                .centered()
                .cyan()
                .bold(),
            Line::from(format!("Level Reached: {}", view.stats.level))
                .centered()
                .magenta(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}
