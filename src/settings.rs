use color_eyre::Result;
use color_eyre::eyre::ensure;
use ratatui::style::Color;

use crate::entities::{Alien, Ship};

// Base values for the fields that scale with difficulty.
const BASE_SHIP_SPEED: f32 = 1.0;
const BASE_BULLET_SPEED: f32 = 1.0;
const BASE_ALIEN_SPEED: f32 = 0.25;
const BASE_ALIEN_POINTS: u32 = 50;

/// Per-session configuration.
///
/// The static fields never change after startup. The dynamic block at the
/// bottom is re-initialized by [`Settings::reset_dynamic`] on restart and
/// scaled by [`Settings::increase_speed`] each time a wave is cleared.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Playfield width in terminal cells.
    pub screen_width: f32,
    /// Playfield height in terminal cells.
    pub screen_height: f32,
    pub bg_color: Color,
    /// Ships the player starts with.
    pub ship_limit: u32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Maximum bullets on screen at once.
    pub bullets_allowed: usize,
    /// Rows the whole fleet descends when it hits an edge.
    pub fleet_drop_speed: f32,
    /// Speed multiplier applied per cleared wave.
    pub speedup_scale: f32,
    /// Point-value multiplier applied per cleared wave.
    pub score_scale: f32,

    // Dynamic settings.
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1.0 = fleet moving right, -1.0 = moving left.
    pub fleet_direction: f32,
    /// Points awarded per alien destroyed.
    pub alien_points: u32,
}

impl Settings {
    /// Builds settings for a terminal of the given size and validates them.
    pub fn for_screen(width: u16, height: u16) -> Result<Self> {
        let settings = Self {
            screen_width: width as f32,
            screen_height: height as f32,
            bg_color: Color::Black,
            ship_limit: 3,
            bullet_width: 1.0,
            bullet_height: 1.0,
            bullets_allowed: 3,
            fleet_drop_speed: 2.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            ship_speed: BASE_SHIP_SPEED,
            bullet_speed: BASE_BULLET_SPEED,
            alien_speed: BASE_ALIEN_SPEED,
            fleet_direction: 1.0,
            alien_points: BASE_ALIEN_POINTS,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Sanity-checks dimensions and speeds. Failures here are fatal at
    /// startup before the terminal is put into raw mode.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width >= 4.0 * Alien::WIDTH && self.screen_width >= Ship::WIDTH,
            "terminal too narrow: need at least {} columns, got {}",
            (4.0 * Alien::WIDTH) as u16,
            self.screen_width as u16,
        );
        ensure!(
            self.screen_height >= 5.0 * Alien::HEIGHT + Ship::HEIGHT,
            "terminal too short: need at least {} rows, got {}",
            (5.0 * Alien::HEIGHT + Ship::HEIGHT) as u16,
            self.screen_height as u16,
        );
        ensure!(self.ship_speed > 0.0, "ship speed must be positive");
        ensure!(self.bullet_speed > 0.0, "bullet speed must be positive");
        ensure!(self.alien_speed > 0.0, "alien speed must be positive");
        ensure!(
            self.fleet_drop_speed > 0.0,
            "fleet drop speed must be positive"
        );
        ensure!(
            self.bullet_width > 0.0 && self.bullet_height > 0.0,
            "bullet dimensions must be positive"
        );
        ensure!(self.bullets_allowed > 0, "bullet cap must be at least 1");
        ensure!(self.ship_limit > 0, "ship limit must be at least 1");
        Ok(())
    }

    /// Restores the dynamic settings to their base values (new session).
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1.0;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Ramps up difficulty after a cleared wave: everything moves faster and
    /// each alien is worth more.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale).round() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_screen_valid() {
        let settings = Settings::for_screen(120, 40).unwrap();
        assert_eq!(settings.screen_width, 120.0);
        assert_eq!(settings.screen_height, 40.0);
        assert_eq!(settings.fleet_direction, 1.0);
        assert_eq!(settings.alien_points, BASE_ALIEN_POINTS);
    }

    #[test]
    fn test_for_screen_rejects_tiny_terminal() {
        assert!(Settings::for_screen(10, 40).is_err());
        assert!(Settings::for_screen(120, 5).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_speeds() {
        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.alien_speed = -0.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.bullet_speed = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_caps() {
        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.bullets_allowed = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.ship_limit = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_increase_speed_scales_everything() {
        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.increase_speed();
        assert!(settings.ship_speed > BASE_SHIP_SPEED);
        assert!(settings.bullet_speed > BASE_BULLET_SPEED);
        assert!(settings.alien_speed > BASE_ALIEN_SPEED);
        assert_eq!(settings.alien_points, 75); // 50 * 1.5
    }

    #[test]
    fn test_reset_dynamic_restores_base_values() {
        let mut settings = Settings::for_screen(120, 40).unwrap();
        settings.increase_speed();
        settings.increase_speed();
        settings.fleet_direction = -1.0;

        settings.reset_dynamic();
        assert_eq!(settings.ship_speed, BASE_SHIP_SPEED);
        assert_eq!(settings.alien_speed, BASE_ALIEN_SPEED);
        assert_eq!(settings.fleet_direction, 1.0);
        assert_eq!(settings.alien_points, BASE_ALIEN_POINTS);
    }
}
