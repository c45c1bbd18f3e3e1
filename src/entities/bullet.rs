use crate::settings::Settings;

use super::ship::Ship;

/// A bullet fired from the ship. Travels straight up; removal (off-screen
/// or collision) is handled by the resolver, never by the bullet itself.
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Left edge, fractional cells.
    pub x: f32,
    /// Top edge. Decreases every tick.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    /// Creates a bullet at the ship's top-center.
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        Self {
            x: ship.x + (Ship::WIDTH - settings.bullet_width) / 2.0,
            y: ship.y,
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    /// Moves the bullet up the screen by the current bullet speed.
    pub fn update(&mut self, bullet_speed: f32) {
        self.y -= bullet_speed;
    }

    /// Bottom edge. The resolver prunes the bullet once this passes above
    /// the top of the screen.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
