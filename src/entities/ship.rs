use crate::settings::Settings;

/// The player's ship. One instance lives for the whole session; losing a
/// life re-centers it rather than recreating it.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Left edge, fractional cells.
    pub x: f32,
    /// Top edge. Fixed baseline near the screen bottom; the ship never
    /// moves vertically.
    pub y: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub const WIDTH: f32 = 5.0;
    pub const HEIGHT: f32 = 3.0;

    /// Creates the ship at the bottom-center of the playfield.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            y: settings.screen_height - Self::HEIGHT - 1.0,
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Advances the ship by its speed in whichever directions are flagged,
    /// clamping so the bounding box stays inside the playfield.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.x += settings.ship_speed;
        }
        if self.moving_left {
            self.x -= settings.ship_speed;
        }
        self.x = self.x.clamp(0.0, settings.screen_width - Self::WIDTH);
    }

    /// Re-centers the ship horizontally (used after a life is lost).
    pub fn center(&mut self, settings: &Settings) {
        self.x = (settings.screen_width - Self::WIDTH) / 2.0;
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec![" /^\\ ", "<|||>", " ||| "]
    }
}
