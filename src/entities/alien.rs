/// One alien in the fleet.
///
/// Aliens never steer themselves: the resolver moves the whole fleet each
/// tick, querying [`Alien::check_edge`] to decide when to flip direction
/// and drop. `x` is fractional so slow per-tick drift accumulates instead
/// of rounding away.
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    /// Left edge, fractional cells.
    pub x: f32,
    /// Top edge. Changes only when the fleet drops.
    pub y: f32,
}

impl Alien {
    pub const WIDTH: f32 = 7.0;
    pub const HEIGHT: f32 = 3.0;

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Applies one tick of horizontal drift (`alien_speed * fleet_direction`).
    pub fn update(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Moves the alien down by `dy` rows (fleet direction flip).
    pub fn drop_by(&mut self, dy: f32) {
        self.y += dy;
    }

    /// True when the bounding box touches either horizontal bound. Queried
    /// by the resolver to trigger a fleet-wide direction flip.
    pub fn check_edge(&self, screen_width: f32) -> bool {
        self.x <= 0.0 || self.x + Self::WIDTH >= screen_width
    }

    pub fn bottom(&self) -> f32 {
        self.y + Self::HEIGHT
    }

    pub fn get_sprite_lines(&self) -> Vec<&'static str> {
        vec!["  \\|/  ", " {===} ", "  /_\\  "]
    }
}
