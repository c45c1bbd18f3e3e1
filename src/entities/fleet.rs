use crate::settings::Settings;

use super::alien::Alien;

/// Lays out a fresh wave of aliens.
///
/// The grid is fully determined by the playfield dimensions and the alien
/// sprite size: rows top-to-bottom, columns left-to-right, starting at
/// `(alien_width, alien_height)` with a pitch of two sprite widths/heights.
/// Columns stop where less than two alien widths of margin remain at the
/// right edge; rows stop where less than three alien heights remain at the
/// bottom, which keeps the ship's area clear.
pub fn build_fleet(settings: &Settings) -> Vec<Alien> {
    let mut fleet = Vec::new();

    let mut y = Alien::HEIGHT;
    while y + Alien::HEIGHT <= settings.screen_height - 3.0 * Alien::HEIGHT {
        let mut x = Alien::WIDTH;
        while x + Alien::WIDTH <= settings.screen_width - 2.0 * Alien::WIDTH {
            fleet.push(Alien::new(x, y));
            x += 2.0 * Alien::WIDTH;
        }
        y += 2.0 * Alien::HEIGHT;
    }

    fleet
}
