use crate::settings::Settings;

/// Score, level, and lives bookkeeping for one session.
///
/// `high_score` is the only field that survives [`GameStats::reset`]; it is
/// loaded from the persistent store at startup and only ever raised via
/// `max`, so `high_score >= score` holds throughout.
#[derive(Debug, Clone)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        Self {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score,
        }
    }

    /// Resets the per-session counters for a new game. The high score is
    /// all-time and stays.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Awards points for `count` destroyed aliens and keeps the high score
    /// in step.
    pub fn record_kills(&mut self, count: u32, points_each: u32) {
        self.score += count * points_each;
        self.high_score = self.high_score.max(self.score);
    }
}
