// Library exports for testing
pub use entities::{Alien, Bullet, GameState, Particle, Ship, build_fleet};
pub use settings::Settings;
pub use stats::GameStats;

pub mod app;
pub mod entities;
pub mod high_score;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod stats;
