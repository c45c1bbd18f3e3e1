mod alien;
mod bullet;
mod fleet;
mod game_state;
mod particle;
mod ship;

// Re-export all public types
pub use alien::Alien;
pub use bullet::Bullet;
pub use fleet::build_fleet;
pub use game_state::GameState;
pub use particle::{Particle, create_explosion_particles};
pub use ship::Ship;
