/// Integration tests for the game loop and collision/lifecycle resolver.
///
/// These drive whole ticks through `App::update_game` and verify the
/// cross-entity bookkeeping: bullet cap and pruning, collision resolution
/// and scoring, wave rebuilds, the ship-loss sequence, fleet edge bounces,
/// and high-score persistence.
use std::env;
use std::fs;
use std::path::PathBuf;

use invasion::app::App;
use invasion::entities::{Alien, Bullet, GameState, Ship, build_fleet};
use invasion::high_score::HighScoreStore;
use invasion::settings::Settings;

fn store_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("invasion_it_{}_{}", std::process::id(), name))
}

/// A fresh app on a 120x40 playfield with an isolated high-score file.
fn test_app(name: &str) -> App {
    let path = store_path(name);
    let _ = fs::remove_file(&path);
    let settings = Settings::for_screen(120, 40).unwrap();
    App::new(settings, HighScoreStore::open(path))
}

/// A bullet positioned so that after one tick of movement it sits at
/// (x, y). Bullets move before collisions are resolved.
fn bullet_landing_at(app: &App, x: f32, y: f32) -> Bullet {
    let mut bullet = Bullet::from_ship(&app.ship, &app.settings);
    bullet.x = x;
    bullet.y = y + app.settings.bullet_speed;
    bullet
}

#[test]
fn test_fleet_build_is_deterministic() {
    let settings = Settings::for_screen(120, 40).unwrap();
    let first = build_fleet(&settings);
    let second = build_fleet(&settings);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_firing_respects_bullet_cap() {
    let mut app = test_app("bullet_cap");
    for _ in 0..app.settings.bullets_allowed {
        app.fire_bullet();
    }
    assert_eq!(app.bullets.len(), app.settings.bullets_allowed);

    app.fire_bullet();
    assert_eq!(app.bullets.len(), app.settings.bullets_allowed);
}

#[test]
fn test_offscreen_bullet_pruned_within_one_tick() {
    let mut app = test_app("prune");
    let mut bullet = Bullet::from_ship(&app.ship, &app.settings);
    bullet.y = -0.5; // bottom edge will pass the screen top this tick
    app.bullets.push(bullet);

    app.update_game();
    assert!(app.bullets.is_empty());
    // Nothing else was disturbed: the starting fleet is still up.
    assert_eq!(app.stats.level, 1);
    assert!(!app.aliens.is_empty());
}

#[test]
fn test_bullet_alien_collision_removes_both_and_scores() {
    let mut app = test_app("collision");
    let survivor = Alien::new(80.0, 20.0);
    app.aliens = vec![Alien::new(30.0, 10.0), survivor.clone()];
    let bullet = bullet_landing_at(&app, 32.0, 11.0);
    app.bullets.push(bullet);

    let points = app.settings.alien_points;
    app.update_game();

    assert_eq!(app.aliens.len(), 1);
    assert!(app.bullets.is_empty());
    assert_eq!(app.stats.score, points);
    assert_eq!(app.stats.high_score, points);
    // The surviving alien only drifted; it was not touched by the pass.
    assert_eq!(app.aliens[0].y, survivor.y);
}

#[test]
fn test_no_overlap_means_no_removal() {
    let mut app = test_app("no_overlap");
    app.aliens = vec![Alien::new(30.0, 10.0)];
    let bullet = bullet_landing_at(&app, 90.0, 25.0);
    app.bullets.push(bullet);

    app.update_game();
    assert_eq!(app.aliens.len(), 1);
    assert_eq!(app.bullets.len(), 1);
    assert_eq!(app.stats.score, 0);
}

#[test]
fn test_one_bullet_destroys_every_alien_it_overlaps() {
    let mut app = test_app("multi_kill");
    // Two aliens side by side, overlapping boxes; one wide-enough bullet
    // through the seam takes out both in the same pass.
    app.aliens = vec![Alien::new(30.0, 10.0), Alien::new(33.0, 10.0)];
    let bullet = bullet_landing_at(&app, 34.0, 11.0);
    app.bullets.push(bullet);

    let points = app.settings.alien_points;
    app.update_game();

    // Both died; the set emptied, so the same tick started a new wave.
    assert_eq!(app.stats.score, 2 * points);
    assert_eq!(app.stats.level, 2);
}

#[test]
fn test_wave_rebuild_after_last_alien_dies() {
    let mut app = test_app("wave_rebuild");
    app.aliens = vec![Alien::new(30.0, 10.0)];
    let bullet = bullet_landing_at(&app, 32.0, 11.0);
    app.bullets.push(bullet);
    // A second bullet elsewhere proves the rebuild clears all bullets.
    let bullet = bullet_landing_at(&app, 100.0, 25.0);
    app.bullets.push(bullet);

    app.update_game();

    assert!(app.bullets.is_empty());
    assert_eq!(app.stats.level, 2);
    // The new wave has the same pristine layout as a fresh build.
    assert_eq!(app.aliens, build_fleet(&app.settings));
}

#[test]
fn test_wave_rebuild_ramps_difficulty() {
    let mut app = test_app("wave_speedup");
    let base_alien_speed = app.settings.alien_speed;
    let base_points = app.settings.alien_points;

    app.aliens = vec![Alien::new(30.0, 10.0)];
    let bullet = bullet_landing_at(&app, 32.0, 11.0);
    app.bullets.push(bullet);
    app.update_game();

    assert!(app.settings.alien_speed > base_alien_speed);
    assert!(app.settings.alien_points > base_points);
}

#[test]
fn test_ship_loss_with_ships_remaining() {
    let mut app = test_app("ship_loss");
    let starting_ships = app.stats.ships_left;
    assert!(starting_ships > 1);

    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(3.0, app.ship.y)];
    let bullet = bullet_landing_at(&app, 100.0, 25.0);
    app.bullets.push(bullet);

    app.update_game();

    assert_eq!(app.stats.ships_left, starting_ships - 1);
    assert!(app.bullets.is_empty());
    assert_eq!(app.aliens, build_fleet(&app.settings));
    assert_eq!(app.ship.x, (app.settings.screen_width - Ship::WIDTH) / 2.0);
    assert!(app.respawn_cooldown > 0);
    assert_eq!(app.game_state, GameState::Playing);
}

#[test]
fn test_ship_loss_on_last_ship_ends_game() {
    let mut app = test_app("game_over");
    app.stats.ships_left = 1;
    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(3.0, app.ship.y)];

    app.update_game();

    assert_eq!(app.stats.ships_left, 0);
    assert_eq!(app.game_state, GameState::GameOver);
    let _ = fs::remove_file(store_path("game_over"));
}

#[test]
fn test_alien_reaching_bottom_costs_a_ship() {
    let mut app = test_app("landing");
    let starting_ships = app.stats.ships_left;
    // Far from the ship horizontally, but touching the screen bottom.
    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(
        100.0,
        app.settings.screen_height - Alien::HEIGHT,
    )];

    app.update_game();
    assert_eq!(app.stats.ships_left, starting_ships - 1);
}

#[test]
fn test_respawn_cooldown_suspends_gameplay() {
    let mut app = test_app("cooldown");
    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(3.0, app.ship.y)];
    app.update_game();
    assert!(app.respawn_cooldown > 0);

    // While the cooldown runs, entities hold still.
    let frozen_fleet = app.aliens.clone();
    let cooldown = app.respawn_cooldown;
    app.update_game();
    assert_eq!(app.respawn_cooldown, cooldown - 1);
    assert_eq!(app.aliens, frozen_fleet);

    // Firing is suspended too.
    app.fire_bullet();
    assert!(app.bullets.is_empty());

    // Once it elapses, ticks move the fleet again.
    while app.respawn_cooldown > 0 {
        app.update_game();
    }
    app.update_game();
    assert_ne!(app.aliens, frozen_fleet);
}

#[test]
fn test_fleet_edge_bounce_flips_direction_and_drops() {
    let mut app = test_app("edge_bounce");
    let drop = app.settings.fleet_drop_speed;
    app.aliens = vec![
        Alien::new(app.settings.screen_width - Alien::WIDTH, 5.0),
        Alien::new(30.0, 5.0),
    ];
    assert_eq!(app.settings.fleet_direction, 1.0);

    app.update_game();

    assert_eq!(app.settings.fleet_direction, -1.0);
    for alien in &app.aliens {
        assert_eq!(alien.y, 5.0 + drop);
    }
    // And the drift now runs leftward.
    assert!(app.aliens[1].x < 30.0);
}

#[test]
fn test_high_score_survives_persistence_reload() {
    let path = store_path("persistence");
    let _ = fs::remove_file(&path);

    let settings = Settings::for_screen(120, 40).unwrap();
    let mut app = App::new(settings, HighScoreStore::open(path.clone()));

    // Score one kill, then lose the last ship so the store gets flushed.
    app.aliens = vec![Alien::new(30.0, 10.0), Alien::new(80.0, 20.0)];
    let bullet = bullet_landing_at(&app, 32.0, 11.0);
    app.bullets.push(bullet);
    app.update_game();
    let observed_score = app.stats.score;
    assert!(observed_score > 0);

    app.stats.ships_left = 1;
    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(3.0, app.ship.y)];
    app.update_game();
    assert_eq!(app.game_state, GameState::GameOver);

    let reloaded = HighScoreStore::open(path.clone());
    assert!(reloaded.best() >= observed_score);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_restart_resets_session_but_keeps_high_score() {
    let mut app = test_app("restart");
    app.aliens = vec![Alien::new(30.0, 10.0), Alien::new(80.0, 20.0)];
    let bullet = bullet_landing_at(&app, 32.0, 11.0);
    app.bullets.push(bullet);
    app.update_game();
    let high_score = app.stats.high_score;
    assert!(high_score > 0);

    app.stats.ships_left = 1;
    app.ship.x = 3.0;
    app.aliens = vec![Alien::new(3.0, app.ship.y)];
    app.update_game();
    assert_eq!(app.game_state, GameState::GameOver);

    app.restart();

    assert_eq!(app.game_state, GameState::Playing);
    assert_eq!(app.stats.score, 0);
    assert_eq!(app.stats.level, 1);
    assert_eq!(app.stats.ships_left, app.settings.ship_limit);
    assert_eq!(app.stats.high_score, high_score);
    assert_eq!(app.aliens, build_fleet(&app.settings));
    let _ = fs::remove_file(store_path("restart"));
}
