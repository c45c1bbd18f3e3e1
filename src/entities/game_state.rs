/// Top-level session state.
///
/// `Paused` and `GameOver` both suspend gameplay updates; rendering and the
/// state-appropriate input (resume / restart / quit) keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}
