use crossterm::event::Event as CrosstermEvent;

/// Identifies one mount of the root view. Timer ticks carry the generation
/// that started them so stale ticks can be told apart after a remount.
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Heartbeat timer fired
    Heartbeat { generation: Generation },

    /// Tick for UI refresh
    Tick,
}
