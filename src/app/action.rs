/// Side effects the handler asks the main loop to perform. Anything that
/// needs the runtime or the event sender lives here instead of in the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Unmount the root view if mounted, otherwise mount a fresh one.
    ToggleRoot,
    Quit,
}
