use crate::app::console::{Console, ConsoleSource};
use crate::app::event::Generation;
use crate::config::AppConfig;
use crate::view::root::RootView;
use crate::view::timer::{PeriodicTimer, TimerState};
use ratatui::layout::Rect;

pub struct AppState {
    pub root: Option<RootView>,
    pub console: Console,
    pub next_generation: Generation,
    /// Terminal size, kept in sync with resize events for mouse hit-testing.
    pub area: Rect,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, area: Rect) -> Self {
        let console = Console::new(
            config.ui.max_console_lines,
            config.ui.timestamp_format.clone(),
        );
        Self {
            root: None,
            console,
            next_generation: 0,
            area,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn allocate_generation(&mut self) -> Generation {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    /// Mount a root view around `timer`. A view that is still mounted is torn
    /// down first so only one timer is ever live.
    pub fn mount_root(&mut self, timer: PeriodicTimer) {
        self.unmount_root();
        let root = RootView::mount(timer);
        self.console.log(
            ConsoleSource::System,
            &format!("root view mounted (#{})", root.generation()),
        );
        self.root = Some(root);
        self.dirty = true;
    }

    /// Tear the root view down. Returns `false` if nothing was mounted.
    pub fn unmount_root(&mut self) -> bool {
        let Some(mut root) = self.root.take() else {
            return false;
        };
        if root.unmount() {
            self.console.log(
                ConsoleSource::System,
                &format!("root view unmounted (#{})", root.generation()),
            );
        }
        self.dirty = true;
        true
    }

    pub fn status_line(&self) -> String {
        match &self.root {
            Some(root) => {
                let timer = match root.timer_state() {
                    TimerState::Running => "running",
                    TimerState::Stopped => "stopped",
                };
                format!(
                    "Root #{} | timer {} | focus: {}",
                    root.generation(),
                    timer,
                    root.focus().name()
                )
            }
            None => "Root unmounted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::view::timer::HEARTBEAT_PERIOD;
    use tokio::sync::mpsc;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), Rect::new(0, 0, 80, 24))
    }

    fn timer(state: &mut AppState, tx: &mpsc::UnboundedSender<AppEvent>) -> PeriodicTimer {
        PeriodicTimer::start(state.allocate_generation(), HEARTBEAT_PERIOD, tx.clone())
    }

    #[tokio::test]
    async fn test_mount_unmount_cycles() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = state();

        for expected in 0..3 {
            let t = timer(&mut state, &tx);
            state.mount_root(t);
            let root = state.root.as_ref().unwrap();
            assert_eq!(root.generation(), expected);
            assert_eq!(root.timer_state(), TimerState::Running);
            assert!(state.unmount_root());
            assert!(state.root.is_none());
            assert!(!state.unmount_root());
        }

        let unmounts = state
            .console
            .lines()
            .filter(|l| l.text.starts_with("root view unmounted"))
            .count();
        assert_eq!(unmounts, 3);
    }

    #[tokio::test]
    async fn test_remount_replaces_previous_view() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = state();
        let first = timer(&mut state, &tx);
        state.mount_root(first);
        let second = timer(&mut state, &tx);
        state.mount_root(second);

        assert_eq!(state.root.as_ref().map(|r| r.generation()), Some(1));
        let texts: Vec<_> = state.console.lines().map(|l| l.text.clone()).collect();
        assert_eq!(
            texts,
            vec![
                "root view mounted (#0)",
                "root view unmounted (#0)",
                "root view mounted (#1)",
            ]
        );
    }

    #[test]
    fn test_console_follows_configured_limits() {
        let mut config = AppConfig::default();
        config.ui.max_console_lines = 2;
        config.ui.timestamp_format = "%Y".into();
        let mut state = AppState::new(&config, Rect::new(0, 0, 80, 24));

        for text in ["a", "b", "c"] {
            state.console.log(ConsoleSource::System, text);
        }
        let texts: Vec<_> = state.console.lines().map(|l| l.text.clone()).collect();
        assert_eq!(texts, vec!["b", "c"]);
        let year = chrono::Local::now().format("%Y").to_string();
        assert!(state.console.lines().all(|l| l.timestamp == year));
    }

    #[test]
    fn test_status_line_unmounted() {
        assert_eq!(state().status_line(), "Root unmounted");
    }
}
