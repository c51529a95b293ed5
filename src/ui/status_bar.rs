use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::view::timer::TimerState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " Tab focus  F2 mount  ^C quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Timer indicator
    let indicator = match state.root.as_ref().map(|r| r.timer_state()) {
        Some(TimerState::Running) => Span::styled(" ● ", Theme::status_running()),
        _ => Span::styled(" ○ ", Theme::status_stopped()),
    };
    parts.push(indicator);

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Hints are right-aligned and dropped entirely when they would be clipped
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let width = area.width as usize;
    if used + KEY_HINTS.width() <= width {
        let remaining = width - used - KEY_HINTS.width();
        parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
        parts.push(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    } else {
        parts.push(Span::styled(
            " ".repeat(width.saturating_sub(used)),
            Theme::status_bar(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::config::AppConfig;
    use crate::view::root::{ButtonVariant, Element};
    use crate::view::timer::{PeriodicTimer, HEARTBEAT_PERIOD};
    use ratatui::backend::TestBackend;
    use tokio::sync::mpsc;

    fn draw_row(state: &AppState, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal.draw(|f| render(f, f.area(), state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[tokio::test]
    async fn test_hints_fit_at_eighty_columns() {
        let (tx, _rx) = mpsc::unbounded_channel::<AppEvent>();
        let mut state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 80, 24));
        let generation = state.allocate_generation();
        state.mount_root(PeriodicTimer::start(generation, HEARTBEAT_PERIOD, tx));

        for focus in [
            Element::ReadInput,
            Element::Variant(ButtonVariant::Secondary),
        ] {
            state.root.as_mut().unwrap().set_focus(focus);
            let row = draw_row(&state, 80);
            assert!(row.contains(&state.status_line()), "{}", row);
            assert!(row.ends_with(KEY_HINTS), "{}", row);
        }
    }

    #[test]
    fn test_hints_dropped_when_narrow() {
        let state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 30, 24));
        let row = draw_row(&state, 30);
        assert!(row.contains("Root unmounted"));
        assert!(!row.contains("quit"));
    }
}
