mod console_panel;
mod input_box;
pub mod layout;
mod root_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title_bar(frame, app_layout.title_bar, state);
    root_panel::render(frame, app_layout.root_panel, &app_layout.root, state);
    console_panel::render(frame, app_layout.console, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    // Spinner advances with the render tick so a stalled loop is visible.
    const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
    let frame_idx = (state.tick_count / 4 % SPINNER.len() as u64) as usize;
    let line = Line::from(vec![
        Span::styled(" crabdemo ", Theme::title_bar()),
        Span::styled(
            format!("{} ", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT).bg(Theme::BG_SURFACE),
        ),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(Theme::BG_SURFACE));
    frame.render_widget(paragraph, area);
}
