use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let console = &state.console;
    let title = if console.scroll_offset > 0 {
        format!(" Console [{}] (+{}) ", console.len(), console.scroll_offset)
    } else {
        format!(" Console [{}] ", console.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;

    if console.is_empty() {
        let empty = ListItem::new(Span::styled(" No output yet", Theme::timestamp()));
        frame.render_widget(List::new(vec![empty]).block(block), area);
        return;
    }

    // Newest at the bottom; scroll_offset hides that many of the newest lines.
    let mut items: Vec<ListItem> = console
        .lines()
        .rev()
        .skip(console.scroll_offset)
        .take(visible)
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", line.timestamp), Theme::timestamp()),
                Span::styled(
                    format!("{:<8} ", line.source.tag()),
                    Theme::console_source(line.source),
                ),
                Span::styled(line.text.as_str(), Theme::console_text()),
            ]))
        })
        .collect();
    items.reverse();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
