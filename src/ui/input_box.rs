use crate::ui::theme::Theme;
use crate::view::root::{Element, RootView};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, root: &RootView) {
    if area.height < 3 || area.width < 3 {
        return;
    }

    let focused = root.focus() == Element::Input;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Input ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = root.input();
    let paragraph = Paragraph::new(input.value()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        let cursor_x = inner.x.saturating_add(input.cursor_column() as u16);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
