use crate::app::state::AppState;
use crate::ui::input_box;
use crate::ui::layout::RootLayout;
use crate::ui::theme::Theme;
use crate::view::notifier;
use crate::view::root::{ButtonVariant, Element, BUTTON_LABEL};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, layout: &RootLayout, state: &AppState) {
    let block = Block::default()
        .title(" Root ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(root) = &state.root else {
        let placeholder = Paragraph::new("Unmounted. Press F2 to mount.")
            .style(Theme::placeholder())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    render_button(
        frame,
        layout.notifier,
        notifier::LABEL,
        Theme::button(ButtonVariant::Outline),
        root.focus() == Element::Notifier,
    );

    for (variant, rect) in ButtonVariant::ALL.into_iter().zip(layout.variants) {
        render_button(
            frame,
            rect,
            BUTTON_LABEL,
            Theme::button(variant),
            root.focus() == Element::Variant(variant),
        );
    }

    input_box::render(frame, layout.input, root);

    render_button(
        frame,
        layout.read_input,
        BUTTON_LABEL,
        Theme::button(ButtonVariant::Default),
        root.focus() == Element::ReadInput,
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style, focused: bool) {
    if area.is_empty() {
        return;
    }
    let style = if focused {
        style.patch(Theme::button_focused())
    } else {
        style
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
