use crate::app::console::ConsoleSource;
use crate::view::root::ButtonVariant;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 27);
    pub const PRIMARY: Color = Color::Rgb(250, 250, 250);
    pub const PRIMARY_FG: Color = Color::Rgb(24, 24, 27);
    pub const SECONDARY: Color = Color::Rgb(63, 63, 70);
    pub const MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn title_bar() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::BG_SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn console_source(source: ConsoleSource) -> Style {
        match source {
            ConsoleSource::Timer => Style::default().fg(Color::DarkGray),
            ConsoleSource::Notifier => Style::default().fg(Color::Magenta),
            ConsoleSource::Input => Style::default().fg(Color::Green),
            ConsoleSource::System => Style::default().fg(Color::Yellow),
        }
    }

    pub fn console_text() -> Style {
        Style::default().fg(Color::White)
    }

    /// Button face per visual variant.
    pub fn button(variant: ButtonVariant) -> Style {
        match variant {
            ButtonVariant::Default => Style::default().fg(Self::PRIMARY_FG).bg(Self::PRIMARY),
            ButtonVariant::Outline => Style::default().fg(Color::White),
            ButtonVariant::Secondary => Style::default().fg(Color::White).bg(Self::SECONDARY),
            ButtonVariant::Ghost => Style::default().fg(Color::Gray),
            ButtonVariant::Link => Style::default()
                .fg(Self::ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    pub fn button_focused() -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::MUTED).add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_running() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_stopped() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }
}
