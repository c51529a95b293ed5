use crate::view::root::{ButtonVariant, Element};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of every button, borders of the panel excluded.
pub const BUTTON_WIDTH: u16 = 14;

pub struct AppLayout {
    pub title_bar: Rect,
    pub root_panel: Rect,
    pub console: Rect,
    pub status_bar: Rect,
    pub root: RootLayout,
}

/// Screen rectangles of the root view's elements.
pub struct RootLayout {
    pub notifier: Rect,
    pub variants: [Rect; 5],
    pub input: Rect,
    pub read_input: Rect,
}

impl RootLayout {
    pub fn rect(&self, element: Element) -> Rect {
        match element {
            Element::Notifier => self.notifier,
            Element::Variant(v) => {
                let idx = ButtonVariant::ALL.iter().position(|x| *x == v).unwrap_or(0);
                self.variants[idx]
            }
            Element::Input => self.input,
            Element::ReadInput => self.read_input,
        }
    }

    /// Element under the given cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Element> {
        let pos = Position::new(column, row);
        Element::ORDER
            .into_iter()
            .find(|e| self.rect(*e).contains(pos))
    }
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: root panel | gap | console
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(32), // Root view
            Constraint::Min(20),    // Console
        ])
        .split(content);

    let root_panel = h_chunks[0];
    let console = h_chunks[1];

    AppLayout {
        title_bar,
        root_panel,
        console,
        status_bar,
        root: compute_root_layout(root_panel),
    }
}

fn compute_root_layout(panel: Rect) -> RootLayout {
    // Inside the panel border, stacked with one blank row between elements
    let inner = Rect::new(
        panel.x.saturating_add(1),
        panel.y.saturating_add(1),
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .spacing(1)
        .constraints([
            Constraint::Length(1), // Notifier
            Constraint::Length(1), // Default
            Constraint::Length(1), // Outline
            Constraint::Length(1), // Secondary
            Constraint::Length(1), // Ghost
            Constraint::Length(1), // Link
            Constraint::Length(3), // Input
            Constraint::Length(1), // Read input
            Constraint::Min(0),
        ])
        .split(inner);

    let button = |row: Rect| Rect {
        width: row.width.min(BUTTON_WIDTH),
        ..row
    };

    RootLayout {
        notifier: button(rows[0]),
        variants: [
            button(rows[1]),
            button(rows[2]),
            button(rows[3]),
            button(rows[4]),
            button(rows[5]),
        ],
        input: rows[6],
        read_input: button(rows[7]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_rects_are_distinct() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        let variants = layout.root.variants;
        for (i, a) in variants.iter().enumerate() {
            assert_eq!(a.height, 1);
            assert_eq!(a.width, BUTTON_WIDTH);
            for b in &variants[i + 1..] {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_hit_maps_cells_to_elements() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        for element in Element::ORDER {
            let r = layout.root.rect(element);
            assert_eq!(layout.root.hit(r.x, r.y), Some(element));
        }
        // Gap between the notifier and the first variant
        let gap = layout.root.notifier.y + 1;
        assert_eq!(layout.root.hit(layout.root.notifier.x, gap), None);
        // Console side
        assert_eq!(layout.root.hit(layout.console.x + 2, layout.console.y + 2), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = compute_layout(Rect::new(0, 0, 10, 4));
        for row in 0..4 {
            for column in 0..10 {
                let _ = layout.root.hit(column, row);
            }
        }
    }
}
