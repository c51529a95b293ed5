use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::layout::compute_layout;
use crate::view::root::{Element, RootView};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

const CONSOLE_PAGE: usize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Heartbeat { generation } => {
            if let Some(root) = &state.root {
                if root.on_heartbeat(generation, &mut state.console) {
                    state.dirty = true;
                }
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Title spinner advances every fourth tick
            if state.tick_count % 4 == 0 {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.area = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    let editing = state
        .root
        .as_ref()
        .is_some_and(|root| root.focus() == Element::Input);
    match key.code {
        KeyCode::Esc if !editing => return vec![Action::Quit],
        KeyCode::F(2) => return vec![Action::ToggleRoot],
        KeyCode::PageUp => {
            state.console.scroll_up(CONSOLE_PAGE);
            return vec![];
        }
        KeyCode::PageDown => {
            state.console.scroll_down(CONSOLE_PAGE);
            return vec![];
        }
        _ => {}
    }

    let Some(root) = state.root.as_mut() else {
        return vec![];
    };

    match key.code {
        KeyCode::Tab => root.focus_next(),
        KeyCode::BackTab => root.focus_prev(),
        _ if root.focus() == Element::Input => handle_input_key(root, key),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let focused = root.focus();
            root.activate(focused, &mut state.console);
        }
        _ => {}
    }
    vec![]
}

fn handle_input_key(root: &mut RootView, key: KeyEvent) {
    // Enter or Esc leaves the field for the read button
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        root.focus_next();
        return;
    }

    let input = root.input_mut();
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => input.move_home(),
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => input.move_end(),
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(root) = state.root.as_mut() else {
                return;
            };
            let layout = compute_layout(state.area);
            if let Some(element) = layout.root.hit(mouse.column, mouse.row) {
                root.set_focus(element);
                root.activate(element, &mut state.console);
            }
        }
        MouseEventKind::ScrollUp => state.console.scroll_up(1),
        MouseEventKind::ScrollDown => state.console.scroll_down(1),
        _ => {}
    }
}
