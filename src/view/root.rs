//! Root view: the page that owns the heartbeat timer and the text input.

use crate::app::console::{Console, ConsoleSource};
use crate::app::event::Generation;
use crate::view::input::InputHandle;
use crate::view::notifier::Notifier;
use crate::view::timer::{PeriodicTimer, TimerState};

/// Logged on every heartbeat tick.
pub const HEARTBEAT_MARKER: &str = "1";

/// Label shared by the variant buttons and the read-input button.
pub const BUTTON_LABEL: &str = "click me";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Default,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

/// Focusable elements of the root view, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Notifier,
    Variant(ButtonVariant),
    Input,
    ReadInput,
}

impl Element {
    pub const ORDER: [Element; 8] = [
        Element::Notifier,
        Element::Variant(ButtonVariant::Default),
        Element::Variant(ButtonVariant::Outline),
        Element::Variant(ButtonVariant::Secondary),
        Element::Variant(ButtonVariant::Ghost),
        Element::Variant(ButtonVariant::Link),
        Element::Input,
        Element::ReadInput,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::Notifier => "notifier",
            Element::Variant(v) => v.name(),
            Element::Input => "input",
            Element::ReadInput => "read input",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|e| *e == self).unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct RootView {
    timer: PeriodicTimer,
    input: InputHandle,
    focus: Element,
}

impl RootView {
    /// Mount the view around an already started timer. The view owns the
    /// timer from here on and is the only one able to cancel it.
    pub fn mount(timer: PeriodicTimer) -> Self {
        tracing::info!(generation = timer.generation(), "root view mounted");
        Self {
            timer,
            input: InputHandle::new(),
            focus: Element::Notifier,
        }
    }

    /// Cancel the timer. Returns `true` the first time, `false` afterwards.
    pub fn unmount(&mut self) -> bool {
        let cancelled = self.timer.cancel();
        if cancelled {
            tracing::info!(generation = self.timer.generation(), "root view unmounted");
        }
        cancelled
    }

    pub fn generation(&self) -> Generation {
        self.timer.generation()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn input(&self) -> &InputHandle {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandle {
        &mut self.input
    }

    pub fn focus(&self) -> Element {
        self.focus
    }

    pub fn set_focus(&mut self, element: Element) {
        self.focus = element;
    }

    pub fn focus_next(&mut self) {
        let idx = (self.focus.index() + 1) % Element::ORDER.len();
        self.focus = Element::ORDER[idx];
    }

    pub fn focus_prev(&mut self) {
        let idx = self.focus.index();
        let prev = if idx == 0 { Element::ORDER.len() - 1 } else { idx - 1 };
        self.focus = Element::ORDER[prev];
    }

    /// Log the heartbeat marker if the tick belongs to this mount and the
    /// timer is still running. Returns whether anything was logged.
    pub fn on_heartbeat(&self, generation: Generation, console: &mut Console) -> bool {
        if generation != self.generation() || self.timer_state() != TimerState::Running {
            tracing::trace!(generation, "stale heartbeat dropped");
            return false;
        }
        console.log(ConsoleSource::Timer, HEARTBEAT_MARKER);
        true
    }

    pub fn activate(&mut self, element: Element, console: &mut Console) {
        tracing::debug!(element = element.name(), "activate");
        match element {
            Element::Notifier => {
                let mut sink = |msg: &str| console.log(ConsoleSource::Notifier, msg);
                Notifier::new().on_message(&mut sink).activate();
            }
            // Visual placeholders.
            Element::Variant(_) => {}
            Element::Input => self.focus = Element::Input,
            Element::ReadInput => console.log(ConsoleSource::Input, self.input.value()),
        }
    }
}
