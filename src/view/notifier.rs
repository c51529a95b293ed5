//! Child notifier view.
//!
//! Stateless: build one wherever it is needed, optionally hand it a sink, and
//! call [`Notifier::activate`] when its trigger is pressed.

/// The message every activation delivers.
pub const MESSAGE: &str = "qq";

pub const LABEL: &str = "notify";

/// Synchronous receiver for the notifier's message.
pub type MessageSink<'a> = &'a mut dyn FnMut(&str);

#[derive(Default)]
pub struct Notifier<'a> {
    on_message: Option<MessageSink<'a>>,
}

impl<'a> Notifier<'a> {
    pub fn new() -> Self {
        Self { on_message: None }
    }

    pub fn on_message(mut self, sink: MessageSink<'a>) -> Self {
        self.on_message = Some(sink);
        self
    }

    /// Deliver [`MESSAGE`] to the sink, if any. Without a sink this does nothing.
    pub fn activate(&mut self) {
        if let Some(sink) = self.on_message.as_deref_mut() {
            sink(MESSAGE);
        }
    }
}
