//! Views: the root page, its notifier child, and the resources the root owns.

pub mod input;
pub mod notifier;
pub mod root;
pub mod timer;
