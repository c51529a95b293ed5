//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod console;
pub mod event;
pub mod handler;
pub mod state;
