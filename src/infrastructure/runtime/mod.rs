//! Runtime bridge between the sync TUI thread and the async worker

mod bridge;
mod worker;

pub use bridge::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
