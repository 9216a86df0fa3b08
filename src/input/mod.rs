//! Input adapters that translate device events into engine calls.

pub mod gui;
