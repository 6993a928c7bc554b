//! Responsive layout selection.

pub mod viewport;

pub use viewport::{DeviceVariant, ViewportObserver};
