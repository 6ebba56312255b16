//! Browser-independent core of the SwiftPay UI layer.
//!
//! The wasm crate owns the DOM; everything it decides (field validity, copy
//! feedback classes, debounce timing, listener bookkeeping) is computed here.

pub mod config;
pub mod debounce;
pub mod error;
pub mod feedback;
pub mod registry;
pub mod toast;
pub mod validation;
pub mod widgets;

pub use config::UiConfig;
pub use debounce::{Debounced, Scheduler};
pub use error::UiError;
pub use registry::{Component, Registry};
pub use widgets::Widgets;
