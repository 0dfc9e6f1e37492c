//! Application state module

mod forms;
mod toasts;

pub use forms::*;
pub use toasts::*;
