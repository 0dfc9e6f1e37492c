//! Account submission: the completion step run after a record validates

mod simulated;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::{AccountSubmitter, SubmitError};

#[cfg(test)]
pub use traits::MockAccountSubmitter;
