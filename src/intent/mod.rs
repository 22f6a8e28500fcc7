pub mod action;
pub mod envelope;
pub mod prompt;

pub use action::*;
pub use envelope::*;
pub use prompt::*;
