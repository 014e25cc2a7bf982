/// Bound processes and their inputs
pub mod process;

/// Executable flows and the run loop
pub mod flow;

pub use flow::{Flow, RunId};
pub use process::{find_input, require_input, DefinedInput, InputError, Process};
