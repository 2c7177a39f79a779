//! msptools-cli: command-line driver around the `msptools` solvers.
pub mod solve;
pub mod util;
