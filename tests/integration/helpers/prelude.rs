pub use super::arg_builder::{binary, BinaryCommand};
pub use super::create_workspace;
pub use super::project_builder::tempdir;
pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
