mod aggregate;
pub mod matrix;

pub use aggregate::*;
pub use matrix::{PermissionChange, PermissionFlag, PermissionFlags, PermissionMatrix, PermissionRow};
