//! Shared types between the back-office frontend and the proxy backend.
//!
//! Everything here is plain data plus validation: records mirrored from the
//! backend REST services, create/update DTOs, the pagination envelope and the
//! proxy service catalog.

pub mod dashboards;
pub mod domain;
pub mod shared;
