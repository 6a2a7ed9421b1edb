//! Back-office backend: a thin REST proxy in front of the domain services
//! plus static hosting of the compiled frontend.

pub mod proxy;
pub mod routes;
pub mod shared;
pub mod system;
