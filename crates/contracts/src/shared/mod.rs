pub mod api_error;
pub mod catalog;
pub mod dates;
pub mod decimal;
pub mod pagination;
pub mod proxy;
