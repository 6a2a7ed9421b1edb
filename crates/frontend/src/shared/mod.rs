pub mod alerts;
pub mod api_utils;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod forms;
pub mod http;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
