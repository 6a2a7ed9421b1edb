pub mod confirm_dialog;
pub mod entity_select;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod row_actions;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
