pub mod error_banner;
pub mod filter_panel;
pub mod image_input;
pub mod pagination_controls;
pub mod stat_card;
pub mod table_checkbox;
pub mod ui;
