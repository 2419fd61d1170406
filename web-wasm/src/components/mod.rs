//! UIコンポーネント

pub mod action_buttons;
pub mod client_error_banner;
pub mod error_banner;
pub mod file_info;
pub mod header;
pub mod processing_indicator;
pub mod results_panel;
pub mod score_gauge;
pub mod upload_area;
