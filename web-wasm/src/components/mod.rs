//! UIコンポーネント

pub mod header;
pub mod image_input;
pub mod model_selector;
pub mod loading_indicator;
pub mod result_panel;
pub mod error_panel;
