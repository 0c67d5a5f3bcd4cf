//! UIコンポーネント

pub mod header;
pub mod search_form;
pub mod category_selector;
pub mod donut_chart;
pub mod evaluation;
pub mod search_entry;
pub mod review_view;
pub mod not_found;
