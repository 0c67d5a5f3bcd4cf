//! Game Review Explorer Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod types;
pub mod error;
pub mod api;
pub mod chart;
pub mod search;
pub mod state;

pub use types::{Category, ReviewResult};
pub use error::{Error, Result, USER_ERROR_MESSAGE};
pub use api::{review_url, parse_review_response, DEFAULT_API_BASE};
pub use chart::{chart_data, format_score, ChartData, Slice};
pub use search::{normalize_term, review_path, review_query, query_from_search};
pub use state::{CategorySection, FetchPhase, RequestToken, ReviewState};
