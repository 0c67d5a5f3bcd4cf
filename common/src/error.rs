//! エラー型定義

use thiserror::Error;

/// 画面に表示する共通エラーメッセージ（種別は区別しない）
pub const USER_ERROR_MESSAGE: &str = "리뷰 정보를 불러오지 못했습니다.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// HTTPステータス異常・通信失敗
    #[error("Network error: {0}")]
    Network(String),

    /// レスポンスJSONの解析失敗
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Unknown category: {0}. Use graphic, sound, story, or creativity")]
    UnknownCategory(String),
}

impl Error {
    /// ユーザー向けメッセージ
    ///
    /// NetworkとParseは同じ文言にまとめる。
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidEndpoint(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
