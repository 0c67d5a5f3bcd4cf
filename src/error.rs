use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewCliError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// 取得・解析の失敗（画面には共通メッセージを出す）
    #[error(transparent)]
    Review(#[from] game_review_common::Error),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Client(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl ReviewCliError {
    /// ユーザー向けメッセージ
    ///
    /// 取得・解析エラーは種別を区別せず共通メッセージにまとめる。
    pub fn user_message(&self) -> String {
        match self {
            ReviewCliError::Review(e) => e.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewCliError>;
