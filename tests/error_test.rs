//! エラー表示テスト

use game_review_common::{Error, USER_ERROR_MESSAGE};
use game_review_explorer::error::ReviewCliError;

/// 取得・解析エラーは共通メッセージ
#[test]
fn test_review_errors_share_user_message() {
    let errors = vec![
        ReviewCliError::from(Error::Network("HTTP 404".into())),
        ReviewCliError::from(Error::Network("connection refused".into())),
        ReviewCliError::from(Error::Parse("expected value".into())),
    ];

    for err in errors {
        assert_eq!(err.user_message(), USER_ERROR_MESSAGE);
    }
}

/// ReviewCliErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ReviewCliError::Config("テスト設定エラー".to_string()),
        ReviewCliError::Client("tls".to_string()),
        ReviewCliError::from(Error::Network("HTTP 500".into())),
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "Error message should not be empty");
    }

    let err = ReviewCliError::Config("x".into());
    assert_eq!(err.user_message(), err.to_string());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ReviewCliError = io_err.into();
    assert!(matches!(err, ReviewCliError::Io(_)));
}
