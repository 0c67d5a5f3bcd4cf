//! レビューAPIのURL組み立てとレスポンス解釈
//!
//! Web(WASM)とCLIで同じ規則を使う:
//! - 非2xxはボディを読まずにNetworkエラー
//! - 2xxはJSONとして解析し、失敗はParseエラー
//! - 偽値（`null` / `false` / `0` / 空文字列）は結果なし（エラーではない）
//! - オブジェクト以外の真値は全項目未設定の結果

use crate::error::{Error, Result};
use crate::types::ReviewResult;
use serde_json::Value;
use url::Url;

/// 組み込みのAPIベースURL
pub const DEFAULT_API_BASE: &str = "https://sigfordeploy.onrender.com";

const REVIEW_ENDPOINT: &str = "review";
const GAME_NAME_PARAM: &str = "gamename";

/// `{base}/review?gamename=...` を組み立てる
pub fn review_url(base: &str, game_name: &str) -> Result<Url> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidEndpoint("empty base URL".into()));
    }

    let endpoint = format!("{}/{}", base, REVIEW_ENDPOINT);
    let url = Url::parse_with_params(&endpoint, &[(GAME_NAME_PARAM, game_name)])?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidEndpoint(format!("unsupported scheme: {}", scheme))),
    }
}

/// HTTPステータスが成功（2xx）か
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// HTTPレスポンスを解釈
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンスボディ（非2xxの場合は参照しない）
///
/// # Returns
/// * `Ok(Some(ReviewResult))` - 解析成功（オブジェクト以外の真値は全項目未設定）
/// * `Ok(None)` - ボディが偽値
/// * `Err` - ステータス異常またはJSON解析失敗
pub fn parse_review_response(status: u16, body: &str) -> Result<Option<ReviewResult>> {
    if !is_success(status) {
        return Err(Error::Network(format!("HTTP {}", status)));
    }

    let value: Value = serde_json::from_str(body.trim())?;
    if is_falsy(&value) {
        return Ok(None);
    }

    match value {
        Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        other => {
            log::debug!("non-object review body: {}", other);
            Ok(Some(ReviewResult::default()))
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
