//! レビューAPI連携
//!
//! `GET {base}/review?gamename=...` を1回だけ発行する。リトライはしない。
//! ステータス・ボディの解釈は game_review_common と共通。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use game_review_common::{parse_review_response, review_url, Error, ReviewResult};

/// レビューデータ取得
///
/// # Arguments
/// * `base` - APIベースURL
/// * `game_name` - 検索語（エンコード前）
///
/// # Returns
/// * `Ok(Some(ReviewResult))` - 取得成功
/// * `Ok(None)` - ボディが `null`
/// * `Err(Error::Network)` - ステータス異常・通信失敗
/// * `Err(Error::Parse)` - JSON解析失敗
pub async fn fetch_review(base: &str, game_name: &str) -> Result<Option<ReviewResult>, Error> {
    let url = review_url(base, game_name)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url.as_str(), &opts).map_err(network_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    // 非2xxはボディを読まない
    if !resp.ok() {
        return parse_review_response(resp.status(), "");
    }

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Parse("response body is not text".into()))?;

    parse_review_response(resp.status(), &body)
}

fn network_error(e: JsValue) -> Error {
    Error::Network(format!("{:?}", e))
}
