//! レビューAPIクライアント
//!
//! ステータス・ボディの解釈はWeb版と同じ `parse_review_response` を使う。

use crate::error::{ReviewCliError, Result};
use game_review_common::{parse_review_response, review_url, Error, ReviewResult};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// レビューデータの取得元
#[allow(async_fn_in_trait)]
pub trait ReviewSource {
    /// 1回だけ取得する（リトライしない）
    async fn fetch(&self, game_name: &str) -> std::result::Result<Option<ReviewResult>, Error>;
}

/// HTTP経由の取得元
pub struct ReviewClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReviewCliError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl ReviewSource for ReviewClient {
    async fn fetch(&self, game_name: &str) -> std::result::Result<Option<ReviewResult>, Error> {
        let url = review_url(&self.base_url, game_name)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status().as_u16();
        log::debug!("status: {}", status);

        // 非2xxはボディを読まない
        if !response.status().is_success() {
            return parse_review_response(status, "");
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        parse_review_response(status, &body)
    }
}
