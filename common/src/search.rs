//! 検索語の正規化と画面遷移先の組み立て
//!
//! 検索語はトリムし、空なら遷移しない。
//! `query` パラメータは `application/x-www-form-urlencoded` でエンコードする。

use url::form_urlencoded;

/// レビュー画面のパス
pub const REVIEW_PATH: &str = "/review";
/// 検索画面のパス
pub const SEARCH_PATH: &str = "/";
/// 検索語を運ぶクエリパラメータ名
pub const QUERY_PARAM: &str = "query";

/// 検索語をトリムし、空なら None
pub fn normalize_term(input: &str) -> Option<&str> {
    let term = input.trim();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

/// 同一画面内の遷移先 `?query=...`
pub fn review_query(input: &str) -> Option<String> {
    let term = normalize_term(input)?;
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair(QUERY_PARAM, term)
        .finish();
    Some(format!("?{}", encoded))
}

/// 検索画面からの遷移先 `/review?query=...`
pub fn review_path(input: &str) -> Option<String> {
    review_query(input).map(|query| format!("{}{}", REVIEW_PATH, query))
}

/// location.search から `query` を取り出す（先頭の `?` は任意）
pub fn query_from_search(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(search.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
