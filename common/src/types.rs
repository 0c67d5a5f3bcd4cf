//! レビューデータの型定義
//!
//! - Category: 評価カテゴリ（グラフィック・サウンド・ストーリー・創造性）
//! - ReviewResult: レビューAPIのレスポンス（全フィールド省略可能）

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// 評価カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Graphic,
    Sound,
    Story,
    Creativity,
}

impl Category {
    /// 画面の並び順
    pub const ALL: [Category; 4] = [
        Category::Graphic,
        Category::Sound,
        Category::Story,
        Category::Creativity,
    ];

    /// APIのフィールド名に使うキー
    pub fn key(&self) -> &'static str {
        match self {
            Category::Graphic => "graphic",
            Category::Sound => "sound",
            Category::Story => "story",
            Category::Creativity => "creativity",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Graphic => "그래픽",
            Category::Sound => "사운드",
            Category::Story => "스토리",
            Category::Creativity => "창의성",
        }
    }

    /// ボタン用アイコン
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Graphic => "🖥",
            Category::Sound => "🔊",
            Category::Story => "📖",
            Category::Creativity => "💡",
        }
    }

    /// 肯定レビューが無い場合の代替テキスト
    pub fn positive_placeholder(&self) -> &'static str {
        match self {
            Category::Graphic => "그래픽 긍정 리뷰",
            Category::Sound => "사운드 긍정 리뷰",
            Category::Story => "스토리 긍정 리뷰",
            Category::Creativity => "창의성 긍정 리뷰",
        }
    }

    /// 否定レビューが無い場合の代替テキスト
    pub fn negative_placeholder(&self) -> &'static str {
        match self {
            Category::Graphic => "그래픽 부정 리뷰",
            Category::Sound => "사운드 부정 리뷰",
            Category::Story => "스토리 부정 리뷰",
            Category::Creativity => "창의성 부정 리뷰",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "graphic" => Ok(Category::Graphic),
            "sound" => Ok(Category::Sound),
            "story" => Ok(Category::Story),
            "creativity" => Ok(Category::Creativity),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// レビューAPIのレスポンス
///
/// スキーマは保証されないため全フィールドを省略可能として扱う。
/// 未知のフィールドは無視する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub graphic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub graphic_native: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score", skip_serializing_if = "Option::is_none")]
    pub graphic_score: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub sound_native: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score", skip_serializing_if = "Option::is_none")]
    pub sound_score: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub story_native: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score", skip_serializing_if = "Option::is_none")]
    pub story_score: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub creativity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub creativity_native: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score", skip_serializing_if = "Option::is_none")]
    pub creativity_score: Option<f64>,
}

impl ReviewResult {
    /// 肯定レビュー（空文字は未設定扱い）
    pub fn positive_review(&self, category: Category) -> Option<&str> {
        let text = match category {
            Category::Graphic => &self.graphic,
            Category::Sound => &self.sound,
            Category::Story => &self.story,
            Category::Creativity => &self.creativity,
        };
        non_empty(text)
    }

    /// 否定レビュー（空文字は未設定扱い）
    pub fn negative_review(&self, category: Category) -> Option<&str> {
        let text = match category {
            Category::Graphic => &self.graphic_native,
            Category::Sound => &self.sound_native,
            Category::Story => &self.story_native,
            Category::Creativity => &self.creativity_native,
        };
        non_empty(text)
    }

    /// `{category}Score` の値
    pub fn score(&self, category: Category) -> Option<f64> {
        match category {
            Category::Graphic => self.graphic_score,
            Category::Sound => self.sound_score,
            Category::Story => self.story_score,
            Category::Creativity => self.creativity_score,
        }
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.trim().is_empty())
}

/// 文字列・数値を受け付け、それ以外は未設定とする
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// 数値・数値文字列を受け付け、それ以外（空文字など）は未設定とする
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|score| score.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("graphic".parse::<Category>().unwrap(), Category::Graphic);
        assert_eq!(" Sound ".parse::<Category>().unwrap(), Category::Sound);
        assert_eq!("STORY".parse::<Category>().unwrap(), Category::Story);
        assert_eq!("creativity".parse::<Category>().unwrap(), Category::Creativity);
        assert!(matches!(
            "empty".parse::<Category>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_display_matches_key() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.key());
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "graphic": "화려한 그래픽",
            "graphicNative": "프레임 드랍",
            "graphicScore": 82.5,
            "sound": "웅장한 OST",
            "soundNative": "",
            "soundScore": 64,
            "storyScore": 0,
            "creativityScore": 71
        }"#;

        let result: ReviewResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.positive_review(Category::Graphic), Some("화려한 그래픽"));
        assert_eq!(result.negative_review(Category::Graphic), Some("프레임 드랍"));
        assert_eq!(result.score(Category::Graphic), Some(82.5));
        assert_eq!(result.score(Category::Sound), Some(64.0));
        // 空文字は未設定扱い
        assert_eq!(result.negative_review(Category::Sound), None);
        assert_eq!(result.positive_review(Category::Story), None);
        assert_eq!(result.score(Category::Story), Some(0.0));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let result: ReviewResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, ReviewResult::default());
        for category in Category::ALL {
            assert_eq!(result.score(category), None);
            assert_eq!(result.positive_review(category), None);
        }
    }

    #[test]
    fn test_deserialize_lenient_scores() {
        let json = r#"{
            "graphicScore": "",
            "soundScore": "55",
            "storyScore": null,
            "creativityScore": {"value": 3}
        }"#;

        let result: ReviewResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.score(Category::Graphic), None);
        assert_eq!(result.score(Category::Sound), Some(55.0));
        assert_eq!(result.score(Category::Story), None);
        assert_eq!(result.score(Category::Creativity), None);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"graphic": "A", "error": "unused", "extra": [1, 2]}"#;
        let result: ReviewResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.positive_review(Category::Graphic), Some("A"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let result = ReviewResult {
            graphic_native: Some("B".to_string()),
            graphic_score: Some(70.0),
            ..Default::default()
        };

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["graphicNative"], "B");
        assert_eq!(json["graphicScore"], 70.0);
        assert!(json.get("graphic").is_none());
    }
}
