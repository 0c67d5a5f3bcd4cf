use crate::error::{ReviewCliError, Result};
use game_review_common::{Category, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const ENDPOINT_ENV: &str = "GAME_REVIEW_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// APIベースURL（未設定なら組み込みの値）
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
    /// `review` で `--category` 省略時に表示するカテゴリ
    pub default_category: Option<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 30,
            default_category: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewCliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("game-review").join("config.json"))
    }

    /// 使用するAPIベースURL
    ///
    /// 環境変数 > 設定ファイル > 組み込み値
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// エンドポイントを検証して設定
    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        // URLとして組み立てられるか確認
        game_review_common::review_url(&endpoint, "probe")?;
        self.endpoint = Some(endpoint.trim().trim_end_matches('/').to_string());
        Ok(())
    }

    pub fn reset_endpoint(&mut self) {
        self.endpoint = None;
    }
}
