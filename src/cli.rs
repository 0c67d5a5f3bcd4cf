use clap::{Parser, Subcommand};
use game_review_common::Category;

#[derive(Parser)]
#[command(name = "game-review")]
#[command(about = "게임 리뷰 탐색기 - ゲームレビューの感情分析を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ゲームのレビューを1回取得して表示
    Review {
        /// ゲーム名
        #[arg(required = true)]
        game: String,

        /// 表示するカテゴリ (graphic/sound/story/creativity)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// 対話モード（検索 → カテゴリ切替）
    Interactive,

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// APIベースURLを組み込みの値に戻す
        #[arg(long)]
        reset_endpoint: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_with_category() {
        let cli = Cli::parse_from(["game-review", "review", "Elden Ring", "-c", "sound"]);
        match cli.command {
            Commands::Review { game, category } => {
                assert_eq!(game, "Elden Ring");
                assert_eq!(category, Some(Category::Sound));
            }
            _ => panic!("expected review command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["game-review", "review", "Hades", "--category", "music"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_flags() {
        let cli = Cli::parse_from(["game-review", "-v", "config", "--set-endpoint", "http://localhost:8000", "--show"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Config { set_endpoint, reset_endpoint, show } => {
                assert_eq!(set_endpoint.as_deref(), Some("http://localhost:8000"));
                assert!(!reset_endpoint);
                assert!(show);
            }
            _ => panic!("expected config command"),
        }
    }
}
