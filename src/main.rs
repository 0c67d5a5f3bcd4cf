use anyhow::Context;
use clap::Parser;
use game_review_explorer::{cli, client, config, interactive, progress, render, session};
use cli::{Cli, Commands};
use client::ReviewClient;
use config::Config;
use session::ReviewSession;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Review { game, category } => {
            let mut session = ReviewSession::new(build_client(&config)?);

            let spinner = progress::fetch_spinner(&game);
            let searched = session.search(&game).await;
            spinner.finish_and_clear();

            if !searched {
                anyhow::bail!("게임 이름을 입력해 주세요");
            }

            if let Some(category) = category.or(config.default_category) {
                session.select(category);
            }
            print!("{}", render::render_review(session.state()));

            if let Some(e) = session.state().error() {
                log::debug!("review failed: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Interactive => {
            println!("🎮 게임 리뷰 탐색기\n");
            let mut session = ReviewSession::new(build_client(&config)?);
            interactive::run_interactive(&mut session)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        }

        Commands::Config { set_endpoint, reset_endpoint, show } => {
            let mut config = config;
            let mut changed = false;

            if reset_endpoint {
                config.reset_endpoint();
                changed = true;
                println!("✔ APIエンドポイントを初期値に戻しました");
            }

            if let Some(endpoint) = set_endpoint {
                config
                    .set_endpoint(endpoint)
                    .map_err(|e| anyhow::anyhow!("無効なエンドポイント: {}", e))?;
                changed = true;
                println!("✔ APIエンドポイントを設定しました");
            }

            if changed {
                config.save().context("設定ファイルの保存に失敗しました")?;
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  既定カテゴリ: {}",
                    config
                        .default_category
                        .map(|c| c.label().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    );
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn build_client(config: &Config) -> anyhow::Result<ReviewClient> {
    let endpoint = config.endpoint();
    log::debug!("endpoint: {}", endpoint);
    ReviewClient::new(endpoint, Duration::from_secs(config.timeout_seconds))
        .context("HTTPクライアントの初期化に失敗しました")
}
