use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 取得中スピナー
pub fn fetch_spinner(game_name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("'{}' 리뷰를 불러오는 중...", game_name.trim()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
