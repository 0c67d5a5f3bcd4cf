//! ドーナツチャートコンポーネント（Canvas描画）
//!
//! 肯定（緑）・否定（赤）の2スライスと中央の肯定スコアを描く。

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use game_review_common::ChartData;

const CANVAS_SIZE: u32 = 280;
/// 内径/外径（中央の穴）
const CUTOUT_RATIO: f64 = 0.5;
const PADDING: f64 = 4.0;
const CENTER_FONT: &str = "bold 30px Arial";
const CENTER_COLOR: &str = "#000";

#[component]
pub fn DonutChart(data: ChartData) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let (hovered, set_hovered) = signal(None::<usize>);

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = draw_donut(&canvas, &data) {
                log::warn!("donut chart draw failed: {}", e);
            }
        }
    });

    let on_mousemove = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        set_hovered.set(hit_test(&canvas, &data, ev.offset_x() as f64, ev.offset_y() as f64));
    };

    let tooltip = move || {
        hovered
            .get()
            .map(|index| data.slices()[index].tooltip())
    };

    view! {
        <div class="donut-chart">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_SIZE.to_string()
                height=CANVAS_SIZE.to_string()
                on:mousemove=on_mousemove
                on:mouseleave=move |_| set_hovered.set(None)
            />
            <Show when=move || hovered.get().is_some()>
                <div class="chart-tooltip">{tooltip}</div>
            </Show>
            <ul class="chart-legend">
                {data
                    .slices()
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <li>
                                <span
                                    class="legend-swatch"
                                    style=format!("background-color: {}", slice.color)
                                />
                                {slice.label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "get_context failed")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "cast failed".to_string())
}

/// チャートを描画
pub fn draw_donut(canvas: &HtmlCanvasElement, data: &ChartData) -> Result<(), String> {
    let ctx = context_2d(canvas)?;

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let outer = (w.min(h) / 2.0) - PADDING;
    let inner = outer * CUTOUT_RATIO;

    ctx.clear_rect(0.0, 0.0, w, h);

    for slice in data.slices() {
        if slice.end_angle <= slice.start_angle {
            continue;
        }
        ctx.set_fill_style_str(slice.color);
        ctx.begin_path();
        ctx.arc(cx, cy, outer, slice.start_angle, slice.end_angle)
            .map_err(|_| "arc failed")?;
        ctx.arc_with_anticlockwise(cx, cy, inner, slice.end_angle, slice.start_angle, true)
            .map_err(|_| "arc failed")?;
        ctx.close_path();
        ctx.fill();
    }

    // 中央の肯定スコア
    ctx.set_font(CENTER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(CENTER_COLOR);
    ctx.fill_text(&data.center_label(), cx, cy)
        .map_err(|_| "fill_text failed")?;

    Ok(())
}

/// マウス位置のスライス（リング外・穴の中は None）
fn hit_test(canvas: &HtmlCanvasElement, data: &ChartData, x: f64, y: f64) -> Option<usize> {
    // CSSで縮小表示されている場合に描画座標へ合わせる
    let client_width = canvas.client_width() as f64;
    let scale = if client_width > 0.0 {
        canvas.width() as f64 / client_width
    } else {
        1.0
    };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let dx = x * scale - w / 2.0;
    let dy = y * scale - h / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();
    let outer = (w.min(h) / 2.0) - PADDING;

    if distance > outer || distance < outer * CUTOUT_RATIO {
        return None;
    }
    data.slice_at_angle(dy.atan2(dx))
}
