use dioxus::prelude::*;
use serde_json::Value;
use types::{
    chart::{ChartMode, candle_series, candles_options, sales_line_options, sales_series},
    config::CONFIG,
};

use crate::{
    Skeleton,
    loader::{destroy_chart, render_chart, use_script_bundle},
    use_element_id,
};

/// Chart id that tears its ApexCharts instance down on unmount.
fn use_chart_id() -> String {
    let id = use_element_id("chart");
    let owned = id.clone();
    use_drop(move || destroy_chart(&owned));
    id
}

fn draw(id: String, options: Value) {
    spawn(async move {
        if let Err(e) = render_chart(&id, &options).await {
            tracing::error!(chart = %id, error = %e, "chart render failed");
        }
    });
}

#[component]
fn ChartFrame(id: String, ready: bool, height: u32) -> Element {
    rsx! {
        if ready {
            div { id, class: "chart", style: "min-height: {height}px" }
        } else {
            Skeleton { class: "chart-skeleton" }
        }
    }
}

/// 30-day sales line. The series is regenerated on every redraw.
#[component]
pub fn SalesLineChart(mode: ChartMode, #[props(default = 220)] height: u32) -> Element {
    let id = use_chart_id();
    let library = use_script_bundle(&CONFIG.charts);
    let ready = matches!(*library.read(), Some(Ok(())));

    let chart_id = id.clone();
    use_effect(use_reactive!(|mode, height| {
        if !matches!(*library.read(), Some(Ok(()))) {
            return;
        }
        let data = sales_series(&mut rand::thread_rng());
        tracing::debug!(%mode, "drawing sales chart");
        draw(chart_id.clone(), sales_line_options(mode, &data, height));
    }));

    rsx! {
        ChartFrame { id, ready, height }
    }
}

#[component]
pub fn CandlesChart(#[props(default = 260)] height: u32) -> Element {
    let id = use_chart_id();
    let library = use_script_bundle(&CONFIG.charts);
    let ready = matches!(*library.read(), Some(Ok(())));

    let chart_id = id.clone();
    use_effect(use_reactive!(|height| {
        if !matches!(*library.read(), Some(Ok(()))) {
            return;
        }
        let data = candle_series(&mut rand::thread_rng());
        draw(chart_id.clone(), candles_options(&data, height));
    }));

    rsx! {
        ChartFrame { id, ready, height }
    }
}
