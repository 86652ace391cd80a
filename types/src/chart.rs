//! Random series and ApexCharts option documents for the two charts.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::Serialize;
use serde_json::{Value, json};

use crate::{Error, Result};

pub const DAYS: usize = 30;

const AXIS_LABEL: &str = "#64748b";
const GRID: &str = "#ECDFF2";

/// Which figure the sales line chart plots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMode {
    #[default]
    Gross,
    Net,
    Unit,
}

impl ChartMode {
    pub const ALL: [ChartMode; 3] = [ChartMode::Gross, ChartMode::Net, ChartMode::Unit];

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Gross => "Gross",
            ChartMode::Net => "Net",
            ChartMode::Unit => "Unit",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartMode::Gross => "#F24AA7",
            ChartMode::Net => "#A9D5F9",
            ChartMode::Unit => "#A9F9CD",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChartMode::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| crate::err!("unknown chart mode: {s}"))
    }
}

/// `D1` … `D30`
pub fn day_labels() -> Vec<String> {
    (1..=DAYS).map(|i| format!("D{i}")).collect()
}

/// A wavy 30-day series around 50 with up to 20 of noise.
pub fn sales_series(rng: &mut impl Rng) -> Vec<i64> {
    (0..DAYS)
        .map(|i| {
            let wave = 30.0 * (i as f64 / 3.0).sin();
            (50.0 + wave + rng.gen_range(0.0..20.0)).round() as i64
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub x: String,
    /// `[open, high, low, close]`
    pub y: [f64; 4],
}

impl Candle {
    pub fn open(&self) -> f64 {
        self.y[0]
    }

    pub fn high(&self) -> f64 {
        self.y[1]
    }

    pub fn low(&self) -> f64 {
        self.y[2]
    }

    pub fn close(&self) -> f64 {
        self.y[3]
    }
}

/// A gently rising 30-day OHLC series starting at 100.
pub fn candle_series(rng: &mut impl Rng) -> Vec<Candle> {
    (0..DAYS)
        .map(|i| {
            let base = 100.0 + i as f64;
            let open = base + rng.gen_range(-2.0..2.0);
            let close = base + rng.gen_range(-2.0..2.0);
            let high = open.max(close) + rng.gen_range(0.0..3.0);
            let low = open.min(close) - rng.gen_range(0.0..3.0);

            Candle {
                x: format!("D{}", i + 1),
                y: [open, high, low, close].map(round_cents),
            }
        })
        .collect()
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn sales_line_options(mode: ChartMode, data: &[i64], height: u32) -> Value {
    json!({
        "chart": {
            "id": "sales-line",
            "type": "line",
            "height": height,
            "animations": { "enabled": true, "easing": "easeinout", "speed": 600 },
        },
        "series": [{ "name": mode.label(), "data": data }],
        "stroke": { "curve": "smooth", "width": 3 },
        "colors": [mode.color()],
        "fill": {
            "type": "gradient",
            "gradient": { "shadeIntensity": 0.3, "opacityFrom": 0.4, "opacityTo": 0.1 },
        },
        "dataLabels": { "enabled": false },
        "tooltip": { "theme": "light" },
        "grid": { "borderColor": GRID },
        "xaxis": {
            "categories": day_labels(),
            "labels": { "style": { "colors": AXIS_LABEL } },
        },
        "yaxis": { "labels": { "style": { "colors": AXIS_LABEL } } },
    })
}

pub fn candles_options(data: &[Candle], height: u32) -> Value {
    json!({
        "chart": { "type": "candlestick", "height": height, "animations": { "enabled": true } },
        "series": [{ "data": data }],
        "plotOptions": {
            "candlestick": { "colors": { "upward": "#A9F9CD", "downward": "#F9A8D4" } },
        },
        "xaxis": { "type": "category", "labels": { "style": { "colors": AXIS_LABEL } } },
        "yaxis": {
            "tooltip": { "enabled": true },
            "labels": { "style": { "colors": AXIS_LABEL } },
        },
        "grid": { "borderColor": GRID },
        "tooltip": { "theme": "light" },
    })
}
