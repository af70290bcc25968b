//! Moving-average trend signal over daily closes.
//!
//! The engine is a pure function of its input: it never fails and never
//! fetches. Callers that could not obtain a series pass an empty one and get
//! [`Signal::InsufficientData`] back.

use serde::{Deserialize, Serialize};

use crate::PriceSeries;

/// Window used by the `/view --chart` analysis.
pub const DEFAULT_MA_WINDOW: usize = 50;

/// Position of the latest close relative to the moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Above,
    /// Also returned when the latest close equals the average.
    Below,
    InsufficientData,
}

/// Outcome of a moving-average computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub window_size: usize,
    pub moving_average: Option<f64>,
    pub last_close: Option<f64>,
    pub signal: Signal,
}

impl IndicatorResult {
    fn insufficient(window_size: usize, last_close: Option<f64>) -> Self {
        Self {
            window_size,
            moving_average: None,
            last_close,
            signal: Signal::InsufficientData,
        }
    }
}

/// Simple moving average of the last `window` closes and the resulting signal.
///
/// A zero window is reported as insufficient data rather than rejected.
pub fn compute_moving_average(series: &PriceSeries, window: usize) -> IndicatorResult {
    let last_close = series.last_close();
    if window == 0 || series.len() < window {
        return IndicatorResult::insufficient(window, last_close);
    }

    let sum: f64 = series.closes().rev().take(window).sum();
    let average = sum / window as f64;

    let signal = match last_close {
        Some(close) if close > average => Signal::Above,
        Some(_) => Signal::Below,
        None => Signal::InsufficientData,
    };

    IndicatorResult {
        window_size: window,
        moving_average: Some(average),
        last_close,
        signal,
    }
}
