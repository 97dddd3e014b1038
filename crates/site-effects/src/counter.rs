//! Animated statistic counters.
//!
//! A counter climbs from zero to the integer in its `data-target` attribute
//! over a fixed duration with cubic ease-out, and lands exactly on the
//! target on the last frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterOptions {
    pub selector: String,
    pub duration_ms: f64,
    pub threshold: f64,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            selector: ".counter[data-target]".to_string(),
            duration_ms: 2000.0,
            threshold: 0.5,
        }
    }
}

/// Leading integer of `raw`, base 10.
///
/// Leading whitespace and a sign are accepted and trailing text is ignored,
/// so `"250+"` reads as 250. Returns `None` when there are no digits or the
/// number does not fit.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Value to display `elapsed_ms` after the animation started.
    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return self.finished();
        }
        let progress = (elapsed_ms.max(0.0) / self.duration_ms).min(1.0);
        if progress >= 1.0 {
            return self.finished();
        }
        let value = (ease_out_cubic(progress) * self.target as f64).floor() as i64;
        CounterFrame { value, done: false }
    }

    fn finished(&self) -> CounterFrame {
        CounterFrame {
            value: self.target,
            done: true,
        }
    }
}
