// File: src/reveal.rs
// Purpose: Scroll-triggered reveal options and stagger timing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: String,
    /// Delay between consecutive siblings, in milliseconds
    pub stagger_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -60px 0px".to_string(),
            stagger_ms: 120,
        }
    }
}

impl RevealOptions {
    /// Delay for the element at `index` among `siblings` reveal elements
    /// sharing a parent. A lone element gets no stagger.
    pub fn stagger_delay(&self, index: usize, siblings: usize) -> Option<u32> {
        if siblings > 1 {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            Some(index.saturating_mul(self.stagger_ms))
        } else {
            None
        }
    }
}

/// Delay in milliseconds from a `data-reveal-delay` value.
///
/// Missing, non-numeric or negative values mean no delay.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_only_with_siblings() {
        let opts = RevealOptions::default();
        assert_eq!(opts.stagger_delay(0, 1), None);
        assert_eq!(opts.stagger_delay(0, 3), Some(0));
        assert_eq!(opts.stagger_delay(2, 3), Some(240));
    }

    #[test]
    fn test_custom_stagger() {
        let opts = RevealOptions {
            stagger_ms: 100,
            ..Default::default()
        };
        assert_eq!(opts.stagger_delay(4, 5), Some(400));
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("360")), 360);
        assert_eq!(parse_delay(Some("12.7")), 12);
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(Some("-50")), 0);
    }
}
