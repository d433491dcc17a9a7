use crate::constants::{REVEAL_DEFAULT_ANIMATION, REVEAL_DELAY_UNIT_MS};

/// Settings read from an element's `data-animate` / `data-delay`.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub animation: String,
    pub delay_ms: f64,
}

impl Reveal {
    /// Empty or missing animation falls back to the default; a delay that is
    /// missing, negative or not a number means no delay.
    pub fn from_attrs(animate: Option<&str>, delay: Option<&str>) -> Self {
        let animation = match animate.map(str::trim) {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => REVEAL_DEFAULT_ANIMATION.to_string(),
        };
        let steps = delay
            .and_then(|d| d.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(0.0);
        Self {
            animation,
            delay_ms: steps * REVEAL_DELAY_UNIT_MS,
        }
    }

    pub fn class_name(&self) -> String {
        format!("animate-{}", self.animation)
    }
}
