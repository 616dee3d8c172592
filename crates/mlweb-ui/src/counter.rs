//! Animated stat counters
//!
//! A stat such as `"150+"` counts up from zero when scrolled into view. The
//! value grows by `end / (duration / 16)` every 16 ms frame and the suffix is
//! kept.

use std::time::Duration;

/// Frame interval of the count-up
pub const FRAME: Duration = Duration::from_millis(16);

/// Default count-up length
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Parsed stat text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    /// Final value
    pub end: u64,
    /// Text after the number (`"+"`, `"%"`, ...)
    pub suffix: String,
}

impl CounterTarget {
    /// Parse leading digits; `None` when the text does not start with one
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let end = text[..split].parse().ok()?;
        Some(Self {
            end,
            suffix: text[split..].to_string(),
        })
    }

    /// Rendered text for a value
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        format!("{value}{}", self.suffix)
    }

    /// Every rendered frame from the first tick to the final value
    #[must_use]
    pub fn frames(&self, duration: Duration) -> Vec<String> {
        CountUp::new(self.end, duration)
            .map(|value| self.render(value))
            .collect()
    }
}

/// Iterator over count-up values, one per frame
#[derive(Debug, Clone)]
pub struct CountUp {
    end: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    /// Count up to `end` over `duration`
    #[must_use]
    pub fn new(end: u64, duration: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let steps = (duration.as_secs_f64() / FRAME.as_secs_f64()).max(1.0);
        #[allow(clippy::cast_precision_loss)]
        let increment = end as f64 / steps;
        Self {
            end,
            increment,
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        #[allow(clippy::cast_precision_loss)]
        let reached = self.current >= self.end as f64;
        if reached {
            self.done = true;
            return Some(self.end);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = self.current.floor() as u64;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_suffix() {
        assert_eq!(
            CounterTarget::parse("150+"),
            Some(CounterTarget {
                end: 150,
                suffix: "+".to_string()
            })
        );
        assert_eq!(CounterTarget::parse(" 98% ").unwrap().suffix, "%");
        assert_eq!(CounterTarget::parse("brak"), None);
    }

    #[test]
    fn frames_end_on_target() {
        let target = CounterTarget::parse("50+").unwrap();
        let frames = target.frames(Duration::from_millis(160));
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0], "5+");
        assert_eq!(frames.last().map(String::as_str), Some("50+"));
    }

    #[test]
    fn values_never_decrease() {
        let values: Vec<u64> = CountUp::new(7, DEFAULT_DURATION).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&7));
    }

    #[test]
    fn zero_target_finishes_at_once() {
        assert_eq!(CountUp::new(0, DEFAULT_DURATION).collect::<Vec<_>>(), vec![0]);
    }
}
