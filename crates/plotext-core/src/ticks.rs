// File: crates/plotext-core/src/ticks.rs
// Summary: Tick placement and label formatting for numeric and time axes.

use chrono::DateTime;

/// A major tick: data value and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// How an axis chooses and labels its ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// "Nice" 1/2/5 steps with plain decimal labels.
    Default,
    /// Same placement, values are unix seconds formatted with a `chrono`
    /// strftime pattern in UTC. The pattern may contain `\n`.
    Time { format: String },
}

impl Default for Ticks {
    fn default() -> Self { Ticks::Default }
}

/// Suggested number of major ticks per axis.
const SUGGESTED_TICKS: usize = 3;

impl Ticks {
    pub fn time(format: impl Into<String>) -> Self {
        Ticks::Time { format: format.into() }
    }

    pub fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let values = nice_values(min, max, SUGGESTED_TICKS);
        let step = if values.len() > 1 { values[1] - values[0] } else { 0.0 };
        values
            .into_iter()
            .map(|value| {
                let label = match self {
                    Ticks::Default => format_number(value, step),
                    Ticks::Time { format } => format_time(value, format),
                };
                Tick { value, label }
            })
            .collect()
    }
}

/// Multiples of a 1/2/5 x 10^k step inside `[min, max]`, aiming for about
/// `suggested` values.
pub fn nice_values(min: f64, max: f64, suggested: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return vec![min];
    }
    let raw = (max - min) / suggested.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn format_number(v: f64, step: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() >= 1e6 || v.abs() < 1e-4 {
        return format!("{v:e}");
    }
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    format!("{v:.decimals$}")
}

fn format_time(secs: f64, format: &str) -> String {
    match DateTime::from_timestamp(secs.floor() as i64, 0) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps_land_on_round_numbers() {
        assert_eq!(nice_values(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(nice_values(0.3, 2.1, 3), vec![1.0, 2.0]);
        assert_eq!(nice_values(-3.0, 7.0, 3), vec![0.0, 5.0]);
    }

    #[test]
    fn empty_range_yields_single_value() {
        assert_eq!(nice_values(4.0, 4.0, 3), vec![4.0]);
    }

    #[test]
    fn decimal_labels_follow_step() {
        let ticks = Ticks::Default.ticks(0.0, 1.0);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "0.5", "1.0"]);
    }

    #[test]
    fn time_labels_use_strftime() {
        let ticks = Ticks::time("%Y-%m-%d\n%H:%M").ticks(946_800_000.0, 946_800_000.0);
        assert_eq!(ticks[0].label, "2000-01-02\n08:00");
    }
}
