//! Value scales shared by the flow map and its legend.
//!
//! Trade values are in thousands of USD. Colour and width both blend a
//! linear and a logarithmic scale so small flows stay visible next to the
//! largest ones.

const LINEAR_SHARE_INTENSITY: f64 = 0.5;
const LINEAR_SHARE_WEIGHT: f64 = 0.8;
const MIN_WEIGHT: f64 = 1.0;
const MAX_WEIGHT: f64 = 10.0;

/// Colour intensity in `[0, 1]` for a value within `[0, max]`.
pub fn value_intensity(value: f64, max: f64) -> f64 {
    let blended = LINEAR_SHARE_INTENSITY.mul_add(
        linear_ratio(value, max),
        (1.0 - LINEAR_SHARE_INTENSITY) * log_ratio(value, max).unwrap_or(0.0),
    );
    blended.clamp(0.0, 1.0)
}

/// Stroke weight, roughly in `[1, 10]`.
pub fn stroke_weight(value: f64, max: f64) -> f64 {
    let linear = (MAX_WEIGHT - MIN_WEIGHT).mul_add(linear_ratio(value, max), MIN_WEIGHT);
    let log = log_ratio(value, max)
        .map_or(0.0, |ratio| (MAX_WEIGHT - MIN_WEIGHT).mul_add(ratio, MIN_WEIGHT));
    LINEAR_SHARE_WEIGHT.mul_add(linear, (1.0 - LINEAR_SHARE_WEIGHT) * log)
}

/// Reference values drawn in the legend.
pub fn legend_stops(max: f64) -> [f64; 3] {
    [max * 0.01, max * 0.1, max]
}

/// Formats a value given in thousands of USD.
pub fn format_value(value: f64) -> String {
    if value > 1000.0 {
        format!("{}M", group_thousands(value / 1000.0))
    } else if value > 1.0 {
        format!("{value:.2}K")
    } else {
        format!("{:.1}", value * 1000.0)
    }
}

/// Formats a weight given in thousands of kg as whole tonnes.
pub fn format_weight(weight: f64) -> String {
    let formatted = group_thousands(weight.round());
    match formatted.split_once('.') {
        Some((whole, _)) => whole.to_string(),
        None => formatted,
    }
}

fn linear_ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

// None below 1, where the log scale is undefined.
fn log_ratio(value: f64, max: f64) -> Option<f64> {
    if value < 1.0 {
        return None;
    }
    if max <= 1.0 {
        return Some(1.0);
    }
    Some((value.ln() / max.ln()).clamp(0.0, 1.0))
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = whole
        .strip_prefix('-')
        .map_or(("", whole), |digits| ("-", digits));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}
