#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBand {
    Low,
    Normal,
    Moderate,
    High,
}

impl StressBand {
    /// Thresholds are strict, so 25, 50 and 75 belong to the band above.
    pub fn classify(score: f64) -> Self {
        if score < 25.0 {
            Self::Low
        } else if score < 50.0 {
            Self::Normal
        } else if score < 75.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Low => "Low Stress — you’re doing great!",
            Self::Normal => "Normal Stress — totally fine.",
            Self::Moderate => "Moderate Stress — take a short break.",
            Self::High => "High Stress — consider resting soon.",
        }
    }
}

/// Prints a score the way a browser stringifies a number: whole values
/// drop the fractional part, and magnitudes below `1e-6` or from `1e21`
/// up switch to exponent form (`1e-7`, `1.5e+21`).
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if score == 0.0 {
        return "0".to_string();
    }

    let magnitude = score.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{score:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    if score.fract() == 0.0 {
        return format!("{score:.0}");
    }
    score.to_string()
}

pub fn marker_left(score: f64) -> String {
    format!("{}%", format_score(score))
}
