use once_cell::sync::Lazy;
use regex::Regex;

static VOLUME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*(cl|l)\.?\s*$").expect("volume pattern is valid")
});

/// Parses a locale-formatted price such as `"13,99 €"` into a number.
///
/// Keeps digits, `,`, `.` and `-`; the first comma becomes the decimal point.
/// If several dots remain, only the last one is kept as the decimal point
/// (`"1.299,00"` is 1299). Returns `0.0` for anything unparseable.
pub fn parse_price(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let swapped = kept.replacen(',', ".", 1);

    let candidate = match swapped.rfind('.') {
        Some(last_dot) if swapped.matches('.').count() > 1 => {
            let (int_part, frac_part) = swapped.split_at(last_dot);
            format!("{}{}", int_part.replace('.', ""), frac_part)
        }
        _ => swapped,
    };

    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Canonicalizes a bottle volume.
///
/// Centiliter values above 99 are expressed in liters (`"150cl"` becomes
/// `"1.5 L"`), smaller ones stay in centiliters (`"75 cl"`). Liter values
/// accept a comma decimal. Unrecognized text is returned unchanged.
pub fn parse_volume(text: &str) -> String {
    let Some(caps) = VOLUME_RE.captures(text) else {
        return text.to_string();
    };

    let Ok(amount) = caps[1].replace(',', ".").parse::<f64>() else {
        return text.to_string();
    };

    if caps[2].eq_ignore_ascii_case("cl") {
        if amount > 99.0 {
            format!("{} L", format_amount(amount / 100.0))
        } else {
            format!("{} cl", format_amount(amount))
        }
    } else {
        format!("{} L", format_amount(amount))
    }
}

fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Nearest-rank percentile over unsorted values. `fraction` is in `0.0..=1.0`.
pub fn percentile(values: &[f64], fraction: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (fraction.clamp(0.0, 1.0) * sorted.len() as f64).ceil() as usize;
    let index = rank.saturating_sub(1).min(sorted.len() - 1);
    Some(sorted[index])
}
