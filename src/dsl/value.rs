//! Numeric literals with SPICE unit suffixes.

/// Parse a value with optional engineering suffix (e.g., "10k", "100n", "4.7u").
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => match suffix_multiplier(last) {
            Some(mult) => (&text[..text.len() - last.len_utf8()], mult),
            None => (text, 1.0),
        },
        None => (text, 1.0),
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' | 'µ' => Some(1e-6),
        'm' => Some(1e-3),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}
