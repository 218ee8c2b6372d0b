// src/domain/format.rs

const MAP_ZOOM: u8 = 14;

/// `$` plus en-US grouping, at most three fraction digits, trailing zeros dropped.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price))
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Google Maps embed for a coordinate pair.
pub fn map_embed_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps?q={lat},{lng}&hl=en&z={MAP_ZOOM}&output=embed")
}
