use chrono::NaiveDate;

use crate::date_filter::parse_timestamp;

pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.unsigned_abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// `2024-03-15T10:30:00` -> `Mar 15, 2024 10:30 AM`; unparseable input is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => at.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn time_of_day(hour: u32) -> &'static str {
    if hour < 12 {
        "morning"
    } else if hour < 17 {
        "afternoon"
    } else {
        "evening"
    }
}

/// First letter upper-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
