#[cfg(test)]
#[path = "format_test.rs"]
mod tests;

use anyhow::Result;
use chrono::DateTime;
use chrono::Datelike;
use chrono::FixedOffset;
use chrono::NaiveDateTime;
use chrono::Offset;
use chrono::TimeZone;
use chrono::Timelike;
use chrono::Utc;

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

// French grouping uses a narrow no-break space, the currency sign a regular
// no-break space.
const GROUP_SEPARATOR: char = '\u{202f}';
const CURRENCY_SEPARATOR: char = '\u{a0}';

/// Euro amount in French notation, e.g. `1 234,50 €`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return format!("NaN{CURRENCY_SEPARATOR}€");
    }
    if price.is_infinite() {
        let mut sign = "";
        if price < 0.0 {
            sign = "-";
        }

        return format!("{sign}∞{CURRENCY_SEPARATOR}€");
    }

    let cents = (price.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::new();
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let mut sign = "";
    if price < 0.0 && cents > 0 {
        sign = "-";
    }

    return format!(
        "{sign}{grouped},{:02}{CURRENCY_SEPARATOR}€",
        cents % 100
    );
}

/// Parses the server's timestamps: RFC 3339, or naive ISO 8601 which the
/// server always writes in UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(res) = DateTime::parse_from_rfc3339(value) {
        return Ok(res);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| return NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))?;

    return Ok(Utc.fix().from_utc_datetime(&naive));
}

/// Long French date with time, in the timestamp's own offset, e.g.
/// `5 janvier 2024 à 09:03`.
pub fn format_date(value: &DateTime<FixedOffset>) -> String {
    return format!(
        "{} {} {} à {:02}:{:02}",
        value.day(),
        MONTHS[value.month0() as usize],
        value.year(),
        value.hour(),
        value.minute()
    );
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        return "s";
    }

    return "";
}

pub fn format_relative_time(value: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let seconds = now
        .signed_duration_since(value.with_timezone(&Utc))
        .num_seconds();

    if seconds < 60 {
        return "À l'instant".to_string();
    }

    if seconds < 3600 {
        let minutes = seconds / 60;
        return format!("Il y a {minutes} minute{}", plural(minutes));
    }

    if seconds < 86400 {
        let hours = seconds / 3600;
        return format!("Il y a {hours} heure{}", plural(hours));
    }

    let days = seconds / 86400;
    return format!("Il y a {days} jour{}", plural(days));
}
