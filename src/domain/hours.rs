use chrono::Weekday;

/// Full English day label as it appears in Google's `weekday_text`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Closing time for `day` out of lines like `"Monday: 9:00 AM – 10:00 PM"`.
///
/// Takes the text after the last range separator, so split shifts
/// (`"11:00 AM – 2:00 PM, 5:00 – 10:00 PM"`) report the final close.
/// Returns `None` when no line matches the day or the line has no range
/// (`"Closed"`, `"Open 24 hours"`).
pub fn closing_time(weekly_hours: &[String], day: &str) -> Option<String> {
    let hours = weekly_hours.iter().find_map(|line| {
        let (label, rest) = line.split_once(':')?;
        label.trim().eq_ignore_ascii_case(day).then_some(rest)
    })?;

    // Google 用 en dash，偶爾也會看到一般的連字號
    let (_, close) = hours.rsplit_once(|c: char| c == '–' || c == '-')?;
    let close = close.trim();
    (!close.is_empty()).then(|| close.to_string())
}
