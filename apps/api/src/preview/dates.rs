use chrono::NaiveDate;

/// Label shown instead of the end date of a current position.
pub const PRESENT_LABEL: &str = "Heute";

/// `2021-01-01` → `01.2021`. Empty stays empty; anything unparseable is shown as typed.
pub fn month_year(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%m.%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `start – end`, with the present label when `current` is set. A missing side
/// drops the separator.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        PRESENT_LABEL.to_string()
    } else {
        month_year(end)
    };
    join_present(&[month_year(start).as_str(), end.as_str()], " – ")
}

/// Joins the non-empty parts with `sep`.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Signature date, German style.
pub fn day_month_year(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
