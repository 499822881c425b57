/// Date and time formatting for table cells and the detail drawer
///
/// The backend sends ISO dates (`2024-03-15`) and datetimes either as
/// `2024-03-15T14:02:26.123Z` or `2024-03-15 14:02:26`.

/// Format datetime string to `YYYY-MM-DD HH:MM:SS`
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let split = datetime_str
        .split_once('T')
        .or_else(|| datetime_str.split_once(' '));
    if let Some((date_part, time_part)) = split {
        if is_iso_date(date_part) {
            let time = time_part
                .split('.')
                .next()
                .unwrap_or(time_part)
                .trim_end_matches('Z');
            return format!("{} {}", date_part, time);
        }
    }
    datetime_str.to_string()
}

/// Format date or datetime string to `YYYY-MM-DD`
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str
        .split(['T', ' '])
        .next()
        .unwrap_or(date_str);
    if is_iso_date(date_part) {
        return date_part.to_string();
    }
    date_str.to_string()
}

fn is_iso_date(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024-03-15 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "2024-12-31 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(format_date("2024-03-15 14:02:26"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
