//! Форматирование чисел для таблиц: разделитель тысяч запятая (1,234.56)

/// Число с разделителем тысяч и заданным количеством знаков после точки
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Запятая каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: 2 знака, разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Процент, уже посчитанный сервисом (12.345 → "12.35%")
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(-123.4), "-123.40");
    }

    #[test]
    fn test_format_int_and_percent() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_percent(12.345), "12.35%");
        assert_eq!(format_percent(-3.0), "-3.00%");
    }
}
