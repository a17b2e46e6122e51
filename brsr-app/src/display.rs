//! Terminal number formatting in the en-IN convention the BRSR artifact
//! audience expects: two fixed decimals, Indian digit grouping (last three
//! digits, then groups of two).

pub fn format_en_in(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_indian(int_part);
    if value < 0.0 && fixed != "0.00" {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_keep_plain_grouping() {
        assert_eq!(format_en_in(0.0), "0.00");
        assert_eq!(format_en_in(268.0), "268.00");
        assert_eq!(format_en_in(26.8), "26.80");
    }

    #[test]
    fn indian_grouping_after_thousands() {
        assert_eq!(format_en_in(1000.0), "1,000.00");
        assert_eq!(format_en_in(100000.0), "1,00,000.00");
        assert_eq!(format_en_in(1234567.891), "12,34,567.89");
        assert_eq!(format_en_in(987654321.0), "98,76,54,321.00");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_en_in(-1234.5), "-1,234.50");
    }
}
