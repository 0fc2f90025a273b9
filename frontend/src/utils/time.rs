use chrono::{Local, NaiveDate};

/// "Today" is the local clock at render time.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ymd_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_ymd(date), "2025-03-07");
    }
}
