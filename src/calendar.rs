use crate::models::{CalendarDay, MonthResponse, Subject};
use chrono::{Datelike, Months, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Moves one calendar month and lands on the first day of that month.
pub fn navigate_month(reference: NaiveDate, direction: Direction) -> NaiveDate {
    let start = month_start(reference);
    let step = Months::new(1);
    let moved = match direction {
        Direction::Prev => start.checked_sub_months(step),
        Direction::Next => start.checked_add_months(step),
    };
    moved.unwrap_or(start)
}

/// Parses a `yyyy-MM` month key.
pub fn parse_month(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", key.trim()), "%Y-%m-%d").ok()
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn month_days(month: NaiveDate) -> Vec<NaiveDate> {
    let start = month_start(month);
    start
        .iter_days()
        .take_while(|day| day.month() == start.month())
        .collect()
}

/// Empty cells before day 1 in a Sunday-first week.
pub fn leading_blanks(month: NaiveDate) -> u32 {
    month_start(month).weekday().num_days_from_sunday()
}

pub fn build_month(month: NaiveDate, today: NaiveDate, subject: Option<&Subject>) -> MonthResponse {
    let start = month_start(month);
    let days = month_days(start)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            day: date.day(),
            status: subject.and_then(|subject| subject.status_on(date)),
            is_today: date == today,
            is_sunday: date.weekday() == Weekday::Sun,
        })
        .collect();

    MonthResponse {
        month: month_key(start),
        label: month_label(start),
        prev: month_key(navigate_month(start, Direction::Prev)),
        next: month_key(navigate_month(start, Direction::Next)),
        leading_blanks: leading_blanks(start),
        subject: subject.map(|subject| subject.name.clone()),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn navigate_wraps_years() {
        assert_eq!(navigate_month(ymd(2024, 12, 15), Direction::Next), ymd(2025, 1, 1));
        assert_eq!(navigate_month(ymd(2024, 1, 31), Direction::Prev), ymd(2023, 12, 1));
        assert_eq!(navigate_month(ymd(2024, 1, 31), Direction::Next), ymd(2024, 2, 1));
    }

    #[test]
    fn month_days_cover_leap_february() {
        let days = month_days(ymd(2024, 2, 10));
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&ymd(2024, 2, 1)));
        assert_eq!(days.last(), Some(&ymd(2024, 2, 29)));
        assert_eq!(month_days(ymd(2023, 2, 1)).len(), 28);
    }

    #[test]
    fn month_keys_round_trip() {
        assert_eq!(parse_month("2024-03"), Some(ymd(2024, 3, 1)));
        assert_eq!(month_key(ymd(2024, 3, 17)), "2024-03");
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("march"), None);
    }

    #[test]
    fn leading_blanks_follow_sunday_first_week() {
        // 2024-03-01 is a Friday, 2024-09-01 a Sunday.
        assert_eq!(leading_blanks(ymd(2024, 3, 20)), 5);
        assert_eq!(leading_blanks(ymd(2024, 9, 1)), 0);
    }

    #[test]
    fn build_month_carries_subject_marks() {
        let mut subject = Subject::new("Math");
        subject.toggle(ymd(2024, 3, 1), Status::Present);
        subject.toggle(ymd(2024, 4, 1), Status::Absent);

        let view = build_month(ymd(2024, 3, 1), ymd(2024, 3, 3), Some(&subject));
        assert_eq!(view.month, "2024-03");
        assert_eq!(view.label, "March 2024");
        assert_eq!(view.prev, "2024-02");
        assert_eq!(view.next, "2024-04");
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.days[0].status, Some(Status::Present));
        assert!(view.days[1..].iter().all(|day| day.status.is_none()));
        assert!(view.days[2].is_today);
        assert!(view.days[2].is_sunday);
    }
}
