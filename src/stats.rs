use crate::models::{Status, Subject};

pub const GOOD_THRESHOLD: f64 = 75.0;
pub const WARNING_THRESHOLD: f64 = 50.0;

/// Counts and percentage derived from a subject's records. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStats {
    pub present_count: usize,
    pub absent_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Good,
    Warning,
    Alert,
}

impl Standing {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= GOOD_THRESHOLD {
            Self::Good
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Alert
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Good => "Great! You're above the required attendance",
            Self::Warning => "Warning: Attendance is getting low",
            Self::Alert => "Alert: Improve your attendance",
        }
    }
}

impl SubjectStats {
    /// Percentage with one decimal, e.g. `"50.0"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }

    pub fn standing(&self) -> Standing {
        Standing::from_percentage(self.percentage)
    }

    pub fn total(&self) -> usize {
        self.present_count + self.absent_count
    }
}

pub fn build_stats(subject: &Subject) -> SubjectStats {
    let present_count = subject
        .attendance
        .iter()
        .filter(|record| record.status == Status::Present)
        .count();
    let absent_count = subject.attendance.len() - present_count;

    SubjectStats {
        present_count,
        absent_count,
        percentage: percentage(present_count, absent_count),
    }
}

// Rounded half away from zero to one decimal, so 6.25 reads as 6.3.
fn percentage(present: usize, absent: usize) -> f64 {
    let marked = present + absent;
    if marked == 0 {
        return 0.0;
    }
    let raw = present as f64 / marked as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
