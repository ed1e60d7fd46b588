use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Present,
    Absent,
}

/// One day's mark for a subject. `date` travels as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attendance: Vec::new(),
        }
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<Status> {
        self.attendance
            .iter()
            .find(|record| record.date == date)
            .map(|record| record.status)
    }

    /// Applies the three-state toggle for `date` and returns the resulting mark.
    ///
    /// No record inserts one, the same status clears it, and the other status
    /// flips it in place.
    pub fn toggle(&mut self, date: NaiveDate, status: Status) -> Option<Status> {
        match self.attendance.iter().position(|record| record.date == date) {
            None => {
                self.attendance.push(AttendanceRecord { date, status });
                Some(status)
            }
            Some(index) if self.attendance[index].status == status => {
                self.attendance.remove(index);
                None
            }
            Some(index) => {
                self.attendance[index].status = status;
                Some(status)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddSubjectRequest {
    pub name: String,
}

/// Names travel in bodies and query strings; `.` and `..` would not survive as path segments.
#[derive(Debug, Deserialize)]
pub struct SubjectRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    pub date: NaiveDate,
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub name: String,
    pub present_count: usize,
    pub absent_count: usize,
    pub percentage: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub subjects: Vec<SubjectSummary>,
    pub selected: Option<SelectedSubject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectedSubject {
    pub name: String,
    pub present_count: usize,
    pub absent_count: usize,
    pub percentage: String,
    pub standing: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub name: String,
    pub removed: bool,
    pub state: StateResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkResponse {
    pub subject: String,
    pub date: NaiveDate,
    pub status: Option<Status>,
    pub present_count: usize,
    pub absent_count: usize,
    pub percentage: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayStatusResponse {
    pub subject: String,
    pub date: NaiveDate,
    pub status: Option<Status>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub status: Option<Status>,
    pub is_today: bool,
    pub is_sunday: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthResponse {
    pub month: String,
    pub label: String,
    pub prev: String,
    pub next: String,
    pub leading_blanks: u32,
    pub subject: Option<String>,
    pub days: Vec<CalendarDay>,
}
