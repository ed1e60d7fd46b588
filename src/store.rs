use crate::errors::{StoreError, MAX_NAME_LEN};
use crate::models::{Status, Subject};
use crate::stats::{build_stats, SubjectStats};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

/// In-memory subjects plus the current selection.
///
/// Methods only touch memory; callers save the snapshot after each mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceStore {
    subjects: Vec<Subject>,
    selected: Option<String>,
}

impl AttendanceStore {
    /// Builds a store from a loaded snapshot and selects the first subject.
    ///
    /// Case-insensitive name collisions and repeated dates are dropped, keeping
    /// the first occurrence.
    pub fn from_subjects(subjects: Vec<Subject>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(subjects.len());

        for mut subject in subjects {
            if !seen.insert(subject.name.to_lowercase()) {
                warn!("dropping duplicate subject {:?} from stored data", subject.name);
                continue;
            }
            let mut dates = HashSet::new();
            let before = subject.attendance.len();
            subject.attendance.retain(|record| dates.insert(record.date));
            if subject.attendance.len() != before {
                warn!(
                    "dropped {} repeated date(s) from subject {:?}",
                    before - subject.attendance.len(),
                    subject.name
                );
            }
            kept.push(subject);
        }

        let selected = kept.first().map(|subject| subject.name.clone());
        Self {
            subjects: kept,
            selected,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_subject(&self) -> Option<&Subject> {
        let name = self.selected.as_deref()?;
        self.find(name)
    }

    pub fn find(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.name == name)
    }

    /// Adds a subject and selects it. Returns the stored (trimmed) name.
    pub fn add_subject(&mut self, raw_name: &str) -> Result<String, StoreError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(StoreError::NameTooLong(len));
        }
        let lowered = name.to_lowercase();
        if self
            .subjects
            .iter()
            .any(|subject| subject.name.to_lowercase() == lowered)
        {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        self.subjects.push(Subject::new(name));
        self.selected = Some(name.to_string());
        Ok(name.to_string())
    }

    /// Removes the subject with exactly this name along with its records.
    ///
    /// Returns whether anything was removed; a missing name is not an error.
    pub fn delete_subject(&mut self, name: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|subject| subject.name != name);
        let removed = self.subjects.len() != before;

        if self.selected.as_deref() == Some(name) {
            self.selected = self.subjects.first().map(|subject| subject.name.clone());
        }
        removed
    }

    pub fn select_subject(&mut self, name: &str) -> Result<(), StoreError> {
        if self.find(name).is_none() {
            return Err(StoreError::UnknownSubject(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// Toggles `status` on `date` for the selected subject.
    ///
    /// `None` means nothing is selected and nothing changed; otherwise the
    /// inner value is the resulting mark, `None` meaning unmarked.
    pub fn mark_attendance(&mut self, date: NaiveDate, status: Status) -> Option<Option<Status>> {
        let name = self.selected.as_deref()?;
        let subject = self.subjects.iter_mut().find(|subject| subject.name == name)?;
        Some(subject.toggle(date, status))
    }

    pub fn status_of(&self, name: &str, date: NaiveDate) -> Option<Status> {
        self.find(name)?.status_on(date)
    }

    pub fn stats_of(&self, name: &str) -> Option<SubjectStats> {
        self.find(name).map(build_stats)
    }
}
