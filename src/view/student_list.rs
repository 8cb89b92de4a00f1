use std::time::Instant;

use uuid::Uuid;

use super::filter::{RemarksFilter, filter_students};
use super::notice::Notice;
use crate::resolution::resolve_subject_name;
use crate::routes::students::dto::StudentResponse;
use crate::routes::subjects::dto::SubjectResponse;

/// One line of the student table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow<'a> {
    pub student_id: Uuid,
    pub student_name: &'a str,
    pub subject_name: &'a str,
    pub grade: &'a str,
    pub remarks: &'a str,
}

#[derive(Debug, Default)]
pub struct StudentListView {
    students: Vec<StudentResponse>,
    subjects: Vec<SubjectResponse>,
    pub search: String,
    pub remarks: RemarksFilter,
    notice: Option<Notice>,
}

impl StudentListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both lists with a fresh fetch.
    pub fn replace(&mut self, students: Vec<StudentResponse>, subjects: Vec<SubjectResponse>) {
        self.students = students;
        self.subjects = subjects;
    }

    /// Replaces the students only; mutations on this page never touch subjects.
    pub fn replace_students(&mut self, students: Vec<StudentResponse>) {
        self.students = students;
    }

    pub fn students(&self) -> &[StudentResponse] {
        &self.students
    }

    /// Filtered rows with subject names resolved against the loaded subjects.
    pub fn rows(&self) -> Vec<StudentRow<'_>> {
        filter_students(&self.students, &self.search, self.remarks)
            .into_iter()
            .map(|student| StudentRow {
                student_id: student.student_id,
                student_name: &student.student_name,
                subject_name: resolve_subject_name(&student.subject_key, &self.subjects),
                grade: &student.grade,
                remarks: &student.remarks,
            })
            .collect()
    }

    /// Subject dropdown entries as `(label, subject key)`.
    pub fn subject_options(&self) -> Vec<(String, &str)> {
        self.subjects
            .iter()
            .map(|subject| {
                (
                    format!("{} ({})", subject.subject_name, subject.subject_key),
                    subject.subject_key.as_str(),
                )
            })
            .collect()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Drops the notice once it has been visible for `Notice::DISMISS_AFTER`.
    pub fn dismiss_if_expired(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }

    /// A create or update went through; `students` is the re-fetched list.
    pub fn record_saved(&mut self, notice: Notice, students: Vec<StudentResponse>) {
        self.replace_students(students);
        self.notify(notice);
    }

    pub fn record_deleted(&mut self, students: Vec<StudentResponse>) {
        self.replace_students(students);
        self.notify(Notice::success("Student Deleted Successfully!"));
    }

    /// Failures keep the rows from the last successful fetch.
    pub fn save_failed(&mut self) {
        self.notify(Notice::danger("Error saving student."));
    }

    pub fn delete_failed(&mut self) {
        self.notify(Notice::danger("Error deleting student."));
    }
}
