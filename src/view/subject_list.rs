use std::time::Instant;

use super::filter::filter_subjects;
use super::notice::Notice;
use crate::routes::subjects::dto::SubjectResponse;

#[derive(Debug, Default)]
pub struct SubjectListView {
    subjects: Vec<SubjectResponse>,
    pub search: String,
    notice: Option<Notice>,
}

impl SubjectListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, subjects: Vec<SubjectResponse>) {
        self.subjects = subjects;
    }

    pub fn rows(&self) -> Vec<&SubjectResponse> {
        filter_subjects(&self.subjects, &self.search)
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

    pub fn dismiss_if_expired(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn record_saved(&mut self, notice: Notice, subjects: Vec<SubjectResponse>) {
        self.replace(subjects);
        self.notify(notice);
    }

    pub fn record_deleted(&mut self, subjects: Vec<SubjectResponse>) {
        self.replace(subjects);
        self.notify(Notice::success("Subject deleted successfully"));
    }

    pub fn save_failed(&mut self) {
        self.notify(Notice::danger("Error saving subject"));
    }

    pub fn delete_failed(&mut self) {
        self.notify(Notice::danger("Error deleting subject"));
    }
}
