use uuid::Uuid;

use super::notice::Notice;
use crate::routes::subjects::dto::{CreateSubjectRequest, SubjectResponse, UpdateSubjectRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectForm {
    editing: Option<Uuid>,
    pub subject_key: String,
    pub subject_name: String,
}

impl SubjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(subject: &SubjectResponse) -> Self {
        Self {
            editing: Some(subject.subject_id),
            subject_key: subject.subject_key.clone(),
            subject_name: subject.subject_name.clone(),
        }
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Subject"
        } else {
            "Add New Subject"
        }
    }

    pub fn create_request(&self) -> CreateSubjectRequest {
        CreateSubjectRequest {
            subject_key: Some(self.subject_key.clone()),
            subject_name: Some(self.subject_name.clone()),
        }
    }

    pub fn update_request(&self) -> UpdateSubjectRequest {
        UpdateSubjectRequest {
            subject_key: Some(self.subject_key.clone()),
            subject_name: Some(self.subject_name.clone()),
        }
    }

    pub fn saved_notice(&self) -> Notice {
        if self.editing.is_some() {
            Notice::success("Subject updated successfully")
        } else {
            Notice::success("Subject added successfully")
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
