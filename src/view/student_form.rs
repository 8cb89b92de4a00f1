use uuid::Uuid;

use super::notice::Notice;
use crate::grading::remark_for;
use crate::routes::students::dto::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};

/// Add/edit form for a student.
///
/// The remarks field is read-only: it previews what the server will derive
/// and is rewritten whenever the grade changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    editing: Option<Uuid>,
    pub student_key: String,
    pub student_name: String,
    pub subject_key: String,
    grade: String,
    remarks: String,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an existing record for editing.
    pub fn edit(student: &StudentResponse) -> Self {
        Self {
            editing: Some(student.student_id),
            student_key: student.student_key.clone(),
            student_name: student.student_name.clone(),
            subject_key: student.subject_key.clone(),
            grade: student.grade.clone(),
            remarks: student.remarks.clone(),
        }
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into();
        self.remarks = remark_for(&self.grade).to_string();
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Student"
        } else {
            "Add New Student"
        }
    }

    pub fn create_request(&self) -> CreateStudentRequest {
        CreateStudentRequest {
            student_key: Some(self.student_key.clone()),
            student_name: Some(self.student_name.clone()),
            subject_key: Some(self.subject_key.clone()),
            grade: Some(self.grade.clone()),
        }
    }

    pub fn update_request(&self) -> UpdateStudentRequest {
        UpdateStudentRequest {
            student_key: Some(self.student_key.clone()),
            student_name: Some(self.student_name.clone()),
            subject_key: Some(self.subject_key.clone()),
            grade: Some(self.grade.clone()),
        }
    }

    pub fn saved_notice(&self) -> Notice {
        if self.editing.is_some() {
            Notice::success("Student Updated Successfully!")
        } else {
            Notice::success("Student Added Successfully!")
        }
    }

    /// Clears every field and leaves edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
