//! Presentation state for the student and subject pages.
//!
//! Nothing here talks to the store. Views hold the records from the last
//! successful fetch and derive what is shown from them; after every mutation
//! the caller re-fetches and hands the fresh list to `record_saved` or
//! `record_deleted`, which also set the notice.

pub mod filter;
pub mod notice;
pub mod student_form;
pub mod student_list;
pub mod subject_form;
pub mod subject_list;

pub use filter::{RemarksFilter, filter_students, filter_subjects};
pub use notice::{Notice, NoticeLevel};
pub use student_form::StudentForm;
pub use student_list::{StudentListView, StudentRow};
pub use subject_form::SubjectForm;
pub use subject_list::SubjectListView;
