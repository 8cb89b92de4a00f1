pub mod student_repository;
pub mod subject_repository;

pub use student_repository::{NewStudent, StudentRepository, StudentUpdate};
pub use subject_repository::{SubjectRepository, SubjectUpdate};
