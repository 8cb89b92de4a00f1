use utoipa::OpenApi;

use crate::routes::dto::MessageResponse;
use crate::routes::students::dto::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use crate::routes::subjects::dto::{CreateSubjectRequest, SubjectResponse, UpdateSubjectRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Management API",
        description = "Students, subjects and grade remarks"
    ),
    paths(
        crate::routes::health::route::health_check,
        crate::routes::students::route::get_all_students,
        crate::routes::students::route::get_student,
        crate::routes::students::route::create_student,
        crate::routes::students::route::update_student,
        crate::routes::students::route::delete_student,
        crate::routes::subjects::route::get_all_subjects,
        crate::routes::subjects::route::get_subject,
        crate::routes::subjects::route::create_subject,
        crate::routes::subjects::route::update_subject,
        crate::routes::subjects::route::delete_subject,
    ),
    components(schemas(
        CreateStudentRequest,
        UpdateStudentRequest,
        StudentResponse,
        CreateSubjectRequest,
        UpdateSubjectRequest,
        SubjectResponse,
        MessageResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Students", description = "Student records and remarks"),
        (name = "Subjects", description = "Subject records")
    )
)]
pub struct ApiDoc;
