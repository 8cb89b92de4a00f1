mod common;

use student_management::error::AppError;
use student_management::resolution::resolve_subject_name;
use student_management::services::{StudentFields, StudentService, SubjectFields, SubjectService};
use uuid::Uuid;

fn student_fields(key: &str, name: &str, subject_key: &str, grade: &str) -> StudentFields {
    StudentFields {
        student_key: Some(key.to_string()),
        student_name: Some(name.to_string()),
        subject_key: Some(subject_key.to_string()),
        grade: Some(grade.to_string()),
    }
}

#[tokio::test]
async fn create_student_with_passing_grade_resolves_subject() {
    let db = common::test_db().await;
    let subjects = SubjectService::new(&db);
    let students = StudentService::new(&db);

    subjects
        .create(SubjectFields {
            subject_key: Some("MATH101".into()),
            subject_name: Some("Mathematics".into()),
        })
        .await
        .unwrap();

    let alice = students
        .create(student_fields("S1", "Alice", "MATH101", "80"))
        .await
        .unwrap();
    assert_eq!(alice.remarks, "PASS");

    let loaded_subjects = subjects.list().await.unwrap();
    assert_eq!(resolve_subject_name(&alice.subject_key, &loaded_subjects), "Mathematics");
}

#[tokio::test]
async fn grade_update_recomputes_remarks() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let bob = students
        .create(student_fields("S2", "Bob", "MATH101", "60"))
        .await
        .unwrap();
    assert_eq!(bob.remarks, "FAIL");

    let updated = students
        .update(
            bob.student_id,
            StudentFields {
                grade: Some("90".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.grade, "90");
    assert_eq!(updated.remarks, "PASS");
    assert_eq!(updated.student_name, "Bob");
}

#[tokio::test]
async fn update_without_grade_keeps_remarks() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let bob = students
        .create(student_fields("S2", "Bob", "MATH101", "60"))
        .await
        .unwrap();

    let renamed = students
        .update(
            bob.student_id,
            StudentFields {
                student_name: Some("Robert".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.student_name, "Robert");
    assert_eq!(renamed.grade, "60");
    assert_eq!(renamed.remarks, "FAIL");
}

#[tokio::test]
async fn create_then_list_contains_exactly_one_match() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let created = students
        .create(student_fields("S1", "Alice", "MATH101", "80"))
        .await
        .unwrap();

    let listed = students.list().await.unwrap();
    let matches: Vec<_> = listed
        .iter()
        .filter(|s| {
            s.student_key == "S1"
                && s.student_name == "Alice"
                && s.subject_key == "MATH101"
                && s.grade == "80"
        })
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].student_id, created.student_id);
    assert_eq!(matches[0].remarks, "PASS");
}

#[tokio::test]
async fn repeated_identical_update_is_idempotent() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let created = students
        .create(student_fields("S1", "Alice", "MATH101", "70"))
        .await
        .unwrap();

    let fields = student_fields("S1", "Alice Smith", "CS101", "88");
    let first = students.update(created.student_id, fields.clone()).await.unwrap();
    let second = students.update(created.student_id, fields).await.unwrap();

    assert_eq!(first.student_id, second.student_id);
    assert_eq!(first.student_key, second.student_key);
    assert_eq!(first.student_name, second.student_name);
    assert_eq!(first.subject_key, second.subject_key);
    assert_eq!(first.grade, second.grade);
    assert_eq!(first.remarks, second.remarks);
    assert_eq!(first.created_at, second.created_at);

    let stored = students.get(created.student_id).await.unwrap();
    assert_eq!(stored.remarks, "PASS");
    assert_eq!(stored.student_name, "Alice Smith");
}

#[tokio::test]
async fn delete_removes_record_and_second_delete_is_not_found() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let keep = students
        .create(student_fields("S1", "Alice", "MATH101", "80"))
        .await
        .unwrap();
    let gone = students
        .create(student_fields("S2", "Bob", "MATH101", "60"))
        .await
        .unwrap();

    students.delete(gone.student_id).await.unwrap();

    let ids: Vec<Uuid> = students
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.student_id)
        .collect();
    assert_eq!(ids, vec![keep.student_id]);

    let err = students.delete(gone.student_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Student")));
}

#[tokio::test]
async fn missing_field_is_rejected_and_nothing_persisted() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let mut fields = student_fields("S1", "Alice", "MATH101", "80");
    fields.subject_key = None;

    let err = students.create(fields).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("Subject_key"));

    let err = students
        .create(student_fields("S1", "  ", "MATH101", "80"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(students.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_grade_is_rejected() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let err = students
        .create(student_fields("S1", "Alice", "MATH101", "eighty"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let created = students
        .create(student_fields("S1", "Alice", "MATH101", "80"))
        .await
        .unwrap();
    let err = students
        .update(
            created.student_id,
            StudentFields {
                grade: Some("n/a".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let stored = students.get(created.student_id).await.unwrap();
    assert_eq!(stored.grade, "80");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let missing = Uuid::new_v4();
    assert!(matches!(
        students.get(missing).await.unwrap_err(),
        AppError::NotFound("Student")
    ));
    assert!(matches!(
        students
            .update(missing, student_fields("S1", "Alice", "MATH101", "80"))
            .await
            .unwrap_err(),
        AppError::NotFound("Student")
    ));
}

#[tokio::test]
async fn student_may_reference_unknown_subject() {
    let db = common::test_db().await;
    let students = StudentService::new(&db);

    let student = students
        .create(student_fields("S9", "Dana", "NOPE404", "75"))
        .await
        .unwrap();
    assert_eq!(student.remarks, "PASS");

    let subjects = SubjectService::new(&db).list().await.unwrap();
    assert_eq!(resolve_subject_name(&student.subject_key, &subjects), "NOPE404");
}
