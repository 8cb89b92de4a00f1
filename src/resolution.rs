//! Display-time join from a student's subject key to a subject name.

use crate::entities::subject;
use crate::routes::subjects::dto::SubjectResponse;

/// Anything that carries a subject key and its display name.
pub trait SubjectLabel {
    fn subject_key(&self) -> &str;
    fn subject_name(&self) -> &str;
}

impl SubjectLabel for subject::Model {
    fn subject_key(&self) -> &str {
        &self.subject_key
    }

    fn subject_name(&self) -> &str {
        &self.subject_name
    }
}

impl SubjectLabel for SubjectResponse {
    fn subject_key(&self) -> &str {
        &self.subject_key
    }

    fn subject_name(&self) -> &str {
        &self.subject_name
    }
}

/// Returns the name of the first subject whose key matches, or the key itself
/// when none does.
///
/// Subject keys are not unique, so the order of `subjects` decides which name
/// wins. Callers pass subjects in store order.
pub fn resolve_subject_name<'a, S: SubjectLabel>(subject_key: &'a str, subjects: &'a [S]) -> &'a str {
    subjects
        .iter()
        .find(|subject| subject.subject_key() == subject_key)
        .map(|subject| subject.subject_name())
        .unwrap_or(subject_key)
}
