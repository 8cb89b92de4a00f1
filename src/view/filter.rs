use std::str::FromStr;

use crate::routes::students::dto::StudentResponse;
use crate::routes::subjects::dto::SubjectResponse;

/// Remarks dropdown on the student page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemarksFilter {
    #[default]
    All,
    Pass,
    Fail,
}

impl RemarksFilter {
    pub fn matches(&self, remarks: &str) -> bool {
        match self {
            RemarksFilter::All => true,
            RemarksFilter::Pass => remarks == "PASS",
            RemarksFilter::Fail => remarks == "FAIL",
        }
    }
}

impl FromStr for RemarksFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(RemarksFilter::All),
            "PASS" => Ok(RemarksFilter::Pass),
            "FAIL" => Ok(RemarksFilter::Fail),
            other => Err(format!("unknown remarks filter: {other}")),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Students whose name contains `search` (case-insensitive) and whose remarks
/// match `remarks`, in their original order.
pub fn filter_students<'a>(
    students: &'a [StudentResponse],
    search: &str,
    remarks: RemarksFilter,
) -> Vec<&'a StudentResponse> {
    students
        .iter()
        .filter(|student| contains_ignore_case(&student.student_name, search))
        .filter(|student| remarks.matches(&student.remarks))
        .collect()
}

/// Subjects whose name contains `search` (case-insensitive).
pub fn filter_subjects<'a>(subjects: &'a [SubjectResponse], search: &str) -> Vec<&'a SubjectResponse> {
    subjects
        .iter()
        .filter(|subject| contains_ignore_case(&subject.subject_name, search))
        .collect()
}
