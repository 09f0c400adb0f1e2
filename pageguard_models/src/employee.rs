use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::macros::nutype_string;

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize,
))]
pub struct EmployeeId(uuid::Uuid);

nutype_string!(EmployeeName(validate(len_char_min = 1, len_char_max = 64)));
nutype_string!(JobTitle(validate(len_char_min = 1, len_char_max = 128)));

/// One entry of the employee directory served by the sample pageable
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: EmployeeName,
    pub title: JobTitle,
    pub hired_at: DateTime<Utc>,
}
