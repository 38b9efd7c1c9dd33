//! Presentation of pipeline results. Formatting only, no I/O.

use std::fmt;

use crate::data::model::{Employee, ADULT_AGE};

/// The one-line announcement printed for each adult employee.
#[derive(Debug, Clone, Copy)]
pub struct AdultNotice<'a>(pub &'a Employee);

impl fmt::Display for AdultNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        write!(
            f,
            "Employee #{}, {} {} has reached the age of {ADULT_AGE}. Can be served alcohol.",
            e.id, e.first_name, e.last_name
        )
    }
}
