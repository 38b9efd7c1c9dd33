use chrono::NaiveDate;

/// Minimum age, in years, for an employee to count as an adult.
pub const ADULT_AGE: u32 = 21;

// ---------------------------------------------------------------------------
// Employee – one line of the roster
// ---------------------------------------------------------------------------

/// A single employee record, built once by the parser and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Numeric identifier. Expected to be unique per roster, not enforced.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Free-form, not validated.
    pub email: String,
    pub date_hired: NaiveDate,
}

impl Employee {
    /// Whether the employee has reached [`ADULT_AGE`].
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
pub(crate) fn employee(id: i64, age: u32) -> Employee {
    Employee {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        age,
        email: format!("e{id}@example.com"),
        date_hired: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    }
}
