use crate::api::{Department, NewEmployee};

/// Draft for the add-employee form. `department` holds the raw select value
/// so the placeholder option can stay unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn is_valid(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty())
            && Department::parse(self.department.trim()).is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// None whenever a required field is blank or the department is not one
    /// of the fixed set; an invalid draft never reaches the API.
    pub fn to_request(&self) -> Option<NewEmployee> {
        if !self.is_valid() {
            return None;
        }
        let department = Department::parse(self.department.trim())?;
        Some(NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department,
        })
    }
}
