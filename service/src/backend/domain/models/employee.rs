//! Domain model for a row of the Employee Master Data table.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub job_title: String,
    pub joining_date: String,
    pub shift_days: String,
    pub supervisor: String,
    pub address: String,
}

impl Employee {
    /// Minimal employee with only the identifying fields filled in
    pub fn new(employee_id: &str, name: &str, department: &str) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            department: department.to_string(),
            job_title: String::new(),
            joining_date: String::new(),
            shift_days: String::new(),
            supervisor: String::new(),
            address: String::new(),
        }
    }

    /// Case-insensitive substring match against every field.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        [
            &self.employee_id,
            &self.name,
            &self.phone,
            &self.email,
            &self.department,
            &self.job_title,
            &self.joining_date,
            &self.shift_days,
            &self.supervisor,
            &self.address,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search_any_field() {
        let mut employee = Employee::new("sbx001", "Ada Lovelace", "Engineering");
        employee.supervisor = "Charles Babbage".to_string();

        assert!(employee.matches_search("sbx001"));
        assert!(employee.matches_search("lovelace"));
        assert!(employee.matches_search("babbage"));
        assert!(!employee.matches_search("sales"));
    }
}
