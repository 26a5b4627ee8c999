//! Core employee record type.
//!
//! This module defines the record stored in the directory and its natural
//! ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One employee's attribute set, keyed by `id`.
///
/// Salary and rating are stored as given; the directory does not validate
/// ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee<Id> {
    /// Unique identifier within a directory.
    pub id: Id,

    /// Full name.
    pub name: String,

    /// Department name, compared case-insensitively by queries.
    pub department: String,

    /// Annual salary.
    pub salary: f64,

    /// Performance rating, conventionally 0 to 5.
    pub performance_rating: f64,

    /// Years of experience.
    pub years_of_experience: u32,

    /// Whether the employee is currently active.
    pub active: bool,
}

impl<Id> Employee<Id> {
    /// Create a new active employee.
    #[must_use]
    pub fn new(
        id: Id,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        years_of_experience: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            performance_rating,
            years_of_experience,
            active: true,
        }
    }

    /// Set the active flag, consuming and returning the record.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Case-insensitive exact match on department.
    #[must_use]
    pub fn in_department(&self, department: &str) -> bool {
        self.department.to_lowercase() == department.to_lowercase()
    }

    /// Case-insensitive substring match on name.
    #[must_use]
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }
}

impl<Id: Ord> Employee<Id> {
    /// Natural ordering: most experienced first, then by ascending id.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        other
            .years_of_experience
            .cmp(&self.years_of_experience)
            .then_with(|| self.id.cmp(&other.id))
    }
}
