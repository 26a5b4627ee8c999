//! Typed field updates.
//!
//! Each [`EmployeeUpdate`] variant carries a value of the field's own type,
//! so applying one cannot fail. Callers holding text (the CLI, the shell)
//! go through [`EmployeeUpdate::parse`], which is where unknown field names
//! and badly typed values are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::error::{Error, Result};

/// The six updatable fields of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Full name.
    Name,
    /// Department.
    Department,
    /// Salary.
    Salary,
    /// Performance rating.
    PerformanceRating,
    /// Years of experience.
    YearsOfExperience,
    /// Active flag.
    IsActive,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Department,
        Self::Salary,
        Self::PerformanceRating,
        Self::YearsOfExperience,
        Self::IsActive,
    ];

    /// Canonical field name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Salary => "salary",
            Self::PerformanceRating => "performanceRating",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::IsActive => "isActive",
        }
    }

    /// Description of the value type the field accepts.
    #[must_use]
    pub fn expected(self) -> &'static str {
        match self {
            Self::Name | Self::Department => "text",
            Self::Salary | Self::PerformanceRating => "a number",
            Self::YearsOfExperience => "a non-negative whole number",
            Self::IsActive => "true or false",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Matches case-insensitively; snake_case spellings and the short
    /// forms `rating`, `experience` and `active` are accepted too.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "department" | "dept" => Ok(Self::Department),
            "salary" => Ok(Self::Salary),
            "performancerating" | "performance_rating" | "rating" => Ok(Self::PerformanceRating),
            "yearsofexperience" | "years_of_experience" | "experience" => {
                Ok(Self::YearsOfExperience)
            }
            "isactive" | "is_active" | "active" => Ok(Self::IsActive),
            _ => Err(Error::unknown_field(s)),
        }
    }
}

/// A single, correctly typed change to one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeUpdate {
    /// Replace the name.
    SetName(String),
    /// Replace the department.
    SetDepartment(String),
    /// Replace the salary.
    SetSalary(f64),
    /// Replace the performance rating.
    SetRating(f64),
    /// Replace the years of experience.
    SetExperience(u32),
    /// Replace the active flag.
    SetActive(bool),
}

impl EmployeeUpdate {
    /// Build a typed update from a field name and a textual value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `field` names no updatable field,
    /// or [`Error::TypeMismatch`] if `value` cannot be read as that field's
    /// type.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let field: Field = field.parse()?;
        Self::for_field(field, value)
    }

    /// Build a typed update for an already resolved field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `value` cannot be read as the
    /// field's type.
    pub fn for_field(field: Field, value: &str) -> Result<Self> {
        let mismatch = || Error::TypeMismatch {
            field: field.as_str(),
            expected: field.expected(),
            value: value.to_string(),
        };
        let trimmed = value.trim();

        let update = match field {
            Field::Name => Self::SetName(value.to_string()),
            Field::Department => Self::SetDepartment(value.to_string()),
            Field::Salary => Self::SetSalary(parse_finite(trimmed).ok_or_else(mismatch)?),
            Field::PerformanceRating => {
                Self::SetRating(parse_finite(trimmed).ok_or_else(mismatch)?)
            }
            Field::YearsOfExperience => {
                Self::SetExperience(trimmed.parse().map_err(|_| mismatch())?)
            }
            Field::IsActive => Self::SetActive(parse_bool(trimmed).ok_or_else(mismatch)?),
        };
        Ok(update)
    }

    /// The field this update targets.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::SetName(_) => Field::Name,
            Self::SetDepartment(_) => Field::Department,
            Self::SetSalary(_) => Field::Salary,
            Self::SetRating(_) => Field::PerformanceRating,
            Self::SetExperience(_) => Field::YearsOfExperience,
            Self::SetActive(_) => Field::IsActive,
        }
    }

    /// Apply this update to a record.
    pub fn apply<Id>(self, employee: &mut Employee<Id>) {
        match self {
            Self::SetName(name) => employee.name = name,
            Self::SetDepartment(department) => employee.department = department,
            Self::SetSalary(salary) => employee.salary = salary,
            Self::SetRating(rating) => employee.performance_rating = rating,
            Self::SetExperience(years) => employee.years_of_experience = years,
            Self::SetActive(active) => employee.active = active,
        }
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
