//! The employee directory.
//!
//! This module provides the in-memory store of employee records along with
//! search, filter, sort and aggregate queries over it.

pub mod shared;

use std::collections::btree_map::Values;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::Serialize;
use tracing::{debug, info};

use crate::employee::Employee;
use crate::error::{Error, Result};
use crate::update::EmployeeUpdate;

pub use shared::SharedDirectory;

/// In-memory store of employee records keyed by identifier.
///
/// Provides:
/// - Insertion and removal keyed by a unique identifier
/// - Typed and by-name field updates
/// - Case-insensitive search, range filters and arbitrary predicates
/// - Sorted views and aggregate queries
///
/// Records are held in identifier order. Every list-returning query hands
/// back owned copies, so callers can only change stored records through
/// [`Directory::update`], [`Directory::update_field`] and
/// [`Directory::give_raise`].
#[derive(Debug, Clone)]
pub struct Directory<Id> {
    employees: BTreeMap<Id, Employee<Id>>,
}

impl<Id> Default for Directory<Id> {
    fn default() -> Self {
        Self {
            employees: BTreeMap::new(),
        }
    }
}

impl<Id: Ord + Clone + Debug> Directory<Id> {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an employee.
    ///
    /// Returns `false`, leaving the stored record untouched, if an employee
    /// with the same identifier already exists.
    pub fn insert(&mut self, employee: Employee<Id>) -> bool {
        if self.employees.contains_key(&employee.id) {
            debug!("Rejecting duplicate employee id {:?}", employee.id);
            return false;
        }
        debug!("Adding employee {:?} ({})", employee.id, employee.name);
        self.employees.insert(employee.id.clone(), employee);
        true
    }

    /// Remove the employee with the given identifier.
    ///
    /// Returns `true` if an employee was removed, `false` if not found.
    pub fn remove(&mut self, id: &Id) -> bool {
        let removed = self.employees.remove(id).is_some();
        if removed {
            debug!("Removed employee {:?}", id);
        }
        removed
    }

    /// Apply a typed update to one employee.
    ///
    /// Returns `false` if no employee has the given identifier.
    pub fn update(&mut self, id: &Id, update: EmployeeUpdate) -> bool {
        let Some(employee) = self.employees.get_mut(id) else {
            return false;
        };
        debug!("Updating {} of employee {:?}", update.field(), id);
        update.apply(employee);
        true
    }

    /// Update one field from its name and a textual value.
    ///
    /// The field name is matched case-insensitively. Nothing is changed on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the identifier is absent,
    /// [`Error::UnknownField`] if the field name is not recognized, or
    /// [`Error::TypeMismatch`] if the value does not fit the field.
    pub fn update_field(&mut self, id: &Id, field: &str, value: &str) -> Result<()> {
        if !self.employees.contains_key(id) {
            return Err(Error::not_found(id));
        }
        let update = EmployeeUpdate::parse(field, value)?;
        self.update(id, update);
        Ok(())
    }

    /// Get an employee by identifier.
    #[must_use]
    pub fn get(&self, id: &Id) -> Option<&Employee<Id>> {
        self.employees.get(id)
    }

    /// Check whether an identifier is present.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.employees.contains_key(id)
    }

    /// Number of employees stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check if the directory holds no employees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate over stored employees in identifier order.
    pub fn iter(&self) -> Values<'_, Id, Employee<Id>> {
        self.employees.values()
    }

    /// Largest identifier currently stored.
    #[must_use]
    pub fn max_id(&self) -> Option<&Id> {
        self.employees.keys().next_back()
    }

    /// Copies of all employees, in identifier order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Employee<Id>> {
        self.employees.values().cloned().collect()
    }

    /// Employees matching an arbitrary predicate, in identifier order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Employee<Id>>
    where
        P: Fn(&Employee<Id>) -> bool,
    {
        self.employees
            .values()
            .filter(|employee| predicate(employee))
            .cloned()
            .collect()
    }

    /// Employees whose department equals `department`, ignoring case.
    #[must_use]
    pub fn search_by_department(&self, department: &str) -> Vec<Employee<Id>> {
        self.filter(|employee| employee.in_department(department))
    }

    /// Employees whose name contains `fragment`, ignoring case.
    #[must_use]
    pub fn search_by_name(&self, fragment: &str) -> Vec<Employee<Id>> {
        self.filter(|employee| employee.name_contains(fragment))
    }

    /// Employees rated at least `min_rating`.
    #[must_use]
    pub fn filter_by_min_rating(&self, min_rating: f64) -> Vec<Employee<Id>> {
        self.filter(|employee| employee.performance_rating >= min_rating)
    }

    /// Employees with salary in `[min_salary, max_salary]`.
    #[must_use]
    pub fn filter_by_salary_range(&self, min_salary: f64, max_salary: f64) -> Vec<Employee<Id>> {
        self.filter(|employee| employee.salary >= min_salary && employee.salary <= max_salary)
    }

    /// All employees, highest salary first. Ties go to the lower id.
    #[must_use]
    pub fn sort_by_salary(&self) -> Vec<Employee<Id>> {
        let mut sorted = self.list_all();
        sorted.sort_by(salary_desc);
        sorted
    }

    /// All employees, best rating first. Ties go to the lower id.
    #[must_use]
    pub fn sort_by_performance(&self) -> Vec<Employee<Id>> {
        let mut sorted = self.list_all();
        sorted.sort_by(|a, b| {
            b.performance_rating
                .total_cmp(&a.performance_rating)
                .then_with(|| a.id.cmp(&b.id))
        });
        sorted
    }

    /// All employees in natural order: most experienced first.
    #[must_use]
    pub fn sort_by_experience(&self) -> Vec<Employee<Id>> {
        let mut sorted = self.list_all();
        sorted.sort_by(Employee::natural_cmp);
        sorted
    }

    /// The `n` highest-paid employees.
    ///
    /// Returns everyone if `n` exceeds the number stored, and nothing if
    /// `n` is zero.
    #[must_use]
    pub fn top_paid(&self, n: usize) -> Vec<Employee<Id>> {
        let mut sorted = self.sort_by_salary();
        sorted.truncate(n);
        sorted
    }

    /// Raise the salary of every employee rated at least `min_rating` by
    /// `percent` percent.
    ///
    /// Returns the number of employees who received the raise.
    pub fn give_raise(&mut self, min_rating: f64, percent: f64) -> usize {
        let factor = 1.0 + percent / 100.0;
        let mut count = 0;
        for employee in self.employees.values_mut() {
            if employee.performance_rating >= min_rating {
                employee.salary *= factor;
                count += 1;
            }
        }
        info!(
            "Gave a {}% raise to {} employees rated >= {}",
            percent, count, min_rating
        );
        count
    }

    /// Mean salary of a department (matched ignoring case).
    ///
    /// Returns `0.0` when the department has no employees.
    #[must_use]
    pub fn average_salary_by_department(&self, department: &str) -> f64 {
        let salaries: Vec<f64> = self
            .employees
            .values()
            .filter(|employee| employee.in_department(department))
            .map(|employee| employee.salary)
            .collect();
        mean(&salaries).unwrap_or(0.0)
    }

    /// Distinct department names, sorted.
    ///
    /// Names that differ only in case are reported once, using the first
    /// spelling met in identifier order.
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut departments: Vec<String> = self
            .employees
            .values()
            .filter(|employee| seen.insert(employee.department.to_lowercase()))
            .map(|employee| employee.department.clone())
            .collect();
        departments.sort_by_key(|name| name.to_lowercase());
        departments
    }

    /// Summary statistics over the whole directory.
    #[must_use]
    pub fn stats(&self) -> DirectoryStats {
        let salaries: Vec<f64> = self.employees.values().map(|e| e.salary).collect();
        let ratings: Vec<f64> = self
            .employees
            .values()
            .map(|e| e.performance_rating)
            .collect();

        DirectoryStats {
            total_employees: self.employees.len(),
            active_employees: self.employees.values().filter(|e| e.active).count(),
            departments: self.departments().len(),
            total_payroll: salaries.iter().sum(),
            average_salary: mean(&salaries).unwrap_or(0.0),
            average_rating: mean(&ratings).unwrap_or(0.0),
        }
    }
}

impl<Id: Ord + Clone + Debug> Extend<Employee<Id>> for Directory<Id> {
    /// Inserts each employee, skipping identifiers already present.
    fn extend<T: IntoIterator<Item = Employee<Id>>>(&mut self, iter: T) {
        for employee in iter {
            self.insert(employee);
        }
    }
}

impl<Id: Ord + Clone + Debug> FromIterator<Employee<Id>> for Directory<Id> {
    fn from_iter<T: IntoIterator<Item = Employee<Id>>>(iter: T) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl<'a, Id> IntoIterator for &'a Directory<Id> {
    type Item = &'a Employee<Id>;
    type IntoIter = Values<'a, Id, Employee<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.values()
    }
}

/// Summary statistics about a directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryStats {
    /// Number of employees stored.
    pub total_employees: usize,
    /// Number of employees flagged active.
    pub active_employees: usize,
    /// Number of distinct departments (ignoring case).
    pub departments: usize,
    /// Sum of all salaries.
    pub total_payroll: f64,
    /// Mean salary, or 0 when empty.
    pub average_salary: f64,
    /// Mean performance rating, or 0 when empty.
    pub average_rating: f64,
}

fn salary_desc<Id: Ord>(a: &Employee<Id>, b: &Employee<Id>) -> std::cmp::Ordering {
    b.salary.total_cmp(&a.salary).then_with(|| a.id.cmp(&b.id))
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
