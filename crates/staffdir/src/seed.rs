//! Initial directory contents.
//!
//! A fresh directory can be filled from the built-in sample employees, from
//! a JSON seed file, or both. Seed files are only ever read.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::directory::Directory;
use crate::employee::Employee;
use crate::error::{Error, Result};

/// The seven sample employees a new directory starts with.
#[must_use]
pub fn sample_employees() -> Vec<Employee<u32>> {
    vec![
        Employee::new(1, "John Doe", "IT", 75_000.0, 4.5, 7),
        Employee::new(2, "Jane Smith", "HR", 65_000.0, 4.8, 5),
        Employee::new(3, "Bob Johnson", "Finance", 85_000.0, 4.2, 10),
        Employee::new(4, "Alice Brown", "IT", 70_000.0, 4.7, 6),
        Employee::new(5, "Charlie Davis", "Marketing", 68_000.0, 3.9, 4),
        Employee::new(6, "Eva Wilson", "HR", 62_000.0, 4.1, 3),
        Employee::new(7, "Frank Miller", "Finance", 90_000.0, 4.6, 12),
    ]
}

/// Read employees from a JSON seed file.
///
/// The file holds a JSON array of employee objects.
///
/// # Errors
///
/// Returns [`Error::SeedRead`] if the file cannot be read, or
/// [`Error::Json`] if it is not a valid employee array.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Employee<u32>>> {
    let path = path.as_ref();
    debug!("Reading seed file {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| Error::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let employees: Vec<Employee<u32>> = serde_json::from_str(&contents)?;

    info!(
        "Read {} employees from {}",
        employees.len(),
        path.display()
    );
    Ok(employees)
}

/// Insert employees into a directory, skipping identifiers already present.
///
/// Returns the number of employees inserted.
pub fn populate<Id, I>(directory: &mut Directory<Id>, employees: I) -> usize
where
    Id: Ord + Clone + std::fmt::Debug,
    I: IntoIterator<Item = Employee<Id>>,
{
    let mut inserted = 0;
    for employee in employees {
        let id = employee.id.clone();
        if directory.insert(employee) {
            inserted += 1;
        } else {
            warn!("Skipping seed employee with duplicate id {:?}", id);
        }
    }
    inserted
}
