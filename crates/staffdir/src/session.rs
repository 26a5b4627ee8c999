//! Command execution against one directory.
//!
//! A [`Session`] owns the directory the CLI works on and assigns ids to
//! employees added without one.

use tracing::{debug, info};

use crate::cli::{AddArgs, DirectoryCommand, FilterCommand, SearchCommand, SortKey};
use crate::config::DirectoryConfig;
use crate::directory::{Directory, DirectoryStats};
use crate::employee::Employee;
use crate::error::{Error, Result};
use crate::seed;

/// The result of one executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A list of employees.
    Records(Vec<Employee<u32>>),
    /// A single employee.
    Record(Employee<u32>),
    /// A bulk raise and the directory afterwards.
    Raised {
        /// Number of employees who received the raise.
        count: usize,
        /// All employees after the raise.
        employees: Vec<Employee<u32>>,
    },
    /// A count.
    Count(usize),
    /// A department's average salary.
    Average {
        /// Department as requested.
        department: String,
        /// Mean salary, 0 when the department is empty.
        salary: f64,
    },
    /// Department names.
    Departments(Vec<String>),
    /// Directory statistics.
    Stats(DirectoryStats),
    /// A confirmation message.
    Message(String),
}

/// A directory plus the next id to hand out.
#[derive(Debug, Clone)]
pub struct Session {
    directory: Directory<u32>,
    next_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Directory::new())
    }
}

impl Session {
    /// Start a session over an existing directory.
    #[must_use]
    pub fn new(directory: Directory<u32>) -> Self {
        let next_id = directory.max_id().map_or(1, |max| max.saturating_add(1));
        Self { directory, next_id }
    }

    /// Build the initial directory described by the configuration.
    ///
    /// Sample employees are inserted first, then the seed file; seed
    /// records whose id is already taken are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be read or parsed.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self> {
        let mut directory = Directory::new();
        if config.sample_data {
            let added = seed::populate(&mut directory, seed::sample_employees());
            debug!("Loaded {} sample employees", added);
        }
        if let Some(path) = &config.seed_path {
            let employees = seed::load_seed_file(path)?;
            let added = seed::populate(&mut directory, employees);
            info!("Imported {} employees from {}", added, path.display());
        }
        Ok(Self::new(directory))
    }

    /// The directory this session works on.
    #[must_use]
    pub fn directory(&self) -> &Directory<u32> {
        &self.directory
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Returns an error when the command names an absent id, adds a
    /// duplicate id, or updates a field with an unknown name or a badly
    /// typed value. The directory is unchanged in every error case.
    pub fn execute(&mut self, command: DirectoryCommand) -> Result<Outcome> {
        let dir = &mut self.directory;
        let outcome = match command {
            DirectoryCommand::List => Outcome::Records(dir.list_all()),
            DirectoryCommand::Show { id } => Outcome::Record(
                dir.get(&id)
                    .cloned()
                    .ok_or_else(|| Error::not_found(id))?,
            ),
            DirectoryCommand::Count => Outcome::Count(dir.len()),
            DirectoryCommand::Departments => Outcome::Departments(dir.departments()),
            DirectoryCommand::Stats => Outcome::Stats(dir.stats()),
            DirectoryCommand::Search(SearchCommand::Name { text }) => {
                Outcome::Records(dir.search_by_name(&text))
            }
            DirectoryCommand::Search(SearchCommand::Department { text }) => {
                Outcome::Records(dir.search_by_department(&text))
            }
            DirectoryCommand::Filter(filter) => Outcome::Records(match filter {
                FilterCommand::Rating { min } => dir.filter_by_min_rating(min),
                FilterCommand::Salary { min, max } => dir.filter_by_salary_range(min, max),
                FilterCommand::Experience { min_years } => {
                    dir.filter(|e| e.years_of_experience >= min_years)
                }
                FilterCommand::Active => dir.filter(|e| e.active),
                FilterCommand::Inactive => dir.filter(|e| !e.active),
            }),
            DirectoryCommand::Sort { key } => Outcome::Records(match key {
                SortKey::Salary => dir.sort_by_salary(),
                SortKey::Performance => dir.sort_by_performance(),
                SortKey::Experience => dir.sort_by_experience(),
            }),
            DirectoryCommand::Top { n } => Outcome::Records(dir.top_paid(n)),
            DirectoryCommand::Average { department } => Outcome::Average {
                salary: dir.average_salary_by_department(&department),
                department,
            },
            DirectoryCommand::Raise(args) => {
                let count = dir.give_raise(args.min_rating, args.percent);
                Outcome::Raised {
                    count,
                    employees: dir.list_all(),
                }
            }
            DirectoryCommand::Add(args) => return self.add(args),
            DirectoryCommand::Remove { id } => {
                if !dir.remove(&id) {
                    return Err(Error::not_found(id));
                }
                Outcome::Message(format!("Removed employee {id}"))
            }
            DirectoryCommand::Update { id, field, value } => {
                dir.update_field(&id, &field, &value)?;
                Outcome::Record(dir.get(&id).cloned().ok_or_else(|| Error::not_found(id))?)
            }
        };
        Ok(outcome)
    }

    fn add(&mut self, args: AddArgs) -> Result<Outcome> {
        let id = args.id.unwrap_or(self.next_id);
        let employee = Employee::new(
            id,
            args.name,
            args.department,
            args.salary,
            args.rating,
            args.experience,
        )
        .with_active(!args.inactive);

        if !self.directory.insert(employee.clone()) {
            return Err(Error::duplicate_id(id));
        }
        self.next_id = self.next_id.max(id.saturating_add(1));
        Ok(Outcome::Record(employee))
    }
}
