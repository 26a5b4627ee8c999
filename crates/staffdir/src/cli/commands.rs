//! CLI command definitions.
//!
//! [`DirectoryCommand`] is shared by the one-shot command line and the
//! interactive shell.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Commands that run against the employee directory.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum DirectoryCommand {
    /// List all employees
    List,

    /// Show one employee
    Show {
        /// Employee id
        id: u32,
    },

    /// Count employees
    Count,

    /// List distinct departments
    Departments,

    /// Show summary statistics
    Stats,

    /// Search employees by name or department
    #[command(subcommand)]
    Search(SearchCommand),

    /// Filter employees
    #[command(subcommand)]
    Filter(FilterCommand),

    /// List all employees in sorted order
    Sort {
        /// Sort key
        #[arg(value_enum)]
        key: SortKey,
    },

    /// Show the highest-paid employees
    Top {
        /// Number of employees to show
        n: usize,
    },

    /// Average salary of a department
    Average {
        /// Department name (case-insensitive)
        department: String,
    },

    /// Give a percentage raise to well-rated employees
    Raise(RaiseArgs),

    /// Add an employee
    Add(AddArgs),

    /// Remove an employee
    Remove {
        /// Employee id
        id: u32,
    },

    /// Update one field of an employee
    Update {
        /// Employee id
        id: u32,

        /// Field name (name, department, salary, performanceRating,
        /// yearsOfExperience, isActive)
        field: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Search commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum SearchCommand {
    /// Employees whose name contains the text (case-insensitive)
    Name {
        /// Text to look for
        text: String,
    },

    /// Employees in a department (case-insensitive exact match)
    Department {
        /// Department name
        text: String,
    },
}

/// Filter commands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum FilterCommand {
    /// Employees rated at least MIN
    Rating {
        /// Minimum rating (inclusive)
        #[arg(allow_negative_numbers = true)]
        min: f64,
    },

    /// Employees with salary between MIN and MAX
    Salary {
        /// Minimum salary (inclusive)
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Maximum salary (inclusive)
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Employees with at least MIN_YEARS of experience
    Experience {
        /// Minimum years of experience (inclusive)
        min_years: u32,
    },

    /// Active employees
    Active,

    /// Inactive employees
    Inactive,
}

/// Sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Highest salary first
    Salary,
    /// Best rating first
    Performance,
    /// Most experienced first
    Experience,
}

/// Raise command arguments.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct RaiseArgs {
    /// Minimum rating to qualify (inclusive)
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub min_rating: f64,

    /// Raise in percent
    #[arg(short, long, allow_negative_numbers = true)]
    pub percent: f64,
}

/// Add command arguments.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct AddArgs {
    /// Explicit id (defaults to one past the largest id)
    #[arg(long)]
    pub id: Option<u32>,

    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Department
    #[arg(short, long)]
    pub department: String,

    /// Salary
    #[arg(short, long)]
    pub salary: f64,

    /// Performance rating
    #[arg(short, long, default_value = "0")]
    pub rating: f64,

    /// Years of experience
    #[arg(short, long, default_value = "0")]
    pub experience: u32,

    /// Add as inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_command_debug() {
        let cmd = DirectoryCommand::Show { id: 3 };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
        assert!(debug_str.contains('3'));
    }

    #[test]
    fn test_sort_key_value_names() {
        let names: Vec<String> = SortKey::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value)
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["salary", "performance", "experience"]);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
