//! Rendering of session outcomes.
//!
//! Every [`Outcome`] can be printed as plain text, an aligned table or
//! pretty JSON.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::directory::DirectoryStats;
use crate::employee::Employee;
use crate::error::Result;
use crate::session::Outcome;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per record
    Plain,
    /// Aligned table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Renders outcomes in a fixed format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    salary_decimals: usize,
}

const HEADERS: [&str; 7] = [
    "ID",
    "NAME",
    "DEPARTMENT",
    "SALARY",
    "RATING",
    "EXPERIENCE",
    "ACTIVE",
];

impl Renderer {
    /// Create a renderer.
    #[must_use]
    pub fn new(format: OutputFormat, salary_decimals: usize) -> Self {
        Self {
            format,
            salary_decimals,
        }
    }

    /// The format this renderer produces.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render an outcome to a string, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, outcome: &Outcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&to_json(outcome))?),
            OutputFormat::Plain => Ok(self.render_text(outcome, false)),
            OutputFormat::Table => Ok(self.render_text(outcome, true)),
        }
    }

    fn render_text(&self, outcome: &Outcome, table: bool) -> String {
        let records = |employees: &[Employee<u32>]| {
            if table {
                self.table(employees)
            } else {
                self.lines(employees)
            }
        };

        match outcome {
            Outcome::Records(employees) => records(employees),
            Outcome::Record(employee) => records(std::slice::from_ref(employee)),
            Outcome::Raised { count, employees } => {
                let noun = if *count == 1 { "employee" } else { "employees" };
                format!("Raised salary of {count} {noun}\n{}", records(employees))
            }
            Outcome::Count(count) => count.to_string(),
            Outcome::Average { department, salary } => {
                format!("{department}: {}", self.salary(*salary))
            }
            Outcome::Departments(departments) => departments.join("\n"),
            Outcome::Stats(stats) => self.stats(stats),
            Outcome::Message(message) => message.clone(),
        }
    }

    fn salary(&self, salary: f64) -> String {
        format!("{salary:.prec$}", prec = self.salary_decimals)
    }

    fn lines(&self, employees: &[Employee<u32>]) -> String {
        if employees.is_empty() {
            return "(no employees)".to_string();
        }
        employees
            .iter()
            .map(|e| {
                format!(
                    "#{} {} ({}) salary={} rating={} experience={}y {}",
                    e.id,
                    e.name,
                    e.department,
                    self.salary(e.salary),
                    e.performance_rating,
                    e.years_of_experience,
                    if e.active { "active" } else { "inactive" },
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn table(&self, employees: &[Employee<u32>]) -> String {
        let rows: Vec<[String; 7]> = employees
            .iter()
            .map(|e| {
                [
                    e.id.to_string(),
                    e.name.clone(),
                    e.department.clone(),
                    self.salary(e.salary),
                    e.performance_rating.to_string(),
                    e.years_of_experience.to_string(),
                    if e.active { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &HEADERS, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &rule, &widths);
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        if rows.is_empty() {
            out.push_str("(no employees)\n");
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn stats(&self, stats: &DirectoryStats) -> String {
        format!(
            "Employees:       {}\nActive:          {}\nDepartments:     {}\nTotal payroll:   {}\nAverage salary:  {}\nAverage rating:  {:.2}",
            stats.total_employees,
            stats.active_employees,
            stats.departments,
            self.salary(stats.total_payroll),
            self.salary(stats.average_salary),
            stats.average_rating,
        )
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn to_json(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Records(employees) => json!(employees),
        Outcome::Record(employee) => json!(employee),
        Outcome::Raised { count, employees } => json!({
            "raised": count,
            "employees": employees,
        }),
        Outcome::Count(count) => json!({ "count": count }),
        Outcome::Average { department, salary } => json!({
            "department": department,
            "average_salary": salary,
        }),
        Outcome::Departments(departments) => json!(departments),
        Outcome::Stats(stats) => json!(stats),
        Outcome::Message(message) => json!({ "message": message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees() -> Vec<Employee<u32>> {
        vec![
            Employee::new(1, "John Doe", "IT", 75_000.0, 4.5, 7),
            Employee::new(12, "Jo", "Finance", 9_000.5, 3.0, 1).with_active(false),
        ]
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_plain_records() {
        let renderer = Renderer::new(OutputFormat::Plain, 2);
        let out = renderer.render(&Outcome::Records(employees())).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "#1 John Doe (IT) salary=75000.00 rating=4.5 experience=7y active"
        );
        assert!(lines[1].ends_with("inactive"));
    }

    #[test]
    fn test_plain_empty() {
        let renderer = Renderer::new(OutputFormat::Plain, 2);
        let out = renderer.render(&Outcome::Records(Vec::new())).unwrap();
        assert_eq!(out, "(no employees)");
    }

    #[test]
    fn test_table_is_aligned() {
        let renderer = Renderer::new(OutputFormat::Table, 0);
        let out = renderer.render(&Outcome::Records(employees())).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  NAME"));
        assert!(lines[1].starts_with("--  --------"));
        let name_col = lines[0].find("DEPARTMENT").unwrap();
        assert_eq!(lines[2].find("IT").unwrap(), name_col);
        assert_eq!(lines[3].find("Finance").unwrap(), name_col);
        assert!(lines[2].contains("75000"));
        assert!(lines[3].ends_with("no"));
    }

    #[test]
    fn test_table_empty() {
        let renderer = Renderer::new(OutputFormat::Table, 2);
        let out = renderer.render(&Outcome::Records(Vec::new())).unwrap();
        assert!(out.ends_with("(no employees)"));
    }

    #[test]
    fn test_salary_decimals() {
        let renderer = Renderer::new(OutputFormat::Plain, 1);
        let out = renderer
            .render(&Outcome::Average {
                department: "IT".to_string(),
                salary: 55_000.0,
            })
            .unwrap();
        assert_eq!(out, "IT: 55000.0");
    }

    #[test]
    fn test_raised_message() {
        let renderer = Renderer::new(OutputFormat::Plain, 2);
        let out = renderer
            .render(&Outcome::Raised {
                count: 1,
                employees: employees(),
            })
            .unwrap();
        assert!(out.starts_with("Raised salary of 1 employee\n"));
    }

    #[test]
    fn test_json_records() {
        let renderer = Renderer::new(OutputFormat::Json, 2);
        let out = renderer.render(&Outcome::Records(employees())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["name"], "John Doe");
        assert_eq!(value[1]["active"], false);
    }

    #[test]
    fn test_json_count_and_message() {
        let renderer = Renderer::new(OutputFormat::Json, 2);

        let count: serde_json::Value =
            serde_json::from_str(&renderer.render(&Outcome::Count(3)).unwrap()).unwrap();
        assert_eq!(count["count"], 3);

        let message: serde_json::Value = serde_json::from_str(
            &renderer
                .render(&Outcome::Message("removed".to_string()))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(message["message"], "removed");
    }

    #[test]
    fn test_departments_plain() {
        let renderer = Renderer::new(OutputFormat::Table, 2);
        let out = renderer
            .render(&Outcome::Departments(vec!["HR".into(), "IT".into()]))
            .unwrap();
        assert_eq!(out, "HR\nIT");
    }

    #[test]
    fn test_output_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        let format: OutputFormat = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(format, OutputFormat::Plain);
    }
}
