//! Parameter-Set Validation
//!
//! Checks a JSON parameter set against a [`ModuleDescription`] for presence
//! and type before any value is interpreted.

use std::fmt;

use serde_json::Value;

use crate::{description::ModuleDescription, ParamError};

/// Validator for one module description
pub struct ParameterValidator<'a> {
    description: &'a ModuleDescription,

    /// Report undescribed parameters as warnings instead of errors
    allow_unknown: bool,
}

impl<'a> ParameterValidator<'a> {
    /// Create a strict validator
    pub fn new(description: &'a ModuleDescription) -> Self {
        Self {
            description,
            allow_unknown: false,
        }
    }

    /// Tolerate parameters the description does not list
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// Validate a parameter set
    pub fn validate(&self, parameters: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(fields) = parameters.as_object() else {
            report.add_error(ValidationIssue {
                issue_type: IssueType::NotAnObject,
                field: None,
                message: format!(
                    "parameter set for {} must be a JSON object",
                    self.description.module_type
                ),
                severity: Severity::Error,
            });
            return report;
        };

        for parameter in &self.description.parameters {
            match fields.get(&parameter.name) {
                Some(value) if !parameter.kind.accepts(value) => {
                    report.add_error(ValidationIssue {
                        issue_type: IssueType::TypeMismatch,
                        field: Some(parameter.name.clone()),
                        message: format!(
                            "{} expects {}, got {}",
                            parameter.name,
                            parameter.kind.name(),
                            value
                        ),
                        severity: Severity::Error,
                    });
                }
                Some(_) => {}
                None if parameter.is_required() => {
                    report.add_error(ValidationIssue {
                        issue_type: IssueType::MissingParameter,
                        field: Some(parameter.name.clone()),
                        message: format!("missing required parameter {}", parameter.name),
                        severity: Severity::Error,
                    });
                }
                None => {
                    report.add_info(ValidationIssue {
                        issue_type: IssueType::DefaultApplied,
                        field: Some(parameter.name.clone()),
                        message: format!("{} not set, using description default", parameter.name),
                        severity: Severity::Info,
                    });
                }
            }
        }

        for name in fields.keys() {
            if self.description.parameter(name).is_some() {
                continue;
            }
            let severity = if self.allow_unknown { Severity::Warning } else { Severity::Error };
            let issue = ValidationIssue {
                issue_type: IssueType::UnknownParameter,
                field: Some(name.clone()),
                message: format!(
                    "{} is not a parameter of {}",
                    name, self.description.module_type
                ),
                severity,
            };
            if self.allow_unknown {
                report.add_warning(issue);
            } else {
                report.add_error(issue);
            }
        }

        report
    }
}

/// Validation report containing all issues found
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationIssue>,

    /// Informational messages
    pub info: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Add info
    pub fn add_info(&mut self, issue: ValidationIssue) {
        self.info.push(issue);
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Fold the errors into a single [`ParamError`]
    pub fn into_result(self) -> Result<(), ParamError> {
        if self.is_valid() {
            return Ok(());
        }
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        Err(ParamError::Validation(messages.join("; ")))
    }
}

/// Individual validation issue
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Parameter that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Parameter set is not a JSON object
    NotAnObject,

    /// Required parameter is missing
    MissingParameter,

    /// Value doesn't match the described type
    TypeMismatch,

    /// Parameter is not in the description
    UnknownParameter,

    /// Missing parameter takes its description default
    DefaultApplied,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}
