use std::fmt::Display;

use thiserror::Error;

/// A line-tagged diagnostic. Lines are 1-based; for specification errors
/// the line refers to the DFA specification text, otherwise to the source.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidTokenLabel { .. } => "InvalidTokenLabel",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::MissingAssignmentValue { .. } => "MissingAssignmentValue",
            ErrorImpl::InvalidAssignmentValue { .. } => "InvalidAssignmentValue",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidTokenLabel { label } => ErrorTip::Suggestion(format!(
                "`{}` is not a token kind, accepting states must name one of the closed set",
                label
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` used before declaration", variable))
            }
            ErrorImpl::DuplicateDeclaration { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::MissingAssignmentValue { variable } => ErrorTip::Suggestion(format!(
                "Expected a value after `=` for variable `{}`",
                variable
            )),
            ErrorImpl::InvalidAssignmentValue { variable, .. } => ErrorTip::Suggestion(format!(
                "The value assigned to `{}` is not a recognisable literal or identifier",
                variable
            )),
            ErrorImpl::ScopeUnderflow => {
                ErrorTip::Suggestion(String::from("There is no open scope to exit"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid token type {label:?}")]
    InvalidTokenLabel { label: String },
    #[error("undeclared variable {variable:?} used")]
    VariableNotDeclared { variable: String },
    #[error("duplicate declaration of {variable:?}")]
    DuplicateDeclaration { variable: String },
    #[error("missing value after '=' for variable {variable:?}")]
    MissingAssignmentValue { variable: String },
    #[error("invalid value {value:?} assigned to {variable:?}")]
    InvalidAssignmentValue { value: String, variable: String },
    #[error("cannot exit the global scope")]
    ScopeUnderflow,
}

/// Append-only, ordered collection of diagnostics. Nothing is deduplicated
/// and nothing is mutated after append.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn render_report(&self) -> String {
        if self.errors.is_empty() {
            return String::from("No errors found.\n");
        }

        let mut report = String::from("===== Errors Detected =====\n");
        for error in &self.errors {
            report.push_str(&error.to_string());
            report.push('\n');
        }
        report.push_str("==========================\n");
        report
    }

    pub fn print_report(&self) {
        print!("{}", self.render_report());
    }
}
