//! Readiness report: which variables are set, without revealing values.

use std::fmt;

use serde::Serialize;

use super::{LOG_LEVEL, OTEL_ENDPOINT, REQUIRED_VARS};

const OPTIONAL_VARS: [&str; 2] = [OTEL_ENDPOINT, LOG_LEVEL];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Set,
    /// Present but empty or whitespace-only.
    Empty,
    Unset,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => write!(f, "set"),
            Self::Empty => write!(f, "empty"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableStatus {
    pub name: &'static str,
    pub required: bool,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    ready: bool,
    pub variables: Vec<VariableStatus>,
}

impl Report {
    /// Inspect the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Inspect an arbitrary variable source. Required variables come first.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let inspect = |name: &'static str, required: bool| VariableStatus {
            name,
            required,
            status: match lookup(name) {
                None => Status::Unset,
                Some(v) if v.trim().is_empty() => Status::Empty,
                Some(_) => Status::Set,
            },
        };

        let variables: Vec<_> = REQUIRED_VARS
            .into_iter()
            .map(|name| inspect(name, true))
            .chain(OPTIONAL_VARS.into_iter().map(|name| inspect(name, false)))
            .collect();
        let ready = variables
            .iter()
            .all(|v| !v.required || v.status == Status::Set);

        Self { ready, variables }
    }

    /// Required variables that are not set, in reporting order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.variables
            .iter()
            .filter(|v| v.required && v.status != Status::Set)
            .map(|v| v.name)
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            let kind = if var.required { "required" } else { "optional" };
            writeln!(f, "{:<16}  {:<8}  {}", var.name, kind, var.status)?;
        }
        Ok(())
    }
}
