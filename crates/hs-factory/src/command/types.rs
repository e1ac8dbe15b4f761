use std::fmt;
use thiserror::Error;

/// Program plus ordered argument vector, ready for `Command::new`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// `--name value`, skipped when `value` is empty.
    pub fn opt(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.args.push(name.into());
            self.args.push(value.into());
        }
        self
    }

    pub fn flag_if(&mut self, cond: bool, flag: &str) -> &mut Self {
        if cond {
            self.args.push(flag.into());
        }
        self
    }

    pub fn to_vec(&self) -> Vec<String> {
        let mut all = Vec::with_capacity(self.args.len() + 1);
        all.push(self.program.clone());
        all.extend(self.args.iter().cloned());
        all
    }
}

// Space-joined, unquoted: what the user copies out of the command field.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_vec().join(" "))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreflightError {
    #[error("executable not found: '{0}'")]
    MissingExecutable(String),

    #[error("no M3U8 URL given")]
    MissingUrl,
}
