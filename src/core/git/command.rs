use std::collections::BTreeMap;
use std::fmt;

/// Boolean option flags handed to a git subcommand, keyed by option name.
pub type Options = BTreeMap<String, bool>;

/// A single git invocation: subcommand name, option flags and positional
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    name: String,
    options: Options,
    args: Vec<String>,
}

impl GitCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
            args: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options.extend(options);
        self
    }

    pub fn option(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.options.insert(key.into(), enabled);
        self
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Renders the argv passed to git, without the binary itself.
    ///
    /// Single character keys become short flags (`-a`), longer keys become
    /// long flags (`--verbose`). Disabled options are left out.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(1 + self.options.len() + self.args.len());
        args.push(self.name.clone());

        for (key, enabled) in &self.options {
            if !enabled {
                continue;
            }
            if key.chars().count() == 1 {
                args.push(format!("-{}", key));
            } else {
                args.push(format!("--{}", key));
            }
        }

        args.extend(self.args.iter().cloned());
        args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.to_args().join(" "))
    }
}
