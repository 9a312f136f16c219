//! Env file parsing.
//!
//! The file is read into a map instead of being exported into the process
//! environment, so sourcing it can never override a value that is already set.

use std::collections::HashMap;
use std::path::Path;

/// Variables read from a dotenv-format file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Reads `KEY=value` assignments from the file at `path`.
    ///
    /// Later assignments to the same key win, as they would when sourcing
    /// the file in a shell.
    ///
    /// # Errors
    ///
    /// Returns [`dotenvy::Error`] if the file cannot be opened or a line
    /// cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, dotenvy::Error> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Ok(Self { vars })
    }

    /// Creates an env file from in-memory pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value assigned to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the file defined no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
