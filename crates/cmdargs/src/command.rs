use std::collections::HashMap;

use crate::{Argument, Error};

/// Resolved values, keyed by each argument's short name
pub type Values<'a> = HashMap<&'a str, &'a str>;

/// A named set of expected arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    command: Box<str>,
    args: Vec<Argument>,
}

impl Command {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            command: name.into(),
            args: vec![],
        }
    }

    pub fn with_argument(
        mut self,
        short: &str,
        long: &str,
        default: &str,
        description: &str,
    ) -> Self {
        self.add_argument(short, long, default, description);
        self
    }

    /// Appends an argument. An empty `default` makes it required.
    pub fn add_argument(
        &mut self,
        short: &str,
        long: &str,
        default: &str,
        description: &str,
    ) -> &mut Self {
        self.args
            .push(Argument::new(short, long, default, description));
        self
    }

    pub fn name(&self) -> &str {
        &*self.command
    }

    pub fn arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.args.iter()
    }

    /// Resolves every declared argument against `input`, which must not contain
    /// the program or command name.
    ///
    /// Each argument scans all of `input`. A match consumes the following token
    /// as its value, whatever that token looks like.
    pub fn extract<'a, S>(&'a self, input: &'a [S]) -> Result<Values<'a>, Error>
    where
        S: AsRef<str>,
    {
        let mut map = HashMap::with_capacity(self.args.len());

        for arg in &self.args {
            let mut found = None;
            for (pos, token) in input.iter().map(|s| s.as_ref()).enumerate() {
                if !arg.matches(token) {
                    continue;
                }
                if found.replace(pos).is_some() {
                    return Err(Error::DuplicateArgument(token.to_string()));
                }
            }

            let value = match found {
                None if arg.is_required() => {
                    return Err(Error::MissingArgument(arg.short().to_string()))
                }
                None => arg.default_value(),
                Some(pos) => match input.get(pos + 1) {
                    Some(value) => value.as_ref(),
                    None => return Err(Error::MissingValue(input[pos].as_ref().to_string())),
                },
            };

            log::trace!("{}: {} = {}", self.command, arg.short(), value);
            // a repeated short name overwrites the earlier value
            map.insert(arg.short(), value);
        }

        Ok(map)
    }
}
