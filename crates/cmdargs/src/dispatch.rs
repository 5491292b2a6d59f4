use std::collections::HashMap;

use crate::{Command, Error, Exit, Reporter, Usage};

/// The selected command and its resolved values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
    name: Box<str>,
    // short names in declaration order
    order: Vec<Box<str>>,
    values: HashMap<Box<str>, Box<str>>,
}

impl std::ops::Index<&str> for Dispatched {
    type Output = str;
    fn index(&self, index: &str) -> &Self::Output {
        &self.values[index]
    }
}

impl Dispatched {
    pub fn name(&self) -> &str {
        &*self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| &**s)
    }

    /// Resolved values in the order the command declared its arguments
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .filter_map(move |k| self.values.get(k).map(|v| (&**k, &**v)))
    }

    pub fn into_parts(self) -> (Box<str>, HashMap<Box<str>, Box<str>>) {
        (self.name, self.values)
    }
}

/// An ordered registry of commands
#[derive(Default, Clone, Debug)]
pub struct Dispatcher {
    commands: Vec<Command>,
}

impl Dispatcher {
    pub fn with_command(mut self, cmd: Command) -> Self {
        self.add_command(cmd);
        self
    }

    /// Registers a command. When names collide the first registered one wins.
    pub fn add_command(&mut self, cmd: Command) -> &mut Self {
        if self.commands.iter().any(|c| c.name() == cmd.name()) {
            log::warn!("'{}' is already registered, it will never match", cmd.name());
        }
        self.commands.push(cmd);
        self
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn usage<'a>(&'a self, program: &'a str) -> Usage<'a> {
        Usage::new(program, &self.commands)
    }

    /// Selects the command named by `args[1]` and resolves the rest of `args`
    /// against it. `args[0]` is the program name.
    pub fn dispatch<S>(&self, args: &[S]) -> Result<Dispatched, Error>
    where
        S: AsRef<str>,
    {
        let name = match args.get(1) {
            Some(name) => name.as_ref(),
            None => return Err(Error::MissingCommand),
        };

        let cmd = self
            .commands
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;

        log::debug!("dispatching '{}' with {} argument(s)", name, args.len() - 2);

        let values: HashMap<Box<str>, Box<str>> = cmd
            .extract(&args[2..])?
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut order = Vec::<Box<str>>::with_capacity(values.len());
        for arg in cmd.arguments() {
            if !order.iter().any(|k| &**k == arg.short()) {
                order.push(arg.short().into());
            }
        }

        Ok(Dispatched {
            name: cmd.name().into(),
            order,
            values,
        })
    }

    /// Like [`Dispatcher::dispatch`], but failures go through `reporter`
    pub fn dispatch_with<S, R>(&self, args: &[S], reporter: &R) -> Result<Dispatched, R::Output>
    where
        S: AsRef<str>,
        R: Reporter,
    {
        self.dispatch(args).map_err(|err| {
            log::debug!("cannot dispatch: {}", err);
            let program = args.first().map(|s| s.as_ref()).unwrap_or_default();
            reporter.report(err, self.usage(program))
        })
    }

    /// Dispatches, or prints the error with the usage and exits the process
    pub fn run<S>(&self, args: &[S]) -> Dispatched
    where
        S: AsRef<str>,
    {
        match self.dispatch_with(args, &Exit) {
            Ok(dispatched) => dispatched,
            Err(never) => match never {},
        }
    }
}
