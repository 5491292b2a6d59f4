use crate::{Command, Error};

/// Decides what happens when dispatching fails
///
/// The [`Dispatcher`](crate::Dispatcher) hands over the error together with the
/// usage screen of all registered commands.
pub trait Reporter {
    type Output;
    fn report(&self, error: Error, usage: Usage<'_>) -> Self::Output;
}

impl<F, T> Reporter for F
where
    F: Fn(Error, Usage<'_>) -> T,
{
    type Output = T;
    fn report(&self, error: Error, usage: Usage<'_>) -> Self::Output {
        (self)(error, usage)
    }
}

/// Prints the error and the usage to stderr then exits with status 1
#[derive(Copy, Clone, Debug, Default)]
pub struct Exit;

impl Reporter for Exit {
    type Output = std::convert::Infallible;
    fn report(&self, error: Error, usage: Usage<'_>) -> Self::Output {
        eprint!("{}", Render.report(error, usage));
        std::process::exit(1)
    }
}

/// Renders the error and the usage into a string
#[derive(Copy, Clone, Debug, Default)]
pub struct Render;

impl Reporter for Render {
    type Output = String;
    fn report(&self, error: Error, usage: Usage<'_>) -> Self::Output {
        format!("error: {}\n\n{}", error, usage)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Usage<'a> {
    program: &'a str,
    commands: &'a [Command],
}

impl<'a> Usage<'a> {
    const COLUMN: usize = 20;

    pub(crate) const fn new(program: &'a str, commands: &'a [Command]) -> Self {
        Self { program, commands }
    }

    pub const fn program(&self) -> &str {
        self.program
    }
}

impl<'a> std::fmt::Display for Usage<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Usage:")?;
        writeln!(f, "{} [command] <arguments>", self.program)?;
        writeln!(f)?;

        writeln!(f, "Available commands:")?;
        for cmd in self.commands {
            writeln!(f, "{}", cmd.name())?;
            for arg in cmd.arguments() {
                let names = format!("{}/{}", arg.short(), arg.long());
                writeln!(
                    f,
                    "\t{:<width$}{}",
                    names,
                    arg.description(),
                    width = Self::COLUMN
                )?;
            }
        }
        Ok(())
    }
}
