/// A single expected flag of a [`Command`](crate::Command)
///
/// An empty `default` marks the argument as required.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument {
    short: Box<str>,
    long: Box<str>,
    default: Box<str>,
    description: Box<str>,
}

impl Argument {
    pub fn new<S, L, D, H>(short: S, long: L, default: D, description: H) -> Self
    where
        S: Into<Box<str>>,
        L: Into<Box<str>>,
        D: Into<Box<str>>,
        H: Into<Box<str>>,
    {
        Self {
            short: short.into(),
            long: long.into(),
            default: default.into(),
            description: description.into(),
        }
    }

    /// The canonical key used in the resolved values
    pub fn short(&self) -> &str {
        &*self.short
    }

    pub fn long(&self) -> &str {
        &*self.long
    }

    pub fn default_value(&self) -> &str {
        &*self.default
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub fn is_required(&self) -> bool {
        self.default.is_empty()
    }

    pub fn matches(&self, token: &str) -> bool {
        token == &*self.short || token == &*self.long
    }
}
