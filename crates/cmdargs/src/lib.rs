mod argument;
pub use argument::Argument;

mod command;
pub use command::{Command, Values};

mod dispatch;
pub use dispatch::{Dispatched, Dispatcher};

mod error;
pub use error::Error;

mod report;
pub use report::{Exit, Render, Reporter, Usage};
