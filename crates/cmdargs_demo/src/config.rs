use anyhow::Context as _;
use std::path::Path;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct CommandConfig {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentConfig>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ArgumentConfig {
    pub short: String,
    pub long: String,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands: vec![CommandConfig {
                name: "test".into(),
                arguments: vec![ArgumentConfig {
                    short: "-t".into(),
                    long: "--test".into(),
                    default: "def".into(),
                    description: "A test parameter".into(),
                }],
            }],
        }
    }
}

impl Config {
    pub const COMMANDS_FILE: &'static str = "commands.toml";
    pub const COMMANDS_ENV: &'static str = "CMDARGS_COMMANDS";

    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(Self::COMMANDS_ENV);
        let path = path.as_deref().unwrap_or(Self::COMMANDS_FILE);
        Self::load_from(path)
    }

    /// Loads the commands from `path`, falling back to the built-in ones when
    /// the file does not exist
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::debug!(
                "'{}' does not exist, using the built-in commands",
                path.display()
            );
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        toml::from_str(&data).with_context(|| format!("cannot parse '{}'", path.display()))
    }

    pub fn dispatcher(&self) -> cmdargs::Dispatcher {
        self.commands
            .iter()
            .map(|cmd| {
                cmd.arguments.iter().fold(
                    cmdargs::Command::new(&*cmd.name),
                    |cmd, arg| {
                        cmd.with_argument(&arg.short, &arg.long, &arg.default, &arg.description)
                    },
                )
            })
            .fold(cmdargs::Dispatcher::default(), |d, cmd| d.with_command(cmd))
    }
}
