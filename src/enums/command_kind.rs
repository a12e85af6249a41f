use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    #[serde(rename = "build")]
    Build,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "run")]
    Run,
    #[serde(rename = "package")]
    Package,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Build => "build",
            CommandKind::Test => "test",
            CommandKind::Run => "run",
            CommandKind::Package => "package",
            CommandKind::Unknown => "unknown",
        }
    }

    /// First letter of the command name, used by the compact and minimal renderers.
    pub fn short(&self) -> &'static str {
        &self.as_str()[..1]
    }
}
