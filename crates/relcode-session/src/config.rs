/// Controls answer-editing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// When true, marking an option `Core` demotes any other `Core` option
    /// of the same question to `Accept`.
    pub single_core: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { single_core: true }
    }
}
