//! Configuration for a table of play.

/// Controls where narration goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Print every narration line to stdout as it happens.
    pub echo: bool,
    /// Keep every narration line in the table's chronicle.
    pub record: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            echo: true,
            record: true,
        }
    }
}

impl TableConfig {
    /// A config that records narration without printing it.
    pub fn quiet() -> Self {
        Self::default().with_echo(false)
    }

    /// Set whether narration is printed to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Set whether narration is kept in the chronicle.
    pub fn with_record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }
}
