//! Concrete operator consumed by the CLI.

/// Stateless operator. Every use-case parses the configuration it is handed,
/// so one instance serves the whole process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
