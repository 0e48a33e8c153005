//! Configuration options for roster building.

/// How rows with an empty `eid` are folded into the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyIdPolicy {
    /// Every id-less row becomes its own record and never merges.
    #[default]
    Separate,
    /// Treat the empty string as an ordinary key, so id-less rows merge together.
    Merge,
}

/// Options controlling roster building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterOptions {
    pub empty_id_policy: EmptyIdPolicy,
}

impl RosterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_empty_id_policy(mut self, policy: EmptyIdPolicy) -> Self {
        self.empty_id_policy = policy;
        self
    }
}
