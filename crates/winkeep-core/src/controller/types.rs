use std::fmt;

/// Result of one presentation-layer command.
///
/// These are reported states, not errors: a missing selection or a saved
/// window that is not currently running are normal outcomes the front end
/// renders, and nothing here aborts the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new catalog entry was created.
    Saved { title: String },
    /// An entry with this title already exists; the catalog is unchanged.
    AlreadyExists { title: String },
    /// A manual apply went through (primary or fallback backend).
    Applied { message: String },
    /// Both backends failed or were unavailable.
    ApplyFailed { message: String },
    /// The entry at the given index was removed.
    Deleted { title: String },
    /// The command was invoked with an index that resolves to nothing.
    NoSelection,
    /// The catalog entry has no live window match right now.
    TargetNotRunning { title: String },
    /// The language setting was persisted.
    LanguageChanged { code: String },
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Saved { title } => write!(f, "saved: {}", title),
            CommandOutcome::AlreadyExists { title } => write!(f, "already saved: {}", title),
            CommandOutcome::Applied { message } => write!(f, "applied: {}", message),
            CommandOutcome::ApplyFailed { message } => write!(f, "apply failed: {}", message),
            CommandOutcome::Deleted { title } => write!(f, "deleted: {}", title),
            CommandOutcome::NoSelection => write!(f, "no selection"),
            CommandOutcome::TargetNotRunning { title } => {
                write!(f, "not running: {}", title)
            }
            CommandOutcome::LanguageChanged { code } => write!(f, "language set to {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let outcome = CommandOutcome::Saved {
            title: "Notepad".to_string(),
        };
        assert_eq!(outcome.to_string(), "saved: Notepad");

        assert_eq!(CommandOutcome::NoSelection.to_string(), "no selection");
    }
}
