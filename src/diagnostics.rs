// ABOUTME: Diagnostics accumulator for non-fatal warnings during a fleet command.
// ABOUTME: Collects warnings that shouldn't fail a run but should be shown to the operator.

/// Collects non-fatal warnings during a command.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a command.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Fleet input was unusable and every fleet was selected instead.
    pub fn selection_fallback(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::SelectionFallback,
            message: message.into(),
        }
    }

    /// More credential records than resolved targets.
    pub fn surplus_credentials(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::SurplusCredentials,
            message: message.into(),
        }
    }

    /// All-fleet selection left out the ports of a trailing partial fleet.
    pub fn partial_fleet(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::PartialFleet,
            message: message.into(),
        }
    }

    /// The config action failed but the run continued with other actions.
    pub fn config_skipped(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ConfigSkipped,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Invalid fleet selection replaced by all fleets.
    SelectionFallback,
    /// Credentials left unassigned because targets ran out.
    SurplusCredentials,
    /// Trailing ports not covered by a whole fleet.
    PartialFleet,
    /// Config push skipped (file missing or unreadable).
    ConfigSkipped,
}

impl WarningKind {
    /// Stable label used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::SelectionFallback => "selection_fallback",
            WarningKind::PartialFleet => "partial_fleet",
            WarningKind::SurplusCredentials => "surplus_credentials",
            WarningKind::ConfigSkipped => "config_skipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::selection_fallback("bad fleet list"));
        diag.warn(Warning::surplus_credentials("2 credentials unused"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        assert_eq!(
            Warning::selection_fallback("x").kind,
            WarningKind::SelectionFallback
        );
        assert_eq!(
            Warning::surplus_credentials("x").kind,
            WarningKind::SurplusCredentials
        );
        assert_eq!(Warning::config_skipped("x").kind, WarningKind::ConfigSkipped);
        assert_eq!(Warning::partial_fleet("x").kind, WarningKind::PartialFleet);
    }

    #[test]
    fn kind_labels_are_snake_case() {
        assert_eq!(WarningKind::ConfigSkipped.as_str(), "config_skipped");
        assert_eq!(
            Warning::partial_fleet("x").kind.as_str(),
            "partial_fleet"
        );
    }
}
