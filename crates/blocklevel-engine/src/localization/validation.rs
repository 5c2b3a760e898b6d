use serde::Serialize;

use super::Messages;

/// Keys every custom locale file must translate.
pub const REQUIRED_KEYS: [&str; 3] = ["gui.menuBar.settings", "gui.menuBar.file", "gui.menuBar.edit"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a custom locale for missing required keys (errors) and blank
/// values (warnings).
pub fn validate_custom_locale(messages: &Messages) -> ValidationReport {
    let errors = REQUIRED_KEYS
        .iter()
        .filter(|key| messages.get(**key).is_none_or(|value| value.is_empty()))
        .map(|key| format!("Missing required key: {key}"))
        .collect();

    let warnings = messages
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| format!("Empty value for key: {key}"))
        .collect();

    ValidationReport { errors, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(pairs: &[(&str, &str)]) -> Messages {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn complete_locale_is_valid() {
        let report = validate_custom_locale(&messages(&[
            ("gui.menuBar.settings", "Cài đặt"),
            ("gui.menuBar.file", "Tệp"),
            ("gui.menuBar.edit", "Sửa"),
        ]));
        assert!(report.is_valid());
        assert_eq!(report, ValidationReport::default());
    }

    #[test]
    fn missing_and_blank_values_are_reported() {
        let report = validate_custom_locale(&messages(&[
            ("gui.menuBar.settings", "Settings"),
            ("gui.menuBar.file", ""),
            ("gui.extra", "   "),
        ]));

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![
                "Missing required key: gui.menuBar.file",
                "Missing required key: gui.menuBar.edit"
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                "Empty value for key: gui.extra",
                "Empty value for key: gui.menuBar.file"
            ]
        );
    }
}
