use serde::{Deserialize, Serialize};

/// Colours for one category. `tertiary` doubles as the category's border
/// (`secondaryColour`) in the toolbox markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl CategoryColors {
    fn new(primary: &str, secondary: &str, tertiary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            tertiary: tertiary.to_string(),
        }
    }
}

/// Per-category colours for the toolbox. Missing fields in a config file
/// fall back to the default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub motion: CategoryColors,
    pub looks: CategoryColors,
    pub sounds: CategoryColors,
    pub control: CategoryColors,
    pub event: CategoryColors,
    pub sensing: CategoryColors,
    pub operators: CategoryColors,
    pub data: CategoryColors,
    pub more: CategoryColors,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            motion: CategoryColors::new("#4C97FF", "#4280D7", "#3373CC"),
            looks: CategoryColors::new("#9966FF", "#855CD6", "#774DCB"),
            sounds: CategoryColors::new("#CF63CF", "#C94FC9", "#BD42BD"),
            control: CategoryColors::new("#FFAB19", "#EC9C13", "#CF8B17"),
            event: CategoryColors::new("#FFBF00", "#E6AC00", "#CC9900"),
            sensing: CategoryColors::new("#5CB1D6", "#47A8D1", "#2E8EB8"),
            operators: CategoryColors::new("#59C059", "#46B946", "#389438"),
            data: CategoryColors::new("#FF8C1A", "#FF8000", "#DB6E00"),
            more: CategoryColors::new("#FF6680", "#FF4D6A", "#FF3355"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_theme_keeps_defaults() {
        let json = r##"{"motion": {"primary": "#000000", "secondary": "#111111", "tertiary": "#222222"}}"##;
        let theme: ThemeColors = serde_json::from_str(json).unwrap();

        assert_eq!(theme.motion.primary, "#000000");
        assert_eq!(theme.looks, ThemeColors::default().looks);
    }
}
