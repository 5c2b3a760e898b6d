/// Localized default values embedded in the builtin palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxStrings {
    pub stage_selected: String,
    pub hello: String,
    pub hmm: String,
    pub ask_name: String,
    pub apple: String,
    pub banana: String,
    pub letter: String,
}

/// Message ids and English defaults, in field order.
const MESSAGES: [(&str, &str); 7] = [
    ("MOTION_STAGE_SELECTED", "Stage selected: no motion blocks"),
    ("LOOKS_HELLO", "Hello!"),
    ("LOOKS_HMM", "Hmm..."),
    ("SENSING_ASK_TEXT", "What's your name?"),
    ("OPERATORS_JOIN_APPLE", "apple"),
    ("OPERATORS_JOIN_BANANA", "banana"),
    ("OPERATORS_LETTEROF_APPLE", "a"),
];

impl ToolboxStrings {
    /// Builds the strings through `translate(message_id, english_default)`.
    pub fn translated<F>(mut translate: F) -> Self
    where
        F: FnMut(&str, &str) -> String,
    {
        let [stage_selected, hello, hmm, ask_name, apple, banana, letter] =
            MESSAGES.map(|(id, default)| translate(id, default));
        Self {
            stage_selected,
            hello,
            hmm,
            ask_name,
            apple,
            banana,
            letter,
        }
    }
}

impl Default for ToolboxStrings {
    fn default() -> Self {
        Self::translated(|_, default| default.to_string())
    }
}
