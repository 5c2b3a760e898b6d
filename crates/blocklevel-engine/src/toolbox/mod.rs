//! # Toolbox Assembly
//!
//! Builds the complete toolbox document handed to the block renderer: every
//! core category's palette, filtered for the selected tier, followed by any
//! extension categories.

mod palettes;
mod strings;
mod theme;

pub use strings::ToolboxStrings;
pub use theme::{CategoryColors, ThemeColors};

use crate::palette::{PaletteFilter, SEPARATOR};
use palettes::PaletteContext;

pub const XML_OPEN: &str = r#"<xml style="display: none">"#;
pub const XML_CLOSE: &str = "</xml>";

/// A category supplied from outside, such as an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryXml {
    pub id: String,
    pub xml: String,
}

impl CategoryXml {
    pub fn new(id: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            xml: xml.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolboxOptions {
    /// Initial setup skips blocks with localized defaults and implies stage mode.
    pub is_initial_setup: bool,
    pub is_stage: bool,
    pub target_id: String,
    pub costume_name: String,
    pub backdrop_name: String,
    pub sound_name: String,
    pub colors: ThemeColors,
    /// Selected tier name, as stored in preferences. `None` disables filtering.
    pub level: Option<String>,
    pub strings: ToolboxStrings,
}

impl Default for ToolboxOptions {
    fn default() -> Self {
        Self {
            is_initial_setup: false,
            is_stage: true,
            target_id: String::new(),
            costume_name: String::new(),
            backdrop_name: String::new(),
            sound_name: String::new(),
            colors: ThemeColors::default(),
            level: None,
            strings: ToolboxStrings::default(),
        }
    }
}

/// Slot id used by supplied categories, and the catalog category key.
#[derive(Debug, Clone, Copy)]
enum CoreCategory {
    Motion,
    Looks,
    Sound,
    Events,
    Control,
    Sensing,
    Operators,
    Variables,
    MyBlocks,
}

impl CoreCategory {
    const ORDER: [CoreCategory; 9] = [
        CoreCategory::Motion,
        CoreCategory::Looks,
        CoreCategory::Sound,
        CoreCategory::Events,
        CoreCategory::Control,
        CoreCategory::Sensing,
        CoreCategory::Operators,
        CoreCategory::Variables,
        CoreCategory::MyBlocks,
    ];

    fn slot_id(self) -> &'static str {
        match self {
            CoreCategory::Motion => "motion",
            CoreCategory::Looks => "looks",
            CoreCategory::Sound => "sound",
            CoreCategory::Events => "event",
            CoreCategory::Control => "control",
            CoreCategory::Sensing => "sensing",
            CoreCategory::Operators => "operators",
            CoreCategory::Variables => "data",
            CoreCategory::MyBlocks => "procedures",
        }
    }

    fn catalog_key(self) -> &'static str {
        match self {
            CoreCategory::Events => "events",
            other => other.slot_id(),
        }
    }

    fn render(self, ctx: &PaletteContext<'_>, colors: &ThemeColors) -> String {
        match self {
            CoreCategory::Motion => palettes::motion(ctx, &colors.motion),
            CoreCategory::Looks => palettes::looks(ctx, &colors.looks),
            CoreCategory::Sound => palettes::sound(ctx, &colors.sounds),
            CoreCategory::Events => palettes::events(ctx, &colors.event),
            CoreCategory::Control => palettes::control(ctx, &colors.control),
            CoreCategory::Sensing => palettes::sensing(ctx, &colors.sensing),
            CoreCategory::Operators => palettes::operators(ctx, &colors.operators),
            CoreCategory::Variables => palettes::variables(&colors.data),
            CoreCategory::MyBlocks => palettes::my_blocks(&colors.more),
        }
    }
}

/// Assembles the toolbox document.
///
/// A supplied category whose id names a core slot replaces the builtin
/// palette as-is; the rest are appended after the core categories in the
/// order given.
pub fn make_toolbox(
    options: &ToolboxOptions,
    categories: &[CategoryXml],
    filter: &PaletteFilter<'_>,
) -> String {
    let costume_name = html_escape::encode_safe(&options.costume_name);
    let backdrop_name = html_escape::encode_safe(&options.backdrop_name);
    let sound_name = html_escape::encode_safe(&options.sound_name);
    let ctx = PaletteContext {
        is_initial_setup: options.is_initial_setup,
        is_stage: options.is_initial_setup || options.is_stage,
        target_id: &options.target_id,
        costume_name: &costume_name,
        backdrop_name: &backdrop_name,
        sound_name: &sound_name,
        strings: &options.strings,
    };
    let level = options.level.as_deref();

    let mut remaining: Vec<&CategoryXml> = categories.iter().collect();
    let mut parts: Vec<String> = vec![XML_OPEN.to_string()];

    for (index, core) in CoreCategory::ORDER.into_iter().enumerate() {
        if index > 0 {
            parts.push(SEPARATOR.to_string());
        }
        let supplied = remaining.iter().position(|c| c.id == core.slot_id());
        let xml = match supplied {
            Some(position) => remaining.remove(position).xml.clone(),
            None => {
                let raw = core.render(&ctx, &options.colors);
                filter.filter(&raw, core.catalog_key(), level)
            }
        };
        parts.push(xml);
    }

    for extension in remaining {
        parts.push(SEPARATOR.to_string());
        parts.push(extension.xml.clone());
    }

    parts.push(XML_CLOSE.to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TierCatalog;
    use crate::palette::scan;
    use pretty_assertions::assert_eq;

    fn toolbox(options: &ToolboxOptions, categories: &[CategoryXml]) -> String {
        let filter = PaletteFilter::new(TierCatalog::builtin());
        make_toolbox(options, categories, &filter)
    }

    fn sprite_options() -> ToolboxOptions {
        ToolboxOptions {
            is_stage: false,
            target_id: "sprite1".into(),
            costume_name: "costume1".into(),
            backdrop_name: "backdrop1".into(),
            sound_name: "Meow".into(),
            ..ToolboxOptions::default()
        }
    }

    fn category_ids(doc: &str) -> Vec<String> {
        crate::palette::lexer::lex(doc)
            .iter()
            .filter(|t| t.tag_name() == Some("category"))
            .filter_map(|t| t.attribute("id").map(str::to_string))
            .collect()
    }

    #[test]
    fn core_categories_in_fixed_order() {
        let doc = toolbox(&sprite_options(), &[]);
        assert!(doc.starts_with(XML_OPEN));
        assert!(doc.ends_with(XML_CLOSE));
        assert_eq!(
            category_ids(&doc),
            vec![
                "motion",
                "looks",
                "sound",
                "events",
                "control",
                "sensing",
                "operators",
                "variables",
                "myBlocks"
            ]
        );
    }

    #[test]
    fn every_builtin_palette_scans_cleanly() {
        for options in [sprite_options(), ToolboxOptions::default()] {
            let ctx = PaletteContext {
                is_initial_setup: false,
                is_stage: options.is_stage,
                target_id: "t",
                costume_name: "c",
                backdrop_name: "b",
                sound_name: "s",
                strings: &options.strings,
            };
            for core in CoreCategory::ORDER {
                let raw = core.render(&ctx, &options.colors);
                assert!(scan(&raw).is_ok(), "{:?} failed to scan", core);
            }
        }
    }

    #[test]
    fn unfiltered_toolbox_keeps_every_block() {
        let doc = toolbox(&sprite_options(), &[]);
        assert!(doc.contains(r#"type="motion_goto""#));
        assert!(doc.contains(r#"custom="VARIABLE""#));
        assert!(doc.contains(r#"id="sprite1_xposition""#));
    }

    #[test]
    fn explorer_toolbox_hides_later_blocks() {
        let options = ToolboxOptions {
            level: Some("explorer".into()),
            ..sprite_options()
        };
        let doc = toolbox(&options, &[]);
        assert!(doc.contains(r#"type="motion_movesteps""#));
        assert!(!doc.contains(r#"type="motion_goto""#));
        assert!(!doc.contains(r#"type="operator_join""#));
        assert!(!doc.contains(r#"type="sensing_askandwait""#));
    }

    #[test]
    fn stage_shows_label_instead_of_motion() {
        let doc = toolbox(&ToolboxOptions::default(), &[]);
        assert!(doc.contains("Stage selected: no motion blocks"));
        assert!(!doc.contains(r#"type="motion_movesteps""#));
        assert!(doc.contains(r#"type="event_whenstageclicked""#));
    }

    #[test]
    fn initial_setup_forces_stage_and_skips_localized_defaults() {
        let options = ToolboxOptions {
            is_initial_setup: true,
            ..sprite_options()
        };
        let doc = toolbox(&options, &[]);
        assert!(!doc.contains(r#"type="motion_movesteps""#));
        assert!(!doc.contains("sensing_askandwait"));
        assert!(!doc.contains("operator_join"));
    }

    #[test]
    fn names_are_escaped() {
        let options = ToolboxOptions {
            sound_name: "<Pop & Fizz>".into(),
            ..sprite_options()
        };
        let doc = toolbox(&options, &[]);
        assert!(doc.contains("&lt;Pop &amp; Fizz&gt;"));
        assert!(!doc.contains("<Pop & Fizz>"));
    }

    #[test]
    fn supplied_categories_replace_core_or_append() {
        let categories = [
            CategoryXml::new("pen", "<category id=\"pen\"></category>"),
            CategoryXml::new("sound", "<category id=\"custom-sound\"></category>"),
        ];
        let options = ToolboxOptions {
            level: Some("explorer".into()),
            ..sprite_options()
        };
        let doc = toolbox(&options, &categories);
        let ids = category_ids(&doc);

        assert_eq!(ids[2], "custom-sound");
        assert_eq!(ids.last().map(String::as_str), Some("pen"));
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn categories_are_separated_by_gaps() {
        let doc = toolbox(&sprite_options(), &[]);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], XML_OPEN);
        let gaps = lines.iter().filter(|l| **l == SEPARATOR).count();
        assert_eq!(gaps, 8);
    }
}
