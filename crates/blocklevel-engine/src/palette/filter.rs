use crate::catalog::TierCatalog;
use crate::tier::Tier;

use super::normalize::tidy_separators;
use super::scan::{ElementKind, scan};

/// Removes blocks a tier is not allowed to see from a palette description.
///
/// Never fails: malformed input passes through unchanged and a category with
/// nothing to show collapses to its bare wrapper.
#[derive(Debug, Clone, Copy)]
pub struct PaletteFilter<'c> {
    catalog: &'c TierCatalog,
}

impl<'c> PaletteFilter<'c> {
    pub fn new(catalog: &'c TierCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c TierCatalog {
        self.catalog
    }

    /// Filters one category's palette text for the named tier.
    ///
    /// `None`, an empty name, or the top tier return `text` unchanged. An
    /// unknown tier name allows nothing.
    pub fn filter(&self, text: &str, category: &str, level: Option<&str>) -> String {
        let level = match level {
            None | Some("") => return text.to_string(),
            Some(level) if level == Tier::MAX.as_str() => return text.to_string(),
            Some(level) => level,
        };

        let palette = match scan(text) {
            Ok(palette) => palette,
            Err(err) => {
                log::debug!("Leaving {category} palette unfiltered: {err}");
                return text.to_string();
            }
        };

        let allowed = self.catalog.allowed_blocks(level);
        let Some(permitted) = allowed.category(category).filter(|set| !set.is_empty()) else {
            log::debug!("No {category} blocks allowed at {level:?}");
            return palette.render_empty();
        };

        let kept: Vec<_> = palette
            .elements
            .iter()
            .copied()
            .filter(|element| match element.kind {
                ElementKind::Block { block_type } => {
                    block_type.is_some_and(|t| permitted.contains(t))
                }
                ElementKind::Separator | ElementKind::Other => true,
            })
            .collect();

        if !kept.iter().any(|element| element.is_block()) {
            log::debug!("Every {category} block filtered out at {level:?}");
            return palette.render_empty();
        }

        palette.render(&tidy_separators(kept))
    }

    /// Typed convenience over [`PaletteFilter::filter`].
    pub fn filter_tier(&self, text: &str, category: &str, tier: Option<Tier>) -> String {
        self.filter(text, category, tier.map(Tier::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> TierCatalog {
        TierCatalog::from_toml_str(
            r#"
[explorer]
motion = ["motion_movesteps", "motion_turnright"]

[creator]
motion = ["motion_goto"]
"#,
        )
        .unwrap()
    }

    const MOTION: &str = r#"<category name="Motion" id="motion">
    <block type="motion_movesteps">
        <value name="STEPS">
            <shadow type="math_number">
                <field name="NUM">10</field>
            </shadow>
        </value>
    </block>
    <block type="motion_turnright"/>
    <sep gap="36"/>
    <block type="motion_goto">
        <value name="TO">
            <shadow type="motion_goto_menu">
            </shadow>
        </value>
    </block>
    <sep gap="36"/>
</category>"#;

    #[test]
    fn removes_disallowed_blocks() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let out = filter.filter(MOTION, "motion", Some("explorer"));

        let expected = r#"<category name="Motion" id="motion">
    <block type="motion_movesteps">
        <value name="STEPS">
            <shadow type="math_number">
                <field name="NUM">10</field>
            </shadow>
        </value>
    </block>
    <block type="motion_turnright"/>
    <sep gap="36"/>
</category>"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn keeps_everything_allowed() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        assert_eq!(filter.filter(MOTION, "motion", Some("creator")), MOTION);
    }

    #[test]
    fn passes_through_without_level_or_at_top_tier() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let messy = "  <category>\n<sep/><sep/>\n</category>  ";
        assert_eq!(filter.filter(messy, "motion", None), messy);
        assert_eq!(filter.filter(messy, "motion", Some("")), messy);
        assert_eq!(filter.filter(messy, "motion", Some("studio")), messy);
        assert_eq!(filter.filter_tier(messy, "motion", Some(Tier::Studio)), messy);
    }

    #[test]
    fn unknown_level_empties_category() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        assert_eq!(
            filter.filter(MOTION, "motion", Some("wizard")),
            "<category name=\"Motion\" id=\"motion\">\n</category>"
        );
    }

    #[test]
    fn category_without_entries_is_emptied() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let sound = "<category id=\"sound\">\n  <block type=\"sound_play\"/>\n  </category>\n";
        assert_eq!(
            filter.filter(sound, "sound", Some("creator")),
            "<category id=\"sound\">\n  </category>\n"
        );
    }

    #[test]
    fn malformed_palette_passes_through() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let broken = "<category><block type=\"motion_goto\"></category>";
        assert_eq!(filter.filter(broken, "motion", Some("explorer")), broken);
    }

    #[test]
    fn comments_do_not_disable_filtering() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let input = "<category id=\"motion\">\n    <!-- movement -->\n    <block type=\"motion_movesteps\"/>\n    <block type=\"motion_goto\"/>\n</category>";

        assert_eq!(
            filter.filter(input, "motion", Some("explorer")),
            "<category id=\"motion\">\n    <!-- movement -->\n    <block type=\"motion_movesteps\"/>\n    <sep gap=\"36\"/>\n</category>"
        );
    }

    #[test]
    fn labels_only_result_collapses_to_empty() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let input = "<category>\n<label text=\"x\"/>\n<block type=\"motion_goto\"/>\n<sep/>\n</category>";
        assert_eq!(
            filter.filter(input, "motion", Some("explorer")),
            "<category>\n</category>"
        );
    }

    #[test]
    fn untyped_and_foreign_blocks_are_dropped() {
        let catalog = catalog();
        let filter = PaletteFilter::new(&catalog);
        let input = "<category>\n<block id=\"no_type\"/>\n<block type=\"looks_say\"/>\n<block type=\"motion_turnright\"/>\n</category>";
        assert_eq!(
            filter.filter(input, "motion", Some("explorer")),
            "<category>\n<block type=\"motion_turnright\"/>\n<sep gap=\"36\"/>\n</category>"
        );
    }
}
