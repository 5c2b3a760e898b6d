use crate::tier::Tier;

/// Recommended tier for each built-in tutorial, by tutorial id.
const TUTORIAL_TIERS: &[(&str, Tier)] = &[
    // Getting started
    ("intro-move-sayhello", Tier::Explorer),
    ("intro-getting-started-ASL", Tier::Explorer),
    ("add-sprite", Tier::Explorer),
    ("add-a-backdrop", Tier::Explorer),
    ("switch-costume", Tier::Explorer),
    // Basics
    ("move-around-with-arrow-keys", Tier::Creator),
    ("change-size", Tier::Creator),
    ("glide-around", Tier::Creator),
    ("spin-video", Tier::Creator),
    ("record-a-sound", Tier::Creator),
    ("hide-and-show", Tier::Creator),
    // Intermediate
    ("add-effects", Tier::Master),
    ("make-it-fly", Tier::Master),
    ("Make-Music", Tier::Master),
    ("pong", Tier::Master),
    ("video-sensing", Tier::Master),
    // Prompts
    ("animate-a-name", Tier::Creator),
    ("Animate-A-Character", Tier::Creator),
    ("Tell-A-Story", Tier::Creator),
    ("Chase-Game", Tier::Master),
    ("say-it-out-loud", Tier::Master),
    ("imagine", Tier::Creator),
    ("code-cartoon", Tier::Creator),
    ("talking", Tier::Master),
];

/// Recommended tier for a tutorial. Tutorials without an entry need every
/// block, so they map to [`Tier::MAX`].
pub fn tutorial_tier(tutorial_id: &str) -> Tier {
    TUTORIAL_TIERS
        .iter()
        .find(|(id, _)| *id == tutorial_id)
        .map_or(Tier::MAX, |(_, tier)| *tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("intro-move-sayhello", Tier::Explorer)]
    #[case("glide-around", Tier::Creator)]
    #[case("pong", Tier::Master)]
    #[case("Make-Music", Tier::Master)]
    #[case("make-music", Tier::Studio)]
    #[case("unheard-of", Tier::Studio)]
    fn maps_tutorials_to_tiers(#[case] id: &str, #[case] expected: Tier) {
        assert_eq!(tutorial_tier(id), expected);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = TUTORIAL_TIERS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TUTORIAL_TIERS.len());
    }
}
