use std::collections::BTreeMap;

use super::{TierCatalog, TierEntries};
use crate::tier::Tier;

type Table = &'static [(&'static str, &'static [&'static str])];

const EXPLORER: Table = &[
    (
        "motion",
        &["motion_movesteps", "motion_turnright", "motion_turnleft"],
    ),
    (
        "looks",
        &[
            "looks_say",
            "looks_sayforsecs",
            "looks_show",
            "looks_hide",
            "looks_switchcostumeto",
            "looks_nextcostume",
            "looks_changecoloreffectby",
            "looks_setcoloreffectto",
            "looks_cleargraphiceffects",
        ],
    ),
    ("sound", &["sound_play", "sound_playuntildone"]),
    (
        "events",
        &[
            "event_whenflagclicked",
            "event_whenkeypressed",
            "event_whenstageclicked",
            "event_whenthisspriteclicked",
        ],
    ),
    ("control", &["control_wait", "control_repeat", "control_forever"]),
    (
        "sensing",
        &[
            "sensing_keypressed",
            "sensing_mousedown",
            "sensing_mousex",
            "sensing_mousey",
        ],
    ),
    (
        "operators",
        &["operator_add", "operator_subtract", "operator_equals"],
    ),
];

const CREATOR: Table = &[
    (
        "motion",
        &[
            "motion_goto",
            "motion_gotoxy",
            "motion_glideto",
            "motion_glidesecstoxy",
            "motion_pointindirection",
            "motion_changexby",
            "motion_changeyby",
            "motion_setx",
            "motion_sety",
        ],
    ),
    (
        "looks",
        &[
            "looks_think",
            "looks_thinkforsecs",
            "looks_switchbackdropto",
            "looks_switchbackdroptoandwait",
            "looks_nextbackdrop",
            "looks_changesizeby",
            "looks_setsizeto",
            "looks_changeeffectby",
            "looks_seteffectto",
            "looks_gotofrontback",
            "looks_goforwardbackwardlayers",
        ],
    ),
    (
        "sound",
        &[
            "sound_playuntildone",
            "sound_stopallsounds",
            "sound_setvolumeto",
            "sound_changevolumeby",
            "sound_seteffectto",
            "sound_changeeffectby",
            "sound_cleareffects",
        ],
    ),
    (
        "events",
        &[
            "event_whenkeypressed",
            "event_whenbackdropswitchesto",
            "event_whengreaterthan",
        ],
    ),
    (
        "control",
        &[
            "control_wait",
            "control_repeat",
            "control_forever",
            "control_if",
            "control_if_else",
        ],
    ),
    (
        "sensing",
        &[
            "sensing_keypressed",
            "sensing_mousedown",
            "sensing_mousex",
            "sensing_mousey",
        ],
    ),
];

const MASTER: Table = &[
    (
        "motion",
        &[
            "motion_pointtowards",
            "motion_ifonedgebounce",
            "motion_setrotationstyle",
            "motion_xposition",
            "motion_yposition",
            "motion_direction",
        ],
    ),
    (
        "looks",
        &[
            "looks_costumenumbername",
            "looks_backdropnumbername",
            "looks_size",
        ],
    ),
    (
        "sound",
        &["sound_volume", "sound_settempoto", "sound_changetempeby"],
    ),
    (
        "events",
        &[
            "event_whenbroadcastreceived",
            "event_broadcast",
            "event_broadcastandwait",
        ],
    ),
    (
        "control",
        &[
            "control_wait_until",
            "control_repeat_until",
            "control_stop",
            "control_start_as_clone",
            "control_create_clone_of",
            "control_delete_this_clone",
        ],
    ),
    (
        "sensing",
        &[
            "sensing_touchingobject",
            "sensing_touchingcolor",
            "sensing_coloristouchingcolor",
            "sensing_distanceto",
            "sensing_askandwait",
            "sensing_answer",
            "sensing_setdragmode",
            "sensing_loudness",
            "sensing_timer",
            "sensing_resettimer",
            "sensing_of",
            "sensing_current",
            "sensing_dayssince2000",
            "sensing_username",
        ],
    ),
    (
        "operators",
        &[
            "operator_add",
            "operator_subtract",
            "operator_multiply",
            "operator_divide",
            "operator_random",
            "operator_gt",
            "operator_lt",
            "operator_equals",
            "operator_and",
            "operator_or",
            "operator_not",
            "operator_join",
            "operator_letter_of",
            "operator_length",
            "operator_contains",
            "operator_mod",
            "operator_round",
            "operator_mathop",
        ],
    ),
    (
        "data",
        &[
            "data_variable",
            "data_setvariableto",
            "data_changevariableby",
            "data_showvariable",
            "data_hidevariable",
            "data_listcontents",
            "data_addtolist",
            "data_deleteoflist",
            "data_deletealloflist",
            "data_insertatlist",
            "data_replaceitemoflist",
            "data_itemoflist",
            "data_itemnumoflist",
            "data_lengthoflist",
            "data_listcontainsitem",
            "data_showlist",
            "data_hidelist",
        ],
    ),
];

// Extension blocks (pen, music, text2speech, ...) are only reachable at the
// top tier, which is never filtered.
const STUDIO: Table = &[(
    "procedures",
    &[
        "procedures_definition",
        "procedures_call",
        "procedures_prototype",
        "argument_reporter_string_number",
        "argument_reporter_boolean",
    ],
)];

fn entries(table: Table) -> TierEntries {
    table
        .iter()
        .map(|(category, blocks)| {
            (
                category.to_string(),
                blocks.iter().map(|b| b.to_string()).collect(),
            )
        })
        .collect()
}

pub(super) fn reference_catalog() -> TierCatalog {
    let tiers: BTreeMap<Tier, TierEntries> = [
        (Tier::Explorer, EXPLORER),
        (Tier::Creator, CREATOR),
        (Tier::Master, MASTER),
        (Tier::Studio, STUDIO),
    ]
    .into_iter()
    .map(|(tier, table)| (tier, entries(table)))
    .collect();
    TierCatalog::new(tiers)
}
