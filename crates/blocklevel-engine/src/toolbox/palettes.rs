//! Builtin palette descriptions for the core categories.
//!
//! Each function renders the unfiltered palette for the current target.
//! Filtering happens afterwards in [`super::make_toolbox`].

use super::theme::CategoryColors;
use super::ToolboxStrings;

const SEP: &str = "    <sep gap=\"36\"/>\n";

/// Escaped, target-specific values shared by every palette.
pub(super) struct PaletteContext<'a> {
    pub is_initial_setup: bool,
    pub is_stage: bool,
    pub target_id: &'a str,
    pub costume_name: &'a str,
    pub backdrop_name: &'a str,
    pub sound_name: &'a str,
    pub strings: &'a ToolboxStrings,
}

/// A block input: `<value name=..>` holding one shadow.
struct Input<'a> {
    name: &'a str,
    shadow: &'a str,
    field: Option<(&'a str, &'a str)>,
}

fn num<'a>(name: &'a str, value: &'a str) -> Input<'a> {
    shadowed(name, "math_number", "NUM", value)
}

fn text<'a>(name: &'a str, value: &'a str) -> Input<'a> {
    shadowed(name, "text", "TEXT", value)
}

fn shadowed<'a>(name: &'a str, shadow: &'a str, field: &'a str, value: &'a str) -> Input<'a> {
    Input {
        name,
        shadow,
        field: Some((field, value)),
    }
}

fn menu<'a>(name: &'a str, shadow: &'a str) -> Input<'a> {
    Input {
        name,
        shadow,
        field: None,
    }
}

fn block(block_type: &str, inputs: &[Input<'_>]) -> String {
    render_block(&format!("type=\"{block_type}\""), inputs)
}

fn block_id(id: &str, block_type: &str, inputs: &[Input<'_>]) -> String {
    render_block(&format!("id=\"{id}\" type=\"{block_type}\""), inputs)
}

fn render_block(attributes: &str, inputs: &[Input<'_>]) -> String {
    if inputs.is_empty() {
        return format!("    <block {attributes}/>\n");
    }
    let mut xml = format!("    <block {attributes}>\n");
    for input in inputs {
        xml.push_str(&format!("        <value name=\"{}\">\n", input.name));
        match input.field {
            Some((field, "")) => xml.push_str(&format!(
                "            <shadow type=\"{}\">\n                <field name=\"{field}\"/>\n            </shadow>\n",
                input.shadow
            )),
            Some((field, value)) => xml.push_str(&format!(
                "            <shadow type=\"{}\">\n                <field name=\"{field}\">{value}</field>\n            </shadow>\n",
                input.shadow
            )),
            None => xml.push_str(&format!("            <shadow type=\"{}\"/>\n", input.shadow)),
        }
        xml.push_str("        </value>\n");
    }
    xml.push_str("    </block>\n");
    xml
}

fn category(name_key: &str, id: &str, colors: &CategoryColors, body: &str) -> String {
    format!(
        "<category name=\"%{{BKY_CATEGORY_{name_key}}}\" id=\"{id}\" colour=\"{}\" secondaryColour=\"{}\">\n{body}{SEP}</category>",
        colors.primary, colors.tertiary
    )
}

fn custom_category(name_key: &str, id: &str, colors: &CategoryColors, custom: &str) -> String {
    format!(
        "<category name=\"%{{BKY_CATEGORY_{name_key}}}\" id=\"{id}\" colour=\"{}\" secondaryColour=\"{}\" custom=\"{custom}\">\n</category>",
        colors.primary, colors.tertiary
    )
}

pub(super) fn motion(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let body = if ctx.is_stage {
        format!(
            "    <label text=\"{}\"></label>\n",
            html_escape::encode_double_quoted_attribute(&ctx.strings.stage_selected)
        )
    } else {
        let t = ctx.target_id;
        [
            block("motion_movesteps", &[num("STEPS", "10")]),
            block("motion_turnright", &[num("DEGREES", "15")]),
            block("motion_turnleft", &[num("DEGREES", "15")]),
            SEP.to_string(),
            block("motion_goto", &[menu("TO", "motion_goto_menu")]),
            block("motion_gotoxy", &[num("X", "0"), num("Y", "0")]),
            block_id(
                "motion_glideto",
                "motion_glideto",
                &[num("SECS", "1"), menu("TO", "motion_glideto_menu")],
            ),
            block(
                "motion_glidesecstoxy",
                &[num("SECS", "1"), num("X", "0"), num("Y", "0")],
            ),
            SEP.to_string(),
            block(
                "motion_pointindirection",
                &[shadowed("DIRECTION", "math_angle", "NUM", "90")],
            ),
            block(
                "motion_pointtowards",
                &[menu("TOWARDS", "motion_pointtowards_menu")],
            ),
            SEP.to_string(),
            block("motion_changexby", &[num("DX", "10")]),
            block("motion_setx", &[num("X", "0")]),
            block("motion_changeyby", &[num("DY", "10")]),
            block("motion_sety", &[num("Y", "0")]),
            SEP.to_string(),
            block("motion_ifonedgebounce", &[]),
            SEP.to_string(),
            block("motion_setrotationstyle", &[]),
            SEP.to_string(),
            block_id(&format!("{t}_xposition"), "motion_xposition", &[]),
            block_id(&format!("{t}_yposition"), "motion_yposition", &[]),
            block_id(&format!("{t}_direction"), "motion_direction", &[]),
        ]
        .concat()
    };
    category("MOTION", "motion", colors, &body)
}

pub(super) fn looks(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let t = ctx.target_id;
    let hello = html_escape::encode_text(&ctx.strings.hello);
    let hmm = html_escape::encode_text(&ctx.strings.hmm);
    let mut parts = Vec::new();

    if !ctx.is_stage {
        parts.extend([
            block("looks_sayforsecs", &[text("MESSAGE", &hello), num("SECS", "2")]),
            block("looks_say", &[text("MESSAGE", &hello)]),
            block("looks_thinkforsecs", &[text("MESSAGE", &hmm), num("SECS", "2")]),
            block("looks_think", &[text("MESSAGE", &hmm)]),
            SEP.to_string(),
        ]);
    }

    let backdrop = [shadowed("BACKDROP", "looks_backdrops", "BACKDROP", ctx.backdrop_name)];
    if ctx.is_stage {
        parts.extend([
            block("looks_switchbackdropto", &backdrop),
            block("looks_switchbackdroptoandwait", &backdrop),
            block("looks_nextbackdrop", &[]),
        ]);
    } else {
        parts.extend([
            block_id(
                &format!("{t}_switchcostumeto"),
                "looks_switchcostumeto",
                &[shadowed("COSTUME", "looks_costume", "COSTUME", ctx.costume_name)],
            ),
            block("looks_nextcostume", &[]),
            block("looks_switchbackdropto", &backdrop),
            block("looks_nextbackdrop", &[]),
            SEP.to_string(),
            block("looks_changesizeby", &[num("CHANGE", "10")]),
            block("looks_setsizeto", &[num("SIZE", "100")]),
        ]);
    }

    parts.extend([
        SEP.to_string(),
        block("looks_changeeffectby", &[num("CHANGE", "25")]),
        block("looks_seteffectto", &[num("VALUE", "0")]),
        block("looks_cleargraphiceffects", &[]),
        SEP.to_string(),
    ]);

    if ctx.is_stage {
        parts.push(block_id("backdropnumbername", "looks_backdropnumbername", &[]));
    } else {
        parts.extend([
            block("looks_show", &[]),
            block("looks_hide", &[]),
            SEP.to_string(),
            block("looks_gotofrontback", &[]),
            block(
                "looks_goforwardbackwardlayers",
                &[shadowed("NUM", "math_integer", "NUM", "1")],
            ),
            block_id(&format!("{t}_costumenumbername"), "looks_costumenumbername", &[]),
            block_id("backdropnumbername", "looks_backdropnumbername", &[]),
            block_id(&format!("{t}_size"), "looks_size", &[]),
        ]);
    }

    category("LOOKS", "looks", colors, &parts.concat())
}

pub(super) fn sound(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let t = ctx.target_id;
    let sound_menu = [shadowed("SOUND_MENU", "sound_sounds_menu", "SOUND_MENU", ctx.sound_name)];
    let body = [
        block_id(&format!("{t}_sound_playuntildone"), "sound_playuntildone", &sound_menu),
        block_id(&format!("{t}_sound_play"), "sound_play", &sound_menu),
        block("sound_stopallsounds", &[]),
        SEP.to_string(),
        block("sound_changeeffectby", &[num("VALUE", "10")]),
        block("sound_seteffectto", &[num("VALUE", "100")]),
        block("sound_cleareffects", &[]),
        SEP.to_string(),
        block("sound_changevolumeby", &[num("VOLUME", "-10")]),
        block("sound_setvolumeto", &[num("VOLUME", "100")]),
        block_id(&format!("{t}_volume"), "sound_volume", &[]),
    ]
    .concat();
    category("SOUND", "sound", colors, &body)
}

pub(super) fn events(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let clicked = if ctx.is_stage {
        "event_whenstageclicked"
    } else {
        "event_whenthisspriteclicked"
    };
    let broadcast = [menu("BROADCAST_INPUT", "event_broadcast_menu")];
    let body = [
        block("event_whenflagclicked", &[]),
        block("event_whenkeypressed", &[]),
        block(clicked, &[]),
        block("event_whenbackdropswitchesto", &[]),
        SEP.to_string(),
        block("event_whengreaterthan", &[num("VALUE", "10")]),
        SEP.to_string(),
        block("event_whenbroadcastreceived", &[]),
        block("event_broadcast", &broadcast),
        block("event_broadcastandwait", &broadcast),
    ]
    .concat();
    category("EVENTS", "events", colors, &body)
}

pub(super) fn control(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let clone_of = block(
        "control_create_clone_of",
        &[menu("CLONE_OPTION", "control_create_clone_of_menu")],
    );
    let mut parts = vec![
        block(
            "control_wait",
            &[shadowed("DURATION", "math_positive_number", "NUM", "1")],
        ),
        SEP.to_string(),
        block(
            "control_repeat",
            &[shadowed("TIMES", "math_whole_number", "NUM", "10")],
        ),
        block_id("forever", "control_forever", &[]),
        SEP.to_string(),
        block("control_if", &[]),
        block("control_if_else", &[]),
        block_id("wait_until", "control_wait_until", &[]),
        block_id("repeat_until", "control_repeat_until", &[]),
        SEP.to_string(),
        block("control_stop", &[]),
        SEP.to_string(),
    ];
    if ctx.is_stage {
        parts.push(clone_of);
    } else {
        parts.extend([
            block("control_start_as_clone", &[]),
            clone_of,
            block("control_delete_this_clone", &[]),
        ]);
    }
    category("CONTROL", "control", colors, &parts.concat())
}

pub(super) fn sensing(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let mut parts = Vec::new();
    if !ctx.is_stage {
        parts.extend([
            block(
                "sensing_touchingobject",
                &[menu("TOUCHINGOBJECTMENU", "sensing_touchingobjectmenu")],
            ),
            block("sensing_touchingcolor", &[menu("COLOR", "colour_picker")]),
            block(
                "sensing_coloristouchingcolor",
                &[menu("COLOR", "colour_picker"), menu("COLOR2", "colour_picker")],
            ),
            block(
                "sensing_distanceto",
                &[menu("DISTANCETOMENU", "sensing_distancetomenu")],
            ),
            SEP.to_string(),
        ]);
    }
    // Ask-and-wait carries a localized default, which initial setup must not load.
    if !ctx.is_initial_setup {
        let ask = html_escape::encode_text(&ctx.strings.ask_name);
        parts.push(block_id("askandwait", "sensing_askandwait", &[text("QUESTION", &ask)]));
    }
    parts.extend([
        block_id("answer", "sensing_answer", &[]),
        SEP.to_string(),
        block("sensing_keypressed", &[menu("KEY_OPTION", "sensing_keyoptions")]),
        block("sensing_mousedown", &[]),
        block("sensing_mousex", &[]),
        block("sensing_mousey", &[]),
    ]);
    if !ctx.is_stage {
        parts.extend([
            SEP.to_string(),
            block_id("sensing_setdragmode", "sensing_setdragmode", &[]),
        ]);
    }
    parts.extend([
        SEP.to_string(),
        block_id("loudness", "sensing_loudness", &[]),
        SEP.to_string(),
        block_id("timer", "sensing_timer", &[]),
        block("sensing_resettimer", &[]),
        SEP.to_string(),
        block_id("of", "sensing_of", &[menu("OBJECT", "sensing_of_object_menu")]),
        SEP.to_string(),
        block_id("current", "sensing_current", &[]),
        block("sensing_dayssince2000", &[]),
        SEP.to_string(),
        block("sensing_username", &[]),
    ]);
    category("SENSING", "sensing", colors, &parts.concat())
}

pub(super) fn operators(ctx: &PaletteContext<'_>, colors: &CategoryColors) -> String {
    let pair = [num("NUM1", ""), num("NUM2", "")];
    let compare = [text("OPERAND1", ""), text("OPERAND2", "50")];
    let mut parts = vec![
        block("operator_add", &pair),
        block("operator_subtract", &pair),
        block("operator_multiply", &pair),
        block("operator_divide", &pair),
        SEP.to_string(),
        block("operator_random", &[num("FROM", "1"), num("TO", "10")]),
        SEP.to_string(),
        block("operator_gt", &compare),
        block("operator_lt", &compare),
        block("operator_equals", &compare),
        SEP.to_string(),
        block("operator_and", &[]),
        block("operator_or", &[]),
        block("operator_not", &[]),
        SEP.to_string(),
    ];
    if !ctx.is_initial_setup {
        let apple = html_escape::encode_text(&ctx.strings.apple);
        let banana = html_escape::encode_text(&ctx.strings.banana);
        let letter = html_escape::encode_text(&ctx.strings.letter);
        let apple_space = format!("{apple} ");
        parts.extend([
            block(
                "operator_join",
                &[text("STRING1", &apple_space), text("STRING2", &banana)],
            ),
            block(
                "operator_letter_of",
                &[
                    shadowed("LETTER", "math_whole_number", "NUM", "1"),
                    text("STRING", &apple),
                ],
            ),
            block("operator_length", &[text("STRING", &apple)]),
            block_id(
                "operator_contains",
                "operator_contains",
                &[text("STRING1", &apple), text("STRING2", &letter)],
            ),
            SEP.to_string(),
        ]);
    }
    parts.extend([
        block("operator_mod", &pair),
        block("operator_round", &[num("NUM", "")]),
        SEP.to_string(),
        block("operator_mathop", &[num("NUM", "")]),
    ]);
    category("OPERATORS", "operators", colors, &parts.concat())
}

pub(super) fn variables(colors: &CategoryColors) -> String {
    custom_category("VARIABLES", "variables", colors, "VARIABLE")
}

pub(super) fn my_blocks(colors: &CategoryColors) -> String {
    custom_category("MYBLOCKS", "myBlocks", colors, "PROCEDURE")
}
