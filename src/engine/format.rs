use std::time::Duration;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const LOWER_FLIPPED: &str = "ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_FLIPPED: &str = "∀qƆpƎℲפHIſʞ˥WNOԀQᴚS┴∩ΛMX⅄Z";

/// Breaks `@everyone` and `@here` with a zero-width space so they can't ping.
pub fn escape_mass_mentions(text: &str) -> String {
    text.replace("@everyone", "@\u{200b}everyone")
        .replace("@here", "@\u{200b}here")
}

pub fn italics(text: &str) -> String {
    format!("*{text}*")
}

fn flip_char(c: char) -> char {
    let lookup = |from: &str, to: &str| {
        from.chars()
            .position(|f| f == c)
            .and_then(|i| to.chars().nth(i))
    };
    lookup(LOWER, LOWER_FLIPPED)
        .or_else(|| lookup(UPPER, UPPER_FLIPPED))
        .unwrap_or(c)
}

/// Turns text upside down: every ASCII letter is swapped for its rotated
/// look-alike and the whole string is reversed.
pub fn upside_down(text: &str) -> String {
    text.chars().rev().map(flip_char).collect()
}

/// `H:MM:SS`, with a day count in front once past a day. Sub-second precision is dropped.
pub fn elapsed(duration: Duration) -> String {
    let total = duration.as_secs();
    let (days, rest) = (total / 86_400, total % 86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}
