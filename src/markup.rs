//! Helpers for the in-game markup (HDML) used in dispatches and patch notes,
//! plus number formatting shared by the CLI.

/// HDML tag to console markup replacements, applied in order.
const HDML_REPLACEMENTS: [(&str, &str); 4] = [
    ("<i=3>", "[b]"),
    // The game closes bold with the opening tag's number
    ("</i=3>", "[b]"),
    ("<i=1>", "[yellow]"),
    ("</i>", "[/]"),
];

/// Converts HDML markup to console markup.
///
/// # Example
/// ```
/// use diveharder::markup::hdml_to_markdown;
///
/// let text = hdml_to_markdown("<i=3>Hello</i=3> <i=1>World</i>");
/// assert_eq!(text, "[b]Hello[b] [yellow]World[/]");
/// ```
pub fn hdml_to_markdown(text: &str) -> String {
    HDML_REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (code, markup)| acc.replace(code, markup))
}

/// Removes every `<...>` tag from the text. A `<` without a closing `>` is kept as is.
///
/// # Example
/// ```
/// use diveharder::markup::strip_tags;
///
/// assert_eq!(strip_tags("<i=1>SUPER EARTH</i> stands"), "SUPER EARTH stands");
/// assert_eq!(strip_tags("3 < 4"), "3 < 4");
/// ```
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Shortens large counts: `1_500` -> `1.5K`, `2_000_000` -> `2.0M`, `3_100_000_000` -> `3.1B`.
pub fn pretty_print_number(num: i64) -> String {
    let abs = num.unsigned_abs();
    let value = num as f64;

    if abs >= 1_000_000_000 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        num.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdml_to_markdown_converts_all_tags() {
        let input = "<i=1>MAJOR ORDER</i>\n<i=3>Liberate</i=3> Malevelon Creek";
        assert_eq!(
            hdml_to_markdown(input),
            "[yellow]MAJOR ORDER[/]\n[b]Liberate[b] Malevelon Creek"
        );
    }

    #[test]
    fn test_hdml_to_markdown_leaves_plain_text() {
        assert_eq!(hdml_to_markdown("No tags here"), "No tags here");
        assert_eq!(hdml_to_markdown(""), "");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<i=3>Bold</i=3> and <i=1>yellow</i>"), "Bold and yellow");
        assert_eq!(strip_tags("<>empty tag"), "empty tag");
        assert_eq!(strip_tags("dangling <i=1"), "dangling <i=1");
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn test_strip_tags_is_non_greedy() {
        assert_eq!(strip_tags("<a>keep<b>"), "keep");
    }

    #[test]
    fn test_pretty_print_number_thresholds() {
        assert_eq!(pretty_print_number(0), "0");
        assert_eq!(pretty_print_number(999), "999");
        assert_eq!(pretty_print_number(1_000), "1.0K");
        assert_eq!(pretty_print_number(1_500), "1.5K");
        assert_eq!(pretty_print_number(2_000_000), "2.0M");
        assert_eq!(pretty_print_number(3_100_000_000), "3.1B");
        assert_eq!(pretty_print_number(-45_000), "-45.0K");
    }
}
