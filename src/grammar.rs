use std::sync::LazyLock;

use regex::Regex;

/// `[name]` or `[name = value]`. Group 1 is the name, group 2 the optional value.
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([A-Za-z0-9_\-:]+)(?:\s*=\s*(.*))?\]$").expect("section header pattern")
});

/// `name = value`, where the value may be missing entirely.
static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_.\-:]+)\s*=\s*(.+)?$").expect("property pattern")
});

/// What a single logical line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Section { name: &'a str, value: &'a str },
    Property { name: &'a str, value: &'a str },
    /// Neither a section header nor a property assignment.
    Violation,
}

/// Classify one logical line. Values are returned exactly as written; quotes are left in place.
///
/// Lines are expected to be trimmed already, as produced by [`crate::reader::LineReader`].
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    match line.chars().next() {
        None => Line::Blank,
        Some('#') => Line::Comment,
        Some('[') => match_section(line),
        Some(_) => match_property(line),
    }
}

fn match_section(line: &str) -> Line<'_> {
    let Some(captures) = SECTION_HEADER.captures(line) else {
        return Line::Violation;
    };

    match captures.get(1) {
        Some(name) => Line::Section {
            name: name.as_str(),
            value: captures.get(2).map_or("", |m| m.as_str()),
        },
        None => Line::Violation,
    }
}

fn match_property(line: &str) -> Line<'_> {
    let Some(captures) = PROPERTY.captures(line) else {
        return Line::Violation;
    };

    match captures.get(1) {
        Some(name) => Line::Property {
            name: name.as_str(),
            value: captures.get(2).map_or("", |m| m.as_str()),
        },
        None => Line::Violation,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", Line::Blank)]
    #[case::comment("# a comment", Line::Comment)]
    #[case::comment_that_looks_like_a_section("#[dbus]", Line::Comment)]
    fn skipped_lines(#[case] input: &str, #[case] expected: Line<'_>) {
        assert_eq!(classify(input), expected);
    }

    #[rstest]
    #[case::plain("[dbus]", "dbus", "")]
    #[case::with_value("[gpio = 0-17]", "gpio", "0-17")]
    #[case::tight_value("[gpio=17]", "gpio", "17")]
    #[case::quoted_value(r#"[gpio = "17"]"#, "gpio", r#""17""#)]
    #[case::empty_value("[gpio =]", "gpio", "")]
    #[case::punctuation("[a_b-c:d]", "a_b-c:d", "")]
    #[case::bracket_in_value("[list = [1]]", "list", "[1]")]
    fn section_headers(#[case] input: &str, #[case] name: &str, #[case] value: &str) {
        assert_eq!(classify(input), Line::Section { name, value });
    }

    #[rstest]
    #[case::space_in_name("[bad name]")]
    #[case::empty_name("[]")]
    #[case::unterminated("[dbus")]
    #[case::trailing_text("[dbus] extra")]
    #[case::dot_in_name("[a.b]")]
    #[case::leading_space("[ dbus]")]
    fn malformed_section_headers(#[case] input: &str) {
        assert_eq!(classify(input), Line::Violation);
    }

    #[rstest]
    #[case::spaced("use-session-bus = false", "use-session-bus", "false")]
    #[case::tight("a=b", "a", "b")]
    #[case::missing_value("pull-resistor =", "pull-resistor", "")]
    #[case::dotted_name("a.b.c = 1", "a.b.c", "1")]
    #[case::value_with_equals("expr = 1+1=2", "expr", "1+1=2")]
    #[case::path_value("object-id = /de/titnc/pi/v1", "object-id", "/de/titnc/pi/v1")]
    #[case::hash_in_value(
        r#"consumer = "asdd" #default is wirectrl"#,
        "consumer",
        r#""asdd" #default is wirectrl"#
    )]
    #[case::quoted_value(r#"x = "hello""#, "x", r#""hello""#)]
    fn properties(#[case] input: &str, #[case] name: &str, #[case] value: &str) {
        assert_eq!(classify(input), Line::Property { name, value });
    }

    #[rstest]
    #[case::no_equals("just some words")]
    #[case::space_in_name("bad name = 1")]
    #[case::no_name("= value")]
    #[case::bad_character("na$me = 1")]
    fn malformed_properties(#[case] input: &str) {
        assert_eq!(classify(input), Line::Violation);
    }
}
