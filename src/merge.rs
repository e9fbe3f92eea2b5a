use tracing::debug;

use crate::File;
use crate::section::Section;

/// Combine several parsed files, in order, into one.
///
/// Root properties from every file are gathered into a single root section, which leads the
/// result if it ends up non-empty. Named sections follow in file order and are never combined by
/// name: two files that both define `[gpio]` yield two `gpio` sections.
#[must_use]
pub fn merge(files: &[File]) -> File {
    let mut root = Section::root();

    for file in files {
        if let Some(section) = file.root() {
            root.extend(section.properties().iter().cloned());
        }
    }

    let named = files
        .iter()
        .flat_map(|file| file.sections().iter().filter(|s| !s.is_root()).cloned());

    let sections = if root.properties().is_empty() {
        named.collect::<Vec<_>>()
    } else {
        std::iter::once(root).chain(named).collect::<Vec<_>>()
    };

    debug!(
        files = files.len(),
        sections = sections.len(),
        "merged configuration"
    );

    File::from_sections(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> File {
        File::parse_str(text).expect("expected hardcoded configuration to be valid")
    }

    #[test]
    fn root_properties_are_consolidated_and_sections_kept_apart() {
        let a = parse("p1 = 1\np2 = 2\n[S1]\nx = a\ny = b\n");
        let b = parse("p3 = 3\n[S1]\nz = c\n");

        let merged = merge(&[a, b]);
        let sections = merged.sections();

        assert_eq!(sections.len(), 3);
        assert!(sections[0].is_root());
        assert_eq!(
            sections[0]
                .properties()
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>(),
            vec!["p1", "p2", "p3"]
        );
        assert_eq!(sections[1].name(), "S1");
        assert_eq!(sections[1].properties().len(), 2);
        assert_eq!(sections[2].name(), "S1");
        assert_eq!(sections[2].properties().len(), 1);
        assert_eq!(sections[2].get("z"), Some("c"));
    }

    #[test]
    fn no_root_without_root_properties() {
        let a = parse("[dbus]\nuse-session-bus = false\n");
        let b = parse("# only a comment\n");

        let merged = merge(&[a, b]);

        assert!(merged.root().is_none());
        assert_eq!(merged.sections().len(), 1);
        assert_eq!(merged.sections()[0].name(), "dbus");
    }

    #[test]
    fn root_from_later_file_still_comes_first() {
        let a = parse("[gpio = 4]\nname = lamp\n");
        let b = parse("verbose = true\n[gpio = 5]\n");

        let merged = merge(&[a, b]);
        let names = merged
            .sections()
            .iter()
            .map(|s| (s.name(), s.value()))
            .collect::<Vec<_>>();

        assert_eq!(names, vec![("", ""), ("gpio", "4"), ("gpio", "5")]);
        assert_eq!(merged.sections()[0].get("verbose"), Some("true"));
    }

    #[test]
    fn duplicate_properties_survive() {
        let a = parse("level = 1\n");
        let b = parse("level = 2\n");

        let merged = merge(&[a, b]);
        let root = merged.root().expect("expected a root section");

        assert_eq!(root.properties().len(), 2);
        assert_eq!(root.get("level"), Some("1"));
        assert_eq!(root.properties()[1].value(), "2");
        assert_eq!(root.properties()[1].line_number(), 1);
    }

    #[test]
    fn nothing_to_merge() {
        let merged = merge(&[]);

        assert!(merged.is_empty());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let files = [parse("a = 1\n[s]\n"), parse("b = 2\n")];
        let before = files.clone();

        _ = merge(&files);

        assert_eq!(files, before);
    }
}
