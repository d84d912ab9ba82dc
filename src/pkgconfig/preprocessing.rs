//! Line preprocessing utilities
//!
//! Cleans up physical lines before Libs directives are rewritten: trailing
//! whitespace, `lib/../lib` redundancies and backslash continuations.

use tracing::debug;

const CONTINUATION_MARKER: char = '\\';

/// Path redundancies folded away, paired with their replacement.
const REDUNDANT_PATHS: [(&str, &str); 2] = [("lib/../lib", "lib"), ("lib64/../lib64", "lib64")];

/// Whitespace as the C locale's `isspace` sees it. Unlike
/// `char::is_ascii_whitespace` this includes vertical tab.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip trailing whitespace from a line.
#[must_use]
pub fn trim_trailing(line: &str) -> &str {
    line.trim_end_matches(is_space)
}

/// Replace `lib/../lib` with `lib` and `lib64/../lib64` with `lib64` until
/// neither pattern remains.
#[must_use]
pub fn fold_redundant_paths(line: &str) -> String {
    let mut folded = line.to_string();
    // Each pass strictly shortens the line, so this terminates.
    while let Some((pattern, replacement)) = REDUNDANT_PATHS
        .iter()
        .find(|(pattern, _)| folded.contains(pattern))
    {
        folded = folded.replace(pattern, replacement);
    }
    folded
}

/// Join lines ending with a backslash onto the following line, in place.
///
/// The marker is removed, the remainder trimmed and a single space appended
/// before the next line is pulled in. The same index is then scanned again,
/// since the merged line may itself end with a marker. A marker on the last
/// line is stripped and leaves its trailing space behind.
pub fn join_continuations(lines: &mut Vec<String>) {
    let mut index = 0;
    while index < lines.len() {
        let Some(stripped) = lines[index].strip_suffix(CONTINUATION_MARKER) else {
            index += 1;
            continue;
        };

        let mut merged = trim_trailing(stripped).to_string();
        merged.push(' ');

        if index + 1 < lines.len() {
            let next = lines.remove(index + 1);
            merged.push_str(&next);
            debug!(line = index + 1, "joined continuation line");
            lines[index] = merged;
        } else {
            lines[index] = merged;
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_trim_trailing_whitespace() {
        assert_eq!(trim_trailing("Libs: -lfoo \t "), "Libs: -lfoo");
        assert_eq!(trim_trailing("  leading kept"), "  leading kept");
        assert_eq!(trim_trailing("vt\x0B\x0C\r"), "vt");
        assert_eq!(trim_trailing(""), "");
        assert_eq!(trim_trailing(" \t "), "");
    }

    #[test]
    fn test_trim_is_idempotent() {
        for line in ["a  ", "b\t\t", "", "  c", "d \\ "] {
            let once = trim_trailing(line);
            assert_eq!(trim_trailing(once), once);
        }
    }

    #[test]
    fn test_fold_lib_and_lib64() {
        assert_eq!(
            fold_redundant_paths("Libs: -L/opt/lib/../lib -lx"),
            "Libs: -L/opt/lib -lx"
        );
        assert_eq!(
            fold_redundant_paths("-L/usr/lib64/../lib64"),
            "-L/usr/lib64"
        );
    }

    #[test]
    fn test_fold_repeats_until_fixed_point() {
        assert_eq!(fold_redundant_paths("/x/lib/../lib/../lib/y"), "/x/lib/y");
        assert_eq!(
            fold_redundant_paths("/a/lib64/../lib64/../lib64 /b/lib/../lib"),
            "/a/lib64 /b/lib"
        );
    }

    #[test]
    fn test_fold_is_fixed_point() {
        for line in [
            "Libs: -L/opt/lib/../lib -lx",
            "/a/lib64/../lib64/../lib/../lib",
            "Version: 1.0",
        ] {
            let once = fold_redundant_paths(line);
            assert_eq!(fold_redundant_paths(&once), once);
        }
    }

    #[test]
    fn test_fold_leaves_other_parent_refs() {
        assert_eq!(fold_redundant_paths("/usr/lib/../share"), "/usr/lib/../share");
        assert_eq!(fold_redundant_paths("Version: 1.0"), "Version: 1.0");
    }

    #[test]
    fn test_join_simple_continuation() {
        let mut lines = owned(&["Libs: -L/usr/lib -lfoo extra \\", "-lbar"]);
        join_continuations(&mut lines);
        assert_eq!(lines, owned(&["Libs: -L/usr/lib -lfoo extra -lbar"]));
    }

    #[test]
    fn test_join_chained_continuations() {
        let mut lines = owned(&["Libs: -la \\", "-lb \\", "-lc", "Cflags: -I/x"]);
        join_continuations(&mut lines);
        assert_eq!(lines, owned(&["Libs: -la -lb -lc", "Cflags: -I/x"]));
    }

    #[test]
    fn test_join_pulls_in_untrimmed_successor() {
        let mut lines = owned(&["Libs: -la\\", "-lb  \\  ", "-lc"]);
        join_continuations(&mut lines);
        // The successor is appended verbatim; its own marker is not at the
        // end, so it is not a continuation.
        assert_eq!(lines, owned(&["Libs: -la -lb  \\  ", "-lc"]));
    }

    #[test]
    fn test_join_last_line_keeps_trailing_space() {
        let mut lines = owned(&["only \\"]);
        join_continuations(&mut lines);
        assert_eq!(lines, owned(&["only "]));
    }

    #[test]
    fn test_join_marker_line_followed_by_empty_line() {
        let mut lines = owned(&["Libs: -la \\", "", "Name: x"]);
        join_continuations(&mut lines);
        assert_eq!(lines, owned(&["Libs: -la ", "Name: x"]));
    }

    #[test]
    fn test_join_line_count_property() {
        let input = owned(&["a \\", "b", "c \\", "d \\", "e", "f", "g \\"]);
        let markers_with_successor = input[..input.len() - 1]
            .iter()
            .filter(|line| line.ends_with('\\'))
            .count();

        let mut lines = input.clone();
        join_continuations(&mut lines);

        assert_eq!(lines.len(), input.len() - markers_with_successor);
        assert!(lines.iter().all(|line| !line.ends_with('\\')));
        assert_eq!(lines, owned(&["a b", "c d e", "f", "g "]));
    }

    #[test]
    fn test_join_empty_input() {
        let mut lines: Vec<String> = Vec::new();
        join_continuations(&mut lines);
        assert!(lines.is_empty());
    }
}
