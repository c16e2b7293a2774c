//! Unified diff rendering for check mode and reports.

use similar::TextDiff;

/// Renders a unified diff between the current and reconciled content.
///
/// Returns `None` when the two are identical.
pub fn unified(old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }
    let diff = TextDiff::from_lines(old, new);
    Some(
        diff.unified_diff()
            .context_radius(3)
            .header("before", "after")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_content_has_no_diff() {
        assert_eq!(unified("a=1\n", "a=1\n"), None);
    }

    #[test]
    fn test_diff_shows_changed_lines() {
        let diff = unified("a=1\nb=2\n", "a=1\nb=3\n").unwrap();
        assert!(diff.contains("--- before"));
        assert!(diff.contains("+++ after"));
        assert!(diff.contains("-b=2"));
        assert!(diff.contains("+b=3"));
    }
}
