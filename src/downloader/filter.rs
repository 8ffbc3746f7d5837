//! Artifact name mask compilation and matching.

use regex::Regex;

use crate::error::{Error, Result};

/// Compile every mask before any of them is applied
///
/// A malformed pattern fails the whole set with [`Error::InvalidFilter`];
/// masks are never partially applied.
pub(crate) fn compile_masks(masks: &[String]) -> Result<Vec<Regex>> {
    masks
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| Error::InvalidFilter {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Whether an artifact name is selected by the compiled mask set
///
/// An empty mask set includes everything; otherwise the name must match at
/// least one mask.
pub(crate) fn included(name: &str, masks: &[Regex]) -> bool {
    masks.is_empty() || masks.iter().any(|mask| mask.is_match(name))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_set_includes_everything() {
        let masks = compile_masks(&[]).unwrap();
        assert!(included("report/x.json", &masks));
        assert!(included("logs/y.txt", &masks));
    }

    #[test]
    fn name_must_match_at_least_one_mask() {
        let masks = compile_masks(&["report/.*".to_string()]).unwrap();
        assert!(included("report/x.json", &masks));
        assert!(!included("logs/y.txt", &masks));
    }

    #[test]
    fn multiple_masks_are_a_union() {
        let masks =
            compile_masks(&[r".*\.json".to_string(), r".*\.xml$".to_string()]).unwrap();
        assert!(included("report/x.json", &masks));
        assert!(included("junit/result.xml", &masks));
        assert!(!included("video/recording.mp4", &masks));
    }

    #[test]
    fn malformed_pattern_fails_the_whole_set() {
        let err = compile_masks(&["report/.*".to_string(), "report/(".to_string()]).unwrap_err();
        match err {
            Error::InvalidFilter { pattern, .. } => assert_eq!(pattern, "report/("),
            other => panic!("expected InvalidFilter, got {other:?}"),
        }
    }
}
