//! Path extension extraction.

/// Extension of `path`: the substring from the last `.` (inclusive) to the
/// end of the path.
///
/// A path with no dot has no extension. A dot as the final byte yields
/// `"."`, which no non-empty policy literal can match.
pub fn last_extension(path: &str) -> Option<&str> {
    path.rfind('.').map(|idx| &path[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extension() {
        assert_eq!(last_extension("/downloads/report.zip"), Some(".zip"));
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(last_extension("/archive.tar.gz"), Some(".gz"));
    }

    #[test]
    fn test_no_dot_means_no_extension() {
        assert_eq!(last_extension("/downloads/report"), None);
        assert_eq!(last_extension(""), None);
    }

    #[test]
    fn test_trailing_dot_yields_empty_extension() {
        assert_eq!(last_extension("/file."), Some("."));
    }

    #[test]
    fn test_dot_in_directory_counts() {
        // The scan covers the whole path, not just the final segment.
        assert_eq!(last_extension("/v1.2/report"), Some(".2/report"));
    }
}
