//! Repair of malformed PATH tokens.
//!
//! A PATH value that lost a separator ends up with a single token holding
//! two absolute paths run together, e.g. `C:\fooD:\bar`. Such a token
//! would normalize incorrectly and hide true duplicates, so it must be
//! split before deduplication.
//!
//! The repair is an independently testable pure function over a single
//! token, not an inline substitution in the reconciler.

/// Splits a token at every interior drive-root boundary.
///
/// A boundary is a position past the start of the token where a
/// drive-letter-rooted path begins: an ASCII letter, a colon, and a
/// slash. A colon cannot legally occur in a Windows path component, so
/// every interior occurrence marks a lost separator. Splitting at all
/// boundaries in one pass reaches the same fixpoint as repeated repair.
///
/// Returns the token unchanged (as a single element) when no boundary
/// is found.
///
/// # Examples
///
/// ```
/// use npmdrive::pathlist::split_merged;
///
/// assert_eq!(
///     split_merged("C:\\fooD:\\bar"),
///     vec!["C:\\foo".to_string(), "D:\\bar".to_string()]
/// );
/// assert_eq!(split_merged("C:\\foo"), vec!["C:\\foo".to_string()]);
/// ```
#[must_use]
pub fn split_merged(token: &str) -> Vec<String> {
    let bytes = token.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    let mut i = 1;
    while i + 2 < bytes.len() {
        if i > start && is_drive_start(bytes, i) {
            parts.push(token[start..i].to_string());
            start = i;
            i += 3;
        } else {
            i += 1;
        }
    }

    parts.push(token[start..].to_string());
    parts
}

/// Whether a drive-letter-rooted path begins at byte offset `i`.
fn is_drive_start(bytes: &[u8], i: usize) -> bool {
    bytes[i].is_ascii_alphabetic()
        && bytes[i + 1] == b':'
        && (bytes[i + 2] == b'\\' || bytes[i + 2] == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intact_token_unchanged() {
        assert_eq!(split_merged("C:\\Program Files\\nodejs"), vec![
            "C:\\Program Files\\nodejs".to_string()
        ]);
    }

    #[test]
    fn test_two_merged_paths() {
        assert_eq!(
            split_merged("C:\\fooD:\\bar"),
            vec!["C:\\foo".to_string(), "D:\\bar".to_string()]
        );
    }

    #[test]
    fn test_merge_after_trailing_separator() {
        assert_eq!(
            split_merged("C:\\foo\\D:\\bar"),
            vec!["C:\\foo\\".to_string(), "D:\\bar".to_string()]
        );
    }

    #[test]
    fn test_three_merged_paths() {
        assert_eq!(
            split_merged("C:\\aD:\\bE:\\c"),
            vec!["C:\\a".to_string(), "D:\\b".to_string(), "E:\\c".to_string()]
        );
    }

    #[test]
    fn test_forward_slash_root_detected() {
        assert_eq!(
            split_merged("C:/aD:/b"),
            vec!["C:/a".to_string(), "D:/b".to_string()]
        );
    }

    #[test]
    fn test_leading_drive_not_a_boundary() {
        assert_eq!(split_merged("D:\\bar"), vec!["D:\\bar".to_string()]);
    }

    #[test]
    fn test_colon_without_slash_not_a_boundary() {
        // "D:" with no following slash is not a rooted path.
        assert_eq!(split_merged("C:\\fooD:"), vec!["C:\\fooD:".to_string()]);
    }

    #[test]
    fn test_relative_token_unchanged() {
        assert_eq!(split_merged("%APPDATA%\\npm"), vec![
            "%APPDATA%\\npm".to_string()
        ]);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(split_merged(""), vec![String::new()]);
    }

    #[test]
    fn test_pieces_independently_normalizable() {
        let parts = split_merged("C:\\foo\\barC:\\baz");
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.starts_with("C:\\")));
    }
}
