// FollowCheck - platform/fs.rs
//
// Bounded document reading and filename-based role assignment for the
// command-line front end.

use crate::core::model::DocumentRole;
use crate::util::constants::{FOLLOWERS_FILE_HINT, FOLLOWING_FILE_HINT};
use crate::util::error::FollowCheckError;
use std::path::{Path, PathBuf};

/// Read a document file as text, refusing files larger than `max_bytes`.
///
/// Invalid UTF-8 is replaced rather than rejected; the JSON parser reports
/// anything that is still malformed.
pub fn read_document(path: &Path, max_bytes: u64) -> Result<String, FollowCheckError> {
    let metadata = std::fs::metadata(path).map_err(|source| FollowCheckError::Io {
        path: path.to_path_buf(),
        operation: "stat",
        source,
    })?;

    if metadata.len() > max_bytes {
        return Err(FollowCheckError::DocumentTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(|source| FollowCheckError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Document read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Guess a document's role from its file name.
///
/// Matching is case-sensitive, the way the export names its files.
/// "followers" wins over "following" so `followers_and_following/followers_1.json`
/// style names resolve by the file name alone. Returns `None` when neither
/// fragment is present.
pub fn detect_role(path: &Path) -> Option<DocumentRole> {
    let name = path.file_name()?.to_string_lossy();
    if name.contains(FOLLOWERS_FILE_HINT) {
        Some(DocumentRole::Followers)
    } else if name.contains(FOLLOWING_FILE_HINT) {
        Some(DocumentRole::Following)
    } else {
        None
    }
}

/// Pair each input file with its role, in load order.
///
/// Positional `files` get their role from `detect_role`; unrecognised names
/// are skipped with a warning. The explicit overrides come last so they are
/// loaded last and win over a positional file of the same role.
pub fn assign_roles(
    files: &[PathBuf],
    followers: Option<&Path>,
    following: Option<&Path>,
) -> Vec<(DocumentRole, PathBuf)> {
    let mut assigned = Vec::new();

    for path in files {
        match detect_role(path) {
            Some(role) => assigned.push((role, path.clone())),
            None => tracing::warn!(
                path = %path.display(),
                "File name contains neither 'followers' nor 'following'; skipped"
            ),
        }
    }
    if let Some(path) = followers {
        assigned.push((DocumentRole::Followers, path.to_path_buf()));
    }
    if let Some(path) = following {
        assigned.push((DocumentRole::Following, path.to_path_buf()));
    }

    assigned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_role_from_file_name() {
        assert_eq!(
            detect_role(&PathBuf::from("followers_and_following/followers_1.json")),
            Some(DocumentRole::Followers)
        );
        assert_eq!(
            detect_role(&PathBuf::from("followers_and_following/following.json")),
            Some(DocumentRole::Following)
        );
        assert_eq!(detect_role(&PathBuf::from("close_friends.json")), None);
    }

    #[test]
    fn test_detect_role_is_case_sensitive() {
        assert_eq!(detect_role(&PathBuf::from("Following.JSON")), None);
        assert_eq!(detect_role(&PathBuf::from("FOLLOWERS_1.json")), None);
        assert_eq!(
            detect_role(&PathBuf::from("Export/following.json")),
            Some(DocumentRole::Following)
        );
    }

    #[test]
    fn test_assign_roles_from_file_names() {
        let files = vec![
            PathBuf::from("export/following.json"),
            PathBuf::from("export/followers_1.json"),
        ];
        assert_eq!(
            assign_roles(&files, None, None),
            vec![
                (DocumentRole::Following, files[0].clone()),
                (DocumentRole::Followers, files[1].clone()),
            ]
        );
    }

    #[test]
    fn test_assign_roles_skips_unrecognised_names() {
        let files = vec![
            PathBuf::from("close_friends.json"),
            PathBuf::from("followers_1.json"),
            PathBuf::from("Following.json"),
        ];
        assert_eq!(
            assign_roles(&files, None, None),
            vec![(DocumentRole::Followers, PathBuf::from("followers_1.json"))]
        );
    }

    #[test]
    fn test_assign_roles_overrides_come_last() {
        let files = vec![
            PathBuf::from("followers_1.json"),
            PathBuf::from("following.json"),
        ];
        let assigned = assign_roles(
            &files,
            Some(Path::new("mine/a.json")),
            Some(Path::new("mine/b.json")),
        );
        assert_eq!(assigned.len(), 4);
        assert_eq!(
            &assigned[2..],
            &[
                (DocumentRole::Followers, PathBuf::from("mine/a.json")),
                (DocumentRole::Following, PathBuf::from("mine/b.json")),
            ]
        );
    }

    #[test]
    fn test_assign_roles_keeps_same_role_duplicates_in_order() {
        let files = vec![
            PathBuf::from("followers_1.json"),
            PathBuf::from("followers_2.json"),
        ];
        assert_eq!(
            assign_roles(&files, Some(Path::new("followers_3.json")), None),
            vec![
                (DocumentRole::Followers, PathBuf::from("followers_1.json")),
                (DocumentRole::Followers, PathBuf::from("followers_2.json")),
                (DocumentRole::Followers, PathBuf::from("followers_3.json")),
            ]
        );
    }

    #[test]
    fn test_read_document_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("followers_1.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_document(&path, 1024).unwrap(), "[]");
    }

    #[test]
    fn test_read_document_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("following.json");
        std::fs::write(&path, vec![b' '; 64]).unwrap();
        let err = read_document(&path, 16).unwrap_err();
        assert!(matches!(
            err,
            FollowCheckError::DocumentTooLarge { size: 64, max_size: 16, .. }
        ));
    }

    #[test]
    fn test_read_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("nope.json"), 1024).unwrap_err();
        assert!(matches!(err, FollowCheckError::Io { operation: "stat", .. }));
    }
}
