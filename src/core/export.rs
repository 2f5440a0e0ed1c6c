// FollowCheck - core/export.rs
//
// Flat username-list export (one username per line).
// Core layer: writes to any Write trait object.

use crate::core::model::NotFollowingBackRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Join usernames with `\n`, in the order given. No trailing newline.
pub fn usernames_text<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a NotFollowingBackRecord>,
{
    records
        .into_iter()
        .map(|r| r.username.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write one username per line to `writer`, returning the number written.
///
/// `export_path` is only used for error context.
pub fn write_usernames<'a, I, W>(
    records: I,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a NotFollowingBackRecord>,
    W: Write,
{
    let io_err = |source| ExportError::Io {
        path: export_path.to_path_buf(),
        source,
    };

    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", record.username).map_err(io_err)?;
        count += 1;
    }
    writer.flush().map_err(io_err)?;

    tracing::debug!(count, path = %export_path.display(), "Usernames exported");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_record(username: &str) -> NotFollowingBackRecord {
        NotFollowingBackRecord {
            username: username.to_string(),
            href: format!("https://www.instagram.com/{username}"),
            followed_since: None,
        }
    }

    #[test]
    fn test_usernames_text() {
        let records = vec![make_record("bob"), make_record("carol")];
        assert_eq!(usernames_text(&records), "bob\ncarol");
    }

    #[test]
    fn test_usernames_text_empty() {
        let records: Vec<NotFollowingBackRecord> = Vec::new();
        assert_eq!(usernames_text(&records), "");
    }

    #[test]
    fn test_write_usernames() {
        let records = vec![make_record("one"), make_record("two")];
        let mut buf = Vec::new();
        let count = write_usernames(&records, &mut buf, &PathBuf::from("out.txt")).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "one\ntwo\n");
    }
}
