use crate::data::{Error, Table, LINE_ENDING};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `table` to `writer`: fields joined by `separator`, one row per
/// line, native line terminator. A zero-field row comes out as a bare
/// terminator.
pub(crate) fn write_csv<W: Write>(
    mut writer: W,
    table: &Table,
    separator: &str,
) -> std::io::Result<()> {
    for row in table {
        writer.write_all(row.join(separator).as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}

/// Write `table` to `path`, creating or truncating the file.
///
/// Refuses to touch an existing file unless `force` is set.
pub(crate) fn save_csv(
    path: &Path,
    table: &Table,
    separator: &str,
    force: bool,
) -> Result<(), Error> {
    if path.is_file() && !force {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }
    File::create(path)
        .map(BufWriter::new)
        .and_then(|file| write_csv(file, table, separator))
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Print `table` to standard output. No existence check here and nothing on
/// disk is touched.
pub(crate) fn print_csv(table: &Table, separator: &str) -> std::io::Result<()> {
    write_csv(std::io::stdout().lock(), table, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::read::parse_csv;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn write_csv_joins_fields_and_terminates_lines() {
        let table = vec![row(&["a", "b"]), Row::new(), row(&["c"])];
        let mut out = Vec::new();
        write_csv(&mut out, &table, ";").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("a;b{LINE_ENDING}{LINE_ENDING}c{LINE_ENDING}")
        );
    }

    #[test]
    fn save_csv_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "old").unwrap();

        let table = vec![row(&["a", "b"])];
        let err = save_csv(&path, &table, ";", false).unwrap_err();
        assert!(matches!(err, Error::OutputExists { .. }));
        assert_eq!(
            err.to_string(),
            format!("File '{}' exists. Use '--force' to replace.", path.display())
        );
        // The refused write must leave the file alone.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn save_csv_with_force_replaces_old_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "a much longer line than the replacement\nand a second one\n")
            .unwrap();

        let table = vec![row(&["a", "b"])];
        save_csv(&path, &table, ";", true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("a;b{LINE_ENDING}")
        );
    }

    #[test]
    fn saved_file_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = vec![
            row(&["1001", "Coffee", "2022-01-05", "-45.00"]),
            row(&["", "", "", "3000", "45.00", "", "", ""]),
        ];
        save_csv(&path, &table, ";", false).unwrap();
        assert_eq!(parse_csv(&path, ";").unwrap(), table);
    }
}
