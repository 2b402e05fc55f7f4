use crate::data::{Error, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Split raw delimited text into a [`Table`].
///
/// Every line becomes one row: the line is trimmed of surrounding
/// whitespace and split on `separator`, with no quoting rules. Blank lines
/// are kept as a row holding a single empty field.
pub(crate) fn read_rows<R: Read>(mut reader: R, separator: &str) -> std::io::Result<Table> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents
        .lines()
        .map(|line| line.trim().split(separator).map(str::to_string).collect())
        .collect())
}

/// Load a bank export from `path`.
///
/// Any I/O problem (missing file, bad permissions, non-UTF-8 bytes) is
/// collapsed into [`Error::Parse`]; the message only names the file, the
/// cause stays attached as the error source.
pub(crate) fn parse_csv(path: &Path, separator: &str) -> Result<Table, Error> {
    File::open(path)
        .and_then(|file| read_rows(file, separator))
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
}
