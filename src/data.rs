use std::path::PathBuf;
use thiserror::Error;

/// One delimited record, split into its fields.
pub(crate) type Row = Vec<String>;

/// An ordered pile of rows. Order matters twice over: transactions keep
/// their source order, and within a transaction the narration row must be
/// directly followed by its two balancing legs.
pub(crate) type Table = Vec<Row>;

/// Column labels FriBok expects on the first line of an import file.
pub(crate) const FRIBOK_HEADER: [&str; 8] = [
    "Nummer",
    "Beskrivning",
    "Datum",
    "Konto",
    "Debet",
    "Kredit",
    "Projekt",
    "Resultatenhet",
];

#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";

/// The two bookkeeping accounts every transaction is posted against.
/// `primary` keeps the sign of the source amount, `contra` gets the
/// mirrored entry, so each transaction balances by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AccountPair {
    pub primary: String,
    pub contra: String,
}

/// Everything that can go wrong between reading a bank export and writing
/// the FriBok file. The messages are what the operator sees; the wrapped
/// I/O errors only show up in the `--debug` trace.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not parse '{}'. Does it exist?", path.display())]
    Parse {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse row '{row:?}'.")]
    RowConversion { row: Row },
    #[error("File '{}' exists. Use '--force' to replace.", path.display())]
    OutputExists { path: PathBuf },
    #[error("Could not write '{}'.", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
