use crate::data::{AccountPair, Error, Row, Table, FRIBOK_HEADER};

/// Expand one bank-export row into the three FriBok rows of a transaction:
/// a narration row and the two balancing account legs.
///
/// Field 3 is the signed amount. A leading minus puts the magnitude in the
/// primary account's debit column, anything else lands as-is in its credit
/// column; the contra leg gets the same two values swapped. The amount is
/// an opaque string here, it is never parsed as a number, so whatever
/// decimal format the bank exports is passed through untouched.
pub(crate) fn row_to_fribok(row: &Row, accounts: &AccountPair) -> Result<[Row; 3], Error> {
    let [number, description, date, amount, ..] = row.as_slice() else {
        return Err(Error::RowConversion { row: row.clone() });
    };
    let (debit, credit) = match amount.strip_prefix('-') {
        Some(magnitude) => (magnitude, ""),
        None => ("", amount.as_str()),
    };
    Ok([
        row8([number, description, date, "", "", "", "", ""]),
        row8(["", "", "", &accounts.primary, debit, credit, "", ""]),
        row8(["", "", "", &accounts.contra, credit, debit, "", ""]),
    ])
}

/// Convert a whole parsed bank export into a FriBok import table.
///
/// The output always starts with [`FRIBOK_HEADER`] and one reserved empty
/// row, then the 3-row groups in source order. The first row that does not
/// fit the expected shape aborts the whole conversion.
pub(crate) fn parsed_to_fribok(csv: &Table, accounts: &AccountPair) -> Result<Table, Error> {
    let mut fribok: Table = vec![
        FRIBOK_HEADER.iter().map(|label| label.to_string()).collect(),
        Row::new(),
    ];
    for row in csv {
        fribok.extend(row_to_fribok(row, accounts)?);
    }
    Ok(fribok)
}

fn row8(fields: [&str; 8]) -> Row {
    fields.iter().map(|field| field.to_string()).collect()
}
