// src/csv.rs
use std::io::Write;

use crate::data::DataSet;

/// Write a table as delimited text to any writer.
pub fn write_rows<W: Write>(w: W, ds: &DataSet, include_headers: bool, delimiter: u8) -> ::csv::Result<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(::csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(w);

    if include_headers {
        if let Some(h) = &ds.headers {
            wtr.write_record(h)?;
        }
    }
    for r in &ds.rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create a full export string from a table.
/// - `include_headers`: whether to emit a header line
/// - `delimiter`: field separator (`b','` or `b'\t'`)
pub fn to_export_string(ds: &DataSet, include_headers: bool, delimiter: u8) -> ::csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, ds, include_headers, delimiter)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
