//! Line parser for `key = value` files.
//!
//! The format is deliberately loose. Each line is handled on its own:
//!
//! - leading whitespace is stripped, then empty lines are skipped,
//! - lines starting with `#` are comments,
//! - the line is split on the **first** `=`; lines without one are skipped,
//! - the key loses trailing whitespace, the value loses surrounding
//!   whitespace and line terminators. Anything in between (spaces, quotes,
//!   further `=` signs) is kept verbatim.
//!
//! A repeated key overwrites the earlier one. Only I/O failures are errors.

use std::io::{self, BufRead};

use crate::table::KeyValueTable;

/// Read `reader` to the end and collect its pairs into a [`KeyValueTable`].
pub fn parse<R: BufRead>(mut reader: R) -> io::Result<KeyValueTable> {
    let mut table = KeyValueTable::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if let Some((key, value)) = parse_line(&line) {
            table.insert(key, value);
        }
    }

    Ok(table)
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim_end();
    let value = value.trim_end_matches(['\r', '\n']).trim();
    Some((key, value))
}
