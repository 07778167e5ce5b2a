use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{FldistError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// Unlike extension sniffing, the caller decides whether the bytes are
/// compressed. A path that does not exist is reported as
/// [FldistError::SourceNotFound] so callers can recover from it.
///
/// # Arguments
///
/// - path: path to the file to read
/// - compressed: decode the file as gzip
///
pub fn get_dynamic_reader(path: &Path, compressed: bool) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FldistError::SourceNotFound(path.to_path_buf()),
        _ => FldistError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let file: Box<dyn Read> = match compressed {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Whether a line carries no record: blank lines, `#` comments and
/// `track` header lines.
///
/// The prefix checks look at the raw line, so an indented `#` is not a comment.
pub fn is_skippable_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#') || line.starts_with("track")
}

///
/// Format a count with `,` thousands separators, e.g. `12345` -> `12,345`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
