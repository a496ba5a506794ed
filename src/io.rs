//! Input source and output sink.
//!
//! A path of `-` means stdin for input and stdout for output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Whether `path` names a standard stream rather than a file.
#[inline]
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read every line of the source.
///
/// Fails with [`ConvertError::MissingInput`] if a named file does not exist.
/// Line endings are removed and a final newline does not add an empty line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let input = if is_stdio(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| ConvertError::io(path, err))?;
        buf
    } else {
        if !path.exists() {
            return Err(ConvertError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))?
    };

    let lines: Vec<String> = input.lines().map(str::to_owned).collect();
    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Write `lines` joined by `\n`, with no trailing newline.
///
/// A named file is created or overwritten.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let output = lines.join("\n");

    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| ConvertError::io(path, err))?;
    } else {
        fs::write(path, output).map_err(|err| ConvertError::io(path, err))?;
    }

    debug!(path = %path.display(), lines = lines.len(), "wrote output");
    Ok(())
}
