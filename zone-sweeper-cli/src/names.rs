//! 名称清单文件解析

use std::fs;
use std::io;
use std::path::Path;

/// Load record names from a plain-text file.
///
/// One name per line; lines are trimmed, blank lines and lines starting
/// with `#` are ignored.
pub fn load_names_from_file(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
