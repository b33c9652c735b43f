// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Appending to `.env` style files.

use std::{
    fs::OpenOptions,
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
};

/// Appends a `# header` comment line followed by `KEY=VALUE` lines, creating the file if needed.
///
/// Existing content is never rewritten. If the file doesn't end with a newline, one is written
/// first. Values are written as is, without quoting or escaping.
pub fn append(path: &Path, header: &str, entries: &[(&str, &str)]) -> io::Result<()> {
    let mut file = OpenOptions::new().read(true).append(true).create(true).open(path)?;

    let mut buffer = String::new();
    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            buffer.push('\n');
        }
    }

    buffer.push_str(&format!("# {}\n", header));
    for (key, value) in entries {
        buffer.push_str(&format!("{}={}\n", key, value));
    }

    // Single write so a failure can't leave a header without its entries.
    file.write_all(buffer.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::append;

    use std::fs;

    #[test]
    fn creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        append(&path, "Meta", &[("A", "1"), ("B", "two words")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Meta\nA=1\nB=two words\n");
    }

    #[test]
    fn keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "DATABASE_URL=mysql://localhost/app").unwrap();

        append(&path, "Meta", &[("A", "1")]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "DATABASE_URL=mysql://localhost/app\n# Meta\nA=1\n"
        );
    }

    #[test]
    fn is_additive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        append(&path, "Meta", &[("A", "1")]).unwrap();
        append(&path, "Meta", &[("A", "1")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Meta\nA=1\n# Meta\nA=1\n");
    }
}
