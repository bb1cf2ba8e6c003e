use std::io::Write;

use tempfile::NamedTempFile;

/// Creates a temporary file holding `contents`. The file is removed when the
/// returned handle is dropped.
pub fn temp_file_with(contents: impl AsRef<[u8]>) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_ref()).unwrap();
    file.flush().unwrap();
    file
}
