// Output naming: `<code>_book.txt` next to the input, where code is the file stem

use std::path::{Path, PathBuf};

/// Suffix appended to the code to form the output file name
pub const OUTPUT_SUFFIX: &str = "_book.txt";

/// Derive the book code from an input path.
///
/// The code is the basename with its last extension removed, so `TTL.txt`
/// gives `TTL` and `a.b.txt` gives `a.b`.
pub fn derive_code(input_path: &Path) -> String {
    input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Generate the output path for a given input path
pub fn generate_output_path(input_path: &Path) -> PathBuf {
    let mut output_path = input_path.to_path_buf();
    output_path.set_file_name(format!("{}{OUTPUT_SUFFIX}", derive_code(input_path)));
    output_path
}

/// Check if the output for a given input already exists
pub fn output_exists<P: AsRef<Path>>(input_path: P) -> bool {
    generate_output_path(input_path.as_ref()).exists()
}
