use crate::shared::error::AppError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest input document (graph or build info) accepted: 100 MB
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that an input document can be read safely.
///
/// The path must exist, must not be a symbolic link, must be a regular
/// file and must not exceed `max_size` bytes. `symlink_metadata` is used so
/// the link itself is inspected rather than its target.
///
/// # Returns
/// The file size in bytes
pub fn validate_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AppError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Pass the path of the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AppError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the input or scan a smaller graph".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_regular_file_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("graph.json");
        fs::write(&file_path, "{}").unwrap();

        let size = validate_input_file(&file_path, "graph", MAX_INPUT_FILE_SIZE).unwrap();
        assert_eq!(size, 2);
    }

    #[test]
    fn test_missing_file_rejected() {
        let path = PathBuf::from("/nonexistent/graph.json");
        let result = validate_input_file(&path, "graph", MAX_INPUT_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_file(temp_dir.path(), "graph", MAX_INPUT_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("graph.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_input_file(&file_path, "graph", 4);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("graph.json");
        fs::write(&target, "{}").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_input_file(&link, "graph", MAX_INPUT_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
