//! Standard filesystem locations for the utility.

use std::path::PathBuf;

/// Base data directory.
///
/// On Windows: `C:\ProgramData\Multiclient`
/// On other platforms: the platform project data dir (for development)
pub fn data_dir() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(r"C:\ProgramData\Multiclient")
    }

    #[cfg(not(windows))]
    {
        directories::ProjectDirs::from("io", "Multiclient", "Multiclient")
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".local")
                    .join("share")
                    .join("multiclient")
            })
    }
}

/// Log directory, created on demand.
///
/// On Windows: `C:\ProgramData\Multiclient\logs`
pub fn log_dir() -> std::io::Result<PathBuf> {
    let path = data_dir().join("logs");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_not_empty() {
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn log_dir_sits_under_data_dir() {
        let expected = data_dir().join("logs");
        assert!(expected.starts_with(data_dir()));
    }
}
