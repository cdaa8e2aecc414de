// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "passguard", "passguard") {
        Some(proj_dirs) => Some(proj_dirs.data_dir().to_path_buf()),
        None => {
            log::warn!("Could not determine data directory");
            None
        }
    }
}
