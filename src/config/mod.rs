pub mod default;

use std::path::PathBuf;

use anyhow::Result;

use default::USER_DIR_NAME;

/// Get the per-user directory (`~/.urlcheck`), creating it if missing.
pub fn get_user_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))?;
    let dir = home.join(USER_DIR_NAME);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get the path of a file inside the per-user directory.
pub fn get_user_file_path(file_name: &str) -> Result<PathBuf> {
    Ok(get_user_dir()?.join(file_name))
}
