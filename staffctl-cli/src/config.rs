//! Environment loading
//!
//! `.env` in the working directory wins over `~/.staffctl/.env`; variables
//! already present in the process environment win over both.

use std::path::PathBuf;

/// Per-user env file: ~/.staffctl/.env
pub fn user_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".staffctl").join(".env"))
}

/// Load env files. Missing files are not an error.
pub fn load_env() {
    dotenvy::dotenv().ok();

    if let Some(path) = user_env_path() {
        if path.exists() {
            if let Err(err) = dotenvy::from_path(&path) {
                eprintln!("warning: failed to read {}: {}", path.display(), err);
            }
        }
    }
}

/// Resolve the database URL from an explicit flag or the environment.
pub fn database_url(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|url| !url.trim().is_empty())
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_env_lives_under_dot_staffctl() {
        if let Some(path) = user_env_path() {
            assert!(path.ends_with(".staffctl/.env"));
        }
    }

    #[test]
    fn explicit_url_wins() {
        let url = database_url(Some("postgres://localhost/flag".into()));
        assert_eq!(url.as_deref(), Some("postgres://localhost/flag"));
    }
}
