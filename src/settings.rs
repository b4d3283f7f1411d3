use anyhow::*;
use std::env;
use std::path::PathBuf;

use crate::question::UserId;
use crate::uploads::local::get_default_upload_dir;

pub const OWNER_ID_VAR: &str = "QUIZTOOLS_OWNER_ID";
pub const UPLOAD_DIR_VAR: &str = "QUIZTOOLS_UPLOAD_DIR";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_OWNER_ID: UserId = UserId(1);
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug)]
pub struct Settings {
    pub owner_id: UserId,
    pub upload_dir: PathBuf,
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        dotenvy::dotenv().ok();
        Settings::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let owner_id = match non_blank(OWNER_ID_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(UserId)
                .with_context(|| {
                    format!("{} must be a user ID, got {:?}", OWNER_ID_VAR, value)
                })?,
            None => DEFAULT_OWNER_ID,
        };

        let upload_dir = match non_blank(UPLOAD_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => get_default_upload_dir()?,
        };

        let log_filter = non_blank(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Settings {
            owner_id,
            upload_dir,
            log_filter,
        })
    }
}
