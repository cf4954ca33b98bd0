//! Environment-variable path configuration: a raw source directory, an
//! edited (filtered) directory, and the leagues output directory.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const ORIGINAL_DATASET_ENV: &str = "ORIGINAL_DATASET_PATH";
pub const EDITED_DATASET_ENV: &str = "EDITED_DATASET_PATH";
pub const LEAGUES_ENV: &str = "LEAGUES_PATH";

pub const SOURCE_FILE: &str = "male_players.csv";
pub const EDITED_FILE: &str = "male_players_edited.csv";
pub const DRAFT_FILE: &str = "super_draft.csv";
pub const METADATA_FILE: &str = "draft_metadata.json";

#[derive(Debug, Clone)]
pub struct DraftPaths {
    pub original_dir: PathBuf,
    pub edited_dir: PathBuf,
    pub leagues_dir: PathBuf,
}

impl DraftPaths {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            original_dir: require_env(ORIGINAL_DATASET_ENV)?,
            edited_dir: require_env(EDITED_DATASET_ENV)?,
            leagues_dir: require_env(LEAGUES_ENV)?,
        })
    }

    /// Input for the draft: the edited dataset when it exists, the raw
    /// source export otherwise.
    pub fn input_dataset(&self) -> Result<PathBuf> {
        let edited = self.edited_dataset();
        if edited.exists() {
            return Ok(edited);
        }
        let original = self.source_dataset();
        if original.exists() {
            return Ok(original);
        }
        anyhow::bail!(
            "no players dataset found: neither {} nor {} exists",
            edited.display(),
            original.display()
        )
    }

    pub fn source_dataset(&self) -> PathBuf {
        self.original_dir.join(SOURCE_FILE)
    }

    pub fn edited_dataset(&self) -> PathBuf {
        self.edited_dir.join(EDITED_FILE)
    }

    pub fn draft_output(&self) -> PathBuf {
        self.leagues_dir.join(DRAFT_FILE)
    }

    pub fn metadata_output(&self) -> PathBuf {
        self.leagues_dir.join(METADATA_FILE)
    }
}

fn require_env(name: &str) -> Result<PathBuf> {
    let value =
        env::var(name).with_context(|| format!("environment variable {} is not set", name))?;
    Ok(PathBuf::from(value))
}
