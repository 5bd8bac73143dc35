//! Run-scoped output context.
//!
//! Each job writes intermediate output under a unique per-run scratch path
//! built from the environment: scratch prefix, active user, and a fresh run
//! id. These values name output locations only; they never influence the
//! cleaning logic.

use std::env;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PrepError, PrepResult};

/// Identity of a single job run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunContext {
    /// Unique id for this run.
    pub uid: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Worker image identifier, if the host runtime provides one.
    pub image: Option<String>,
    /// Scratch storage prefix (e.g. "gs://scratch-bucket/prefix").
    pub scratch_prefix: String,
    /// Active user name.
    pub user: String,
}

impl RunContext {
    /// Build a context from the environment.
    ///
    /// `CIL_SCRATCH_PREFIX` and `JUPYTERHUB_USER` are required;
    /// `JUPYTER_IMAGE` is informational and optional.
    pub fn from_env() -> PrepResult<Self> {
        let scratch_prefix = env::var("CIL_SCRATCH_PREFIX")
            .map_err(|_| PrepError::MissingEnv("CIL_SCRATCH_PREFIX".to_string()))?;
        let user = env::var("JUPYTERHUB_USER")
            .map_err(|_| PrepError::MissingEnv("JUPYTERHUB_USER".to_string()))?;
        let image = env::var("JUPYTER_IMAGE").ok();

        Ok(Self {
            uid: Uuid::new_v4(),
            started_at: Utc::now(),
            image,
            scratch_prefix,
            user,
        })
    }

    /// Run-scoped scratch location for a named output.
    ///
    /// Format: `{scratch_prefix}/{user}/{uid}/{name}`.
    pub fn scratch_path(&self, name: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.scratch_prefix.trim_end_matches('/'),
            self.user,
            self.uid,
            name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> RunContext {
        RunContext {
            uid: Uuid::nil(),
            started_at: Utc::now(),
            image: None,
            scratch_prefix: "gs://scratch/".to_string(),
            user: "brews".to_string(),
        }
    }

    #[test]
    fn test_scratch_path() {
        let ctx = test_context();
        assert_eq!(
            ctx.scratch_path("cmip5.zarr"),
            format!("gs://scratch/brews/{}/cmip5.zarr", Uuid::nil())
        );
    }
}
