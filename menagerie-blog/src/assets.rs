//! Dataset asset loading.
//!
//! The dataset is a JSON asset of user records, produced outside this
//! program. Loading is the only input boundary: the asset must parse and
//! carry unique user ids, everything else is trusted as pre-validated.

use std::{fs, path::Path};

use anyhow::{Context as _, Error};

use menagerie_model::{Dataset, User};

/// Loads and validates the user records asset at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, Error> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset asset `{}`", path.display()))?;

    let users: Vec<User> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed dataset asset `{}`", path.display()))?;

    tracing::debug!(users = users.len(), "loaded dataset asset");

    Dataset::new(users).map_err(Error::from)
}
