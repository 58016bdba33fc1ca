//! Errors raised while resolving entry points.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal entry-resolution failure. The build must stop.
#[derive(Error, Debug)]
pub enum EntryError {
    /// A discovery pattern could not be compiled.
    #[error("invalid discovery pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A path matched during discovery could not be read.
    #[error("discovery failed: {0}")]
    Glob(#[from] glob::GlobError),

    /// Discovery paths must be valid UTF-8 to be handed to the bundler.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// A manifest file could not be read.
    #[error("cannot read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not a valid manifest document.
    #[error("cannot parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A manifest parsed but cannot name any entry.
    #[error("invalid manifest {}: {reason}", path.display())]
    ManifestInvalid { path: PathBuf, reason: String },

    /// The manifest schema failed to compile.
    #[error(transparent)]
    Schema(#[from] janus_schema::SchemaError),

    /// Two or more sources produced the same entry name.
    #[error(
        "naming collision in part manifests or themes: expected {expected} entries, found {actual}\n{}",
        format_collisions(.collisions)
    )]
    NamingCollision {
        /// `fixed + 2 * manifests + themes`.
        expected: usize,
        /// Keys actually present after the merge.
        actual: usize,
        /// Every colliding name with the sources that claimed it.
        collisions: Vec<Collision>,
    },
}

/// One entry name claimed by more than one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The contested entry name.
    pub name: String,
    /// Where each claim came from (manifest path, theme path, or `<fixed>`).
    pub origins: Vec<String>,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.name, self.origins.join(", "))
    }
}

fn format_collisions(collisions: &[Collision]) -> String {
    collisions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_every_origin() {
        let err = EntryError::NamingCollision {
            expected: 10,
            actual: 8,
            collisions: vec![Collision {
                name: "slider_authoring".into(),
                origins: vec!["a/manifest.json".into(), "b/manifest.json".into()],
            }],
        };
        let text = err.to_string();
        assert!(text.contains("expected 10 entries, found 8"));
        assert!(text.contains("slider_authoring: a/manifest.json, b/manifest.json"));
    }
}
