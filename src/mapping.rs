//! Immutable bidirectional drive ↔ mount-path table.
//!
//! Built once from configuration at startup and read-only for the rest of
//! the process; the reverse (mount → drive) view is derived at construction,
//! never recomputed per lookup.

use std::collections::BTreeMap;

/// Errors raised while building a mapping table from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Two drives configured with the same mount path
    DuplicateMount {
        mount: String,
        first: String,
        second: String,
    },
}

impl MappingError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateMount {
                mount,
                first,
                second,
            } => format!(
                "mount path {} is mapped from both {} and {}; each mount path must belong to exactly one drive",
                mount, first, second
            ),
        }
    }
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateMount {
                mount,
                first,
                second,
            } => write!(f, "duplicate mount path {} ({} and {})", mount, first, second),
        }
    }
}

impl std::error::Error for MappingError {}

/// Custom drive ↔ mount-path overrides.
///
/// Maps Windows drive tokens (`"D:"`) to the POSIX directory prefixes they
/// translate to (`"/data"`), in both directions. The mapping must be a
/// bijection over the configured entries; violations are rejected at
/// construction rather than resolved by iteration order.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    by_drive: BTreeMap<String, String>,
    by_mount: BTreeMap<String, String>,
}

impl MappingTable {
    /// Build the table from configured `drive → mount` entries, deriving the
    /// reverse view
    pub fn new(entries: &BTreeMap<String, String>) -> Result<Self, MappingError> {
        let mut by_mount = BTreeMap::new();

        for (drive, mount) in entries {
            if let Some(first) = by_mount.insert(mount.clone(), drive.clone()) {
                return Err(MappingError::DuplicateMount {
                    mount: mount.clone(),
                    first,
                    second: drive.clone(),
                });
            }
        }

        Ok(Self {
            by_drive: entries.clone(),
            by_mount,
        })
    }

    /// Table with no custom overrides (pure default-convention behavior)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_drive.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_drive.len()
    }

    /// Mount path configured for a drive token, if any
    pub fn mount_for_drive(&self, drive: &str) -> Option<&str> {
        self.by_drive.get(drive).map(String::as_str)
    }

    /// Drive token configured for an exact mount path, if any
    pub fn drive_for_mount(&self, mount: &str) -> Option<&str> {
        self.by_mount.get(mount).map(String::as_str)
    }

    /// Find the configured mount path that is a strict prefix of `candidate`.
    ///
    /// The longest matching prefix wins, so overlapping mounts (`/data`,
    /// `/data/archive`) resolve deterministically. Strict means the prefix
    /// must be shorter than `candidate`: a mount never matches a path with
    /// nothing after it.
    pub fn mount_prefix_of(&self, candidate: &str) -> Option<(&str, &str)> {
        self.by_mount
            .iter()
            .filter(|(mount, _)| mount.len() < candidate.len() && candidate.starts_with(mount.as_str()))
            .max_by_key(|(mount, _)| mount.len())
            .map(|(mount, drive)| (drive.as_str(), mount.as_str()))
    }
}
