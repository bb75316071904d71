//! Path literal classification and bidirectional conversion.
//!
//! Operates on quoted literals: text fragments that begin and end with a
//! quote character, as produced by the scanner. Conversion consults the
//! custom mapping table first and falls back to the `/mnt/<drive>`
//! convention.

use crate::mapping::MappingTable;

/// Directory prefix drives translate to when no custom mapping applies
pub const DEFAULT_MOUNT_ROOT: &str = "/mnt/";

/// Which convention a path literal is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Windows,
    Linux,
}

/// Classify a quoted literal by the character after the opening quote.
///
/// A leading `/` means Linux, anything else means Windows. This heuristic is
/// only valid for absolute paths; relative paths may misclassify.
pub fn classify(literal: &str) -> PathKind {
    if literal.chars().nth(1) == Some('/') {
        PathKind::Linux
    } else {
        PathKind::Windows
    }
}

/// Errors raised when a literal does not have the structure its
/// classification promised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Windows-style literal with no `:` ending the drive token
    MissingDriveColon { literal: String },
    /// Linux-style literal too short for the `/mnt/<drive>` convention, or
    /// missing the `/` that ends the drive segment
    MalformedMountPath { literal: String },
}

impl ConvertError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingDriveColon { literal } => {
                format!("could not convert {}: no drive separator found", literal)
            }
            Self::MalformedMountPath { literal } => {
                format!("could not convert {}: not a recognized mount path", literal)
            }
        }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDriveColon { literal } => {
                write!(f, "no drive separator in {}", literal)
            }
            Self::MalformedMountPath { literal } => {
                write!(f, "malformed mount path in {}", literal)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert a quoted Windows path literal to its Linux form.
///
/// Both escaped (`\\`) and raw (`\`) backslash forms are normalized to
/// forward slashes. The drive token is looked up in the custom table; drives
/// without an override fall back to `/mnt/<drive>` with the drive letter
/// lowercased. The original quote characters are retained.
pub fn to_linux(literal: &str, table: &MappingTable) -> Result<String, ConvertError> {
    // Normalize both backslash run-forms before delimiting the drive
    let text = literal.replace("\\\\", "/").replace('\\', "/");

    // Drive token: everything between the opening quote and the first `:`
    let colon = text[1..]
        .find(':')
        .map(|i| i + 1)
        .ok_or_else(|| ConvertError::MissingDriveColon {
            literal: literal.to_string(),
        })?;

    let drive = format!("{}:", &text[1..colon]);
    let mount = match table.mount_for_drive(&drive) {
        Some(mount) => mount.to_string(),
        None => format!("{}{}", DEFAULT_MOUNT_ROOT, text[1..colon].to_lowercase()),
    };

    Ok(format!("{}{}{}", &text[..1], mount, &text[colon + 1..]))
}

/// Convert a quoted Linux path literal to its Windows form.
///
/// Custom mount prefixes are tried first, longest match winning; otherwise
/// the literal is assumed to follow the `/mnt/<drive>` convention and the
/// drive letter is uppercased. Every forward slash in the result becomes a
/// backslash. This function never prepends a raw-string marker; whether one
/// is needed is the caller's concern.
pub fn to_windows(literal: &str, table: &MappingTable) -> Result<String, ConvertError> {
    let interior = &literal[1..];

    let converted = if let Some((drive, mount)) = table.mount_prefix_of(interior) {
        format!("{}{}{}", &literal[..1], drive, &interior[mount.len()..])
    } else {
        default_mount_to_windows(literal)?
    };

    Ok(converted.replace('/', "\\"))
}

/// Default-convention branch of [`to_windows`]: strip the `/mnt/` prefix and
/// uppercase the drive segment that follows it.
fn default_mount_to_windows(literal: &str) -> Result<String, ConvertError> {
    let malformed = || ConvertError::MalformedMountPath {
        literal: literal.to_string(),
    };

    // Drop the opening quote plus the five chars of `/mnt/`; what remains
    // must start with the drive segment
    let (after_mount, _) = literal.char_indices().nth(6).ok_or_else(malformed)?;
    let stripped = format!("{}{}", &literal[..1], &literal[after_mount..]);

    // The `/` after the drive segment must exist for the remainder to be
    // reattached
    let slash = stripped[1..]
        .find('/')
        .map(|i| i + 1)
        .ok_or_else(malformed)?;

    let drive = format!("{}:", stripped[1..slash].to_uppercase());
    Ok(format!("{}{}{}", &stripped[..1], drive, &stripped[slash..]))
}
