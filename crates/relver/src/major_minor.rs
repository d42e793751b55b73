//! Bare `major` / `major.minor` strings.

use crate::error::{MajorMinorReason, Result, VersionError};

/// Minor value reported when the input names only a major version
pub const MINOR_UNSPECIFIED: i32 = -1;

/// Parse `"MAJOR"` or `"MAJOR.MINOR"`.
///
/// A bare major yields [`MINOR_UNSPECIFIED`] as the minor.
pub fn parse_major_minor(text: &str) -> Result<(i32, i32)> {
    let parts: Vec<&str> = text.split('.').collect();

    let major = parts[0].parse::<i32>().map_err(|cause| {
        invalid(
            text,
            MajorMinorReason::NonNumericMajor {
                literal: parts[0].to_string(),
                cause,
            },
        )
    })?;

    match parts.len() {
        1 => Ok((major, MINOR_UNSPECIFIED)),
        2 => {
            let minor = parts[1].parse::<i32>().map_err(|cause| {
                invalid(
                    text,
                    MajorMinorReason::NonNumericMinor {
                        literal: parts[1].to_string(),
                        cause,
                    },
                )
            })?;
            Ok((major, minor))
        }
        _ => Err(invalid(
            text,
            MajorMinorReason::TooManyComponents(text.to_string()),
        )),
    }
}

fn invalid(text: &str, reason: MajorMinorReason) -> VersionError {
    tracing::debug!(input = text, %reason, "rejected major.minor");
    VersionError::InvalidMajorMinor {
        input: text.to_string(),
        reason,
    }
}
