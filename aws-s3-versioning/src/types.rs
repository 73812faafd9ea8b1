/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::fmt;

use aws_sdk_s3::types::BucketVersioningStatus;
use aws_smithy_types::error::operation::BuildError;

/// User supplied object metadata, sent as `x-amz-meta-*` headers.
pub type Metadata = HashMap<String, String>;

/// Identifies a logical object within the storage namespace.
///
/// Both the bucket and the key are guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocator {
    bucket: String,
    key: String,
}

impl ObjectLocator {
    /// Create a new locator, rejecting empty bucket names or keys.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Result<Self, BuildError> {
        Self::from_parts(Some(bucket.into()), Some(key.into()))
    }

    /// Build a locator from the optional fields of an operation input builder.
    pub(crate) fn from_parts(
        bucket: Option<String>,
        key: Option<String>,
    ) -> Result<Self, BuildError> {
        let bucket = required("bucket", bucket, "A bucket is required")?;
        let key = required("key", key, "A key is required")?;
        Ok(Self { bucket, key })
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ObjectLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Unwrap a required, non-empty string field of an operation input.
pub(crate) fn required(
    field: &'static str,
    value: Option<String>,
    details: &'static str,
) -> Result<String, BuildError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BuildError::missing_field(field, details)),
    }
}

/// The versioning state of a bucket as observed from the storage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningStatus {
    /// Versioning is enabled, every write creates a new version.
    Enabled,

    /// Versioning was enabled at some point and has since been suspended.
    Suspended,

    /// The provider did not report a recognised status. S3 omits the status entirely for
    /// buckets that never had versioning configured.
    Undetermined,
}

impl VersioningStatus {
    /// Returns true only if versioning is exactly [`VersioningStatus::Enabled`].
    pub fn is_enabled(&self) -> bool {
        matches!(self, VersioningStatus::Enabled)
    }
}

impl From<Option<&BucketVersioningStatus>> for VersioningStatus {
    fn from(value: Option<&BucketVersioningStatus>) -> Self {
        match value {
            Some(BucketVersioningStatus::Enabled) => VersioningStatus::Enabled,
            Some(BucketVersioningStatus::Suspended) => VersioningStatus::Suspended,
            _ => VersioningStatus::Undetermined,
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersioningStatus::Enabled => write!(f, "Enabled"),
            VersioningStatus::Suspended => write!(f, "Suspended"),
            VersioningStatus::Undetermined => write!(f, "Undetermined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectLocator, VersioningStatus};
    use aws_sdk_s3::types::BucketVersioningStatus;

    #[test]
    fn test_locator_rejects_empty_fields() {
        let err = ObjectLocator::new("", "key").unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));

        let err = ObjectLocator::new("bucket", "").unwrap_err();
        assert!(err.to_string().contains("A key is required"));

        let locator = ObjectLocator::new("bucket", "example/myimage").unwrap();
        assert_eq!("s3://bucket/example/myimage", locator.to_string());
    }

    #[test]
    fn test_versioning_status_from_provider() {
        let enabled = BucketVersioningStatus::Enabled;
        let suspended = BucketVersioningStatus::Suspended;
        let unknown = BucketVersioningStatus::from("Paused");

        assert_eq!(
            VersioningStatus::Enabled,
            VersioningStatus::from(Some(&enabled))
        );
        assert_eq!(
            VersioningStatus::Suspended,
            VersioningStatus::from(Some(&suspended))
        );
        assert_eq!(
            VersioningStatus::Undetermined,
            VersioningStatus::from(Some(&unknown))
        );
        assert_eq!(
            VersioningStatus::Undetermined,
            VersioningStatus::from(None::<&BucketVersioningStatus>)
        );

        assert!(VersioningStatus::Enabled.is_enabled());
        assert!(!VersioningStatus::Suspended.is_enabled());
        assert!(!VersioningStatus::Undetermined.is_enabled());
    }
}
