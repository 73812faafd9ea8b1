/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::{required, ObjectLocator};

/// Input type for permanently deleting one version of an object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteObjectVersionInput {
    pub(crate) locator: ObjectLocator,
    pub(crate) version_id: String,
}

impl DeleteObjectVersionInput {
    /// Creates a new builder-style object to manufacture [`DeleteObjectVersionInput`](crate::operation::delete_object_version::DeleteObjectVersionInput).
    pub fn builder() -> DeleteObjectVersionInputBuilder {
        DeleteObjectVersionInputBuilder::default()
    }

    /// The bucket and key of the object.
    pub fn locator(&self) -> &ObjectLocator {
        &self.locator
    }

    /// The version to delete.
    pub fn version_id(&self) -> &str {
        &self.version_id
    }
}

/// A builder for [`DeleteObjectVersionInput`](crate::operation::delete_object_version::DeleteObjectVersionInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteObjectVersionInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl DeleteObjectVersionInputBuilder {
    /// Set the bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the object key.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set the object key.
    ///
    /// NOTE: A key is required.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The object key.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the version to delete, which may be the id of a delete marker.
    ///
    /// NOTE: A version id is required.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Set the version to delete, which may be the id of a delete marker.
    ///
    /// NOTE: A version id is required.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// The version to delete.
    pub fn get_version_id(&self) -> &Option<String> {
        &self.version_id
    }

    /// Consumes the builder and constructs a [`DeleteObjectVersionInput`](crate::operation::delete_object_version::DeleteObjectVersionInput).
    pub fn build(self) -> Result<DeleteObjectVersionInput, BuildError> {
        let locator = ObjectLocator::from_parts(self.bucket, self.key)?;
        let version_id = required("version_id", self.version_id, "A version id is required")?;
        Ok(DeleteObjectVersionInput {
            locator,
            version_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DeleteObjectVersionInput;

    #[test]
    fn test_no_version_id_error() {
        let err = DeleteObjectVersionInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A version id is required"));

        let err = DeleteObjectVersionInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .version_id("")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A version id is required"));
    }
}
