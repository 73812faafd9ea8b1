/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_smithy_types::error::operation::BuildError;

use crate::io::Payload;
use crate::types::{Metadata, ObjectLocator};

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Clone)]
pub struct UploadInput {
    pub(crate) locator: ObjectLocator,
    pub(crate) body: Payload,
    pub(crate) metadata: Metadata,
    pub(crate) content_type: Option<String>,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// The bucket and key the object is written to.
    pub fn locator(&self) -> &ObjectLocator {
        &self.locator
    }

    /// The object data.
    pub fn body(&self) -> &Payload {
        &self.body
    }

    /// User-defined metadata stored with the object.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The standard MIME type of the object, if set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl fmt::Debug for UploadInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UploadInput");
        formatter.field("locator", &self.locator);
        formatter.field("body_len", &self.body.len());
        formatter.field("metadata", &self.metadata);
        formatter.field("content_type", &self.content_type);
        formatter.finish()
    }
}

/// A builder for [`UploadInput`](crate::operation::upload::UploadInput).
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct UploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) body: Option<Payload>,
    pub(crate) metadata: Option<Metadata>,
    pub(crate) content_type: Option<String>,
}

impl UploadInputBuilder {
    /// Set the bucket name to which the object is written.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name to which the object is written.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to which the object is written.
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

    /// Set the object data.
    ///
    /// NOTE: A body is required.
    pub fn body(mut self, input: impl Into<Payload>) -> Self {
        self.body = Some(input.into());
        self
    }

    /// Set the object data.
    ///
    /// NOTE: A body is required.
    pub fn set_body(mut self, input: Option<Payload>) -> Self {
        self.body = input;
        self
    }

    /// The object data.
    pub fn get_body(&self) -> &Option<Payload> {
        &self.body
    }

    /// Adds a key-value pair to the user-defined metadata stored with the object.
    ///
    /// To override the contents of this collection use [`set_metadata`](Self::set_metadata).
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut hash_map = self.metadata.unwrap_or_default();
        hash_map.insert(k.into(), v.into());
        self.metadata = Some(hash_map);
        self
    }

    /// Set the user-defined metadata stored with the object.
    pub fn set_metadata(mut self, input: Option<Metadata>) -> Self {
        self.metadata = input;
        self
    }

    /// The user-defined metadata stored with the object.
    pub fn get_metadata(&self) -> &Option<Metadata> {
        &self.metadata
    }

    /// Set the standard MIME type (`Content-Type` header) of the object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// Set the standard MIME type (`Content-Type` header) of the object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// The standard MIME type (`Content-Type` header) of the object.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Consumes the builder and constructs a [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn build(self) -> Result<UploadInput, BuildError> {
        let locator = ObjectLocator::from_parts(self.bucket, self.key)?;
        let body = self
            .body
            .ok_or_else(|| BuildError::missing_field("body", "A body is required"))?;

        Ok(UploadInput {
            locator,
            body,
            metadata: self.metadata.unwrap_or_default(),
            content_type: self.content_type,
        })
    }
}

impl fmt::Debug for UploadInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UploadInputBuilder");
        formatter.field("bucket", &self.bucket);
        formatter.field("key", &self.key);
        formatter.field("body_len", &self.body.as_ref().map(Payload::len));
        formatter.field("metadata", &self.metadata);
        formatter.field("content_type", &self.content_type);
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::UploadInput;

    #[test]
    fn test_no_body_error() {
        let err = UploadInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A body is required"));
    }

    #[test]
    fn test_no_key_error() {
        let err = UploadInput::builder()
            .bucket("test-bucket")
            .body("data")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A key is required"));
    }

    #[test]
    fn test_metadata_accumulates() {
        let input = UploadInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .body("data")
            .metadata("Content-Type", "image/png")
            .metadata("owner", "demo")
            .build()
            .unwrap();

        assert_eq!(2, input.metadata().len());
        assert_eq!(
            Some("image/png"),
            input.metadata().get("Content-Type").map(String::as_str)
        );
        assert_eq!("test-bucket", input.locator().bucket());
        assert_eq!(4, input.body().len());
    }
}
