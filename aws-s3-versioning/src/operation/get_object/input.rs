/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::ObjectLocator;

/// Input type for fetching a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetObjectInput {
    pub(crate) locator: ObjectLocator,
    pub(crate) version_id: Option<String>,
}

impl GetObjectInput {
    /// Creates a new builder-style object to manufacture [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
    pub fn builder() -> GetObjectInputBuilder {
        GetObjectInputBuilder::default()
    }

    /// The bucket and key of the object.
    pub fn locator(&self) -> &ObjectLocator {
        &self.locator
    }

    /// The version to fetch, `None` for the latest version.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl GetObjectInputBuilder {
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

    /// Pin the request to a specific version of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Pin the request to a specific version of the object, `None` fetches the latest version.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// The version of the object to fetch.
    pub fn get_version_id(&self) -> &Option<String> {
        &self.version_id
    }

    /// Consumes the builder and constructs a [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
    pub fn build(self) -> Result<GetObjectInput, BuildError> {
        let locator = ObjectLocator::from_parts(self.bucket, self.key)?;
        if matches!(self.version_id.as_deref(), Some("")) {
            return Err(BuildError::invalid_field(
                "version_id",
                "A version id must not be empty, leave it unset to fetch the latest version",
            ));
        }

        Ok(GetObjectInput {
            locator,
            version_id: self.version_id,
        })
    }
}
