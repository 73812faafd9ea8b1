/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{DeleteObjectOutput, DeleteObjectVersionInputBuilder};

/// Fluent builder for permanently deleting one version of an object
#[derive(Debug)]
pub struct DeleteObjectVersionFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteObjectVersionInputBuilder,
}

impl DeleteObjectVersionFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the version qualified `DeleteObject` request
    pub async fn send(self) -> Result<DeleteObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::delete_object_version::DeleteObjectVersion::orchestrate(
            self.handle,
            input,
        )
        .await
    }

    /// Set the bucket name containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the object key.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the object key.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The object key.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Set the version to delete, which may be the id of a delete marker.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.version_id(input);
        self
    }

    /// Set the version to delete, which may be the id of a delete marker.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_version_id(input);
        self
    }

    /// The version to delete.
    pub fn get_version_id(&self) -> &Option<String> {
        self.inner.get_version_id()
    }
}

impl crate::operation::delete_object_version::input::DeleteObjectVersionInputBuilder {
    /// Delete a single object version with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DeleteObjectOutput, Error> {
        let mut fluent_builder = client.delete_object_version();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
