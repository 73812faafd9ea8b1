/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{DeleteObjectInputBuilder, DeleteObjectOutput};

/// Fluent builder for deleting a key without a version qualifier
#[derive(Debug)]
pub struct DeleteObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteObjectInputBuilder,
}

impl DeleteObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the `DeleteObject` request
    pub async fn send(self) -> Result<DeleteObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::delete_object::DeleteObject::orchestrate(self.handle, input).await
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
}

impl crate::operation::delete_object::input::DeleteObjectInputBuilder {
    /// Delete a key with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DeleteObjectOutput, Error> {
        let mut fluent_builder = client.delete_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
