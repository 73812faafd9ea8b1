/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{GetObjectInputBuilder, GetObjectOutput};

/// Fluent builder for fetching a single object
#[derive(Debug)]
pub struct GetObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: GetObjectInputBuilder,
}

impl GetObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the `GetObject` request and read the body into memory
    pub async fn send(self) -> Result<GetObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::get_object::GetObject::orchestrate(self.handle, input).await
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

    /// Pin the request to a specific version of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.version_id(input);
        self
    }

    /// Pin the request to a specific version of the object, `None` fetches the latest version.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_version_id(input);
        self
    }

    /// The version of the object to fetch.
    pub fn get_version_id(&self) -> &Option<String> {
        self.inner.get_version_id()
    }
}

impl crate::operation::get_object::input::GetObjectInputBuilder {
    /// Fetch a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<GetObjectOutput, Error> {
        let mut fluent_builder = client.get_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
