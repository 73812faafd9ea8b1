/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::io::Payload;
use crate::types::Metadata;

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the `PutObject` request
    pub async fn send(self) -> Result<UploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }

    /// Set the bucket name to which the object is written.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name to which the object is written.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to which the object is written.
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

    /// Set the object data.
    pub fn body(mut self, input: impl Into<Payload>) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Set the object data.
    pub fn set_body(mut self, input: Option<Payload>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// The object data.
    pub fn get_body(&self) -> &Option<Payload> {
        self.inner.get_body()
    }

    /// Adds a key-value pair to the user-defined metadata stored with the object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// Set the user-defined metadata stored with the object.
    pub fn set_metadata(mut self, input: Option<Metadata>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }

    /// The user-defined metadata stored with the object.
    pub fn get_metadata(&self) -> &Option<Metadata> {
        self.inner.get_metadata()
    }

    /// Set the standard MIME type (`Content-Type` header) of the object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Set the standard MIME type (`Content-Type` header) of the object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// The standard MIME type (`Content-Type` header) of the object.
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }
}

impl crate::operation::upload::input::UploadInputBuilder {
    /// Upload a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
