/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{CheckVersioningInputBuilder, CheckVersioningOutput};

/// Fluent builder for querying the versioning status of a bucket
#[derive(Debug)]
pub struct CheckVersioningFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CheckVersioningInputBuilder,
}

impl CheckVersioningFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the `GetBucketVersioning` request
    pub async fn send(self) -> Result<CheckVersioningOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::check_versioning::CheckVersioning::orchestrate(self.handle, input).await
    }

    /// Set the bucket to query.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to query.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to query.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl crate::operation::check_versioning::input::CheckVersioningInputBuilder {
    /// Query the versioning status with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<CheckVersioningOutput, Error> {
        let mut fluent_builder = client.check_versioning();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
