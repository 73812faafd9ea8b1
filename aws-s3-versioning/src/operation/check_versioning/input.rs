/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::required;

/// Input type for querying the versioning status of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckVersioningInput {
    pub(crate) bucket: String,
}

impl CheckVersioningInput {
    /// Creates a new builder-style object to manufacture [`CheckVersioningInput`](crate::operation::check_versioning::CheckVersioningInput).
    pub fn builder() -> CheckVersioningInputBuilder {
        CheckVersioningInputBuilder::default()
    }

    /// The bucket to query.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// A builder for [`CheckVersioningInput`](crate::operation::check_versioning::CheckVersioningInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CheckVersioningInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl CheckVersioningInputBuilder {
    /// Set the bucket to query.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to query.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to query.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`CheckVersioningInput`](crate::operation::check_versioning::CheckVersioningInput).
    pub fn build(self) -> Result<CheckVersioningInput, BuildError> {
        let bucket = required("bucket", self.bucket, "A bucket is required")?;
        Ok(CheckVersioningInput { bucket })
    }
}
