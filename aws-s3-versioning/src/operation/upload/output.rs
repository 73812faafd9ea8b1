/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::put_object::PutObjectOutput;

/// Response from uploading a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadOutput {
    raw: PutObjectOutput,
}

impl UploadOutput {
    /// Version id assigned to the new object.
    ///
    /// Only present when versioning is enabled on the bucket.
    pub fn version_id(&self) -> Option<&str> {
        self.raw.version_id()
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.raw.e_tag()
    }

    /// The unmodified provider response.
    pub fn raw(&self) -> &PutObjectOutput {
        &self.raw
    }

    /// Consume the output and return the unmodified provider response.
    pub fn into_raw(self) -> PutObjectOutput {
        self.raw
    }
}

impl From<PutObjectOutput> for UploadOutput {
    fn from(value: PutObjectOutput) -> Self {
        Self { raw: value }
    }
}
