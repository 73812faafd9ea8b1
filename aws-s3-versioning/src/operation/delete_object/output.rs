/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput as RawDeleteObjectOutput;

/// Response from deleting a key or a single object version
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteObjectOutput {
    raw: RawDeleteObjectOutput,
}

impl DeleteObjectOutput {
    /// Whether the version that was created or removed is a delete marker.
    ///
    /// For an unqualified delete on a versioned bucket this is `true` and
    /// [`version_id`](Self::version_id) is the id of the new marker.
    pub fn delete_marker(&self) -> bool {
        self.raw.delete_marker().unwrap_or_default()
    }

    /// Version id of the delete marker created, or of the version removed.
    pub fn version_id(&self) -> Option<&str> {
        self.raw.version_id()
    }

    /// The unmodified provider response.
    pub fn raw(&self) -> &RawDeleteObjectOutput {
        &self.raw
    }

    /// Consume the output and return the unmodified provider response.
    pub fn into_raw(self) -> RawDeleteObjectOutput {
        self.raw
    }
}

impl From<RawDeleteObjectOutput> for DeleteObjectOutput {
    fn from(value: RawDeleteObjectOutput) -> Self {
        Self { raw: value }
    }
}
