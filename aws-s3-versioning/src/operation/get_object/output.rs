/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectOutput as RawGetObjectOutput;
use aws_smithy_types::DateTime;
use bytes::Bytes;

use crate::types::Metadata;

/// Response from fetching a single object
///
/// The body has already been read into memory, the raw provider response is kept with an
/// empty body.
#[non_exhaustive]
#[derive(Debug)]
pub struct GetObjectOutput {
    body: Bytes,
    raw: RawGetObjectOutput,
}

impl GetObjectOutput {
    pub(crate) fn new(body: Bytes, raw: RawGetObjectOutput) -> Self {
        Self { body, raw }
    }

    /// The object data.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the output and return the object data.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Version id of the returned object.
    pub fn version_id(&self) -> Option<&str> {
        self.raw.version_id()
    }

    /// User-defined metadata stored with the object.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.raw.metadata()
    }

    /// The standard MIME type of the object.
    pub fn content_type(&self) -> Option<&str> {
        self.raw.content_type()
    }

    /// Size of the body in bytes as reported by the provider.
    pub fn content_length(&self) -> Option<i64> {
        self.raw.content_length()
    }

    /// Entity tag of the object.
    pub fn e_tag(&self) -> Option<&str> {
        self.raw.e_tag()
    }

    /// Creation date of the object.
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.raw.last_modified()
    }

    /// Whether the retrieved version is a delete marker.
    pub fn delete_marker(&self) -> bool {
        self.raw.delete_marker().unwrap_or_default()
    }

    /// The provider response, without its body.
    pub fn raw(&self) -> &RawGetObjectOutput {
        &self.raw
    }
}
