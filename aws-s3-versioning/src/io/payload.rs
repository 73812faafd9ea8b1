/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::error;

/// Object body for uploads.
///
/// A `Payload` is always fully buffered in memory before a request is made, there is no
/// streaming or multipart support.
///
/// To create a `Payload`:
///
/// * From an in-memory source: use [`from_static`] or one of the provided `From` implementations.
/// * From a file path: use [`from_path`]
///
/// [`from_static`]: Payload::from_static
/// [`from_path`]: Payload::from_path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    inner: Bytes,
}

impl Payload {
    /// Create a new `Payload` from a static byte slice
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            inner: Bytes::from_static(bytes),
        }
    }

    /// Read the entire contents of the file at `path` into a new `Payload`.
    ///
    /// The file is read synchronously.
    ///
    /// # Examples
    /// ```no_run
    /// use aws_s3_versioning::io::Payload;
    ///
    /// fn load() -> Payload {
    ///     Payload::from_path("myimage.png").expect("file should be readable")
    /// }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Payload, error::Error> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self { inner: data.into() })
    }

    /// The size of the payload in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The payload contents
    pub fn as_bytes(&self) -> &Bytes {
        &self.inner
    }

    /// Consume the payload and return the underlying bytes
    pub fn into_bytes(self) -> Bytes {
        self.inner
    }

    /// Converts `Payload` to a `ByteStream` that can be used in `PutObject`.
    pub(crate) fn into_byte_stream(self) -> ByteStream {
        ByteStream::from(self.inner)
    }
}

impl From<Bytes> for Payload {
    fn from(value: Bytes) -> Self {
        Self { inner: value }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Self {
            inner: value.into(),
        }
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self {
            inner: value.into(),
        }
    }
}

impl From<&'static str> for Payload {
    fn from(value: &'static str) -> Self {
        Self::from_static(value.as_bytes())
    }
}
