/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// Provider failures are never retried or suppressed locally. The underlying SDK error is kept
/// as the [`source`](std::error::Error::source) of this error and the provider error code
/// is available through [`Error::code`].
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    source: BoxError,
}

/// General categories of errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues (e.g. empty bucket or key)
    InputInvalid,

    /// I/O errors (e.g. reading a payload from disk, reading a response body)
    IOError,

    /// Resource not found (e.g. bucket, key or version not found)
    NotFound,

    /// Any other failure reported by the storage provider (auth failure, throttling,
    /// network failure, etc)
    ProviderError,
}

/// Provider error codes that are reported as [`ErrorKind::NotFound`].
const NOT_FOUND_CODES: &[&str] = &["NotFound", "NoSuchKey", "NoSuchVersion", "NoSuchBucket"];

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            code: None,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the error code reported by the storage provider, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns true if the storage provider reported the bucket, key or version as missing.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ProviderError => write!(f, "storage provider error"),
        }?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let code = value.code().map(str::to_owned);
        let kind = match code.as_deref() {
            Some(code) if NOT_FOUND_CODES.contains(&code) => ErrorKind::NotFound,
            _ => ErrorKind::ProviderError,
        };

        Error {
            kind,
            code,
            source: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::delete_object::DeleteObjectError;
    use aws_smithy_types::error::ErrorMetadata;

    fn service_error(code: &str) -> SdkError<DeleteObjectError, ()> {
        let err = DeleteObjectError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message("test message")
                .build(),
        );
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_not_found_codes() {
        for code in ["NotFound", "NoSuchKey", "NoSuchVersion", "NoSuchBucket"] {
            let err = Error::from(service_error(code));
            assert_eq!(&ErrorKind::NotFound, err.kind());
            assert_eq!(Some(code), err.code());
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn test_other_provider_codes() {
        let err = Error::from(service_error("AccessDenied"));
        assert_eq!(&ErrorKind::ProviderError, err.kind());
        assert_eq!(Some("AccessDenied"), err.code());
        assert_eq!("storage provider error (AccessDenied)", err.to_string());
    }

    #[test]
    fn test_source_is_sdk_error() {
        let err = Error::from(service_error("InvalidArgument"));
        let source = std::error::Error::source(&err).expect("source set");
        assert!(source
            .downcast_ref::<SdkError<DeleteObjectError, ()>>()
            .is_some());
    }

    #[test]
    fn test_io_error() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(&ErrorKind::IOError, err.kind());
        assert_eq!(None, err.code());
        assert_eq!("I/O error", err.to_string());
    }
}
