/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for fetching an object
pub use input::{GetObjectInput, GetObjectInputBuilder};

mod output;
/// Response type for fetching an object
pub use output::GetObjectOutput;

use crate::error;
use std::sync::Arc;

/// Operation struct for fetching a single object or object version
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` request and collect the body
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetObjectInput,
    ) -> Result<GetObjectOutput, error::Error> {
        let GetObjectInput {
            locator,
            version_id,
        } = input;

        tracing::debug!(
            "fetching {locator} (version: {})",
            version_id.as_deref().unwrap_or("latest")
        );

        let mut resp = handle
            .client()
            .get_object()
            .bucket(locator.bucket())
            .key(locator.key())
            .set_version_id(version_id)
            .send()
            .await?;

        let body = std::mem::take(&mut resp.body).collect().await?.into_bytes();
        tracing::debug!(
            "fetched {} bytes from {locator}; version_id={:?}",
            body.len(),
            resp.version_id()
        );
        Ok(GetObjectOutput::new(body, resp))
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    #[tokio::test]
    async fn test_get_latest_version() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("test-key")
                    && r.version_id().is_none()
            })
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"latest data"))
                    .version_id("v2")
                    .content_length(11)
                    .metadata("Content-Type", "image/png")
                    .build()
            });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let resp = client
            .get_object()
            .bucket("test-bucket")
            .key("test-key")
            .send()
            .await
            .unwrap();

        assert_eq!(b"latest data".as_slice(), resp.body().as_ref());
        assert_eq!(Some("v2"), resp.version_id());
        assert_eq!(Some(11), resp.content_length());
        assert_eq!(
            Some("image/png"),
            resp.metadata()
                .and_then(|m| m.get("Content-Type"))
                .map(String::as_str)
        );
        assert!(!resp.delete_marker());
    }

    #[tokio::test]
    async fn test_get_specific_version() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.version_id() == Some("v1"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"first data"))
                    .version_id("v1")
                    .build()
            });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let resp = client
            .get_object()
            .bucket("test-bucket")
            .key("test-key")
            .version_id("v1")
            .send()
            .await
            .unwrap();

        assert_eq!(Some("v1"), resp.version_id());
        assert_eq!(b"first data".as_slice(), resp.into_body().as_ref());
    }

    #[tokio::test]
    async fn test_missing_version() {
        let get_object = mock!(aws_sdk_s3::Client::get_object).then_error(|| {
            GetObjectError::generic(
                ErrorMetadata::builder()
                    .code("NoSuchVersion")
                    .message("The specified version does not exist.")
                    .build(),
            )
        });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let err = client
            .get_object()
            .bucket("test-bucket")
            .key("test-key")
            .version_id("does-not-exist")
            .send()
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(Some("NoSuchVersion"), err.code());
    }

    #[tokio::test]
    async fn test_empty_key_is_rejected_locally() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().build());

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let err = client
            .get_object()
            .bucket("test-bucket")
            .key("")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert_eq!(0, get_object.num_calls());
    }
}
