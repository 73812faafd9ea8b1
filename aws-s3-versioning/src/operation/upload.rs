/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for uploads to Amazon S3
pub use input::{UploadInput, UploadInputBuilder};

mod output;
/// Response type for uploads to Amazon S3
pub use output::UploadOutput;

use crate::error;
use std::sync::Arc;

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `PutObject` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let UploadInput {
            locator,
            body,
            metadata,
            content_type,
        } = input;

        let content_length = body.len();
        tracing::debug!("uploading {content_length} bytes to {locator}");

        let resp = handle
            .client()
            .put_object()
            .bucket(locator.bucket())
            .key(locator.key())
            .content_length(content_length as i64)
            .body(body.into_byte_stream())
            .set_metadata((!metadata.is_empty()).then_some(metadata))
            .set_content_type(content_type)
            .send()
            .await?;

        tracing::debug!(
            "uploaded {locator}; version_id={:?} e_tag={:?}",
            resp.version_id(),
            resp.e_tag()
        );
        Ok(resp.into())
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::io::Payload;
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    #[tokio::test]
    async fn test_basic_upload_object() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("example/myimage")
                    && r.body().bytes() == Some(b"every adolescent dog goes bonkers early".as_slice())
                    && r.content_length() == Some(39)
                    && r.metadata().and_then(|m| m.get("Content-Type")).map(String::as_str)
                        == Some("image/png")
                    && r.content_type().is_none()
            })
            .then_output(|| {
                PutObjectOutput::builder()
                    .e_tag("test-etag")
                    .version_id("v1")
                    .build()
            });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let resp = client
            .upload()
            .bucket("test-bucket")
            .key("example/myimage")
            .body(Payload::from_static(
                b"every adolescent dog goes bonkers early",
            ))
            .metadata("Content-Type", "image/png")
            .send()
            .await
            .unwrap();

        assert_eq!(Some("v1"), resp.version_id());
        assert_eq!(Some("test-etag"), resp.e_tag());
        assert_eq!(1, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_upload_without_metadata() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.metadata().is_none() && r.content_type() == Some("text/plain"))
            .then_output(|| PutObjectOutput::builder().build());

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let resp = crate::operation::upload::UploadInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .body("plain text")
            .content_type("text/plain")
            .send_with(&client)
            .await
            .unwrap();

        // unversioned buckets do not assign a version id
        assert_eq!(None, resp.version_id());
    }

    #[tokio::test]
    async fn test_upload_error_propagates() {
        let put_object = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
            PutObjectError::generic(
                ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("Access Denied")
                    .build(),
            )
        });

        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
        let config = crate::Config::builder().client(client).build().unwrap();
        let client = crate::Client::new(config);

        let err = client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body("data")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::ProviderError, err.kind());
        assert_eq!(Some("AccessDenied"), err.code());
        assert_eq!(1, put_object.num_calls());
    }
}
