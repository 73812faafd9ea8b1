/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(dead_code)]

use aws_s3_versioning::Client;
use aws_sdk_s3::operation::delete_object::{DeleteObjectError, DeleteObjectOutput};
use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_mocks::{mock, Rule};
use aws_smithy_types::error::ErrorMetadata;

pub const BUCKET: &str = "testbucket-1002";
pub const KEY: &str = "example/myimage";

/// Build a client that replays `rules` in order.
pub fn sequential_client(rules: &[&Rule]) -> Client {
    let s3 = aws_smithy_mocks::mock_client!(aws_sdk_s3, aws_smithy_mocks::RuleMode::Sequential, rules);
    let config = aws_s3_versioning::Config::builder()
        .client(s3)
        .build()
        .unwrap();
    Client::new(config)
}

/// `PutObject` on [`BUCKET`]/[`KEY`] with the given body, answered with `version_id`.
pub fn put_version(body: &'static [u8], version_id: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::put_object)
        .match_requests(move |r| {
            r.bucket() == Some(BUCKET) && r.key() == Some(KEY) && r.body().bytes() == Some(body)
        })
        .then_output(move || PutObjectOutput::builder().version_id(version_id).build())
}

/// `GetObject` for `requested` (`None` = latest), answered with `body` as `version_id`.
pub fn get_version(
    requested: Option<&'static str>,
    body: &'static [u8],
    version_id: &'static str,
) -> Rule {
    mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |r| {
            r.bucket() == Some(BUCKET) && r.key() == Some(KEY) && r.version_id() == requested
        })
        .then_output(move || {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(body))
                .content_length(body.len() as i64)
                .version_id(version_id)
                .metadata("Content-Type", "image/png")
                .build()
        })
}

/// `GetObject` for `requested` failing with the provider error `code`.
pub fn get_error(requested: Option<&'static str>, code: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |r| r.version_id() == requested)
        .then_error(move || GetObjectError::generic(ErrorMetadata::builder().code(code).build()))
}

/// `DeleteObject` with an optional version qualifier.
pub fn delete(
    requested: Option<&'static str>,
    delete_marker: bool,
    version_id: &'static str,
) -> Rule {
    mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(move |r| {
            r.bucket() == Some(BUCKET) && r.key() == Some(KEY) && r.version_id() == requested
        })
        .then_output(move || {
            DeleteObjectOutput::builder()
                .delete_marker(delete_marker)
                .version_id(version_id)
                .build()
        })
}

/// `DeleteObject` for `requested` failing with the provider error `code`.
pub fn delete_error(requested: &'static str, code: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(move |r| r.version_id() == Some(requested))
        .then_error(move || {
            DeleteObjectError::generic(ErrorMetadata::builder().code(code).build())
        })
}
