/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_bucket_versioning::GetBucketVersioningOutput;
use aws_sdk_s3::types::MfaDeleteStatus;

use crate::types::VersioningStatus;

/// Versioning status of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CheckVersioningOutput {
    status: VersioningStatus,
    raw: GetBucketVersioningOutput,
}

impl CheckVersioningOutput {
    pub(crate) fn new(raw: GetBucketVersioningOutput) -> Self {
        Self {
            status: VersioningStatus::from(raw.status()),
            raw,
        }
    }

    /// The versioning status reported by the provider.
    pub fn status(&self) -> VersioningStatus {
        self.status
    }

    /// Returns true only if the status is exactly `Enabled`.
    pub fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    /// Whether MFA delete is configured on the bucket. Only returned if it has ever been configured.
    pub fn mfa_delete(&self) -> Option<&MfaDeleteStatus> {
        self.raw.mfa_delete()
    }

    /// The unmodified provider response.
    pub fn raw(&self) -> &GetBucketVersioningOutput {
        &self.raw
    }
}
