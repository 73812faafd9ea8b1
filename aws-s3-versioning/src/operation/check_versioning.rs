/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for querying bucket versioning
pub use input::{CheckVersioningInput, CheckVersioningInputBuilder};

mod output;
/// Response type for querying bucket versioning
pub use output::CheckVersioningOutput;

use crate::error;
use crate::types::VersioningStatus;
use std::sync::Arc;

/// Operation struct for querying bucket versioning status
#[derive(Clone, Default, Debug)]
pub(crate) struct CheckVersioning;

impl CheckVersioning {
    /// Execute a single `GetBucketVersioning` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CheckVersioningInput,
    ) -> Result<CheckVersioningOutput, error::Error> {
        tracing::debug!("requesting versioning status of bucket {}", input.bucket());
        let resp = handle
            .client()
            .get_bucket_versioning()
            .bucket(input.bucket())
            .send()
            .await?;

        let output = CheckVersioningOutput::new(resp);
        if output.status() == VersioningStatus::Undetermined {
            match output.raw().status() {
                None => tracing::warn!(
                    "GetBucketVersioning returned no status for bucket {}; treating versioning as not enabled",
                    input.bucket()
                ),
                Some(status) => tracing::warn!(
                    "GetBucketVersioning returned unrecognized status {:?} for bucket {}; treating versioning as not enabled",
                    status.as_str(),
                    input.bucket()
                ),
            }
        }

        tracing::debug!(
            "bucket {} versioning status: {}",
            input.bucket(),
            output.status()
        );
        Ok(output)
    }
}
