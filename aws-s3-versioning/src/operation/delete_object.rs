/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for deleting a key
pub use input::{DeleteObjectInput, DeleteObjectInputBuilder};

mod output;
/// Response type for deleting a key or a single version
pub use output::DeleteObjectOutput;

use crate::error;
use std::sync::Arc;

/// Operation struct for deleting a key
///
/// No version qualifier is ever sent; on a versioned bucket the provider records a delete
/// marker and keeps every prior version.
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObject;

impl DeleteObject {
    /// Execute a single unqualified `DeleteObject` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, error::Error> {
        let locator = input.locator;
        tracing::debug!("deleting {locator}");

        let resp = handle
            .client()
            .delete_object()
            .bucket(locator.bucket())
            .key(locator.key())
            .send()
            .await?;

        let output = DeleteObjectOutput::from(resp);
        tracing::debug!(
            "deleted {locator}; delete_marker={} version_id={:?}",
            output.delete_marker(),
            output.version_id()
        );
        Ok(output)
    }
}
