/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for deleting a single object version
pub use input::{DeleteObjectVersionInput, DeleteObjectVersionInputBuilder};

/// Response type for deleting a single object version
pub use crate::operation::delete_object::DeleteObjectOutput;

use crate::error;
use std::sync::Arc;

/// Operation struct for permanently deleting a single object version
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObjectVersion;

impl DeleteObjectVersion {
    /// Execute a single version qualified `DeleteObject` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectVersionInput,
    ) -> Result<DeleteObjectOutput, error::Error> {
        let DeleteObjectVersionInput {
            locator,
            version_id,
        } = input;
        tracing::debug!("deleting version {version_id} of {locator}");

        let resp = handle
            .client()
            .delete_object()
            .bucket(locator.bucket())
            .key(locator.key())
            .version_id(&version_id)
            .send()
            .await?;

        let output = DeleteObjectOutput::from(resp);
        tracing::debug!(
            "deleted version {version_id} of {locator}; delete_marker={}",
            output.delete_marker()
        );
        Ok(output)
    }
}
