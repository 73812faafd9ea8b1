/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set an explicit S3 client to use.
    ///
    /// Credentials, region and endpoint are whatever the given client was configured with.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Result<Config, BuildError> {
        let client = self
            .client
            .ok_or_else(|| BuildError::missing_field("client", "An S3 client is required"))?;
        Ok(Config { client })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_missing_client() {
        let err = Config::builder().build().unwrap_err();
        assert!(err.to_string().contains("An S3 client is required"));
    }
}
