/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;
use aws_sdk_s3::config::Credentials;

use crate::{Config, DEFAULT_REGION};

/// Environment variable holding the access key id.
const ACCESS_KEY_ID_VAR: &str = "aws_access_key_id";
/// Environment variable holding the secret access key.
const SECRET_ACCESS_KEY_VAR: &str = "aws_secret_access_key";
/// Optional environment variable holding a session token for temporary credentials.
const SESSION_TOKEN_VAR: &str = "aws_session_token";
/// Region variables, checked in order.
const REGION_VARS: &[&str] = &["aws_region", "AWS_REGION"];

/// Load a [`Config`] from the environment.
///
/// A `.env` file in the current working directory (or any of its parents) is loaded into the
/// process environment first, unless disabled with [`ConfigLoader::dotenv`]. Values already
/// present in the environment take precedence over the file.
///
/// Credentials are taken from `aws_access_key_id` / `aws_secret_access_key` (and optionally
/// `aws_session_token`). When either of the two is missing the standard AWS credentials
/// provider chain is used instead.
///
/// The region is, in order of precedence: the value given to [`ConfigLoader::region`],
/// `aws_region`, `AWS_REGION`, and finally `ap-south-1`.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    region: Option<String>,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
    skip_dotenv: bool,
}

impl ConfigLoader {
    /// Override the region requests are sent to.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible provider.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Force path style addressing (`https://host/bucket/key`) instead of virtual hosted style.
    ///
    /// Most S3 compatible providers running on a single host need this.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Whether a `.env` file should be loaded into the process environment. Default is `true`.
    pub fn dotenv(mut self, enabled: bool) -> Self {
        self.skip_dotenv = !enabled;
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        if !self.skip_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
                Err(err) if err.not_found() => tracing::trace!("no .env file found"),
                Err(err) => tracing::warn!("failed to load .env file: {err}"),
            }
        }

        self.load_with_env(|name| std::env::var(name).ok()).await
    }

    pub(crate) async fn load_with_env<F>(self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = EnvSettings::resolve(self.region.as_deref(), lookup);
        tracing::debug!(
            "using region {} with {} credentials",
            settings.region,
            if settings.credentials.is_some() {
                "environment"
            } else {
                "default chain"
            }
        );

        let mut loader = aws_config::from_env().region(Region::new(settings.region));
        if let Some(credentials) = settings.credentials {
            loader = loader.credentials_provider(credentials);
        }
        let shared_config = loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint_url) = self.endpoint_url {
            s3_config = s3_config.endpoint_url(endpoint_url);
        }
        if let Some(force_path_style) = self.force_path_style {
            s3_config = s3_config.force_path_style(force_path_style);
        }

        Config {
            client: aws_sdk_s3::Client::from_conf(s3_config.build()),
        }
    }
}

/// Settings resolved from environment variables.
#[derive(Debug)]
struct EnvSettings {
    credentials: Option<Credentials>,
    region: String,
}

impl EnvSettings {
    fn resolve<F>(region_override: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let credentials = match (non_empty(ACCESS_KEY_ID_VAR), non_empty(SECRET_ACCESS_KEY_VAR)) {
            (Some(access_key_id), Some(secret_access_key)) => Some(Credentials::new(
                access_key_id,
                secret_access_key,
                non_empty(SESSION_TOKEN_VAR),
                None,
                "Environment",
            )),
            _ => None,
        };

        let region = region_override
            .map(str::to_owned)
            .or_else(|| REGION_VARS.iter().find_map(|name| non_empty(*name)))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        EnvSettings {
            credentials,
            region,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ConfigLoader, EnvSettings};

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_resolve_credentials() {
        let settings = EnvSettings::resolve(
            None,
            env(&[
                ("aws_access_key_id", "AKIDEXAMPLE"),
                ("aws_secret_access_key", "secret"),
            ]),
        );
        let credentials = settings.credentials.expect("credentials resolved");
        assert_eq!("AKIDEXAMPLE", credentials.access_key_id());
        assert_eq!("secret", credentials.secret_access_key());
        assert_eq!(None, credentials.session_token());
    }

    #[test]
    fn test_partial_credentials_fall_back_to_default_chain() {
        let settings = EnvSettings::resolve(None, env(&[("aws_access_key_id", "AKIDEXAMPLE")]));
        assert!(settings.credentials.is_none());

        let settings = EnvSettings::resolve(
            None,
            env(&[
                ("aws_access_key_id", "AKIDEXAMPLE"),
                ("aws_secret_access_key", ""),
            ]),
        );
        assert!(settings.credentials.is_none());
    }

    #[test]
    fn test_region_precedence() {
        let settings = EnvSettings::resolve(None, env(&[]));
        assert_eq!("ap-south-1", settings.region);

        let settings = EnvSettings::resolve(None, env(&[("AWS_REGION", "us-west-2")]));
        assert_eq!("us-west-2", settings.region);

        let settings = EnvSettings::resolve(
            None,
            env(&[("aws_region", "eu-west-1"), ("AWS_REGION", "us-west-2")]),
        );
        assert_eq!("eu-west-1", settings.region);

        let settings = EnvSettings::resolve(Some("us-east-2"), env(&[("aws_region", "eu-west-1")]));
        assert_eq!("us-east-2", settings.region);
    }

    #[tokio::test]
    async fn test_load_with_env() {
        let config = ConfigLoader::default()
            .dotenv(false)
            .endpoint_url("http://localhost:9000")
            .force_path_style(true)
            .load_with_env(env(&[
                ("aws_access_key_id", "AKIDEXAMPLE"),
                ("aws_secret_access_key", "secret"),
                ("aws_region", "eu-central-1"),
            ]))
            .await;

        let s3_config = config.client().config();
        assert_eq!(Some("eu-central-1"), s3_config.region().map(|r| r.as_ref()));
    }
}
