/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A thin Amazon S3 client for working with versioned buckets.
//!
//! Every operation maps one-to-one onto a single S3 [service API] call. Versioning semantics
//! (new versions on write, delete markers on unqualified deletes, marker removal) are entirely
//! owned by the storage provider, this crate only shapes the requests and hands back the
//! responses.
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = aws_s3_versioning::from_env().load().await;
//! let client = aws_s3_versioning::Client::new(config);
//! # }
//! ```
//!
//! Upload an object and read back the version that was written:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_versioning::error::Error> {
//! use aws_s3_versioning::io::Payload;
//!
//! let config = aws_s3_versioning::from_env().load().await;
//! let client = aws_s3_versioning::Client::new(config);
//!
//! if !client.is_versioning_enabled("my-bucket").await? {
//!     println!("versioning is not enabled, uploads will overwrite");
//! }
//!
//! let uploaded = client
//!     .upload()
//!     .bucket("my-bucket")
//!     .key("example/myimage")
//!     .body(Payload::from_path("myimage.png")?)
//!     .metadata("Content-Type", "image/png")
//!     .send()
//!     .await?;
//!
//! let object = client
//!     .get_object()
//!     .bucket("my-bucket")
//!     .key("example/myimage")
//!     .set_version_id(uploaded.version_id().map(str::to_owned))
//!     .send()
//!     .await?;
//! println!("read {} bytes", object.body().len());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`check_versioning`](crate::Client::check_versioning) - query a bucket's versioning status
//! * [`upload`](crate::Client::upload) - write a single in-memory object
//! * [`get_object`](crate::Client::get_object) - fetch the latest or a specific version of an object
//! * [`delete_object`](crate::Client::delete_object) - delete a key (a delete marker on versioned buckets)
//! * [`delete_object_version`](crate::Client::delete_object_version) - permanently delete one version

/// Region used when none is configured explicitly or through the environment.
pub(crate) const DEFAULT_REGION: &str = "ap-south-1";

/// Error types emitted by `aws-s3-versioning`
pub mod error;

/// Common types used by `aws-s3-versioning`
pub mod types;

/// Types and helpers for I/O
pub mod io;

/// Versioning client
pub mod client;

/// Client operations
pub mod operation;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
