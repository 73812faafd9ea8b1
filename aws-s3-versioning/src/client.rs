/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;
use crate::Config;
use std::sync::Arc;

/// Client for exercising Amazon S3 object versioning.
///
/// The client is cheap to clone and safe to share between tasks; it holds no per-call state.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Query the versioning status of a bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`CheckVersioning`](crate::operation::check_versioning::builders::CheckVersioningFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_versioning::types::VersioningStatus;
    ///
    /// async fn status(
    ///     client: &aws_s3_versioning::Client,
    /// ) -> Result<VersioningStatus, aws_s3_versioning::error::Error> {
    ///     let output = client
    ///         .check_versioning()
    ///         .bucket("my-bucket")
    ///         .send()
    ///         .await?;
    ///     Ok(output.status())
    /// }
    /// ```
    pub fn check_versioning(
        &self,
    ) -> crate::operation::check_versioning::builders::CheckVersioningFluentBuilder {
        crate::operation::check_versioning::builders::CheckVersioningFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Returns true only if versioning is enabled on `bucket`.
    ///
    /// A suspended or undetermined status yields `false`, an undetermined status is logged but
    /// is not an error. Provider errors (e.g. the bucket does not exist) are returned as is.
    pub async fn is_versioning_enabled(&self, bucket: impl Into<String>) -> Result<bool, Error> {
        let output = self.check_versioning().bucket(bucket).send().await?;
        Ok(output.is_enabled())
    }

    /// Upload a single in-memory object.
    ///
    /// On a bucket with versioning enabled this creates a new version, otherwise the object is
    /// overwritten.
    ///
    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use std::path::Path;
    /// use aws_s3_versioning::io::Payload;
    ///
    /// async fn upload_file(
    ///     client: &aws_s3_versioning::Client,
    ///     path: impl AsRef<Path>
    /// ) -> Result<(), Box<dyn Error>> {
    ///     let output = client.upload()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .body(Payload::from_path(path)?)
    ///         .metadata("Content-Type", "image/png")
    ///         .send()
    ///         .await?;
    ///     println!("created version {:?}", output.version_id());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Fetch a single object, optionally pinned to a specific version.
    ///
    /// Without a version id the latest version is returned. The body is read fully into memory.
    ///
    /// Constructs a fluent builder for the
    /// [`GetObject`](crate::operation::get_object::builders::GetObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn get_version(client: &aws_s3_versioning::Client) -> Result<(), Box<dyn Error>> {
    ///     let output = client
    ///         .get_object()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .version_id("3HL4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY+MTRCxf3vjVBH40Nr8X8gdRQBpUMLUo")
    ///         .send()
    ///         .await?;
    ///     println!("{} bytes", output.body().len());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// Delete a key.
    ///
    /// On a bucket with versioning enabled the provider inserts a delete marker and keeps all
    /// prior versions.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObject`](crate::operation::delete_object::builders::DeleteObjectFluentBuilder) operation.
    pub fn delete_object(
        &self,
    ) -> crate::operation::delete_object::builders::DeleteObjectFluentBuilder {
        crate::operation::delete_object::builders::DeleteObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Permanently delete one version of an object.
    ///
    /// The version may be a delete marker, removing a marker that is the latest version makes
    /// the object visible again.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObjectVersion`](crate::operation::delete_object_version::builders::DeleteObjectVersionFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_versioning::error::Error;
    ///
    /// async fn undelete(client: &aws_s3_versioning::Client) -> Result<(), Error> {
    ///     let marker = client
    ///         .delete_object()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .send()
    ///         .await?;
    ///
    ///     if let Some(marker_id) = marker.version_id() {
    ///         client
    ///             .delete_object_version()
    ///             .bucket("my-bucket")
    ///             .key("my-key")
    ///             .version_id(marker_id)
    ///             .send()
    ///             .await?;
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_object_version(
        &self,
    ) -> crate::operation::delete_object_version::builders::DeleteObjectVersionFluentBuilder {
        crate::operation::delete_object_version::builders::DeleteObjectVersionFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
