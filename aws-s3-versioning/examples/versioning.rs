/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;

use aws_s3_versioning::io::Payload;
use aws_s3_versioning::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;

/// Walks a versioned bucket through upload, fetch and version deletes.
///
/// Credentials are read from `aws_access_key_id` / `aws_secret_access_key` (a `.env` file in
/// the working directory is honoured), the region from `aws_region` (default `ap-south-1`).
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "versioning")]
#[command(about = "Exercises S3 object versioning against a bucket.")]
pub struct Args {
    /// File to upload
    #[arg(required = true)]
    file: PathBuf,

    /// Bucket to use, should have versioning enabled
    #[arg(long, default_value = "testbucket-1002")]
    bucket: String,

    /// Object key to write
    #[arg(long, default_value = "example/myimage")]
    key: String,

    /// Value stored under the `Content-Type` user metadata key
    #[arg(long, default_value = "image/png")]
    content_type: String,

    /// Upload twice, delete (creating a delete marker), then remove the marker again
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    tour: bool,
}

/// Upload the file, fetch it back and delete exactly the version that was fetched.
async fn run_basic(client: &Client, args: &Args) -> Result<(), BoxError> {
    let upload = client
        .upload()
        .bucket(&args.bucket)
        .key(&args.key)
        .body(Payload::from_path(&args.file)?)
        .metadata("Content-Type", &args.content_type)
        .send()
        .await?;
    println!("uploaded version {:?}", upload.version_id());

    let fetched = client
        .get_object()
        .bucket(&args.bucket)
        .key(&args.key)
        .send()
        .await?;
    println!(
        "fetched {} bytes, version {:?}, metadata {:?}",
        fetched.body().len(),
        fetched.version_id(),
        fetched.metadata()
    );

    let Some(version_id) = fetched.version_id() else {
        println!("no version id returned; versioning is not enabled, skipping version delete");
        return Ok(());
    };

    let deleted = client
        .delete_object_version()
        .bucket(&args.bucket)
        .key(&args.key)
        .version_id(version_id)
        .send()
        .await?;
    println!(
        "deleted version {:?} (delete marker: {})",
        deleted.version_id(),
        deleted.delete_marker()
    );
    Ok(())
}

/// Two uploads on the same key, an unqualified delete, and removal of the resulting marker.
async fn run_tour(client: &Client, args: &Args) -> Result<(), BoxError> {
    let payload = Payload::from_path(&args.file)?;

    let mut versions = Vec::new();
    for _ in 0..2 {
        let output = client
            .upload()
            .bucket(&args.bucket)
            .key(&args.key)
            .body(payload.clone())
            .metadata("Content-Type", &args.content_type)
            .send()
            .await?;
        println!("uploaded version {:?}", output.version_id());
        versions.extend(output.version_id().map(str::to_owned));
    }

    let marker = client
        .delete_object()
        .bucket(&args.bucket)
        .key(&args.key)
        .send()
        .await?;
    println!(
        "deleted {}/{}; delete marker: {} ({:?})",
        args.bucket,
        args.key,
        marker.delete_marker(),
        marker.version_id()
    );

    for version_id in &versions {
        let output = client
            .get_object()
            .bucket(&args.bucket)
            .key(&args.key)
            .version_id(version_id)
            .send()
            .await?;
        println!(
            "version {version_id} still readable: {} bytes",
            output.body().len()
        );
    }

    if let (true, Some(marker_id)) = (marker.delete_marker(), marker.version_id()) {
        client
            .delete_object_version()
            .bucket(&args.bucket)
            .key(&args.key)
            .version_id(marker_id)
            .send()
            .await?;
        println!("removed delete marker {marker_id}");

        let restored = client
            .get_object()
            .bucket(&args.bucket)
            .key(&args.key)
            .send()
            .await?;
        println!("object restored at version {:?}", restored.version_id());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = aws_s3_versioning::from_env().load().await;
    let client = Client::new(config);

    if client.is_versioning_enabled(&args.bucket).await? {
        println!("bucket {} already exists with versioning enabled", args.bucket);
    } else {
        println!("bucket {} does not have versioning enabled", args.bucket);
    }

    let result = if args.tour {
        run_tour(&client, &args)
            .instrument(tracing::debug_span!("tour"))
            .await
    } else {
        run_basic(&client, &args)
            .instrument(tracing::debug_span!("basic"))
            .await
    };

    if let Err(ref err) = result {
        tracing::error!("demo failed: {}", DisplayErrorContext(err.as_ref()));
    }

    Ok(())
}
