use std::path::PathBuf;

use atelier::media::{Bucket, MediaFile, content_type_for_extension};
use atelier_app::context::AppContext;
use clap::Args;

use crate::cli::AdminArgs;

#[derive(Debug, Args)]
pub(crate) struct UploadArgs {
    #[command(flatten)]
    admin: AdminArgs,

    /// File to upload
    path: PathBuf,

    /// photos, live2d-images, live2d-videos or games
    #[arg(long)]
    bucket: Bucket,

    /// Content type; guessed from the extension when omitted
    #[arg(long)]
    content_type: Option<String>,
}

pub(crate) async fn run(ctx: &AppContext, args: UploadArgs) -> Result<(), String> {
    let file_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("`{}` is not a file path", args.path.display()))?
        .to_string();

    let content_type = match args.content_type {
        Some(content_type) => content_type,
        None => args
            .path
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(content_type_for_extension)
            .ok_or_else(|| {
                format!("cannot tell the content type of `{file_name}`; pass --content-type")
            })?
            .to_string(),
    };

    let bytes = tokio::fs::read(&args.path)
        .await
        .map_err(|error| format!("failed to read `{}`: {error}", args.path.display()))?;

    let console = args.admin.login(ctx).await?;

    let stored = console
        .upload(
            args.bucket,
            MediaFile {
                file_name,
                content_type,
                bytes,
            },
        )
        .await
        .map_err(|error| format!("upload failed: {error}"))?;

    println!("bucket: {}", stored.bucket);
    println!("path: {}", stored.path);
    println!("url: {}", stored.url);

    Ok(())
}
