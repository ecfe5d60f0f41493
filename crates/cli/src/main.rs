use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use futures::StreamExt;
use mediakind_core::FileDescriptor;
use mediakind_scanner::stream::{get_all_video_files_async, video_file_stream};
use mediakind_scanner::{ScanOptions, VideoLocator, WalkDirScanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mediakind", version, about = "Classify media files by extension")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the video files below a directory
    Videos(VideosArgs),
    /// Show the categories of file names or extensions
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
        /// Print one JSON object per name
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct VideosArgs {
    directory: PathBuf,
    /// Print one JSON object per file
    #[arg(long)]
    json: bool,
    /// Print files as they are found instead of after the scan
    #[arg(long)]
    stream: bool,
    #[arg(long)]
    follow_links: bool,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Skip hidden entries and NAS junk directories (same as MEDIAKIND_SKIP_HIDDEN)
    #[arg(long)]
    skip_hidden: bool,
}

impl VideosArgs {
    /// Environment first, flags on top.
    fn scan_options(&self) -> ScanOptions {
        let mut options = ScanOptions::from_env();
        if self.follow_links {
            options.follow_links = true;
        }
        if self.max_depth.is_some() {
            options.max_depth = self.max_depth;
        }
        if self.skip_hidden {
            options.skip_library_junk();
        }
        options
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Videos(args) => videos(args).await,
        Command::Classify { names, json } => {
            classify(&names, json);
            Ok(())
        }
    }
}

async fn videos(args: VideosArgs) -> anyhow::Result<()> {
    let options = args.scan_options();
    info!(path = %args.directory.display(), ?options, "scanning for video files");

    let locator = Arc::new(VideoLocator::new(WalkDirScanner::new(options)));
    let failed = || format!("failed to scan {}", args.directory.display());

    let mut found = 0usize;
    if args.stream {
        let stream = video_file_stream(locator, args.directory.clone());
        futures::pin_mut!(stream);
        while let Some(file) = stream.next().await {
            let file = file.with_context(failed)?;
            print_file(&file, args.json)?;
            found += 1;
        }
    } else {
        let files = get_all_video_files_async(locator, args.directory.clone())
            .await
            .with_context(failed)?;
        for file in &files {
            print_file(file, args.json)?;
        }
        found = files.len();
    }

    info!(path = %args.directory.display(), count = found, "scan complete");
    Ok(())
}

fn print_file(file: &FileDescriptor, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(file).context("failed to encode file as json")?
        );
    } else {
        println!("{}", file.path.display());
    }
    Ok(())
}

fn classify(names: &[String], json: bool) {
    for name in names {
        // A bare ".mkv" is its own extension.
        let extension = mediakind_classifier::extension_of(name);
        let categories = mediakind_classifier::categories_of(extension);
        let media = mediakind_classifier::try_get_container_media_set(extension);

        if json {
            let line = serde_json::json!({
                "name": name,
                "extension": extension,
                "categories": categories,
                "media": media,
            });
            println!("{line}");
            continue;
        }

        let labels: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        let labels = if labels.is_empty() {
            "unknown".to_string()
        } else {
            labels.join(",")
        };
        match media {
            Some(set) => println!(
                "{name}\t{labels}\tvideo={}\taudio={}",
                set.video_codecs.join(","),
                set.audio_codecs.join(",")
            ),
            None => println!("{name}\t{labels}"),
        }
    }
}
