use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scribe_state::import::{parse_transcript_json, sample_records, segments_from_records};
use scribe_state::persist::ProjectMeta;
use scribe_state::project::ProjectState;
use scribe_state::timecode::format_timecode;

#[derive(Parser)]
#[command(name = "scribe", about = "Transcript timeline editor toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a transcript (JSON records) to a subtitle/text format
    Export {
        /// Path to a JSON array of transcript records
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a summary of a transcript
    Info {
        input: PathBuf,
    },
    /// Write the built-in sample transcript as JSON records
    Sample {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Srt,
    Vtt,
    Csv,
    Json,
    Html,
}

fn load_project(input: &Path) -> anyhow::Result<ProjectState> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let records = parse_transcript_json(&json)?;
    let mut project = ProjectState::new();
    project.load_transcript(segments_from_records(&records));
    info!(
        segments = project.segments.len(),
        speakers = project.speakers.len(),
        "transcript loaded"
    );
    Ok(project)
}

fn meta_for(input: &Path) -> ProjectMeta {
    ProjectMeta {
        title: input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        source: Some(input.display().to_string()),
    }
}

fn emit(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{content}"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Export {
            input,
            format,
            output,
        } => {
            let project = load_project(&input)?;
            let rendered = match format {
                Format::Text => scribe_export::to_text(&project.segments, &project.speakers),
                Format::Srt => scribe_export::to_srt(&project.segments, &project.speakers),
                Format::Vtt => scribe_export::to_vtt(&project.segments, &project.speakers),
                Format::Csv => scribe_export::to_csv(&project.segments, &project.speakers),
                Format::Json => scribe_export::to_json(
                    &project.segments,
                    &project.speakers,
                    &meta_for(&input),
                )?,
                Format::Html => scribe_export::to_html(
                    &project.segments,
                    &project.speakers,
                    &meta_for(&input),
                ),
            };
            emit(output.as_deref(), &rendered)?;
        }
        Command::Info { input } => {
            let project = load_project(&input)?;
            println!("segments: {}", project.segments.len());
            println!("duration: {}", format_timecode(project.playback.duration));
            println!("speakers:");
            for speaker in &project.speakers {
                let owned = project
                    .segments
                    .iter()
                    .filter(|s| s.speaker_id == speaker.id)
                    .count();
                println!("  {} ({} segments, {})", speaker.name, owned, speaker.color);
            }
        }
        Command::Sample { output } => {
            let json = serde_json::to_string_pretty(&sample_records())?;
            emit(output.as_deref(), &json)?;
        }
    }
    Ok(())
}
