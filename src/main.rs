use {
  anyhow::Context,
  client::Client,
  config::Config,
  crossterm::style::Stylize,
  error::Error,
  export_row::ExportRow,
  exporter::Exporter,
  futures::stream::{self, StreamExt, TryStreamExt},
  page::Page,
  rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline,
    Formula, Workbook,
  },
  scraper::{ElementRef, Html, Selector},
  std::{
    backtrace::BacktraceStatus,
    cmp::Reverse,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  story::Story,
  story_row::StoryRow,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
};

mod client;
mod config;
mod error;
mod export_row;
mod exporter;
mod extract;
#[cfg(test)]
mod fixture;
mod link;
mod page;
mod pipeline;
mod rank;
mod story;
mod story_row;
mod votes;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    )
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  initialize_tracing();

  let config = Config::default();

  let stories = pipeline::run(&config)
    .await
    .context("could not build the top stories sheet")?;

  info!(
    stories = stories.len(),
    path = %config.output_path.display(),
    "done"
  );

  Ok(())
}

fn label(text: &str, use_color: bool) -> String {
  if use_color {
    text.bold().red().to_string()
  } else {
    text.to_string()
  }
}

fn report(error: &anyhow::Error, use_color: bool) {
  eprintln!("{} {error}", label("error:", use_color));

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    eprintln!();
    eprintln!("{}", label("because:", use_color));
  }

  for cause in causes {
    eprintln!("{} {cause}", label("-", use_color));
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:", use_color));
    eprintln!("{backtrace}");
  }
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error, io::stderr().is_terminal());
    process::exit(1);
  }
}
