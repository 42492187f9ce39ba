use {
  anyhow::{Context, anyhow, ensure},
  arguments::Arguments,
  clap::Parser,
  client::Client,
  comment::Comment,
  comment_row::CommentRow,
  comment_snippet::CommentSnippet,
  comment_thread::{CommentThread, ThreadSnippet},
  crossterm::style::Stylize,
  csv::{QuoteStyle, Terminator},
  endpoint::Endpoint,
  error::Error,
  export::Export,
  export_sink::ExportSink,
  fetch_error::FetchError,
  file_sink::FileSink,
  futures::{
    TryStreamExt,
    stream::{self, Stream},
  },
  harvest::Harvest,
  harvester::Harvester,
  listing::Listing,
  page::Page,
  page_cursor::PageCursor,
  resolution_error::ResolutionError,
  response::Response,
  scrape::scrape,
  serde::{Deserialize, de::DeserializeOwned},
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    pin::pin,
    process,
  },
  stdout_sink::StdoutSink,
  thiserror::Error,
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  transport::Transport,
  url::Url,
  video_id::VideoId,
};

#[cfg(test)]
use {fake_transport::FakeTransport, serde_json::json};

mod arguments;
mod client;
mod comment;
mod comment_row;
mod comment_snippet;
mod comment_thread;
mod endpoint;
mod error;
mod export;
mod export_sink;
#[cfg(test)]
mod fake_transport;
mod fetch_error;
mod file_sink;
mod harvest;
mod harvester;
mod listing;
mod page;
mod page_cursor;
mod resolution_error;
mod response;
mod scrape;
mod stdout_sink;
mod table_encoder;
mod transport;
mod video_id;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing(default_filter: &str) {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

async fn run() -> Result {
  dotenvy::dotenv().ok();

  let arguments = Arguments::parse();

  initialize_tracing(arguments.log_filter());

  let api_key = arguments.api_key()?;

  let client = Client::new(&arguments.api_base_url);

  let export = scrape(&client, api_key, &arguments.video)
    .await
    .context("could not harvest comments")?;

  let destination = arguments.sink().export(&export)?;

  eprintln!("Wrote {} rows to {destination}", export.row_count);

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
