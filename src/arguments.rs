use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Download every comment and reply on a YouTube video as CSV"
)]
pub(crate) struct Arguments {
  /// Base URL of the Data API
  #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = Client::DEFAULT_BASE_URL)]
  pub(crate) api_base_url: String,

  /// YouTube Data API key
  #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Output CSV path, or - for stdout [default: <video id>.csv]
  #[arg(long, value_name = "PATH")]
  out: Option<PathBuf>,

  /// Log harvest progress
  #[arg(long, short)]
  verbose: bool,

  /// Video URL or ID
  #[arg(value_name = "VIDEO")]
  pub(crate) video: String,
}

impl Arguments {
  pub(crate) fn api_key(&self) -> Result<&str> {
    let api_key = self.api_key.as_deref().ok_or_else(|| {
      anyhow!("missing API key, use --api-key or set YOUTUBE_API_KEY")
    })?;

    ensure!(!api_key.trim().is_empty(), "API key is required");

    Ok(api_key.trim())
  }

  pub(crate) fn log_filter(&self) -> &'static str {
    if self.verbose { "info" } else { "warn" }
  }

  pub(crate) fn sink(&self) -> Box<dyn ExportSink> {
    match self.out.as_deref() {
      Some(path) if path == Path::new("-") => Box::new(StdoutSink),
      path => Box::new(FileSink::new(path.map(Path::to_path_buf))),
    }
  }
}
