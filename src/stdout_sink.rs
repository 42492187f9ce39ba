use super::*;

#[derive(Debug)]
pub(crate) struct StdoutSink;

impl ExportSink for StdoutSink {
  fn export(&self, export: &Export) -> Result<String> {
    let mut stdout = io::stdout().lock();

    stdout
      .write_all(&export.bytes)
      .and_then(|()| stdout.flush())
      .context("could not write to stdout")?;

    Ok("stdout".to_string())
  }
}
