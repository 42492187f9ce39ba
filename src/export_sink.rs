use super::*;

pub(crate) trait ExportSink {
  /// Delivers the export and describes where it went.
  fn export(&self, export: &Export) -> Result<String>;
}
