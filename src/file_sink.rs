use super::*;

/// Writes the export to `path`, or to its suggested filename in the current
/// directory.
#[derive(Debug)]
pub(crate) struct FileSink {
  path: Option<PathBuf>,
}

impl ExportSink for FileSink {
  fn export(&self, export: &Export) -> Result<String> {
    let path = self
      .path
      .clone()
      .unwrap_or_else(|| PathBuf::from(&export.suggested_filename));

    Self::ensure_parent_dir(&path)?;

    fs::write(&path, &export.bytes)
      .with_context(|| format!("could not write {}", path.display()))?;

    Ok(path.display().to_string())
  }
}

impl FileSink {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path
      .parent()
      .filter(|parent| !parent.as_os_str().is_empty())
    {
      fs::create_dir_all(parent).with_context(|| {
        format!("could not create directory {}", parent.display())
      })?;
    }

    Ok(())
  }

  pub(crate) fn new(path: Option<PathBuf>) -> Self {
    Self { path }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::{
      env,
      sync::atomic::{AtomicUsize, Ordering},
    },
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_dir() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    env::temp_dir().join(format!(
      "yt_comments_file_sink_test_{}_{unique}",
      process::id()
    ))
  }

  fn sample_export() -> Export {
    Export::new(
      &VideoId::resolve("XYZ123").unwrap(),
      b"comment_id\nc1\n".to_vec(),
      1,
    )
  }

  #[test]
  fn writes_to_explicit_path_creating_parents() {
    let dir = temp_dir();

    let path = dir.join("nested").join("out.csv");

    let destination = FileSink::new(Some(path.clone()))
      .export(&sample_export())
      .unwrap();

    assert_eq!(destination, path.display().to_string());
    assert_eq!(fs::read(&path).unwrap(), b"comment_id\nc1\n");

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn overwrites_existing_file() {
    let dir = temp_dir();

    fs::create_dir_all(&dir).unwrap();

    let path = dir.join("XYZ123.csv");

    fs::write(&path, "stale contents that are longer").unwrap();

    FileSink::new(Some(path.clone()))
      .export(&sample_export())
      .unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"comment_id\nc1\n");

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn suggested_filename_uses_video_id() {
    assert_eq!(sample_export().suggested_filename, "XYZ123.csv");
  }
}
