use crate::error::CmsError;
use chrono::Utc;
use rand::Rng;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Flat directory of uploaded files. Names are never reused in practice
/// and files are never removed by the application.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    io_timeout: Duration,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, io_timeout: Duration) -> Self {
        Self {
            dir: dir.into(),
            io_timeout,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory and its parents; used once at startup.
    pub fn ensure_dir(&self) -> Result<(), CmsError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Write `bytes` under a freshly generated name and return its public URL.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> Result<String, CmsError> {
        let filename = generate_filename(original_name);
        let path = self.dir.join(&filename);

        self.bounded(async {
            tokio::fs::create_dir_all(&self.dir).await?;
            tokio::fs::write(&path, bytes).await
        })
        .await?
        .map_err(CmsError::Io)?;

        info!(file = %filename, size = bytes.len(), "stored upload");
        Ok(format!("{UPLOADS_URL_PREFIX}/{filename}"))
    }

    /// Raw names of the entries currently in the directory.
    pub async fn list(&self) -> Result<Vec<String>, CmsError> {
        self.bounded(async {
            let mut entries = tokio::fs::read_dir(&self.dir).await?;
            let mut names = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok::<_, std::io::Error>(names)
        })
        .await?
        .map_err(CmsError::UploadDirUnreadable)
    }

    async fn bounded<T>(&self, fut: impl Future<Output = T>) -> Result<T, CmsError> {
        tokio::time::timeout(self.io_timeout, fut)
            .await
            .map_err(|_| CmsError::IoTimeout)
    }
}

/// `<unix millis>-<random 0..=1e9>` plus the original extension, if any.
pub fn generate_filename(original_name: Option<&str>) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..=1_000_000_000);
    match original_name
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{millis}-{suffix}.{ext}"),
        None => format!("{millis}-{suffix}"),
    }
}
