use crate::{config::Config, error::CliError, output};
use sql_codegen::session::{CompileSession, GraphEventKind, Outcome};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Re-reads a graph file and reports its content only when the bytes changed.
pub struct GraphFile {
    path: PathBuf,
    digest: Option<String>,
}

impl GraphFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            digest: None,
        }
    }

    pub async fn poll(&mut self) -> Result<Option<String>, CliError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let digest = content_digest(&content);

        if self.digest.as_deref() == Some(digest.as_str()) {
            return Ok(None);
        }

        debug!("{} changed (digest {})", self.path.display(), &digest[..16]);
        self.digest = Some(digest);
        Ok(Some(content))
    }
}

fn content_digest(content: &str) -> String {
    let mut h = blake3::Hasher::new();
    h.update(content.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Polls `path` until `cancel_token` fires, printing every new SQL revision.
pub async fn run(
    path: &str,
    config: &Config,
    as_json: bool,
    cancel_token: CancellationToken,
) -> Result<(), CliError> {
    let mut file = GraphFile::new(path);
    let mut session = CompileSession::new();
    let mut ticker = tokio::time::interval(config.poll_interval);

    info!(
        "Watching {} every {}ms",
        path,
        config.poll_interval.as_millis()
    );

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("Watch stopped");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        let content = match file.poll().await {
            Ok(Some(content)) => content,
            Ok(None) => continue,
            Err(err) => {
                warn!("Failed to read {}: {}", path, err);
                continue;
            }
        };

        match session.handle_json(GraphEventKind::BlockChanged, &content) {
            Outcome::Published(snapshot) => {
                println!("{}", output::format_snapshot(&snapshot, as_json)?);
            }
            Outcome::Retained(notice) => eprintln!("Block generation error: {notice}"),
            Outcome::Unchanged | Outcome::Ignored => {}
        }
    }
}
