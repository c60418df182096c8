use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file path is empty")]
    EmptyPath,

    #[error("failed to read mesh file {}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("{} does not contain any meshes", .path.display())]
    NoMeshesInScene { path: PathBuf },
}

impl ImportError {
    /// The error followed by all of its causes, separated by `": "`.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            report.push_str(": ");
            report.push_str(&cause.to_string());
            source = cause.source();
        }
        report
    }
}
