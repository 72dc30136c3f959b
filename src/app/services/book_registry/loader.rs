//! Book registry loading from the TSV table on disk
//!
//! Reading the file is the only I/O involved; compilation itself is a
//! synchronous pass handled by [`TableCompiler`].

use super::BookRegistry;
use crate::app::services::table_compiler::{CompileSummary, TableCompiler};
use crate::config::CompilerConfig;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

impl BookRegistry {
    /// Load and compile the books codes table with the default configuration
    ///
    /// # Arguments
    /// * `path` - Path to the BibleBooksCodes TSV table
    ///
    /// # Returns
    /// * `Result<(BookRegistry, CompileSummary)>` - Registry and compile summary
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be read
    /// * Returns any table error raised during compilation
    pub async fn load_from_path(path: &Path) -> Result<(Self, CompileSummary)> {
        Self::load_from_path_with_config(path, CompilerConfig::default()).await
    }

    /// Load and compile the books codes table with a custom configuration
    pub async fn load_from_path_with_config(
        path: &Path,
        config: CompilerConfig,
    ) -> Result<(Self, CompileSummary)> {
        info!("Loading books codes table from {}", path.display());

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

        info!("Loaded {} table lines", text.lines().count());

        TableCompiler::new(config)?.compile(&text)
    }
}
