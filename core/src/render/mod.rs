//! Single-page document rendering.
//!
//! # Design
//! Rendering is split into a pure layout step (`layout`) that produces a
//! `PageLayout` of positioned cells, and an encoding step (`encode_pdf`).
//! `DocumentRenderer` ties them together and owns the output destination.
//!
//! Output goes to a uniquely named temporary file next to the destination and
//! is then renamed over it, so two renders racing for the same path each
//! leave a complete document behind.

mod layout;
mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::RenderError;
use crate::types::DocumentRecord;

pub use layout::{
    layout, Cell, Font, FontFace, LayoutContext, PageLayout, CELL_MARGIN, PAGE_HEIGHT,
    PAGE_MARGIN, PAGE_WIDTH, POINTS_PER_INCH,
};
pub use pdf::encode_pdf;

pub const DEFAULT_OUTPUT_PATH: &str = "hello.pdf";

#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    output_path: PathBuf,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl DocumentRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Render `record` and replace the output file with the result.
    ///
    /// `record` is expected to have passed `DocumentRecord::validate`.
    pub fn render(&self, record: &DocumentRecord) -> Result<PathBuf, RenderError> {
        let page = layout(record);
        debug!(cells = page.cells.len(), "laid out document");
        let bytes = encode_pdf(&page);
        self.write_output(&bytes)?;
        info!(
            path = %self.output_path.display(),
            bytes = bytes.len(),
            document_id = record.id,
            "rendered document"
        );
        Ok(self.output_path.clone())
    }

    fn write_output(&self, bytes: &[u8]) -> Result<(), RenderError> {
        let io_error = |source| RenderError::Io {
            path: self.output_path.clone(),
            source,
        };

        let file_name = self
            .output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        let temp_path = self
            .output_path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

        fs::write(&temp_path, bytes).map_err(io_error)?;
        fs::rename(&temp_path, &self.output_path).map_err(|err| {
            let _ = fs::remove_file(&temp_path);
            io_error(err)
        })
    }
}
