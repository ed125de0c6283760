use crate::types::{ExportError, Margins, PageSize, Result};

/// Export configuration filled in by the user and validated at export
/// time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportOptions {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Output file name as typed; see [`resolved_file_name`](Self::resolved_file_name).
    pub file_name: String,
}

pub const DEFAULT_FILE_NAME: &str = "documento";

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            margins: Margins::default(),
            file_name: String::new(),
        }
    }
}

impl ExportOptions {
    /// The name the document is saved under: trimmed, defaulted when
    /// blank, `.pdf` appended unless already present (case-insensitive).
    pub fn resolved_file_name(&self) -> String {
        let mut name = self.file_name.trim().to_string();
        if name.is_empty() {
            name = DEFAULT_FILE_NAME.to_string();
        }
        if !name.to_lowercase().ends_with(".pdf") {
            name.push_str(".pdf");
        }
        name
    }

    /// Validate the options. The content-area check happens separately
    /// when the layout runs; this rejects what is invalid on its face.
    pub fn validate(&self) -> Result<()> {
        if !self.margins.is_non_negative() {
            return Err(ExportError::Config(
                "margins must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ExportError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
