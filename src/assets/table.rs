use std::path::Path;

/// Table record set: header labels plus rows of cells aligned with them.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<String>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.data.is_empty()
    }

    /// Parse a `{"columns": [...], "data": [[...], ...]}` document; absent keys are empty.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Why a table file could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum TableLoadError {
    #[error("table file '{path}' was not found")]
    NotFound { path: String },

    #[error("table file '{path}' could not be read: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("table file '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a table, distinguishing missing, unreadable and malformed files.
pub fn try_load_table(path: &Path) -> Result<TableData, TableLoadError> {
    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TableLoadError::NotFound { path: shown.clone() }
        } else {
            TableLoadError::Read {
                path: shown.clone(),
                source,
            }
        }
    })?;
    TableData::from_json_str(&text).map_err(|source| TableLoadError::Parse {
        path: shown,
        source,
    })
}

/// Load a table, degrading to an empty record set on any failure.
pub fn load_table(path: &Path) -> TableData {
    match try_load_table(path) {
        Ok(table) => {
            tracing::debug!(
                columns = table.columns.len(),
                rows = table.data.len(),
                "loaded table data"
            );
            table
        }
        Err(err) => {
            tracing::warn!(error = %err, "continuing with an empty table");
            TableData::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/table.rs"]
mod tests;
