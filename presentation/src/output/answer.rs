//! Answer value reported back after a query completes

use serde::Serialize;
use std::path::PathBuf;

/// The typed answer to one query, tagged with the kind of query asked
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryAnswer {
    Menu { key: String, label: String },
    Integer(i64),
    Float(f64),
    Text(String),
    SavePath(PathBuf),
    OpenPath(PathBuf),
}

impl QueryAnswer {
    /// Short name of the query kind
    pub fn kind(&self) -> &'static str {
        match self {
            QueryAnswer::Menu { .. } => "menu",
            QueryAnswer::Integer(_) => "integer",
            QueryAnswer::Float(_) => "float",
            QueryAnswer::Text(_) => "text",
            QueryAnswer::SavePath(_) => "save_path",
            QueryAnswer::OpenPath(_) => "open_path",
        }
    }
}
