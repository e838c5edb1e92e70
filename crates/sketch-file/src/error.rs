//! 文件操作错误定义

use sketch_core::entity::{EntityId, EntityKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("DXF error: {0}")]
    Dxf(String),

    #[error("Unsupported entity kind {kind} for entity {id}")]
    UnsupportedEntityKind { id: EntityId, kind: EntityKind },
}
