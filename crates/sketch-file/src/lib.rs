//! 草图文件处理
//!
//! 支持：
//! - 草图 `.json` 加载/保存
//! - 草图导出为 `.dxf`（R12）

pub mod dxf_export;
pub mod error;
pub mod sketch_io;
pub mod style;

pub use dxf_export::{sketch_to_dxf, sketch_to_dxf_with, ExportOptions};
pub use error::FileError;
