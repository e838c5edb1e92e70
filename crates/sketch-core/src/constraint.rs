//! 草图约束
//!
//! 约束随草图一起保存，导出DXF时不参与绘制。

use crate::entity::EntityId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 约束类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    Coincident,
    Horizontal,
    Vertical,
    Parallel,
    Perpendicular,
    Tangent,
    Equal,
    Midpoint,
    Concentric,
    Distance,
    Radius,
    Diameter,
    Angle,
    Length,
    Fix,
    Unknown,
}

/// 草图约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    /// 被约束的实体
    pub references: Vec<EntityId>,
    /// 约束参数（原始文本值）
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, references: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            kind,
            references: references.into_iter().collect(),
            parameters: IndexMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn references_entity(&self, id: &EntityId) -> bool {
        self.references.iter().any(|r| r == id)
    }
}
