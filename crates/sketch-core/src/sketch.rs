//! 草图容器
//!
//! 实体与约束均按插入顺序保存；导出时依此顺序遍历。

use crate::constraint::Constraint;
use crate::entity::{Entity, EntityId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 2D草图
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// 所有实体（保持插入顺序）
    #[serde(default)]
    pub entities: IndexMap<EntityId, Entity>,

    /// 所有约束（保持插入顺序）
    #[serde(default)]
    pub constraints: IndexMap<String, Constraint>,
}

impl Sketch {
    /// 创建空草图
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加实体
    ///
    /// 已存在的ID会替换原实体，但保留其原有位置。
    pub fn add_entity(&mut self, id: impl Into<EntityId>, entity: impl Into<Entity>) -> Option<Entity> {
        self.entities.insert(id.into(), entity.into())
    }

    /// 添加约束
    pub fn add_constraint(&mut self, id: impl Into<String>, constraint: Constraint) -> Option<Constraint> {
        self.constraints.insert(id.into(), constraint)
    }

    /// 按插入顺序遍历实体
    pub fn entities(&self) -> impl Iterator<Item = (&EntityId, &Entity)> {
        self.entities.iter()
    }

    /// 按插入顺序遍历约束
    pub fn constraints(&self) -> impl Iterator<Item = (&String, &Constraint)> {
        self.constraints.iter()
    }

    /// 获取实体数量
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// 获取约束数量
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
