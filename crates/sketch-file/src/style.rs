//! 实体显示样式
//!
//! 所有实体使用点线；构造线为红色，其余为蓝色。

use sketch_core::entity::Entity;
use sketch_core::properties::{Color, LineType};

/// 实体样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityStyle {
    pub line_type: LineType,
    pub color: Color,
}

/// 构造线样式
pub const CONSTRUCTION_STYLE: EntityStyle = EntityStyle {
    line_type: LineType::Dotted,
    color: Color::RED,
};

/// 普通几何样式
pub const REGULAR_STYLE: EntityStyle = EntityStyle {
    line_type: LineType::Dotted,
    color: Color::BLUE,
};

/// 选择实体的样式
pub fn style_for(entity: &Entity) -> EntityStyle {
    if entity.is_construction() {
        CONSTRUCTION_STYLE
    } else {
        REGULAR_STYLE
    }
}

impl EntityStyle {
    /// 写入DXF实体的公共属性
    pub fn apply(&self, common: &mut dxf::entities::EntityCommon) {
        common.line_type_name = self.line_type.name().to_string();
        common.color = dxf::Color::from_index(self.color.to_aci());
    }
}
