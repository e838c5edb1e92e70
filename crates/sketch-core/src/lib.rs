//! 草图核心数据模型
//!
//! 提供2D草图的实体、约束与样式类型。
//!
//! # 架构设计
//!
//! - `Sketch`: 按插入顺序保存的实体与约束
//! - `Entity`: 封闭的实体枚举（点、线、圆、圆弧，以及其他类型的通用实体）
//! - `Properties`: 视觉属性（颜色、线型）
//!
//! # 示例
//!
//! ```rust
//! use sketch_core::prelude::*;
//!
//! let mut sketch = Sketch::new();
//! sketch.add_entity("p1", Point::new(3.0, 4.0));
//! sketch.add_entity("c1", Circle::new(0.0, 0.0, 5.0).construction());
//!
//! assert_eq!(sketch.entity_count(), 2);
//! ```

pub mod constraint;
pub mod entity;
pub mod math;
pub mod properties;
pub mod sketch;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::constraint::{Constraint, ConstraintKind};
    pub use crate::entity::{Arc, Circle, Entity, EntityId, EntityKind, GenericEntity, GenericKind, Line, Point};
    pub use crate::math::Point2;
    pub use crate::properties::{Color, LineType};
    pub use crate::sketch::Sketch;
}
