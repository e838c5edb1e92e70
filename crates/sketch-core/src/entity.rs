//! 草图实体
//!
//! 草图中的每个实体由稳定的字符串ID标识。点、线、圆、圆弧拥有完整的几何数据；
//! 其他类型（椭圆、样条等）只记录类型与构造线标记。

use crate::math::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 实体唯一标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    Spline,
    Conic,
    Text,
    Unknown,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Line => "Line",
            EntityKind::Circle => "Circle",
            EntityKind::Arc => "Arc",
            EntityKind::Ellipse => "Ellipse",
            EntityKind::Spline => "Spline",
            EntityKind::Conic => "Conic",
            EntityKind::Text => "Text",
            EntityKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 没有几何数据的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericKind {
    Ellipse,
    Spline,
    Conic,
    Text,
    Unknown,
}

impl From<GenericKind> for EntityKind {
    fn from(kind: GenericKind) -> Self {
        match kind {
            GenericKind::Ellipse => EntityKind::Ellipse,
            GenericKind::Spline => EntityKind::Spline,
            GenericKind::Conic => EntityKind::Conic,
            GenericKind::Text => EntityKind::Text,
            GenericKind::Unknown => EntityKind::Unknown,
        }
    }
}

/// 草图实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Generic(GenericEntity),
}

impl Entity {
    /// 是否为构造线（仅影响显示样式）
    pub fn is_construction(&self) -> bool {
        match self {
            Entity::Point(p) => p.is_construction,
            Entity::Line(l) => l.is_construction,
            Entity::Circle(c) => c.is_construction,
            Entity::Arc(a) => a.is_construction,
            Entity::Generic(g) => g.is_construction,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Point(_) => EntityKind::Point,
            Entity::Line(_) => EntityKind::Line,
            Entity::Circle(_) => EntityKind::Circle,
            Entity::Arc(_) => EntityKind::Arc,
            Entity::Generic(g) => g.kind.into(),
        }
    }
}

/// 点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub is_construction: bool,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_construction: false,
        }
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// 标记为构造线
    pub fn construction(mut self) -> Self {
        self.is_construction = true;
        self
    }
}

/// 线段
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
    #[serde(default)]
    pub is_construction: bool,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            is_construction: false,
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn construction(mut self) -> Self {
        self.is_construction = true;
        self
    }
}

/// 圆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x_center: f64,
    pub y_center: f64,
    pub radius: f64,
    #[serde(default)]
    pub is_construction: bool,
}

impl Circle {
    pub fn new(x_center: f64, y_center: f64, radius: f64) -> Self {
        Self {
            x_center,
            y_center,
            radius,
            is_construction: false,
        }
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x_center, self.y_center)
    }

    pub fn construction(mut self) -> Self {
        self.is_construction = true;
        self
    }
}

/// 圆弧
///
/// `start_param`/`end_param` 为弧度。`clockwise` 为真时，参数沿顺时针方向度量。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub x_center: f64,
    pub y_center: f64,
    pub radius: f64,
    pub start_param: f64,
    pub end_param: f64,
    #[serde(default)]
    pub clockwise: bool,
    #[serde(default)]
    pub is_construction: bool,
}

impl Arc {
    pub fn new(x_center: f64, y_center: f64, radius: f64, start_param: f64, end_param: f64) -> Self {
        Self {
            x_center,
            y_center,
            radius,
            start_param,
            end_param,
            clockwise: false,
            is_construction: false,
        }
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x_center, self.y_center)
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn construction(mut self) -> Self {
        self.is_construction = true;
        self
    }
}

/// 没有几何数据的实体（椭圆、样条、文字等）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenericEntity {
    pub kind: GenericKind,
    #[serde(default)]
    pub is_construction: bool,
}

impl GenericEntity {
    pub fn new(kind: GenericKind) -> Self {
        Self {
            kind,
            is_construction: false,
        }
    }
}

impl From<Point> for Entity {
    fn from(point: Point) -> Self {
        Entity::Point(point)
    }
}

impl From<Line> for Entity {
    fn from(line: Line) -> Self {
        Entity::Line(line)
    }
}

impl From<Circle> for Entity {
    fn from(circle: Circle) -> Self {
        Entity::Circle(circle)
    }
}

impl From<Arc> for Entity {
    fn from(arc: Arc) -> Self {
        Entity::Arc(arc)
    }
}

impl From<GenericEntity> for Entity {
    fn from(generic: GenericEntity) -> Self {
        Entity::Generic(generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_and_construction() {
        let entity: Entity = Circle::new(0.0, 0.0, 5.0).construction().into();
        assert_eq!(entity.kind(), EntityKind::Circle);
        assert!(entity.is_construction());

        let entity: Entity = GenericEntity::new(GenericKind::Spline).into();
        assert_eq!(entity.kind(), EntityKind::Spline);
        assert!(!entity.is_construction());
    }

    #[test]
    fn test_generic_entity_rejects_drawable_kinds() {
        for kind in ["Point", "Line", "Circle", "Arc"] {
            let json = format!(r#"{{"type":"Generic","kind":"{}"}}"#, kind);
            assert!(serde_json::from_str::<Entity>(&json).is_err(), "{}", kind);
        }

        let entity: Entity = serde_json::from_str(r#"{"type":"Generic","kind":"Text"}"#).unwrap();
        assert_eq!(entity.kind(), EntityKind::Text);
    }

    #[test]
    fn test_line_length() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_entity_json_shape() {
        let json = r#"{"type":"Arc","x_center":1.0,"y_center":2.0,"radius":3.0,"start_param":0.0,"end_param":1.5,"clockwise":true}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        match entity {
            Entity::Arc(arc) => {
                assert!(arc.clockwise);
                assert!(!arc.is_construction);
                assert_eq!(arc.center(), Point2::new(1.0, 2.0));
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }
}
