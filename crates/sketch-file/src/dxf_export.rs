//! DXF导出
//!
//! 将草图实体逐个转换为DXF（R12）模型空间图元：
//! - 点 → POINT
//! - 线段 → LINE
//! - 圆 → CIRCLE
//! - 圆弧 → ARC
//!
//! 约束不参与导出。遇到其他类型的实体时整个导出失败。

use crate::error::FileError;
use crate::style::{style_for, EntityStyle};
use serde::Deserialize;
use sketch_core::entity::{Arc, Circle, Entity, EntityId, Line, Point};
use sketch_core::properties::LineType;
use sketch_core::sketch::Sketch;
use std::f64::consts::PI;
use std::path::Path;
use tracing::{debug, trace, warn};

/// 模型空间默认图层
pub const DEFAULT_LAYER: &str = "0";

/// 导出选项
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// 与草图序列转换保持一致的接口参数；约束不参与导出，因此当前无效果
    pub ignore_invalid_constraints: bool,
    /// 图元所在图层
    pub layer: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            ignore_invalid_constraints: true,
            layer: DEFAULT_LAYER.to_string(),
        }
    }
}

/// 圆弧的角度范围（度）
///
/// 从 `start_angle` 沿顺时针方向扫到 `end_angle`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBounds {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

impl ArcBounds {
    /// DXF圆弧总是逆时针，起止角互换
    pub fn counter_clockwise(&self) -> (f64, f64) {
        (self.end_angle, self.start_angle)
    }
}

/// 计算圆弧的角度范围
pub fn arc_bounds(arc: &Arc) -> ArcBounds {
    // 实体的起止参数与绘制方向相反
    let mut start_angle = arc.end_param * 180.0 / PI;
    let mut end_angle = arc.start_param * 180.0 / PI;
    if arc.clockwise {
        // +0.0 把 -0.0 归一为 0.0
        (start_angle, end_angle) = (-end_angle + 0.0, -start_angle + 0.0);
    }
    ArcBounds {
        start_angle,
        end_angle,
        clockwise: arc.clockwise,
    }
}

/// 使用默认选项导出草图
pub fn sketch_to_dxf(sketch: &Sketch) -> Result<dxf::Drawing, FileError> {
    sketch_to_dxf_with(sketch, &ExportOptions::default())
}

/// 导出草图为DXF图纸
///
/// 按插入顺序为每个实体生成一个图元。失败时不返回部分结果。
pub fn sketch_to_dxf_with(
    sketch: &Sketch,
    options: &ExportOptions,
) -> Result<dxf::Drawing, FileError> {
    let mut drawing = new_drawing(&options.layer);

    debug!(
        entities = sketch.entity_count(),
        constraints = sketch.constraint_count(),
        ignore_invalid_constraints = options.ignore_invalid_constraints,
        "exporting sketch to DXF, constraints are not drawn"
    );

    for (id, entity) in sketch.entities() {
        draw_entity(id, entity, &options.layer, &mut drawing)?;
    }

    Ok(drawing)
}

/// 保存DXF图纸
pub fn save(drawing: &dxf::Drawing, path: &Path) -> Result<(), FileError> {
    drawing
        .save_file(path)
        .map_err(|e| FileError::Dxf(e.to_string()))
}

/// 创建空图纸并注册点线线型
fn new_drawing(layer: &str) -> dxf::Drawing {
    let mut drawing = dxf::Drawing::new();
    drawing.header.version = dxf::enums::AcadVersion::R12;

    let dotted = LineType::Dotted;
    let mut line_type = dxf::tables::LineType::default();
    line_type.name = dotted.name().to_string();
    line_type.description = dotted.description().to_string();
    line_type.total_pattern_length = dotted.pattern_length();
    line_type.dash_dot_space_lengths = dotted.pattern();
    drawing.add_line_type(line_type);

    if layer != DEFAULT_LAYER {
        let mut dxf_layer = dxf::tables::Layer::default();
        dxf_layer.name = layer.to_string();
        drawing.add_layer(dxf_layer);
    }

    drawing
}

/// 绘制单个实体
fn draw_entity(
    id: &EntityId,
    entity: &Entity,
    layer: &str,
    drawing: &mut dxf::Drawing,
) -> Result<(), FileError> {
    trace!(%id, kind = %entity.kind(), "drawing entity");

    let specific = match entity {
        Entity::Point(point) => draw_point(point),
        Entity::Line(line) => draw_line(line),
        Entity::Circle(circle) => draw_circle(circle),
        Entity::Arc(arc) => draw_arc(arc),
        Entity::Generic(_) => {
            warn!(%id, kind = %entity.kind(), "unsupported entity, aborting export");
            return Err(FileError::UnsupportedEntityKind {
                id: id.clone(),
                kind: entity.kind(),
            });
        }
    };

    let mut dxf_entity = dxf::entities::Entity::new(specific);
    dxf_entity.common.layer = layer.to_string();
    let style: EntityStyle = style_for(entity);
    style.apply(&mut dxf_entity.common);

    drawing.add_entity(dxf_entity);
    Ok(())
}

fn draw_point(point: &Point) -> dxf::entities::EntityType {
    let mut dxf_point = dxf::entities::ModelPoint::default();
    let position = point.position();
    dxf_point.location = dxf::Point::new(position.x, position.y, 0.0);
    dxf::entities::EntityType::ModelPoint(dxf_point)
}

fn draw_line(line: &Line) -> dxf::entities::EntityType {
    let mut dxf_line = dxf::entities::Line::default();
    dxf_line.p1 = dxf::Point::new(line.start.x, line.start.y, 0.0);
    dxf_line.p2 = dxf::Point::new(line.end.x, line.end.y, 0.0);
    dxf::entities::EntityType::Line(dxf_line)
}

fn draw_circle(circle: &Circle) -> dxf::entities::EntityType {
    let mut dxf_circle = dxf::entities::Circle::default();
    let center = circle.center();
    dxf_circle.center = dxf::Point::new(center.x, center.y, 0.0);
    dxf_circle.radius = circle.radius;
    dxf::entities::EntityType::Circle(dxf_circle)
}

fn draw_arc(arc: &Arc) -> dxf::entities::EntityType {
    let (start_angle, end_angle) = arc_bounds(arc).counter_clockwise();

    let mut dxf_arc = dxf::entities::Arc::default();
    let center = arc.center();
    dxf_arc.center = dxf::Point::new(center.x, center.y, 0.0);
    dxf_arc.radius = arc.radius;
    dxf_arc.start_angle = start_angle;
    dxf_arc.end_angle = end_angle;
    dxf::entities::EntityType::Arc(dxf_arc)
}
