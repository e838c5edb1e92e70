//! 实体属性定义
//!
//! 导出时使用的颜色与线型。

use serde::{Deserialize, Serialize};

/// RGB颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // 预定义颜色（AutoCAD ACI颜色兼容）
    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// AutoCAD颜色索引(ACI)，非标准颜色回退为白色(7)
    pub fn to_aci(&self) -> u8 {
        match (self.r, self.g, self.b) {
            (255, 0, 0) => 1,
            (0, 0, 255) => 5,
            _ => 7,
        }
    }
}

/// 线型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// 点线
    Dotted,
}

impl LineType {
    /// DXF线型表中的名称
    pub fn name(&self) -> &'static str {
        match self {
            LineType::Dotted => "DOTTED",
        }
    }

    /// 线型说明（写入线型表）
    pub fn description(&self) -> &'static str {
        match self {
            LineType::Dotted => "Dotted . . . . . . . . . . . . . . . . . . . . . . . .",
        }
    }

    /// 线型模式（正数表示画线，负数表示空白，0表示点）
    pub fn pattern(&self) -> Vec<f64> {
        match self {
            LineType::Dotted => vec![0.0, -0.2],
        }
    }

    /// 一个重复单元的总长度
    pub fn pattern_length(&self) -> f64 {
        self.pattern().iter().map(|x| x.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_color_to_aci() {
        assert_eq!(Color::RED.to_aci(), 1);
        assert_eq!(Color::BLUE.to_aci(), 5);
        assert_eq!(Color::new(255, 255, 255).to_aci(), 7);
        assert_eq!(Color::new(12, 34, 56).to_aci(), 7);
    }

    #[test]
    fn test_line_type_pattern() {
        assert_eq!(LineType::Dotted.name(), "DOTTED");
        assert_eq!(LineType::Dotted.pattern(), vec![0.0, -0.2]);
        assert!(approx_eq(LineType::Dotted.pattern_length(), 0.2));
    }
}
