//! 数学基础类型
//!
//! 基于 nalgebra 提供的点类型的别名。

use nalgebra as na;

/// 2D点类型
pub type Point2 = na::Point2<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(-0.0, 0.0));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
    }
}
