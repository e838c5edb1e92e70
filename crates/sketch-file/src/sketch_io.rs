//! 草图JSON文件
//!
//! 草图以 serde JSON 形式保存，实体与约束的顺序与文件中一致。

use crate::error::FileError;
use sketch_core::sketch::Sketch;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 从JSON文本解析草图
pub fn from_json(json: &str) -> Result<Sketch, FileError> {
    Ok(serde_json::from_str(json)?)
}

/// 将草图序列化为JSON文本
pub fn to_json(sketch: &Sketch) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(sketch)?)
}

/// 从文件加载草图
pub fn load(path: &Path) -> Result<Sketch, FileError> {
    let json = fs::read_to_string(path)?;
    let sketch = from_json(&json)?;
    debug!(
        path = %path.display(),
        entities = sketch.entity_count(),
        constraints = sketch.constraint_count(),
        "loaded sketch"
    );
    Ok(sketch)
}

/// 保存草图到文件
pub fn save(sketch: &Sketch, path: &Path) -> Result<(), FileError> {
    fs::write(path, to_json(sketch)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_core::entity::{Arc, Entity, EntityKind, Point};

    const SAMPLE: &str = r#"{
        "entities": {
            "e2": {"type": "Point", "x": 3.0, "y": 4.0},
            "e1": {"type": "Arc", "x_center": 0.0, "y_center": 0.0, "radius": 1.0,
                   "start_param": 0.0, "end_param": 1.5707963267948966,
                   "clockwise": true, "is_construction": true},
            "e3": {"type": "Generic", "kind": "Spline"}
        },
        "constraints": {
            "c1": {"kind": "Coincident", "references": ["e1", "e2"]}
        }
    }"#;

    #[test]
    fn test_from_json() {
        let sketch = from_json(SAMPLE).unwrap();
        assert_eq!(sketch.entity_count(), 3);
        assert_eq!(sketch.constraint_count(), 1);

        let ids: Vec<&str> = sketch.entities().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["e2", "e1", "e3"]);

        let kinds: Vec<EntityKind> = sketch.entities().map(|(_, e)| e.kind()).collect();
        assert_eq!(kinds, [EntityKind::Point, EntityKind::Arc, EntityKind::Spline]);
    }

    #[test]
    fn test_invalid_json() {
        let result = from_json(r#"{"entities": {"e1": {"type": "Hyperbola"}}}"#);
        assert!(matches!(result, Err(FileError::Json(_))));

        let result = from_json(r#"{"entities": {"g": {"type": "Generic", "kind": "Point"}}}"#);
        assert!(matches!(result, Err(FileError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load(Path::new("/nonexistent/sketch.json"));
        assert!(matches!(result, Err(FileError::Io(_))));
    }

    #[test]
    fn test_save_and_load() {
        let mut sketch = Sketch::new();
        sketch.add_entity("p", Point::new(1.0, 2.0));
        sketch.add_entity("a", Arc::new(0.0, 0.0, 2.0, 0.5, 1.0).with_clockwise(true));

        let path = std::env::temp_dir().join(format!("sketch-io-{}.json", std::process::id()));
        save(&sketch, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, sketch);
        assert!(matches!(loaded.entities().nth(1), Some((_, Entity::Arc(a))) if a.clockwise));
    }
}
