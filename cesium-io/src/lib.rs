use std::fs;
use std::path::{Path, PathBuf};

use cesium_core::literal::{js_number, js_string};
use cesium_core::property::{PropertyTree, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to write file {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 将属性树渲染为 JS 对象字面量文本。
pub fn to_jsobject(tree: &PropertyTree) -> String {
    let mut writer = JsObjectWriter::new();
    writer.write_tree(tree);
    writer.finish()
}

/// 渲染单个值。
pub fn value_to_js(value: &Value) -> String {
    let mut writer = JsObjectWriter::new();
    writer.write_value(value);
    writer.finish()
}

/// 深度优先写出属性树。未设置的键整体省略；空映射/空列表仍输出 `{}` / `[]`。
#[derive(Debug, Default)]
pub struct JsObjectWriter {
    buffer: String,
}

impl JsObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_tree(&mut self, tree: &PropertyTree) {
        self.buffer.push('{');
        for (index, (key, value)) in tree.present().enumerate() {
            if index > 0 {
                self.buffer.push_str(", ");
            }
            self.buffer.push_str(key);
            self.buffer.push_str(": ");
            self.write_value(value);
        }
        self.buffer.push('}');
    }

    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Bool(flag) => self.buffer.push_str(if *flag { "true" } else { "false" }),
            Value::Int(number) => self.buffer.push_str(&number.to_string()),
            Value::Number(number) => self.buffer.push_str(&js_number(*number)),
            Value::Text(text) => self.buffer.push_str(&js_string(text)),
            Value::List(items) => {
                self.buffer.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.buffer.push_str(", ");
                    }
                    self.write_value(item);
                }
                self.buffer.push(']');
            }
            Value::Map(tree) => self.write_tree(tree),
            Value::Cartesian2(inner) => self.buffer.push_str(&inner.to_string()),
            Value::Cartesian3(inner) => self.buffer.push_str(&inner.to_string()),
            Value::Cartesian4(inner) => self.buffer.push_str(&inner.to_string()),
            Value::Cartesian3Array(inner) => self.buffer.push_str(&inner.to_string()),
            Value::Rectangle(inner) => self.buffer.push_str(&inner.to_string()),
            Value::Color(inner) => self.buffer.push_str(&inner.to_string()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn finish(self) -> String {
        self.buffer
    }
}

pub trait ScriptSaver {
    fn save(&self, objects: &[String], path: &Path) -> Result<(), IoError>;
}

/// 将渲染好的实体文本逐行写入脚本文件。
/// 设置 `statement_prefix` 后每行形如 `{prefix}{object});`。
#[derive(Debug, Clone, Default)]
pub struct JsFileSaver {
    statement_prefix: Option<String>,
}

impl JsFileSaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statement_prefix(prefix: impl Into<String>) -> Self {
        Self {
            statement_prefix: Some(prefix.into()),
        }
    }

    pub fn format_line(&self, object: &str) -> String {
        match &self.statement_prefix {
            Some(prefix) => format!("{prefix}{object});"),
            None => object.to_string(),
        }
    }

    pub fn format_script(&self, objects: &[String]) -> String {
        let mut script = String::new();
        for object in objects {
            script.push_str(&self.format_line(object));
            script.push('\n');
        }
        script
    }
}

impl ScriptSaver for JsFileSaver {
    fn save(&self, objects: &[String], path: &Path) -> Result<(), IoError> {
        let script = self.format_script(objects);
        fs::write(path, script).map_err(|source| IoError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), count = objects.len(), "脚本已写入");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cesium_core::color::Color;
    use cesium_core::geometry::{Cartesian2, Cartesian3};

    use super::*;

    fn sample_tree() -> PropertyTree {
        let mut inner = PropertyTree::new();
        inner.insert_value("semiMinorAxis", 1.0);
        inner.insert("height", None);
        inner.insert_value("material", Color::RED);
        inner.insert_value("outline", false);
        inner.insert_value("slices", 16);

        let mut tree = PropertyTree::new();
        tree.insert_value("name", "label");
        tree.insert("position", None);
        tree.insert_value("ellipse", inner);
        tree
    }

    #[test]
    fn mapping_keeps_order_and_skips_absent_keys() {
        assert_eq!(
            to_jsobject(&sample_tree()),
            "{name: \"label\", ellipse: {semiMinorAxis: 1.0, material: Cesium.Color.RED, outline: false, slices: 16}}"
        );
    }

    #[test]
    fn empty_containers_are_present_but_empty() {
        let mut tree = PropertyTree::new();
        tree.insert_value("box", PropertyTree::new());
        tree.insert_value("items", Vec::<Value>::new());
        tree.insert("missing", None);
        assert_eq!(to_jsobject(&tree), "{box: {}, items: []}");
        assert_eq!(to_jsobject(&PropertyTree::new()), "{}");
    }

    #[test]
    fn lists_and_value_types_render_recursively() {
        let value = Value::from(vec![
            Value::from(Cartesian2::new(-5.0, -5.0)),
            Value::from(Cartesian3::from_degrees(1.0, 2.0, 0.0)),
            Value::from([1, 2]),
        ]);
        assert_eq!(
            value_to_js(&value),
            "[new Cesium.Cartesian2(-5.0, -5.0), Cesium.Cartesian3.fromDegrees(1.0, 2.0, 0.0), [1, 2]]"
        );
    }

    #[test]
    fn output_is_deterministic() {
        let tree = sample_tree();
        assert_eq!(to_jsobject(&tree), to_jsobject(&tree.clone()));
    }

    #[test]
    fn saver_writes_one_statement_per_line() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("scene.js");
        let saver = JsFileSaver::with_statement_prefix("viewer.entities.add(");
        let objects = vec!["{box: {}}".to_string(), "{wall: {}}".to_string()];
        saver.save(&objects, &path).expect("save script");

        let content = std::fs::read_to_string(&path).expect("read script");
        assert_eq!(
            content,
            "viewer.entities.add({box: {}});\nviewer.entities.add({wall: {}});\n"
        );
    }

    #[test]
    fn saver_reports_write_failures() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("scene.js");
        let err = JsFileSaver::new().save(&[], &path).unwrap_err();
        assert!(matches!(err, IoError::WriteError { .. }));
    }
}
