use cesium_core::color::Color;
use cesium_core::geometry::{
    Cartesian, Cartesian2, Cartesian3, Cartesian3Array, CartesianInput, CoordinateError, Rectangle,
};
use cesium_core::property::Value;
use indexmap::IndexMap;
use tracing::trace;

use crate::errors::EntityError;

/// 关键字参数集合。各 `take_*` 取出并校验一个参数，缺省时返回 `Ok(None)`。
#[derive(Debug, Clone)]
pub struct Args {
    tag: &'static str,
    entries: IndexMap<String, Value>,
}

impl Args {
    pub fn new(tag: &'static str, entries: IndexMap<String, Value>) -> Self {
        Self { tag, entries }
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn require(&mut self, key: &'static str) -> Result<Value, EntityError> {
        self.take(key).ok_or(EntityError::MissingAttribute {
            tag: self.tag,
            attribute: key,
        })
    }

    pub fn take_number(&mut self, key: &'static str) -> Result<Option<f64>, EntityError> {
        self.take(key).map(|value| number(key, &value)).transpose()
    }

    pub fn require_number(&mut self, key: &'static str) -> Result<f64, EntityError> {
        let value = self.require(key)?;
        number(key, &value)
    }

    /// 计数类参数只接受非负整数，不做浮点截断。
    pub fn take_integer(&mut self, key: &'static str) -> Result<Option<i64>, EntityError> {
        self.take(key)
            .map(|value| match value {
                Value::Int(count) if count >= 0 => Ok(count),
                other => Err(invalid_type(key, "a non-negative integer", &other)),
            })
            .transpose()
    }

    pub fn take_bool(&mut self, key: &'static str) -> Result<Option<bool>, EntityError> {
        self.take(key)
            .map(|value| {
                value
                    .as_bool()
                    .ok_or_else(|| invalid_type(key, "a bool", &value))
            })
            .transpose()
    }

    pub fn take_text(&mut self, key: &'static str) -> Result<Option<String>, EntityError> {
        self.take(key)
            .map(|value| match value {
                Value::Text(text) => Ok(text),
                other => Err(invalid_type(key, "a string", &other)),
            })
            .transpose()
    }

    pub fn take_color(&mut self, key: &'static str) -> Result<Option<Color>, EntityError> {
        self.take(key)
            .map(|value| match value {
                Value::Color(color) => {
                    color
                        .validate()
                        .map_err(|source| EntityError::InvalidColor {
                            attribute: key,
                            source,
                        })?;
                    Ok(color)
                }
                other => Err(invalid_type(key, "a Color", &other)),
            })
            .transpose()
    }

    /// 已声明但尚未实现的参数：只要提供了值就报错。
    pub fn reject_unsupported(&mut self, key: &'static str) -> Result<(), EntityError> {
        if self.take(key).is_some() {
            trace!(tag = self.tag, attribute = key, "拒绝尚未支持的参数");
            return Err(EntityError::NotSupported { attribute: key });
        }
        Ok(())
    }

    /// 按度解释原始数值（二元组补零高度），结果必须为三维坐标。
    pub fn take_position(&mut self, key: &'static str) -> Result<Option<Cartesian3>, EntityError> {
        self.take(key)
            .map(|value| {
                CartesianInput::try_from(&value)
                    .map(CartesianInput::into_degrees)
                    .and_then(CartesianInput::resolve)
                    .and_then(Cartesian::into_cartesian3)
                    .map_err(|source| coordinate_error(key, "Cartesian3", source))
            })
            .transpose()
    }

    pub fn require_cartesian3(&mut self, key: &'static str) -> Result<Cartesian3, EntityError> {
        let value = self.require(key)?;
        CartesianInput::try_from(&value)
            .and_then(CartesianInput::resolve)
            .and_then(Cartesian::into_cartesian3)
            .map_err(|source| coordinate_error(key, "Cartesian3", source))
    }

    /// 扁平数值列表按 `[lon, lat, ...]` 解释；也接受已构造的 `Cartesian3Array`。
    pub fn require_degree_array(
        &mut self,
        key: &'static str,
    ) -> Result<Cartesian3Array, EntityError> {
        let value = self.require(key)?;
        match value {
            Value::Cartesian3Array(array) => Ok(array),
            other => other
                .to_numbers()
                .and_then(Cartesian3Array::from_degrees_array)
                .map_err(|source| coordinate_error(key, "a degree array", source)),
        }
    }

    pub fn require_rectangle(&mut self, key: &'static str) -> Result<Rectangle, EntityError> {
        let value = self.require(key)?;
        match value {
            Value::Rectangle(rectangle) => Ok(rectangle),
            other => other
                .to_numbers()
                .and_then(|values| Rectangle::from_slice(&values))
                .map_err(|source| coordinate_error(key, "Rectangle", source)),
        }
    }

    /// 二维坐标列表：元素为二元组或 `Cartesian2`，或者偶数长度的扁平数值列表。
    pub fn require_cartesian2_list(
        &mut self,
        key: &'static str,
    ) -> Result<Vec<Cartesian2>, EntityError> {
        let value = self.require(key)?;
        cartesian2_list(&value).map_err(|source| coordinate_error(key, "a list of Cartesian2", source))
    }

    /// 标量广播为每个位置一个值；列表长度必须与位置数一致。
    pub fn take_heights(
        &mut self,
        key: &'static str,
        position_count: usize,
    ) -> Result<Option<Vec<f64>>, EntityError> {
        let Some(value) = self.take(key) else {
            return Ok(None);
        };
        match &value {
            Value::List(items) => {
                let heights = items
                    .iter()
                    .map(|item| {
                        item.as_f64()
                            .ok_or_else(|| invalid_type(key, "a list of numbers", item))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if heights.len() != position_count {
                    return Err(EntityError::LengthMismatch {
                        attribute: key,
                        expected: position_count,
                        found: heights.len(),
                    });
                }
                Ok(Some(heights))
            }
            scalar => scalar
                .as_f64()
                .map(|height| Some(vec![height; position_count]))
                .ok_or_else(|| invalid_type(key, "a number or a list of numbers", scalar)),
        }
    }
}

fn cartesian2_list(value: &Value) -> Result<Vec<Cartesian2>, CoordinateError> {
    let Value::List(items) = value else {
        return Err(CoordinateError::Kind {
            expected: "list",
            found: value.kind(),
        });
    };
    if items.is_empty() {
        return Err(CoordinateError::EmptyArray);
    }
    if items.iter().all(|item| item.as_f64().is_some()) {
        let flat = value.to_numbers()?;
        if flat.len() % 2 != 0 {
            return Err(CoordinateError::ArrayLength {
                stride: 2,
                found: flat.len(),
            });
        }
        return Ok(flat
            .chunks_exact(2)
            .map(|pair| Cartesian2::new(pair[0], pair[1]))
            .collect());
    }
    items
        .iter()
        .map(|item| {
            CartesianInput::try_from(item)
                .and_then(CartesianInput::resolve)
                .and_then(Cartesian::into_cartesian2)
        })
        .collect()
}

fn number(key: &'static str, value: &Value) -> Result<f64, EntityError> {
    value
        .as_f64()
        .ok_or_else(|| invalid_type(key, "a number", value))
}

fn invalid_type(key: &'static str, expected: &'static str, value: &Value) -> EntityError {
    EntityError::InvalidType {
        attribute: key,
        expected,
        found: describe(value),
    }
}

fn coordinate_error(
    key: &'static str,
    expected: &'static str,
    source: CoordinateError,
) -> EntityError {
    EntityError::InvalidCoordinate {
        attribute: key,
        expected,
        source,
    }
}

/// 错误信息中的值描述：标量带上取值，复合值只给类型名。
fn describe(value: &Value) -> String {
    match value {
        Value::Bool(flag) => format!("bool {flag}"),
        Value::Int(number) => format!("int {number}"),
        Value::Number(number) => format!("number {number}"),
        Value::Text(text) => format!("string {text:?}"),
        other => other.kind().to_string(),
    }
}
