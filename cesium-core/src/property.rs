use indexmap::IndexMap;
use serde::Serialize;

use crate::color::Color;
use crate::geometry::{
    Cartesian, Cartesian2, Cartesian3, Cartesian3Array, Cartesian4, CartesianInput,
    CoordinateError, Rectangle,
};

/// 属性值：既是实体构造时的关键字参数，也是序列化前属性树的节点。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Map(PropertyTree),
    Cartesian2(Cartesian2),
    Cartesian3(Cartesian3),
    Cartesian4(Cartesian4),
    Cartesian3Array(Cartesian3Array),
    Rectangle(Rectangle),
    Color(Color),
}

impl Value {
    /// 类型名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Cartesian2(_) => "Cartesian2",
            Value::Cartesian3(_) => "Cartesian3",
            Value::Cartesian4(_) => "Cartesian4",
            Value::Cartesian3Array(_) => "Cartesian3Array",
            Value::Rectangle(_) => "Rectangle",
            Value::Color(_) => "Color",
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    /// 将纯数字列表转为 `Vec<f64>`，其他形态返回错误。
    pub fn to_numbers(&self) -> Result<Vec<f64>, CoordinateError> {
        match self {
            Value::List(items) => items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| CoordinateError::NotNumeric(item.kind()))
                })
                .collect(),
            other => Err(CoordinateError::Kind {
                expected: "list of numbers",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<&Value> for CartesianInput {
    type Error = CoordinateError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(_) => value.to_numbers().map(CartesianInput::Raw),
            Value::Cartesian2(inner) => Ok(CartesianInput::Typed(Cartesian::Two(*inner))),
            Value::Cartesian3(inner) => Ok(CartesianInput::Typed(Cartesian::Three(*inner))),
            Value::Cartesian4(inner) => Ok(CartesianInput::Typed(Cartesian::Four(*inner))),
            other => Err(CoordinateError::Kind {
                expected: "coordinate",
                found: other.kind(),
            }),
        }
    }
}

macro_rules! value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f32 => Number,
    f64 => Number,
    String => Text,
    &str => Text,
    PropertyTree => Map,
    Cartesian2 => Cartesian2,
    Cartesian3 => Cartesian3,
    Cartesian4 => Cartesian4,
    Cartesian3Array => Cartesian3Array,
    Rectangle => Rectangle,
    Color => Color,
}

impl From<Cartesian> for Value {
    fn from(value: Cartesian) -> Self {
        match value {
            Cartesian::Two(inner) => Value::Cartesian2(inner),
            Cartesian::Three(inner) => Value::Cartesian3(inner),
            Cartesian::Four(inner) => Value::Cartesian4(inner),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[f64]> for Value {
    fn from(values: &[f64]) -> Self {
        Value::List(values.iter().copied().map(Value::Number).collect())
    }
}

/// 有序属性树。值为 `None` 的键表示“未设置”：键存在于树中，但不会被序列化输出。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyTree {
    entries: IndexMap<String, Option<Value>>,
}

impl PropertyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖键值；覆盖时保留原有位置。
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Value>) {
        self.entries.insert(key.into(), value);
    }

    pub fn insert_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.insert(key, Some(value.into()));
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 返回已设置的值；键不存在或未设置时为 `None`。
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// 仅遍历已设置的键值。
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (key.as_str(), value)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
