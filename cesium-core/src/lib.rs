pub mod color;
pub mod property;

pub mod literal {
    /// 将 `f64` 写成 JS 数字字面量。整数值保留一位小数（`1.0`），保证输出稳定可比对。
    pub fn js_number(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
            return text.to_string();
        }
        if value.fract() == 0.0 && value.abs() < 1e16 {
            format!("{value:.1}")
        } else {
            format!("{value}")
        }
    }

    /// 双引号包裹的 JS 字符串字面量。
    pub fn js_string(value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for ch in value.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                other => out.push(other),
            }
        }
        out.push('"');
        out
    }

    /// 逗号分隔的数字序列，不带括号。
    pub fn js_number_args(values: &[f64]) -> String {
        values
            .iter()
            .map(|value| js_number(*value))
            .collect::<Vec<_>>()
            .join(", ")
    }

}

pub mod geometry {
    use std::fmt;

    use glam::{DVec2, DVec3, DVec4};
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use crate::literal::{js_number, js_number_args};

    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum CoordinateError {
        #[error("expected {expected} components, got {found}")]
        Dimension { expected: &'static str, found: usize },
        #[error("degree array must not be empty")]
        EmptyArray,
        #[error("degree array length must be a multiple of {stride}: {found}")]
        ArrayLength { stride: usize, found: usize },
        #[error("expected numeric components, found {0}")]
        NotNumeric(&'static str),
        #[error("expected {expected}, found {found}")]
        Kind {
            expected: &'static str,
            found: &'static str,
        },
    }

    /// 二维笛卡尔坐标，对应 `Cesium.Cartesian2`。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Cartesian2(pub DVec2);

    impl Cartesian2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }
    }

    impl From<DVec2> for Cartesian2 {
        fn from(value: DVec2) -> Self {
            Self(value)
        }
    }

    impl fmt::Display for Cartesian2 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "new Cesium.Cartesian2({})",
                js_number_args(&self.0.to_array())
            )
        }
    }

    /// 三维坐标。`degrees` 为真时表示经度/纬度（度）与高度（米），
    /// 输出为 `Cesium.Cartesian3.fromDegrees(...)`，由 Cesium 端完成换算。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Cartesian3 {
        vec: DVec3,
        degrees: bool,
    }

    impl Cartesian3 {
        #[inline]
        pub fn new(x: f64, y: f64, z: f64) -> Self {
            Self {
                vec: DVec3::new(x, y, z),
                degrees: false,
            }
        }

        #[inline]
        pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
            Self {
                vec: DVec3::new(longitude, latitude, height),
                degrees: true,
            }
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.vec.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.vec.y
        }

        #[inline]
        pub fn z(self) -> f64 {
            self.vec.z
        }

        #[inline]
        pub fn is_degrees(self) -> bool {
            self.degrees
        }

        #[inline]
        pub fn as_vec3(self) -> DVec3 {
            self.vec
        }
    }

    impl From<DVec3> for Cartesian3 {
        fn from(value: DVec3) -> Self {
            Self {
                vec: value,
                degrees: false,
            }
        }
    }

    impl fmt::Display for Cartesian3 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let args = js_number_args(&self.vec.to_array());
            if self.degrees {
                write!(f, "Cesium.Cartesian3.fromDegrees({args})")
            } else {
                write!(f, "new Cesium.Cartesian3({args})")
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Cartesian4(pub DVec4);

    impl Cartesian4 {
        #[inline]
        pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
            Self(DVec4::new(x, y, z, w))
        }

        #[inline]
        pub fn as_vec4(self) -> DVec4 {
            self.0
        }
    }

    impl fmt::Display for Cartesian4 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "new Cesium.Cartesian4({})",
                js_number_args(&self.0.to_array())
            )
        }
    }

    /// 任意维度的已解析坐标。
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Cartesian {
        Two(Cartesian2),
        Three(Cartesian3),
        Four(Cartesian4),
    }

    impl Cartesian {
        #[inline]
        pub fn dimension(&self) -> usize {
            match self {
                Cartesian::Two(_) => 2,
                Cartesian::Three(_) => 3,
                Cartesian::Four(_) => 4,
            }
        }

        pub fn into_cartesian2(self) -> Result<Cartesian2, CoordinateError> {
            match self {
                Cartesian::Two(value) => Ok(value),
                other => Err(CoordinateError::Dimension {
                    expected: "2",
                    found: other.dimension(),
                }),
            }
        }

        pub fn into_cartesian3(self) -> Result<Cartesian3, CoordinateError> {
            match self {
                Cartesian::Three(value) => Ok(value),
                other => Err(CoordinateError::Dimension {
                    expected: "3",
                    found: other.dimension(),
                }),
            }
        }
    }

    /// 坐标输入的三种形态：原始数值、按度解释的数值、已构造的坐标。
    #[derive(Debug, Clone, PartialEq)]
    pub enum CartesianInput {
        Raw(Vec<f64>),
        Degrees(Vec<f64>),
        Typed(Cartesian),
    }

    impl CartesianInput {
        /// 将原始数值改为按度解释，已构造的坐标保持不变。
        pub fn into_degrees(self) -> Self {
            match self {
                CartesianInput::Raw(values) => CartesianInput::Degrees(values),
                other => other,
            }
        }

        /// 原始数值按分量个数选择 2/3/4 维；度数输入的二元组补零高度为三维。
        pub fn resolve(self) -> Result<Cartesian, CoordinateError> {
            match self {
                CartesianInput::Raw(values) => match values.as_slice() {
                    [x, y] => Ok(Cartesian::Two(Cartesian2::new(*x, *y))),
                    [x, y, z] => Ok(Cartesian::Three(Cartesian3::new(*x, *y, *z))),
                    [x, y, z, w] => Ok(Cartesian::Four(Cartesian4::new(*x, *y, *z, *w))),
                    other => Err(CoordinateError::Dimension {
                        expected: "2, 3 or 4",
                        found: other.len(),
                    }),
                },
                CartesianInput::Degrees(values) => match values.as_slice() {
                    [lon, lat] => Ok(Cartesian::Three(Cartesian3::from_degrees(*lon, *lat, 0.0))),
                    [lon, lat, height] => Ok(Cartesian::Three(Cartesian3::from_degrees(
                        *lon, *lat, *height,
                    ))),
                    other => Err(CoordinateError::Dimension {
                        expected: "2 or 3",
                        found: other.len(),
                    }),
                },
                CartesianInput::Typed(value) => Ok(value),
            }
        }
    }

    impl From<Cartesian2> for CartesianInput {
        fn from(value: Cartesian2) -> Self {
            CartesianInput::Typed(Cartesian::Two(value))
        }
    }

    impl From<Cartesian3> for CartesianInput {
        fn from(value: Cartesian3) -> Self {
            CartesianInput::Typed(Cartesian::Three(value))
        }
    }

    impl From<Cartesian4> for CartesianInput {
        fn from(value: Cartesian4) -> Self {
            CartesianInput::Typed(Cartesian::Four(value))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum DegreeLayout {
        /// `[lon, lat, lon, lat, ...]`
        LonLat,
        /// `[lon, lat, height, ...]`
        LonLatHeight,
    }

    impl DegreeLayout {
        #[inline]
        pub fn stride(self) -> usize {
            match self {
                DegreeLayout::LonLat => 2,
                DegreeLayout::LonLatHeight => 3,
            }
        }
    }

    /// 扁平的度数数组，对应 `Cesium.Cartesian3.fromDegreesArray(...)` 系列构造。
    /// 反序列化同样经过长度校验。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(try_from = "RawCartesian3Array")]
    pub struct Cartesian3Array {
        values: Vec<f64>,
        layout: DegreeLayout,
    }

    #[derive(Deserialize)]
    struct RawCartesian3Array {
        values: Vec<f64>,
        layout: DegreeLayout,
    }

    impl TryFrom<RawCartesian3Array> for Cartesian3Array {
        type Error = CoordinateError;

        fn try_from(raw: RawCartesian3Array) -> Result<Self, Self::Error> {
            Self::with_layout(raw.values, raw.layout)
        }
    }

    impl Cartesian3Array {
        pub fn from_degrees_array(values: impl Into<Vec<f64>>) -> Result<Self, CoordinateError> {
            Self::with_layout(values.into(), DegreeLayout::LonLat)
        }

        pub fn from_degrees_array_heights(
            values: impl Into<Vec<f64>>,
        ) -> Result<Self, CoordinateError> {
            Self::with_layout(values.into(), DegreeLayout::LonLatHeight)
        }

        fn with_layout(values: Vec<f64>, layout: DegreeLayout) -> Result<Self, CoordinateError> {
            if values.is_empty() {
                return Err(CoordinateError::EmptyArray);
            }
            let stride = layout.stride();
            if values.len() % stride != 0 {
                return Err(CoordinateError::ArrayLength {
                    stride,
                    found: values.len(),
                });
            }
            Ok(Self { values, layout })
        }

        /// 扁平数值个数。
        #[inline]
        pub fn len(&self) -> usize {
            self.values.len()
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            self.values.is_empty()
        }

        /// 逻辑位置个数（扁平数值个数除以步长）。
        #[inline]
        pub fn position_count(&self) -> usize {
            self.values.len() / self.layout.stride()
        }

        #[inline]
        pub fn layout(&self) -> DegreeLayout {
            self.layout
        }

        #[inline]
        pub fn values(&self) -> &[f64] {
            &self.values
        }
    }

    impl fmt::Display for Cartesian3Array {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let constructor = match self.layout {
                DegreeLayout::LonLat => "fromDegreesArray",
                DegreeLayout::LonLatHeight => "fromDegreesArrayHeights",
            };
            write!(
                f,
                "Cesium.Cartesian3.{constructor}([{}])",
                js_number_args(&self.values)
            )
        }
    }

    /// 经纬度矩形（单位：度），顺序为 west, south, east, north。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Rectangle {
        pub west: f64,
        pub south: f64,
        pub east: f64,
        pub north: f64,
    }

    impl Rectangle {
        #[inline]
        pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
            Self {
                west,
                south,
                east,
                north,
            }
        }

        pub fn from_slice(values: &[f64]) -> Result<Self, CoordinateError> {
            match values {
                [west, south, east, north] => Ok(Self::from_degrees(*west, *south, *east, *north)),
                other => Err(CoordinateError::Dimension {
                    expected: "4",
                    found: other.len(),
                }),
            }
        }
    }

    impl fmt::Display for Rectangle {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Cesium.Rectangle.fromDegrees({}, {}, {}, {})",
                js_number(self.west),
                js_number(self.south),
                js_number(self.east),
                js_number(self.north)
            )
        }
    }

}
