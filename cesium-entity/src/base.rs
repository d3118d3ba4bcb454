use std::fmt;
use std::marker::PhantomData;

use cesium_core::color::Color;
use cesium_core::geometry::Cartesian3;
use cesium_core::property::{PropertyTree, Value};
use cesium_io::to_jsobject;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::args::Args;
use crate::errors::EntityError;

/// 所有图形共享的样式属性，按输出顺序排列。`name` 与 `position` 不在其中。
pub const COMMON_FIELDS: [&str; 13] = [
    "width",
    "height",
    "extrudedHeight",
    "show",
    "fill",
    "material",
    "outline",
    "outlineColor",
    "outlineWidth",
    "numberOfVerticalLines",
    "rotation",
    "stRotation",
    "granularity",
];

/// 图形变体的静态描述：输出标签、专有字段顺序、必填字段与可接受的通用参数。
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub tag: &'static str,
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
    pub accepts: &'static [&'static str],
}

impl Descriptor {
    #[inline]
    pub fn accepts(&self, key: &str) -> bool {
        self.fields.contains(&key) || self.accepts.contains(&key)
    }
}

/// 具体图形变体。实现者只提供描述符、字段解析与按描述符顺序给出的字段值。
pub trait Shape: Sized + Clone + fmt::Debug + PartialEq + Send + Sync {
    const DESCRIPTOR: Descriptor;

    fn from_args(args: &mut Args) -> Result<Self, EntityError>;

    /// 与 `DESCRIPTOR.fields` 一一对应。
    fn values(&self) -> Vec<Option<Value>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonAttributes {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub extruded_height: Option<f64>,
    pub show: Option<bool>,
    pub fill: Option<bool>,
    pub material: Option<Color>,
    pub outline: Option<bool>,
    pub outline_color: Option<Color>,
    pub outline_width: Option<f64>,
    pub number_of_vertical_lines: Option<i64>,
    pub rotation: Option<f64>,
    pub st_rotation: Option<f64>,
}

impl CommonAttributes {
    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        let common = Self {
            width: args.take_number("width")?,
            height: args.take_number("height")?,
            extruded_height: args.take_number("extrudedHeight")?,
            show: args.take_bool("show")?,
            fill: args.take_bool("fill")?,
            material: args.take_color("material")?,
            outline: args.take_bool("outline")?,
            outline_color: args.take_color("outlineColor")?,
            outline_width: args.take_number("outlineWidth")?,
            number_of_vertical_lines: args.take_integer("numberOfVerticalLines")?,
            rotation: args.take_number("rotation")?,
            st_rotation: args.take_number("stRotation")?,
        };
        args.reject_unsupported("granularity")?;
        Ok(common)
    }

    /// 与 `COMMON_FIELDS` 顺序一致；`granularity` 恒为未设置。
    pub fn values(&self) -> [(&'static str, Option<Value>); 13] {
        let [
            width,
            height,
            extruded_height,
            show,
            fill,
            material,
            outline,
            outline_color,
            outline_width,
            number_of_vertical_lines,
            rotation,
            st_rotation,
            granularity,
        ] = COMMON_FIELDS;
        [
            (width, self.width.map(Value::Number)),
            (height, self.height.map(Value::Number)),
            (extruded_height, self.extruded_height.map(Value::Number)),
            (show, self.show.map(Value::Bool)),
            (fill, self.fill.map(Value::Bool)),
            (material, self.material.map(Value::Color)),
            (outline, self.outline.map(Value::Bool)),
            (outline_color, self.outline_color.map(Value::Color)),
            (outline_width, self.outline_width.map(Value::Number)),
            (
                number_of_vertical_lines,
                self.number_of_vertical_lines.map(Value::Int),
            ),
            (rotation, self.rotation.map(Value::Number)),
            (st_rotation, self.st_rotation.map(Value::Number)),
            (granularity, None),
        ]
    }
}

/// 一个已通过校验的实体描述，构造后不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<S: Shape> {
    name: Option<String>,
    position: Option<Cartesian3>,
    shape: S,
    common: CommonAttributes,
}

impl<S: Shape> Entity<S> {
    #[inline]
    pub fn tag(&self) -> &'static str {
        S::DESCRIPTOR.tag
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn position(&self) -> Option<Cartesian3> {
        self.position
    }

    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    #[inline]
    pub fn common(&self) -> &CommonAttributes {
        &self.common
    }

    /// 顶层固定为 `name`、`position` 与变体标签；标签下先是专有字段，再是全部通用字段。
    pub fn property_tree(&self) -> PropertyTree {
        let descriptor = S::DESCRIPTOR;
        let values = self.shape.values();
        debug_assert_eq!(descriptor.fields.len(), values.len());

        let mut graphics = PropertyTree::new();
        for (field, value) in descriptor.fields.iter().zip(values) {
            graphics.insert(*field, value);
        }
        for (field, value) in self.common.values() {
            graphics.insert(field, value);
        }

        let mut tree = PropertyTree::new();
        tree.insert("name", self.name.clone().map(Value::Text));
        tree.insert("position", self.position.map(Value::Cartesian3));
        tree.insert(descriptor.tag, Some(Value::Map(graphics)));
        tree
    }

    pub fn render(&self) -> String {
        to_jsobject(&self.property_tree())
    }
}

impl<S: Shape> fmt::Display for Entity<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// 以关键字方式收集参数，`build` 时统一校验。
#[derive(Debug, Clone)]
pub struct EntityBuilder<S: Shape> {
    args: IndexMap<String, Value>,
    shape: PhantomData<S>,
}

impl<S: Shape> Default for EntityBuilder<S> {
    fn default() -> Self {
        Self {
            args: IndexMap::new(),
            shape: PhantomData,
        }
    }
}

impl<S: Shape> EntityBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置任意关键字参数（使用 Cesium 属性名，如 `outlineColor`）。重复设置以最后一次为准。
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.set("name", name.into())
    }

    /// 原始数值按经纬度（度）解释，也可直接传入 `Cartesian3`。
    pub fn position(self, position: impl Into<Value>) -> Self {
        self.set("position", position)
    }

    pub fn width(self, width: f64) -> Self {
        self.set("width", width)
    }

    pub fn height(self, height: f64) -> Self {
        self.set("height", height)
    }

    pub fn extruded_height(self, height: f64) -> Self {
        self.set("extrudedHeight", height)
    }

    pub fn show(self, show: bool) -> Self {
        self.set("show", show)
    }

    pub fn fill(self, fill: bool) -> Self {
        self.set("fill", fill)
    }

    pub fn material(self, material: Color) -> Self {
        self.set("material", material)
    }

    pub fn outline(self, outline: bool) -> Self {
        self.set("outline", outline)
    }

    pub fn outline_color(self, color: Color) -> Self {
        self.set("outlineColor", color)
    }

    pub fn outline_width(self, width: f64) -> Self {
        self.set("outlineWidth", width)
    }

    pub fn number_of_vertical_lines(self, count: i64) -> Self {
        self.set("numberOfVerticalLines", count)
    }

    pub fn rotation(self, rotation: f64) -> Self {
        self.set("rotation", rotation)
    }

    pub fn st_rotation(self, rotation: f64) -> Self {
        self.set("stRotation", rotation)
    }

    pub fn build(self) -> Result<Entity<S>, EntityError> {
        let descriptor = S::DESCRIPTOR;
        if let Some(key) = self.args.keys().find(|key| !descriptor.accepts(key)) {
            trace!(tag = descriptor.tag, attribute = %key, "未知参数");
            return Err(EntityError::UnknownAttribute {
                tag: descriptor.tag,
                attribute: key.clone(),
            });
        }
        if let Some(key) = descriptor
            .required
            .iter()
            .find(|key| !self.args.contains_key(**key))
        {
            return Err(EntityError::MissingAttribute {
                tag: descriptor.tag,
                attribute: *key,
            });
        }

        let mut args = Args::new(descriptor.tag, self.args);
        let common = CommonAttributes::from_args(&mut args)?;
        let position = args.take_position("position")?;
        let name = args.take_text("name")?;
        let shape = S::from_args(&mut args)?;
        debug_assert!(args.is_empty(), "unconsumed attributes for {}", descriptor.tag);

        debug!(tag = descriptor.tag, name = ?name, "实体构建完成");
        Ok(Entity {
            name,
            position,
            shape,
            common,
        })
    }
}

/// 对象安全的渲染接口，便于以 `Box<dyn Renderable>` 存放不同变体。
pub trait Renderable: fmt::Debug + Send + Sync {
    fn tag(&self) -> &'static str;

    fn name(&self) -> Option<&str>;

    fn property_tree(&self) -> PropertyTree;

    fn render(&self) -> String {
        to_jsobject(&self.property_tree())
    }
}

impl<S: Shape> Renderable for Entity<S> {
    fn tag(&self) -> &'static str {
        S::DESCRIPTOR.tag
    }

    fn name(&self) -> Option<&str> {
        Entity::name(self)
    }

    fn property_tree(&self) -> PropertyTree {
        Entity::property_tree(self)
    }

    fn render(&self) -> String {
        Entity::render(self)
    }
}
