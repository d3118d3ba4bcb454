use cesium_core::geometry::{Cartesian2, Cartesian3, Cartesian3Array, Rectangle as RectangleCoordinates};
use cesium_core::property::Value;

use crate::args::Args;
use crate::base::{Descriptor, Entity, EntityBuilder, Shape};
use crate::errors::EntityError;

/// `EllipseGraphics`：按长短半轴描述的椭圆。
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseGraphics {
    pub semi_minor_axis: f64,
    pub semi_major_axis: f64,
}

impl Shape for EllipseGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "ellipse",
        fields: &["semiMinorAxis", "semiMajorAxis"],
        required: &["semiMinorAxis", "semiMajorAxis"],
        accepts: &[
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
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            semi_minor_axis: args.require_number("semiMinorAxis")?,
            semi_major_axis: args.require_number("semiMajorAxis")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Number(self.semi_minor_axis)),
            Some(Value::Number(self.semi_major_axis)),
        ]
    }
}

pub type Ellipse = Entity<EllipseGraphics>;

impl Ellipse {
    pub fn builder(
        semi_minor_axis: impl Into<Value>,
        semi_major_axis: impl Into<Value>,
    ) -> EntityBuilder<EllipseGraphics> {
        EntityBuilder::new()
            .set("semiMinorAxis", semi_minor_axis)
            .set("semiMajorAxis", semi_major_axis)
    }
}

/// `EllipsoidGraphics`：三轴半径，可选细分参数。
#[derive(Debug, Clone, PartialEq)]
pub struct EllipsoidGraphics {
    pub radii: Cartesian3,
    pub subdivisions: Option<i64>,
    pub stack_partitions: Option<i64>,
    pub slice_partitions: Option<i64>,
}

impl Shape for EllipsoidGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "ellipsoid",
        fields: &["radii", "subdivisions", "stackPartitions", "slicePartitions"],
        required: &["radii"],
        accepts: &[
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            radii: args.require_cartesian3("radii")?,
            subdivisions: args.take_integer("subdivisions")?,
            stack_partitions: args.take_integer("stackPartitions")?,
            slice_partitions: args.take_integer("slicePartitions")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Cartesian3(self.radii)),
            self.subdivisions.map(Value::Int),
            self.stack_partitions.map(Value::Int),
            self.slice_partitions.map(Value::Int),
        ]
    }
}

pub type Ellipsoid = Entity<EllipsoidGraphics>;

impl Ellipsoid {
    pub fn builder(radii: impl Into<Value>) -> EntityBuilder<EllipsoidGraphics> {
        EntityBuilder::new().set("radii", radii)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CylinderGraphics {
    pub length: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub slices: Option<i64>,
}

impl Shape for CylinderGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "cylinder",
        fields: &["length", "topRadius", "bottomRadius", "slices"],
        required: &["length", "topRadius", "bottomRadius"],
        accepts: &[
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "numberOfVerticalLines",
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            length: args.require_number("length")?,
            top_radius: args.require_number("topRadius")?,
            bottom_radius: args.require_number("bottomRadius")?,
            slices: args.take_integer("slices")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Number(self.length)),
            Some(Value::Number(self.top_radius)),
            Some(Value::Number(self.bottom_radius)),
            self.slices.map(Value::Int),
        ]
    }
}

pub type Cylinder = Entity<CylinderGraphics>;

impl Cylinder {
    pub fn builder(
        length: impl Into<Value>,
        top_radius: impl Into<Value>,
        bottom_radius: impl Into<Value>,
    ) -> EntityBuilder<CylinderGraphics> {
        EntityBuilder::new()
            .set("length", length)
            .set("topRadius", top_radius)
            .set("bottomRadius", bottom_radius)
    }
}

impl EntityBuilder<CylinderGraphics> {
    pub fn slices(self, slices: i64) -> Self {
        self.set("slices", slices)
    }
}

/// 折线，使用 `positions` 而非 `position`。
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineGraphics {
    pub positions: Cartesian3Array,
    pub follow_surface: Option<bool>,
}

impl Shape for PolylineGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "polyline",
        fields: &["positions", "followSurface"],
        required: &["positions"],
        accepts: &["width", "show", "material", "granularity", "name"],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            positions: args.require_degree_array("positions")?,
            follow_surface: args.take_bool("followSurface")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Cartesian3Array(self.positions.clone())),
            self.follow_surface.map(Value::Bool),
        ]
    }
}

pub type Polyline = Entity<PolylineGraphics>;

impl Polyline {
    pub fn builder(positions: impl Into<Value>) -> EntityBuilder<PolylineGraphics> {
        EntityBuilder::new().set("positions", positions)
    }
}

impl EntityBuilder<PolylineGraphics> {
    pub fn follow_surface(self, follow: bool) -> Self {
        self.set("followSurface", follow)
    }
}

/// 沿折线拉伸二维截面形成的体。
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineVolumeGraphics {
    pub positions: Cartesian3Array,
    pub shape: Vec<Cartesian2>,
}

impl Shape for PolylineVolumeGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "polylineVolume",
        fields: &["positions", "shape", "cornerType"],
        required: &["positions", "shape"],
        accepts: &[
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "granularity",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        let positions = args.require_degree_array("positions")?;
        let shape = args.require_cartesian2_list("shape")?;
        args.reject_unsupported("cornerType")?;
        Ok(Self { positions, shape })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Cartesian3Array(self.positions.clone())),
            Some(Value::List(
                self.shape.iter().copied().map(Value::Cartesian2).collect(),
            )),
            None,
        ]
    }
}

pub type PolylineVolume = Entity<PolylineVolumeGraphics>;

impl PolylineVolume {
    pub fn builder(
        positions: impl Into<Value>,
        shape: impl Into<Value>,
    ) -> EntityBuilder<PolylineVolumeGraphics> {
        EntityBuilder::new()
            .set("positions", positions)
            .set("shape", shape)
    }
}

/// 走廊：沿中心线、给定宽度的带状面。宽度属于通用字段 `width`。
#[derive(Debug, Clone, PartialEq)]
pub struct CorridorGraphics {
    pub positions: Cartesian3Array,
}

impl Shape for CorridorGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "corridor",
        fields: &["positions", "cornerType"],
        required: &["positions", "width"],
        accepts: &[
            "width",
            "height",
            "extrudedHeight",
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "granularity",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        let positions = args.require_degree_array("positions")?;
        args.reject_unsupported("cornerType")?;
        Ok(Self { positions })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![Some(Value::Cartesian3Array(self.positions.clone())), None]
    }
}

pub type Corridor = Entity<CorridorGraphics>;

impl Corridor {
    pub fn builder(positions: impl Into<Value>, width: f64) -> EntityBuilder<CorridorGraphics> {
        EntityBuilder::new()
            .set("positions", positions)
            .width(width)
    }
}

/// 墙体。高度列表与位置一一对应：标量会广播到每个位置。
#[derive(Debug, Clone, PartialEq)]
pub struct WallGraphics {
    pub positions: Cartesian3Array,
    pub maximum_heights: Option<Vec<f64>>,
    pub minimum_heights: Option<Vec<f64>>,
}

impl Shape for WallGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "wall",
        fields: &["positions", "maximumHeights", "minimumHeights"],
        required: &["positions"],
        accepts: &[
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "granularity",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        let positions = args.require_degree_array("positions")?;
        let count = positions.position_count();
        let maximum_heights = args.take_heights("maximumHeights", count)?;
        let minimum_heights = args.take_heights("minimumHeights", count)?;
        Ok(Self {
            positions,
            maximum_heights,
            minimum_heights,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Cartesian3Array(self.positions.clone())),
            self.maximum_heights.clone().map(Value::from),
            self.minimum_heights.clone().map(Value::from),
        ]
    }
}

pub type Wall = Entity<WallGraphics>;

impl Wall {
    pub fn builder(positions: impl Into<Value>) -> EntityBuilder<WallGraphics> {
        EntityBuilder::new().set("positions", positions)
    }
}

impl EntityBuilder<WallGraphics> {
    pub fn maximum_heights(self, heights: impl Into<Value>) -> Self {
        self.set("maximumHeights", heights)
    }

    pub fn minimum_heights(self, heights: impl Into<Value>) -> Self {
        self.set("minimumHeights", heights)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectangleGraphics {
    pub coordinates: RectangleCoordinates,
    pub close_top: Option<bool>,
    pub close_bottom: Option<bool>,
}

impl Shape for RectangleGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "rectangle",
        fields: &["coordinates", "closeTop", "closeBottom"],
        required: &["coordinates"],
        accepts: &[
            "height",
            "extrudedHeight",
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "rotation",
            "stRotation",
            "granularity",
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            coordinates: args.require_rectangle("coordinates")?,
            close_top: args.take_bool("closeTop")?,
            close_bottom: args.take_bool("closeBottom")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Rectangle(self.coordinates)),
            self.close_top.map(Value::Bool),
            self.close_bottom.map(Value::Bool),
        ]
    }
}

pub type Rectangle = Entity<RectangleGraphics>;

impl Rectangle {
    /// `coordinates` 为 `[west, south, east, north]`（度）或 `Rectangle` 坐标值。
    pub fn builder(coordinates: impl Into<Value>) -> EntityBuilder<RectangleGraphics> {
        EntityBuilder::new().set("coordinates", coordinates)
    }
}

impl EntityBuilder<RectangleGraphics> {
    pub fn close_top(self, close: bool) -> Self {
        self.set("closeTop", close)
    }

    pub fn close_bottom(self, close: bool) -> Self {
        self.set("closeBottom", close)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGraphics {
    pub dimensions: Cartesian3,
}

impl Shape for BoxGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "box",
        fields: &["dimensions"],
        required: &["dimensions"],
        accepts: &[
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            dimensions: args.require_cartesian3("dimensions")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![Some(Value::Cartesian3(self.dimensions))]
    }
}

/// 长方体实体。不命名为 `Box` 以免遮蔽 `std::boxed::Box`。
pub type BoxEntity = Entity<BoxGraphics>;

impl BoxEntity {
    pub fn builder(dimensions: impl Into<Value>) -> EntityBuilder<BoxGraphics> {
        EntityBuilder::new().set("dimensions", dimensions)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGraphics {
    pub hierarchy: Cartesian3Array,
    pub per_position_height: Option<bool>,
}

impl Shape for PolygonGraphics {
    const DESCRIPTOR: Descriptor = Descriptor {
        tag: "polygon",
        fields: &["hierarchy", "perPositionHeight"],
        required: &["hierarchy"],
        accepts: &[
            "height",
            "extrudedHeight",
            "show",
            "fill",
            "material",
            "outline",
            "outlineColor",
            "outlineWidth",
            "stRotation",
            "granularity",
            "position",
            "name",
        ],
    };

    fn from_args(args: &mut Args) -> Result<Self, EntityError> {
        Ok(Self {
            hierarchy: args.require_degree_array("hierarchy")?,
            per_position_height: args.take_bool("perPositionHeight")?,
        })
    }

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            Some(Value::Cartesian3Array(self.hierarchy.clone())),
            self.per_position_height.map(Value::Bool),
        ]
    }
}

pub type Polygon = Entity<PolygonGraphics>;

impl Polygon {
    pub fn builder(hierarchy: impl Into<Value>) -> EntityBuilder<PolygonGraphics> {
        EntityBuilder::new().set("hierarchy", hierarchy)
    }
}

impl EntityBuilder<PolygonGraphics> {
    pub fn per_position_height(self, enabled: bool) -> Self {
        self.set("perPositionHeight", enabled)
    }
}
