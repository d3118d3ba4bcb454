pub mod args;
pub mod base;
pub mod shapes;

pub use base::{
    COMMON_FIELDS, CommonAttributes, Descriptor, Entity, EntityBuilder, Renderable, Shape,
};
pub use errors::EntityError;
pub use shapes::{
    BoxEntity, BoxGraphics, Corridor, CorridorGraphics, Cylinder, CylinderGraphics, Ellipse,
    EllipseGraphics, Ellipsoid, EllipsoidGraphics, Polygon, PolygonGraphics, Polyline,
    PolylineGraphics, PolylineVolume, PolylineVolumeGraphics, Rectangle, RectangleGraphics, Wall,
    WallGraphics,
};

pub mod errors {
    use cesium_core::color::ColorError;
    use cesium_core::geometry::CoordinateError;
    use thiserror::Error;

    /// 构造期校验错误。任一属性非法都会中止构造，不存在半初始化的实体。
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum EntityError {
        #[error("{tag} does not accept attribute `{attribute}`")]
        UnknownAttribute {
            tag: &'static str,
            attribute: String,
        },
        #[error("{tag} requires attribute `{attribute}`")]
        MissingAttribute {
            tag: &'static str,
            attribute: &'static str,
        },
        #[error("{attribute} must be {expected}: {found}")]
        InvalidType {
            attribute: &'static str,
            expected: &'static str,
            found: String,
        },
        #[error("{attribute} must be {expected} or its compat: {source}")]
        InvalidCoordinate {
            attribute: &'static str,
            expected: &'static str,
            #[source]
            source: CoordinateError,
        },
        #[error("{attribute} must be a valid Color: {source}")]
        InvalidColor {
            attribute: &'static str,
            #[source]
            source: ColorError,
        },
        #[error("{attribute} must have one entry per position ({expected}): {found}")]
        LengthMismatch {
            attribute: &'static str,
            expected: usize,
            found: usize,
        },
        #[error("{attribute} is not supported yet")]
        NotSupported { attribute: &'static str },
    }

    impl EntityError {
        /// 区分“尚未支持”的占位参数与普通校验失败。
        #[inline]
        pub fn is_not_supported(&self) -> bool {
            matches!(self, EntityError::NotSupported { .. })
        }
    }
}
