use cesium_core::color::Color;
use cesium_core::geometry::{Cartesian2, Cartesian3, Cartesian3Array, CoordinateError};
use cesium_entity::{
    BoxEntity, Corridor, Cylinder, Ellipse, Ellipsoid, EntityError, Polygon, Polyline,
    PolylineVolume, Rectangle, Renderable, Wall,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Entity(#[from] EntityError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// 内置示例场景：每种图形各一个实体。
pub fn build_scene() -> Result<Vec<Box<dyn Renderable>>, DemoError> {
    let mut scene: Vec<Box<dyn Renderable>> = Vec::new();

    scene.push(Box::new(
        Ellipse::builder(250000.0, 400000.0)
            .name("Red ellipse on surface with outline")
            .position([-103.0, 40.0])
            .material(Color::RED.with_alpha(0.5))
            .outline(true)
            .outline_color(Color::RED)
            .build()?,
    ));
    scene.push(Box::new(
        Ellipsoid::builder(Cartesian3::new(200000.0, 200000.0, 300000.0))
            .name("Blue ellipsoid")
            .position([-114.0, 40.0, 300000.0])
            .material(Color::BLUE)
            .build()?,
    ));
    scene.push(Box::new(
        Cylinder::builder(400000.0, 200000.0, 200000.0)
            .name("Green cylinder with black outline")
            .position([-100.0, 40.0, 200000.0])
            .material(Color::GREEN.with_alpha(0.5))
            .outline(true)
            .outline_color(Color::BLACK)
            .build()?,
    ));
    scene.push(Box::new(
        Polyline::builder([-75.0, 35.0, -125.0, 35.0])
            .name("Red line on the surface")
            .width(5.0)
            .material(Color::RED)
            .build()?,
    ));
    scene.push(Box::new(
        PolylineVolume::builder(
            [-85.0, 32.0, -85.0, 36.0, -89.0, 36.0],
            vec![
                Cartesian2::new(-50000.0, -50000.0),
                Cartesian2::new(50000.0, -50000.0),
                Cartesian2::new(50000.0, 50000.0),
                Cartesian2::new(-50000.0, 50000.0),
            ],
        )
        .name("Green box with beveled corners and outline")
        .material(Color::GREEN.with_alpha(0.5))
        .outline(true)
        .outline_color(Color::BLACK)
        .build()?,
    ));
    scene.push(Box::new(
        Corridor::builder([-100.0, 40.0, -105.0, 40.0, -105.0, 35.0], 200000.0)
            .name("Red corridor on surface with rounded corners and outline")
            .height(200000.0)
            .extruded_height(100000.0)
            .material(Color::RED.with_alpha(0.5))
            .outline(true)
            .outline_color(Color::RED)
            .build()?,
    ));
    scene.push(Box::new(
        Wall::builder(Cartesian3Array::from_degrees_array_heights(vec![
            -115.0, 44.0, 200000.0, -90.0, 44.0, 200000.0,
        ])?)
        .name("Red wall at height")
        .minimum_heights([100000.0, 100000.0])
        .material(Color::RED)
        .build()?,
    ));
    scene.push(Box::new(
        Rectangle::builder([-110.0, 20.0, -80.0, 25.0])
            .name("Red translucent rectangle with outline")
            .material(Color::RED.with_alpha(0.5))
            .outline(true)
            .outline_color(Color::RED)
            .build()?,
    ));
    scene.push(Box::new(
        BoxEntity::builder([400000.0, 300000.0, 500000.0])
            .name("Blue box")
            .position([-114.0, 40.0, 300000.0])
            .material(Color::BLUE)
            .build()?,
    ));
    scene.push(Box::new(
        Polygon::builder([-115.0, 37.0, -115.0, 32.0, -107.0, 33.0, -102.0, 31.0, -102.0, 35.0])
            .name("Red polygon on surface")
            .material(Color::RED)
            .build()?,
    ));

    debug!(count = scene.len(), "示例场景构建完成");
    Ok(scene)
}

pub fn render_scene(scene: &[Box<dyn Renderable>]) -> Vec<String> {
    scene.iter().map(|entity| entity.render()).collect()
}
