use cesium_core::color::Color;
use cesium_core::geometry::{Cartesian2, Cartesian3, Cartesian3Array, CoordinateError};
use cesium_core::property::Value;
use cesium_entity::{
    BoxEntity, COMMON_FIELDS, Corridor, Cylinder, Ellipse, Ellipsoid, EntityError, Polygon,
    Polyline, PolylineVolume, Rectangle, Renderable, Wall,
};

#[test]
fn minimal_ellipse_renders_only_present_keys() {
    let ellipse = Ellipse::builder(1, 2).build().expect("build ellipse");
    assert_eq!(
        ellipse.render(),
        "{ellipse: {semiMinorAxis: 1.0, semiMajorAxis: 2.0}}"
    );
}

#[test]
fn ellipse_with_style_and_position() {
    let ellipse = Ellipse::builder(250000.0, 400000.0)
        .name("Red ellipse on surface with outline")
        .position([-103.0, 40.0])
        .material(Color::RED.with_alpha(0.5))
        .outline(true)
        .outline_color(Color::RED)
        .build()
        .unwrap();
    assert_eq!(
        ellipse.render(),
        "{name: \"Red ellipse on surface with outline\", \
         position: Cesium.Cartesian3.fromDegrees(-103.0, 40.0, 0.0), \
         ellipse: {semiMinorAxis: 250000.0, semiMajorAxis: 400000.0, \
         material: Cesium.Color.RED.withAlpha(0.5), outline: true, \
         outlineColor: Cesium.Color.RED}}"
    );
}

#[test]
fn box_renders_dimensions_as_cartesian3() {
    let entity = BoxEntity::builder([1, 2, 3]).build().unwrap();
    assert_eq!(
        entity.render(),
        "{box: {dimensions: new Cesium.Cartesian3(1.0, 2.0, 3.0)}}"
    );

    let err = BoxEntity::builder([1, 2]).build().unwrap_err();
    assert!(matches!(
        err,
        EntityError::InvalidCoordinate {
            attribute: "dimensions",
            ..
        }
    ));
}

#[test]
fn box_with_position_height_and_outline() {
    let entity = BoxEntity::builder(Cartesian3::new(400000.0, 300000.0, 500000.0))
        .name("Blue box")
        .position([-114.0, 40.0, 300000.0])
        .material(Color::BLUE)
        .build()
        .unwrap();
    assert_eq!(
        entity.render(),
        "{name: \"Blue box\", position: Cesium.Cartesian3.fromDegrees(-114.0, 40.0, 300000.0), \
         box: {dimensions: new Cesium.Cartesian3(400000.0, 300000.0, 500000.0), \
         material: Cesium.Color.BLUE}}"
    );
}

#[test]
fn rectangle_coordinates_render_from_degrees() {
    let rectangle = Rectangle::builder([0, 0, 10, 10]).build().unwrap();
    assert_eq!(
        rectangle.render(),
        "{rectangle: {coordinates: Cesium.Rectangle.fromDegrees(0.0, 0.0, 10.0, 10.0)}}"
    );
}

#[test]
fn rectangle_accepts_rotation_and_closures() {
    let rectangle = Rectangle::builder([-90.0, 20.0, -80.0, 25.0])
        .rotation(0.5)
        .extruded_height(300000.0)
        .height(100000.0)
        .close_top(false)
        .build()
        .unwrap();
    assert_eq!(
        rectangle.render(),
        "{rectangle: {coordinates: Cesium.Rectangle.fromDegrees(-90.0, 20.0, -80.0, 25.0), \
         closeTop: false, height: 100000.0, extrudedHeight: 300000.0, rotation: 0.5}}"
    );
}

#[test]
fn wall_heights_broadcast_and_validate_length() {
    let positions = [-107.0, 43.0, -97.0, 43.0, -97.0, 40.0, -107.0, 40.0];
    let wall = Wall::builder(positions)
        .maximum_heights(5)
        .build()
        .unwrap();
    assert_eq!(
        wall.render(),
        "{wall: {positions: Cesium.Cartesian3.fromDegreesArray([-107.0, 43.0, -97.0, 43.0, \
         -97.0, 40.0, -107.0, 40.0]), maximumHeights: [5.0, 5.0, 5.0, 5.0]}}"
    );

    let err = Wall::builder(positions)
        .maximum_heights([1, 2, 3])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EntityError::LengthMismatch {
            attribute: "maximumHeights",
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn wall_with_height_array_positions() {
    let positions = Cartesian3Array::from_degrees_array_heights(vec![
        -115.0, 44.0, 200000.0, -90.0, 44.0, 200000.0,
    ])
    .unwrap();
    let wall = Wall::builder(positions)
        .minimum_heights([100000.0, 100000.0])
        .material(Color::GREEN)
        .build()
        .unwrap();
    assert_eq!(
        wall.render(),
        "{wall: {positions: Cesium.Cartesian3.fromDegreesArrayHeights([-115.0, 44.0, 200000.0, \
         -90.0, 44.0, 200000.0]), minimumHeights: [100000.0, 100000.0], \
         material: Cesium.Color.GREEN}}"
    );
}

#[test]
fn cylinder_keeps_integer_slices() {
    let cylinder = Cylinder::builder(400000.0, 200000.0, 200000.0)
        .slices(16)
        .position([-100.0, 40.0, 200000.0])
        .build()
        .unwrap();
    assert_eq!(
        cylinder.render(),
        "{position: Cesium.Cartesian3.fromDegrees(-100.0, 40.0, 200000.0), \
         cylinder: {length: 400000.0, topRadius: 200000.0, bottomRadius: 200000.0, slices: 16}}"
    );
    assert!(Cylinder::builder(1, 1, 1).set("slices", 16.5).build().is_err());
    let err = Cylinder::builder(1, 1, 1).slices(-3).build().unwrap_err();
    assert!(matches!(
        err,
        EntityError::InvalidType {
            attribute: "slices",
            expected: "a non-negative integer",
            ..
        }
    ));
}

#[test]
fn ellipsoid_renders_radii() {
    let ellipsoid = Ellipsoid::builder([200000.0, 200000.0, 300000.0])
        .outline(true)
        .build()
        .unwrap();
    assert_eq!(
        ellipsoid.render(),
        "{ellipsoid: {radii: new Cesium.Cartesian3(200000.0, 200000.0, 300000.0), outline: true}}"
    );
}

#[test]
fn polyline_and_polygon_use_degree_arrays() {
    let polyline = Polyline::builder([-75.0, 35.0, -125.0, 35.0])
        .width(5.0)
        .material(Color::RED)
        .build()
        .unwrap();
    assert_eq!(
        polyline.render(),
        "{polyline: {positions: Cesium.Cartesian3.fromDegreesArray([-75.0, 35.0, -125.0, 35.0]), \
         width: 5.0, material: Cesium.Color.RED}}"
    );

    let polygon = Polygon::builder([-115.0, 37.0, -115.0, 32.0, -107.0, 33.0])
        .per_position_height(false)
        .build()
        .unwrap();
    assert_eq!(
        polygon.render(),
        "{polygon: {hierarchy: Cesium.Cartesian3.fromDegreesArray([-115.0, 37.0, -115.0, 32.0, \
         -107.0, 33.0]), perPositionHeight: false}}"
    );
}

#[test]
fn polyline_volume_shape_renders_cartesian2_list() {
    let volume = PolylineVolume::builder(
        [-85.0, 32.0, -85.0, 36.0],
        vec![Cartesian2::new(-5.0, -5.0), Cartesian2::new(5.0, 5.0)],
    )
    .build()
    .unwrap();
    assert_eq!(
        volume.render(),
        "{polylineVolume: {positions: Cesium.Cartesian3.fromDegreesArray([-85.0, 32.0, -85.0, 36.0]), \
         shape: [new Cesium.Cartesian2(-5.0, -5.0), new Cesium.Cartesian2(5.0, 5.0)]}}"
    );
}

#[test]
fn corridor_renders_width_as_common_field() {
    let corridor = Corridor::builder([-100.0, 40.0, -105.0, 40.0, -105.0, 35.0], 200000.0)
        .height(200000.0)
        .build()
        .unwrap();
    assert_eq!(
        corridor.render(),
        "{corridor: {positions: Cesium.Cartesian3.fromDegreesArray([-100.0, 40.0, -105.0, 40.0, \
         -105.0, 35.0]), width: 200000.0, height: 200000.0}}"
    );
}

#[test]
fn outline_accepts_only_booleans() {
    assert!(Ellipse::builder(1, 2).outline(true).build().is_ok());
    assert!(Ellipse::builder(1, 2).outline(false).build().is_ok());
    let err = Ellipse::builder(1, 2).set("outline", "yes").build().unwrap_err();
    assert!(matches!(
        err,
        EntityError::InvalidType {
            attribute: "outline",
            ..
        }
    ));
}

#[test]
fn placeholders_are_not_supported() {
    let err = Polyline::builder([-75.0, 35.0, -125.0, 35.0])
        .set("granularity", 0.01)
        .build()
        .unwrap_err();
    assert_eq!(err, EntityError::NotSupported { attribute: "granularity" });

    let err = Corridor::builder([-100.0, 40.0, -105.0, 40.0], 1.0)
        .set("cornerType", "ROUNDED")
        .build()
        .unwrap_err();
    assert!(err.is_not_supported());
}

#[test]
fn unknown_attribute_is_rejected() {
    let err = BoxEntity::builder([1, 2, 3]).set("radius", 5).build().unwrap_err();
    assert_eq!(
        err,
        EntityError::UnknownAttribute {
            tag: "box",
            attribute: "radius".to_string()
        }
    );
}

#[test]
fn rendering_is_deterministic() {
    let wall = Wall::builder([-107.0, 43.0, -97.0, 43.0])
        .minimum_heights(1)
        .build()
        .unwrap();
    assert_eq!(wall.render(), wall.render());
    assert_eq!(wall.render(), wall.clone().render());
    assert_eq!(wall.to_string(), wall.render());
}

#[test]
fn property_tree_lists_every_key_in_order() {
    let ellipse = Ellipse::builder(1, 2).build().unwrap();
    let tree = ellipse.property_tree();
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["name", "position", "ellipse"]);
    assert!(tree.get("name").is_none());
    assert!(tree.contains_key("position"));

    let Some(Value::Map(graphics)) = tree.get("ellipse") else {
        panic!("ellipse tag should hold a mapping");
    };
    let mut expected = vec!["semiMinorAxis", "semiMajorAxis"];
    expected.extend(COMMON_FIELDS);
    assert_eq!(graphics.keys().collect::<Vec<_>>(), expected);
}

#[test]
fn mixed_scene_renders_through_trait_objects() {
    let scene: Vec<Box<dyn Renderable>> = vec![
        Box::new(Ellipse::builder(1, 2).build().unwrap()),
        Box::new(BoxEntity::builder([1, 2, 3]).build().unwrap()),
        Box::new(Rectangle::builder([0, 0, 10, 10]).build().unwrap()),
    ];
    let tags: Vec<_> = scene.iter().map(|entity| entity.tag()).collect();
    assert_eq!(tags, vec!["ellipse", "box", "rectangle"]);
    assert!(scene.iter().all(|entity| entity.render().starts_with('{')));
}

#[test]
fn degree_array_errors_keep_coordinate_source() {
    let err = Polygon::builder([1.0, 2.0, 3.0]).build().unwrap_err();
    assert_eq!(
        err,
        EntityError::InvalidCoordinate {
            attribute: "hierarchy",
            expected: "a degree array",
            source: CoordinateError::ArrayLength { stride: 2, found: 3 }
        }
    );
}
