//! End-to-end walks of the CubeMaker op through the reference host.

use approx::assert_relative_eq;
use config::constants::NodeParams;
use cubemaker_host::{Scene, SceneWalker};
use cubemaker_op::{
    build_geometry, build_op_args, cook, CookOutput, CubeMakerOp, ErrorReporter, LocationRequest,
    Op, PluginInfo, ThreadMode, Transform,
};
use scene_attr::{Group, GroupBuilder, Value};

fn walk(location: &str, count: i64, max_rotation: Option<f64>) -> Scene {
    let params = NodeParams::new(
        location,
        count,
        max_rotation.is_some(),
        max_rotation.unwrap_or(0.0),
    )
    .unwrap();
    SceneWalker::new(CubeMakerOp)
        .walk(build_op_args(&params).unwrap())
        .unwrap()
}

#[test]
fn test_world_geo_cube_maker_scenario() {
    let scene = walk("/root/world/geo/cubeMaker", 3, Some(90.0));

    let paths: Vec<_> = scene.paths().collect();
    assert_eq!(
        paths,
        [
            "/root",
            "/root/world",
            "/root/world/geo",
            "/root/world/geo/cubeMaker",
            "/root/world/geo/cubeMaker/cube_0",
            "/root/world/geo/cubeMaker/cube_1",
            "/root/world/geo/cubeMaker/cube_2",
        ]
    );
    assert_eq!(scene.get("/root").unwrap().children, ["world"]);
    assert_eq!(scene.get("/root/world").unwrap().children, ["geo"]);
    assert_eq!(scene.get("/root/world/geo").unwrap().children, ["cubeMaker"]);
    assert_eq!(
        scene.get("/root/world/geo/cubeMaker").unwrap().children,
        ["cube_0", "cube_1", "cube_2"]
    );

    let rotations: Vec<f64> = (0..3)
        .map(|i| {
            let path = format!("/root/world/geo/cubeMaker/cube_{i}");
            let xform = scene.get(&path).unwrap().attributes.get_group("xform").unwrap();
            Transform::from_attr(xform).rotate_x.angle
        })
        .collect();
    assert_relative_eq!(rotations[0], 0.0);
    assert_relative_eq!(rotations[1], 30.0);
    assert_relative_eq!(rotations[2], 60.0);

    let cube_1 = &scene.get("/root/world/geo/cubeMaker/cube_1").unwrap().attributes;
    let xform = Transform::from_attr(cube_1.get_group("xform").unwrap());
    assert_relative_eq!(xform.translate.x, 0.75);
    assert_eq!(xform.translate.y, 0.0);
    assert_eq!(xform.translate.z, 0.0);
    assert_relative_eq!(xform.scale.x, 1.0);
    assert_relative_eq!(xform.rotate_x.angle, 30.0);
    assert_eq!(cube_1.read("type", String::new(), true).as_deref(), Some("polymesh"));
    assert_eq!(cube_1.get_group("geometry"), Some(&build_geometry()));
    assert_eq!(scene.error_count(), 0);
}

#[test]
fn test_only_leaves_carry_attributes() {
    let scene = walk("/root/world", 4, None);
    for path in ["/root", "/root/world"] {
        assert!(scene.get(path).unwrap().attributes.is_empty(), "{path}");
    }
    assert_eq!(scene.meshes().count(), 4);
    for (_, location) in scene.meshes() {
        assert!(location.stop_child_traversal);
        assert!(location.children.is_empty());
    }
}

#[test]
fn test_root_stops_traversal_but_intermediates_do_not() {
    let scene = walk("/root/world", 1, None);
    assert!(scene.get("/root").unwrap().stop_child_traversal);
    assert!(!scene.get("/root/world").unwrap().stop_child_traversal);
}

#[test]
fn test_zero_cubes_stops_at_base_location() {
    let scene = walk("/root/world/geo", 0, None);
    assert_eq!(scene.len(), 3);
    assert!(scene.get("/root/world/geo").unwrap().children.is_empty());
}

#[test]
fn test_cubes_at_root() {
    let scene = walk("/root", 2, None);
    assert_eq!(scene.get("/root").unwrap().children, ["cube_0", "cube_1"]);
}

#[test]
fn test_location_names_with_dots_survive_encoding() {
    let scene = walk("/root/geo.v2/set", 1, None);
    assert!(scene.get("/root/geo.v2/set/cube_0").is_some());
}

#[test]
fn test_parallel_walk_matches_sequential() {
    let params = NodeParams::new("/root/world/geo/cubeMaker", 200, true, 360.0).unwrap();
    let args = build_op_args(&params).unwrap();
    let walker = SceneWalker::new(CubeMakerOp);
    let sequential = walker.walk(args.clone()).unwrap();
    let parallel = walker.walk_parallel(args).unwrap();
    assert_eq!(sequential.len(), 204);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_scene_serializes_to_json() {
    let json = walk("/root/world", 1, Some(10.0)).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let cube = &value["locations"]["/root/world/cube_0"];
    assert_eq!(cube["attributes"]["children"]["xform"]["Group"]["inherit"], false);
    assert_eq!(cube["children"], serde_json::json!([]));
}

// =============================================================================
// ERROR CONFINEMENT
// =============================================================================

fn malformed_args() -> Group {
    let mut gb = GroupBuilder::new();
    gb.set("c.left.a.numberOfCubes", Value::int(1));
    gb.set("c.right.a.numberOfCubes", Value::int(1));
    gb.build()
}

#[test]
fn test_malformed_root_reports_one_error() {
    let scene = SceneWalker::new(CubeMakerOp).walk(malformed_args()).unwrap();
    assert_eq!(scene.len(), 1);
    let root = scene.get("/root").unwrap();
    assert!(root.children.is_empty());
    assert!(root.attributes.is_empty());
    assert_eq!(root.errors, ["Unsupported attributes convention."]);
}

/// Creates a malformed branch next to a well-formed one, then defers to the
/// CubeMaker cook everywhere below the root.
struct TwoBranches;

impl Op for TwoBranches {
    fn info(&self) -> PluginInfo {
        PluginInfo { name: "TwoBranches", major: 0, minor: 1 }
    }

    fn setup(&self) -> ThreadMode {
        ThreadMode::Concurrent
    }

    fn cook(&self, request: &LocationRequest, errors: &dyn ErrorReporter) -> CookOutput {
        if !request.at_root {
            return cook(request, errors);
        }
        let mut good = GroupBuilder::new();
        good.set("a.numberOfCubes", Value::int(2));

        let mut output = CookOutput::default();
        output.children.push(cubemaker_op::ChildCreationCommand {
            name: "bad".to_string(),
            args: malformed_args(),
        });
        output.children.push(cubemaker_op::ChildCreationCommand {
            name: "good".to_string(),
            args: good.build(),
        });
        output
    }
}

#[test]
fn test_malformed_branch_does_not_affect_sibling() {
    let scene = SceneWalker::new(TwoBranches).walk_parallel(Group::empty()).unwrap();
    let bad = scene.get("/root/bad").unwrap();
    assert_eq!(bad.errors.len(), 1);
    assert!(bad.children.is_empty());
    assert!(bad.stop_child_traversal);

    let good = scene.get("/root/good").unwrap();
    assert!(good.errors.is_empty());
    assert_eq!(good.children, ["cube_0", "cube_1"]);
    assert_eq!(scene.meshes().count(), 2);
    assert_eq!(scene.error_count(), 1);
}
