//! Loads a tiny inline document and prints a transformed point. Not part of
//! the public API surface; exists to document the intended call pattern.

use map_transformer::{MapTransformer, Point};

const DOCUMENT: &str = r#"
ref_map:
  name: architect-plan
  size: [100, 100]
  correspondence_points: [[0, 0], [100, 0], [0, 100]]
robot_map:
  name: slam-map
  size: [80, 110]
  correspondence_points: [[0, 0], [100, 0], [0, 100]]
  transform:
    translation: [30, 20]
"#;

fn main() {
    env_logger::init();

    let mut transformer = MapTransformer::new();
    transformer
        .load(DOCUMENT)
        .expect("demo document is valid");

    let robot_point = Point::new(23.0, 66.0);
    let ref_point = transformer
        .to_ref(robot_point)
        .expect("instance is loaded");

    println!("robot {robot_point:?} -> ref {ref_point:?}");
}
