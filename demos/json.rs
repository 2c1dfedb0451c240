//! Render splines described in a JSON file to an SVG page.
//!
//! See `demos/drawing.json` for the format.

use serde_::Deserialize;

use kurbo::{BezPath, Point};

use cubic2d::{discretize, BSpline, BezierSpline, HermiteSpline};

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Drawing {
    /// Number of samples per shape for the polyline overlay.
    #[serde(default = "default_samples")]
    samples: usize,
    shapes: Vec<Shape>,
}

fn default_samples() -> usize {
    64
}

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_", tag = "kind", content = "data", rename_all = "snake_case")]
enum Shape {
    Bezier(BezierSpline),
    Hermite(HermiteSpline),
    Bspline(BSpline),
}

impl Shape {
    fn to_bez_path(&self) -> BezPath {
        match self {
            Shape::Bezier(s) => s.to_bez_path(),
            Shape::Hermite(s) => BezierSpline::from(s).to_bez_path(),
            Shape::Bspline(s) => s.to_bez_path(),
        }
    }

    fn polyline(&self, samples: usize) -> Result<Vec<Point>, cubic2d::Error> {
        match self {
            Shape::Bezier(s) => discretize::linear(s, samples),
            Shape::Hermite(s) => discretize::linear(s, samples),
            Shape::Bspline(s) => discretize::linear(s, samples),
        }
    }
}

fn main() {
    let path = std::env::args().nth(1).expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let drawing: Drawing = serde_json::from_str(&data).unwrap();
    let mut bp = BezPath::new();
    let mut dots = Vec::new();
    for shape in &drawing.shapes {
        bp.extend(shape.to_bez_path().elements().iter().copied());
        match shape.polyline(drawing.samples) {
            Ok(pts) => dots.extend(pts),
            Err(e) => eprintln!("skipping samples: {}", e),
        }
    }
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        bp.to_svg()
    );
    for pt in &dots {
        println!(
            r#"      <circle cx="{:.2}" cy="{:.2}" r="1.5" fill="red" />"#,
            pt.x, pt.y
        );
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
