//! Sample a random control polygon three ways and output an SVG.
//!
//! The same points are drawn as a clamped B-spline, as joined Bézier
//! segments read straight off the polygon, and as unit normals along the
//! B-spline.

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use cubic2d::{discretize, BSpline, BezierSpline};

fn polyline_d(pts: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in pts.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.2},{:.2} ", cmd, p.x, p.y));
    }
    d
}

fn main() -> Result<(), cubic2d::Error> {
    let mut rng = rand::thread_rng();
    const N: usize = 10;
    const SAMPLES: usize = 100;
    let coord = Uniform::from(0.0..500.0);
    let pts = (0..N)
        .map(|_| Point::new(coord.sample(&mut rng), coord.sample(&mut rng)))
        .collect::<Vec<_>>();

    let bspline = BSpline::new(pts.clone())?;
    let bezier = BezierSpline::from_bspline_points(&pts)?;
    let curve = discretize::linear(&bspline, SAMPLES)?;
    let polygon = discretize::linear(&bezier, SAMPLES)?;
    let normals = discretize::normals(&curve);
    eprintln!(
        "bezier reading has {} segments, c1: {}",
        bezier.len(),
        bezier.is_c1_continuous()
    );

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />
      <path d="{}" fill="none" stroke="#c00" />"##,
        polyline_d(&curve),
        polyline_d(&polygon)
    );
    for (p, n) in curve.iter().zip(&normals).step_by(5) {
        let q = *p + 10.0 * *n;
        println!(
            r#"      <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="green" />"#,
            p.x, p.y, q.x, q.y
        );
    }
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        );
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
    Ok(())
}
