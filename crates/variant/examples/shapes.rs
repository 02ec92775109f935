//! Sums the areas of a mixed list of shapes, once through the common
//! supertype and once through case analysis.

use variant::prelude::*;
use variant::{impl_widen, Variant3, VariantWithCommon3, WithCommon};

trait Shape {
    fn area(&self) -> f64;
}

struct Circle(f64);
struct Rect(f64, f64);
struct Point;

impl Shape for Circle {
    fn area(&self) -> f64 { std::f64::consts::PI * self.0 * self.0 }
}

impl Shape for Rect {
    fn area(&self) -> f64 { self.0 * self.1 }
}

impl Shape for Point {
    fn area(&self) -> f64 { 0.0 }
}

impl_widen!(dyn Shape: Circle, Rect, Point);

type AnyShape = VariantWithCommon3<dyn Shape, Circle, Rect, Point>;

fn main() -> anyhow::Result<()> {
    let shapes: Vec<AnyShape> = vec![
        WithCommon::new(Variant3::First(Circle(1.0))),
        WithCommon::new(Variant3::Second(Rect(2.0, 3.0))),
        WithCommon::new(Variant3::Third(Point)),
    ];

    let widened: f64 = shapes.iter().map(|s| s.common().area()).sum();
    println!("total area: {widened:.3}");

    for shape in &shapes {
        let name = shape
            .variant()
            .as_ref()
            .cases()
            .first(|_| "circle")
            .second(|_| "rect")
            .third(|_| "point")
            .exhaustive()?;
        let corners = shape.variant().as_ref().cases().second(|_| 4).otherwise(|| 0);
        println!("{name}: {corners} corners");
    }
    Ok(())
}
