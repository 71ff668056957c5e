//! The bee: a fixed illustration stamped from flat triangles.
//!
//! Layer order matters. Opaque body parts go first; the translucent wing goes
//! last so it blends over the body and stripes already on the surface.

use crate::coords::Vec2;
use crate::paint::Color;

use super::DisplayList;

/// One facet of the illustration: absolute NDC vertices and a fill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Facet {
    pub name: &'static str,
    pub vertices: [Vec2; 3],
    pub color: Color,
}

const fn facet(name: &'static str, v: [f32; 6], color: Color) -> Facet {
    Facet {
        name,
        vertices: [Vec2::new(v[0], v[1]), Vec2::new(v[2], v[3]), Vec2::new(v[4], v[5])],
        color,
    }
}

const WING: Color = Color::rgba(1.0, 1.0, 1.0, 0.7);

/// Facets in paint order.
pub const BEE: [Facet; 8] = [
    // Body: two halves of the rectangle [-0.5, 0.5] x [-0.4, 0.4].
    facet("body", [-0.5, -0.4, 0.5, -0.4, -0.5, 0.4], Color::YELLOW),
    facet("body", [0.5, -0.4, 0.5, 0.4, -0.5, 0.4], Color::YELLOW),
    facet("stinger", [0.5, -0.2, 0.8, 0.0, 0.5, 0.2], Color::WHITE),
    // Eye: a small square at the front of the body.
    facet("eye", [-0.5, 0.0, -0.35, 0.0, -0.5, 0.25], Color::BLACK),
    facet("eye", [-0.35, 0.0, -0.35, 0.25, -0.5, 0.25], Color::BLACK),
    facet("stripe", [0.3, -0.4, 0.35, 0.4, 0.25, 0.4], Color::BLACK),
    facet("stripe", [0.1, -0.4, 0.15, 0.4, 0.05, 0.4], Color::BLACK),
    facet("wing", [0.0, 0.6, 0.25, 0.3, -0.25, 0.3], WING),
];

/// Appends the bee's triangles to `list` in paint order.
pub fn push_bee(list: &mut DisplayList) {
    for f in &BEE {
        list.push_custom_triangle(f.vertices, f.color);
    }
    log::debug!("stamped bee ({} facets)", BEE.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn appends_eight_custom_triangles_in_order() {
        let mut list = DisplayList::new();
        push_bee(&mut list);

        assert_eq!(list.len(), 8);
        for (shape, f) in list.iter().zip(BEE.iter()) {
            let Shape::Triangle(t) = shape else { panic!("expected triangle, got {shape:?}") };
            assert_eq!(t.custom, Some(f.vertices));
            assert_eq!(t.color, f.color);
        }
    }

    #[test]
    fn stinger_and_wing_keep_their_literal_data() {
        let mut list = DisplayList::new();
        push_bee(&mut list);

        let Shape::Triangle(stinger) = &list.shapes()[2] else { panic!("stinger is not a triangle") };
        assert_eq!(
            stinger.custom,
            Some([Vec2::new(0.5, -0.2), Vec2::new(0.8, 0.0), Vec2::new(0.5, 0.2)])
        );
        assert_eq!(stinger.color, Color::rgba(1.0, 1.0, 1.0, 1.0));

        let Shape::Triangle(wing) = &list.shapes()[7] else { panic!("wing is not a triangle") };
        assert_eq!(
            wing.custom,
            Some([Vec2::new(0.0, 0.6), Vec2::new(0.25, 0.3), Vec2::new(-0.25, 0.3)])
        );
        assert_eq!(wing.color, Color::rgba(1.0, 1.0, 1.0, 0.7));
    }

    #[test]
    fn body_covers_the_rectangle_in_yellow() {
        let mut list = DisplayList::new();
        push_bee(&mut list);

        let Shape::Triangle(first) = &list.shapes()[0] else { panic!("body is not a triangle") };
        assert_eq!(
            first.custom,
            Some([Vec2::new(-0.5, -0.4), Vec2::new(0.5, -0.4), Vec2::new(-0.5, 0.4)])
        );
        assert_eq!(first.color, Color::rgba(1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn layers_are_body_stinger_eye_stripes_wing() {
        let names: Vec<_> = BEE.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["body", "body", "stinger", "eye", "eye", "stripe", "stripe", "wing"]
        );
    }

    #[test]
    fn only_the_wing_is_translucent() {
        let translucent: Vec<_> = BEE.iter().filter(|f| f.color.a < 1.0).map(|f| f.name).collect();
        assert_eq!(translucent, ["wing"]);
        assert_eq!(BEE[7].color.a, 0.7);
    }

    #[test]
    fn appends_after_existing_shapes() {
        let mut list = DisplayList::new();
        list.push_point(Vec2::zero(), Color::RED, 5.0);
        push_bee(&mut list);
        assert_eq!(list.len(), 9);
        assert_eq!(list.shapes()[1].color(), Color::YELLOW);
    }
}
