use dabble_engine::coords::{Rect, SurfaceGeometry, Vec2, Viewport};
use dabble_engine::paint::Color;
use dabble_engine::render::{DrawCall, RecordingCanvas};
use dabble_engine::scene::bee::BEE;
use dabble_engine::scene::{Shape, ShapeKind};
use dabble_engine::sketch::{Sketchpad, Style, StyleCommand};

type Pad = Sketchpad<RecordingCanvas, Vec<String>>;

fn pad() -> Pad {
    let mut pad = Sketchpad::new(RecordingCanvas::new(), Some(Vec::new()));
    pad.start();
    pad
}

fn surface() -> SurfaceGeometry {
    SurfaceGeometry::new(Rect::new(0.0, 0.0, 400.0, 400.0), Viewport::new(400.0, 400.0))
}

fn status(pad: &mut Pad) -> Vec<String> {
    pad.status_mut().cloned().unwrap_or_default()
}

// ── end to end ────────────────────────────────────────────────────────────

#[test]
fn single_point_at_the_center() {
    let mut pad = pad();
    pad.pointer_down(Vec2::new(200.0, 200.0), surface()).unwrap();

    assert_eq!(pad.shapes().len(), 1);
    let Shape::Point(p) = &pad.shapes().shapes()[0] else {
        panic!("expected a point");
    };
    assert_eq!(p.position, Vec2::zero());
    assert_eq!(p.color, Color::WHITE);
    assert_eq!(p.size, 5.0);

    assert_eq!(
        pad.canvas().calls(),
        [
            DrawCall::Clear(Color::BLACK),
            DrawCall::Point { center: Vec2::zero(), diameter: 5.0, color: Color::WHITE },
        ]
    );

    let lines = status(&mut pad);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("shapes: 1 ms: "), "unexpected status {:?}", lines[1]);
}

#[test]
fn red_point_reaches_the_canvas_in_red() {
    let mut pad = pad();
    pad.apply(StyleCommand::SetRgb(Style::RED));
    pad.pointer_down(Vec2::new(200.0, 200.0), surface()).unwrap();

    let points: Vec<_> = pad.canvas().point_calls().collect();
    assert_eq!(
        points,
        [&DrawCall::Point {
            center: Vec2::zero(),
            diameter: 5.0,
            color: Color::rgba(1.0, 0.0, 0.0, 1.0),
        }]
    );
    assert_eq!(pad.canvas().calls()[0], DrawCall::Clear(Color::BLACK));
}

#[test]
fn circle_renders_as_one_batched_fan() {
    let mut pad = pad();
    pad.apply(StyleCommand::SelectKind(ShapeKind::Circle));
    pad.apply(StyleCommand::AdjustSegments(2));
    pad.pointer_down(Vec2::new(100.0, 300.0), surface()).unwrap();

    let tris: Vec<_> = pad.canvas().triangle_calls().collect();
    assert_eq!(tris.len(), 1);
    let DrawCall::Triangles { vertices, .. } = tris[0] else { unreachable!() };
    assert_eq!(vertices.len(), 3 * 10);
    assert!(vertices.chunks(3).all(|slice| slice[0] == Vec2::new(-0.5, -0.5)));
}

// ── bee ───────────────────────────────────────────────────────────────────

#[test]
fn bee_appends_eight_triangles_with_one_pass() {
    let mut pad = pad();
    let before = pad.passes();
    pad.stamp_bee();

    assert_eq!(pad.passes(), before + 1);
    assert_eq!(pad.shapes().len(), BEE.len());
    assert!(pad.shapes().iter().all(|s| s.kind() == ShapeKind::Triangle));

    let colors: Vec<Color> = pad
        .canvas()
        .triangle_calls()
        .map(|c| match c {
            DrawCall::Triangles { color, .. } => *color,
            _ => unreachable!(),
        })
        .collect();
    let expected: Vec<Color> = BEE.iter().map(|f| f.color).collect();
    assert_eq!(colors, expected);
}

#[test]
fn bee_layers_over_existing_shapes() {
    let mut pad = pad();
    pad.place(Vec2::new(0.9, 0.9)).unwrap();
    pad.stamp_bee();

    let calls = pad.canvas().calls();
    assert!(matches!(calls[1], DrawCall::Point { .. }));
    assert_eq!(calls.len(), 2 + BEE.len());
}

// ── clear ─────────────────────────────────────────────────────────────────

#[test]
fn clear_leaves_only_the_background() {
    let mut pad = pad();
    pad.place(Vec2::zero()).unwrap();
    pad.stamp_bee();
    pad.clear();

    assert!(pad.shapes().is_empty());
    assert_eq!(pad.canvas().calls(), [DrawCall::Clear(Color::BLACK)]);

    pad.clear();
    assert_eq!(pad.canvas().calls(), [DrawCall::Clear(Color::BLACK)]);
    let last = status(&mut pad).pop().unwrap_or_default();
    assert!(last.starts_with("shapes: 0 "), "unexpected status {last:?}");
}

// ── display list ──────────────────────────────────────────────────────────

#[test]
fn every_placement_grows_the_list_by_one() {
    let mut pad = pad();
    let kinds = [ShapeKind::Point, ShapeKind::Triangle, ShapeKind::Circle, ShapeKind::Point];
    for (i, kind) in kinds.into_iter().enumerate() {
        pad.apply(StyleCommand::SelectKind(kind));
        pad.place(Vec2::new(i as f32 * 0.1, 0.0)).unwrap();
        assert_eq!(pad.shapes().len(), i + 1);
        assert_eq!(pad.shapes().shapes()[i].kind(), kind);
    }

    let seen: Vec<ShapeKind> = pad.shapes().iter().map(Shape::kind).collect();
    assert_eq!(seen, kinds);
}

#[test]
fn later_style_changes_do_not_touch_placed_shapes() {
    let mut pad = pad();
    pad.place(Vec2::zero()).unwrap();
    pad.apply(StyleCommand::SetRgb([1.0, 0.0, 0.0]));
    pad.apply(StyleCommand::AdjustSize(20.0));

    let first = &pad.shapes().shapes()[0];
    assert_eq!(first.color(), Color::WHITE);
}

// ── rejection ─────────────────────────────────────────────────────────────

#[test]
fn non_finite_input_is_rejected_without_a_pass() {
    let mut pad = pad();
    let passes = pad.passes();

    assert!(pad.place(Vec2::new(f32::NAN, 0.0)).is_err());
    assert!(pad.place(Vec2::new(0.0, f32::INFINITY)).is_err());
    // Off-surface by definition; dropped before mapping.
    pad.pointer_down(Vec2::new(f32::INFINITY, 5.0), surface()).unwrap();

    assert!(pad.shapes().is_empty());
    assert_eq!(pad.passes(), passes);
}

#[test]
fn press_outside_the_surface_is_ignored() {
    let mut pad = pad();
    let passes = pad.passes();
    pad.pointer_down(Vec2::new(200.0, 400.0), surface()).unwrap();
    pad.pointer_down(Vec2::new(-0.5, 200.0), surface()).unwrap();
    assert!(pad.shapes().is_empty());
    assert_eq!(pad.passes(), passes);
}

#[test]
fn drag_outside_the_surface_is_ignored() {
    let mut pad = pad();
    pad.pointer_drag(Vec2::new(-5.0, 10.0), surface()).unwrap();
    pad.pointer_drag(Vec2::new(400.0, 10.0), surface()).unwrap();
    assert!(pad.shapes().is_empty());

    pad.pointer_drag(Vec2::new(399.0, 10.0), surface()).unwrap();
    assert_eq!(pad.shapes().len(), 1);
}

#[test]
fn offset_surface_maps_relative_to_its_bounds() {
    let mut pad = pad();
    let s = SurfaceGeometry::new(Rect::new(50.0, 30.0, 200.0, 100.0), Viewport::new(200.0, 100.0));
    pad.pointer_down(Vec2::new(50.0, 30.0), s).unwrap();
    assert_eq!(pad.shapes().shapes()[0].position(), Vec2::new(-1.0, 1.0));
}

// ── status ────────────────────────────────────────────────────────────────

#[test]
fn missing_sink_does_not_block_rendering() {
    let mut pad: Pad = Sketchpad::new(RecordingCanvas::new(), None);
    pad.start();
    pad.place(Vec2::zero()).unwrap();
    assert_eq!(pad.passes(), 2);
    assert_eq!(pad.canvas().calls().len(), 2);
}
