//! Inflates the bundled demo documents and checks the resulting frames.

use orderly_core::{Rect, Size, Visibility};
use orderly_layout::{FrameRecord, ViewRoot};
use orderly_yaml::{inflate_str, parse_document, NodeKind};

const AREA_DEMO: &str = include_str!("../../../demos/area_ordered.yaml");
const SQUARE_DEMO: &str = include_str!("../../../demos/square_ordered.yaml");

fn frame<'a>(frames: &'a [FrameRecord], id: &str) -> &'a FrameRecord {
    frames
        .iter()
        .find(|f| f.id.as_deref() == Some(id))
        .unwrap_or_else(|| panic!("no frame for {id}"))
}

#[test]
fn test_area_demo_parses() {
    let doc = parse_document(AREA_DEMO).unwrap();
    assert_eq!(doc.root.kind, NodeKind::AreaOrdered);
    assert_eq!(doc.root.children.len(), 4);
    assert_eq!(doc.density, 2.0);
}

#[test]
fn test_area_demo_orders_by_area() {
    let view = inflate_str(AREA_DEMO).unwrap();
    let mut root = ViewRoot::new(view, Size::new(1080, 1920));
    root.perform_traversal();
    let frames = root.frames();

    assert_eq!(frame(&frames, "large").frame, Rect::new(12, 12, 412, 412));
    assert_eq!(frame(&frames, "medium").frame, Rect::new(12, 420, 312, 645));
    assert_eq!(frame(&frames, "small").frame, Rect::new(12, 653, 112, 753));
    assert_eq!(frame(&frames, "hidden").visibility, Visibility::Gone);
}

#[test]
fn test_area_demo_unhide() {
    let view = inflate_str(AREA_DEMO).unwrap();
    let mut root = ViewRoot::new(view, Size::new(1080, 1920));
    root.perform_traversal();

    root.find_view_mut("hidden")
        .unwrap()
        .set_visibility(Visibility::Visible);
    root.perform_traversal();
    let frames = root.frames();

    assert_eq!(frame(&frames, "hidden").frame, Rect::new(8, 649, 258, 899));
    assert_eq!(frame(&frames, "small").frame, Rect::new(12, 903, 112, 1003));
}

#[test]
fn test_square_demo_keeps_order() {
    let view = inflate_str(SQUARE_DEMO).unwrap();
    let mut root = ViewRoot::new(view, Size::new(1080, 1920));
    root.perform_traversal();
    let frames = root.frames();

    assert_eq!(frame(&frames, "short").frame, Rect::new(16, 8, 136, 58));
    assert_eq!(frame(&frames, "tall").frame, Rect::new(16, 62, 96, 212));
    assert_eq!(frame(&frames, "middle").frame, Rect::new(16, 212, 216, 292));

    let nested = frame(&frames, "nested");
    assert_eq!(nested.frame, Rect::new(16, 292, 56, 332));
    assert_eq!(nested.depth, 1);

    let leaves: Vec<Rect> = frames
        .iter()
        .filter(|f| f.depth == 2)
        .map(|f| f.frame)
        .collect();
    assert_eq!(
        leaves,
        vec![Rect::new(16, 322, 26, 332), Rect::new(16, 292, 46, 322)]
    );
}
