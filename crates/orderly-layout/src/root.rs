//! The traversal driver that owns a view tree.

use orderly_core::{
    find_view, find_view_mut, MeasureSpec, MeasuredSize, Rect, Size, View, Visibility,
};
use serde::{Deserialize, Serialize};

/// One view's frame in window coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// View id, if any
    pub id: Option<String>,
    /// Depth in the tree, 0 for the root
    pub depth: usize,
    /// Visibility at snapshot time
    pub visibility: Visibility,
    /// Frame translated into window coordinates
    pub frame: Rect,
    /// Measured size from the last pass
    pub measured: Size,
}

/// Owns a root view and drives measure and layout passes over it.
#[derive(Debug)]
pub struct ViewRoot {
    root: Box<dyn View>,
    viewport: Size,
    traversals: u64,
}

impl ViewRoot {
    /// Create a driver for `root` inside a window of `viewport` pixels.
    #[must_use]
    pub fn new(root: Box<dyn View>, viewport: Size) -> Self {
        Self {
            root,
            viewport,
            traversals: 0,
        }
    }

    /// Window size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the window. Takes effect on the next traversal.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Number of traversals performed.
    #[must_use]
    pub const fn traversals(&self) -> u64 {
        self.traversals
    }

    /// The root view.
    #[must_use]
    pub fn root(&self) -> &dyn View {
        self.root.as_ref()
    }

    /// Look up a view by id.
    #[must_use]
    pub fn find_view(&self, id: &str) -> Option<&dyn View> {
        find_view(self.root.as_ref(), id)
    }

    /// Look up a view by id for mutation.
    pub fn find_view_mut(&mut self, id: &str) -> Option<&mut dyn View> {
        find_view_mut(self.root.as_mut(), id)
    }

    /// Measure the root to fill the viewport exactly, then lay it out at the
    /// window origin.
    pub fn perform_traversal(&mut self) -> MeasuredSize {
        self.traversals += 1;
        log::debug!(
            "traversal {} viewport={}x{}",
            self.traversals,
            self.viewport.width,
            self.viewport.height
        );

        self.root.measure(
            MeasureSpec::exactly(self.viewport.width),
            MeasureSpec::exactly(self.viewport.height),
        );
        let measured = self.root.measured();
        self.root.layout(Rect::from_size(measured.size()));
        measured
    }

    /// Depth-first snapshot of every view's frame in window coordinates.
    #[must_use]
    pub fn frames(&self) -> Vec<FrameRecord> {
        let mut records = Vec::new();
        collect_frames(self.root.as_ref(), 0, (0, 0), &mut records);
        records
    }
}

fn collect_frames(view: &dyn View, depth: usize, origin: (i32, i32), out: &mut Vec<FrameRecord>) {
    let frame = view.frame().offset(origin.0, origin.1);
    out.push(FrameRecord {
        id: view.id().map(str::to_string),
        depth,
        visibility: view.visibility(),
        frame,
        measured: view.measured().size(),
    });
    for child in (0..view.child_count()).filter_map(|i| view.child_at(i)) {
        collect_frames(child, depth + 1, (frame.left, frame.top), out);
    }
}
