//! A container view parameterised by its placement policy.

use crate::params::ContainerParams;
use crate::stack::{LayoutChild, Placement};
use orderly_core::{
    AttributeError, AttributeSet, Dimension, Insets, LayoutParams, MeasureSpec, MeasuredSize,
    Rect, Size, View, Visibility,
};
use std::fmt;
use std::marker::PhantomData;

/// A measure-and-place policy for a [`ViewGroup`].
///
/// Both passes are pure functions of the children and the inputs handed in
/// by the driver, so they can be exercised without a view tree.
pub trait OrderedLayout: fmt::Debug + 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Measure the children and resolve the container's own size.
    ///
    /// `min_size` is the container's suggested minimum.
    fn compute_size<C: LayoutChild>(
        children: &mut [C],
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        padding: Insets,
        min_size: Size,
    ) -> MeasuredSize;

    /// Assign frames to already-measured children.
    ///
    /// `bounds` is the container's own frame in its parent's coordinate space.
    /// Returned frames are in the container's coordinate space, in placement
    /// order.
    fn compute_layout<C: LayoutChild>(
        children: &[C],
        bounds: Rect,
        padding: Insets,
    ) -> Vec<Placement>;
}

/// A child view with the parameters its container accepted.
#[derive(Debug)]
pub struct Child<P> {
    view: Box<dyn View>,
    params: ContainerParams<P>,
}

impl<P> Child<P> {
    /// The child view.
    #[must_use]
    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    /// The child's layout parameters.
    #[must_use]
    pub const fn params(&self) -> &ContainerParams<P> {
        &self.params
    }
}

impl<P> LayoutChild for Child<P> {
    fn visibility(&self) -> Visibility {
        self.view.visibility()
    }

    fn margins(&self) -> Insets {
        self.params.margins
    }

    fn requested(&self) -> (Dimension, Dimension) {
        (self.params.width, self.params.height)
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> MeasuredSize {
        self.view.measure(width_spec, height_spec);
        self.view.measured()
    }

    fn measured(&self) -> MeasuredSize {
        self.view.measured()
    }
}

/// A container view that owns its children and delegates both passes to `P`.
#[derive(Debug)]
pub struct ViewGroup<P: OrderedLayout> {
    id: Option<String>,
    children: Vec<Child<P>>,
    padding: Insets,
    min_size: Size,
    visibility: Visibility,
    measured: MeasuredSize,
    frame: Rect,
    _policy: PhantomData<P>,
}

impl<P: OrderedLayout> Default for ViewGroup<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OrderedLayout> ViewGroup<P> {
    /// Create an empty, visible container with no padding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id: None,
            children: Vec::new(),
            padding: Insets::ZERO,
            min_size: Size::ZERO,
            visibility: Visibility::Visible,
            measured: MeasuredSize::unclipped(Size::ZERO),
            frame: Rect::new(0, 0, 0, 0),
            _policy: PhantomData,
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the suggested minimum size.
    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a child, builder style.
    #[must_use]
    pub fn with_child(mut self, view: impl View + 'static, params: &dyn LayoutParams) -> Self {
        self.add_view(Box::new(view), params);
        self
    }

    /// Container padding.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Change the padding. Takes effect on the next pass.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Suggested minimum size.
    #[must_use]
    pub const fn min_size(&self) -> Size {
        self.min_size
    }

    /// Attached children in attachment order.
    #[must_use]
    pub fn children(&self) -> &[Child<P>] {
        &self.children
    }

    /// Whether `params` is this container's own parameter type.
    #[must_use]
    pub fn check_layout_params(&self, params: &dyn LayoutParams) -> bool {
        params.as_any().is::<ContainerParams<P>>()
    }

    /// Parameters used when a child is attached without any.
    #[must_use]
    pub const fn generate_default_layout_params(&self) -> ContainerParams<P> {
        ContainerParams::fill()
    }

    /// Parameters from inflation attributes.
    pub fn generate_layout_params(
        &self,
        attrs: &AttributeSet,
    ) -> Result<ContainerParams<P>, AttributeError> {
        ContainerParams::from_attributes(attrs)
    }

    /// Parameters copied from another parameter object.
    #[must_use]
    pub fn generate_layout_params_from(&self, source: &dyn LayoutParams) -> ContainerParams<P> {
        ContainerParams::from_params(source)
    }

    fn accept_params(&self, params: &dyn LayoutParams) -> ContainerParams<P> {
        match params.as_any().downcast_ref::<ContainerParams<P>>() {
            Some(own) => *own,
            None => {
                log::debug!(
                    "{} rejected {params:?}, regenerating layout params",
                    P::NAME
                );
                self.generate_layout_params_from(params)
            }
        }
    }

    /// Attach a child at the end.
    ///
    /// Parameters that fail [`ViewGroup::check_layout_params`] are replaced by
    /// [`ViewGroup::generate_layout_params_from`].
    pub fn add_view(&mut self, view: Box<dyn View>, params: &dyn LayoutParams) {
        let params = self.accept_params(params);
        self.children.push(Child { view, params });
    }

    /// Attach a child with the default parameters.
    pub fn add_view_default(&mut self, view: Box<dyn View>) {
        let params = self.generate_default_layout_params();
        self.children.push(Child { view, params });
    }

    /// Replace a child's parameters. Returns false if `index` is out of range.
    pub fn set_layout_params(&mut self, index: usize, params: &dyn LayoutParams) -> bool {
        let params = self.accept_params(params);
        match self.children.get_mut(index) {
            Some(child) => {
                child.params = params;
                true
            }
            None => false,
        }
    }

    /// Parameters of the child at `index`.
    #[must_use]
    pub fn layout_params(&self, index: usize) -> Option<&ContainerParams<P>> {
        self.children.get(index).map(Child::params)
    }

    /// Detach and return the child at `index`.
    pub fn remove_view_at(&mut self, index: usize) -> Option<Box<dyn View>> {
        (index < self.children.len()).then(|| self.children.remove(index).view)
    }
}

impl<P: OrderedLayout> View for ViewGroup<P> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        log::debug!(
            "{} measure width_spec={width_spec} height_spec={height_spec}",
            P::NAME
        );
        self.measured = P::compute_size(
            &mut self.children,
            width_spec,
            height_spec,
            self.padding,
            self.min_size,
        );
    }

    fn measured(&self) -> MeasuredSize {
        self.measured
    }

    fn layout(&mut self, frame: Rect) {
        log::debug!(
            "{} layout left={} top={} right={} bottom={}",
            P::NAME,
            frame.left,
            frame.top,
            frame.right,
            frame.bottom
        );
        self.frame = frame;

        for Placement { index, frame } in P::compute_layout(&self.children, frame, self.padding) {
            log::debug!(
                "{} child {index} layout left={} top={} right={} bottom={}",
                P::NAME,
                frame.left,
                frame.top,
                frame.right,
                frame.bottom
            );
            if let Some(child) = self.children.get_mut(index) {
                child.view.layout(frame);
            }
        }
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn View> {
        self.children.get(index).map(Child::view)
    }

    fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn View> {
        self.children
            .get_mut(index)
            .map(|child| child.view.as_mut() as &mut dyn View)
    }
}
