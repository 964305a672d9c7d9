use crate::{Area, Coord, Event, ObjectKey, Padding, Point};

/// The collaborators a [`crate::Scroller`] talks to.
///
/// A host owns the object tree and its layout; the scroller only reads geometry from it and
/// reports back through `invalidate` and `emit`. Geometry is always *unscrolled*: `area`
/// returns an object's outer box relative to its parent's outer top-left corner, before the
/// parent's scroll offset is applied (for roots, relative to the screen). The scroller applies
/// offsets itself when it needs screen coordinates.
pub trait Host<K: ObjectKey> {
    fn parent(&self, obj: K) -> Option<K>;

    /// Visits the children of `obj` in layout (scroll) order.
    fn for_each_child(&self, obj: K, f: &mut dyn FnMut(K));

    fn area(&self, obj: K) -> Area;

    fn padding(&self, _obj: K) -> Padding {
        Padding::default()
    }

    /// Bounding box of `obj`'s content in its own unscrolled space.
    ///
    /// The default unions the children's areas. `None` means there is no content, in which
    /// case the padded viewport stands in for it.
    fn content_bounds(&self, obj: K) -> Option<Area> {
        let mut bounds: Option<Area> = None;
        self.for_each_child(obj, &mut |child| {
            let a = self.area(child);
            bounds = Some(match bounds {
                Some(b) => b.union(a),
                None => a,
            });
        });
        bounds
    }

    /// Marks a screen region dirty for redraw.
    fn invalidate(&mut self, area: Area);

    /// Delivers an event for `obj`. Bubbling to ancestors is up to the host.
    ///
    /// Hosts are expected to queue events and dispatch them after the scroller call returns;
    /// handlers are then free to call back into the scroller.
    fn emit(&mut self, obj: K, event: Event);
}

/// A size request understood by hosts that can create objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    Px(Coord),
    /// Percentage of the parent's padded content box.
    Pct(u8),
}

impl Default for Length {
    fn default() -> Self {
        Self::Px(0)
    }
}

/// How a container places its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    /// Children keep their own position.
    #[default]
    None,
    /// One row, left to right, separated by the column gap.
    Row,
    /// One column, top to bottom, separated by the row gap.
    Column,
}

/// Creation parameters for a new object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectSpec {
    /// Position inside a parent whose flow is [`Flow::None`].
    pub pos: Point,
    pub width: Length,
    pub height: Length,
    /// Layout of this object's own children.
    pub flow: Flow,
    /// Share of the free space along the parent's flow.
    pub grow: u8,
    pub padding: Padding,
}

impl ObjectSpec {
    pub fn new(width: Length, height: Length) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// 100% × 100% of the parent.
    pub fn fill() -> Self {
        Self::new(Length::Pct(100), Length::Pct(100))
    }

    pub fn with_pos(mut self, x: Coord, y: Coord) -> Self {
        self.pos = Point::new(x, y);
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn with_grow(mut self, grow: u8) -> Self {
        self.grow = grow;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
