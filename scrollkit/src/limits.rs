use crate::{Area, Axis, Coord, Host, ObjectKey, Padding, Point};

/// How far an object can scroll in each direction from its current offset.
///
/// A positive value is the amount of hidden content on that side. Values go negative while
/// the object is overscrolled, or on the far side when the content is smaller than the
/// viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollLimits {
    pub top: Coord,
    pub bottom: Coord,
    pub left: Coord,
    pub right: Coord,
}

impl ScrollLimits {
    /// Computes limits from an object's size, padding, content box and offset.
    ///
    /// `content` is in the object's unscrolled local space; `None` stands for "no content"
    /// and behaves like content exactly filling the padded viewport.
    pub fn compute(size: Area, padding: Padding, content: Option<Area>, offset: Point) -> Self {
        let content = content
            .unwrap_or_else(|| Area::new(0, 0, size.width, size.height).inset(padding));
        Self {
            top: offset.y,
            bottom: content
                .y2()
                .saturating_add(padding.bottom)
                .saturating_sub(size.height)
                .saturating_sub(offset.y),
            left: offset.x,
            right: content
                .x2()
                .saturating_add(padding.right)
                .saturating_sub(size.width)
                .saturating_sub(offset.x),
        }
    }

    pub fn start(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    pub fn end(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.bottom,
        }
    }

    /// Largest offset reachable on `axis` without overscrolling. Never negative.
    pub fn max(&self, axis: Axis) -> Coord {
        self.start(axis).saturating_add(self.end(axis)).max(0)
    }

    /// Whether there is anything to scroll on `axis`.
    pub fn overflows(&self, axis: Axis) -> bool {
        self.start(axis) > 0 || self.end(axis) > 0
    }

    /// `value` clamped into `[0, max(axis)]`.
    pub fn clamp(&self, axis: Axis, value: Coord) -> Coord {
        value.clamp(0, self.max(axis))
    }
}

pub(crate) fn limits_of<K: ObjectKey, H: Host<K> + ?Sized>(
    host: &H,
    obj: K,
    offset: Point,
) -> ScrollLimits {
    ScrollLimits::compute(
        host.area(obj),
        host.padding(obj),
        host.content_bounds(obj),
        offset,
    )
}
