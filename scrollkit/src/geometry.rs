/// Signed pixel coordinate.
pub type Coord = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn get(self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: Coord) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

/// An axis-aligned box: origin plus size. `x2`/`y2` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl Area {
    pub const ZERO: Area = Area {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x2(&self) -> Coord {
        self.x.saturating_add(self.width)
    }

    pub fn y2(&self) -> Coord {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn start(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn end(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.x2(),
            Axis::Y => self.y2(),
        }
    }

    pub fn size(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    pub fn translate(self, dx: Coord, dy: Coord) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Smallest area covering both `self` and `other`.
    pub fn union(self, other: Area) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let x2 = self.x2().max(other.x2());
        let y2 = self.y2().max(other.y2());
        Self::new(x, y, x2 - x, y2 - y)
    }

    pub fn contains(&self, other: &Area) -> bool {
        other.x >= self.x && other.y >= self.y && other.x2() <= self.x2() && other.y2() <= self.y2()
    }

    /// Shrinks the area by `padding` on every side (gaps are ignored).
    pub fn inset(self, padding: Padding) -> Self {
        Self::new(
            self.x + padding.left,
            self.y + padding.top,
            (self.width - padding.left - padding.right).max(0),
            (self.height - padding.top - padding.bottom).max(0),
        )
    }
}

/// Inner padding of a container plus the gaps its layout leaves between children.
///
/// `row` is the vertical gap between rows, `column` the horizontal gap between columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: Coord,
    pub bottom: Coord,
    pub left: Coord,
    pub right: Coord,
    pub row: Coord,
    pub column: Coord,
}

impl Padding {
    pub const fn all(v: Coord) -> Self {
        Self {
            top: v,
            bottom: v,
            left: v,
            right: v,
            row: v,
            column: v,
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

    /// Gap between consecutive children laid out along `axis`.
    pub fn gap(&self, axis: Axis) -> Coord {
        match axis {
            Axis::X => self.column,
            Axis::Y => self.row,
        }
    }
}
