//! An in-memory [`Host`] with a tiny row/column layout.
//!
//! Meant for tests, demos and headless experiments: objects are created with an
//! [`ObjectSpec`], laid out eagerly, and every invalidation and event is recorded so it can be
//! inspected or dispatched afterwards.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Area, Axis, Coord, Event, Flow, Host, Length, ObjectSpec, Padding};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimId(pub u32);

impl SimId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A recorded event. `current` differs from `target` when the event bubbled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimEvent {
    pub target: SimId,
    pub current: SimId,
    pub event: Event,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<SimId>,
    children: Vec<SimId>,
    spec: ObjectSpec,
    area: Area,
    bubble: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SimHost {
    nodes: Vec<Node>,
    dirty: Vec<Area>,
    events: VecDeque<SimEvent>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a top-level object of `width` × `height` at the screen origin.
    pub fn create_root(&mut self, width: Coord, height: Coord) -> SimId {
        let spec = ObjectSpec::new(Length::Px(width), Length::Px(height));
        self.push(None, spec)
    }

    pub fn create(&mut self, parent: SimId, spec: ObjectSpec) -> SimId {
        let id = self.push(Some(parent), spec);
        self.nodes[parent.index()].children.push(id);
        self.relayout();
        id
    }

    fn push(&mut self, parent: Option<SimId>, spec: ObjectSpec) -> SimId {
        let id = SimId(self.nodes.len() as u32);
        let area = match parent {
            None => Area::new(
                spec.pos.x,
                spec.pos.y,
                resolve(spec.width, 0),
                resolve(spec.height, 0),
            ),
            Some(_) => Area::ZERO,
        };
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            spec,
            area,
            bubble: false,
        });
        id
    }

    pub fn set_padding(&mut self, id: SimId, padding: Padding) {
        self.nodes[id.index()].spec.padding = padding;
        self.relayout();
    }

    /// Moves an object placed by a [`Flow::None`] parent.
    pub fn set_pos(&mut self, id: SimId, x: Coord, y: Coord) {
        let node = &mut self.nodes[id.index()];
        node.spec.pos.x = x;
        node.spec.pos.y = y;
        if node.parent.is_none() {
            node.area.x = x;
            node.area.y = y;
        }
        self.relayout();
    }

    /// Lets events emitted on `id` propagate to its parent.
    pub fn set_bubble(&mut self, id: SimId, bubble: bool) {
        self.nodes[id.index()].bubble = bubble;
    }

    pub fn children(&self, id: SimId) -> &[SimId] {
        &self.nodes[id.index()].children
    }

    pub fn take_dirty(&mut self) -> Vec<Area> {
        core::mem::take(&mut self.dirty)
    }

    pub fn dirty(&self) -> &[Area] {
        &self.dirty
    }

    pub fn pop_event(&mut self) -> Option<SimEvent> {
        self.events.pop_front()
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain(..).collect()
    }

    /// Events delivered to `obj` (directly or by bubbling), oldest first.
    pub fn events_for(&self, obj: SimId) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.current == obj)
            .map(|e| e.event)
            .collect()
    }

    fn relayout(&mut self) {
        let roots: Vec<SimId> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].parent.is_none())
            .map(|i| SimId(i as u32))
            .collect();
        for root in roots {
            self.layout_children(root);
        }
    }

    fn layout_children(&mut self, id: SimId) {
        let node = &self.nodes[id.index()];
        let pad = node.spec.padding;
        let flow = node.spec.flow;
        let inner = Area::new(0, 0, node.area.width, node.area.height).inset(pad);
        let children = node.children.clone();

        let mut boxes: Vec<Area> = children
            .iter()
            .map(|c| {
                let spec = self.nodes[c.index()].spec;
                Area::new(
                    inner.x + spec.pos.x,
                    inner.y + spec.pos.y,
                    resolve(spec.width, inner.width),
                    resolve(spec.height, inner.height),
                )
            })
            .collect();

        if flow != Flow::None {
            let row = flow == Flow::Row;
            let gap = pad.gap(if row { Axis::X } else { Axis::Y });
            let main = |a: &Area| if row { a.width } else { a.height };
            let used: Coord = boxes.iter().map(main).sum::<Coord>()
                + gap * (boxes.len().saturating_sub(1) as Coord);
            let room = if row { inner.width } else { inner.height };
            let free = (room - used).max(0);
            let total_grow: Coord = children
                .iter()
                .map(|c| self.nodes[c.index()].spec.grow as Coord)
                .sum();

            let mut cursor = if row { inner.x } else { inner.y };
            for (b, c) in boxes.iter_mut().zip(&children) {
                let grow = self.nodes[c.index()].spec.grow as Coord;
                let extra = if total_grow > 0 { free * grow / total_grow } else { 0 };
                if row {
                    b.width += extra;
                    b.x = cursor;
                    b.y = inner.y;
                    cursor += b.width + gap;
                } else {
                    b.height += extra;
                    b.y = cursor;
                    b.x = inner.x;
                    cursor += b.height + gap;
                }
            }
        }

        for (area, child) in boxes.into_iter().zip(children) {
            self.nodes[child.index()].area = area;
            self.layout_children(child);
        }
    }
}

fn resolve(len: Length, parent: Coord) -> Coord {
    match len {
        Length::Px(v) => v,
        Length::Pct(p) => parent * p as Coord / 100,
    }
}

impl Host<SimId> for SimHost {
    fn parent(&self, obj: SimId) -> Option<SimId> {
        self.nodes[obj.index()].parent
    }

    fn for_each_child(&self, obj: SimId, f: &mut dyn FnMut(SimId)) {
        for &child in &self.nodes[obj.index()].children {
            f(child);
        }
    }

    fn area(&self, obj: SimId) -> Area {
        self.nodes[obj.index()].area
    }

    fn padding(&self, obj: SimId) -> Padding {
        self.nodes[obj.index()].spec.padding
    }

    fn invalidate(&mut self, area: Area) {
        self.dirty.push(area);
    }

    fn emit(&mut self, obj: SimId, event: Event) {
        self.events.push_back(SimEvent {
            target: obj,
            current: obj,
            event,
        });
        let mut cur = obj;
        while self.nodes[cur.index()].bubble {
            let Some(parent) = self.nodes[cur.index()].parent else {
                break;
            };
            self.events.push_back(SimEvent {
                target: obj,
                current: parent,
                event,
            });
            cur = parent;
        }
    }
}
