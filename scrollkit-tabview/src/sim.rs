//! A button matrix for the scrollkit in-memory host.

use alloc::string::String;
use alloc::vec::Vec;

use scrollkit::ObjectSpec;
use scrollkit::sim::{SimHost, SimId};

use crate::{ButtonCtrl, Selector, TabHost};

#[derive(Clone, Debug)]
pub struct SimSelector {
    obj: SimId,
    map: Vec<String>,
    ctrl: Vec<ButtonCtrl>,
    one_checked: bool,
    active: Option<usize>,
}

impl SimSelector {
    pub fn new(obj: SimId) -> Self {
        Self {
            obj,
            map: Vec::new(),
            ctrl: Vec::new(),
            one_checked: false,
            active: None,
        }
    }

    /// Number of buttons, not counting the map terminator.
    pub fn button_count(&self) -> usize {
        self.ctrl.len()
    }

    pub fn controls(&self, index: usize) -> ButtonCtrl {
        self.ctrl.get(index).copied().unwrap_or_default()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.controls(index).contains(ButtonCtrl::CHECKED)
    }

    /// Simulates a click on button `index`. Callers then report the value change to the tab
    /// view.
    pub fn click(&mut self, index: usize) {
        if index < self.button_count() {
            self.active = Some(index);
        }
    }
}

impl Selector<SimId> for SimSelector {
    fn object(&self) -> SimId {
        self.obj
    }

    fn set_map(&mut self, map: Vec<String>) {
        let buttons = map.len().saturating_sub(1);
        self.map = map;
        self.ctrl = alloc::vec![ButtonCtrl::empty(); buttons];
        self.active = None;
    }

    fn map(&self) -> &[String] {
        &self.map
    }

    fn set_one_checked(&mut self, one: bool) {
        self.one_checked = one;
    }

    fn set_all_controls(&mut self, ctrl: ButtonCtrl) {
        for c in &mut self.ctrl {
            c.insert(ctrl);
        }
    }

    fn set_checked(&mut self, index: usize) {
        if index >= self.ctrl.len() {
            return;
        }
        if self.one_checked {
            for c in &mut self.ctrl {
                c.remove(ButtonCtrl::CHECKED);
            }
        }
        self.ctrl[index].insert(ButtonCtrl::CHECKED);
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }
}

impl TabHost<SimId> for SimHost {
    type Selector = SimSelector;

    fn create_object(&mut self, parent: SimId, spec: ObjectSpec) -> SimId {
        self.create(parent, spec)
    }

    fn create_selector(&mut self, parent: SimId, spec: ObjectSpec) -> SimSelector {
        SimSelector::new(self.create(parent, spec))
    }
}
