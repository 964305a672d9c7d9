use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use scrollkit::{
    Axis, Coord, Event, Flow, Host, Length, ObjectKey, ObjectSpec, ScrollFlags, ScrollSnap,
    ScrollbarMode, Scroller,
};

use crate::{ButtonCtrl, Selector, TabHost, TabViewConfig};

/// A tab bar over a horizontally paged, center-snapped content container.
///
/// The tab view holds no reference to the scroller: every operation that touches objects
/// takes it as an argument. The host is expected to route events back in:
/// - the content container's [`Event`]s through [`TabView::on_event`]
/// - tab bar value changes through [`TabView::on_selector_changed`]
#[derive(Clone, Debug)]
pub struct TabView<K, S> {
    obj: K,
    content: K,
    selector: S,
    config: TabViewConfig,
    tab_count: usize,
    active: usize,
}

impl<K: ObjectKey, S: Selector<K>> TabView<K, S> {
    /// Builds the tab view as a full-size child of `parent`.
    pub fn create<H>(scroller: &mut Scroller<K, H>, parent: K, config: TabViewConfig) -> Self
    where
        H: TabHost<K, Selector = S>,
    {
        let bar = ObjectSpec::new(Length::Pct(100), Length::Px(config.size));
        let pages = ObjectSpec::new(Length::Pct(100), Length::Px(0))
            .with_grow(1)
            .with_flow(Flow::Row);

        let host = scroller.host_mut();
        let obj = host.create_object(parent, ObjectSpec::fill().with_flow(Flow::Column));
        let (mut selector, content) = if config.position.is_trailing() {
            let content = host.create_object(obj, pages);
            (host.create_selector(obj, bar), content)
        } else {
            let selector = host.create_selector(obj, bar);
            (selector, host.create_object(obj, pages))
        };

        selector.set_one_checked(true);
        selector.set_map(vec![String::new()]);

        scroller.set_scrollbar_mode(content, ScrollbarMode::Off);
        scroller.set_snap_x(content, ScrollSnap::Center);
        scroller.add_flags(content, ScrollFlags::SCROLL_ONE);
        scroller.clear_flags(content, ScrollFlags::ON_FOCUS);

        tdebug!(?obj, ?content, selector = ?selector.object(), ?config, "tab view created");
        Self {
            obj,
            content,
            selector,
            config,
            tab_count: 0,
            active: 0,
        }
    }

    /// Appends a page and its tab button. Returns the page for the caller to fill.
    pub fn add_tab<H>(&mut self, scroller: &mut Scroller<K, H>, name: &str) -> K
    where
        H: TabHost<K, Selector = S>,
    {
        let page = scroller
            .host_mut()
            .create_object(self.content, ObjectSpec::fill());

        let mut map: Vec<String> = self
            .selector
            .map()
            .iter()
            .take(self.tab_count)
            .cloned()
            .collect();
        map.push(String::from(name));
        map.push(String::new());
        self.selector.set_map(map);
        self.selector
            .set_all_controls(ButtonCtrl::CHECKABLE | ButtonCtrl::CLICK_TRIG | ButtonCtrl::NO_REPEAT);

        self.tab_count += 1;
        if self.tab_count == 1 {
            self.set_active(scroller, 0);
        }
        self.selector.set_checked(self.active);

        tdebug!(?page, name, tab_count = self.tab_count, "tab added");
        page
    }

    /// Selects tab `index`, scrolling its page into place. Indexes past the end select the
    /// last tab.
    pub fn set_active<H: Host<K>>(&mut self, scroller: &mut Scroller<K, H>, index: usize) {
        if self.tab_count == 0 {
            return;
        }
        let index = if index >= self.tab_count {
            twarn!(index, tab_count = self.tab_count, "tab index clamped");
            self.tab_count - 1
        } else {
            index
        };

        let host = scroller.host();
        let mut first_page = None;
        host.for_each_child(self.content, &mut |page| {
            first_page.get_or_insert(page);
        });
        let page_width = first_page.map_or(0, |page| host.area(page).width);
        let gap = host.padding(self.content).gap(Axis::X);
        let x = (index as Coord).saturating_mul(page_width + gap);
        scroller.scroll_to_x(self.content, x, true);

        self.selector.set_checked(index);
        self.active = index;
    }

    /// Mirrors a tab bar selection.
    pub fn on_selector_changed<H: Host<K>>(&mut self, scroller: &mut Scroller<K, H>) {
        if let Some(index) = self.selector.active_index() {
            self.set_active(scroller, index);
        }
    }

    /// Handles an event delivered to `obj`. Selects the page nearest to where the content
    /// settles when it reports [`Event::ScrollEnd`]; everything else is ignored.
    pub fn on_event<H: Host<K>>(&mut self, scroller: &mut Scroller<K, H>, obj: K, event: Event) {
        if obj != self.content || event != Event::ScrollEnd {
            return;
        }
        let host = scroller.host();
        let width = host
            .area(self.content)
            .inset(host.padding(self.content))
            .width;
        if width <= 0 {
            twarn!(width, "tab content has no width");
            return;
        }
        let x = scroller.scroll_end(self.content).x;
        let index = (x.saturating_add(width / 2) / width).max(0) as usize;
        tdebug!(x, index, "content settled");
        self.set_active(scroller, index);
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// The tab view's own container.
    pub fn object(&self) -> K {
        self.obj
    }

    /// The paged container holding one child per tab.
    pub fn content(&self) -> K {
        self.content
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    pub fn config(&self) -> TabViewConfig {
        self.config
    }
}
