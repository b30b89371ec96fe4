//! In-memory `Page` for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::page::{Page, Rect};

#[derive(Debug, Default, Clone)]
pub struct FakeNode {
    pub id: Option<String>,
    pub selectors: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Elements live in insertion order, which doubles as document order.
/// Selectors are matched by exact string against what each node registered.
#[derive(Debug)]
pub struct FakePage {
    pub nodes: RefCell<Vec<FakeNode>>,
    pub styles: RefCell<Vec<(String, String)>>,
    pub scroll: Cell<f64>,
    pub viewport: f64,
    pub scrolls_requested: RefCell<Vec<f64>>,
    body: usize,
}

impl FakePage {
    pub fn new() -> Self {
        let page = Self {
            nodes: RefCell::new(Vec::new()),
            styles: RefCell::new(Vec::new()),
            scroll: Cell::new(0.0),
            viewport: 800.0,
            scrolls_requested: RefCell::new(Vec::new()),
            body: 0,
        };
        page.add(&["body"]);
        page
    }

    pub fn add(&self, selectors: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            ..FakeNode::default()
        });
        nodes.len() - 1
    }

    pub fn with_id(&self, node: usize, id: &str) -> usize {
        self.nodes.borrow_mut()[node].id = Some(id.to_string());
        node
    }

    pub fn with_attr(&self, node: usize, name: &str, value: &str) -> usize {
        self.nodes.borrow_mut()[node]
            .attrs
            .insert(name.to_string(), value.to_string());
        node
    }

    pub fn with_layout(&self, node: usize, offset_top: f64, height: f64) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node].offset_top = offset_top;
        nodes[node].height = height;
        node
    }

    pub fn has(&self, node: usize, class: &str) -> bool {
        self.nodes.borrow()[node].classes.contains(class)
    }

    pub fn body_node(&self) -> usize {
        self.body
    }

    pub fn count_id(&self, id: &str) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.id.as_deref() == Some(id))
            .count()
    }

    pub fn set_scroll(&self, y: f64) {
        self.scroll.set(y);
    }
}

impl Page for FakePage {
    type Node = usize;

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls_requested.borrow_mut().push(top);
        self.scroll.set(top);
    }

    fn query(&self, selector: &str) -> Option<usize> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    fn body(&self) -> Option<usize> {
        Some(self.body)
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[*node];
        match name {
            "id" => node.id.clone(),
            _ => node.attrs.get(name).cloned(),
        }
    }

    fn has_marker(&self, node: &usize, marker: &str) -> bool {
        self.has(*node, marker)
    }

    fn set_marker(&self, node: &usize, marker: &str, on: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        if on {
            classes.insert(marker.to_string());
        } else {
            classes.remove(marker);
        }
    }

    fn bounding_rect(&self, node: &usize) -> Rect {
        let nodes = self.nodes.borrow();
        let top = nodes[*node].offset_top - self.scroll.get();
        Rect {
            top,
            bottom: top + nodes[*node].height,
        }
    }

    fn offset_top(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].offset_top
    }

    fn offset_height(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].height
    }

    fn append_to_body(&self, id: &str, text: &str) -> Option<usize> {
        let node = self.add(&[]);
        let mut nodes = self.nodes.borrow_mut();
        nodes[node].id = Some(id.to_string());
        nodes[node].text = text.to_string();
        Some(node)
    }

    fn install_stylesheet(&self, id: &str, css: &str) {
        let mut styles = self.styles.borrow_mut();
        match styles.iter_mut().find(|(existing, _)| existing == id) {
            Some(entry) => entry.1 = css.to_string(),
            None => styles.push((id.to_string(), css.to_string())),
        }
    }
}
