//! In-memory document the page helpers operate on.
//!
//! The node tree is a `scraper::Html`, so parsing and CSS selector matching
//! are html5ever's and `selectors`' own. Live state a browser keeps outside
//! the markup (computed style, form values, layout boxes, focus) sits next
//! to the tree, keyed by node.
//!
//! `remove` only detaches: the id stays valid and `is_connected` turns
//! false. `discard` also hands the subtree's slots back for reuse. Ids carry
//! a generation, so an id held across a `discard` stops resolving instead of
//! aliasing whatever node later takes the slot.

use std::collections::{BTreeMap, HashMap};

use ego_tree::NodeRef;
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{CaseSensitivity, ElementRef, Html, Node, Selector};
use ui_logging::ui_warn;

use crate::error::DomError;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

type Slot = ego_tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    slot: Slot,
    generation: u32,
}

/// Layout box in viewport coordinates. Layout is external to the document,
/// so hosts (and tests) set it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default)]
struct LiveState {
    style: BTreeMap<String, String>,
    value: Option<String>,
    rect: Rect,
}

#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
    generations: HashMap<Slot, u32>,
    recyclable: Vec<Slot>,
    live: HashMap<Slot, LiveState>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    active: Option<NodeId>,
    scrolled_to: Option<NodeId>,
}

/// Parses a CSS selector group.
pub fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector).map_err(|err| DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: err.to_string(),
    })
}

impl Document {
    /// An empty `<html><head></head><body></body></html>` document.
    pub fn new() -> Self {
        Self::parse_html("")
    }

    pub(crate) fn from_tree(html: Html) -> Self {
        let root_element = html.root_element();
        let child_with_tag = |tag: &str| {
            root_element
                .children()
                .find(|child| child.value().as_element().is_some_and(|el| el.name() == tag))
                .map(|child| child.id())
                .unwrap_or_else(|| root_element.id())
        };
        let root = root_element.id();
        let head = child_with_tag("head");
        let body = child_with_tag("body");
        let fresh = |slot| NodeId { slot, generation: 0 };
        Self {
            root: fresh(root),
            head: fresh(head),
            body: fresh(body),
            html,
            generations: HashMap::new(),
            recyclable: Vec::new(),
            live: HashMap::new(),
            active: None,
            scrolled_to: None,
        }
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from(tag.to_ascii_lowercase()),
        );
        self.allocate(Node::Element(Element::new(name, Vec::new())))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.allocate(Node::Text(Text { text: text.into() }))
    }

    /// Places `value` in a recycled slot when one is free.
    fn allocate(&mut self, value: Node) -> NodeId {
        let slot = match self.recyclable.pop() {
            Some(slot) => {
                if let Some(mut node) = self.html.tree.get_mut(slot) {
                    node.detach();
                    while let Some(mut child) = node.first_child() {
                        child.detach();
                    }
                    *node.value() = value;
                }
                slot
            }
            None => self.html.tree.orphan(value).id(),
        };
        self.live.remove(&slot);
        self.handle(slot)
    }

    /// Node slots held by the document, live or waiting for reuse.
    pub fn allocated_nodes(&self) -> usize {
        self.html.tree.nodes().count()
    }

    fn handle(&self, slot: Slot) -> NodeId {
        NodeId {
            slot,
            generation: self.generations.get(&slot).copied().unwrap_or(0),
        }
    }

    fn slot(&self, id: NodeId) -> Option<Slot> {
        (self.handle(id.slot) == id).then_some(id.slot)
    }

    fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(self.slot(id)?)
    }

    fn element_ref(&self, id: NodeId) -> Option<ElementRef<'_>> {
        ElementRef::wrap(self.node(id)?)
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id)?.value().as_element()
    }

    fn live(&self, id: NodeId) -> Option<&LiveState> {
        self.live.get(&self.slot(id)?)
    }

    fn live_mut(&mut self, id: NodeId) -> Option<&mut LiveState> {
        self.element(id)?;
        let slot = self.slot(id)?;
        Some(self.live.entry(slot).or_default())
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Moves `child` (detaching it from any previous parent) to the end of
    /// `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let child_slot = self.slot(child).ok_or(DomError::UnknownNode(child))?;
        let parent_slot = self.slot(parent).ok_or(DomError::UnknownNode(parent))?;
        if !self.is_element(parent) {
            return Err(DomError::NotAnElement(parent));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyCycle { parent, child });
        }
        if let Some(mut node) = self.html.tree.get_mut(parent_slot) {
            node.append_id(child_slot);
        }
        Ok(())
    }

    /// Detaches a node from the tree. Detached nodes are left alone.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        if let Some(mut detached) = self.slot(node).and_then(|slot| self.html.tree.get_mut(slot)) {
            detached.detach();
        }
        self.forget_stale_references();
    }

    /// Detaches a node and frees its subtree for reuse. Ids into the
    /// subtree stop resolving.
    pub fn discard(&mut self, node: NodeId) {
        self.remove(node);
        if node == self.root {
            return;
        }
        let subtree: Vec<Slot> = match self.node(node) {
            Some(found) => found.descendants().map(|n| n.id()).collect(),
            None => return,
        };
        for slot in subtree {
            *self.generations.entry(slot).or_insert(0) += 1;
            self.live.remove(&slot);
            self.recyclable.push(slot);
        }
        self.forget_stale_references();
    }

    fn forget_stale_references(&mut self) {
        if self.active.is_some_and(|active| !self.is_connected(active)) {
            self.active = None;
        }
        if self.scrolled_to.is_some_and(|node| self.slot(node).is_none()) {
            self.scrolled_to = None;
        }
    }

    /// Parent node; `None` for the `<html>` element and detached roots.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node)?.parent()?;
        (!parent.value().is_document()).then(|| self.handle(parent.id()))
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|n| n.children().map(|child| self.handle(child.id())).collect())
            .unwrap_or_default()
    }

    /// Inclusive ancestry test, like `Node.contains`.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let (Some(ancestor), Some(node)) = (self.slot(ancestor), self.node(node)) else {
            return false;
        };
        node.id() == ancestor || node.ancestors().any(|a| a.id() == ancestor)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Pre-order descendants of `scope`, excluding `scope` itself.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        self.node(scope)
            .map(|n| n.descendants().skip(1).map(|d| self.handle(d.id())).collect())
            .unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::name)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Setters on non-element nodes are ignored.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.rewrite_attrs(node, |attrs| {
            match attrs.iter_mut().find(|(existing, _)| existing == name) {
                Some((_, old)) => *old = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        });
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if self.has_attr(node, name) {
            self.rewrite_attrs(node, |attrs| attrs.retain(|(existing, _)| existing != name));
        }
    }

    /// Rebuilds the element so its cached id and class list follow the new
    /// attributes.
    fn rewrite_attrs(&mut self, node: NodeId, edit: impl FnOnce(&mut Vec<(String, String)>)) {
        let Some(mut found) = self.slot(node).and_then(|slot| self.html.tree.get_mut(slot)) else {
            return;
        };
        let Node::Element(element) = found.value() else {
            return;
        };
        let mut attrs: Vec<(String, String)> = element
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        edit(&mut attrs);
        let attributes = attrs
            .into_iter()
            .map(|(name, value)| Attribute {
                name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
                value: StrTendril::from(value),
            })
            .collect();
        *element = Element::new(element.name.clone(), attributes);
    }

    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.element(node)?.id()
    }

    /// First connected element with the given id, in tree order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.html
            .root_element()
            .descendants()
            .find(|node| node.value().as_element().and_then(Element::id) == Some(id))
            .map(|node| self.handle(node.id()))
    }

    /// Classes in attribute order.
    pub fn classes(&self, node: NodeId) -> Vec<&str> {
        self.attr(node, "class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.has_class(class, CaseSensitivity::CaseSensitive))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) || !self.is_element(node) {
            return;
        }
        let mut classes: Vec<String> = self.classes(node).into_iter().map(str::to_string).collect();
        classes.push(class.to_string());
        self.set_attr(node, "class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            return;
        }
        let remaining: Vec<String> = self
            .classes(node)
            .into_iter()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        self.set_attr(node, "class", &remaining.join(" "));
    }

    /// Flips a class; returns whether it is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    pub fn set_class_if(&mut self, node: NodeId, class: &str, present: bool) {
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.live(node)?.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(live) = self.live_mut(node) {
            live.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn rect(&self, node: NodeId) -> Rect {
        self.live(node).map(|live| live.rect).unwrap_or_default()
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(live) = self.live_mut(node) {
            live.rect = rect;
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        let Some(found) = self.node(node) else {
            return String::new();
        };
        found
            .descendants()
            .filter_map(|n| n.value().as_text().map(|text| &**text))
            .collect()
    }

    /// Replaces all children with a single text node. A lone text child is
    /// rewritten in place; replaced text nodes are freed.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let Some(parent_slot) = self.slot(node).filter(|_| self.is_element(node)) else {
            return;
        };
        let children = self.children(node);
        if let [only] = children.as_slice() {
            if let Some(mut child) = self.slot(*only).and_then(|slot| self.html.tree.get_mut(slot)) {
                if let Node::Text(existing) = child.value() {
                    existing.text = text.into();
                    return;
                }
            }
        }
        for child in children {
            if self.is_element(child) {
                self.remove(child);
            } else {
                self.discard(child);
            }
        }
        let text_node = self.create_text(text);
        if let Some(mut parent) = self.html.tree.get_mut(parent_slot) {
            parent.append_id(text_node.slot);
        }
    }

    /// Current value of a form control. Inputs fall back to their `value`
    /// attribute, textareas to their text, selects to the selected option.
    pub fn value(&self, node: NodeId) -> String {
        let Some(el) = self.element(node) else {
            return String::new();
        };
        if let Some(value) = self.live(node).and_then(|live| live.value.as_ref()) {
            return value.clone();
        }
        match el.name() {
            "textarea" => self.text_content(node),
            "select" => self.initial_select_value(node),
            _ => el.attr("value").unwrap_or_default().to_string(),
        }
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(live) = self.live_mut(node) {
            live.value = Some(value.to_string());
        }
    }

    fn initial_select_value(&self, select: NodeId) -> String {
        let options: Vec<NodeId> = self
            .descendants(select)
            .into_iter()
            .filter(|id| self.tag(*id) == Some("option"))
            .collect();
        options
            .iter()
            .copied()
            .find(|option| self.has_attr(*option, "selected"))
            .or_else(|| options.first().copied())
            .map(|option| {
                self.attr(option, "value")
                    .map(str::to_string)
                    .unwrap_or_else(|| self.text_content(option).trim().to_string())
            })
            .unwrap_or_default()
    }

    pub fn focus(&mut self, node: NodeId) {
        if self.is_connected(node) {
            self.active = Some(node);
        }
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    pub fn scroll_into_view(&mut self, node: NodeId) {
        self.scrolled_to = Some(node);
    }

    /// Element most recently scrolled into view.
    pub fn scrolled_to(&self) -> Option<NodeId> {
        self.scrolled_to
    }

    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.element_ref(node).is_some_and(|el| selector.matches(&el))
    }

    pub fn matches_selector(&self, node: NodeId, selector: &str) -> bool {
        parse_or_warn(selector).is_some_and(|selector| self.matches(node, &selector))
    }

    /// Connected elements matching `selector`, in tree order. An invalid
    /// selector logs a warning and matches nothing.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(selector) = parse_or_warn(selector) else {
            return Vec::new();
        };
        let root = self.html.root_element();
        std::iter::once(root)
            .filter(|el| selector.matches(el))
            .chain(root.select(&selector))
            .map(|el| self.handle(el.id()))
            .collect()
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Like `query_selector_all`, limited to descendants of `scope`.
    pub fn query_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let (Some(scope), Some(selector)) = (self.element_ref(scope), parse_or_warn(selector))
        else {
            return Vec::new();
        };
        scope
            .select(&selector)
            .map(|el| self.handle(el.id()))
            .collect()
    }

    pub fn query_first_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.query_within(scope, selector).into_iter().next()
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let selector = parse_or_warn(selector)?;
        let start = self.node(node)?;
        std::iter::once(start)
            .chain(start.ancestors())
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
            .map(|el| self.handle(el.id()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_warn(selector: &str) -> Option<Selector> {
    match parse_selector(selector) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            ui_warn!("{err}");
            None
        }
    }
}
