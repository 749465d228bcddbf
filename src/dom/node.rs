use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, Node as WsNode};

use super::{EventType, Location};

/// Callback invoked with the DOM event that triggered it.
pub type Handler = Rc<dyn Fn(Event)>;

/// Inline style properties, kept in insertion order. Property names may be given in the camel
/// case form used by `CSSStyleDeclaration` fields (eg `objectFit`), and are stored as CSS
/// property names (`object-fit`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(Vec<(String, String)>);

impl Style {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value for the same property.
    pub fn set<K, V>(mut self, property: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.insert(property.as_ref(), value.as_ref());
        self
    }

    /// Retrieve the value of a property, by either its camel case or CSS name.
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = css_property(property);

        self.0
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Serialise the properties as the text of a `style` attribute.
    pub fn to_css_text(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn insert(&mut self, property: &str, value: &str) {
        let property = css_property(property);
        let value = value.to_string();

        match self.0.iter_mut().find(|(existing, _)| *existing == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    fn merge(&mut self, other: Style) {
        for (property, value) in other.0 {
            self.insert(&property, &value);
        }
    }
}

/// Convert a camel case property name to its CSS form. Custom properties and names that are
/// already hyphenated are kept as they are.
fn css_property(name: &str) -> String {
    if name.starts_with("--") || name.contains('-') {
        return name.to_string();
    }

    let mut property = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            property.push('-');
            property.push(c.to_ascii_lowercase());
        } else {
            property.push(c);
        }
    }

    property
}

/// Value passed alongside a key to [`Element::attr`]. How it is applied depends on the key.
pub enum AttrValue {
    Text(String),

    /// Boolean attribute (eg `required`). `true` sets it, `false` removes it.
    Flag(bool),

    Style(Style),

    Handler(Handler),
}

impl AttrValue {
    /// Wrap a closure as an event handler value.
    pub fn handler<F>(handler: F) -> Self
    where
        F: 'static + Fn(Event),
    {
        Self::Handler(Rc::new(handler))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Style> for AttrValue {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

/// A child passed to [`Element::child`]. [`Child::Empty`] is skipped without error, which allows
/// optional content to be passed straight through.
pub enum Child {
    Text(String),
    Node(Node),
    Empty,
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Node(Node::Element(element))
    }
}

impl<T> From<Option<T>> for Child
where
    T: Into<Child>,
{
    fn from(child: Option<T>) -> Self {
        child.map(Into::into).unwrap_or(Self::Empty)
    }
}

/// An event handler bound to an element.
#[derive(Clone)]
pub struct Listener {
    event: EventType,
    handler: Handler,
}

impl Listener {
    pub fn event(&self) -> &EventType {
        &self.event
    }

    /// Wrap the handler in a [`js_sys::Function`] that can be bound to a DOM listener. Ownership
    /// of the closure is passed to JS.
    fn create_callback(&self) -> Function {
        let handler = Rc::clone(&self.handler);

        Closure::<dyn Fn(Event)>::new(move |event| handler(event))
            .into_js_value()
            .unchecked_into()
    }
}

/// Description of a DOM element, built without access to the [`Document`]. Converted into a
/// [`web_sys::Element`] with [`Element::create_element()`].
#[derive(Clone)]
pub struct Element {
    tag: String,
    class_name: Option<String>,
    style: Style,

    /// Generic attributes, in the order they were first set.
    attributes: Vec<(String, String)>,

    listeners: Vec<Listener>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element description of the provided kind (eg `div`, `a`).
    pub fn new<S>(tag: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            tag: tag.as_ref().to_string(),
            class_name: None,
            style: Style::default(),
            attributes: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element from a tag, an attribute configuration and a sequence of children in a
    /// single call. Attributes are applied with [`Element::attr()`], children with
    /// [`Element::child()`].
    pub fn create<S, A, K, C>(tag: S, attributes: A, children: C) -> Self
    where
        S: AsRef<str>,
        A: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
        C: IntoIterator<Item = Child>,
    {
        let mut element = Self::new(tag);

        for (key, value) in attributes {
            element.apply(key.as_ref(), value);
        }

        children
            .into_iter()
            .fold(element, |element, child| element.child(child))
    }

    /// Apply an attribute. The key decides what happens to the value:
    ///
    /// - `className` (or `class`) sets the class name.
    /// - `style` with a [`Style`] merges inline style properties.
    /// - keys prefixed with `on` and a [`AttrValue::Handler`] bind a listener for the lower cased
    ///   remainder of the key (`onClick` listens for `click`).
    /// - anything else is set as a generic attribute.
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.apply(key.as_ref(), value.into());
        self
    }

    pub fn class<S>(self, class_name: S) -> Self
    where
        S: AsRef<str>,
    {
        self.attr("className", class_name.as_ref())
    }

    pub fn id<S>(self, id: S) -> Self
    where
        S: AsRef<str>,
    {
        self.attr("id", id.as_ref())
    }

    pub fn style(self, style: Style) -> Self {
        self.attr("style", style)
    }

    /// Bind a handler for the provided event.
    pub fn on<E, F>(mut self, event: E, handler: F) -> Self
    where
        E: Into<EventType>,
        F: 'static + Fn(Event),
    {
        self.listeners.push(Listener {
            event: event.into(),
            handler: Rc::new(handler),
        });
        self
    }

    /// Append a child. Text and nodes are appended in call order, [`Child::Empty`] is skipped.
    pub fn child<C>(mut self, child: C) -> Self
    where
        C: Into<Child>,
    {
        match child.into() {
            Child::Text(text) => self.children.push(Node::Text(text)),
            Child::Node(node) => self.children.push(node),
            Child::Empty => (),
        }

        self
    }

    /// Append each child of an iterator, as with [`Element::child()`].
    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        children
            .into_iter()
            .fold(self, |element, child| element.child(child))
    }

    /// Shorthand for appending a text child.
    pub fn text<S>(self, text: S) -> Self
    where
        S: AsRef<str>,
    {
        self.child(text.as_ref())
    }

    fn apply(&mut self, key: &str, value: AttrValue) {
        match (key, value) {
            ("className" | "class", AttrValue::Text(class_name)) => {
                self.class_name = Some(class_name);
            }
            ("style", AttrValue::Style(style)) => self.style.merge(style),
            (key, AttrValue::Handler(handler)) => match EventType::from_handler_key(key) {
                Some(event) => self.listeners.push(Listener { event, handler }),
                None => log::warn!("ignoring handler bound to `{key}` on <{}>", self.tag),
            },
            (key, AttrValue::Text(value)) => self.set_attribute(key, value),
            (key, AttrValue::Flag(true)) => self.set_attribute(key, String::new()),
            (key, AttrValue::Flag(false)) => {
                self.attributes.retain(|(name, _)| name != key);
            }
            (key, AttrValue::Style(style)) => self.set_attribute(key, style.to_css_text()),
        }
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Whether the class name contains the provided class.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|class_name| class_name.split_whitespace().any(|c| c == class))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn inline_style(&self) -> &Style {
        &self.style
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn has_listener(&self, event: &EventType) -> bool {
        self.listeners.iter().any(|listener| listener.event() == event)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Collect this element and every descendant element matching the predicate, in document
    /// order.
    pub fn find_all<P>(&self, predicate: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect(&predicate, &mut found);
        found
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|element| element.tag == tag)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|element| element.has_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(|element| element.attribute("id") == Some(id))
            .into_iter()
            .next()
    }

    fn collect<'a, P>(&'a self, predicate: &P, found: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool,
    {
        if predicate(self) {
            found.push(self);
        }

        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect(predicate, found);
            }
        }
    }

    /// Build the [`web_sys::Element`] described by this element, including listeners and all
    /// children. Requires a reference to [`Document`] in order to create the nodes.
    pub fn create_element(&self, document: &Document) -> Result<web_sys::Element, JsValue> {
        let element = document.create_element(&self.tag)?;

        if let Some(class_name) = &self.class_name {
            element.set_class_name(class_name);
        }

        for (name, value) in &self.attributes {
            element.set_attribute(name, value)?;
        }

        if !self.style.is_empty() {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                let style = html_element.style();
                for (property, value) in self.style.iter() {
                    style.set_property(property, value)?;
                }
            } else {
                element.set_attribute("style", &self.style.to_css_text())?;
            }
        }

        for listener in &self.listeners {
            element.add_event_listener_with_callback(
                listener.event().as_str(),
                &listener.create_callback(),
            )?;
        }

        let location = Location::parent(&element);
        for child in &self.children {
            location.mount(&child.create_node(document)?)?;
        }

        Ok(element)
    }
}

/// Either a text node or an element.
#[derive(Clone)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    /// Build the [`web_sys::Node`] described by this node.
    pub fn create_node(&self, document: &Document) -> Result<WsNode, JsValue> {
        Ok(match self {
            Node::Text(text) => document.create_text_node(text).into(),
            Node::Element(element) => element.create_element(document)?.into(),
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Shorthand for [`Element::new()`].
pub fn el<S>(tag: S) -> Element
where
    S: AsRef<str>,
{
    Element::new(tag)
}
