use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

pub const CARD_CLASSES: &str = "rounded-xl border border-zinc-50 overflow-hidden bg-neutral-950 p-4";
pub const LINK_CLASSES: &str =
    "border-b-2 border-transparent hover:border-amber-700 text-zinc-300 hover:text-zinc-50 text-sm";

const ELEMENT_TEMPLATE: &str =
    r#"<{{tag}}{{#has_class}} class="{{class_name}}"{{/has_class}}{{#attributes}} {{name}}="{{value}}"{{/attributes}}>{{{children}}}</{{tag}}>"#;

/// What the caller hands to a wrapper component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub class_name: Option<String>,
    pub attributes: Vec<(String, String)>,
    /// Inner HTML, inserted as is.
    pub children: String,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn children(mut self, html: &str) -> Self {
        self.children = html.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub class_name: String,
    pub attributes: Vec<(String, String)>,
    pub children: String,
}

/// Default classes first, then the caller's. Blank entries are dropped.
pub fn merge_classes(defaults: &str, overrides: Option<&str>) -> String {
    [Some(defaults), overrides]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_class_attr(name: &str) -> bool {
    name.eq_ignore_ascii_case("class") || name == "className"
}

pub fn element(tag: &'static str, default_classes: &str, props: Props) -> Element {
    let class_name = merge_classes(default_classes, props.class_name.as_deref());
    let attributes = props.attributes
        .into_iter()
        .filter(|(name, _)| !is_class_attr(name))
        .collect();

    Element {
        tag,
        class_name,
        attributes,
        children: props.children,
    }
}

pub fn card(props: Props) -> Element {
    element("div", CARD_CLASSES, props)
}

pub fn link(props: Props) -> Element {
    element("a", LINK_CLASSES, props)
}

#[derive(ramhorns::Content)]
struct ViewAttribute<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewElement<'a> {
    tag: &'a str,
    has_class: bool,
    class_name: &'a str,
    attributes: Vec<ViewAttribute<'a>>,
    children: &'a str,
}

pub struct ElementRenderer<'a> {
    pub template: Template<'a>,
}

impl ElementRenderer<'static> {
    pub fn new() -> io::Result<ElementRenderer<'static>> {
        let template = match Template::new(ELEMENT_TEMPLATE) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing element template: {}", e)));
            }
        };

        Ok(ElementRenderer {
            template,
        })
    }
}

impl ElementRenderer<'_> {
    pub fn render(&self, element: &Element) -> String {
        let attributes = element.attributes
            .iter()
            .map(|(name, value)| ViewAttribute { name: name.as_str(), value: value.as_str() })
            .collect();

        self.template.render(&ViewElement {
            tag: element.tag,
            has_class: !element.class_name.is_empty(),
            class_name: element.class_name.as_str(),
            attributes,
            children: element.children.as_str(),
        })
    }
}
