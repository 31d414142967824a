use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Indentation stops growing past this depth so deep trees stay linear in size
const MAX_INDENT: usize = 64;

/// Pending output while walking the tree
enum Step<'a> {
    Open(ElementRef<'a>, usize),
    Close(&'a str, usize),
    Line(String, usize),
}

/// Serializes a document with one tag or text run per line, indented one
/// space per nesting level. Whitespace-only text is dropped and other text is
/// trimmed. The walk uses an explicit stack, so nesting depth is unbounded.
pub fn prettify(html: &Html) -> String {
    let mut out = String::new();

    for node in html.tree.root().children() {
        match node.value() {
            Node::Doctype(doctype) => {
                push_line(&mut out, 0, &format!("<!DOCTYPE {}>", doctype.name()))
            }
            Node::Comment(comment) => push_line(&mut out, 0, &format!("<!--{}-->", &**comment)),
            Node::Text(text) => push_text(&mut out, 0, text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    write_element(&mut out, element);
                }
            }
            _ => {}
        }
    }

    out
}

fn write_element(out: &mut String, root: ElementRef<'_>) {
    let mut stack = vec![Step::Open(root, 0)];

    while let Some(step) = stack.pop() {
        let (element, depth) = match step {
            Step::Open(element, depth) => (element, depth),
            Step::Close(name, depth) => {
                push_line(out, depth, &format!("</{}>", name));
                continue;
            }
            Step::Line(line, depth) => {
                push_line(out, depth, &line);
                continue;
            }
        };

        let value = element.value();
        let name = value.name();

        let mut open = format!("<{}", name);
        for (attr, attr_value) in value.attrs() {
            open.push_str(&format!(" {}=\"{}\"", attr, escape_attribute(attr_value)));
        }

        if VOID_ELEMENTS.contains(&name) {
            open.push_str("/>");
            push_line(out, depth, &open);
            continue;
        }

        open.push('>');
        push_line(out, depth, &open);

        // Children are pushed last-first so they pop in document order
        stack.push(Step::Close(name, depth));
        for child in element.children().rev() {
            match child.value() {
                Node::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        stack.push(Step::Line(escape_text(trimmed), depth + 1));
                    }
                }
                Node::Comment(comment) => {
                    stack.push(Step::Line(format!("<!--{}-->", &**comment), depth + 1))
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        stack.push(Step::Open(child, depth + 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn push_text(out: &mut String, depth: usize, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        push_line(out, depth, &escape_text(trimmed));
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.push_str(&" ".repeat(depth.min(MAX_INDENT)));
    out.push_str(line);
    out.push('\n');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
