//! Page composition and HTML output.
//!
//! The page is modeled as a small tree of headings and text blocks
//! ([`Node`]), composed from the derived views and then serialized to a
//! plain HTML document. No styling, no interactive elements.

use menagerie_model::{Dataset, User};

use crate::derive::ViewCache;

/// One node of the rendered page tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A heading of the given level.
    Heading { level: u8, text: String },
    /// A plain text block.
    Text(String),
    /// A container of child nodes.
    Block(Vec<Node>),
}

/// Composes the page tree for a dataset.
///
/// The root block holds the page title, then one block per animal in
/// first-seen order. An animal's heading renders unconditionally; the user
/// blocks beneath it follow ranking order and may be absent entirely. An
/// empty dataset composes to the title alone.
pub fn compose(title: &str, dataset: &Dataset, cache: &mut ViewCache) -> Node {
    let mut nodes = vec![Node::Heading {
        level: 1,
        text: title.to_string(),
    }];

    let animals = cache.animal_index(dataset).to_vec();

    for animal in &animals {
        nodes.push(animal_block(animal, cache.top_users(dataset, animal)));
    }

    tracing::debug!(animals = animals.len(), "composed page");

    Node::Block(nodes)
}

/// Composes the block for one animal.
fn animal_block(animal: &str, users: Vec<&User>) -> Node {
    let mut nodes = vec![Node::Heading {
        level: 2,
        text: animal.to_string(),
    }];
    nodes.extend(users.into_iter().map(user_block));

    Node::Block(nodes)
}

/// Composes the block for one ranked user: their full name and their points
/// suffixed with ` pts`.
fn user_block(user: &User) -> Node {
    Node::Block(vec![
        Node::Text(user.full_name()),
        Node::Text(format!("{} pts", user.points)),
    ])
}

/// Serializes a page tree to an HTML document.
pub fn render_html(page: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<body>\n");
    write_node(&mut out, page, 0);
    out.push_str("</body>\n</html>\n");

    out
}

/// Composes and serializes the page in one step.
pub fn render(title: &str, dataset: &Dataset) -> String {
    let mut cache = ViewCache::new(dataset);

    render_html(&compose(title, dataset, &mut cache))
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);

    match node {
        Node::Heading { level, text } => {
            out.push_str(&format!("{pad}<h{level}>{}</h{level}>\n", escape(text)));
        }
        Node::Text(text) => {
            out.push_str(&format!("{pad}<div>{}</div>\n", escape(text)));
        }
        Node::Block(children) => {
            out.push_str(&format!("{pad}<div>\n"));
            for child in children {
                write_node(out, child, depth + 1);
            }
            out.push_str(&format!("{pad}</div>\n"));
        }
    }
}

/// Escapes text for element content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
