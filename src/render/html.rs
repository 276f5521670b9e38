//! HTML fragment rendering of display nodes.

use super::{DisplayNode, NodeKind};
use crate::model::StyleSpec;

/// Render display nodes as an HTML fragment with inline styles.
pub fn to_html(nodes: &[DisplayNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        render_node(&mut output, node);
        output.push('\n');
    }
    output
}

fn render_node(output: &mut String, node: &DisplayNode) {
    match &node.kind {
        NodeKind::LineBreak => output.push_str("<br>"),
        NodeKind::Rule => {
            output.push_str(&format!(
                "<hr style=\"border:0;border-top:1px solid {};margin:{}px 0 {}px 0\">",
                node.style.color.to_hex(),
                node.style.space_before,
                node.style.space_after
            ));
        }
        NodeKind::Heading { level } => {
            let tag = format!("h{}", level.as_u8());
            push_element(output, &tag, node);
        }
        NodeKind::ListItem { number: Some(n) } => {
            output.push_str(&format!("<li value=\"{}\" style=\"{}\">", n, css(&node.style)));
            output.push_str(&escape_html(&node.text));
            output.push_str("</li>");
        }
        NodeKind::ListItem { number: None } => push_element(output, "li", node),
        NodeKind::Strong | NodeKind::Paragraph => push_element(output, "p", node),
    }
}

fn push_element(output: &mut String, tag: &str, node: &DisplayNode) {
    output.push_str(&format!("<{} style=\"{}\">", tag, css(&node.style)));
    output.push_str(&escape_html(&node.text));
    output.push_str(&format!("</{}>", tag));
}

fn css(style: &StyleSpec) -> String {
    format!(
        "font-size:{}px;font-weight:{};line-height:{}px;margin:{}px 0 {}px {}px;color:{}",
        style.font_size,
        style.weight.css_weight(),
        style.line_height,
        style.space_before,
        style.space_after,
        style.indent,
        style.color.to_hex()
    )
}

/// Escape text for HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
