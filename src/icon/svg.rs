//! SVG generation from glyph data
//!
//! Follows the Iconify conventions: the glyph body is wrapped in a transform
//! group when flips or rotations apply, element ids are regenerated so the
//! same icon can appear several times in one page, and the root `<svg>`
//! element carries the requested size plus the glyph's view box.

use std::sync::atomic::{AtomicU64, Ordering};

use super::catalog::IconData;
use super::IconOptions;

/// Marks rewritten ids until every id has been processed
const ID_PLACEHOLDER: char = '\u{1}';

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Attributes of the root `<svg>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgAttributes {
    pub width: String,
    pub height: String,
    pub view_box: String,
}

impl SvgAttributes {
    /// Attributes in output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("viewBox", self.view_box.as_str()),
        ]
        .into_iter()
    }
}

/// Glyph body with transformations applied, plus its root attributes
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub attributes: SvgAttributes,
    pub body: String,
}

/// Apply flips and rotation to a glyph and compute its root attributes
pub fn icon_to_svg(data: &IconData, options: &IconOptions) -> RenderedIcon {
    let mut left = data.left;
    let mut top = data.top;
    let mut width = data.width;
    let mut height = data.height;
    let mut transforms: Vec<String> = Vec::new();
    let mut rotation = u32::from(data.rotate);

    if data.h_flip {
        if data.v_flip {
            rotation += 2;
        } else {
            transforms.push(format!("translate({} {})", width + left, 0.0 - top));
            transforms.push("scale(-1 1)".to_string());
            left = 0.0;
            top = 0.0;
        }
    } else if data.v_flip {
        transforms.push(format!("translate({} {})", 0.0 - left, height + top));
        transforms.push("scale(1 -1)".to_string());
        left = 0.0;
        top = 0.0;
    }

    rotation %= 4;
    match rotation {
        1 => {
            let center = height / 2.0 + top;
            transforms.insert(0, format!("rotate(90 {} {})", center, center));
        }
        2 => {
            transforms.insert(
                0,
                format!(
                    "rotate(180 {} {})",
                    width / 2.0 + left,
                    height / 2.0 + top
                ),
            );
        }
        3 => {
            let center = width / 2.0 + left;
            transforms.insert(0, format!("rotate(-90 {} {})", center, center));
        }
        _ => {}
    }

    // Quarter turns swap the axes of the view box
    if rotation % 2 == 1 {
        std::mem::swap(&mut left, &mut top);
        std::mem::swap(&mut width, &mut height);
    }

    let body = if transforms.is_empty() {
        data.body.clone()
    } else {
        format!(
            r#"<g transform="{}">{}</g>"#,
            transforms.join(" "),
            data.body
        )
    };

    RenderedIcon {
        attributes: SvgAttributes {
            width: options.width.clone(),
            height: options.height.clone(),
            view_box: format!("{} {} {} {}", left, top, width, height),
        },
        body,
    }
}

/// Rewrite every element id in `body` to a fresh, process-unique id
///
/// References through `#id`, `url(#id)` and `href="#id"` are rewritten
/// together with the declarations.
pub fn replace_ids(body: &str, prefix: &str) -> String {
    let mut ids = find_ids(body);
    if ids.is_empty() {
        return body.to_string();
    }

    // Longest first so "a" cannot match inside "a1"
    ids.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = body.to_string();
    for id in &ids {
        let new_id = next_id(prefix);
        result = replace_references(&result, id, &new_id);
    }
    result.replace(ID_PLACEHOLDER, "")
}

/// Wrap a body in a root `<svg>` element
pub fn icon_to_html(body: &str, attributes: &SvgAttributes) -> String {
    let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    if body.contains("xlink:") {
        svg.push_str(r#" xmlns:xlink="http://www.w3.org/1999/xlink""#);
    }
    for (name, value) in attributes.iter() {
        svg.push_str(&format!(r#" {}="{}""#, name, value));
    }
    svg.push('>');
    svg.push_str(body);
    svg.push_str("</svg>");
    svg
}

fn next_id(prefix: &str) -> String {
    format!("{}{:x}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Collect declared ids in document order, without duplicates
fn find_ids(body: &str) -> Vec<String> {
    const PATTERN: &str = "id=\"";
    let mut ids: Vec<String> = Vec::new();

    for (pos, _) in body.match_indices(PATTERN) {
        let after_whitespace = body[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !after_whitespace {
            continue;
        }
        let start = pos + PATTERN.len();
        let Some(len) = body[start..].find('"') else {
            continue;
        };
        let id = &body[start..start + len];
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            continue;
        }
        if !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
    }

    ids
}

fn replace_references(body: &str, id: &str, new_id: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut last = 0;

    for (pos, _) in body.match_indices(id) {
        let before = body[..pos].chars().next_back();
        let after = &body[pos + id.len()..];
        if matches!(before, Some('#' | ';' | '"')) && is_reference_end(after) {
            out.push_str(&body[last..pos]);
            out.push_str(new_id);
            out.push(ID_PLACEHOLDER);
            last = pos + id.len();
        }
    }

    out.push_str(&body[last..]);
    out
}

fn is_reference_end(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some('"') | Some(')') => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_lowercase()),
        _ => false,
    }
}
