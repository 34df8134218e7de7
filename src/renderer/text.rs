//! Plain-text listing of a laid-out scene

use std::fmt::Write;

use crate::layout::Visibility;
use crate::scene::SceneLayout;

/// One line for the container size, then one line per placed child
///
/// ```text
/// container 100x77
/// a: 0,0,60,40
/// b: 0,45,60,75 (invisible)
/// ```
pub fn render_text(layout: &SceneLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "container {}x{}", layout.size.width, layout.size.height);
    for child in &layout.children {
        let r = child.rect;
        let _ = write!(out, "{}: {},{},{},{}", child.label, r.left, r.top, r.right, r.bottom);
        if child.visibility == Visibility::Invisible {
            out.push_str(" (invisible)");
        }
        out.push('\n');
    }
    out
}
