// File: crates/plotline-svg/src/lib.rs
// Summary: SVG export backend; walks a core scene tree into a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use plotline_core::scene::{Anchor, Node, Scene, TooltipBox};
use plotline_core::types::FONT_TOOLTIP;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write SVG file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a scene as a standalone SVG document string.
pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" font-family=\"Noto Sans, sans-serif\">",
        w = fnum(scene.width),
        h = fnum(scene.height),
    );
    let _ = write!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        fnum(scene.width),
        fnum(scene.height),
        esc(&scene.background),
    );

    if let Some(fade) = &scene.fade_in {
        let _ = write!(
            out,
            "<g opacity=\"{}\"><animate attributeName=\"opacity\" from=\"{}\" to=\"{}\" \
             dur=\"{}ms\" fill=\"freeze\"/>",
            fnum(fade.to),
            fnum(fade.from),
            fnum(fade.to),
            fade.duration_ms,
        );
    } else {
        out.push_str("<g>");
    }

    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    if let Some(tooltip) = &scene.tooltip {
        write_tooltip(&mut out, tooltip);
    }
    out.push_str("</g></svg>");
    out
}

/// Render and write a scene to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<(), SvgError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_scene(scene))?;
    Ok(())
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group { dx, dy, nodes } => {
            let _ = write!(out, "<g transform=\"translate({},{})\">", fnum(*dx), fnum(*dy));
            for n in nodes {
                write_node(out, n);
            }
            out.push_str("</g>");
        }
        Node::Line { x1, y1, x2, y2, stroke, width, dash, opacity } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
                fnum(*x1), fnum(*y1), fnum(*x2), fnum(*y2), esc(stroke), fnum(*width),
            );
            if let Some(dash) = dash {
                let _ = write!(out, " stroke-dasharray=\"{}\"", esc(dash));
            }
            if *opacity < 1.0 {
                let _ = write!(out, " stroke-opacity=\"{}\"", fnum(*opacity));
            }
            out.push_str("/>");
        }
        Node::Path { d, stroke, fill, width, opacity } => {
            let _ = write!(
                out,
                "<path d=\"{}\" stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\" opacity=\"{}\" \
                 stroke-linecap=\"round\" shape-rendering=\"geometricPrecision\"/>",
                esc(d), esc(stroke), esc(fill), fnum(*width), fnum(*opacity),
            );
        }
        Node::Rect { x, y, w, h, fill, opacity } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                fnum(*x), fnum(*y), fnum(*w), fnum(*h), esc(fill), fnum(*opacity),
            );
        }
        Node::Circle { cx, cy, r, fill, stroke, width } => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                fnum(*cx), fnum(*cy), fnum(*r), esc(fill), esc(stroke), fnum(*width),
            );
        }
        Node::Polygon { points, stroke, fill, opacity } => {
            out.push_str("<polygon points=\"");
            for (i, (x, y)) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{},{}", fnum(*x), fnum(*y));
            }
            let _ = write!(
                out,
                "\" stroke=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                esc(stroke), esc(fill), fnum(*opacity),
            );
        }
        Node::Text { x, y, text, size, fill, anchor, rotate, bold } => {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
                fnum(*x), fnum(*y), fnum(*size), esc(fill), anchor_attr(*anchor),
            );
            if let Some(angle) = rotate {
                let _ = write!(out, " transform=\"rotate({} {} {})\"", fnum(*angle), fnum(*x), fnum(*y));
            }
            if *bold {
                out.push_str(" font-weight=\"bold\"");
            }
            let _ = write!(out, ">{}</text>", esc(text));
        }
    }
}

fn write_tooltip(out: &mut String, tooltip: &TooltipBox) {
    let _ = write!(
        out,
        "<g class=\"tooltip\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" \
         fill=\"{}\" stroke=\"#cccccc\" stroke-width=\"1\"/>",
        fnum(tooltip.x), fnum(tooltip.y), fnum(tooltip.width), fnum(tooltip.height),
        esc(&tooltip.bg),
    );
    for (i, line) in tooltip.lines.iter().enumerate() {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            fnum(tooltip.x + 8.0),
            fnum(tooltip.y + 6.0 + (i as f64 + 1.0) * (FONT_TOOLTIP + 5.0) - 5.0),
            fnum(FONT_TOOLTIP),
            esc(&tooltip.text_color),
            esc(line),
        );
    }
    out.push_str("</g>");
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Numbers without a trailing `.0`, so whole pixels stay compact.
fn fnum(v: f64) -> String {
    if v == v.round() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
