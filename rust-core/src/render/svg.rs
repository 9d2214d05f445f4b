//! SVG backend for [`Figure`] display lists.
//!
//! World coordinates are mapped to pixels with `theme.px_per_unit` and the y axis
//! flipped, so "up" in the diagram is up on screen. Commands are painted in
//! ascending z order; commands with equal z keep their recording order.

use log::debug;
use std::fmt::Write;

use super::command::{arc_points, DrawCommand};
use super::figure::Figure;
use crate::config::{ARC_SEGMENTS, GEOMETRY_TOLERANCE};
use crate::geometries::{BoundingBox2D, Point};
use crate::style::{ShapeStyle, StrokeStyle, TextStyle};
use crate::Result;

/// World → pixel mapping for one render
#[derive(Debug, Clone, Copy)]
struct Viewport {
    bounds: BoundingBox2D,
    scale: f64,
}

impl Viewport {
    fn width_px(&self) -> f64 {
        self.bounds.width() * self.scale
    }

    fn height_px(&self) -> f64 {
        self.bounds.height() * self.scale
    }

    fn map(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.bounds.min.x) * self.scale,
            (self.bounds.max.y - p.y) * self.scale,
        )
    }
}

/// Render a figure to a standalone SVG document
pub fn render_svg(figure: &Figure) -> Result<String> {
    let theme = figure.theme();
    let view = Viewport {
        bounds: figure.limits(),
        scale: theme.px_per_unit,
    };
    let (w, h) = (view.width_px(), view.height_px());

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = num(w),
        h = num(h),
        font = escape_xml(&theme.font_family),
    )?;
    if let Some(title) = figure.title() {
        writeln!(svg, "<title>{}</title>", escape_xml(title))?;
    }
    writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        num(w),
        num(h),
        theme.background
    )?;

    let mut items: Vec<_> = figure.items().iter().collect();
    // sort_by_key is stable, so equal z keeps recording order
    items.sort_by_key(|item| item.z);

    for item in items {
        write_command(&mut svg, &view, &item.command)?;
    }

    if let Some(title) = figure.title() {
        writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="{}" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
            num(w / 2.0),
            num(theme.font_size * 1.6),
            num(theme.font_size * 1.2),
            theme.palette.text,
            escape_xml(title)
        )?;
    }
    svg.push_str("</svg>\n");

    debug!("Rendered {} commands to SVG ({}x{} px)", figure.len(), num(w), num(h));
    Ok(svg)
}

fn write_command(svg: &mut String, view: &Viewport, command: &DrawCommand) -> Result<()> {
    match command {
        DrawCommand::Polygon { points, style } => {
            writeln!(
                svg,
                r#"<polygon points="{}"{}/>"#,
                point_list(view, points),
                shape_attrs(style)
            )?;
        }
        DrawCommand::Circle { center, radius, style } => {
            let c = view.map(*center);
            writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                num(c.x),
                num(c.y),
                num(radius * view.scale),
                shape_attrs(style)
            )?;
        }
        DrawCommand::Polyline { points, stroke } => {
            writeln!(
                svg,
                r#"<polyline points="{}" fill="none"{}/>"#,
                point_list(view, points),
                stroke_attrs(stroke)
            )?;
        }
        DrawCommand::Arrow {
            start,
            end,
            stroke,
            head_length,
        } => write_arrow(svg, view, *start, *end, stroke, *head_length)?,
        DrawCommand::Arc {
            center,
            radius,
            start_deg,
            end_deg,
            stroke,
        } => {
            let points = arc_points(*center, *radius, *start_deg, *end_deg, ARC_SEGMENTS);
            writeln!(
                svg,
                r#"<polyline points="{}" fill="none"{}/>"#,
                point_list(view, &points),
                stroke_attrs(stroke)
            )?;
        }
        DrawCommand::Text { position, text, style } => write_text(svg, view, *position, text, style)?,
        DrawCommand::Marker { position, size, color } => {
            let c = view.map(*position);
            writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                num(c.x),
                num(c.y),
                num(*size),
                color
            )?;
        }
    }
    Ok(())
}

fn write_arrow(
    svg: &mut String,
    view: &Viewport,
    start: Point,
    end: Point,
    stroke: &StrokeStyle,
    head_length: f64,
) -> Result<()> {
    let (s, e) = (view.map(start), view.map(end));
    // A zero-length arrow has no direction to draw a head along
    let Some(dir) = (e - s).normalized() else {
        return Ok(());
    };

    let head = head_length.min(s.distance_to(e));
    let base = e - dir * head;
    let perp = Point::new(-dir.y, dir.x) * (head * 0.4);
    let (left, right) = (base + perp, base - perp);

    writeln!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
        num(s.x),
        num(s.y),
        num(base.x),
        num(base.y),
        stroke_attrs(stroke)
    )?;
    writeln!(
        svg,
        r#"<polygon points="{},{} {},{} {},{}" fill="{}" fill-opacity="{}"/>"#,
        num(e.x),
        num(e.y),
        num(left.x),
        num(left.y),
        num(right.x),
        num(right.y),
        stroke.color,
        num(stroke.opacity)
    )?;
    Ok(())
}

fn write_text(svg: &mut String, view: &Viewport, position: Point, text: &str, style: &TextStyle) -> Result<()> {
    let p = view.map(position);
    let bold = if style.bold { r#" font-weight="bold""# } else { "" };
    // y points down in SVG, so a counterclockwise world angle is a negative SVG rotation
    let rotate = if style.rotation_deg.abs() > GEOMETRY_TOLERANCE {
        format!(r#" transform="rotate({} {} {})""#, num(-style.rotation_deg), num(p.x), num(p.y))
    } else {
        String::new()
    };
    let extra = format!("{}{}", bold, rotate);
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() <= 1 {
        writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            num(p.x),
            num(p.y),
            num(style.size),
            style.color,
            style.anchor.as_svg(),
            extra,
            escape_xml(text)
        )?;
        return Ok(());
    }

    // Multi-line labels are centered vertically on the anchor
    let line_height = style.size * 1.25;
    let first_y = p.y - line_height * (lines.len() - 1) as f64 / 2.0;
    write!(
        svg,
        r#"<text font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="middle"{}>"#,
        num(style.size),
        style.color,
        style.anchor.as_svg(),
        extra
    )?;
    for (i, line) in lines.iter().enumerate() {
        write!(
            svg,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            num(p.x),
            num(first_y + line_height * i as f64),
            escape_xml(line)
        )?;
    }
    svg.push_str("</text>\n");
    Ok(())
}

fn point_list(view: &Viewport, points: &[Point]) -> String {
    points
        .iter()
        .map(|p| {
            let q = view.map(*p);
            format!("{},{}", num(q.x), num(q.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn shape_attrs(style: &ShapeStyle) -> String {
    let mut attrs = match style.fill {
        Some(fill) => format!(r#" fill="{}" fill-opacity="{}""#, fill, num(style.fill_opacity)),
        None => r#" fill="none""#.to_string(),
    };
    if let Some(stroke) = &style.stroke {
        attrs.push_str(&stroke_attrs(stroke));
    }
    attrs
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
        stroke.color,
        num(stroke.width)
    );
    if stroke.opacity < 1.0 {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, num(stroke.opacity));
    }
    if stroke.dashed {
        attrs.push_str(r#" stroke-dasharray="6 4""#);
    }
    attrs
}

/// Format a pixel value with at most two decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// Escape text for XML content and double-quoted attributes
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
