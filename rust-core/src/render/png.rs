//! SVG-to-PNG rasterization with resvg (cargo feature `png`).
//!
//! Text is resolved against the fonts installed on the system, so labels can
//! differ slightly between machines.

use log::debug;
use resvg::tiny_skia;
use resvg::usvg;

use super::figure::Figure;
use crate::{DiagramError, Result};

/// Rasterize an SVG document; `width` rescales while keeping the aspect ratio
pub fn svg_to_png(svg: &str, width: Option<u32>) -> Result<Vec<u8>> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();

    let options = usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| DiagramError::Png(format!("failed to parse SVG: {e}")))?;

    let size = tree.size();
    let (svg_w, svg_h) = (size.width(), size.height());
    let (px_w, px_h) = match width {
        Some(w) => (w, (svg_h * w as f32 / svg_w).ceil() as u32),
        None => (svg_w.ceil() as u32, svg_h.ceil() as u32),
    };
    if px_w == 0 || px_h == 0 {
        return Err(DiagramError::Png("computed image dimensions are zero".to_string()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(px_w, px_h)
        .ok_or_else(|| DiagramError::Png("failed to allocate pixmap".to_string()))?;
    let transform = tiny_skia::Transform::from_scale(px_w as f32 / svg_w, px_h as f32 / svg_h);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!("Rasterized SVG to {}x{} px", px_w, px_h);
    pixmap
        .encode_png()
        .map_err(|e| DiagramError::Png(format!("failed to encode PNG: {e}")))
}

/// Render a figure straight to PNG bytes
pub fn render_png(figure: &Figure, width: Option<u32>) -> Result<Vec<u8>> {
    let svg = figure.to_svg()?;
    svg_to_png(&svg, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;
    use crate::style::{Color, ShapeStyle};
    use crate::geometries::Point;

    #[test]
    fn test_png_signature_and_size() {
        let mut figure = Figure::default();
        figure.set_limits((0.0, 2.0), (0.0, 1.0)).unwrap();
        figure.push(DrawCommand::Circle {
            center: Point::new(1.0, 0.5),
            radius: 0.4,
            style: ShapeStyle::filled(Color::rgb(0xdc, 0x26, 0x26)),
        });

        let png = render_png(&figure, Some(240)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let pixmap = tiny_skia::Pixmap::decode_png(&png).unwrap();
        assert_eq!(pixmap.width(), 240);
        assert_eq!(pixmap.height(), 120);
    }

    #[test]
    fn test_invalid_svg_is_an_error() {
        assert!(matches!(svg_to_png("not svg", None), Err(DiagramError::Png(_))));
    }
}
