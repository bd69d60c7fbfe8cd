//! SVG export of a display list.

use crate::display_list::{DisplayList, DrawCommand};
use crate::renderer::{RenderContext, RenderError, RenderResult, Renderer};
use peniko::Color;
use std::fmt::Write as _;
use std::io::Write;
use vectorsketch_core::shapes::Rgb;

fn hex(color: Color) -> String {
    Rgb::from(color).to_hex()
}

/// Serialize one frame as a standalone SVG document.
pub fn to_svg(list: &DisplayList, ctx: &RenderContext) -> String {
    let size = ctx.viewport_size;
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        w = size.width,
        h = size.height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        hex(list.background_color(ctx))
    );
    for command in list.commands() {
        match command {
            DrawCommand::Stroke { path, width, color } => {
                let _ = writeln!(
                    svg,
                    concat!(
                        r#"  <path d="{}" fill="none" stroke="{}" "#,
                        r#"stroke-width="{}" stroke-linecap="round"/>"#
                    ),
                    path.to_svg(),
                    hex(*color),
                    width
                );
            }
            DrawCommand::Fill { path, color } => {
                let _ =
                    writeln!(svg, r#"  <path d="{}" fill="{}"/>"#, path.to_svg(), hex(*color));
            }
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write one frame as SVG to `out`.
pub fn write_svg(
    list: &DisplayList,
    ctx: &RenderContext,
    out: &mut dyn Write,
) -> RenderResult<()> {
    out.write_all(to_svg(list, ctx).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| RenderError::Io(format!("Failed to write SVG: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use std::io;
    use vectorsketch_core::surface::{self, Surface};

    fn ctx() -> RenderContext {
        RenderContext::new(Size::new(600.0, 400.0))
    }

    #[test]
    fn test_svg_document() {
        let mut list = DisplayList::new();
        let (from, to) = (Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        surface::stroke_line(&mut list, from, to, 2.0, Rgb::red());
        list.arc(Point::new(5.0, 5.0), 4.0);
        list.fill(Rgb::new(0, 0, 255));

        let svg = to_svg(&list, &ctx());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="600""#));
        assert!(svg.contains(r##"fill="#fafafa""##));
        assert!(svg.contains(r##"stroke="#ff0000" stroke-width="2""##));
        assert!(svg.contains(r##"fill="#0000ff""##));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_custom_background() {
        let ctx = ctx().with_background(Color::from_rgba8(1, 2, 3, 255));
        let svg = to_svg(&DisplayList::new(), &ctx);
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#010203"/>"##));
        assert!(!svg.contains("#fafafa"));
    }

    #[test]
    fn test_write_svg() {
        let mut out = Vec::new();
        write_svg(&DisplayList::new(), &ctx(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, to_svg(&DisplayList::new(), &ctx()));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error() {
        let result = write_svg(&DisplayList::new(), &ctx(), &mut Broken);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
