//! SVG markup for embedding the logo in a page.
//!
//! The gradient stops read their colors from custom properties so a page can
//! restyle them, though the logo overwrites both on every frame.

use std::fmt::Write;

use super::color::Gradient;
use crate::runtime::capability::TextEffect;

pub const VIEW_BOX: (f64, f64) = (600.0, 200.0);

pub const FONTS_PROPERTY: &str = "--desktop-runtime-fonts";
pub const START_COLOR_PROPERTY: &str = "--desktop-runtime-startColor";
pub const STOP_COLOR_PROPERTY: &str = "--desktop-runtime-stopColor";

/// Placement and sizing of one text element in viewBox units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub x: f64,
    pub y: f64,
    /// CSS rem
    pub font_size: f64,
    pub font_weight: Option<u32>,
}

pub const TITLE_LAYOUT: TextLayout = TextLayout {
    x: 185.0,
    y: 70.0,
    font_size: 2.0,
    font_weight: Some(200),
};

pub const LABEL_LAYOUT: TextLayout = TextLayout {
    x: 100.0,
    y: 150.0,
    font_size: 8.0,
    font_weight: None,
};

#[derive(Clone, Debug)]
pub struct LogoMarkup<'a> {
    pub outline: &'a str,
    pub gradient: Gradient,
    pub title: &'a str,
    pub label: &'a str,
    pub fonts: &'a str,
    pub text_effect: TextEffect,
}

impl LogoMarkup<'_> {
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        let root_style = format!(
            "{}: {}; {}: {}; {}: {}",
            FONTS_PROPERTY,
            self.fonts,
            START_COLOR_PROPERTY,
            self.gradient.start,
            STOP_COLOR_PROPERTY,
            self.gradient.stop
        );

        // Writing to a String cannot fail
        let _ = writeln!(svg, r#"<div style="position: relative">"#);
        let _ = writeln!(
            svg,
            r#"  <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" style="{}">"#,
            VIEW_BOX.0,
            VIEW_BOX.1,
            escape(&root_style)
        );
        let _ = writeln!(svg, "    <defs>");
        let _ = writeln!(
            svg,
            r#"      <linearGradient id="gradient" gradientTransform="rotate(90)">"#
        );
        let _ = writeln!(
            svg,
            r#"        <stop id="gradientStop1" offset="0%" stop-color="var({})" />"#,
            START_COLOR_PROPERTY
        );
        let _ = writeln!(
            svg,
            r#"        <stop id="gradientStop2" offset="100%" stop-color="var({})" />"#,
            STOP_COLOR_PROPERTY
        );
        let _ = writeln!(svg, "      </linearGradient>");
        let _ = writeln!(svg, "    </defs>");
        let _ = writeln!(
            svg,
            r#"    <path d="{}" fill="url('#gradient')"></path>"#,
            escape(self.outline)
        );
        let _ = writeln!(
            svg,
            "    {}",
            self.text_element(None, TITLE_LAYOUT, self.title)
        );
        let _ = writeln!(
            svg,
            "    {}",
            self.text_element(Some("runtime"), LABEL_LAYOUT, self.label)
        );
        let _ = writeln!(svg, "  </svg>");
        let _ = write!(svg, "</div>");

        svg
    }

    fn text_element(
        &self,
        id: Option<&str>,
        layout: TextLayout,
        text: &str,
    ) -> String {
        let mut style = format!(
            "user-select: none; font-size: {}rem; ",
            layout.font_size
        );
        if let Some(weight) = layout.font_weight {
            let _ = write!(style, "font-weight: {}; ", weight);
        }
        let _ = write!(style, "font-family: var({})", FONTS_PROPERTY);

        let effect = self.text_effect.css();
        if !effect.is_empty() {
            let _ = write!(style, "; {}", effect);
        }

        let id = id.map(|id| format!(r#" id="{}""#, id)).unwrap_or_default();

        format!(
            r#"<text{} y="{}" x="{}" style="{}">{}</text>"#,
            id,
            layout.y,
            layout.x,
            escape(&style),
            escape(text)
        )
    }
}

/// Escape text for use in XML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(text_effect: TextEffect) -> String {
        LogoMarkup {
            outline: "M0,0C1,1,2,2,3,3",
            gradient: Gradient::from_hue(90.0),
            title: "Desktop",
            label: "Runtime",
            fonts: "\"Segoe UI\",sans-serif",
            text_effect,
        }
        .to_svg()
    }

    #[test]
    fn contains_template_parts() {
        let svg = markup(TextEffect::None);
        assert!(svg.starts_with(r#"<div style="position: relative">"#));
        assert!(svg.contains(r#"viewBox="0 0 600 200""#));
        assert!(svg.contains(r#"gradientTransform="rotate(90)""#));
        assert!(svg.contains(r#"<path d="M0,0C1,1,2,2,3,3""#));
        assert!(svg.contains(">Desktop</text>"));
        assert!(svg.contains(r#"<text id="runtime" y="150" x="100""#));
        assert!(svg.contains(">Runtime</text>"));
        assert!(svg.ends_with("</div>"));
    }

    #[test]
    fn publishes_gradient_colors() {
        let svg = markup(TextEffect::None);
        assert!(svg.contains(
            "--desktop-runtime-startColor: hsl(90, 100%, 75%)"
        ));
        assert!(svg.contains(
            "--desktop-runtime-stopColor: hsl(190, 100%, 75%)"
        ));
        assert!(
            svg.contains(r#"stop-color="var(--desktop-runtime-startColor)""#)
        );
    }

    #[test]
    fn fonts_are_escaped_in_style() {
        let svg = markup(TextEffect::None);
        assert!(svg.contains("--desktop-runtime-fonts: &quot;Segoe UI&quot;"));
    }

    #[test]
    fn text_effect_applies_to_every_text() {
        let svg = markup(TextEffect::InvertDifference);
        assert_eq!(svg.matches("mix-blend-mode: difference").count(), 2);
        assert_eq!(svg.matches("filter: invert(1)").count(), 2);

        let plain = markup(TextEffect::None);
        assert_eq!(plain.matches("mix-blend-mode").count(), 0);
    }

    #[test]
    fn title_has_weight_label_does_not() {
        let svg = markup(TextEffect::None);
        assert_eq!(svg.matches("font-weight: 200").count(), 1);
        assert!(svg.contains("font-size: 2rem"));
        assert!(svg.contains("font-size: 8rem"));
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape("Runtime"), "Runtime");
    }
}
