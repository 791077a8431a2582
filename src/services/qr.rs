//! QR code rendering
//!
//! Encoding is done by the `qrcode` crate. This module picks colours for the
//! current theme, prints terminal QR codes and writes SVG files with an
//! optional centred logo. A logo that cannot be read falls back to a plain
//! code.

use std::path::Path;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use colored::Colorize;
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use regex::Regex;
use tracing::{debug, warn};

use super::theme::Theme;
use crate::config::QrConfig;
use crate::errors::{LinkfrontError, Result};

/// Side of the QR for a shortened link.
pub const SHORT_QR_SIZE: u32 = 400;
/// Side of the QR for an original URL preview.
pub const ORIGINAL_QR_SIZE: u32 = 2400;

/// Logo side relative to the QR side.
const LOGO_RATIO: f64 = 0.2;
/// Blank margin around the logo, in pixels at 400px.
const LOGO_MARGIN: f64 = 20.0;

static SVG_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<svg[^>]*\swidth="(\d+)""#).expect("width pattern is valid"));

/// Dot and background colours for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPalette {
    pub dot: String,
    pub background: String,
}

impl QrPalette {
    /// Dot colour as RGB, `None` when it is not a hex colour.
    pub fn dot_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.dot)
    }

    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.background)
    }
}

/// A rendered SVG document.
#[derive(Debug, Clone)]
pub struct SvgQr {
    pub svg: String,
    pub with_logo: bool,
}

struct Logo {
    mime: &'static str,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct QrRenderer {
    config: QrConfig,
}

impl QrRenderer {
    pub fn new(config: QrConfig) -> Self {
        Self { config }
    }

    pub fn palette(&self, theme: Theme) -> QrPalette {
        match theme {
            Theme::Light => QrPalette {
                dot: self.config.dot_color.clone(),
                background: self.config.background_color.clone(),
            },
            Theme::Dark => QrPalette {
                dot: self.config.dot_color_dark.clone(),
                background: self.config.background_color_dark.clone(),
            },
        }
    }

    /// Half-block rendering for the terminal, painted in the theme colours
    /// when the terminal supports them.
    pub fn render_terminal(&self, data: &str, theme: Theme) -> Result<String> {
        let plain = self.render_text(data)?;

        let palette = self.palette(theme);
        let (Some(fg), Some(bg)) = (palette.dot_rgb(), palette.background_rgb()) else {
            debug!("QR palette is not hex, printing without colours");
            return Ok(plain);
        };

        Ok(plain
            .lines()
            .map(|line| {
                line.truecolor(fg.0, fg.1, fg.2)
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Uncoloured half-block rendering, two modules per character row.
    pub fn render_text(&self, data: &str) -> Result<String> {
        let code = QrCode::new(data.as_bytes())?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Dark)
            .light_color(unicode::Dense1x2::Light)
            .quiet_zone(true)
            .build())
    }

    /// SVG of at least `size`×`size` pixels.
    pub fn render_svg(&self, data: &str, size: u32, theme: Theme) -> Result<SvgQr> {
        let palette = self.palette(theme);

        if let Some(logo_path) = self.config.logo_path.as_deref().filter(|p| !p.is_empty()) {
            match load_logo(Path::new(logo_path)) {
                Ok(logo) => {
                    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
                    let svg = build_svg(&code, size, &palette);
                    return Ok(SvgQr {
                        svg: embed_logo(&svg, &logo, &palette),
                        with_logo: true,
                    });
                }
                Err(e) => {
                    warn!("QR code generation failed, creating without logo: {}", e);
                }
            }
        }

        let code = QrCode::new(data.as_bytes())?;
        Ok(SvgQr {
            svg: build_svg(&code, size, &palette),
            with_logo: false,
        })
    }

    /// Render to `path` as SVG.
    pub fn write_svg<P: AsRef<Path>>(
        &self,
        path: P,
        data: &str,
        size: u32,
        theme: Theme,
    ) -> Result<SvgQr> {
        let rendered = self.render_svg(data, size, theme)?;
        std::fs::write(path.as_ref(), &rendered.svg).map_err(|e| {
            LinkfrontError::storage(format!(
                "Failed to write {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(rendered)
    }
}

fn build_svg(code: &QrCode, size: u32, palette: &QrPalette) -> String {
    code.render::<svg::Color>()
        .min_dimensions(size, size)
        .dark_color(svg::Color(palette.dot.as_str()))
        .light_color(svg::Color(palette.background.as_str()))
        .build()
}

fn load_logo(path: &Path) -> Result<Logo> {
    let bytes = std::fs::read(path).map_err(|e| {
        LinkfrontError::qr(format!("Cannot read logo {}: {}", path.display(), e))
    })?;
    let mime = sniff_image_type(&bytes).ok_or_else(|| {
        LinkfrontError::qr(format!("Unsupported logo format: {}", path.display()))
    })?;
    Ok(Logo { mime, bytes })
}

fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF8") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
        let head = head.trim_start();
        (head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")))
            .then_some("image/svg+xml")
    }
}

/// Centre the logo on a background-coloured pad just before `</svg>`.
fn embed_logo(svg: &str, logo: &Logo, palette: &QrPalette) -> String {
    let width = SVG_WIDTH
        .captures(svg)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    let (Some(width), Some(close)) = (width, svg.rfind("</svg>")) else {
        warn!("Unexpected SVG layout, skipping logo");
        return svg.to_string();
    };

    let logo_side = width * LOGO_RATIO;
    let margin = LOGO_MARGIN * width / f64::from(SHORT_QR_SIZE) * LOGO_RATIO;
    let pad_side = logo_side + 2.0 * margin;
    let pad_origin = (width - pad_side) / 2.0;
    let logo_origin = (width - logo_side) / 2.0;
    let data_uri = format!("data:{};base64,{}", logo.mime, STANDARD.encode(&logo.bytes));

    format!(
        concat!(
            "{head}",
            r#"<rect x="{px:.1}" y="{px:.1}" width="{ps:.1}" height="{ps:.1}" fill="{bg}"/>"#,
            r#"<image x="{lx:.1}" y="{lx:.1}" width="{ls:.1}" height="{ls:.1}" href="{uri}"/>"#,
            "{tail}"
        ),
        head = &svg[..close],
        px = pad_origin,
        ps = pad_side,
        bg = palette.background,
        lx = logo_origin,
        ls = logo_side,
        uri = data_uri,
        tail = &svg[close..],
    )
}

/// `#rrggbb` or `#rgb` to RGB.
fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}
