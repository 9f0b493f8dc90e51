//! HTML export: one self-contained landing page per theme.
//!
//! The page mirrors the live preview: a gradient hero with a badge, the
//! title and tagline, two call-to-action buttons, feature cards and the hero
//! photo, then an optional palette strip and footer. Everything is inline;
//! the only external reference besides the hero photo is the optional Google
//! Fonts stylesheet, and the layout does not depend on it.
//!
//! Markup goes through `maud`, which escapes every interpolated string.
//! The stylesheet is the one place raw text is emitted, so it is assembled
//! from theme values only and each value is passed through [`css_value`].

use std::fmt::Write;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use tracing::trace;
use vibe_theme::Theme;

use crate::options::ExportOptions;

/// Page rules. Colors and fonts come in through the `:root` variables.
const PAGE_CSS: &str = "\
*{box-sizing:border-box}\
body{margin:0;background:var(--bg);color:var(--text);font-family:var(--font-sans);line-height:1.5}\
.hero{background:var(--pattern),var(--bg)}\
.wrap{max-width:960px;margin:0 auto;padding:48px 28px}\
.badge{display:inline-flex;align-items:center;gap:8px;margin-bottom:12px;padding:6px 12px;\
border:1px solid rgba(255,255,255,0.2);border-radius:999px;font-size:13px}\
.dot{width:10px;height:10px;border-radius:999px;background:var(--primary);\
box-shadow:0 0 24px rgba(255,255,255,0.35)}\
h1{margin:0;font-size:40px;line-height:1.1;font-family:var(--font-serif)}\
.tagline{margin-top:10px;color:var(--muted);max-width:640px}\
.actions{display:flex;gap:10px;margin-top:16px;flex-wrap:wrap}\
.btn{display:inline-block;padding:10px 18px;border-radius:10px;border:1px solid transparent;\
background:var(--primary);color:var(--on-primary);font-weight:600;text-decoration:none}\
.btn.secondary{background:transparent;color:var(--text);border-color:var(--accent)}\
.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:12px;margin-top:24px}\
.card{background:var(--card);border:1px solid rgba(255,255,255,0.08);border-radius:14px;padding:16px}\
.card-title{font-weight:700}\
.card-body{color:var(--muted);font-size:14px;margin-top:6px}\
.hero-image{position:relative;height:280px;margin-top:28px;overflow:hidden;border-radius:16px}\
.hero-image img{display:block;width:100%;height:100%;object-fit:cover}\
.palette{display:flex;gap:8px;margin-top:24px}\
.swatch{flex:1;font-size:11px;color:var(--muted)}\
.chip{height:42px;margin-bottom:6px;border-radius:10px;border:1px solid rgba(255,255,255,0.2)}\
footer{padding:24px 28px;text-align:center;color:var(--muted);font-size:12px}";

/// Render `theme` as a standalone HTML document with default options.
#[must_use]
pub fn render_export_html(theme: &Theme) -> String {
    render_export_html_with(theme, &ExportOptions::default())
}

/// Render `theme` as a standalone HTML document.
#[must_use]
pub fn render_export_html_with(theme: &Theme, opts: &ExportOptions) -> String {
    let html = page(theme, opts).into_string();
    trace!(seed = theme.seed, bytes = html.len(), "rendered export");
    html
}

fn page(theme: &Theme, opts: &ExportOptions) -> Markup {
    let display_name = theme.display_name();
    let fonts_url = opts.load_fonts.then(|| theme.typography.google_fonts_url());

    html! {
        (DOCTYPE)
        html lang=(opts.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (display_name) " · " (theme.title) }
                @if let Some(url) = &fonts_url {
                    link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                    link rel="stylesheet" href=(url);
                }
                style { (PreEscaped(stylesheet(theme))) }
            }
            body {
                main.hero {
                    div.wrap {
                        div.badge {
                            span.dot {}
                            span { "Vibe: " (theme.name) }
                        }
                        h1 { (theme.title) }
                        p.tagline { (theme.tagline) }
                        div.actions {
                            a.btn href="#" { (opts.primary_cta) }
                            a.btn.secondary href="#" { (opts.secondary_cta) }
                        }
                        @if !opts.features.is_empty() {
                            div.features {
                                @for card in &opts.features {
                                    div.card {
                                        div.card-title { (card.title) }
                                        div.card-body { (card.body) }
                                    }
                                }
                            }
                        }
                        div.hero-image {
                            img src=(theme.hero_image) alt=(opts.hero_alt) loading="eager";
                        }
                        @if opts.show_palette {
                            div.palette {
                                @for (label, color) in theme.swatches() {
                                    @let hex = color.to_hex();
                                    div.swatch {
                                        div.chip style={ "background:" (hex) } {}
                                        (label) ": " (hex)
                                    }
                                }
                            }
                        }
                    }
                }
                @if opts.show_footer {
                    footer { "Generated with Vibe Rocket · Seed " (theme.seed) }
                }
            }
        }
    }
}

/// The inline stylesheet: `:root` variables followed by the page rules.
fn stylesheet(theme: &Theme) -> String {
    let mut css = String::with_capacity(PAGE_CSS.len() + 512);
    css.push_str(":root{");
    for (name, value) in theme.css_variables() {
        // Writing to a String cannot fail.
        let _ = write!(css, "{name}: {};", css_value(&value));
    }
    css.push('}');
    css.push_str(PAGE_CSS);
    css
}

/// Make a declaration value safe to place inside `<style>`.
///
/// `{`, `}` and `;` would end the declaration or rule and are dropped. `<`
/// is written as the CSS escape `\3c ` so the text can never close the
/// style element, whatever a theme's fields were set to.
fn css_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '{' | '}' | ';' => {}
            '<' => out.push_str("\\3c "),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
