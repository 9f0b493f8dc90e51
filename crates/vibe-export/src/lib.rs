//! # vibe-export: a theme as a downloadable landing page
//!
//! Serializes a [`Theme`](vibe_theme::Theme) into one self-contained HTML
//! document that renders the same page as the live preview, and names the
//! file it should be saved under.
//!
//! ```text
//! Theme ──► html.rs      render_export_html(_with) ──► String
//!   │           ▲
//!   │       options.rs   ExportOptions (defaults or TOML)
//!   │
//!   └─────► filename.rs  export_filename ──► "Neon-Noir.html"
//! ```
//!
//! Rendering is pure: no file I/O, no network. Writing the bytes somewhere
//! is the host's job.

pub mod filename;
pub mod html;
pub mod options;

pub use filename::export_filename;
pub use html::{render_export_html, render_export_html_with};
pub use options::{ExportError, ExportOptions, FeatureCard};
