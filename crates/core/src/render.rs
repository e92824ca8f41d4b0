//! Read-only HTML rendering of a work body for the public work page.

use std::fmt::Write;

use crate::blocks::{BlockKind, ContentBlock, ContentBlocks};
use crate::layout::{self, LayoutDescriptor, MediaKind};
use crate::video::VideoSource;

/// Image shown for an unfilled image slot.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.svg";

/// Escape a string for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render every block in order.
pub fn render_blocks(blocks: &ContentBlocks) -> String {
    let mut html = String::new();
    for block in blocks {
        render_block(&mut html, block);
    }
    html
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block.kind {
        // Text is the editor's HTML output and is trusted as-is.
        BlockKind::Text => {
            let _ = write!(out, r#"<div class="content-text">{}</div>"#, block.content);
        }
        BlockKind::Image | BlockKind::Video => {
            let layout = layout::resolve(block.layout.as_deref());
            render_media(out, block, layout);
        }
    }
}

fn render_media(out: &mut String, block: &ContentBlock, layout: &LayoutDescriptor) {
    let sources = block.media_sources();
    let is_video = block.kind == BlockKind::Video || layout.media_kind == MediaKind::Video;

    let _ = write!(
        out,
        r#"<div class="{}" data-layout="{}">"#,
        escape_attr(layout.container_class),
        escape_attr(layout.id)
    );

    if layout.column_classes.is_empty() {
        // Single-slot layouts still show every stored URL.
        let slots = sources.len().max(1);
        for i in 0..slots {
            render_item(out, sources.get(i).copied(), i, layout, is_video);
        }
    } else {
        let slots = sources.len().max(layout.columns);
        for i in 0..slots {
            let column = layout.column_classes.get(i).copied().unwrap_or("w-full");
            let _ = write!(out, r#"<div class="{}">"#, escape_attr(column));
            render_item(out, sources.get(i).copied(), i, layout, is_video);
            out.push_str("</div>");
        }
    }

    out.push_str("</div>");
}

fn render_item(
    out: &mut String,
    src: Option<&str>,
    index: usize,
    layout: &LayoutDescriptor,
    is_video: bool,
) {
    if is_video {
        let Some(src) = src else {
            return;
        };
        let source = VideoSource::parse(src);
        if source.is_embedded() {
            let _ = write!(
                out,
                r#"<iframe src="{}" class="{}" title="Video {}" allowfullscreen></iframe>"#,
                escape_attr(&source.embed_url()),
                escape_attr(layout.media_class),
                index + 1
            );
        } else {
            let _ = write!(
                out,
                r#"<video src="{}" class="{}" controls></video>"#,
                escape_attr(&source.embed_url()),
                escape_attr(layout.media_class)
            );
        }
    } else {
        let _ = write!(
            out,
            r#"<img src="{}" class="{}" alt="Image {}">"#,
            escape_attr(src.unwrap_or(PLACEHOLDER_IMAGE)),
            escape_attr(layout.media_class),
            index + 1
        );
    }
}
