//! Post PDFs rendered with `printpdf` using the built-in Helvetica faces.

use printpdf::image_crate::{self, DynamicImage};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use quill_core::domain::{Author, BlogPost};
use quill_core::ports::{PdfRenderer, RenderError};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;

const TITLE_SIZE: f32 = 18.0;
const CATEGORY_SIZE: f32 = 15.0;
const BODY_SIZE: f32 = 12.0;

/// Characters per body line; Helvetica at 12pt averages a little over 2mm a glyph.
const BODY_WRAP: usize = 80;

/// Cover box: 450pt wide, centred above the title.
const COVER_MAX_WIDTH: f32 = 158.75;
const COVER_MAX_HEIGHT: f32 = 110.0;

fn line_height(font_size: f32) -> f32 {
    font_size * 0.3528 * 1.4
}

#[derive(Debug, Default)]
pub struct PrintPdfRenderer;

/// Tracks the current layer and the pen's vertical position, adding pages as needed.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor<'_> {
    fn write(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let step = line_height(size);
        if self.y - step < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= step;
        self.layer
            .use_text(text, size, Mm(MARGIN), Mm(self.y), font);
    }

    fn gap(&mut self, size: f32) {
        self.y -= line_height(size);
    }

    /// Scale the image into the cover box and centre it below the pen.
    fn cover(&mut self, image: &DynamicImage) {
        let rgb = image.to_rgb8();
        let (px_width, px_height) = rgb.dimensions();
        if px_width == 0 || px_height == 0 {
            return;
        }

        let mm_per_px = (COVER_MAX_WIDTH / px_width as f32).min(COVER_MAX_HEIGHT / px_height as f32);
        let width = px_width as f32 * mm_per_px;
        self.y -= px_height as f32 * mm_per_px;

        Image::from_dynamic_image(&DynamicImage::ImageRgb8(rgb)).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH - width) / 2.0)),
                translate_y: Some(Mm(self.y)),
                dpi: Some(25.4 / mm_per_px),
                ..Default::default()
            },
        );
        self.gap(BODY_SIZE);
    }
}

impl PdfRenderer for PrintPdfRenderer {
    fn render_post(
        &self,
        post: &BlogPost,
        author: Option<&Author>,
        cover: Option<&[u8]>,
    ) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(&post.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(format!("{e:?}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(format!("{e:?}")))?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        };

        if let Some(bytes) = cover {
            match image_crate::load_from_memory(bytes) {
                Ok(image) => cursor.cover(&image),
                Err(e) => tracing::warn!(post_id = %post.id, error = %e, "Skipping undecodable cover"),
            }
        }

        for line in wrap(&post.title, 50) {
            cursor.write(&line, TITLE_SIZE, &bold);
        }
        cursor.gap(TITLE_SIZE);
        cursor.write(&post.category, CATEGORY_SIZE, &bold);
        cursor.gap(CATEGORY_SIZE);
        cursor.write(&byline(post, author), BODY_SIZE, &regular);
        cursor.gap(BODY_SIZE);

        for paragraph in strip_html(&post.content).split('\n') {
            for line in wrap(paragraph, BODY_WRAP) {
                cursor.write(&line, BODY_SIZE, &regular);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(format!("{e:?}")))
    }
}

fn byline(post: &BlogPost, author: Option<&Author>) -> String {
    match author {
        Some(author) => format!("By {} {}", author.name, author.surname),
        None => post.author.name.clone(),
    }
}

/// Drop markup, turning block ends and `<br>` into line breaks.
pub(crate) fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                let closing = tag.starts_with('/');
                let breaks = name == "br"
                    || (closing && matches!(name.as_str(), "p" | "div" | "li" | "h1" | "h2" | "h3"));
                if breaks && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            _ if in_tag => tag.push(ch),
            _ => text.push(ch),
        }
    }

    decode_entities(text.trim())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
