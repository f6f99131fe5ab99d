// ABOUTME: ODP generation module for the deckgen application
// ABOUTME: Renders slide records into OpenDocument Presentation packages

use crate::deck::Slide;
use crate::errors::Result;
use crate::theme::{self, cm};
use crate::utils;
use log::info;
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

const ODP_MIMETYPE: &str = "application/vnd.oasis.opendocument.presentation";

const CONTENT_NS: &str = concat!(
    r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
    r#"xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" "#,
    r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" "#,
    r#"xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" "#,
    r#"xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0" "#,
    r#"xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" "#,
    r#"xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" "#,
    r#"xmlns:xlink="http://www.w3.org/1999/xlink""#
);

/// Writer for the ODF zip container.
///
/// Handles the packaging rules the format imposes: the `mimetype` entry is
/// the first entry in the archive and is stored uncompressed, and every part
/// is listed in `META-INF/manifest.xml`. The zip crate's default file options
/// carry a fixed timestamp, so repeated runs produce byte-identical output.
struct OdpPackage<W: Write + Seek> {
    zip: ZipWriter<W>,
    manifest: Vec<(String, &'static str)>,
}

impl<W: Write + Seek> OdpPackage<W> {
    fn new(writer: W) -> Result<Self> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file("mimetype", options)?;
        zip.write_all(ODP_MIMETYPE.as_bytes())?;
        Ok(Self {
            zip,
            manifest: vec![("/".to_string(), ODP_MIMETYPE)],
        })
    }

    fn add_part(&mut self, path: &str, content: &str) -> Result<()> {
        self.manifest.push((path.to_string(), "text/xml"));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        let mut manifest = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
"#,
        );
        for (full_path, media_type) in &self.manifest {
            manifest.push_str(&format!(
                "  <manifest:file-entry manifest:full-path=\"{}\" manifest:media-type=\"{}\"/>\n",
                escape(full_path),
                media_type
            ));
        }
        manifest.push_str("</manifest:manifest>\n");

        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file("META-INF/manifest.xml", options)?;
        self.zip.write_all(manifest.as_bytes())?;
        self.zip.finish()?;
        Ok(())
    }
}

/// Render a sequence of slide records into one self-contained .odp artifact.
///
/// Produces one page per record, in input order. Creates the output file's
/// parent directory if absent and overwrites any existing file at the path.
/// Prints a one-line summary on completion.
pub fn render_deck(slides: &[Slide], output_file: &Path) -> Result<()> {
    info!("Rendering {} slides to {:?}", slides.len(), output_file);

    utils::ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file)?;
    let mut package = OdpPackage::new(file)?;

    info!("Creating ODP part: content.xml");
    package.add_part("content.xml", &content_xml(slides))?;
    info!("Creating ODP part: styles.xml");
    package.add_part("styles.xml", &styles_xml())?;
    info!("Creating ODP part: meta.xml");
    package.add_part("meta.xml", &meta_xml())?;
    package.finish()?;

    info!("ODP file created at {:?}", output_file);
    println!("Saved {}  ({} slides)", output_file.display(), slides.len());
    Ok(())
}

/// The styles part: page layout and the "Dark" master page.
fn styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles {ns} office:version="1.2">
  <office:automatic-styles>
    <style:page-layout style:name="widescreen">
      <style:page-layout-properties fo:margin="0cm" fo:page-width="{w}" fo:page-height="{h}" style:print-orientation="landscape"/>
    </style:page-layout>
  </office:automatic-styles>
  <office:master-styles>
    <style:master-page style:name="Dark" style:page-layout-name="widescreen"/>
  </office:master-styles>
</office:document-styles>
"#,
        ns = CONTENT_NS,
        w = cm(theme::SLIDE_W),
        h = cm(theme::SLIDE_H),
    )
}

/// The meta part. Deliberately carries no dates: artifacts must be
/// byte-for-byte identical across runs.
fn meta_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" office:version="1.2">
  <office:meta>
    <meta:generator>deckgen/{}</meta:generator>
  </office:meta>
</office:document-meta>
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Automatic styles emitted into content.xml: text styles, one drawing-page
/// style per background, and the shared borderless frame style.
fn automatic_styles() -> String {
    let mut xml = String::new();

    for ts in theme::text_styles() {
        xml.push_str(&format!(
            r#"<style:style style:name="{}" style:family="text"><style:text-properties fo:font-size="{}""#,
            ts.name, ts.size
        ));
        if ts.bold {
            xml.push_str(r#" fo:font-weight="bold""#);
        }
        xml.push_str(&format!(r#" fo:color="{}""#, ts.color));
        if let Some(family) = ts.font_family {
            xml.push_str(&format!(r#" fo:font-family="{}""#, family));
        }
        xml.push_str("/></style:style>");
    }

    for (name, fill_color) in theme::page_styles() {
        xml.push_str(&format!(
            r#"<style:style style:name="{}" style:family="drawing-page"><style:drawing-page-properties draw:fill="solid" draw:fill-color="{}" draw:background-size="border"/></style:style>"#,
            name, fill_color
        ));
    }

    xml.push_str(&format!(
        r#"<style:style style:name="{}" style:family="graphic"><style:graphic-properties draw:stroke="none" draw:fill="none"/></style:style>"#,
        theme::PLAIN_BOX
    ));

    xml
}

/// One text frame: a positioned box holding one paragraph per (style, text)
/// pair. `class` becomes the frame's presentation:class attribute.
fn text_frame(
    class: Option<&str>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    paragraphs: &[(&str, &str)],
) -> String {
    let mut xml = format!(
        r#"<draw:frame draw:style-name="{}""#,
        theme::PLAIN_BOX
    );
    if let Some(class) = class {
        xml.push_str(&format!(r#" presentation:class="{}""#, class));
    }
    xml.push_str(&format!(
        r#" svg:width="{}" svg:height="{}" svg:x="{}" svg:y="{}"><draw:text-box>"#,
        cm(width),
        cm(height),
        cm(x),
        cm(y)
    ));
    for (style, text) in paragraphs {
        xml.push_str(&format!(
            r#"<text:p><text:span text:style-name="{}">{}</text:span></text:p>"#,
            style,
            escape(text)
        ));
    }
    xml.push_str("</draw:text-box></draw:frame>");
    xml
}

/// One draw:page for a slide record. Pages carry no name attribute, so a
/// slide renders to identical markup whether it lands in a module artifact
/// or the combined deck.
fn page_xml(slide: &Slide) -> String {
    let mut xml = format!(
        r#"<draw:page draw:style-name="{}" draw:master-page-name="Dark">"#,
        theme::background_style(slide.kind)
    );

    // Title frame
    let (title_top, title_h) = theme::title_geometry(slide.kind);
    xml.push_str(&text_frame(
        Some("title"),
        theme::FRAME_X,
        title_top,
        theme::FRAME_W,
        title_h,
        &[(theme::title_text_style(slide.kind), slide.title.as_str())],
    ));

    // Subtitle frame, headline slides only
    if slide.kind.is_headline() {
        if let Some(subtitle) = slide.subtitle.as_deref().filter(|s| !s.is_empty()) {
            let subtitle_top = title_top + title_h + theme::SUBTITLE_GAP;
            xml.push_str(&text_frame(
                Some("subtitle"),
                theme::FRAME_X,
                subtitle_top,
                theme::FRAME_W,
                theme::SUBTITLE_H,
                &[(theme::SUBTITLE_TEXT, subtitle)],
            ));
        }
    }

    // Body frame with classified bullets
    if slide.kind.has_body() {
        let paragraphs: Vec<(&str, &str)> = slide
            .bullets
            .iter()
            .map(|line| (theme::bullet_text_style(line), line.as_str()))
            .collect();
        xml.push_str(&text_frame(
            Some("body"),
            theme::FRAME_X,
            theme::BODY_TOP,
            theme::FRAME_W,
            theme::BODY_H,
            &paragraphs,
        ));
    }

    // Presenter notes: a thumbnail placeholder frame plus the wrapped notes
    // text. The placeholder is required for the notes pane to be visible in
    // LibreOffice Impress. Absent notes emit neither.
    if let Some(notes) = slide.notes.as_deref().filter(|n| !n.is_empty()) {
        xml.push_str("<presentation:notes>");

        let (tx, ty, tw, th) = theme::NOTES_THUMB_BOX;
        xml.push_str(&format!(
            r#"<draw:frame draw:style-name="{}" presentation:class="page" svg:width="{}" svg:height="{}" svg:x="{}" svg:y="{}"/>"#,
            theme::PLAIN_BOX,
            cm(tw),
            cm(th),
            cm(tx),
            cm(ty)
        ));

        let wrapped = utils::wrap_text(notes, theme::NOTES_WRAP_WIDTH);
        let paragraphs: Vec<(&str, &str)> = wrapped
            .iter()
            .map(|line| (theme::NOTES_TEXT_STYLE, line.as_str()))
            .collect();
        let (nx, ny, nw, nh) = theme::NOTES_TEXT_BOX;
        xml.push_str(&text_frame(Some("notes"), nx, ny, nw, nh, &paragraphs));

        xml.push_str("</presentation:notes>");
    }

    // Footer: constant attribution line on every page
    xml.push_str(&text_frame(
        None,
        theme::FRAME_X,
        theme::FOOTER_TOP,
        theme::FRAME_W,
        theme::FOOTER_H,
        &[(theme::FOOTER_TEXT_STYLE, theme::FOOTER_TEXT)],
    ));

    xml.push_str("</draw:page>");
    xml
}

/// The content part: automatic styles plus one page per slide, in order.
fn content_xml(slides: &[Slide]) -> String {
    let mut body = String::new();
    for slide in slides {
        body.push_str(&page_xml(slide));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content {ns} office:version="1.2"><office:automatic-styles>{styles}</office:automatic-styles><office:body><office:presentation>{body}</office:presentation></office:body></office:document-content>
"#,
        ns = CONTENT_NS,
        styles = automatic_styles(),
        body = body,
    )
}

#[cfg(test)]
pub(crate) fn content_xml_for_tests(slides: &[Slide]) -> String {
    content_xml(slides)
}
