// ABOUTME: Visual theme for the deckgen application
// ABOUTME: Dark palette, slide geometry, named styles, and bullet classification

use crate::deck::SlideKind;

// Colour palette (dark theme)
pub const BG_DARK: &str = "#1a1a2e"; // default slide background
pub const BG_SECTION: &str = "#16213e"; // section title slide bg
pub const BG_LAB: &str = "#0f3460"; // lab/demo slide bg
pub const ACCENT: &str = "#e94560"; // headings accent
pub const TEXT_PRIMARY: &str = "#eaeaea"; // body text
pub const TEXT_DIM: &str = "#a0a0b0"; // secondary text / subtitle
pub const WHITE: &str = "#ffffff";
pub const NOTES_INK: &str = "#111111";

// Slide geometry, in centimetres
pub const SLIDE_W: f64 = 25.4;
pub const SLIDE_H: f64 = 14.29;
pub const FRAME_X: f64 = 1.0;
pub const FRAME_W: f64 = 23.4;

pub const HEADLINE_TITLE_TOP: f64 = 3.2;
pub const HEADLINE_TITLE_H: f64 = 4.0;
pub const BODY_TITLE_TOP: f64 = 0.8;
pub const BODY_TITLE_H: f64 = 2.0;
pub const SUBTITLE_GAP: f64 = 0.2;
pub const SUBTITLE_H: f64 = 1.6;
pub const BODY_TOP: f64 = 3.5;
pub const BODY_H: f64 = 10.0;
pub const FOOTER_TOP: f64 = 13.55;
pub const FOOTER_H: f64 = 0.6;

// Notes page geometry (portrait notes pane): (x, y, width, height)
pub const NOTES_THUMB_BOX: (f64, f64, f64, f64) = (2.06, 1.14, 17.0, 12.57);
pub const NOTES_TEXT_BOX: (f64, f64, f64, f64) = (2.06, 14.36, 17.0, 11.0);

/// Column width for word-wrapping presenter notes.
pub const NOTES_WRAP_WIDTH: usize = 100;

/// Attribution line placed at the bottom of every slide.
pub const FOOTER_TEXT: &str =
    "\u{a9} 2026 Jaco Steyn \u{2014} Licensed under CC BY-SA 4.0 \u{2014} Attribution Required";

/// Format a centimetre measurement the way it appears in the document XML.
pub fn cm(value: f64) -> String {
    format!("{:.2}cm", value)
}

/// A named automatic text style.
pub struct TextStyle {
    pub name: &'static str,
    pub size: &'static str,
    pub bold: bool,
    pub color: &'static str,
    pub font_family: Option<&'static str>,
}

pub const TITLE_TEXT: &str = "titleText";
pub const SUBTITLE_TEXT: &str = "subtitleText";
pub const HEADING_TEXT: &str = "headingText";
pub const BULLET_TEXT: &str = "bulletText";
pub const CODE_TEXT: &str = "codeText";
pub const NOTES_TEXT_STYLE: &str = "notesText";
pub const FOOTER_TEXT_STYLE: &str = "footerText";

pub const BG_DARK_STYLE: &str = "bgDark";
pub const BG_SECTION_STYLE: &str = "bgSection";
pub const BG_LAB_STYLE: &str = "bgLab";

/// Borderless, unfilled frame style shared by every text frame.
pub const PLAIN_BOX: &str = "plainBox";

/// The full table of automatic text styles emitted into content.xml.
pub fn text_styles() -> &'static [TextStyle] {
    &[
        TextStyle {
            name: TITLE_TEXT,
            size: "34pt",
            bold: true,
            color: WHITE,
            font_family: None,
        },
        TextStyle {
            name: SUBTITLE_TEXT,
            size: "18pt",
            bold: false,
            color: TEXT_DIM,
            font_family: None,
        },
        TextStyle {
            name: HEADING_TEXT,
            size: "26pt",
            bold: true,
            color: ACCENT,
            font_family: None,
        },
        TextStyle {
            name: BULLET_TEXT,
            size: "15pt",
            bold: false,
            color: TEXT_PRIMARY,
            font_family: None,
        },
        TextStyle {
            name: CODE_TEXT,
            size: "13pt",
            bold: false,
            color: ACCENT,
            font_family: Some("Liberation Mono"),
        },
        TextStyle {
            name: NOTES_TEXT_STYLE,
            size: "12pt",
            bold: false,
            color: NOTES_INK,
            font_family: None,
        },
        TextStyle {
            name: FOOTER_TEXT_STYLE,
            size: "14pt",
            bold: false,
            color: TEXT_DIM,
            font_family: None,
        },
    ]
}

/// Drawing-page styles: one solid background fill per slide kind.
pub fn page_styles() -> &'static [(&'static str, &'static str)] {
    &[
        (BG_DARK_STYLE, BG_DARK),
        (BG_SECTION_STYLE, BG_SECTION),
        (BG_LAB_STYLE, BG_LAB),
    ]
}

/// Background style name for a slide kind.
pub fn background_style(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Section => BG_SECTION_STYLE,
        SlideKind::Lab => BG_LAB_STYLE,
        SlideKind::Title | SlideKind::Content => BG_DARK_STYLE,
    }
}

/// Title frame placement for a slide kind: (top, height) in centimetres.
pub fn title_geometry(kind: SlideKind) -> (f64, f64) {
    if kind.is_headline() {
        (HEADLINE_TITLE_TOP, HEADLINE_TITLE_H)
    } else {
        (BODY_TITLE_TOP, BODY_TITLE_H)
    }
}

/// Text style used for the title frame of a slide kind.
pub fn title_text_style(kind: SlideKind) -> &'static str {
    if kind.is_headline() {
        TITLE_TEXT
    } else {
        HEADING_TEXT
    }
}

/// Prefixes that mark a bullet line as code-like. A line matches if its
/// left-trimmed text starts with any of these tokens. This is a styling
/// heuristic, not a parser: a prose line starting with `--` still counts
/// as code.
const CODE_PREFIXES: &[&str] = &[
    "podman ",
    "systemctl ",
    "journalctl ",
    "sudo ",
    "bash ",
    "cp ",
    "mkdir ",
    "cat ",
    "printf ",
    "grep ",
    "curl ",
    "chmod ",
    "read ",
    "uname ",
    "getenforce",
    "ip ",
    "[",
    "Image=",
    "FROM ",
    "RUN ",
    "COPY ",
    "USER ",
    "CMD ",
    "ENV ",
    "--",
    "-p ",
    "-v ",
    "-e ",
    "-d ",
];

/// Classify a bullet line as code-like or prose.
pub fn is_code_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    CODE_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Text style for a single bullet line.
pub fn bullet_text_style(line: &str) -> &'static str {
    if is_code_line(line) {
        CODE_TEXT
    } else {
        BULLET_TEXT
    }
}
