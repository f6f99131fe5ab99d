// ABOUTME: Slide data model for the deckgen application
// ABOUTME: Defines slide records, slide kinds, and module grouping

/// The closed set of slide categories. Each kind maps to exactly one
/// background style and one layout shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideKind {
    /// Opening slide of the deck: large mid-page title plus subtitle.
    Title,
    /// Section divider between modules: same layout as Title.
    Section,
    /// Hands-on lab slide: small top title plus bullet body.
    Lab,
    /// Regular content slide: small top title plus bullet body.
    #[default]
    Content,
}

impl SlideKind {
    /// Title and Section slides share the headline layout: a large title
    /// in the middle of the page, an optional subtitle, and no body frame.
    pub fn is_headline(self) -> bool {
        matches!(self, SlideKind::Title | SlideKind::Section)
    }

    /// Whether this kind carries a bullet body frame.
    pub fn has_body(self) -> bool {
        !self.is_headline()
    }
}

/// One slide record: the atomic input unit of the renderer.
///
/// Records are constructed once as a fixed literal sequence and never
/// mutated afterwards. `bullets` order is presentation order. An absent
/// `notes` value means no notes region is emitted at all.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Grouping key; insertion order across the deck determines the order
    /// of the per-module output artifacts.
    pub module: String,
    pub kind: SlideKind,
    pub title: String,
    /// Only meaningful for Title/Section slides.
    pub subtitle: Option<String>,
    /// Only meaningful for non-headline slides.
    pub bullets: Vec<String>,
    pub notes: Option<String>,
}

impl Slide {
    fn new(module: &str, kind: SlideKind, title: &str) -> Self {
        Self {
            module: module.to_string(),
            kind,
            title: title.to_string(),
            subtitle: None,
            bullets: Vec::new(),
            notes: None,
        }
    }

    /// The deck's opening slide.
    pub fn title_slide(module: &str, title: &str, subtitle: &str) -> Self {
        let mut slide = Self::new(module, SlideKind::Title, title);
        slide.subtitle = Some(subtitle.to_string());
        slide
    }

    /// A section divider slide.
    pub fn section(module: &str, title: &str, subtitle: &str) -> Self {
        let mut slide = Self::new(module, SlideKind::Section, title);
        slide.subtitle = Some(subtitle.to_string());
        slide
    }

    /// A regular content slide with bullets.
    pub fn content(module: &str, title: &str, bullets: &[&str]) -> Self {
        let mut slide = Self::new(module, SlideKind::Content, title);
        slide.bullets = bullets.iter().map(|b| b.to_string()).collect();
        slide
    }

    /// A lab slide with bullets.
    pub fn lab(module: &str, title: &str, bullets: &[&str]) -> Self {
        let mut slide = Self::new(module, SlideKind::Lab, title);
        slide.bullets = bullets.iter().map(|b| b.to_string()).collect();
        slide
    }

    /// Attach presenter notes to the slide.
    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Group slides into module buckets, preserving the order in which each
/// module first appears in the deck.
pub fn group_by_module(slides: &[Slide]) -> Vec<(String, Vec<Slide>)> {
    let mut modules: Vec<(String, Vec<Slide>)> = Vec::new();
    for slide in slides {
        match modules.iter_mut().find(|(key, _)| *key == slide.module) {
            Some((_, bucket)) => bucket.push(slide.clone()),
            None => modules.push((slide.module.clone(), vec![slide.clone()])),
        }
    }
    modules
}
