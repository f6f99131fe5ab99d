use super::*;
use crate::odp::content_xml_for_tests;
use crate::theme;
use crate::utils::wrap_text;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[test]
fn test_wrap_text_short_note_is_one_line() {
    let lines = wrap_text("Short note.", 100);
    assert_eq!(lines, vec!["Short note.".to_string()]);
}

#[test]
fn test_wrap_text_respects_width() {
    let text = "one two three four five six seven eight nine ten";
    let lines = wrap_text(text, 12);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.len() <= 12, "line too long: {:?}", line);
    }
}

#[test]
fn test_wrap_text_roundtrip_normalizes_whitespace() {
    let text = "The  quick brown\nfox jumps   over the lazy dog and keeps on running forever.";
    let lines = wrap_text(text, 20);
    let rejoined = lines.join(" ");
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(rejoined, normalized);
}

#[test]
fn test_wrap_text_overlong_word_gets_own_line() {
    let lines = wrap_text("ok supercalifragilisticexpialidocious ok", 10);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "supercalifragilisticexpialidocious");
}

#[test]
fn test_code_classification_commands() {
    assert!(theme::is_code_line("podman run --rm alpine echo hello"));
    assert!(theme::is_code_line("systemctl --user daemon-reload"));
    assert!(theme::is_code_line("mkdir -p ~/course_podman-labs"));
    assert!(theme::is_code_line("FROM python:3.13-alpine"));
    assert!(theme::is_code_line("[Unit]      Description=My App"));
    assert!(theme::is_code_line("Image=docker.io/library/nginx:stable"));
}

#[test]
fn test_code_classification_ignores_leading_whitespace() {
    assert!(theme::is_code_line("    podman rm scratch"));
}

#[test]
fn test_code_classification_prose() {
    assert!(!theme::is_code_line("Checkpoint: 'podman info' runs without errors"));
    assert!(!theme::is_code_line("Rule: rootless by default"));
    assert!(!theme::is_code_line("YES:  Secrets, volumes, networking"));
}

#[test]
fn test_flag_marker_always_classifies_as_code() {
    // Heuristic quirk kept on purpose: any line starting with the generic
    // flag marker counts as code, even prose.
    assert!(theme::is_code_line("--this is actually a sentence"));
}

#[test]
fn test_kind_layout_mapping() {
    assert!(SlideKind::Title.is_headline());
    assert!(SlideKind::Section.is_headline());
    assert!(!SlideKind::Lab.is_headline());
    assert!(!SlideKind::Content.is_headline());

    assert!(SlideKind::Lab.has_body());
    assert!(SlideKind::Content.has_body());
    assert!(!SlideKind::Title.has_body());
}

#[test]
fn test_kind_background_mapping() {
    assert_eq!(theme::background_style(SlideKind::Title), theme::BG_DARK_STYLE);
    assert_eq!(theme::background_style(SlideKind::Content), theme::BG_DARK_STYLE);
    assert_eq!(theme::background_style(SlideKind::Section), theme::BG_SECTION_STYLE);
    assert_eq!(theme::background_style(SlideKind::Lab), theme::BG_LAB_STYLE);
}

#[test]
fn test_group_by_module_preserves_first_seen_order() {
    let slides = vec![
        Slide::content("b", "B1", &[]),
        Slide::content("a", "A1", &[]),
        Slide::content("b", "B2", &[]),
        Slide::content("c", "C1", &[]),
    ];
    let modules = group_by_module(&slides);

    let keys: Vec<&str> = modules.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);

    let b_titles: Vec<&str> = modules[0].1.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(b_titles, vec!["B1", "B2"]);
}

#[test]
fn test_headline_page_has_subtitle_and_no_body() {
    let slides = vec![Slide::section("m", "Module 00", "Setup   (30-60 min)")];
    let xml = content_xml_for_tests(&slides);

    assert_eq!(count(&xml, r#"presentation:class="subtitle""#), 1);
    assert_eq!(count(&xml, r#"presentation:class="body""#), 0);
    assert!(xml.contains("Setup   (30-60 min)"));
}

#[test]
fn test_headline_page_omits_empty_subtitle() {
    let slides = vec![Slide::section("m", "Module 00", "")];
    let xml = content_xml_for_tests(&slides);

    assert_eq!(count(&xml, r#"presentation:class="subtitle""#), 0);
}

#[test]
fn test_content_page_has_body_and_no_subtitle() {
    let slides = vec![Slide::content("m", "Tags vs Digests", &["one", "two", "three"])];
    let xml = content_xml_for_tests(&slides);

    assert_eq!(count(&xml, r#"presentation:class="body""#), 1);
    assert_eq!(count(&xml, r#"presentation:class="subtitle""#), 0);

    // Three bullet paragraphs, in input order
    let body_start = xml.find(r#"presentation:class="body""#).unwrap();
    let one = xml[body_start..].find(">one<").unwrap();
    let two = xml[body_start..].find(">two<").unwrap();
    let three = xml[body_start..].find(">three<").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn test_lab_slide_example() {
    // The worked example from the rendering contract: lab background, small
    // top title, one code bullet, one prose bullet, one wrapped notes line.
    let slides = vec![
        Slide::lab("m", "Lab 00", &["mkdir foo", "Checkpoint: ok"]).notes("Short note."),
    ];
    let xml = content_xml_for_tests(&slides);

    assert!(xml.contains(&format!(r#"draw:style-name="{}""#, theme::BG_LAB_STYLE)));
    assert!(xml.contains(&format!(
        r#"svg:y="{}""#,
        theme::cm(theme::BODY_TITLE_TOP)
    )));
    assert!(xml.contains(&format!(
        r#"<text:span text:style-name="{}">mkdir foo</text:span>"#,
        theme::CODE_TEXT
    )));
    assert!(xml.contains(&format!(
        r#"<text:span text:style-name="{}">Checkpoint: ok</text:span>"#,
        theme::BULLET_TEXT
    )));
    assert_eq!(count(&xml, "<presentation:notes>"), 1);
    assert!(xml.contains(&format!(
        r#"<text:span text:style-name="{}">Short note.</text:span>"#,
        theme::NOTES_TEXT_STYLE
    )));
}

#[test]
fn test_notes_absent_when_empty() {
    let slides = vec![
        Slide::content("m", "No notes at all", &["x"]),
        Slide::content("m", "Empty notes", &["y"]).notes(""),
    ];
    let xml = content_xml_for_tests(&slides);

    assert_eq!(count(&xml, "<presentation:notes>"), 0);
    assert_eq!(count(&xml, r#"presentation:class="page""#), 0);
    assert_eq!(count(&xml, r#"presentation:class="notes""#), 0);
}

#[test]
fn test_every_page_gets_exactly_one_footer() {
    let slides = vec![
        Slide::title_slide("m", "T", "S"),
        Slide::section("m", "M", "S"),
        Slide::lab("m", "L", &["x"]),
        Slide::content("m", "C", &["y"]),
    ];
    let xml = content_xml_for_tests(&slides);

    assert_eq!(count(&xml, "<draw:page "), 4);
    assert_eq!(count(&xml, theme::FOOTER_TEXT), 4);
}

#[test]
fn test_special_characters_are_escaped() {
    let slides = vec![Slide::content("m", "A & B <C>", &["echo \"hi\" > /tmp/x && exit"])];
    let xml = content_xml_for_tests(&slides);

    assert!(xml.contains("A &amp; B &lt;C&gt;"));
    assert!(xml.contains("&amp;&amp; exit"));
    assert!(!xml.contains("A & B <C>"));
}

#[test]
fn test_course_deck_starts_with_title_slide() {
    let slides = course_slides();
    assert!(!slides.is_empty());
    assert_eq!(slides[0].kind, SlideKind::Title);

    // Every headline slide carries a subtitle; every body slide has bullets
    for slide in &slides {
        if slide.kind.is_headline() {
            assert!(slide.subtitle.is_some(), "headline without subtitle: {}", slide.title);
        } else {
            assert!(!slide.bullets.is_empty(), "body slide without bullets: {}", slide.title);
        }
    }
}
