//! End-to-end tests over real PDF bytes.
//!
//! Fixtures are generated with lopdf's document builder: one `Tj` per page
//! in a standard Type1 font, so extraction is predictable.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object, Stream};
use pdf_window::{
    process_bytes, process_document, process_path, render_failure, Document, Error, PipelineConfig,
};

// =============================================================================
// Fixtures
// =============================================================================

/// Operations that show `text` in the fixture font.
fn text_operations(text: &str) -> Vec<Operation> {
    if text.is_empty() {
        return vec![];
    }
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("Td", vec![40.into(), 800.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Operations whose `Tf` names no font, which text extraction rejects.
fn undecodable_operations(text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![10.into(), 10.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Build a PDF with one page per entry; empty entries produce text-free pages.
fn build_pdf(pages: &[String]) -> Vec<u8> {
    build_pdf_from_operations(pages.iter().map(|text| text_operations(text)).collect())
}

fn build_pdf_from_operations(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// `total` numbered sentences spread over pages of `per_page`.
fn numbered_pages(total: usize, per_page: usize) -> Vec<String> {
    let sentences: Vec<String> = (1..=total).map(|i| format!("Sentence {i}.")).collect();
    sentences.chunks(per_page).map(|page| page.join(" ")).collect()
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn extracts_every_page_in_order() {
    let bytes = build_pdf(&["First page here.".into(), "Second page here.".into()]);
    let doc = Document::from_bytes(&bytes).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages()[0].contains("First page here."));
    assert!(doc.pages()[1].contains("Second page here."));

    let first = doc.full_text().find("First").unwrap();
    let second = doc.full_text().find("Second").unwrap();
    assert!(first < second);
}

#[test]
fn text_free_page_contributes_nothing() {
    let bytes = build_pdf(&["Before.".into(), String::new(), "After.".into()]);
    let doc = Document::from_bytes(&bytes).unwrap();

    assert_eq!(doc.page_count(), 3);
    assert!(doc.pages()[1].trim().is_empty());
    assert!(doc.full_text().starts_with("Before."));
    assert!(doc.full_text().ends_with("After."));
}

#[test]
fn undecodable_page_keeps_the_others() {
    let bytes = build_pdf_from_operations(vec![
        text_operations("Kept before."),
        undecodable_operations("Lost middle."),
        text_operations("Kept after."),
    ]);
    let doc = Document::from_bytes(&bytes).unwrap();

    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.pages()[1], "");
    assert!(doc.pages()[0].contains("Kept before."));
    assert!(doc.pages()[2].contains("Kept after."));
    assert!(!doc.full_text().contains("Lost middle."));
    assert!(doc.full_text().starts_with("Kept before."));
    assert!(doc.full_text().ends_with("Kept after."));
}

#[test]
fn full_text_is_trimmed() {
    let bytes = build_pdf(&["Only page.".into()]);
    let doc = Document::from_bytes(&bytes).unwrap();
    assert_eq!(doc.full_text(), doc.full_text().trim());
    assert_eq!(doc.char_count(), doc.full_text().chars().count());
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn seventy_sentence_pdf() {
    let bytes = build_pdf(&numbered_pages(70, 10));
    let report = process_bytes(&bytes, &PipelineConfig::default()).unwrap();

    assert_eq!(report.page_count, 7);
    assert_eq!(report.sentence_count, 70);
    assert_eq!(report.window.len(), 11);
    assert_eq!(report.window[0].text, "Sentence 59.");
    assert_eq!(report.window[10].text, "Sentence 69.");
    assert_eq!(report.chunks.len(), 11);

    let md = report.render_markdown();
    assert!(md.contains("Number of pages: **7**"));
    assert!(md.contains("**[58]** Sentence 59."));
    assert!(md.contains("**[68]** Sentence 69."));
    assert!(md.contains("- **Chunk 11:** Sentence 69."));
}

#[test]
fn blank_pdf_is_empty_text() {
    let bytes = build_pdf(&[String::new(), String::new()]);
    let err = process_bytes(&bytes, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyText { page_count: 2 }));
}

#[test]
fn short_pdf_is_insufficient() {
    let bytes = build_pdf(&numbered_pages(30, 10));
    let err = process_bytes(&bytes, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { found: 30, .. }));
}

#[test]
fn short_pdf_failure_view_keeps_basic_info() {
    let bytes = build_pdf(&numbered_pages(30, 10));
    let document = Document::from_bytes(&bytes).unwrap();
    let err = process_document(&document, &PipelineConfig::default()).unwrap_err();
    let md = render_failure(&document, &err);

    assert!(md.contains("Number of pages: **3**"));
    assert!(md.contains(&format!(
        "Total characters extracted: **{}**",
        document.char_count()
    )));
    assert!(md.contains("Number of detected sentences: 30"));
    assert!(md.contains("this PDF has only 30 sentences"));
    assert!(md.contains("at least 59 sentences"));
}

#[test]
fn garbage_bytes_are_read_error() {
    let err = process_bytes(b"this is not a pdf", &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DocumentRead(_)));
    assert!(err.to_string().starts_with("error reading PDF"));
}

#[test]
fn process_path_reads_file() {
    let dir = std::env::temp_dir().join(format!("pdf-window-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("Sample.PDF");
    std::fs::write(&path, build_pdf(&numbered_pages(60, 20))).unwrap();

    let report = process_path(&path, &PipelineConfig::default().without_preview()).unwrap();
    assert_eq!(report.sentence_count, 60);
    assert_eq!(report.window.len(), 2);
    assert!(report.preview.is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}
