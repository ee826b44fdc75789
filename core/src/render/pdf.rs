//! Encode a `PageLayout` as a one-page PDF using the standard Helvetica fonts.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::layout::{FontFace, PageLayout, POINTS_PER_INCH};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

pub fn encode_pdf(page: &PageLayout) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let regular_id = Ref::new(4);
    let bold_id = Ref::new(5);
    let content_id = Ref::new(6);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut pdf_page = pdf.page(page_id);
    pdf_page.media_box(Rect::new(
        0.0,
        0.0,
        page.width * POINTS_PER_INCH,
        page.height * POINTS_PER_INCH,
    ));
    pdf_page.parent(page_tree_id);
    pdf_page.contents(content_id);
    let mut resources = pdf_page.resources();
    resources
        .fonts()
        .pair(REGULAR_FONT, regular_id)
        .pair(BOLD_FONT, bold_id);
    resources.finish();
    pdf_page.finish();

    for (id, face) in [
        (regular_id, FontFace::Helvetica),
        (bold_id, FontFace::HelveticaBold),
    ] {
        pdf.type1_font(id)
            .base_font(Name(face.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut content = Content::new();
    for cell in &page.cells {
        let x = cell.text_x() * POINTS_PER_INCH;
        // PDF space has its origin at the bottom-left corner.
        let y = (page.height - cell.baseline()) * POINTS_PER_INCH;
        content.begin_text();
        content.set_font(font_resource(cell.font.face), cell.font.size);
        content.next_line(x, y);
        content.show(Str(&win_ansi(&cell.text)));
        content.end_text();
    }
    pdf.stream(content_id, &content.finish());

    pdf.finish()
}

fn font_resource(face: FontFace) -> Name<'static> {
    match face {
        FontFace::Helvetica => REGULAR_FONT,
        FontFace::HelveticaBold => BOLD_FONT,
    }
}

/// WinAnsi bytes for `text`; anything the base fonts cannot show becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}
