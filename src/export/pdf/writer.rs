//! PDF file assembly: objects, cross-reference table and trailer

use chrono::{DateTime, Utc};

use super::fonts::Font;
use super::layout::{PAGE_HEIGHT, PAGE_WIDTH};

/// Document information dictionary
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    pub created_at: Option<DateTime<Utc>>,
}

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_IDS: [(Font, usize); 2] = [(Font::Regular, 3), (Font::Bold, 4)];
const INFO_ID: usize = 5;
const FIRST_PAGE_ID: usize = 6;

struct ObjectWriter {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            out,
            offsets: Vec::new(),
        }
    }

    /// Objects must be written in id order
    fn object(&mut self, id: usize, body: &[u8]) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.out.len());
        self.out.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.out.extend_from_slice(body);
        self.out.extend_from_slice(b"\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.out.len();
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, CATALOG_ID, INFO_ID, xref_offset
        ));
        self.out.extend_from_slice(xref.as_bytes());
        self.out
    }
}

/// Assemble a complete PDF from per-page content streams
pub fn assemble(pages: &[Vec<u8>], info: &DocumentInfo) -> Vec<u8> {
    let mut writer = ObjectWriter::new();
    let page_id = |i: usize| FIRST_PAGE_ID + 2 * i;

    writer.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID).as_bytes(),
    );

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_id(i)))
        .collect();
    writer.object(
        PAGES_ID,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );

    for (font, id) in FONT_IDS {
        writer.object(
            id,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            )
            .as_bytes(),
        );
    }

    writer.object(INFO_ID, info_dictionary(info).as_bytes());

    let fonts: Vec<String> = FONT_IDS
        .iter()
        .map(|(font, id)| format!("/{} {} 0 R", font.resource(), id))
        .collect();
    for (i, content) in pages.iter().enumerate() {
        writer.object(
            page_id(i),
            format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << {} >> >> /Contents {} 0 R >>",
                PAGES_ID,
                PAGE_WIDTH,
                PAGE_HEIGHT,
                fonts.join(" "),
                page_id(i) + 1
            )
            .as_bytes(),
        );

        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend_from_slice(content);
        stream.extend_from_slice(b"\nendstream");
        writer.object(page_id(i) + 1, &stream);
    }

    writer.finish()
}

fn info_dictionary(info: &DocumentInfo) -> String {
    let mut dict = format!(
        "<< /Title {} /Producer {}",
        text_string(&info.title),
        text_string(&info.producer)
    );
    if let Some(created_at) = info.created_at {
        dict.push_str(&format!(
            " /CreationDate (D:{}Z)",
            created_at.format("%Y%m%d%H%M%S")
        ));
    }
    dict.push_str(" >>");
    dict
}

/// A text string as UTF-16BE hex with a byte order mark
fn text_string(text: &str) -> String {
    let mut hex = String::from("<FEFF");
    for unit in text.encode_utf16() {
        hex.push_str(&format!("{:04X}", unit));
    }
    hex.push('>');
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Finanthrope — Résumé".into(),
            producer: "Finanthrope".into(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()),
        }
    }

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_header_and_trailer() {
        let pdf = assemble(&[b"BT ET".to_vec()], &info());
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));

        let body = text(&pdf);
        assert!(body.contains("/Count 1"));
        assert!(body.contains("/BaseFont /Helvetica-Bold"));
        assert!(body.contains("/CreationDate (D:20240309140500Z)"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = assemble(&[b"BT ET".to_vec(), b"BT ET".to_vec()], &info());
        let body = text(&pdf);

        let start = body.rfind("startxref\n").unwrap() + "startxref\n".len();
        let xref_offset: usize = body[start..].lines().next().unwrap().parse().unwrap();
        assert!(pdf[xref_offset..].starts_with(b"xref\n0 10\n"));

        let table = &body[xref_offset..];
        for (i, line) in table.lines().skip(3).take(9).enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(pdf[offset..].starts_with(expected.as_bytes()));
        }
    }

    #[test]
    fn test_stream_length_matches_content() {
        let content = b"0 0 m 10 10 l S".to_vec();
        let pdf = assemble(&[content.clone()], &info());
        let body = text(&pdf);
        assert!(body.contains(&format!("<< /Length {} >>\nstream\n0 0 m 10 10 l S\nendstream", content.len())));
    }

    #[test]
    fn test_text_string_is_utf16() {
        assert_eq!(text_string("é"), "<FEFF00E9>");
        assert_eq!(text_string("€"), "<FEFF20AC>");
    }
}
