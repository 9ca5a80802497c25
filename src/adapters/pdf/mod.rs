pub mod layout;
pub mod metrics;

use crate::core::{DocumentRenderer, PdfDocument};
use crate::utils::error::Result;
use layout::{layout_document, PageLayout, PageStyle, PT_PER_MM};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use metrics::FontFace;
use std::path::Path;

/// Writes documents with the standard Helvetica faces, so only Latin-1
/// text can be shown.
#[derive(Debug, Clone, Default)]
pub struct LopdfRenderer {
    style: PageStyle,
}

impl LopdfRenderer {
    pub fn new(style: PageStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    pub fn build(&self, document: &PdfDocument) -> Result<Document> {
        let pages = layout_document(document, &self.style);
        tracing::debug!("Laid out {} page(s)", pages.len());

        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = pdf.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in &pages {
            let content = self.page_content(page);
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.style.page_width * PT_PER_MM),
            Object::Real(self.style.page_height * PT_PER_MM),
        ];
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = pdf.add_object(dictionary! {
            "Title" => Object::string_literal(latin1_bytes(&document.title)),
            "Producer" => Object::string_literal("msg2pdf"),
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);
        pdf.compress();

        Ok(pdf)
    }

    fn page_content(&self, page: &PageLayout) -> Content {
        let page_height = self.style.page_height;
        let mut operations = Vec::with_capacity(page.items.len() * 6);

        for item in &page.items {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![item.face.resource_name().into(), Object::Real(item.size)],
            ));
            operations.push(Operation::new(
                "Tw",
                vec![Object::Real(item.word_spacing * PT_PER_MM)],
            ));
            // PDF 座標原點在左下角
            operations.push(Operation::new(
                "Td",
                vec![
                    Object::Real(item.x * PT_PER_MM),
                    Object::Real((page_height - item.baseline) * PT_PER_MM),
                ],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(latin1_bytes(&item.text))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        Content { operations }
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, document: &PdfDocument, output: &Path) -> Result<()> {
        let mut pdf = self.build(document)?;
        pdf.save(output)?;
        tracing::debug!("Wrote {}", output.display());
        Ok(())
    }
}

/// WinAnsi bytes for text; anything above U+00FF is dropped.
fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}
