//! Shared builders for integration tests.
//!
//! Documents are assembled in memory with lopdf and serialized, so every
//! test goes through the same parse path as a file read from disk.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// Incrementally built test document.
pub struct DocBuilder {
    pub doc: Document,
    pages: Vec<ObjectId>,
    pages_id: ObjectId,
}

impl DocBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages: Vec::new(),
            pages_id,
        }
    }

    /// Helvetica with WinAnsiEncoding.
    pub fn helvetica(&mut self) -> ObjectId {
        self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        })
    }

    /// A composite font with two-byte Identity-H codes and a ToUnicode map.
    pub fn type0(&mut self, to_unicode: &[u8]) -> ObjectId {
        let cid_font = self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => "TestCID",
            "DW" => 1000,
        });
        let cmap = self
            .doc
            .add_object(Stream::new(dictionary! {}, to_unicode.to_vec()));
        self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "TestCID",
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(cid_font)],
            "ToUnicode" => cmap,
        })
    }

    /// A Form XObject drawing `content`.
    pub fn form(&mut self, content: &[u8], resources: Option<Dictionary>) -> ObjectId {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if let Some(resources) = resources {
            dict.set("Resources", resources);
        }
        self.doc.add_object(Stream::new(dict, content.to_vec()))
    }

    /// A one-pixel image XObject.
    pub fn image(&mut self) -> ObjectId {
        self.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => 1,
                "Height" => 1,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            vec![0x80],
        ))
    }

    pub fn page(&mut self, content: &[u8], resources: Dictionary) -> ObjectId {
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.to_vec()));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });
        self.pages.push(page_id);
        content_id
    }

    pub fn build(mut self) -> Vec<u8> {
        let kids: Vec<Object> = self.pages.iter().map(|id| Object::Reference(*id)).collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog);

        let mut buf = Vec::new();
        self.doc.save_to(&mut buf).expect("failed to save test PDF");
        buf
    }
}

/// Resources naming `font` as `/F1`.
pub fn font_resources(font: ObjectId) -> Dictionary {
    dictionary! {
        "Font" => dictionary! { "F1" => font },
    }
}

/// A single-page document using Helvetica as `/F1`.
pub fn pdf_with_content(content: &[u8]) -> Vec<u8> {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    b.page(content, font_resources(font));
    b.build()
}

/// All run texts of all pages, in order.
pub fn all_texts(bytes: &[u8]) -> Vec<String> {
    pdfscrub::extract_text(bytes)
        .expect("extraction failed")
        .into_iter()
        .flat_map(|p| p.runs.into_iter().map(|r| r.text))
        .collect()
}

/// Decoded content of the page at `index`.
pub fn page_content(bytes: &[u8], index: usize) -> Vec<u8> {
    let doc = Document::load_mem(bytes).expect("failed to reload PDF");
    let page_id = *doc
        .get_pages()
        .values()
        .nth(index)
        .expect("page out of range");
    doc.get_page_content(page_id).expect("page has no content")
}
