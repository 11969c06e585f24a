//! Document-level redaction.
//!
//! Runs whose decoded text contains a sensitive term are selected across
//! the whole document. Every page's content and every form XObject is then
//! edited with all selected runs, each page's image XObjects are replaced
//! with empty streams, and, when a page has no image to strip, vector
//! groups that look like drawn codes are removed. A selected run that no
//! edit reached is reported rather than counted as cleared.

use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use pdfscrub_core::{
    ExtractOptions, ExtractResult, ExtractWarning, ExtractWarningCode, PdfError, RedactOptions,
    TextRun,
};
use pdfscrub_parse::content_edit::{redact_runs, strip_vector_marks};
use pdfscrub_parse::lopdf_backend::{content_stream_ids, decode_stream, dict_get, resource_chain};
use pdfscrub_parse::{BackendError, LopdfDocument, extract_document};
use tracing::{debug, info, warn};

/// Output of a redaction pass.
#[derive(Debug, Clone)]
pub struct Redacted {
    /// The serialized document.
    pub bytes: Vec<u8>,
    /// Runs that matched a term and were removed, in page order.
    pub cleared: Vec<TextRun>,
    /// Pages whose content streams were rewritten.
    pub pages_modified: usize,
    /// Form XObjects whose content streams were rewritten.
    pub forms_modified: usize,
    pub images_stripped: usize,
    pub vector_marks_stripped: usize,
}

impl Redacted {
    /// Whether the pass changed anything in the document.
    pub fn is_unchanged(&self) -> bool {
        self.pages_modified == 0
            && self.forms_modified == 0
            && self.images_stripped == 0
            && self.vector_marks_stripped == 0
    }
}

/// What a page's `/XObject` resources hold.
enum PageImages {
    Found(Vec<ObjectId>),
    /// The resources are not shaped as a dictionary of references.
    Unreadable(String),
}

/// Selected runs with the page they were found on and how many showing
/// operators were emptied for each.
struct Selection {
    runs: Vec<(usize, TextRun)>,
    hits: Vec<usize>,
}

impl Selection {
    fn refs(&self) -> Vec<&TextRun> {
        self.runs.iter().map(|(_, run)| run).collect()
    }

    fn record(&mut self, hits: &[usize]) {
        for (total, n) in self.hits.iter_mut().zip(hits) {
            *total += n;
        }
    }
}

/// Redact `doc` in place and serialize it.
pub(crate) fn redact_document<S: AsRef<str>>(
    doc: &mut LopdfDocument,
    terms: &[S],
    options: &RedactOptions,
    extract: &ExtractOptions,
) -> Result<ExtractResult<Redacted>, PdfError> {
    let extraction = extract_document(doc, extract);
    let mut warnings = extraction.warnings;

    let runs: Vec<(usize, TextRun)> = extraction
        .value
        .into_iter()
        .flat_map(|page| {
            let index = page.page_index;
            page.runs.into_iter().map(move |run| (index, run))
        })
        .filter(|(_, run)| run.contains_any(terms))
        .collect();
    let mut selection = Selection {
        hits: vec![0; runs.len()],
        runs,
    };

    let mut pages_modified = 0;
    let mut images_stripped = 0;
    let mut vector_marks_stripped = 0;

    for index in 0..doc.page_count() {
        let (content_ids, images) = {
            let page = doc.page_dict(index)?;
            let ids = content_stream_ids(doc.inner(), page);
            (ids, page_images(doc.inner(), page))
        };

        let images = match images {
            PageImages::Found(ids) => ids,
            PageImages::Unreadable(reason) => {
                warn!(page = index, "{reason}; images left in place");
                warnings.push(
                    ExtractWarning::new(
                        ExtractWarningCode::ImageStripSkipped,
                        format!("{reason}; images left in place"),
                    )
                    .on_page(index),
                );
                Vec::new()
            }
        };

        let strip_marks = options.strip_vector_marks && images.is_empty();
        let edit = content_ids.and_then(|ids| {
            edit_page_content(doc, index, &ids, &mut selection, strip_marks)
        });
        match edit {
            Ok(edit) => {
                if let Some(e) = edit.truncated {
                    warnings.push(not_edited(e).on_page(index));
                }
                if edit.changed {
                    pages_modified += 1;
                }
                if edit.vector_marks {
                    vector_marks_stripped += 1;
                }
            }
            Err(e) => warnings.push(not_edited(e).on_page(index)),
        }

        if options.strip_images {
            for id in images {
                if strip_image(doc.inner_mut(), id) {
                    debug!(page = index, object = ?id, "stripped image");
                    images_stripped += 1;
                }
            }
        }
    }

    let forms_modified = edit_forms(doc, &mut selection, &mut warnings);

    let cleared = settle(selection, &mut warnings);

    if !extract.collect_warnings {
        warnings.clear();
    }
    let bytes = doc.save()?;
    Ok(ExtractResult::with_warnings(
        Redacted {
            bytes,
            cleared,
            pages_modified,
            forms_modified,
            images_stripped,
            vector_marks_stripped,
        },
        warnings,
    ))
}

/// Split the selection into removed runs and runs no edit reached; the
/// latter become warnings.
fn settle(selection: Selection, warnings: &mut Vec<ExtractWarning>) -> Vec<TextRun> {
    let mut cleared = Vec::new();
    for ((page, run), hits) in selection.runs.into_iter().zip(selection.hits) {
        if hits > 0 {
            info!(page, text = %run.text, hits, "clearing text run");
            cleared.push(run);
        } else {
            warn!(page, text = %run.text, "matched run could not be removed");
            warnings.push(
                ExtractWarning::new(
                    ExtractWarningCode::RedactionIncomplete,
                    format!("run {:?} matched but no content stream showing it was edited", run.text),
                )
                .on_page(page),
            );
        }
    }
    cleared
}

fn not_edited(e: BackendError) -> ExtractWarning {
    warn!(error = %e, "content could not be fully edited");
    ExtractWarning::new(
        ExtractWarningCode::MalformedStream,
        format!("content could not be fully edited: {e}"),
    )
}

#[derive(Debug, Default)]
struct PageEdit {
    changed: bool,
    vector_marks: bool,
    /// Tokenizing stopped early; text past this point was not examined.
    truncated: Option<BackendError>,
}

/// Edit the page's content streams and write them back when anything
/// changed: the joined content goes into the first stream, unfiltered, and
/// the others are emptied.
fn edit_page_content(
    doc: &mut LopdfDocument,
    index: usize,
    content_ids: &[ObjectId],
    selection: &mut Selection,
    strip_marks: bool,
) -> Result<PageEdit, BackendError> {
    let Some((&first, rest)) = content_ids.split_first() else {
        return Ok(PageEdit::default());
    };

    let mut raw = Vec::new();
    for (i, id) in content_ids.iter().enumerate() {
        let stream = doc.inner().get_object(*id).and_then(Object::as_stream)?;
        if i > 0 {
            raw.push(b'\n');
        }
        raw.extend_from_slice(&decode_stream(stream)?);
    }

    let result = redact_runs(&raw, &selection.refs());
    selection.record(&result.hits);
    let mut edit = PageEdit {
        changed: result.content.is_some(),
        truncated: result.error,
        ..PageEdit::default()
    };
    let mut content = result.content;
    if edit.changed {
        debug!(page = index, "emptied matched text operands");
    }

    if strip_marks {
        let current = content.as_deref().unwrap_or(raw.as_slice());
        if let Some(stripped) = strip_vector_marks(current) {
            warn!(page = index, "removed vector groups that look like a drawn code");
            edit.changed = true;
            edit.vector_marks = true;
            content = Some(stripped);
        }
    }

    let Some(content) = content else {
        return Ok(edit);
    };
    let objects = &mut doc.inner_mut().objects;
    if let Some(Object::Stream(stream)) = objects.get_mut(&first) {
        write_unfiltered(stream, content);
    }
    for id in rest {
        if let Some(Object::Stream(stream)) = objects.get_mut(id) {
            write_unfiltered(stream, Vec::new());
        }
    }
    Ok(edit)
}

/// Edit every form XObject stream of the document. Returns the number
/// rewritten.
fn edit_forms(
    doc: &mut LopdfDocument,
    selection: &mut Selection,
    warnings: &mut Vec<ExtractWarning>,
) -> usize {
    if selection.runs.is_empty() {
        return 0;
    }
    let forms: Vec<ObjectId> = doc
        .inner()
        .objects
        .iter()
        .filter_map(|(id, object)| match object {
            Object::Stream(stream) if is_form(stream) => Some(*id),
            _ => None,
        })
        .collect();

    let mut modified = 0;
    for id in forms {
        let Some(Object::Stream(stream)) = doc.inner().objects.get(&id) else {
            continue;
        };
        let raw = match decode_stream(stream) {
            Ok(raw) => raw,
            Err(e) => {
                warnings.push(not_edited(e));
                continue;
            }
        };
        let result = redact_runs(&raw, &selection.refs());
        selection.record(&result.hits);
        if let Some(e) = result.error {
            warnings.push(not_edited(e));
        }
        if let Some(content) = result.content {
            debug!(form = ?id, "emptied matched text operands");
            if let Some(Object::Stream(stream)) = doc.inner_mut().objects.get_mut(&id) {
                write_unfiltered(stream, content);
                modified += 1;
            }
        }
    }
    modified
}

fn is_form(stream: &Stream) -> bool {
    stream
        .dict
        .get(b"Subtype")
        .and_then(Object::as_name)
        .is_ok_and(|n| n == b"Form")
}

fn write_unfiltered(stream: &mut Stream, content: Vec<u8>) {
    stream.dict.remove(b"Filter");
    stream.dict.remove(b"DecodeParms");
    stream.set_content(content);
}

/// The non-form XObjects the page can draw.
fn page_images(doc: &lopdf::Document, page: &Dictionary) -> PageImages {
    let Some(xobjects) = resource_chain(doc, page)
        .into_iter()
        .find(|res| res.has(b"XObject"))
        .and_then(|res| dict_get(doc, res, b"XObject"))
    else {
        return PageImages::Found(Vec::new());
    };
    let Ok(xobjects) = xobjects.as_dict() else {
        return PageImages::Unreadable("/XObject resource is not a dictionary".to_string());
    };

    let mut images = Vec::new();
    for (name, value) in xobjects.iter() {
        let Ok(id) = value.as_reference() else {
            return PageImages::Unreadable(format!(
                "/XObject /{} is not an indirect reference",
                String::from_utf8_lossy(name)
            ));
        };
        let form = doc
            .get_object(id)
            .and_then(Object::as_stream)
            .is_ok_and(is_form);
        if !form {
            images.push(id);
        }
    }
    PageImages::Found(images)
}

/// Replace the object with an empty stream under the same id. Returns
/// `false` when it already was one.
fn strip_image(doc: &mut lopdf::Document, id: ObjectId) -> bool {
    if let Some(Object::Stream(stream)) = doc.objects.get(&id) {
        if stream.content.is_empty() && !stream.dict.has(b"Filter") && !stream.dict.has(b"Subtype") {
            return false;
        }
    }
    doc.objects
        .insert(id, Object::Stream(Stream::new(dictionary! {}, Vec::new())));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;

    fn helvetica(doc: &mut Document) -> ObjectId {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        })
    }

    fn one_page(mut doc: Document, contents: Object, resources: Dictionary) -> LopdfDocument {
        let pages_id = doc.new_object_id();
        let page = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => contents,
            "Resources" => resources,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page)],
                "Count" => 1,
            }),
        );
        let catalog = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog);
        LopdfDocument::from_document(doc).unwrap()
    }

    fn run_redact(doc: &mut LopdfDocument, terms: &[&str]) -> ExtractResult<Redacted> {
        redact_document(doc, terms, &RedactOptions::default(), &ExtractOptions::default()).unwrap()
    }

    fn stream_content(doc: &LopdfDocument, id: ObjectId) -> Vec<u8> {
        doc.inner().get_object(id).unwrap().as_stream().unwrap().content.clone()
    }

    #[test]
    fn contents_array_is_joined_into_first_stream() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        let a = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Secret) Tj ET".to_vec()));
        let b = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Public) Tj ET".to_vec()));
        let mut pdf = one_page(
            doc,
            vec![Object::Reference(a), Object::Reference(b)].into(),
            dictionary! { "Font" => dictionary! { "F1" => font } },
        );
        let result = run_redact(&mut pdf, &["Secret"]);
        assert_eq!(result.value.pages_modified, 1);
        assert_eq!(
            stream_content(&pdf, a),
            b"BT /F1 12 Tf () Tj ET\nBT /F1 12 Tf (Public) Tj ET".to_vec()
        );
        assert!(stream_content(&pdf, b).is_empty());
    }

    #[test]
    fn unchanged_page_keeps_its_streams() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        let a = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Public) Tj ET".to_vec()));
        let mut pdf = one_page(doc, Object::Reference(a), dictionary! { "Font" => dictionary! { "F1" => font } });
        let result = run_redact(&mut pdf, &["Secret"]);
        assert!(result.value.is_unchanged());
        assert!(result.value.cleared.is_empty());
        assert_eq!(stream_content(&pdf, a), b"BT /F1 12 Tf (Public) Tj ET".to_vec());
    }

    #[test]
    fn images_are_replaced_and_forms_kept() {
        let mut doc = Document::with_version("1.5");
        let image = doc.add_object(Stream::new(
            dictionary! { "Type" => "XObject", "Subtype" => "Image", "Width" => 1, "Height" => 1 },
            vec![0xFF],
        ));
        let form = doc.add_object(Stream::new(
            dictionary! { "Type" => "XObject", "Subtype" => "Form" },
            b"0 0 1 1 re f".to_vec(),
        ));
        let content = doc.add_object(Stream::new(dictionary! {}, b"/Im0 Do /Fm0 Do".to_vec()));
        let mut pdf = one_page(
            doc,
            Object::Reference(content),
            dictionary! { "XObject" => dictionary! { "Im0" => image, "Fm0" => form } },
        );
        let result = run_redact(&mut pdf, &["x"]);
        assert_eq!(result.value.images_stripped, 1);
        let stripped = pdf.inner().get_object(image).unwrap().as_stream().unwrap();
        assert!(stripped.content.is_empty());
        assert!(!stripped.dict.has(b"Subtype"));
        assert_eq!(stream_content(&pdf, form), b"0 0 1 1 re f".to_vec());

        // a second pass finds nothing left to strip
        assert_eq!(run_redact(&mut pdf, &["x"]).value.images_stripped, 0);
    }

    #[test]
    fn malformed_xobject_resources_skip_images_only() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        let content = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Secret) Tj ET".to_vec()));
        let mut pdf = one_page(
            doc,
            Object::Reference(content),
            dictionary! {
                "Font" => dictionary! { "F1" => font },
                "XObject" => vec![Object::Integer(1)],
            },
        );
        let result = run_redact(&mut pdf, &["Secret"]);
        assert_eq!(result.value.pages_modified, 1);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.code == ExtractWarningCode::ImageStripSkipped && w.page == Some(0)));
    }

    #[test]
    fn filtered_stream_is_rewritten_unfiltered() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        // padding so that compression pays off
        let padding = " ".repeat(200);
        let mut stream = Stream::new(
            dictionary! {},
            format!("BT /F1 12 Tf (Secret) Tj ET{padding}").into_bytes(),
        );
        stream.compress().unwrap();
        assert!(stream.dict.has(b"Filter"));
        let content = doc.add_object(stream);
        let mut pdf = one_page(doc, Object::Reference(content), dictionary! { "Font" => dictionary! { "F1" => font } });
        run_redact(&mut pdf, &["Secret"]);
        let edited = pdf.inner().get_object(content).unwrap().as_stream().unwrap();
        assert!(!edited.dict.has(b"Filter"));
        assert_eq!(edited.content, format!("BT /F1 12 Tf () Tj ET{padding}").into_bytes());
    }

    #[test]
    fn vector_marks_only_without_images() {
        let mut grid = String::from("q 0 g ");
        for i in 0..64 {
            grid.push_str(&format!("{i} 0 1 1 re "));
        }
        grid.push_str("f Q");

        let mut doc = Document::with_version("1.5");
        let content = doc.add_object(Stream::new(dictionary! {}, grid.clone().into_bytes()));
        let mut pdf = one_page(doc, Object::Reference(content), dictionary! {});
        let result = run_redact(&mut pdf, &["x"]);
        assert_eq!(result.value.vector_marks_stripped, 1);
        assert!(stream_content(&pdf, content).is_empty());

        let mut doc = Document::with_version("1.5");
        let image = doc.add_object(Stream::new(dictionary! { "Subtype" => "Image" }, vec![1]));
        let content = doc.add_object(Stream::new(dictionary! {}, grid.clone().into_bytes()));
        let mut pdf = one_page(
            doc,
            Object::Reference(content),
            dictionary! { "XObject" => dictionary! { "Im0" => image } },
        );
        let result = run_redact(&mut pdf, &["x"]);
        assert_eq!(result.value.vector_marks_stripped, 0);
        assert_eq!(stream_content(&pdf, content), grid.into_bytes());
    }

    #[test]
    fn matches_are_document_wide() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        // the term shows as a run on page 1 and as hex only on page 2
        let p1 = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Key) Tj ET".to_vec()));
        let p2 = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf <4b6579> Tj ET".to_vec()));
        let pages_id = doc.new_object_id();
        let resources = dictionary! { "Font" => dictionary! { "F1" => font } };
        let kids: Vec<Object> = [p1, p2]
            .into_iter()
            .map(|c| {
                Object::Reference(doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => c,
                    "Resources" => resources.clone(),
                }))
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => 2 }),
        );
        let catalog = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog);
        let mut pdf = LopdfDocument::from_document(doc).unwrap();

        let result = run_redact(&mut pdf, &["Key"]);
        assert_eq!(result.value.cleared.len(), 2);
        assert_eq!(stream_content(&pdf, p1), b"BT /F1 12 Tf () Tj ET".to_vec());
        assert_eq!(stream_content(&pdf, p2), b"BT /F1 12 Tf () Tj ET".to_vec());
    }

    #[test]
    fn form_stream_is_edited_in_place() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        let form = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Form",
                "Resources" => dictionary! { "Font" => dictionary! { "F1" => font } },
            },
            b"BT /F1 12 Tf (Secret) Tj (Shown) Tj ET".to_vec(),
        ));
        let content = doc.add_object(Stream::new(dictionary! {}, b"/Fm0 Do".to_vec()));
        let mut pdf = one_page(
            doc,
            Object::Reference(content),
            dictionary! { "XObject" => dictionary! { "Fm0" => form } },
        );
        let result = run_redact(&mut pdf, &["Secret"]);
        assert_eq!(result.value.cleared.len(), 1);
        assert_eq!(result.value.forms_modified, 1);
        assert_eq!(result.value.pages_modified, 0);
        assert_eq!(stream_content(&pdf, form), b"BT /F1 12 Tf () Tj (Shown) Tj ET".to_vec());
        assert_eq!(stream_content(&pdf, content), b"/Fm0 Do".to_vec());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unreached_runs_are_reported_not_cleared() {
        let run = |text: &str| TextRun {
            text: text.to_string(),
            chunks: Vec::new(),
            bytes: text.as_bytes().to_vec(),
            matrix: pdfscrub_core::Matrix::IDENTITY,
            local_bbox: Default::default(),
            global_bbox: Default::default(),
            translation_method: pdfscrub_core::TranslationMethod::SimpleEncoding,
            displacement: 0.0,
        };
        let selection = Selection {
            runs: vec![(0, run("removed")), (2, run("left"))],
            hits: vec![1, 0],
        };
        let mut warnings = Vec::new();
        let cleared = settle(selection, &mut warnings);
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].text, "removed");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ExtractWarningCode::RedactionIncomplete);
        assert_eq!(warnings[0].page, Some(2));
    }

    #[test]
    fn contents_reference_to_array_is_edited() {
        let mut doc = Document::with_version("1.5");
        let font = helvetica(&mut doc);
        let a = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Secret) Tj ET".to_vec()));
        let b = doc.add_object(Stream::new(dictionary! {}, b"BT /F1 12 Tf (Public) Tj ET".to_vec()));
        let array = doc.add_object(vec![Object::Reference(a), Object::Reference(b)]);
        let mut pdf = one_page(
            doc,
            Object::Reference(array),
            dictionary! { "Font" => dictionary! { "F1" => font } },
        );
        let result = run_redact(&mut pdf, &["Secret"]);
        assert_eq!(result.value.cleared.len(), 1);
        assert_eq!(
            stream_content(&pdf, a),
            b"BT /F1 12 Tf () Tj ET\nBT /F1 12 Tf (Public) Tj ET".to_vec()
        );
        assert!(stream_content(&pdf, b).is_empty());
    }
}
