//! lopdf-based document reader.
//!
//! Wraps a [`lopdf::Document`] with the handful of object-graph queries the
//! extraction pipeline needs: ordered page ids, resolved dictionaries,
//! resource-dictionary chains and decoded content bytes. The document itself
//! is also the writer: redaction edits objects in place and serializes with
//! [`LopdfDocument::save`].

use lopdf::{Dictionary, Object, ObjectId, Stream};
use pdfscrub_core::{Matrix, PdfError};

use crate::error::BackendError;

/// Bound on `/Parent` hops when walking the page tree.
const MAX_TREE_DEPTH: usize = 64;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
    /// Ordered page object ids (index 0 is the first page).
    page_ids: Vec<ObjectId>,
}

impl LopdfDocument {
    /// Parse a document from bytes.
    ///
    /// # Errors
    ///
    /// [`BackendError::Parse`] when lopdf cannot read the file, and
    /// [`PdfError::PasswordRequired`] for encrypted documents.
    pub fn open(bytes: &[u8]) -> Result<Self, BackendError> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;
        Self::from_document(inner)
    }

    /// Wrap an already loaded document.
    pub fn from_document(inner: lopdf::Document) -> Result<Self, BackendError> {
        if inner.is_encrypted() {
            return Err(BackendError::Core(PdfError::PasswordRequired));
        }
        // get_pages returns a BTreeMap keyed by 1-based page number
        let page_ids = inner.get_pages().values().copied().collect();
        Ok(Self { inner, page_ids })
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut lopdf::Document {
        &mut self.inner
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn page_ids(&self) -> &[ObjectId] {
        &self.page_ids
    }

    /// The page dictionary at 0-based `index`.
    pub fn page_dict(&self, index: usize) -> Result<&Dictionary, BackendError> {
        let id = self.page_ids.get(index).ok_or_else(|| {
            BackendError::Parse(format!(
                "page index {index} out of range (0..{})",
                self.page_ids.len()
            ))
        })?;
        self.inner
            .get_object(*id)
            .and_then(Object::as_dict)
            .map_err(|e| BackendError::Parse(format!("failed to get page dictionary: {e}")))
    }

    /// Serialize the (possibly edited) document.
    pub fn save(&mut self) -> Result<Vec<u8>, BackendError> {
        let mut buf = Vec::new();
        self.inner
            .save_to(&mut buf)
            .map_err(|e| BackendError::Io(std::io::Error::other(e.to_string())))?;
        Ok(buf)
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .finish_non_exhaustive()
    }
}

/// Follow one level of indirection; dangling references resolve to themselves.
pub fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Resolve `obj` and view it as a dictionary. A stream yields its dictionary.
pub fn resolve_dict<'a>(doc: &'a lopdf::Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match resolve(doc, obj) {
        Object::Dictionary(d) => Some(d),
        Object::Stream(s) => Some(&s.dict),
        _ => None,
    }
}

/// Look up `key` in `dict` and resolve the value.
pub fn dict_get<'a>(
    doc: &'a lopdf::Document,
    dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    dict.get(key).ok().map(|o| resolve(doc, o))
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
pub fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}

/// Read a six-number array as a matrix.
pub fn matrix_from_object(doc: &lopdf::Document, obj: &Object) -> Option<Matrix> {
    let arr = resolve(doc, obj).as_array().ok()?;
    if arr.len() != 6 {
        return None;
    }
    let mut m = [0.0; 6];
    for (slot, item) in m.iter_mut().zip(arr) {
        *slot = object_to_f64(resolve(doc, item))?;
    }
    Some(Matrix::from_array(m))
}

/// The resource dictionaries visible from `holder`, closest first.
///
/// Collects the holder's own `/Resources` and then each `/Parent`'s, so a
/// page sees the resources it inherits through the page tree.
pub fn resource_chain<'a>(doc: &'a lopdf::Document, holder: &'a Dictionary) -> Vec<&'a Dictionary> {
    let mut chain = Vec::new();
    let mut current = Some(holder);
    let mut hops = 0;
    while let Some(dict) = current {
        if let Some(resources) = dict.get(b"Resources").ok().and_then(|o| resolve_dict(doc, o)) {
            chain.push(resources);
        }
        hops += 1;
        if hops > MAX_TREE_DEPTH {
            break;
        }
        current = dict.get(b"Parent").ok().and_then(|o| resolve_dict(doc, o));
    }
    chain
}

/// Decode a stream, decompressing when it carries a `/Filter`.
pub fn decode_stream(stream: &Stream) -> Result<Vec<u8>, BackendError> {
    if stream.dict.get(b"Filter").is_ok() {
        stream
            .decompressed_content()
            .map_err(|e| BackendError::Parse(format!("failed to decompress stream: {e}")))
    } else {
        Ok(stream.content.clone())
    }
}

/// The object ids of a page's `/Contents` streams, in order.
///
/// `/Contents` may be a stream reference, an array of references, or a
/// reference to such an array.
pub fn content_stream_ids(
    doc: &lopdf::Document,
    page: &Dictionary,
) -> Result<Vec<ObjectId>, BackendError> {
    let contents = match page.get(b"Contents") {
        Err(_) => return Ok(Vec::new()),
        Ok(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(items)) => items,
            _ => return Ok(vec![*id]),
        },
        Ok(Object::Array(items)) => items,
        Ok(_) => {
            return Err(BackendError::Parse(
                "/Contents is not a reference or array".to_string(),
            ));
        }
    };
    contents
        .iter()
        .map(|item| {
            item.as_reference().map_err(|e| {
                BackendError::Parse(format!("/Contents array item is not a reference: {e}"))
            })
        })
        .collect()
}

/// The decoded content of a page: all `/Contents` streams joined by a newline.
/// A page without `/Contents` has empty content.
pub fn page_content_bytes(doc: &lopdf::Document, page: &Dictionary) -> Result<Vec<u8>, BackendError> {
    let mut content = Vec::new();
    for (i, id) in content_stream_ids(doc, page)?.into_iter().enumerate() {
        let stream = doc
            .get_object(id)
            .and_then(Object::as_stream)
            .map_err(|e| BackendError::Parse(format!("failed to resolve /Contents stream: {e}")))?;
        if i > 0 {
            content.push(b'\n');
        }
        content.extend_from_slice(&decode_stream(stream)?);
    }
    Ok(content)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use lopdf::{Document, dictionary};

    #[test]
    fn open_orders_pages() {
        let doc = Document::with_version("1.5");
        let doc = finish(
            doc,
            vec![
                (b"%1".to_vec(), Dictionary::new()),
                (b"%2".to_vec(), Dictionary::new()),
            ],
        );
        let pdf = LopdfDocument::open(&to_bytes(doc)).unwrap();
        assert_eq!(pdf.page_count(), 2);
        let content = page_content_bytes(pdf.inner(), pdf.page_dict(1).unwrap()).unwrap();
        assert_eq!(content, b"%2");
    }

    #[test]
    fn open_rejects_garbage() {
        let err = LopdfDocument::open(b"not a pdf").unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[test]
    fn page_index_out_of_range() {
        let pdf = LopdfDocument::from_document(single_page(b"")).unwrap();
        assert!(pdf.page_dict(3).is_err());
    }

    #[test]
    fn contents_array_is_joined_with_newline() {
        let mut doc = single_page(b"BT");
        let page_id = doc.get_pages()[&1];
        let second = doc.add_object(Stream::new(dictionary! {}, b"ET".to_vec()));
        let first = doc
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Contents")
            .unwrap()
            .as_reference()
            .unwrap();
        doc.get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("Contents", vec![Object::from(first), Object::from(second)]);
        let pdf = LopdfDocument::from_document(doc).unwrap();
        let page = pdf.page_dict(0).unwrap();
        assert_eq!(content_stream_ids(pdf.inner(), page).unwrap().len(), 2);
        assert_eq!(page_content_bytes(pdf.inner(), page).unwrap(), b"BT\nET");
    }

    #[test]
    fn contents_reference_to_array_is_followed() {
        let mut doc = single_page(b"BT");
        let page_id = doc.get_pages()[&1];
        let first = doc
            .get_object(page_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Contents")
            .unwrap()
            .as_reference()
            .unwrap();
        let second = doc.add_object(Stream::new(dictionary! {}, b"ET".to_vec()));
        let array = doc.add_object(vec![Object::from(first), Object::from(second)]);
        doc.get_object_mut(page_id)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("Contents", array);
        let pdf = LopdfDocument::from_document(doc).unwrap();
        let page = pdf.page_dict(0).unwrap();
        assert_eq!(content_stream_ids(pdf.inner(), page).unwrap(), vec![first, second]);
        assert_eq!(page_content_bytes(pdf.inner(), page).unwrap(), b"BT\nET");
    }

    #[test]
    fn missing_contents_is_empty() {
        let page = dictionary! { "Type" => "Page" };
        let doc = Document::with_version("1.5");
        assert!(page_content_bytes(&doc, &page).unwrap().is_empty());
    }

    #[test]
    fn resource_chain_walks_parents() {
        let mut doc = Document::with_version("1.5");
        let parent = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Resources" => dictionary! { "Font" => dictionary! {} },
        });
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => parent,
            "Resources" => dictionary! { "XObject" => dictionary! {} },
        };
        let chain = resource_chain(&doc, &page);
        assert_eq!(chain.len(), 2);
        assert!(chain[0].has(b"XObject"));
        assert!(chain[1].has(b"Font"));
    }

    #[test]
    fn matrix_from_mixed_numbers() {
        let doc = Document::with_version("1.5");
        let obj = Object::Array(vec![
            1.into(),
            0.into(),
            0.into(),
            Object::Real(2.0),
            10.into(),
            Object::Real(-5.5),
        ]);
        let m = matrix_from_object(&doc, &obj).unwrap();
        assert_eq!(m.to_array(), [1.0, 0.0, 0.0, 2.0, 10.0, -5.5]);
        assert!(matrix_from_object(&doc, &Object::Array(vec![1.into()])).is_none());
    }
}
