//! Resolved resources for one content holder (page or form).
//!
//! Built from the holder's resource-dictionary chain: for each category
//! (`/Font`, `/ExtGState`, `/XObject`) the first dictionary in the chain that
//! declares it provides every entry of that category.

use std::collections::HashMap;
use std::sync::Arc;

use lopdf::{Dictionary, Object, ObjectId};
use pdfscrub_core::Matrix;

use crate::lopdf_backend::{dict_get, matrix_from_object, object_to_f64, resolve, resolve_dict};
use crate::text_state::FontSelection;

/// Identity of a font for decoder caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontKey {
    /// An indirect font object.
    Object(ObjectId),
    /// An inline font dictionary, numbered per document.
    Synthetic(u32),
}

/// A font resource. Inline dictionaries travel with the reference because
/// they cannot be fetched by id later.
#[derive(Debug, Clone)]
pub struct FontRef {
    pub key: FontKey,
    pub inline: Option<Arc<Dictionary>>,
}

impl PartialEq for FontRef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl FontRef {
    pub fn object(id: ObjectId) -> Self {
        Self {
            key: FontKey::Object(id),
            inline: None,
        }
    }

    /// The font dictionary this reference names.
    pub fn dictionary<'a>(&'a self, doc: &'a lopdf::Document) -> Option<&'a Dictionary> {
        match (&self.inline, self.key) {
            (Some(dict), _) => Some(dict.as_ref()),
            (None, FontKey::Object(id)) => doc.get_object(id).ok().and_then(|o| o.as_dict().ok()),
            (None, FontKey::Synthetic(_)) => None,
        }
    }
}

/// Per-document counter for inline font identities.
#[derive(Debug, Default)]
pub struct SyntheticIds {
    next: u32,
}

impl SyntheticIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The part of an extended graphics state the collector cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtGStateEntry {
    pub font: Option<FontSelection>,
}

/// A Form XObject reachable by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRef {
    pub id: ObjectId,
    /// The form's `/Matrix`, if it declares one.
    pub matrix: Option<Matrix>,
}

/// Resolved fonts, extended graphics states and forms.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    fonts: HashMap<String, FontRef>,
    ext_gstates: HashMap<String, ExtGStateEntry>,
    forms: HashMap<String, FormRef>,
}

impl ResourceTable {
    /// Resolve the resources visible through `chain` (closest first).
    ///
    /// Malformed entries are skipped; a missing category leaves that map
    /// empty.
    pub fn build(doc: &lopdf::Document, chain: &[&Dictionary], ids: &mut SyntheticIds) -> Self {
        let mut table = Self::default();

        if let Some(fonts) = first_category(doc, chain, b"Font") {
            for (name, value) in fonts.iter() {
                if let Some(font) = font_ref(doc, value, ids) {
                    table.fonts.insert(name_string(name), font);
                }
            }
        }

        if let Some(states) = first_category(doc, chain, b"ExtGState") {
            for (name, value) in states.iter() {
                if let Some(state) = resolve_dict(doc, value) {
                    table
                        .ext_gstates
                        .insert(name_string(name), ext_gstate(doc, state, ids));
                }
            }
        }

        if let Some(xobjects) = first_category(doc, chain, b"XObject") {
            for (name, value) in xobjects.iter() {
                if let Some(form) = form_ref(doc, value) {
                    table.forms.insert(name_string(name), form);
                }
            }
        }

        table
    }

    pub fn font(&self, name: &str) -> Option<&FontRef> {
        self.fonts.get(name)
    }

    pub fn ext_gstate(&self, name: &str) -> Option<&ExtGStateEntry> {
        self.ext_gstates.get(name)
    }

    pub fn form(&self, name: &str) -> Option<&FormRef> {
        self.forms.get(name)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}

fn name_string(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

fn first_category<'a>(
    doc: &'a lopdf::Document,
    chain: &[&'a Dictionary],
    key: &[u8],
) -> Option<&'a Dictionary> {
    chain
        .iter()
        .copied()
        .find(|dict| dict.has(key))
        .and_then(|dict| dict_get(doc, dict, key))
        .and_then(|obj| obj.as_dict().ok())
}

fn font_ref(doc: &lopdf::Document, value: &Object, ids: &mut SyntheticIds) -> Option<FontRef> {
    match value {
        Object::Reference(id) => {
            resolve(doc, value).as_dict().ok()?;
            Some(FontRef::object(*id))
        }
        Object::Dictionary(dict) => Some(FontRef {
            key: FontKey::Synthetic(ids.next_id()),
            inline: Some(Arc::new(dict.clone())),
        }),
        _ => None,
    }
}

/// Read `/Font [font size]` from an ExtGState dictionary.
fn ext_gstate(doc: &lopdf::Document, state: &Dictionary, ids: &mut SyntheticIds) -> ExtGStateEntry {
    let font = dict_get(doc, state, b"Font")
        .and_then(|o| o.as_array().ok())
        .and_then(|arr| match arr.as_slice() {
            [font, size, ..] => Some(FontSelection {
                font: font_ref(doc, font, ids)?,
                size: object_to_f64(resolve(doc, size))?,
            }),
            _ => None,
        });
    ExtGStateEntry { font }
}

fn form_ref(doc: &lopdf::Document, value: &Object) -> Option<FormRef> {
    let id = value.as_reference().ok()?;
    let stream = doc.get_object(id).ok()?.as_stream().ok()?;
    let subtype = stream.dict.get(b"Subtype").ok()?.as_name().ok()?;
    if subtype != b"Form" {
        return None;
    }
    let matrix = stream
        .dict
        .get(b"Matrix")
        .ok()
        .and_then(|m| matrix_from_object(doc, m));
    Some(FormRef { id, matrix })
}
