//! Document-level text extraction.
//!
//! Pages are collected in order, then every form they (transitively)
//! invoke is collected once, in first-use order. Each holder's placements
//! are measured as soon as they are collected; pages are flattened last,
//! when every form's segments are known.
//!
//! A holder whose content cannot be read or tokenized contributes nothing
//! and raises a warning; sibling pages are unaffected.

use std::collections::{HashMap, HashSet, VecDeque};

use lopdf::{Dictionary, Object, ObjectId};
use pdfscrub_core::{
    ExtractOptions, ExtractResult, ExtractWarning, ExtractWarningCode, PageText,
};
use tracing::{debug, warn};

use crate::collector::{Collected, Placement, PlacementCollector};
use crate::dimensions::measure_block;
use crate::font_decoder::FontCache;
use crate::form_resolver::{FormResolver, Segment};
use crate::interpreter::interpret;
use crate::lopdf_backend::{
    LopdfDocument, decode_stream, dict_get, page_content_bytes, resource_chain,
};
use crate::resources::{FontKey, FontRef, FormRef, ResourceTable, SyntheticIds};

/// Extract the text runs of every page.
///
/// Never fails: unreadable pages and forms yield empty results and a
/// warning. Warnings are dropped when `options.collect_warnings` is off.
pub fn extract_document(doc: &LopdfDocument, options: &ExtractOptions) -> ExtractResult<Vec<PageText>> {
    let mut ctx = Extraction::new(doc.inner(), options);

    let page_count = doc.page_count();
    let limit = options.max_pages.map_or(page_count, |max| max.min(page_count));
    if limit < page_count {
        ctx.warn(
            ExtractWarning::new(
                ExtractWarningCode::ResourceLimitReached,
                format!("only the first {limit} of {page_count} pages were extracted"),
            ),
            None,
        );
    }

    let mut pages = Vec::with_capacity(limit);
    for index in 0..limit {
        let segments = match doc.page_dict(index) {
            Ok(page) => ctx.page_segments(index, page),
            Err(e) => {
                ctx.malformed(index, format!("page {index}: {e}"));
                Vec::new()
            }
        };
        pages.push(segments);
    }

    ctx.collect_forms();

    let mut resolver = FormResolver::new(&ctx.forms, options.max_recursion_depth);
    let value = pages
        .iter()
        .enumerate()
        .map(|(index, segments)| PageText::new(index, resolver.flatten_page(index, segments)))
        .collect();
    let resolver_warnings = resolver.take_warnings();

    let mut warnings = ctx.warnings;
    warnings.extend(resolver_warnings);
    if !options.collect_warnings {
        warnings.clear();
    }
    ExtractResult::with_warnings(value, warnings)
}

/// A form waiting to be collected, with the resources visible where it was
/// first invoked.
struct PendingForm<'d> {
    form: FormRef,
    page: usize,
    parent_chain: Vec<&'d Dictionary>,
}

/// Per-document extraction context.
struct Extraction<'d> {
    doc: &'d lopdf::Document,
    options: &'d ExtractOptions,
    ids: SyntheticIds,
    fonts: FontCache,
    unresolved_fonts: HashSet<FontKey>,
    pending: VecDeque<PendingForm<'d>>,
    forms: HashMap<ObjectId, Vec<Segment>>,
    warnings: Vec<ExtractWarning>,
}

impl<'d> Extraction<'d> {
    fn new(doc: &'d lopdf::Document, options: &'d ExtractOptions) -> Self {
        Self {
            doc,
            options,
            ids: SyntheticIds::default(),
            fonts: FontCache::new(),
            unresolved_fonts: HashSet::new(),
            pending: VecDeque::new(),
            forms: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: ExtractWarning, page: Option<usize>) {
        let warning = match page {
            Some(page) => warning.on_page(page),
            None => warning,
        };
        self.warnings.push(warning);
    }

    fn malformed(&mut self, page: usize, description: String) {
        warn!(page, "{description}");
        self.warn(
            ExtractWarning::new(ExtractWarningCode::MalformedStream, description),
            Some(page),
        );
    }

    fn page_segments(&mut self, index: usize, page: &'d Dictionary) -> Vec<Segment> {
        let content = match page_content_bytes(self.doc, page) {
            Ok(content) => content,
            Err(e) => {
                self.malformed(index, format!("page {index}: {e}"));
                return Vec::new();
            }
        };
        let chain = resource_chain(self.doc, page);
        debug!(page = index, bytes = content.len(), "collecting page");
        self.holder_segments(&content, chain, index, &format!("page {index}"))
    }

    /// Collect and measure one holder, queueing the forms it invokes.
    fn holder_segments(
        &mut self,
        content: &[u8],
        chain: Vec<&'d Dictionary>,
        page: usize,
        label: &str,
    ) -> Vec<Segment> {
        if content.len() > self.options.max_stream_bytes {
            warn!(page, bytes = content.len(), "{label}: content exceeds max_stream_bytes");
            self.warn(
                ExtractWarning::new(
                    ExtractWarningCode::ResourceLimitReached,
                    format!(
                        "{label}: {} content bytes exceed the limit of {}",
                        content.len(),
                        self.options.max_stream_bytes
                    ),
                ),
                Some(page),
            );
            return Vec::new();
        }

        let table = ResourceTable::build(self.doc, &chain, &mut self.ids);
        let mut collector = PlacementCollector::new(&table);
        if let Err(e) = interpret(content, &mut collector) {
            self.malformed(page, format!("{label}: {e}"));
            return Vec::new();
        }
        let Collected {
            placements,
            forms_used,
            warnings,
        } = collector.finish();

        for warning in warnings {
            self.warn(warning, Some(page));
        }
        for form in forms_used {
            if !self.forms.contains_key(&form.id) {
                self.pending.push_back(PendingForm {
                    form,
                    page,
                    parent_chain: chain.clone(),
                });
            }
        }
        self.measure(placements, page)
    }

    fn measure(&mut self, placements: Vec<Placement>, page: usize) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(placements.len());
        for placement in placements {
            match placement {
                Placement::TextBlock(items) => {
                    for item in &items {
                        if let Some(selection) = item.font() {
                            self.load_font(&selection.font, page);
                        }
                    }
                    segments.push(Segment::Runs(measure_block(&items, &self.fonts)));
                }
                Placement::Form(invocation) => segments.push(Segment::Form(invocation)),
            }
        }
        segments
    }

    /// Build the decoder for `font` on first use, reporting fonts that fall
    /// back to raw bytes and fonts whose dictionary is missing.
    fn load_font(&mut self, font: &FontRef, page: usize) {
        if self.unresolved_fonts.contains(&font.key) {
            return;
        }
        let warning = match self.fonts.load(self.doc, font) {
            Some((decoder, true)) => decoder.unsupported_reason().map(|reason| {
                let name = decoder.base_font().unwrap_or("?").to_string();
                warn!(page, font = %name, "{reason}; decoding bytes as code points");
                let mut warning = ExtractWarning::new(
                    ExtractWarningCode::UnsupportedFontEncoding,
                    format!("{reason}; decoding bytes as code points"),
                );
                warning.resource_name = Some(name);
                warning
            }),
            Some((_, false)) => None,
            None => {
                self.unresolved_fonts.insert(font.key);
                warn!(page, font = ?font.key, "font dictionary could not be resolved");
                Some(ExtractWarning::new(
                    ExtractWarningCode::MissingResource,
                    format!("font object {:?} could not be resolved", font.key),
                ))
            }
        };
        if let Some(warning) = warning {
            self.warn(warning, Some(page));
        }
    }

    /// Collect every queued form once. Forms found along the way are
    /// queued behind the current ones.
    fn collect_forms(&mut self) {
        while let Some(PendingForm {
            form,
            page,
            parent_chain,
        }) = self.pending.pop_front()
        {
            if self.forms.contains_key(&form.id) {
                continue;
            }
            // placeholder so a form queued twice is collected once
            self.forms.insert(form.id, Vec::new());
            let segments = self.form_segments(form.id, page, parent_chain);
            self.forms.insert(form.id, segments);
        }
    }

    fn form_segments(&mut self, id: ObjectId, page: usize, parent_chain: Vec<&'d Dictionary>) -> Vec<Segment> {
        let label = format!("form {} {}", id.0, id.1);
        let stream = match self.doc.get_object(id).and_then(Object::as_stream) {
            Ok(stream) => stream,
            Err(e) => {
                self.malformed(page, format!("{label}: {e}"));
                return Vec::new();
            }
        };
        let content = match decode_stream(stream) {
            Ok(content) => content,
            Err(e) => {
                self.malformed(page, format!("{label}: {e}"));
                return Vec::new();
            }
        };

        let mut chain = Vec::with_capacity(parent_chain.len() + 1);
        if let Some(own) = dict_get(self.doc, &stream.dict, b"Resources").and_then(|o| o.as_dict().ok()) {
            chain.push(own);
        }
        chain.extend(parent_chain);
        debug!(form = %label, bytes = content.len(), "collecting form");
        self.holder_segments(&content, chain, page, &label)
    }
}
