//! Form XObject inlining.
//!
//! Every holder's measured output is a list of [`Segment`]s: runs it drew
//! itself, and invocations of forms. Flattening replaces each invocation
//! with the form's own flattened runs, re-placed under the invocation's
//! matrix. A form is resolved once per document; a form that is still being
//! resolved when it is reached again (a cycle) contributes nothing.

use std::collections::HashMap;
use std::rc::Rc;

use lopdf::ObjectId;
use pdfscrub_core::{ExtractWarning, ExtractWarningCode, Matrix, TextRun};
use tracing::{debug, warn};

use crate::collector::FormInvocation;
use crate::dimensions::MeasuredRun;

/// One entry of a holder's measured placement list.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Runs of one text object.
    Runs(Vec<MeasuredRun>),
    Form(FormInvocation),
}

#[derive(Debug, Clone)]
enum FormState {
    InProgress,
    Resolved(Rc<Vec<MeasuredRun>>),
}

/// Resolves form invocations against the measured segments of every form
/// in the document.
pub struct FormResolver<'a> {
    forms: &'a HashMap<ObjectId, Vec<Segment>>,
    states: HashMap<ObjectId, FormState>,
    max_depth: usize,
    warnings: Vec<ExtractWarning>,
}

impl<'a> FormResolver<'a> {
    pub fn new(forms: &'a HashMap<ObjectId, Vec<Segment>>, max_depth: usize) -> Self {
        Self {
            forms,
            states: HashMap::new(),
            max_depth,
            warnings: Vec::new(),
        }
    }

    /// Flatten a page's segments into page-space runs.
    pub fn flatten_page(&mut self, page_index: usize, segments: &[Segment]) -> Vec<TextRun> {
        let start = self.warnings.len();
        let runs = self.expand(segments, 0);
        for warning in &mut self.warnings[start..] {
            warning.page = Some(page_index);
        }
        runs.into_iter().map(into_text_run).collect()
    }

    /// Warnings raised so far.
    pub fn take_warnings(&mut self) -> Vec<ExtractWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// The flattened runs of `form` in the form's own space.
    ///
    /// `depth` is the nesting level of the invocation, 1 for a form drawn
    /// directly by a page.
    pub fn resolve(&mut self, form: ObjectId, depth: usize) -> Rc<Vec<MeasuredRun>> {
        match self.states.get(&form) {
            Some(FormState::Resolved(runs)) => return Rc::clone(runs),
            Some(FormState::InProgress) => {
                warn!(form = ?form, "form invokes itself; resolved as empty");
                return Rc::default();
            }
            None => {}
        }
        if depth > self.max_depth {
            warn!(form = ?form, depth, "form nesting limit reached");
            self.warnings.push(ExtractWarning::new(
                ExtractWarningCode::ResourceLimitReached,
                format!(
                    "form {} {} nested deeper than {} levels; skipped",
                    form.0, form.1, self.max_depth
                ),
            ));
            return Rc::default();
        }
        let forms = self.forms;
        let Some(segments) = forms.get(&form) else {
            debug!(form = ?form, "form was never collected");
            return Rc::default();
        };

        self.states.insert(form, FormState::InProgress);
        let runs = Rc::new(self.expand(segments, depth));
        self.states.insert(form, FormState::Resolved(Rc::clone(&runs)));
        runs
    }

    fn expand(&mut self, segments: &[Segment], depth: usize) -> Vec<MeasuredRun> {
        let mut out = Vec::new();
        for segment in segments {
            match segment {
                Segment::Runs(runs) => out.extend(runs.iter().cloned()),
                Segment::Form(invocation) => {
                    let placement = placement_matrix(invocation);
                    let inner = self.resolve(invocation.form, depth + 1);
                    out.extend(inner.iter().map(|run| MeasuredRun {
                        ctm: run.ctm.multiply(&placement),
                        ..run.clone()
                    }));
                }
            }
        }
        out
    }
}

/// Form space to invoking holder space: `/Matrix × CTM`.
fn placement_matrix(invocation: &FormInvocation) -> Matrix {
    match invocation.matrix {
        Some(m) => m.multiply(&invocation.ctm),
        None => invocation.ctm,
    }
}

fn into_text_run(run: MeasuredRun) -> TextRun {
    let matrix = run.matrix();
    TextRun {
        global_bbox: matrix.transform_box(&run.local_bbox),
        text: run.text,
        chunks: run.chunks,
        bytes: run.bytes,
        matrix,
        local_bbox: run.local_bbox,
        translation_method: run.method,
        displacement: run.displacement,
    }
}
