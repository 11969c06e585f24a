//! Placement collection for one content holder.
//!
//! [`PlacementCollector`] is the [`OperatorHandler`] the extraction pipeline
//! runs over every page and form. It tracks graphics and text state and
//! records, in order, one [`Placement::TextBlock`] per text object and one
//! [`Placement::Form`] per `Do` of a Form XObject.

use lopdf::ObjectId;
use pdfscrub_core::{ExtractWarning, ExtractWarningCode, Matrix, TextChunk};
use tracing::{debug, warn};

use crate::graphics_state::StateStack;
use crate::handler::OperatorHandler;
use crate::resources::{FormRef, ResourceTable};
use crate::text_state::{FontSelection, TextState};
use crate::tokenizer::Operand;

/// One text-showing operator's output.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    /// String operands and, for `TJ`, kerning adjustments.
    pub chunks: Vec<TextChunk>,
    /// Whether this came from a `TJ` array.
    pub array: bool,
    /// Text state at the time of showing.
    pub state: TextState,
    pub ctm: Matrix,
}

impl TextItem {
    /// The font in effect. Items are only produced with a font selected.
    pub fn font(&self) -> Option<&FontSelection> {
        self.state.font.as_ref()
    }
}

/// A `Do` of a Form XObject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInvocation {
    pub form: ObjectId,
    pub matrix: Option<Matrix>,
    pub ctm: Matrix,
}

/// An entry of a holder's placement list.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The items of one `BT` .. `ET` text object.
    TextBlock(Vec<TextItem>),
    Form(FormInvocation),
}

/// What a collection pass produced.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub placements: Vec<Placement>,
    /// Forms invoked by this holder, first use first, without duplicates.
    pub forms_used: Vec<FormRef>,
    pub warnings: Vec<ExtractWarning>,
}

/// Stateful operator handler producing [`Placement`]s.
pub struct PlacementCollector<'r> {
    resources: &'r ResourceTable,
    state: StateStack,
    block: Vec<TextItem>,
    out: Collected,
}

impl<'r> PlacementCollector<'r> {
    pub fn new(resources: &'r ResourceTable) -> Self {
        Self {
            resources,
            state: StateStack::new(),
            block: Vec::new(),
            out: Collected::default(),
        }
    }

    /// Finish the pass. An unterminated text object is closed first.
    pub fn finish(mut self) -> Collected {
        if self.state.in_text_object() {
            self.end_text_object();
        }
        self.out
    }

    fn end_text_object(&mut self) {
        self.state.end_text_object();
        let items = std::mem::take(&mut self.block);
        self.out.placements.push(Placement::TextBlock(items));
    }

    fn warn(&mut self, index: usize, resource: Option<&str>, description: String) {
        warn!(operator = index, resource, "{description}");
        let mut warning = ExtractWarning::new(ExtractWarningCode::MissingResource, description);
        warning.operator_index = Some(index);
        warning.resource_name = resource.map(str::to_string);
        self.out.warnings.push(warning);
    }

    fn text(&mut self) -> &mut TextState {
        self.state.current_text_state_mut()
    }

    /// Record a text item from the current state, then mark the matrices
    /// as consumed.
    fn show(&mut self, index: usize, chunks: Vec<TextChunk>, array: bool) {
        if !self.state.in_text_object() {
            debug!(operator = index, "text shown outside a text object; ignored");
            return;
        }
        if self.state.current_text_state().font.is_none() {
            self.warn(index, None, "text shown with no font selected".to_string());
            return;
        }
        let item = TextItem {
            chunks,
            array,
            state: self.state.current_text_state().clone(),
            ctm: self.state.current_ctm(),
        };
        self.block.push(item);
        self.text().mark_consumed();
    }

    fn show_string(&mut self, index: usize, operand: Option<&Operand>) {
        if let Some(bytes) = operand.and_then(Operand::as_string_bytes) {
            self.show(index, vec![TextChunk::Bytes(bytes.to_vec())], false);
        }
    }

    fn select_font(&mut self, index: usize, operands: &[Operand]) {
        let [name, size] = match operands {
            [.., name, size] => [name, size],
            _ => return,
        };
        let (Some(name), Some(size)) = (name.as_name(), size.as_f64()) else {
            return;
        };
        match self.resources.font(name) {
            Some(font) => {
                let selection = FontSelection {
                    font: font.clone(),
                    size,
                };
                self.text().font = Some(selection);
            }
            None => self.warn(index, Some(name), format!("font /{name} not found in resources")),
        }
    }

    fn apply_ext_gstate(&mut self, index: usize, name: &str) {
        match self.resources.ext_gstate(name) {
            Some(entry) => {
                if let Some(font) = entry.font.clone() {
                    self.text().font = Some(font);
                }
            }
            None => self.warn(
                index,
                Some(name),
                format!("graphics state /{name} not found in resources"),
            ),
        }
    }

    fn invoke(&mut self, name: &str) {
        let Some(form) = self.resources.form(name).copied() else {
            return;
        };
        self.out.placements.push(Placement::Form(FormInvocation {
            form: form.id,
            matrix: form.matrix,
            ctm: self.state.current_ctm(),
        }));
        if !self.out.forms_used.iter().any(|f| f.id == form.id) {
            self.out.forms_used.push(form);
        }
    }
}

/// The last `N` operands as numbers.
fn last_numbers<const N: usize>(operands: &[Operand]) -> Option<[f64; N]> {
    let tail = operands.get(operands.len().checked_sub(N)?..)?;
    let mut out = [0.0; N];
    for (slot, op) in out.iter_mut().zip(tail) {
        *slot = op.as_f64()?;
    }
    Some(out)
}

fn last_number(operands: &[Operand]) -> Option<f64> {
    last_numbers::<1>(operands).map(|[v]| v)
}

fn tj_chunks(items: &[Operand]) -> Vec<TextChunk> {
    items
        .iter()
        .filter_map(|item| match item {
            Operand::LiteralString(b) | Operand::HexString(b) => Some(TextChunk::Bytes(b.clone())),
            other => other.as_f64().map(TextChunk::Adjustment),
        })
        .collect()
}

impl OperatorHandler for PlacementCollector<'_> {
    fn on_operator(&mut self, index: usize, name: &str, operands: &[Operand]) {
        match name {
            "q" => self.state.push_state(),
            "Q" => self.state.pop_state(),
            "cm" => {
                if let Some(m) = last_numbers::<6>(operands) {
                    self.state.concat_ctm(&Matrix::from_array(m));
                }
            }
            "gs" => {
                if let Some(name) = operands.last().and_then(Operand::as_name) {
                    self.apply_ext_gstate(index, name);
                }
            }
            "Do" => {
                if let Some(name) = operands.last().and_then(Operand::as_name) {
                    self.invoke(name);
                }
            }

            "Tc" => {
                if let Some(v) = last_number(operands) {
                    self.text().char_space = v;
                }
            }
            "Tw" => {
                if let Some(v) = last_number(operands) {
                    self.text().word_space = v;
                }
            }
            "Tz" => {
                if let Some(v) = last_number(operands) {
                    self.text().scale = v;
                }
            }
            "TL" => {
                if let Some(v) = last_number(operands) {
                    self.text().leading = v;
                }
            }
            "Ts" => {
                if let Some(v) = last_number(operands) {
                    self.text().rise = v;
                }
            }
            "Tf" => self.select_font(index, operands),

            "BT" => {
                if self.state.in_text_object() {
                    // nested BT: close the open object first
                    self.end_text_object();
                }
                self.state.start_text_object();
            }
            "ET" => {
                if self.state.in_text_object() {
                    self.end_text_object();
                }
            }

            "Td" => {
                if let Some([tx, ty]) = last_numbers::<2>(operands) {
                    self.text().move_text_position(tx, ty);
                }
            }
            "TD" => {
                if let Some([tx, ty]) = last_numbers::<2>(operands) {
                    self.text().move_text_position_and_set_leading(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = last_numbers::<6>(operands) {
                    self.text().set_text_matrix(Matrix::from_array(m));
                }
            }
            "T*" => self.text().move_to_next_line(),

            "Tj" => self.show_string(index, operands.last()),
            "'" => {
                self.text().move_to_next_line();
                self.show_string(index, operands.last());
            }
            "\"" => {
                if let [.., aw, ac, _] = operands {
                    if let (Some(aw), Some(ac)) = (aw.as_f64(), ac.as_f64()) {
                        let text = self.text();
                        text.word_space = aw;
                        text.char_space = ac;
                    }
                }
                self.text().move_to_next_line();
                self.show_string(index, operands.last());
            }
            "TJ" => {
                if let Some(items) = operands.last().and_then(Operand::as_array) {
                    self.show(index, tj_chunks(items), true);
                }
            }
            _ => {}
        }
    }

    fn on_warning(&mut self, warning: ExtractWarning) {
        self.out.warnings.push(warning);
    }
}
