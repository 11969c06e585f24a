//! Text translation and run dimensions.
//!
//! A text object's items are measured in order. An item whose text matrix
//! was not freshly set continues from where the previous item ended, so
//! consecutive `Tj`s without a positioning operator flow left to right.

use pdfscrub_core::{BBox, Matrix, TextChunk, TranslationMethod};

use crate::collector::TextItem;
use crate::font_decoder::{FontCache, FontDecoder};

/// A text item with its text decoded and its extent measured, still in the
/// coordinate space of the holder that drew it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRun {
    pub text: String,
    pub chunks: Vec<TextChunk>,
    pub bytes: Vec<u8>,
    pub method: TranslationMethod,
    /// Text matrix at the start of the run.
    pub tm: Matrix,
    pub ctm: Matrix,
    pub local_bbox: BBox,
    pub displacement: f64,
}

impl MeasuredRun {
    /// Text space to holder space.
    pub fn matrix(&self) -> Matrix {
        self.tm.multiply(&self.ctm)
    }
}

/// Decode an item's string chunks.
///
/// A single string is decoded as is. For `TJ`, chunk texts are
/// concatenated and a chunk that decodes to nothing stands in as a space.
pub fn translate_item(item: &TextItem, decoder: &FontDecoder) -> String {
    let strings = item.chunks.iter().filter_map(TextChunk::as_bytes);
    if !item.array {
        return strings.map(|b| decoder.translate(b).text).collect();
    }
    let mut text = String::new();
    for bytes in strings {
        let piece = decoder.translate(bytes).text;
        if piece.is_empty() {
            text.push(' ');
        } else {
            text.push_str(&piece);
        }
    }
    text
}

/// Horizontal pen position within one run.
struct Pen {
    tm: Matrix,
    position: f64,
    min: f64,
    max: f64,
}

impl Pen {
    fn new(tm: Matrix) -> Self {
        Self {
            tm,
            position: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }

    fn advance(&mut self, tx: f64) {
        self.position += tx;
        self.min = self.min.min(self.position);
        self.max = self.max.max(self.position);
        self.tm = Matrix::translation(tx, 0.0).multiply(&self.tm);
    }
}

/// Measure the items of one text object. Items whose font has no decoder
/// in `fonts` are skipped.
pub fn measure_block(items: &[TextItem], fonts: &FontCache) -> Vec<MeasuredRun> {
    let mut runs = Vec::with_capacity(items.len());
    let mut previous_end: Option<Matrix> = None;

    for item in items {
        let Some(selection) = item.font() else {
            continue;
        };
        let Some(decoder) = fonts.get(&selection.font) else {
            continue;
        };
        let state = &item.state;
        let start = match previous_end {
            Some(end) if !state.tm_dirty => end,
            _ => state.tm,
        };

        let size = selection.size;
        let scale = state.scale / 100.0;
        let mut pen = Pen::new(start);
        for chunk in &item.chunks {
            match chunk {
                TextChunk::Bytes(bytes) => decoder.iterate_displacements(bytes, |width, code| {
                    let word = if code == 32 { state.word_space } else { 0.0 };
                    pen.advance((width * size + state.char_space + word) * scale);
                }),
                TextChunk::Adjustment(n) => pen.advance(-n / 1000.0 * size * scale),
            }
        }

        let local_bbox = BBox::new(
            pen.min,
            (decoder.descent() + state.rise) * size / 1000.0,
            pen.max,
            (decoder.ascent() + state.rise) * size / 1000.0,
        );
        previous_end = Some(pen.tm);

        let bytes = item
            .chunks
            .iter()
            .filter_map(TextChunk::as_bytes)
            .flatten()
            .copied()
            .collect();
        runs.push(MeasuredRun {
            text: translate_item(item, decoder),
            chunks: item.chunks.clone(),
            bytes,
            method: decoder.method(),
            tm: start,
            ctm: item.ctm,
            local_bbox,
            displacement: pen.position,
        });
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Collected, Placement, PlacementCollector};
    use crate::interpreter::interpret;
    use crate::lopdf_backend::fixtures;
    use crate::resources::{ResourceTable, SyntheticIds};
    use lopdf::{Document, Object, dictionary};

    /// Collect `content` against a font with every width 500 and
    /// ascent/descent 800/-200, then measure the first text object.
    fn measure(content: &[u8]) -> Vec<MeasuredRun> {
        let mut doc = Document::with_version("1.5");
        let desc = doc.add_object(dictionary! { "Ascent" => 800, "Descent" => -200 });
        let font = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Custom",
            "Encoding" => "WinAnsiEncoding",
            "FirstChar" => 0,
            "LastChar" => 255,
            "Widths" => vec![Object::Integer(500); 256],
            "FontDescriptor" => desc,
        });
        let resources = fixtures::font_resources(font);
        let mut ids = SyntheticIds::default();
        let table = ResourceTable::build(&doc, &[&resources], &mut ids);
        let mut collector = PlacementCollector::new(&table);
        interpret(content, &mut collector).unwrap();
        let Collected { placements, .. } = collector.finish();

        let mut fonts = FontCache::new();
        fonts.load(&doc, &table.font("F1").unwrap().clone()).unwrap();
        match &placements[0] {
            Placement::TextBlock(items) => measure_block(items, &fonts),
            Placement::Form(_) => panic!("expected a text block"),
        }
    }

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn standard_advance_at_size_12() {
        let runs = measure(b"BT /F1 12 Tf (a) Tj ET");
        approx(runs[0].displacement, 6.0);
        approx(runs[0].local_bbox.x1, 6.0);
    }

    #[test]
    fn advance_scales_with_size_and_horizontal_scale() {
        approx(measure(b"BT /F1 24 Tf (a) Tj ET")[0].displacement, 12.0);
        approx(measure(b"BT /F1 12 Tf 50 Tz (a) Tj ET")[0].displacement, 3.0);
    }

    #[test]
    fn char_and_word_spacing() {
        // 3 glyphs at 6.0 each, Tc on every glyph, Tw on the space only
        let run = &measure(b"BT /F1 12 Tf 1 Tc 2 Tw (a b) Tj ET")[0];
        approx(run.displacement, 3.0 * 7.0 + 2.0);
    }

    #[test]
    fn tj_adjustments_move_the_pen() {
        let run = &measure(b"BT /F1 10 Tf [(a) -1000 (b)] TJ ET")[0];
        // 5 + 10 + 5
        approx(run.displacement, 20.0);
        assert_eq!(run.text, "ab");
    }

    #[test]
    fn negative_extent_from_positive_adjustment() {
        let run = &measure(b"BT /F1 10 Tf [2000 (a)] TJ ET")[0];
        approx(run.local_bbox.x0, -20.0);
        approx(run.local_bbox.x1, 0.0);
        approx(run.displacement, -15.0);
    }

    #[test]
    fn vertical_extent_uses_ascent_descent_and_rise() {
        let run = &measure(b"BT /F1 10 Tf 100 Ts (a) Tj ET")[0];
        approx(run.local_bbox.y0, -1.0);
        approx(run.local_bbox.y1, 9.0);
    }

    #[test]
    fn consecutive_shows_continue_from_previous_end() {
        let runs = measure(b"BT /F1 12 Tf 72 700 Td (ab) Tj (c) Tj ET");
        assert_eq!(runs[0].tm.to_array(), [1.0, 0.0, 0.0, 1.0, 72.0, 700.0]);
        approx(runs[1].tm.e, 84.0);
        approx(runs[1].tm.f, 700.0);
    }

    #[test]
    fn fresh_matrix_resets_continuity() {
        let runs = measure(b"BT /F1 12 Tf 72 700 Td (ab) Tj 0 -14 Td (c) Tj ET");
        approx(runs[1].tm.e, 72.0);
        approx(runs[1].tm.f, 686.0);
    }

    #[test]
    fn tj_empty_chunk_becomes_space() {
        let run = &measure(b"BT /F1 12 Tf [(a) () (b)] TJ ET")[0];
        assert_eq!(run.text, "a b");
        assert_eq!(run.bytes, b"ab");
    }

    #[test]
    fn single_show_keeps_empty_text() {
        let run = &measure(b"BT /F1 12 Tf () Tj ET")[0];
        assert_eq!(run.text, "");
        approx(run.displacement, 0.0);
    }

    #[test]
    fn run_matrix_composes_tm_then_ctm() {
        let run = &measure(b"2 0 0 2 10 10 cm BT /F1 12 Tf 5 5 Td (a) Tj ET")[0];
        assert_eq!(run.matrix().to_array(), [2.0, 0.0, 0.0, 2.0, 20.0, 20.0]);
        assert_eq!(run.method, TranslationMethod::SimpleEncoding);
    }
}
