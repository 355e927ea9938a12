use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::domain::{
    error::DomainError, models::registrant::Registrant, services::card_renderer::CardRenderer,
};

// The portal card was drawn on a 900x520 canvas; one canvas pixel maps to
// a quarter millimetre here, giving a 225x130 mm page.
const SCALE: f64 = 0.25;
const CARD_W: f64 = 900.0 * SCALE;
const CARD_H: f64 = 520.0 * SCALE;
const BAND_W: f64 = 170.0 * SCALE;

/// Renders the membership card as a single-page PDF: dark blue ground,
/// lighter band on the left, a ring marking the portrait spot, the
/// identity lines and the matricule along the bottom. The canvas
/// gradients become flat fills and the photo payload is not rasterised;
/// everything else keeps the original geometry.
#[derive(Clone)]
pub struct PdfCardRenderer;

impl PdfCardRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfCardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for PdfCardRenderer {
    fn render(&self, registrant: &Registrant) -> Result<Vec<u8>, DomainError> {
        let (doc, page, layer) =
            PdfDocument::new("Carte de membre", Mm(CARD_W), Mm(CARD_H), "carte");
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        fill(&layer, rect(0.0, 0.0, CARD_W, CARD_H), rgb(0x02, 0x10, 0x26));
        fill(&layer, rect(0.0, 0.0, BAND_W, CARD_H), rgb(0x00, 0x80, 0xe6));

        // Portrait ring, centred where the canvas clipped the photo.
        layer.set_outline_color(rgb(0xff, 0xff, 0xff));
        layer.set_outline_thickness(3.0);
        layer.add_shape(ring(px(110.0), flip(140.0), px(70.0)));

        layer.set_fill_color(rgb(0xff, 0xff, 0xff));
        text(&layer, &bold, "DAHIRA TOUBA MEDECINE", 210.0, 80.0, 40.0);

        layer.set_fill_color(rgb(0xd7, 0xe9, 0xff));
        text(
            &layer,
            &bold,
            format!("Nom : {}", registrant.nom()),
            210.0,
            150.0,
            32.0,
        );
        text(
            &layer,
            &bold,
            format!("Prénom : {}", registrant.prenom()),
            210.0,
            200.0,
            32.0,
        );

        layer.set_fill_color(rgb(0xbc, 0xd6, 0xff));
        text(
            &layer,
            &bold,
            format!("Niveau : {}", registrant.niveau()),
            210.0,
            250.0,
            30.0,
        );
        text(
            &layer,
            &bold,
            format!("Téléphone : {}", registrant.tel()),
            210.0,
            300.0,
            30.0,
        );

        layer.set_fill_color(rgb(0x4b, 0xb3, 0xff));
        text(
            &layer,
            &bold,
            format!("Matricule : {}", registrant.matricule()),
            50.0,
            430.0,
            38.0,
        );

        doc.save_to_bytes().map_err(render_error)
    }
}

fn render_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::CardRender(e.to_string())
}

/// Canvas x/width in pixels to millimetres.
fn px(v: f64) -> f64 {
    v * SCALE
}

/// Canvas y grows downwards, PDF y upwards.
fn flip(y: f64) -> f64 {
    CARD_H - y * SCALE
}

/// Canvas font size in pixels to points.
fn font_pt(size: f64) -> f64 {
    size * SCALE * 72.0 / 25.4
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        None,
    ))
}

/// Writes one line at the canvas baseline position.
fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    line: impl Into<String>,
    x: f64,
    y: f64,
    size: f64,
) {
    layer.use_text(line, font_pt(size), Mm(px(x)), Mm(flip(y)), font);
}

/// Axis-aligned filled rectangle, coordinates in millimetres.
fn rect(x: f64, y: f64, w: f64, h: f64) -> Line {
    let points = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ];
    Line {
        points,
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    }
}

/// Stroked circle approximated by a closed polygon, millimetres.
fn ring(cx: f64, cy: f64, r: f64) -> Line {
    let segments = 64;
    let points = (0..segments)
        .map(|i| {
            let theta = std::f64::consts::TAU * f64::from(i) / f64::from(segments);
            (
                Point::new(Mm(cx + r * theta.cos()), Mm(cy + r * theta.sin())),
                false,
            )
        })
        .collect();
    Line {
        points,
        is_closed: true,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    }
}

fn fill(layer: &PdfLayerReference, shape: Line, color: Color) {
    layer.set_fill_color(color);
    layer.add_shape(shape);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::registrant::{Matricule, RegistrantDraft, RegistrantId};
    use chrono::Utc;

    fn sample_registrant() -> Registrant {
        let draft = RegistrantDraft {
            nom: "Ndao".to_string(),
            prenom: "Awa".to_string(),
            tel: "771234567".to_string(),
            niveau: "Licence 3".to_string(),
            ..Default::default()
        };
        Registrant::from_draft(
            &draft,
            RegistrantId::generate(),
            Matricule::compose("DTM", 2025, 1),
            Utc::now(),
        )
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = PdfCardRenderer::new().render(&sample_registrant()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn renders_a_sparse_record() {
        // Records written by older front-ends can be almost empty; the
        // card must still come out.
        let bytes = PdfCardRenderer::new().render(&Registrant::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
