use checklist_core::model::SaveBanner;

use super::test_harness::{ViewKind, sample_operator, sample_page, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn checklist_renders_prerendered_progress() {
    let mut harness =
        setup_view_harness(ViewKind::Checklist, sample_page(), Some(sample_operator()));
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "1 de 3 preguntas completadas",
        "33%",
        "width: 33%",
        "question-1-ok",
        "¿Se limpiaron los ventiladores?",
        "Fecha: 14/11/2023",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("¡Checklist completo!"), "unexpected badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_without_operator_shows_guard() {
    let mut harness = setup_view_harness(ViewKind::Checklist, sample_page(), None);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Completa los datos del equipo antes de iniciar el checklist."),
        "missing guard in {html}"
    );
    assert!(!html.contains("progress-counter"), "board rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn operator_form_renders_fields_and_date() {
    let mut harness = setup_view_harness(ViewKind::OperatorForm, sample_page(), None);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Activo fijo",
        "Técnico",
        "Fecha: 14/11/2023",
        "type=\"email\"",
        "Iniciar checklist",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn success_banner_offers_copying_the_file_name() {
    let page = sample_page().with_banner(SaveBanner::Saved {
        file: "Activo AF-1020 Checklist preventivo.xlsx".to_string(),
    });
    let mut harness = setup_view_harness(ViewKind::Checklist, page, Some(sample_operator()));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Checklist guardado correctamente: Activo AF-1020 Checklist preventivo.xlsx"),
        "missing banner in {html}"
    );
    assert!(html.contains("Copiar nombre"), "missing copy button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_chrome_renders_search_field() {
    let mut harness = setup_view_harness(ViewKind::OperatorForm, sample_page(), None);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Buscar pregunta (Ctrl+K)"),
        "missing search field in {html}"
    );
    assert!(!html.contains("back-to-top"), "back-to-top shown at the top: {html}");
}
