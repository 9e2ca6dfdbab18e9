use super::*;

#[test]
fn catalog_lists_every_kind_once() {
    let panels = catalog();
    assert_eq!(panels.len(), PanelKind::ALL.len());
    for (panel, kind) in panels.iter().zip(PanelKind::ALL) {
        assert_eq!(panel.kind, kind);
    }
}

#[test]
fn every_panel_embeds_https() {
    for panel in catalog() {
        assert!(panel.url.starts_with("https://"), "{} has non-https url", panel.kind);
        assert!(!panel.title.is_empty());
        assert!(!panel.frame_title.is_empty());
    }
}

#[test]
fn parse_kind_round_trips_names() {
    for kind in PanelKind::ALL {
        assert_eq!(kind.as_str().parse::<PanelKind>().unwrap(), kind);
    }
    assert!("whiteboard".parse::<PanelKind>().is_err());
}

#[test]
fn periodic_table_panel() {
    let panel = Panel::for_kind(PanelKind::PeriodicTable);
    assert_eq!(panel.title, "Periodic Table");
    assert_eq!(panel.url, "https://ptable.com/?lang=en#Properties");
}

#[test]
fn panel_serializes_snake_case_kind() {
    let value = serde_json::to_value(Panel::for_kind(PanelKind::DigitalHuman)).unwrap();
    assert_eq!(value["kind"], "digital_human");
    assert_eq!(value["title"], "AI Digital Human");
    assert_eq!(value["url"], "https://skyyskill.zetrance.com");
    assert_eq!(value["frame_title"], "Digital Human");
    assert_eq!(value["allow"], "microphone; camera");
}

#[test]
fn digital_human_grants_microphone_and_camera() {
    let panel = Panel::for_kind(PanelKind::DigitalHuman);
    assert_eq!(panel.allow, "microphone; camera");
    assert_eq!(panel.title, "AI Digital Human");
    assert_eq!(panel.frame_title, "Digital Human");
}

#[test]
fn media_panels_grant_autoplay_fullscreen_vr() {
    for kind in [PanelKind::ModelViewer, PanelKind::PeriodicTable, PanelKind::Textbook] {
        let panel = Panel::for_kind(kind);
        assert_eq!(panel.allow, "autoplay; fullscreen; vr", "{kind}");
        assert_eq!(panel.frame_title, panel.title, "{kind}");
    }
}
