use std::io::Write;

use kronos_correlation::dataset::load_dataset;
use kronos_correlation::state::session::MissionSession;
use kronos_correlation::ui::table::RowOptions;
use kronos_correlation::ui::view::build_view;
use kronos_correlation::{map_cell_to_point, CellRecord, ColorSystem, Role, PALETTE};

fn records() -> Vec<CellRecord> {
    vec![CellRecord::new("100", "Alpha"), CellRecord::new("200", "Beta")]
}

#[test]
fn alpha_beta_scenario() {
    let records = records();
    let mut system = ColorSystem::new();

    let ordinals = system.assign_ordinals(&["Alpha", "Beta"]);
    assert_eq!(ordinals["Alpha"], 1);
    assert_eq!(ordinals["Beta"], 2);

    let alpha = system.resolve_color("Alpha");
    let beta = system.resolve_color("Beta");
    for _ in 0..100 {
        assert!(std::ptr::eq(alpha, system.resolve_color("Alpha")));
        assert!(std::ptr::eq(beta, system.resolve_color("Beta")));
    }

    assert_eq!(map_cell_to_point("100", &records), Some("Alpha"));

    let style = system.compose_badge_style("100", Role::Originator, &records);
    assert!(style.split_whitespace().any(|t| t == alpha.border));
}

#[test]
fn safe_defaults_never_panic() {
    let mut system = ColorSystem::new();
    assert_eq!(map_cell_to_point("", &[]), None);
    assert!(std::ptr::eq(system.resolve_color(""), &PALETTE[0]));
    assert_eq!(system.get_ordinal("never-seen"), None);
}

#[test]
fn every_badge_has_a_border() {
    let records = records();
    let mut system = ColorSystem::new();
    for cell in ["100", "200", "10", "", "nope"] {
        for role in [Role::Originator, Role::Receptor] {
            let style = system.compose_badge_style(cell, role, &records);
            assert!(
                style.split_whitespace().any(|t| t.starts_with("border-")),
                "no border token in {style:?}"
            );
        }
    }
}

#[test]
fn palette_is_closed_over_many_points() {
    let mut system = ColorSystem::new();
    for i in 0..500 {
        let color = system.resolve_color(&format!("Punto-{i}"));
        assert!(PALETTE.iter().any(|c| std::ptr::eq(c, color)));
    }
    assert_eq!(system.stats().colors, 500);
}

#[test]
fn ordinals_survive_later_batches() {
    let mut system = ColorSystem::new();
    let first = system.assign_ordinals(&["b", "a"]);
    let second = system.assign_ordinals(&["b", "a", "c"]);
    assert_eq!(first["a"], second["a"]);
    assert_eq!(first["b"], second["b"]);
}

fn write_dataset(dir: &tempfile::TempDir, name: &str, mission: &str, point: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "mission": "{mission}",
            "cells": [{{"cellId": "CELL-0042", "punto": "{point}"}}],
            "results": [
                {{"targetNumber": "3009990000", "occurrences": 2,
                  "relatedCells": ["0042"], "role": "receptor",
                  "firstDetection": 0, "lastDetection": 60000}}
            ]
        }}"#
    )
    .unwrap();
    path
}

#[test]
fn mission_switch_renumbers_points() {
    let dir = tempfile::tempdir().unwrap();
    let first = load_dataset(&write_dataset(&dir, "a.json", "M-1", "Zulu")).unwrap();
    let second = load_dataset(&write_dataset(&dir, "b.json", "M-2", "Yankee")).unwrap();

    let mut session = MissionSession::default();
    session.enter_mission(&first.mission);
    let view = build_view(&mut session.colors, &first, &RowOptions::default());
    assert_eq!(view.legend[0].ordinal, 1);
    let badge = &view.rows[0].cells[0];
    assert_eq!(badge.point.as_deref(), Some("Zulu"));
    assert_eq!(view.rows[0].last_detection, "1970-01-01 00:01");

    assert!(session.enter_mission(&second.mission));
    assert_eq!(session.colors.get_ordinal("Zulu"), None);
    let view = build_view(&mut session.colors, &second, &RowOptions::default());
    assert_eq!(view.legend[0].point, "Yankee");
    assert_eq!(view.rows[0].cells[0].ordinal, Some(1));
    assert_eq!(view.rows[0].role, Role::Receptor);
}
