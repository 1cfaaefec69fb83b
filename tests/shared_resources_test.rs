use std::sync::Arc;

use sector_visuals::{
    Color, ConnectionKind, EntityKind, MeshGeometry, PrimitiveShape, SharedResources, VisualRole,
    ZoneKind, ZoneShape, resources,
};

use crate::common::test_utils;

mod common;

#[test]
fn every_kind_with_a_visual_has_a_model() {
    test_utils::init_logger();
    let shared = SharedResources::new().unwrap();
    for kind in EntityKind::ALL {
        let model = shared.model_for_kind(kind);
        if kind == EntityKind::None {
            assert!(model.is_none());
        } else {
            let model = model.unwrap_or_else(|| panic!("{kind} has no model"));
            assert!(!model.mesh().indices().is_empty());
        }
    }
}

#[test]
fn repeated_lookups_return_the_same_instance() {
    let shared = SharedResources::new().unwrap();
    for role in VisualRole::ALL {
        let first = shared.model(role);
        let second = shared.model_by_name(role.name()).unwrap();
        assert!(Arc::ptr_eq(first, second), "{role}");
    }
    let station = shared.model_for_kind(EntityKind::Station).unwrap();
    assert!(Arc::ptr_eq(station, shared.model(VisualRole::Station)));
}

#[test]
fn process_wide_registry_is_built_once() {
    let first = resources::init().unwrap();
    let second = resources::init().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(resources::get().unwrap(), first));
    assert!(Arc::ptr_eq(
        first.model(VisualRole::Sun),
        second.model(VisualRole::Sun)
    ));
}

#[test]
fn only_eight_meshes_back_all_models() {
    let shared = SharedResources::new().unwrap();
    let mut distinct: Vec<&Arc<MeshGeometry>> = Vec::new();
    for role in VisualRole::ALL {
        let mesh = shared.model(role).mesh();
        if !distinct.iter().any(|m| Arc::ptr_eq(*m, mesh)) {
            distinct.push(mesh);
        }
    }
    assert_eq!(distinct.len(), 8);
}

#[test]
fn ring_and_trade_lane_meshes_match_their_parameters() {
    let shared = SharedResources::new().unwrap();
    let ring = shared.model(VisualRole::JumpHole).mesh();
    assert_eq!(
        ring.shape(),
        PrimitiveShape::Cylinder {
            radius: 0.5,
            length: 0.25,
            slices: 12
        }
    );
    assert!(Arc::ptr_eq(ring, shared.model(VisualRole::DockingRing).mesh()));

    let lane = shared.model(VisualRole::TradeLane).mesh();
    let size = lane.bounds().size();
    assert!((size.z - 0.3).abs() < 1e-6);

    let sphere = shared.model(VisualRole::Planet).mesh();
    match sphere.shape() {
        PrimitiveShape::Sphere { slices, stacks, .. } => assert_eq!((slices, stacks), (18, 9)),
        other => panic!("planet is drawn with {other:?}"),
    }
}

#[test]
fn zones_resolve_to_their_tinted_variants() {
    let shared = SharedResources::new().unwrap();
    let exclusion = shared.model(VisualRole::for_zone(ZoneShape::Box, ZoneKind::Exclusion));
    assert_eq!(exclusion.material().name(), "ZoneExclusion");
    assert_eq!(exclusion.mesh().name(), "Box");

    let patrol = shared.model(VisualRole::for_zone(ZoneShape::Cylinder, ZoneKind::PathPatrol));
    let trade = shared.model(VisualRole::for_zone(ZoneShape::Cylinder, ZoneKind::PathTrade));
    assert!(Arc::ptr_eq(patrol.mesh(), trade.mesh()));
    assert!(!Arc::ptr_eq(patrol.material(), trade.material()));
    assert_eq!(trade.material().base_color(), Color::rgb(10, 15, 30));
}

#[test]
fn connection_colors() {
    let shared = SharedResources::new().unwrap();
    assert_eq!(shared.connection_color(ConnectionKind::JumpHole), Color::ORANGE_RED);
    assert_eq!(shared.connection_color(ConnectionKind::JumpGate), Color::SLATE_GRAY);
    assert_eq!(shared.connection_color(ConnectionKind::Both), Color::SNOW);
    assert_eq!(shared.connection_color(ConnectionKind::None), Color::BLACK);
    for kind in ConnectionKind::ALL {
        assert_eq!(shared.connection_color(kind), kind.color(), "{kind:?}");
    }
}

#[test]
fn registry_can_be_read_from_many_threads() {
    let shared = resources::init().unwrap();
    let expected: Vec<usize> = VisualRole::ALL
        .iter()
        .map(|&role| Arc::as_ptr(shared.model(role)) as usize)
        .collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                VisualRole::ALL
                    .iter()
                    .map(|&role| Arc::as_ptr(shared.model(role)) as usize)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
