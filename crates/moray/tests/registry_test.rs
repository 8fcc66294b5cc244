use moray::error::Error;
use moray::routing::{EdgeRouterRegistry, ManhattanEdgeRouter, PolylineEdgeRouter};
use moray::RoutableEdge;

#[test]
fn registry_default_setup_registers_both_strategies() {
    let registry = EdgeRouterRegistry::default_routers();
    assert_eq!(registry.default_kind(), "polyline");
    assert_eq!(registry.get(Some("polyline")).kind(), "polyline");
    assert_eq!(registry.get(Some("manhattan")).kind(), "manhattan");
}

#[test]
fn registry_falls_back_to_the_default_for_missing_and_unknown_kinds() {
    let registry = EdgeRouterRegistry::default_routers();
    assert_eq!(registry.get(None).kind(), "polyline");
    assert_eq!(registry.get(Some("bezier")).kind(), "polyline");
}

#[test]
fn registry_router_for_reads_the_edge_kind() {
    let registry = EdgeRouterRegistry::default_routers();
    let plain = RoutableEdge::new("e1");
    assert_eq!(registry.router_for(&plain).kind(), "polyline");
    let manhattan = RoutableEdge::new("e2").with_router_kind("manhattan");
    assert_eq!(registry.router_for(&manhattan).kind(), "manhattan");
}

#[test]
fn registry_construction_validates_the_default_kind() {
    let result = EdgeRouterRegistry::new(
        "manhattan",
        vec![Box::new(PolylineEdgeRouter::default())],
    );
    assert!(matches!(
        result,
        Err(Error::UnknownDefaultRouter { kind: "manhattan" })
    ));
}

#[test]
fn registry_construction_rejects_duplicate_kinds() {
    let result = EdgeRouterRegistry::new(
        "polyline",
        vec![
            Box::new(PolylineEdgeRouter::default()),
            Box::new(PolylineEdgeRouter::default()),
        ],
    );
    assert!(matches!(
        result,
        Err(Error::DuplicateRouter { kind: "polyline" })
    ));
}

#[test]
fn registry_explicit_construction_matches_the_stock_setup() {
    let registry = EdgeRouterRegistry::new(
        "manhattan",
        vec![
            Box::new(PolylineEdgeRouter::default()),
            Box::new(ManhattanEdgeRouter::default()),
        ],
    )
    .unwrap();
    assert_eq!(registry.default_kind(), "manhattan");
    assert_eq!(registry.get(None).kind(), "manhattan");
    assert_eq!(registry.get(Some("polyline")).kind(), "polyline");
}
