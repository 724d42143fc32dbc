use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selkie_graph::geom::{point, rect};
use selkie_graph::{Directedness, Graph, MetadataValue};
use selkie_layout::{
    LayoutConfig, LayoutContext, RandomizeMode, VertexSorter, is_unplaced, margin_rect,
    randomize_locations, selected_edges, selected_vertices, unplaced,
};

#[test]
fn margin_rect_insets_all_four_sides() {
    let reduced = margin_rect(rect(0.0, 0.0, 100.0, 80.0), 10.0).unwrap();
    assert_eq!(reduced, rect(10.0, 10.0, 80.0, 60.0));

    assert_eq!(margin_rect(rect(0.0, 0.0, 100.0, 80.0), 0.0), Some(rect(0.0, 0.0, 100.0, 80.0)));
    assert_eq!(margin_rect(rect(0.0, 0.0, 100.0, 80.0), 40.0), None);
    assert_eq!(margin_rect(rect(0.0, 0.0, 100.0, 80.0), 50.0), None);
}

#[test]
fn selection_defaults_to_the_whole_graph() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");

    let config = LayoutConfig::default();
    assert_eq!(selected_vertices(&g, &config), vec![a, b]);
}

#[test]
fn subset_selection_keeps_caller_order_and_drops_strangers() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    let removed = g.add_vertex("gone");
    g.remove_vertex(removed).unwrap();

    let config = LayoutConfig {
        subset: Some(vec![c, removed, a]),
        ..Default::default()
    };
    assert_eq!(selected_vertices(&g, &config), vec![c, a]);
    let _ = b;
}

#[test]
fn selected_edges_require_both_endpoints() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    let ab = g.add_edge(a, b, false).unwrap();
    g.add_edge(b, c, false).unwrap();
    let loop_a = g.add_edge(a, a, false).unwrap();

    let mut edges = selected_edges(&g, &[a, b]);
    edges.sort();
    let mut expected = vec![ab, loop_a];
    expected.sort();
    assert_eq!(edges, expected);
}

#[test]
fn randomization_skips_locked_vertices() {
    let mut g = Graph::new(Directedness::Undirected);
    let free = g.add_vertex_at("free", point(-1.0, -1.0));
    let locked = g.add_vertex_at("locked", point(-2.0, -2.0));

    let r = rect(0.0, 0.0, 50.0, 50.0);
    let mut ctx = LayoutContext::new(r)
        .with_rng(ChaCha8Rng::seed_from_u64(7))
        .with_config(LayoutConfig {
            locked: [locked].into_iter().collect(),
            ..Default::default()
        });
    let selected = selected_vertices(&g, ctx.config());
    randomize_locations(&mut g, &selected, &mut ctx, r, RandomizeMode::All);

    let p = g.vertex(free).unwrap().location;
    assert!(p.x >= 0.0 && p.x <= 50.0 && p.y >= 0.0 && p.y <= 50.0);
    assert_eq!(p.x, p.x.trunc());
    assert_eq!(g.vertex(locked).unwrap().location, point(-2.0, -2.0));
}

#[test]
fn unplaced_only_randomization_respects_pre_placed_vertices() {
    let mut g = Graph::new(Directedness::Undirected);
    let placed = g.add_vertex_at("placed", point(5.0, 5.0));
    let pending = g.add_vertex_at("pending", unplaced());
    assert!(is_unplaced(g.vertex(pending).unwrap().location));

    let r = rect(0.0, 0.0, 50.0, 50.0);
    let mut ctx = LayoutContext::new(r).with_rng(ChaCha8Rng::seed_from_u64(8));
    let selected = selected_vertices(&g, ctx.config());
    randomize_locations(&mut g, &selected, &mut ctx, r, RandomizeMode::UnplacedOnly);

    assert_eq!(g.vertex(placed).unwrap().location, point(5.0, 5.0));
    let p = g.vertex(pending).unwrap().location;
    assert!(!is_unplaced(p));
    assert!(p.x >= 0.0 && p.x <= 50.0 && p.y >= 0.0 && p.y <= 50.0);
}

#[test]
fn sorter_by_name_and_by_metadata() {
    let mut g = Graph::new(Directedness::Undirected);
    let z = g.add_vertex("z");
    let a = g.add_vertex("a");
    let m = g.add_vertex("m");
    g.vertex_mut(z).unwrap().metadata.insert("rank".into(), MetadataValue::from(1i64));
    g.vertex_mut(a).unwrap().metadata.insert("rank".into(), MetadataValue::from(3i64));
    g.vertex_mut(m).unwrap().metadata.insert("rank".into(), MetadataValue::from(2.5));

    let mut ids = vec![z, a, m];
    VertexSorter::ByName.sort(&g, &mut ids);
    assert_eq!(ids, vec![a, m, z]);

    let mut ids = vec![z, a, m];
    VertexSorter::ByMetadata("rank".into()).sort(&g, &mut ids);
    assert_eq!(ids, vec![z, m, a]);

    let mut ids = vec![z, a, m];
    VertexSorter::By(Box::new(|x, y| y.name.cmp(&x.name))).sort(&g, &mut ids);
    assert_eq!(ids, vec![z, m, a]);
}
