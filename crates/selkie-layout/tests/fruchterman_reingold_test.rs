use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selkie_graph::geom::{Point, Rect, point, rect};
use selkie_graph::{Directedness, Graph, VertexId};
use selkie_layout::{
    FruchtermanReingoldLayout, Layout, LayoutConfig, LayoutContext, Outcome, RandomizeMode,
    unplaced,
};

fn seeded(r: Rect, seed: u64) -> LayoutContext {
    LayoutContext::new(r).with_rng(ChaCha8Rng::seed_from_u64(seed))
}

fn assert_inside(p: Point, r: Rect) {
    assert!(
        p.x >= r.min_x() - 1e-9
            && p.x <= r.max_x() + 1e-9
            && p.y >= r.min_y() - 1e-9
            && p.y <= r.max_y() + 1e-9,
        "{p:?} outside {r:?}"
    );
}

fn chain() -> (Graph, VertexId, VertexId, VertexId) {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    g.add_edge(a, b, false).unwrap();
    g.add_edge(b, c, false).unwrap();
    (g, a, b, c)
}

#[test]
fn final_locations_lie_inside_the_rectangle() {
    let (mut g, a, b, c) = chain();
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let outcome = FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut seeded(r, 11))
        .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    for v in [a, b, c] {
        assert_inside(g.vertex(v).unwrap().location, r);
    }
    assert_eq!(g.layout_rect(), Some(r));
}

#[test]
fn the_high_degree_vertex_gravitates_toward_the_center() {
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let center = point(50.0, 50.0);
    let distance = |p: Point| ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();

    let (mut sum_a, mut sum_b, mut sum_c) = (0.0, 0.0, 0.0);
    let seeds = 8;
    for seed in 0..seeds {
        let (mut g, a, b, c) = chain();
        FruchtermanReingoldLayout::new()
            .lay_out(&mut g, &mut seeded(r, seed))
            .unwrap();
        sum_a += distance(g.vertex(a).unwrap().location);
        sum_b += distance(g.vertex(b).unwrap().location);
        sum_c += distance(g.vertex(c).unwrap().location);
    }

    // B has degree 2, A and C degree 1: on average B ends nearer the center.
    assert!(sum_b < sum_a, "b: {sum_b}, a: {sum_a}");
    assert!(sum_b < sum_c, "b: {sum_b}, c: {sum_c}");
}

#[test]
fn coincident_connected_vertices_separate() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex_at("a", point(50.0, 50.0));
    let b = g.add_vertex_at("b", point(50.0, 50.0));
    g.add_edge(a, b, false).unwrap();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let outcome = FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut seeded(r, 2))
        .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    let pa = g.vertex(a).unwrap().location;
    let pb = g.vertex(b).unwrap().location;
    assert!(pa.x.is_finite() && pa.y.is_finite());
    assert!(pb.x.is_finite() && pb.y.is_finite());
    assert_ne!(pa, pb);
    assert_inside(pa, r);
    assert_inside(pb, r);
}

#[test]
fn coincident_vertices_without_randomization_stay_finite() {
    // Marking the graph as already laid out skips the initial randomize, so
    // the simulation itself has to survive the zero-distance cases.
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex_at("a", point(50.0, 50.0));
    let b = g.add_vertex_at("b", point(50.0, 50.0));
    g.add_edge(a, b, false).unwrap();
    let r = rect(0.0, 0.0, 100.0, 100.0);
    g.set_layout_rect(r);

    let outcome = FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut seeded(r, 2))
        .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    for v in [a, b] {
        let p = g.vertex(v).unwrap().location;
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_inside(p, r);
    }
}

#[test]
fn locked_vertices_keep_their_location_while_neighbors_react() {
    let mut g = Graph::new(Directedness::Undirected);
    let anchor = g.add_vertex_at("anchor", point(10.0, 10.0));
    let free = g.add_vertex_at("free", point(90.0, 90.0));
    g.add_edge(anchor, free, false).unwrap();
    let r = rect(0.0, 0.0, 100.0, 100.0);
    g.set_layout_rect(r); // keep the starting positions

    let mut ctx = seeded(r, 4).with_config(LayoutConfig {
        locked: [anchor].into_iter().collect(),
        ..Default::default()
    });
    FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut ctx)
        .unwrap();

    assert_eq!(g.vertex(anchor).unwrap().location, point(10.0, 10.0));
    assert_ne!(g.vertex(free).unwrap().location, point(90.0, 90.0));
    assert_inside(g.vertex(free).unwrap().location, r);
}

#[test]
fn subset_layout_leaves_outsiders_untouched() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let outsider = g.add_vertex_at("outsider", point(-500.0, -500.0));
    g.add_edge(a, b, false).unwrap();
    g.add_edge(b, outsider, false).unwrap();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let mut ctx = seeded(r, 6).with_config(LayoutConfig {
        subset: Some(vec![a, b]),
        ..Default::default()
    });
    FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut ctx)
        .unwrap();

    assert_eq!(g.vertex(outsider).unwrap().location, point(-500.0, -500.0));
    assert_inside(g.vertex(a).unwrap().location, r);
    assert_inside(g.vertex(b).unwrap().location, r);
}

#[test]
fn selective_randomize_only_touches_unplaced_vertices() {
    let mut g = Graph::new(Directedness::Undirected);
    let placed = g.add_vertex_at("placed", point(25.0, 25.0));
    let pending = g.add_vertex_at("pending", unplaced());
    g.add_edge(placed, pending, false).unwrap();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let mut ctx = seeded(r, 9).with_config(LayoutConfig {
        randomize: RandomizeMode::UnplacedOnly,
        ..Default::default()
    });
    FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut ctx)
        .unwrap();

    // The sentinel vertex was drawn into the rectangle before simulation; had
    // it stayed at the sentinel the projection would pin both vertices to the
    // rectangle edge.
    let p = g.vertex(pending).unwrap().location;
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_inside(p, r);
    assert_inside(g.vertex(placed).unwrap().location, r);
}

#[test]
fn self_loops_produce_no_attraction() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    g.add_edge(a, a, false).unwrap();
    g.add_edge(a, b, false).unwrap();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let outcome = FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut seeded(r, 13))
        .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    for v in [a, b] {
        let p = g.vertex(v).unwrap().location;
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn pre_cancelled_layout_commits_nothing() {
    let (mut g, a, b, c) = chain();
    let before: Vec<_> = [a, b, c]
        .iter()
        .map(|&v| g.vertex(v).unwrap().location)
        .collect();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    g.set_layout_rect(r); // suppress the initial randomize
    let ctx = seeded(r, 3);
    ctx.cancel_token().cancel();
    let mut ctx = ctx;
    let outcome = FruchtermanReingoldLayout::new()
        .lay_out(&mut g, &mut ctx)
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    for (&v, &p) in [a, b, c].iter().zip(&before) {
        assert_eq!(g.vertex(v).unwrap().location, p);
    }
}
