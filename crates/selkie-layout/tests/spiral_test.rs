use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selkie_graph::geom::{point, rect};
use selkie_graph::{Directedness, Graph};
use selkie_layout::{Layout, LayoutConfig, LayoutContext, Outcome, SpiralLayout};

#[test]
fn vertices_stay_within_the_half_size_radius() {
    let mut g = Graph::new(Directedness::Undirected);
    let ids: Vec<_> = (0..17).map(|i| g.add_vertex(format!("v{i}"))).collect();

    let r = rect(0.0, 0.0, 200.0, 120.0);
    let mut ctx = LayoutContext::new(r).with_rng(ChaCha8Rng::seed_from_u64(3));
    let outcome = SpiralLayout::new().lay_out(&mut g, &mut ctx).unwrap();
    assert_eq!(outcome, Outcome::Completed);

    let center = r.center();
    let half_size = 60.0;
    for &v in &ids {
        let p = g.vertex(v).unwrap().location;
        let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
        assert!(distance <= half_size + 1e-9, "distance {distance}");
    }
}

#[test]
fn the_last_vertex_reaches_the_outer_radius() {
    let mut g = Graph::new(Directedness::Undirected);
    let ids: Vec<_> = (0..8).map(|i| g.add_vertex(format!("v{i}"))).collect();

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let mut ctx = LayoutContext::new(r).with_rng(ChaCha8Rng::seed_from_u64(3));
    SpiralLayout::new().lay_out(&mut g, &mut ctx).unwrap();

    // The final vertex sits at the full sweep angle, i.e. the outer radius.
    let center = r.center();
    let p = g.vertex(*ids.last().unwrap()).unwrap().location;
    let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
    assert!((distance - 50.0).abs() < 1e-9, "distance {distance}");
}

#[test]
fn locked_vertices_are_not_moved() {
    let mut g = Graph::new(Directedness::Undirected);
    let a = g.add_vertex("a");
    let b = g.add_vertex_at("b", point(999.0, 999.0));

    let r = rect(0.0, 0.0, 100.0, 100.0);
    let mut ctx = LayoutContext::new(r)
        .with_rng(ChaCha8Rng::seed_from_u64(3))
        .with_config(LayoutConfig {
            locked: [b].into_iter().collect(),
            ..Default::default()
        });
    SpiralLayout::new().lay_out(&mut g, &mut ctx).unwrap();

    assert_eq!(g.vertex(b).unwrap().location, point(999.0, 999.0));
    assert_ne!(g.vertex(a).unwrap().location, point(0.0, 0.0));
}
