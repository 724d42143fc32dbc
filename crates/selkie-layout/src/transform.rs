//! Rectangle-to-rectangle affine mapping.
//!
//! Used by Fruchterman-Reingold to project the unbounded simulation rectangle
//! onto the target rectangle every iteration, and by `transform_layout` to
//! re-project finished layouts after a resize.

use selkie_graph::geom::{Rect, Transform, vector};

/// The translate+scale transform (no rotation) taking `src`'s corners onto
/// `dst`'s corners, preserving the relative position of interior points.
///
/// A zero-extent source axis maps by centering: scale 1, with the source
/// center translated onto the destination center.
pub fn rect_to_rect(src: &Rect, dst: &Rect) -> Transform {
    let (sx, tx) = axis_map(src.min_x(), src.width(), dst.min_x(), dst.width());
    let (sy, ty) = axis_map(src.min_y(), src.height(), dst.min_y(), dst.height());
    Transform::scale(sx, sy).then_translate(vector(tx, ty))
}

fn axis_map(src_min: f64, src_extent: f64, dst_min: f64, dst_extent: f64) -> (f64, f64) {
    if src_extent == 0.0 {
        let src_center = src_min + src_extent / 2.0;
        let dst_center = dst_min + dst_extent / 2.0;
        (1.0, dst_center - src_center)
    } else {
        let scale = dst_extent / src_extent;
        (scale, dst_min - src_min * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selkie_graph::geom::{point, rect};

    #[test]
    fn corners_map_to_corners() {
        let src = rect(0.0, 0.0, 10.0, 20.0);
        let dst = rect(100.0, 200.0, 50.0, 40.0);
        let t = rect_to_rect(&src, &dst);

        assert_eq!(t.transform_point(point(0.0, 0.0)), point(100.0, 200.0));
        assert_eq!(t.transform_point(point(10.0, 20.0)), point(150.0, 240.0));
        assert_eq!(t.transform_point(point(5.0, 10.0)), point(125.0, 220.0));
    }

    #[test]
    fn zero_extent_source_centers_on_destination() {
        let src = rect(3.0, 7.0, 0.0, 0.0);
        let dst = rect(0.0, 0.0, 100.0, 50.0);
        let t = rect_to_rect(&src, &dst);

        assert_eq!(t.transform_point(point(3.0, 7.0)), point(50.0, 25.0));
    }
}
