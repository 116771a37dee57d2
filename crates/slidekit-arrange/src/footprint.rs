//! Bounding box of a planned arrangement.

use slidekit_core::{BoundingBox, Transform};

/// Area covered by every placed copy of a source with `source_bounds`
///
/// Each copy is the source box re-centered on the transform position and,
/// when the transform sets a rotation, rotated by it. The source is assumed
/// to be unrotated. Returns `source_bounds` when there are no transforms.
pub fn footprint(transforms: &[Transform], source_bounds: &BoundingBox) -> BoundingBox {
    transforms
        .iter()
        .map(|t| {
            let placed = source_bounds.centered_at(t.position);
            match t.rotation_degrees {
                Some(angle) => placed.rotated(angle),
                None => placed,
            }
        })
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or(*source_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::Point2D;

    #[test]
    fn test_linear_footprint() {
        let source = BoundingBox::from_rect(0.0, 0.0, 5.0, 5.0).unwrap();
        let transforms = vec![
            Transform::at(Point2D::new(2.5, 2.5)),
            Transform::at(Point2D::new(12.5, 2.5)),
            Transform::at(Point2D::new(22.5, 2.5)),
        ];
        let bounds = footprint(&transforms, &source);
        assert_eq!(bounds, BoundingBox::new(0.0, 0.0, 25.0, 5.0).unwrap());
    }

    #[test]
    fn test_rotated_copy_grows_footprint() {
        let source = BoundingBox::from_rect(0.0, 0.0, 20.0, 10.0).unwrap();
        let transforms = vec![Transform::rotated(Point2D::new(10.0, 5.0), 90.0)];
        let bounds = footprint(&transforms, &source);
        assert!((bounds.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_plan() {
        let source = BoundingBox::from_rect(1.0, 1.0, 2.0, 2.0).unwrap();
        assert_eq!(footprint(&[], &source), source);
    }
}
