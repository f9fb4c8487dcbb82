//! Arrangement strategies for distributing children along an axis

/// Trait implemented by arrangement strategies that distribute children on an axis.
pub trait Arrangement {
    /// Computes the position for each child given the available space and their sizes.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);
}

/// Spaces children so their centers are evenly spaced, with the first child
/// touching the leading edge and the last the trailing edge. A lone child is
/// centered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EqualCentering;

impl Arrangement for EqualCentering {
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let (Some(first), Some(last)) = (sizes.first(), sizes.last()) else {
            return;
        };
        if sizes.len() == 1 {
            out_positions[0] = (total_size - first) / 2.0;
            return;
        }
        let first_center = first / 2.0;
        let last_center = total_size - last / 2.0;
        let step = (last_center - first_center) / (sizes.len() as f32 - 1.0);
        for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
            *position = first_center + step * index as f32 - size / 2.0;
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
