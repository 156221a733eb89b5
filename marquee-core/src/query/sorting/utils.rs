//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` names the element of the original slice that
/// should end up at that position.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let temp: Vec<T> = indices.iter().map(|&idx| items[idx].clone()).collect();
    items.clone_from_slice(&temp);
}
