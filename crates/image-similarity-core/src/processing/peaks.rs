//! # Ridge detection
//!
//! Finds the local ridges of a 1-D sequence: strict local maxima and the first
//! index of every plateau that tops a rise. Used on intensity histograms to
//! reduce their shape to a handful of positions.
//!
//! Only the sign of each first difference matters, so the detector works on any
//! `PartialOrd` sample type. Incomparable samples (NaN) produce a step with no
//! direction that is neither flat, rising nor falling.

use std::cmp::Ordering;

/// Direction of one first difference, `None` when the samples are incomparable
type Step = Option<Ordering>;

fn steps<T: PartialOrd>(y: &[T]) -> Vec<Step> {
    y.windows(2).map(|w| w[1].partial_cmp(&w[0])).collect()
}

fn is_flat(step: Step) -> bool {
    step == Some(Ordering::Equal)
}

fn is_rising(step: Step) -> bool {
    step == Some(Ordering::Greater)
}

fn is_falling_or_flat(step: Step) -> bool {
    matches!(step, Some(Ordering::Less | Ordering::Equal))
}

/// True when every step moves the same way, with no flat or incomparable step
fn is_strictly_monotone(dy: &[Step]) -> bool {
    dy.iter().all(|&step| step == Some(Ordering::Greater))
        || dy.iter().all(|&step| step == Some(Ordering::Less))
}

/// Return the indices of the ridges in `y`, ascending
///
/// A ridge is an index the signal rises into and does not rise out of. Index 0
/// counts as risen into, so a sequence that opens with a descent has a ridge at
/// its start. A run of equal samples at the top of a rise reports its first
/// index only.
///
/// Constant and strictly monotone sequences have no ridges, and neither do
/// sequences shorter than two samples. A monotone sequence with a flat run
/// keeps its ridges, so `[0, 1, 1]` reports the plateau at 1.
pub fn find_peaks<T: PartialOrd>(y: &[T]) -> Vec<usize> {
    let dy = steps(y);

    if dy.iter().all(|&step| is_flat(step)) {
        return Vec::new();
    }

    if is_strictly_monotone(&dy) {
        return Vec::new();
    }

    let n = y.len();
    let mut index: Vec<usize> = (0..n)
        .filter(|&i| {
            // A trailing 0 closes the falling mask, a leading 1 opens the rising one
            let falling_or_flat_after = dy.get(i).map_or(true, |&step| is_falling_or_flat(step));
            let rising_into = i == 0 || is_rising(dy[i - 1]);
            falling_or_flat_after && rising_into
        })
        .collect();

    if index.is_empty() {
        return index;
    }

    // A flat start that opens onto a climb is the base of the climb, not a ridge
    if index[0] == 0 && is_flat(dy[0]) {
        if let Some(&first) = dy.iter().find(|&&step| !is_flat(step)) {
            if is_rising(first) {
                index.remove(0);
            }
        }
    }

    // Trailing counterpart of the flat-start correction, keyed on the `len` sentinel
    if index.last() == Some(&n) && dy.last().is_some_and(|&step| is_flat(step)) {
        if let Some(&last) = dy.iter().rev().find(|&&step| !is_flat(step)) {
            if last == Some(Ordering::Less) {
                index.truncate(index.len().saturating_sub(2));
            }
        }
    }

    // Collapse runs of adjacent candidates onto their first index
    let mut previous: Option<usize> = None;
    index.retain(|&i| {
        let keep = previous.map_or(true, |p| i - p != 1);
        previous = Some(i);
        keep
    });

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequences() {
        assert!(find_peaks::<u64>(&[]).is_empty());
        assert!(find_peaks(&[7u64]).is_empty());
        assert!(find_peaks(&[1u64, 2]).is_empty());
        assert!(find_peaks(&[2u64, 1]).is_empty());
        assert!(find_peaks(&[3u64, 3]).is_empty());
    }

    #[test]
    fn test_constant_sequences() {
        assert!(find_peaks(&[0u64; 16]).is_empty());
        assert!(find_peaks(&[4.5f64, 4.5, 4.5]).is_empty());
    }

    #[test]
    fn test_strictly_monotonic_sequences() {
        assert!(find_peaks(&[0, 1, 2, 3, 4]).is_empty());
        assert!(find_peaks(&[9, 7, 4, 2, 1]).is_empty());
        assert!(find_peaks(&[0.5, 1.5]).is_empty());
    }

    #[test]
    fn test_monotone_with_plateaus_keeps_ridges() {
        assert_eq!(find_peaks(&[0, 1, 1]), vec![1]);
        assert_eq!(find_peaks(&[0, 0, 1, 1, 2]), vec![2, 4]);
        assert_eq!(find_peaks(&[5, 3, 3, 3]), vec![0]);
        assert_eq!(find_peaks(&[0u64, 0, 0, 1]), vec![3]);
    }

    #[test]
    fn test_single_interior_peak() {
        assert_eq!(find_peaks(&[0, 1, 0]), vec![1]);
        assert_eq!(find_peaks(&[0.0, 0.5, 0.25]), vec![1]);
    }

    #[test]
    fn test_plateau_reports_first_index() {
        assert_eq!(find_peaks(&[0, 1, 1, 0]), vec![1]);
        assert_eq!(find_peaks(&[0, 2, 2, 2, 1]), vec![1]);
    }

    #[test]
    fn test_multiple_peaks() {
        assert_eq!(find_peaks(&[0, 2, 0, 3, 0]), vec![1, 3]);
        assert_eq!(find_peaks(&[1, 4, 4, 2, 6, 6, 6, 0]), vec![1, 4]);
    }

    #[test]
    fn test_descending_start_is_a_ridge() {
        assert_eq!(find_peaks(&[3, 1, 2, 0]), vec![0, 2]);
        assert_eq!(find_peaks(&[5u64, 0, 0, 0, 5]), vec![0, 4]);
    }

    #[test]
    fn test_rising_end_is_a_ridge() {
        assert_eq!(find_peaks(&[2, 0, 1, 3]), vec![0, 3]);
    }

    #[test]
    fn test_flat_start_before_climb_is_dropped() {
        assert_eq!(find_peaks(&[1, 1, 2, 0]), vec![2]);
    }

    #[test]
    fn test_flat_start_before_descent_is_kept() {
        assert_eq!(find_peaks(&[1, 1, 0, 2, 0]), vec![0, 3]);
    }

    #[test]
    fn test_incomparable_samples() {
        assert!(find_peaks(&[0.0, f64::NAN, 0.0]).is_empty());
        assert_eq!(find_peaks(&[f64::NAN, 0.0, 1.0, 0.0]), vec![2]);
    }

    #[test]
    fn test_deterministic() {
        let y = [3u64, 8, 8, 1, 0, 4, 9, 2, 2, 5, 5, 0];
        assert_eq!(find_peaks(&y), find_peaks(&y));
        assert_eq!(find_peaks(&y), vec![1, 6, 9]);
    }
}
