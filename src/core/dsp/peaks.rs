//! Local-maximum peak detection with height and distance constraints

/// Find peaks in `data`.
///
/// A peak is a sample strictly greater than its left neighbour and its right
/// neighbour; a flat top counts once, at its middle sample (rounded down).
/// The first and last samples never qualify. Peaks lower than `min_height`
/// are dropped first, then peaks closer than `min_distance` samples to a
/// higher kept peak are removed, highest first.
///
/// Returned indices are in ascending order.
pub fn find_peaks(data: &[f64], min_height: Option<f64>, min_distance: usize) -> Vec<usize> {
    let mut peaks = local_maxima(data);

    if let Some(height) = min_height {
        peaks.retain(|&p| data[p] >= height);
    }

    if min_distance > 1 && peaks.len() > 1 {
        peaks = select_by_distance(data, &peaks, min_distance);
    }

    peaks
}

/// Midpoints of all strict local maxima, including flat tops.
fn local_maxima(data: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if data.len() < 3 {
        return peaks;
    }

    let last = data.len() - 1;
    let mut i = 1;
    while i < last {
        if data[i - 1] < data[i] {
            // Walk across a possible plateau
            let mut ahead = i + 1;
            while ahead < last && data[ahead] == data[i] {
                ahead += 1;
            }
            if data[ahead] < data[i] {
                let left = i;
                let right = ahead - 1;
                peaks.push((left + right) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }

    peaks
}

/// Greedy suppression: visit peaks from highest to lowest and discard any
/// neighbour within `min_distance` of a peak that is still kept.
fn select_by_distance(data: &[f64], peaks: &[usize], min_distance: usize) -> Vec<usize> {
    let mut keep = vec![true; peaks.len()];

    // Stable: among equal heights the later peak is visited first
    let mut order: Vec<usize> = (0..peaks.len()).collect();
    order.sort_by(|&a, &b| data[peaks[a]].total_cmp(&data[peaks[b]]));

    for &i in order.iter().rev() {
        if !keep[i] {
            continue;
        }

        let mut j = i;
        while j > 0 && peaks[i] - peaks[j - 1] < min_distance {
            keep[j - 1] = false;
            j -= 1;
        }

        let mut j = i + 1;
        while j < peaks.len() && peaks[j] - peaks[i] < min_distance {
            keep[j] = false;
            j += 1;
        }
    }

    peaks
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}
