use crate::quantizer::{Bucket, QuantizedRgb};

/// Buckets with this many samples or fewer are treated as noise.
pub const MIN_BUCKET_POPULATION: usize = 10;

/// The most buckets that are considered when picking a diverse set of colors.
pub const MAX_CANDIDATES: usize = 20;

/// Drop sparsely populated buckets and rank the rest by population, most populated first.
///
/// Equally populated buckets stay in the order they were first seen in.
pub(crate) fn rank_candidates(buckets: Vec<Bucket>) -> Vec<Bucket> {
    let limit = MAX_CANDIDATES.min(buckets.len());

    let mut candidates = buckets
        .into_iter()
        .filter(|bucket| bucket.count() > MIN_BUCKET_POPULATION)
        .collect::<Vec<_>>();

    // sort_by is stable, which is what keeps ties in insertion order
    candidates.sort_by(|lhs, rhs| rhs.count().cmp(&lhs.count()));
    candidates.truncate(limit);
    candidates
}

/// Greedily pick up to `count` candidates that are as far apart from each other as possible.
///
/// The first candidate is always picked first. After that, each step picks the candidate whose
/// distance to its nearest already picked color is the largest. Ties go to the candidate that
/// ranks higher. The returned buckets are in the order they were picked.
pub(crate) fn select_diverse(mut candidates: Vec<Bucket>, count: usize) -> Vec<Bucket> {
    let mut selected = Vec::with_capacity(count.min(candidates.len()));

    if count == 0 || candidates.is_empty() {
        return selected;
    }

    selected.push(candidates.remove(0));

    while selected.len() < count && !candidates.is_empty() {
        let mut max_min_distance = 0.0;
        let mut best = None;

        for (i, candidate) in candidates.iter().enumerate() {
            let min_distance = min_distance_to(candidate.rgb(), &selected);

            if min_distance > max_min_distance {
                max_min_distance = min_distance;
                best = Some(i);
            }
        }

        let Some(best) = best else {
            break;
        };

        let pick = candidates.remove(best);
        log::trace!(
            "picked {:?} at distance {:.2} from the {} selected colors",
            pick.rgb(),
            max_min_distance,
            selected.len()
        );
        selected.push(pick);
    }

    selected
}

/// The distance from `rgb` to the nearest of `selected`, or infinity if nothing is selected.
pub fn min_distance_to(rgb: QuantizedRgb, selected: &[Bucket]) -> f64 {
    selected
        .iter()
        .map(|bucket| color_distance(rgb, bucket.rgb()))
        .fold(f64::INFINITY, f64::min)
}

/// Euclidean distance between two colors in plain RGB space.
pub fn color_distance((r1, g1, b1): QuantizedRgb, (r2, g2, b2): QuantizedRgb) -> f64 {
    let dr = r1 as f64 - r2 as f64;
    let dg = g1 as f64 - g2 as f64;
    let db = b1 as f64 - b2 as f64;

    (dr * dr + dg * dg + db * db).sqrt()
}
