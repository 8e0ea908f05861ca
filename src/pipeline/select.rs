//! Wall selection: keep candidates long enough to span the choke and close
//! enough to hug it, then take the shortest.

use super::candidate::CandidateWall;
use log::*;

pub fn is_acceptable(candidate: &CandidateWall, live_diameter: f32) -> bool {
    !candidate.cells.is_empty()
        && candidate.length as f32 >= live_diameter
        && candidate.centroid_distance_to_live_hull <= live_diameter
}

/// Surviving candidates, shortest first. Ties keep generation order.
pub fn rank_candidates(candidates: Vec<CandidateWall>, live_diameter: f32) -> Vec<CandidateWall> {
    let mut survivors: Vec<CandidateWall> = candidates
        .into_iter()
        .filter(|c| {
            let ok = is_acceptable(c, live_diameter);
            if !ok {
                trace!(
                    "Rejected wall: length={}, centroid_distance={:.2}, diameter={:.2}",
                    c.length,
                    c.centroid_distance_to_live_hull,
                    live_diameter
                );
            }
            ok
        })
        .collect();
    survivors.sort_by_key(|c| c.length);
    survivors
}

pub fn select_shortest(candidates: Vec<CandidateWall>, live_diameter: f32) -> Option<CandidateWall> {
    rank_candidates(candidates, live_diameter).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::GridCell;

    fn candidate(length: usize, centroid_distance: f32) -> CandidateWall {
        let cells: Vec<GridCell> = (0..length as i32).map(|x| GridCell::new(x, 0)).collect();
        CandidateWall {
            length: cells.len(),
            cells,
            centroid_distance_to_live_hull: centroid_distance,
            reference_line: Vec::new(),
            clusters: (0, 1),
        }
    }

    #[test]
    fn shortest_survivor_wins() {
        let picked = select_shortest(
            vec![candidate(9, 1.0), candidate(5, 1.0), candidate(7, 0.5)],
            4.0,
        )
        .unwrap();
        assert_eq!(picked.length, 5);
    }

    #[test]
    fn too_short_or_too_far_is_dropped() {
        let ranked = rank_candidates(
            vec![candidate(3, 1.0), candidate(6, 4.5), candidate(8, 4.0)],
            4.0,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].length, 8);
    }

    #[test]
    fn survivors_respect_diameter() {
        let diameter = 4.0;
        let ranked = rank_candidates(
            (1..10).map(|l| candidate(l, (l % 6) as f32)).collect(),
            diameter,
        );
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|c| c.length as f32 >= diameter));
        assert!(ranked.windows(2).all(|w| w[0].length <= w[1].length));
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_shortest(Vec::new(), 1.0).is_none());
        assert!(select_shortest(vec![candidate(0, 0.0)], 0.0).is_none());
    }
}
