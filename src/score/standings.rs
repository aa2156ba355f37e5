use crate::model::{ScoringRules, TeamStanding};
use crate::score::context::TournamentContext;
use ahash::RandomState;
use std::collections::HashMap;

/// Two full-precision totals closer than this are the same position.
pub const SCORE_EPSILON: f64 = 1e-6;

/// Rank every team against its peer group (tour division, or playoff
/// bracket) and award position strings, win/top-ten flags, and tied-split
/// points and earnings. Quadratic per peer group, which stays small.
pub fn rank_teams(teams: &mut [TeamStanding], ctx: &TournamentContext, rules: &ScoringRules) {
    let mut peers: HashMap<String, Vec<usize>, RandomState> = HashMap::default();
    for (idx, team) in teams.iter().enumerate() {
        peers
            .entry(team.peer_key().to_string())
            .or_default()
            .push(idx);
    }

    let totals: Vec<f64> = teams.iter().map(|team| team.total_score).collect();

    for indices in peers.values() {
        for &i in indices {
            let mine = totals[i];
            let better_count = indices
                .iter()
                .filter(|&&j| totals[j] < mine - SCORE_EPSILON)
                .count();
            let tied_count = indices
                .iter()
                .filter(|&&j| (totals[j] - mine).abs() <= SCORE_EPSILON)
                .count();

            let team = &mut teams[i];
            team.prior_position = std::mem::take(&mut team.position);
            team.position = position_label(better_count, tied_count);
            team.win = better_count == 0;
            team.top_ten = better_count < rules.top_ten_cutoff;
            team.points = allocate_tied_share(&ctx.points, better_count, tied_count);
            team.earnings = allocate_tied_share(&ctx.payouts, better_count, tied_count);
        }
    }
}

#[must_use]
pub fn position_label(better_count: usize, tied_count: usize) -> String {
    if tied_count > 1 {
        format!("T{}", better_count + 1)
    } else {
        format!("{}", better_count + 1)
    }
}

/// Average a tier's reward array over a tied block of positions, so tied
/// teams split the block's aggregate rather than each taking the nominal
/// value. Positions past the end of the array pay 0.
#[must_use]
pub fn allocate_tied_share(values: &[f64], better_count: usize, tied_count: usize) -> f64 {
    if tied_count == 0 {
        return 0.0;
    }
    let sum: f64 = (better_count..better_count + tied_count)
        .map(|idx| values.get(idx).copied().unwrap_or(0.0))
        .sum();
    sum / tied_count as f64
}
