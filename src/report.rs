//! Text rendering of standings and weights.

use crate::{score::Standing, table, weights::Weights};

pub const SCORE_DECIMALS: usize = 6;
pub const RANK_DECIMALS: usize = 1;

fn standing_headers() -> Vec<String> {
    ["Name", "Team", "Score", "Rank"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

fn standing_rows(standings: &[Standing]) -> Vec<Vec<String>> {
    standings
        .iter()
        .map(|standing| {
            vec![
                standing.name.clone(),
                standing.team.clone(),
                format!("{:.SCORE_DECIMALS$}", standing.score),
                format_rank(standing.rank),
            ]
        })
        .collect()
}

/// Ranks carry one blank sign position ahead of the digits, so `61.0`
/// occupies five columns and `Rank` is set two spaces from `Score`.
fn format_rank(rank: f64) -> String {
    format!(" {rank:.RANK_DECIMALS$}")
}

pub fn render_standings(standings: &[Standing]) -> String {
    table::render_table(&standing_headers(), &standing_rows(standings))
}

pub fn print_standings(standings: &[Standing]) {
    table::print_table(&standing_headers(), &standing_rows(standings));
}

fn weight_rows(weights: &Weights) -> Vec<Vec<String>> {
    weights
        .iter()
        .map(|(stat, weight)| vec![stat.to_string(), format!("{weight:.SCORE_DECIMALS$}")])
        .collect()
}

pub fn render_weights(weights: &Weights) -> String {
    let headers = vec!["Stat".to_string(), "Weight".to_string()];
    table::render_table(&headers, &weight_rows(weights))
}

pub fn print_weights(weights: &Weights) {
    print!("{}", render_weights(weights));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standings_are_right_aligned_with_fixed_precision() {
        let standings = vec![
            Standing {
                name: "Christian_McCaffrey".into(),
                team: "SF".into(),
                score: 0.854945,
                rank: 1.0,
            },
            Standing {
                name: "Clyde_Edwards_Helaire".into(),
                team: "KC".into(),
                score: 0.264073,
                rank: 52.0,
            },
            Standing {
                name: "Chris_Rodriguez_Jr.".into(),
                team: "WAS".into(),
                score: 0.109528,
                rank: 61.0,
            },
        ];
        let rendered = render_standings(&standings);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "                 Name Team    Score  Rank",
                "  Christian_McCaffrey   SF 0.854945   1.0",
                "Clyde_Edwards_Helaire   KC 0.264073  52.0",
                "  Chris_Rodriguez_Jr.  WAS 0.109528  61.0",
            ]
        );
    }

    #[test]
    fn single_digit_ranks_keep_the_sign_position() {
        let standings = vec![Standing {
            name: "A".into(),
            team: "X".into(),
            score: 0.5,
            rank: 1.5,
        }];
        let rendered = render_standings(&standings);
        assert_eq!(
            rendered.lines().collect::<Vec<_>>(),
            vec!["Name Team    Score Rank", "   A    X 0.500000  1.5"]
        );
    }

    #[test]
    fn weights_render_in_configuration_order() {
        let weights = Weights::from_importance([("Rush_Yds", 1.0), ("Carries", 1.0)]).unwrap();
        let rendered = render_weights(&weights);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "    Stat   Weight",
                "Rush_Yds 0.500000",
                " Carries 0.500000"
            ]
        );
    }
}
