mod common;

use common::*;
use itertools::Itertools;
use party_draft::allocation::allocate_teams;
use party_draft::matchup::generate_matchups;
use party_draft::test_util::{
    check_allocation, check_matchups, deterministic_rng, random_colors, random_roster,
};
use party_draft::{Gender, TeamColor};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;


const RED_BLUE: [TeamColor; 2] = [TeamColor::Red, TeamColor::Blue];

#[test]
fn plain_alternation_starts_with_men() {
    use TeamColor::*;
    let teams = vec![team(Red, vec![male("m1"), female("f1")]), team(Blue, vec![male("m2"), female("f2")])];
    let matchups = generate_matchups(&teams, &RED_BLUE, &mut deterministic_rng());
    assert_eq!(all_round_ids(&matchups), vec![
        vec![Some("m1"), Some("m2")],
        vec![Some("f1"), Some("f2")],
    ]);
    assert_eq!(matchups.iter().map(|m| m.id).collect_vec(), vec![1, 2]);
}

#[test]
fn rows_alternate_then_fall_back() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![male("m1"), male("m2"), male("m3"), female("f1")]),
        team(Blue, vec![male("m4"), male("m5"), female("f2"), female("f3")]),
    ];
    for seed in 0..10 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        check_matchups(&teams, &RED_BLUE, &matchups).unwrap();
        let genders = matchups.iter().map(round_gender).collect_vec();
        use Gender::*;
        assert_eq!(genders, vec![Male, Female, Male, Female, Male]);
    }
}

#[test]
fn female_anchor_opens_round_one() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![male("m1"), female("anchor").flexible()]),
        team(Blue, vec![female("f2"), male("m2")]),
    ];
    let matchups = generate_matchups(&teams, &RED_BLUE, &mut deterministic_rng());
    assert_eq!(all_round_ids(&matchups), vec![
        vec![Some("anchor"), Some("f2")],
        vec![Some("m1"), Some("m2")],
    ]);
}

#[test]
fn non_binary_anchor_forces_non_binary_first() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![non_binary("n1").flexible(), male("m1"), female("f1")]),
        team(Blue, vec![male("m2"), non_binary("n2"), female("f2")]),
    ];
    let matchups = generate_matchups(&teams, &RED_BLUE, &mut deterministic_rng());
    assert_eq!(all_round_ids(&matchups), vec![
        vec![Some("n1"), Some("n2")],
        vec![Some("m1"), Some("m2")],
        vec![Some("f1"), Some("f2")],
    ]);
}

#[test]
fn flexible_players_fill_gaps_of_their_gender() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![female("anchor").flexible(), male("r1"), male("r2")]),
        team(Blue, vec![male("b1"), male("flex").flexible()]),
    ];
    for seed in 0..10 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        check_matchups(&teams, &RED_BLUE, &matchups).unwrap();
        let rounds = all_round_ids(&matchups);
        assert_eq!(rounds.len(), 3);
        // The male flexible player cannot fill Blue's gap in the female round.
        assert_eq!(rounds[0], vec![Some("anchor"), None]);
        assert_eq!(rounds[1][1], Some("b1"));
        assert_eq!(rounds[2][1], Some("flex"));
        assert_eq!(
            [rounds[1][0], rounds[2][0]].into_iter().flatten().sorted().collect_vec(),
            vec!["r1", "r2"]
        );
    }
}

#[test]
fn leftover_flexible_players_get_extra_rounds() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![male("anchor").flexible(), male("r1")]),
        team(Blue, vec![male("b1"), female("flex").flexible()]),
    ];
    let matchups = generate_matchups(&teams, &RED_BLUE, &mut deterministic_rng());
    assert_eq!(all_round_ids(&matchups), vec![
        vec![Some("anchor"), Some("b1")],
        vec![Some("r1"), None],
        vec![None, Some("flex")],
    ]);
}

#[test]
fn round_one_helper_joins_the_anchor() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![female("anchor").flexible(), female("rf")]),
        team(Blue, vec![female("bf"), female("zoe").helper()]),
    ];
    for seed in 0..10 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        assert_eq!(all_round_ids(&matchups), vec![
            vec![Some("anchor"), Some("zoe")],
            vec![Some("rf"), Some("bf")],
        ]);
    }
}

#[test]
fn other_gender_helpers_land_in_early_and_late_rounds() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![
            female("anchor").flexible(),
            male("rh").helper(),
            male("r2"),
            male("r3"),
            male("r4"),
        ]),
        team(Blue, vec![female("bf"), male("bh").helper(), male("b2"), male("b3"), male("b4")]),
    ];
    for seed in 0..20 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        check_matchups(&teams, &RED_BLUE, &matchups).unwrap();
        // Round 1 is the female row, then the male rows take rounds 2 to 5.
        let helper_rounds = matchups
            .iter()
            .filter(|m| m.players.iter().any(|s| s.player.as_ref().is_some_and(|p| p.is_helper)))
            .map(|m| m.id)
            .collect_vec();
        assert_eq!(helper_rounds, vec![2, 4]);
    }
}

#[test]
fn round_one_helper_comes_from_another_team() {
    use TeamColor::*;
    // "zoe" outranks "amy", but the anchor already holds Red's place in Round 1.
    let teams = vec![
        team(Red, vec![female("anchor").flexible(), female("zoe").helper(), female("r1")]),
        team(Blue, vec![female("amy").helper(), female("b1")]),
    ];
    for seed in 0..10 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        assert_eq!(all_round_ids(&matchups), vec![
            vec![Some("anchor"), Some("amy")],
            vec![Some("r1"), Some("b1")],
            vec![Some("zoe"), None],
        ]);
    }
}

#[test]
fn flexible_helper_can_be_the_anchor() {
    use TeamColor::*;
    let teams = vec![
        team(Red, vec![female("zara").flexible().helper(), male("m1")]),
        team(Blue, vec![female("f2"), male("m2")]),
    ];
    for seed in 0..10 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        assert_eq!(all_round_ids(&matchups), vec![
            vec![Some("zara"), Some("f2")],
            vec![Some("m1"), Some("m2")],
        ]);
    }
}

#[test]
fn flexible_helper_is_not_placed_as_helper() {
    use TeamColor::*;
    // "zed" would win the Round 1 pick and take a late row if helper placement applied to them.
    let teams = vec![
        team(Red, vec![female("anchor").flexible(), female("r1"), female("r2")]),
        team(Blue, vec![
            female("amy").helper(),
            female("b1"),
            female("b2"),
            female("zed").flexible().helper(),
        ]),
    ];
    for seed in 0..20 {
        let matchups = generate_matchups(&teams, &RED_BLUE, &mut StdRng::seed_from_u64(seed));
        check_matchups(&teams, &RED_BLUE, &matchups).unwrap();
        let rounds = all_round_ids(&matchups);
        assert_eq!(rounds.len(), 4);
        assert_eq!(rounds[0], vec![Some("anchor"), Some("amy")]);
        // Blue's female rows are full, so the flexible player only gets the extra round.
        assert_eq!(rounds[3], vec![None, Some("zed")]);
    }
}

#[test]
fn nobody_to_schedule() {
    use TeamColor::*;
    let colors = [Red, Blue, Green];
    for teams in [vec![], vec![team(Red, vec![]), team(Blue, vec![])]] {
        let matchups = generate_matchups(&teams, &colors, &mut deterministic_rng());
        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].id, 1);
        assert_eq!(round_ids(&matchups[0]), vec![None, None, None]);
        assert_eq!(matchups[0].players.iter().map(|s| s.color).collect_vec(), colors.to_vec());
    }
}

#[test]
fn missing_color_is_an_empty_team() {
    use TeamColor::*;
    let colors = [Red, Green, Blue];
    let teams = vec![team(Red, vec![male("m1")]), team(Blue, vec![male("m2")])];
    let matchups = generate_matchups(&teams, &colors, &mut deterministic_rng());
    assert_eq!(all_round_ids(&matchups), vec![vec![Some("m1"), None, Some("m2")]]);
}

#[test]
fn repeated_generation_keeps_input_intact() {
    let mut rng = deterministic_rng();
    let colors = TeamColor::all();
    let roster = random_roster(&mut rng, 24);
    let teams = allocate_teams(&roster, &colors, &mut rng);
    let before = teams.clone();
    let first = generate_matchups(&teams, &colors, &mut rng);
    let second = generate_matchups(&teams, &colors, &mut rng);
    assert_eq!(teams, before);
    assert_eq!(first.len(), second.len());
}

#[test]
fn random_events_hold_structural_properties() {
    let mut rng = deterministic_rng();
    for num_players in [0, 1, 3, 8, 17, 36, 60] {
        for _ in 0..40 {
            let colors = random_colors(&mut rng);
            let roster = random_roster(&mut rng, num_players);
            let teams = allocate_teams(&roster, &colors, &mut rng);
            check_allocation(&roster, &teams).unwrap();
            let matchups = generate_matchups(&teams, &colors, &mut rng);
            check_matchups(&teams, &colors, &matchups).unwrap();
        }
    }
}
