use mutants_moderator::{
    console::prelude::Console,
    error::GameError,
    world::{
        day::run_day,
        person::roles::Genome,
        roster::Roster,
    },
};
use rand::{rngs::StdRng, SeedableRng};

const ROSTER: &str = "
num_weak: 1
num_resistant: 1
roles: [mutant, doctor, spy, hacker]
players:
  alice:
  bob:
  carol:
  dave:
";

#[tokio::test]
async fn voting_out_bob_touches_nobody_else() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Roster::parse(ROSTER).unwrap().into_game(&mut rng).unwrap();
    let before = game.players.clone();

    let mut console = Console::scripted(["alice", "bob"]);
    run_day(&mut game, &mut console).await.unwrap();

    assert!(game.players["bob"].dead);
    for name in ["alice", "carol", "dave"] {
        assert_eq!(game.players[name], before[name]);
    }
}

#[test]
fn unreachable_genome_target_is_reported() {
    let text = "
num_weak: 4
num_resistant: 0
roles: [mutant, doctor]
players: {alice: null, bob: null}
";
    let mut rng = StdRng::seed_from_u64(0);
    let err = Roster::parse(text)
        .unwrap()
        .into_game(&mut rng)
        .unwrap_err();

    assert!(matches!(
        err,
        GameError::NoEligiblePlayers {
            genome: Genome::Weak
        }
    ));
}
