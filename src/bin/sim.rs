use naval_duel::{AutomatedSelector, EventLog, MatchEngine, MatchEvent, Phase, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play a full match with random moves on both sides and print a JSON summary.
fn main() -> anyhow::Result<()> {
    naval_duel::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut engine = MatchEngine::with_seed(EventLog::new(), seed);
    let mut human_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut human = AutomatedSelector::new();

    engine.start_match();
    engine.request_random_placement(Side::Human)?;

    let mut shots = [0usize; 2];
    loop {
        match engine.phase() {
            Phase::HumanTurn => {
                let target = human
                    .next_move(&mut human_rng)
                    .ok_or_else(|| anyhow::anyhow!("human side ran out of moves"))?;
                engine.submit_human_attack(target)?;
                shots[0] += 1;
            }
            Phase::AutomatedTurn => {
                shots[1] += engine.play_automated_turn()?.len();
            }
            Phase::MatchOver { .. } => break,
            Phase::Setup => anyhow::bail!("match did not leave setup"),
        }
    }

    let sunk = engine
        .notifier()
        .events()
        .iter()
        .filter(|e| matches!(e, MatchEvent::VesselSunk { .. }))
        .count();

    let result = json!({
        "seed": seed,
        "winner": engine.winner(),
        "human": {"shots": shots[0], "vessels_left": engine.human_board().remaining_vessels()},
        "automated": {"shots": shots[1], "vessels_left": engine.opponent_board().remaining_vessels()},
        "vessels_sunk": sunk,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
