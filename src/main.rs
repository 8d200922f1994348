#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_duel::{
    cli::{describe_event, describe_report, print_player_view},
    init_logging, Coordinate, MatchEngine, MatchError, MatchEvent, Phase, Side, FLEET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 600, help = "Pause before each computer move, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Print match events as JSON lines instead of text")]
        json: bool,
    },
}

#[cfg(feature = "std")]
type Input = Lines<BufReader<Stdin>>;

#[cfg(feature = "std")]
async fn prompt(input: &mut Input, text: &str) -> anyhow::Result<Option<String>> {
    use std::io::Write;
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            delay_ms,
            json,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let notifier = move |event: &MatchEvent| {
                if json {
                    match serde_json::to_string(event) {
                        Ok(line) => println!("{}", line),
                        Err(e) => log::warn!("could not encode event: {}", e),
                    }
                } else if let Some(text) = describe_event(event) {
                    println!("{}", text);
                }
            };
            let mut engine = match seed {
                Some(s) => MatchEngine::with_seed(notifier, s),
                None => MatchEngine::from_entropy(notifier),
            };
            let mut input = BufReader::new(tokio::io::stdin()).lines();
            let delay = Duration::from_millis(delay_ms);

            loop {
                engine.start_match();
                if !place_fleet(&mut engine, &mut input).await? {
                    return Ok(());
                }
                if !play_out(&mut engine, &mut input, delay).await? {
                    return Ok(());
                }
                match prompt(&mut input, "Play again? [y/N]: ").await? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        engine.restart_match();
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Ask for each fleet entry's origin. An empty line places the rest randomly.
/// Returns `false` if input ended.
#[cfg(feature = "std")]
async fn place_fleet<N: naval_duel::Notifier>(
    engine: &mut MatchEngine<N>,
    input: &mut Input,
) -> anyhow::Result<bool> {
    println!("Place your ships by their leftmost cell (e.g. A5). Press enter for random placement.");
    for kind in FLEET.iter() {
        loop {
            if engine.phase() != Phase::Setup {
                return Ok(true);
            }
            print!("{}", naval_duel::cli::render_board(engine.human_board(), true));
            let text = std::format!("Place {} (length {}): ", kind.name(), kind.size());
            let Some(line) = prompt(input, &text).await? else {
                return Ok(false);
            };
            let line = line.trim();
            if line.is_empty() {
                engine.request_random_placement(Side::Human)?;
                break;
            }
            let placed = line
                .parse::<Coordinate>()
                .map_err(MatchError::from)
                .and_then(|origin| engine.submit_placement(origin, kind.name(), kind.size()));
            match placed {
                Ok(()) => break,
                Err(e) => println!("Error: {}", e),
            }
        }
    }
    Ok(true)
}

/// Alternate turns until the match ends. Returns `false` if input ended.
#[cfg(feature = "std")]
async fn play_out<N: naval_duel::Notifier>(
    engine: &mut MatchEngine<N>,
    input: &mut Input,
    delay: Duration,
) -> anyhow::Result<bool> {
    loop {
        match engine.phase() {
            Phase::HumanTurn => {
                print_player_view(engine);
                let Some(line) = prompt(input, "Enter target: ").await? else {
                    return Ok(false);
                };
                match engine.submit_human_input(&line) {
                    Ok(report) => println!("{}", describe_report(&report)),
                    Err(e) => println!("Error: {}", e),
                }
            }
            Phase::AutomatedTurn => {
                tokio::time::sleep(delay).await;
                let report = engine.play_automated_move()?;
                println!("{}", describe_report(&report));
            }
            Phase::MatchOver { .. } => {
                print_player_view(engine);
                return Ok(true);
            }
            Phase::Setup => return Ok(true),
        }
    }
}
