use std::io::{self, BufRead, Write};

use blackjack_table::{autoplay_round, RoundPhase, Table, TableConfig, TableEvent};
use clap::{Parser, Subcommand};

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack", about = "Single-seat blackjack against a draw-to-17 dealer")]
struct Cli {
    /// Seed for the shoe (random if omitted)
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively: [h]it, [s]tand, [n]ew round, [q]uit
    Play,

    /// Let the autoplayer run a batch of rounds and print the tally
    Simulate {
        #[arg(long, default_value = "1000")]
        rounds: u32,

        /// Player stops hitting at this total
        #[arg(long, env = "BLACKJACK_STAND_ON", default_value = "17")]
        stand_on: u8,

        /// Print the tally as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<(), BoxErr> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let config = TableConfig {
                seed: cli.seed,
                ..TableConfig::default()
            };
            play(Table::from_config(&config)?)
        }
        Command::Simulate {
            rounds,
            stand_on,
            json,
        } => {
            let config = TableConfig {
                seed: cli.seed,
                auto_stand_on: stand_on,
            };
            simulate(&config, rounds, json)
        }
    }
}

fn play(mut table: Table) -> Result<(), BoxErr> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render_events(&table.start_round());
    render_table(&table);

    loop {
        let prompt = if table.phase() == RoundPhase::Dealt {
            "[h]it / [s]tand / [q]uit > "
        } else {
            "[n]ew round / [q]uit > "
        };
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let events = match line.trim() {
            "h" | "hit" => table.hit(),
            "s" | "stand" => table.stand(),
            "n" | "new" => table.start_round(),
            "q" | "quit" => return Ok(()),
            other => {
                println!("Unknown command '{other}'");
                continue;
            }
        };
        render_events(&events);
        render_table(&table);
    }
}

fn simulate(config: &TableConfig, rounds: u32, json: bool) -> Result<(), BoxErr> {
    let mut table = Table::from_config(config)?;
    for _ in 0..rounds {
        autoplay_round(&mut table, config.auto_stand_on);
    }

    let tally = table.tally();
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}

fn render_events(events: &[TableEvent]) {
    for event in events {
        match event {
            TableEvent::Status(status) => println!("  {status}"),
            TableEvent::Cue(cue) => log::debug!("cue: {cue}"),
            TableEvent::PlayerCard(card) => println!("  You draw {card}"),
            TableEvent::DealerDraw(draw) => {
                println!("  Dealer draws {} ({})", draw.card, draw.value)
            }
            TableEvent::Resolved { .. } => {}
        }
    }
}

fn render_table(table: &Table) {
    let view = table.view();
    let dealer: Vec<String> = view.dealer.iter().map(ToString::to_string).collect();
    let player: Vec<String> = view.player.iter().map(ToString::to_string).collect();

    println!();
    println!("Dealer: {}  ({})", dealer.join(" "), view.dealer_score);
    println!("You:    {}  ({})", player.join(" "), view.player_score);
    if !view.result.is_empty() {
        println!("{}", view.result);
    }
    println!("{}", view.tally);
    println!();
}
