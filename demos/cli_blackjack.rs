//! CLI blackjack example.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::advisory::{AdvisoryClient, AdvisoryRequest, TransportError};
use bjcore::ledger::TOP_UP_PRESETS;
use bjcore::{
    Card, DealerStep, Game, Outcome, Phase, Recommendation, TableOptions, TableSnapshot,
};

const DEALER_PACE: Duration = Duration::from_millis(500);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(TableOptions::default(), seed);
    let advisor = AdvisoryClient::new(house_advisor);

    loop {
        let snapshot = game.snapshot();
        if snapshot.balance == 0 {
            println!("You are out of chips.");
            if !top_up(&game) {
                break;
            }
            continue;
        }

        let balance = snapshot.balance;
        let Some(bet) = prompt_usize(&format!(
            "Bet amount (1-{balance}, 0 to top up, q to quit): "
        )) else {
            println!("Goodbye.");
            break;
        };

        if bet == 0 {
            top_up(&game);
            continue;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while game.phase() == Phase::PlayerTurn {
            print_table(&game.snapshot());

            match prompt_line("[h]it [s]tand [?]hint: ").as_str() {
                "h" | "hit" => {
                    if let Ok(card) = game.hit() {
                        println!("You draw {card}.");
                    }
                }
                "s" | "stand" => {
                    if game.begin_stand().is_ok() {
                        play_dealer(&game);
                    }
                }
                "?" | "hint" => {
                    if let Some(request) = game.advisory_request() {
                        println!("Advisor says: {}", advisor.recommend_for(&request));
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        let snapshot = game.snapshot();
        print_table(&snapshot);
        if let Some(result) = game.last_result() {
            let verdict = match result.outcome {
                Outcome::Win => "You win!",
                Outcome::Lose => "You lose.",
                Outcome::Push => "Push.",
            };
            println!("{verdict} Payout {} (net {})", result.payout, result.net());
        }
    }
}

/// Plays out the dealer's turn one card at a time.
fn play_dealer(game: &Game) {
    print_table(&game.snapshot());
    for step in game.dealer_steps() {
        if let DealerStep::Draw(card) = step {
            thread::sleep(DEALER_PACE);
            println!("Dealer draws {card}.");
        }
    }
}

/// Stand-in advisory service: hits below 17, or below 13 against a weak dealer card.
fn house_advisor(request: &AdvisoryRequest) -> Result<String, TransportError> {
    let hit = match request.dealer_card {
        2..=6 => request.player_total < 13,
        _ => request.player_total < 17,
    };
    let recommendation = if hit {
        Recommendation::Hit
    } else {
        Recommendation::Stand
    };
    Ok(format!(r#"{{"recommendation":"{recommendation}"}}"#))
}

fn top_up(game: &Game) -> bool {
    let presets = TOP_UP_PRESETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    let Some(amount) = prompt_usize(&format!("Top up by ({presets}): ")) else {
        return false;
    };
    match game.top_up(amount) {
        Ok(balance) => println!("Balance is now {balance}."),
        Err(err) => println!("Top-up error: {err}"),
    }
    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &TableSnapshot) {
    let dealer = snapshot
        .dealer_hand
        .iter()
        .zip(&snapshot.dealer_visibility)
        .map(|(card, shown)| {
            if *shown {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nDealer: {dealer} (value {})",
        snapshot.dealer_visible_total
    );

    let player = snapshot
        .player_hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "You:    {player} (value {}) | stake {} | balance {}\n",
        snapshot.player_total, snapshot.stake, snapshot.balance
    );
}

fn format_card(card: &Card) -> String {
    let code = if card.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
