//! CLI blackjack example.
//!
//! Set `RUST_LOG=debug` to watch the engine deal.

use std::io::{self, Write};

use bjcore::{CardView, Outcome, Phase, RoundEngine, RoundState, TableOptions, parse_bet};

const HOW_TO_PLAY: &str = "\
How to play:
  1. Place your bet (default is 10 chips).
  2. You get two cards, the dealer gets one.
  3. [h]it to draw a card.
  4. [s]tand to end your turn.
  5. The dealer draws until reaching 17 or higher.
  6. Closest to 21 without going over wins.
  7. Over 21 is a bust and loses the round.
  8. Ties return your bet. Winning doubles it.
  Aces count as 11 or 1, whichever helps most.";

const DEFAULT_BET: usize = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit, '?' for help)");

    let mut game = RoundEngine::from_entropy(TableOptions::default());

    loop {
        if game.is_out_of_chips() {
            println!("You're out of chips!");
            let prompt = format!(
                "Start a new game with {} chips? (y/n): ",
                game.options().starting_chips
            );
            match prompt_line(&prompt).as_str() {
                "y" | "yes" => match game.reset_chips() {
                    Ok(state) => println!("Chips: {}", state.chips),
                    Err(err) => println!("Reset error: {err}"),
                },
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        let chips = game.player().chips();
        let Some(bet) = prompt_bet(&format!("Chips: {chips}. Bet amount [{DEFAULT_BET}]: ")) else {
            println!("Goodbye.");
            break;
        };

        let mut state = match game.start_round(bet) {
            Ok(state) => state,
            Err(err) => {
                println!("Invalid bet: {err}.");
                continue;
            }
        };

        while state.phase == Phase::PlayerTurn {
            print_table(&state);

            let result = match prompt_line(&format!(
                "{} {} [?]help: ",
                colorize("[h]it", "32"),
                colorize("[s]tand", "32")
            ))
            .as_str()
            {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "?" | "help" => {
                    println!("{HOW_TO_PLAY}");
                    continue;
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => state = next,
                Err(err) => {
                    println!("Action error: {err}");
                    break;
                }
            }
        }

        print_table(&state);
        match state.outcome {
            Some(Outcome::PlayerWin) => println!("You win!"),
            Some(Outcome::DealerWin) if state.player_total > 21 => {
                println!("You busted! Dealer wins.");
            }
            Some(Outcome::DealerWin) => println!("Dealer wins."),
            Some(Outcome::Push) => println!("It's a tie!"),
            None => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // EOF or a broken stdin ends the session.
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn prompt_bet(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "?" | "help" => {
                println!("{HOW_TO_PLAY}");
                continue;
            }
            "" => return Some(DEFAULT_BET),
            _ => {}
        }
        match parse_bet(&input) {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a valid positive number."),
        }
    }
}

fn print_table(state: &RoundState) {
    println!(
        "\nDealer: {} (value {})",
        format_cards(&state.dealer_cards),
        state.dealer_total
    );
    println!(
        "You:    {} (value {})",
        format_cards(&state.player_cards),
        state.player_total
    );
    println!("Bet {} | Chips {}\n", state.bet, state.chips);
}

fn format_cards(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &CardView) -> String {
    let color_code = match card.suit {
        "Hearts" | "Diamonds" => "31",
        _ => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
