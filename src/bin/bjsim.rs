//! Terminal blackjack against the automated dealer.

use std::io::{self, BufRead, Write};

use bjsim::{
    Event, EventSink, Holder, InputError, InputProvider, Outcome, Prompt, Session, SessionOptions,
    SleepPacer,
};
use flexi_logger::Logger;
use log::warn;

const RULE: &str = "--------------------------";

fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let options = SessionOptions::default();
    let mut session = Session::from_entropy(options);
    let mut input = ConsoleInput::new(io::stdin().lock());
    let mut pacer = SleepPacer(options.dealer_pause);

    session.run(&mut input, &mut ConsoleRenderer, &mut pacer)?;
    Ok(())
}

struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for ConsoleInput<R> {
    fn read_line(&mut self, prompt: Prompt) -> Result<String, InputError> {
        match prompt {
            Prompt::Bet { balance } => {
                println!("Your balance is: ${balance:.2}");
                print!("Enter your bet (q to quit): ");
            }
            Prompt::HitOrStand => print!("\nWould you like to hit or stay (H/S)? "),
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Unavailable),
            Ok(_) => Ok(line.trim().to_string()),
            Err(err) => {
                warn!("failed to read from stdin: {err}");
                println!("An error occurred while reading input. Please try again");
                Err(InputError::Unavailable)
            }
        }
    }
}

struct ConsoleRenderer;

impl EventSink for ConsoleRenderer {
    fn emit(&mut self, event: &Event<'_>) {
        match *event {
            Event::InitialDeal { player, dealer_up } => {
                println!("\n{RULE}\n");
                println!("Player has been dealt: {player}");
                println!("Dealer shows: {dealer_up}");
            }
            Event::Blackjack {
                holder: Holder::Player,
                ..
            } => println!("Blackjack!"),
            Event::Blackjack {
                holder: Holder::Dealer,
                hand,
            } => {
                if let Some(hole) = hand.cards().get(1) {
                    println!("The dealer's other card is: {hole}");
                }
                println!("The dealer has blackjack.");
            }
            Event::PlayerDrew { card, hand } => {
                println!("You are dealt: {card}");
                println!("You now have: {hand}");
            }
            Event::PlayerBusted { .. } => println!("Oops, you busted :/"),
            Event::PlayerTwentyOne => println!("21! Nice."),
            Event::DealerRevealed { hand } => println!("\nDealer reveals: {hand}"),
            Event::DealerDrew { card, hand } => {
                println!("Dealer hits and receives: {card}");
                println!("Dealer now has: {hand}\n");
            }
            Event::Outcome { outcome, payout } => {
                match outcome {
                    Outcome::PlayerBlackjack | Outcome::PlayerWin => {
                        println!("You won ${payout:.2}");
                    }
                    Outcome::Push => println!("Push"),
                    Outcome::DealerBlackjack => println!("You lost ${:.2} :/", -payout),
                    Outcome::PlayerLoss => println!("You lost..."),
                }
                println!("\n{RULE}\n");
            }
            Event::InvalidBet { .. } => println!("Invalid bet."),
            Event::BalanceUpdated { .. } => {}
            Event::SessionEnded { balance } => println!("You left with: ${balance:.2}"),
        }
    }
}
