//! Session integration tests.

#![allow(clippy::float_cmp)]

use std::collections::VecDeque;

use bjsim::{
    BetError, BetInput, Event, EventSink, InputError, NoPause, Prompt, Session, SessionError,
    SessionOptions,
};

#[derive(Default)]
struct Recorder {
    invalid_bets: Vec<f64>,
    balances: Vec<f64>,
    payouts: Vec<f64>,
    ended_with: Option<f64>,
}

impl EventSink for Recorder {
    fn emit(&mut self, event: &Event<'_>) {
        match *event {
            Event::InvalidBet { amount, .. } => self.invalid_bets.push(amount),
            Event::BalanceUpdated { balance } => self.balances.push(balance),
            Event::Outcome { payout, .. } => self.payouts.push(payout),
            Event::SessionEnded { balance } => self.ended_with = Some(balance),
            _ => {}
        }
    }
}

fn scripted(lines: &[&'static str]) -> impl FnMut(Prompt) -> Result<String, InputError> {
    let mut lines: VecDeque<&'static str> = lines.iter().copied().collect();
    move |_| {
        lines
            .pop_front()
            .map(str::to_string)
            .ok_or(InputError::Unavailable)
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = SessionOptions::default()
        .with_starting_balance(250.0)
        .with_dealer_pause(core::time::Duration::ZERO);

    assert_eq!(options.starting_balance, 250.0);
    assert!(options.dealer_pause.is_zero());
    assert_eq!(SessionOptions::default().starting_balance, 100.0);
}

#[test]
fn bet_validation() {
    let session = Session::new(SessionOptions::default(), 1);

    assert_eq!(session.validate_bet(0.0), Err(BetError::NotPositive));
    assert_eq!(session.validate_bet(-5.0), Err(BetError::NotPositive));
    assert_eq!(session.validate_bet(100.5), Err(BetError::ExceedsBalance));
    assert_eq!(session.validate_bet(f64::NAN), Err(BetError::NotFinite));
    assert_eq!(session.validate_bet(f64::INFINITY), Err(BetError::NotFinite));
    assert_eq!(session.validate_bet(100.0), Ok(()));
    assert_eq!(session.validate_bet(0.01), Ok(()));

    let broke = Session::new(SessionOptions::default().with_starting_balance(0.0), 1);
    assert_eq!(broke.validate_bet(1.0), Err(BetError::SessionOver));
}

#[test]
fn bet_input_parsing() {
    assert_eq!(BetInput::parse(" 25 "), BetInput::Amount(25.0));
    assert_eq!(BetInput::parse("q"), BetInput::Quit);
    assert_eq!(BetInput::parse(""), BetInput::Quit);
    assert!(matches!(BetInput::parse("nan"), BetInput::Amount(v) if v.is_nan()));

    let mut failing = |_: Prompt| -> Result<String, InputError> { Err(InputError::Unavailable) };
    assert_eq!(BetInput::read(&mut failing, 10.0), BetInput::Quit);
}

#[test]
fn rejected_bet_leaves_balance_untouched() {
    let mut session = Session::new(SessionOptions::default(), 9);
    let err = session
        .play_round(150.0, &mut scripted(&[]), &mut (), &mut NoPause)
        .unwrap_err();

    assert_eq!(err, SessionError::Bet(BetError::ExceedsBalance));
    assert_eq!(session.balance(), 100.0);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn play_round_applies_payout() {
    let mut session = Session::new(SessionOptions::default(), 5);
    let mut events = Recorder::default();

    let result = session
        .play_round(20.0, &mut scripted(&["s"]), &mut events, &mut NoPause)
        .unwrap();

    assert_eq!(result.bet, 20.0);
    assert_eq!(result.payout, result.outcome.payout(20.0));
    assert_eq!(session.balance(), 100.0 + result.payout);
    assert_eq!(session.rounds_played(), 1);
    assert_eq!(events.balances, vec![session.balance()]);
}

#[test]
fn non_numeric_bet_quits() {
    let mut session = Session::new(SessionOptions::default(), 2);
    let mut events = Recorder::default();

    let summary = session
        .run(&mut scripted(&["quit"]), &mut events, &mut NoPause)
        .unwrap();

    assert_eq!(summary.rounds_played, 0);
    assert_eq!(summary.final_balance, 100.0);
    assert_eq!(summary.starting_balance, 100.0);
    assert_eq!(events.ended_with, Some(100.0));
}

#[test]
fn invalid_bets_are_reported_and_prompted_again() {
    let mut session = Session::new(SessionOptions::default(), 2);
    let mut events = Recorder::default();

    let summary = session
        .run(
            &mut scripted(&["0", "500", "-3", "q"]),
            &mut events,
            &mut NoPause,
        )
        .unwrap();

    assert_eq!(summary.rounds_played, 0);
    assert_eq!(events.invalid_bets, vec![0.0, 500.0, -3.0]);
    assert!(events.payouts.is_empty());
}

#[test]
fn run_ends_when_balance_is_gone() {
    let mut session = Session::new(SessionOptions::default().with_starting_balance(0.0), 3);
    let mut prompts = 0;
    let mut input = |_: Prompt| -> Result<String, InputError> {
        prompts += 1;
        Ok("10".to_string())
    };

    let summary = session.run(&mut input, &mut (), &mut NoPause).unwrap();

    assert_eq!(prompts, 0);
    assert_eq!(summary.rounds_played, 0);
    assert!(session.is_over());
}

#[test]
fn balance_tracks_every_payout() {
    let mut session = Session::new(SessionOptions::default(), 2024);
    let mut events = Recorder::default();
    let mut bets = 0;
    let mut input = |prompt: Prompt| -> Result<String, InputError> {
        match prompt {
            Prompt::Bet { balance } => {
                bets += 1;
                if bets > 40 {
                    return Ok("q".to_string());
                }
                Ok(format!("{}", (balance / 2.0).max(1.0).min(balance)))
            }
            Prompt::HitOrStand => Ok("s".to_string()),
        }
    };

    let summary = session.run(&mut input, &mut events, &mut NoPause).unwrap();

    let total: f64 = events.payouts.iter().sum();
    assert_eq!(summary.rounds_played, events.payouts.len());
    assert!((summary.final_balance - (100.0 + total)).abs() < 1e-9);
    assert_eq!(events.ended_with, Some(summary.final_balance));
    assert!(summary.rounds_played > 0);
    assert!(summary.rounds_played <= 40);
}
