use log::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::event::{Event, EventSink};
use crate::input::{InputProvider, PlayerChoice};

use super::{PlayerTurnState, Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn || self.turn.is_terminal() {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    fn finish_player_turn(&mut self, turn: PlayerTurnState) {
        self.turn = turn;
        self.state = if turn == PlayerTurnState::Busted {
            RoundState::RoundOver
        } else {
            RoundState::DealerTurn
        };
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 busts and ends the round; reaching exactly 21 ends the
    /// turn without further hits.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal_one()?;
        self.player.add_card(card);

        let value = self.player.value();
        debug!("player hits {card}, total {value}");

        if value > 21 {
            self.finish_player_turn(PlayerTurnState::Busted);
        } else if value == 21 {
            self.finish_player_turn(PlayerTurnState::TwentyOne);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;
        debug!("player stands on {}", self.player.value());
        self.finish_player_turn(PlayerTurnState::Standing);
        Ok(())
    }

    /// Runs the player's turn, asking for a choice until the turn ends.
    ///
    /// Returns `true` if the player busted and lost the round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn player_turn<I, E>(
        &mut self,
        input: &mut I,
        events: &mut E,
    ) -> Result<bool, RoundError>
    where
        I: InputProvider + ?Sized,
        E: EventSink + ?Sized,
    {
        self.ensure_player_turn()?;

        while !self.turn.is_terminal() {
            match PlayerChoice::read(input) {
                PlayerChoice::Hit => {
                    let card = self.hit()?;
                    events.emit(&Event::PlayerDrew {
                        card,
                        hand: &self.player,
                    });
                }
                PlayerChoice::Stand => self.stand()?,
            }
        }

        match self.turn {
            PlayerTurnState::Busted => events.emit(&Event::PlayerBusted {
                value: self.player.value(),
            }),
            PlayerTurnState::TwentyOne => events.emit(&Event::PlayerTwentyOne),
            PlayerTurnState::AwaitingChoice | PlayerTurnState::Standing => {}
        }

        Ok(self.turn == PlayerTurnState::Busted)
    }
}
