use cribbage::{
    Card, Discard, Game, GameOptions, GameState, Player, PlayerShow, RoundResult, ScoreBreakdown,
    Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, winning_score: u16) -> Self {
        Self {
            game: Game::new(options(winning_score), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, winning_score: u16) {
        self.game = Game::new(options(winning_score), seed as u64);
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn discard(&mut self) -> Result<JsValue, JsValue> {
        let discards = self.game.discard().map_err(js_err)?;
        let js: Vec<JsDiscard> = discards.into_iter().map(JsDiscard::from).collect();
        to_js_value(&js)
    }

    pub fn cut(&mut self) -> Result<JsValue, JsValue> {
        let starter = self.game.cut().map_err(js_err)?;
        to_js_value(&card_to_js(starter))
    }

    pub fn show(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.show().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn clear_round(&mut self) {
        self.game.clear_round();
    }

    pub fn play_round(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.play_round().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            round: self.game.round(),
            dealer: player_to_str(self.game.dealer()),
            scores: self.game.scores(),
            hands: [Player::One, Player::Two].map(|player| {
                self.game
                    .hand(player)
                    .cards()
                    .iter()
                    .copied()
                    .map(card_to_js)
                    .collect()
            }),
            crib: self.game.crib().cards().iter().copied().map(card_to_js).collect(),
            starter: self.game.starter().map(card_to_js),
            winner: self.game.winner().map(player_to_str),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

/// Scores a hand given as text, e.g. `score_hand("5H 5C 5D JS", Some("5S"))`.
#[wasm_bindgen]
pub fn score_hand(cards: &str, starter: Option<String>) -> Result<JsValue, JsValue> {
    let hand = cribbage::parse_cards(cards).map_err(js_err)?;
    let starter = starter
        .map(|text| text.parse::<Card>())
        .transpose()
        .map_err(js_err)?;
    let size = hand.len() + usize::from(starter.is_some());
    if size > cribbage::evaluator::MAX_SCORING_CARDS {
        return Err(js_err(format_args!(
            "cannot score {size} cards, at most {} fit in a show",
            cribbage::evaluator::MAX_SCORING_CARDS
        )));
    }
    to_js_value(&JsScore::from(cribbage::evaluate(&hand, starter)))
}

/// Chooses the best discard from six cards given as text.
#[wasm_bindgen]
pub fn choose_discard(cards: &str) -> Result<JsValue, JsValue> {
    let hand = cribbage::parse_cards(cards).map_err(js_err)?;
    let choice = cribbage::choose_discard(&hand).map_err(js_err)?;
    to_js_value(&JsDiscard::from(choice))
}

fn options(winning_score: u16) -> GameOptions {
    GameOptions::default().with_winning_score(winning_score)
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    round: u32,
    dealer: &'static str,
    scores: [u16; 2],
    hands: [Vec<JsCard>; 2],
    crib: Vec<JsCard>,
    starter: Option<JsCard>,
    winner: Option<&'static str>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsScore {
    fifteens: u8,
    pairs: u8,
    runs: u8,
    flush: u8,
    nobs: u8,
    total: u16,
}

impl From<ScoreBreakdown> for JsScore {
    fn from(score: ScoreBreakdown) -> Self {
        Self {
            fifteens: score.fifteens,
            pairs: score.pairs,
            runs: score.runs,
            flush: score.flush,
            nobs: score.nobs,
            total: score.total(),
        }
    }
}

#[derive(Serialize)]
struct JsDiscard {
    discard: Vec<JsCard>,
    kept: Vec<JsCard>,
    score: JsScore,
}

impl From<Discard> for JsDiscard {
    fn from(choice: Discard) -> Self {
        Self {
            discard: choice.discard.into_iter().map(card_to_js).collect(),
            kept: choice.kept.into_iter().map(card_to_js).collect(),
            score: JsScore::from(choice.score),
        }
    }
}

#[derive(Serialize)]
struct JsShow {
    player: &'static str,
    cards: Vec<JsCard>,
    score: JsScore,
    credited: bool,
}

impl From<PlayerShow> for JsShow {
    fn from(show: PlayerShow) -> Self {
        Self {
            player: player_to_str(show.player),
            cards: show.cards.into_iter().map(card_to_js).collect(),
            score: JsScore::from(show.score),
            credited: show.credited,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    round: u32,
    dealer: &'static str,
    starter: JsCard,
    pone: JsShow,
    dealer_hand: JsShow,
    crib: JsShow,
    scores: [u16; 2],
    winner: Option<&'static str>,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            round: result.round,
            dealer: player_to_str(result.dealer),
            starter: card_to_js(result.starter),
            pone: JsShow::from(result.pone),
            dealer_hand: JsShow::from(result.dealer_hand),
            crib: JsShow::from(result.crib),
            scores: result.scores,
            winner: result.winner.map(player_to_str),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn player_to_str(player: Player) -> &'static str {
    match player {
        Player::One => "One",
        Player::Two => "Two",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Deal => "Deal",
        GameState::Discard => "Discard",
        GameState::Cut => "Cut",
        GameState::Show => "Show",
        GameState::RoundOver => "RoundOver",
        GameState::GameOver { .. } => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
