use crazy8s::{
    AiAction, AiTurnTicket, Card, DrawOutcome, Game, GameOptions, Hand, PlayOutcome, Side,
    Status, Suit, Table,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    rules_visible: bool,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            rules_visible: false,
        }
    }

    pub fn start_new_game(&self) -> Result<(), JsValue> {
        self.game.start_new_game().map_err(js_err)
    }

    pub fn play_card(&self, card_id: u8) -> Result<String, JsValue> {
        self.game
            .play_card(card_id)
            .map(|outcome| play_outcome_to_str(outcome).to_owned())
            .map_err(js_err)
    }

    pub fn draw_card(&self) -> Result<String, JsValue> {
        self.game
            .draw_card()
            .map(|outcome| draw_outcome_to_str(outcome).to_owned())
            .map_err(js_err)
    }

    pub fn choose_suit(&self, suit: &str) -> Result<(), JsValue> {
        let suit: Suit = suit.parse().map_err(js_err)?;
        self.game.choose_suit(suit).map_err(js_err)
    }

    /// Rules panel visibility lives here only; the game never sees it.
    pub fn toggle_rules_panel(&mut self) -> bool {
        self.rules_visible = !self.rules_visible;
        self.rules_visible
    }

    /// Returns `{ generation, delay_ms }` when the opponent is due, else `null`.
    pub fn pending_ai_turn(&self) -> Result<JsValue, JsValue> {
        match self.game.pending_ai_turn() {
            Some(ticket) => to_js_value(&JsTicket::from(ticket)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn run_ai_turn(&self, generation: u32) -> Result<JsValue, JsValue> {
        let ticket = AiTurnTicket {
            generation,
            delay_ms: self.game.options.ai_delay_ms,
        };
        let action = self.game.run_ai_turn(ticket).map_err(js_err)?;
        to_js_value(&JsAiAction::from(action))
    }

    pub fn playable_cards(&self) -> Vec<u8> {
        self.game.playable_cards()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot::new(&self.game.snapshot(), self.rules_visible);
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    status: &'static str,
    turn: &'static str,
    winner: Option<&'static str>,
    active_suit: Option<&'static str>,
    top_discard: Option<JsCard>,
    discard_count: u32,
    deck_count: u32,
    player_hand: Vec<JsCard>,
    ai_hand_count: u32,
    message: String,
    rules_visible: bool,
}

impl Snapshot {
    fn new(table: &Table, rules_visible: bool) -> Self {
        Self {
            status: status_to_str(table.status),
            turn: side_to_str(table.turn),
            winner: table.winner.map(side_to_str),
            active_suit: table.active_suit.map(Suit::name),
            top_discard: table.top_discard().copied().map(JsCard::from),
            discard_count: table.discard_pile.len() as u32,
            deck_count: table.deck.len() as u32,
            player_hand: hand_to_js(&table.player_hand),
            ai_hand_count: table.ai_hand.len() as u32,
            message: table.message.clone(),
            rules_visible,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    suit: &'static str,
    symbol: char,
    rank: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            suit: card.suit.name(),
            symbol: card.suit.symbol(),
            rank: card.rank.label(),
        }
    }
}

#[derive(Serialize)]
struct JsTicket {
    generation: u32,
    delay_ms: u32,
}

impl From<AiTurnTicket> for JsTicket {
    fn from(ticket: AiTurnTicket) -> Self {
        Self {
            generation: ticket.generation,
            delay_ms: ticket.delay_ms,
        }
    }
}

#[derive(Serialize)]
struct JsAiAction {
    kind: &'static str,
    card: Option<JsCard>,
    suit: Option<&'static str>,
}

impl From<AiAction> for JsAiAction {
    fn from(action: AiAction) -> Self {
        let (kind, suit) = match action {
            AiAction::Played(_) => ("played", None),
            AiAction::PlayedWild { suit, .. } => ("played_wild", Some(suit.name())),
            AiAction::Drew => ("drew", None),
            AiAction::Passed => ("passed", None),
        };

        Self {
            kind,
            card: action.card().map(JsCard::from),
            suit,
        }
    }
}

fn hand_to_js(hand: &Hand) -> Vec<JsCard> {
    hand.cards().iter().copied().map(JsCard::from).collect()
}

fn status_to_str(status: Status) -> &'static str {
    match status {
        Status::Waiting => "waiting",
        Status::Playing => "playing",
        Status::SuitSelection => "suit_selection",
        Status::GameOver => "game_over",
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "player",
        Side::Ai => "ai",
    }
}

fn play_outcome_to_str(outcome: PlayOutcome) -> &'static str {
    match outcome {
        PlayOutcome::Played(_) => "played",
        PlayOutcome::ChooseSuit(_) => "choose_suit",
        PlayOutcome::Won(_) => "won",
    }
}

fn draw_outcome_to_str(outcome: DrawOutcome) -> &'static str {
    match outcome {
        DrawOutcome::Drew(_) => "drew",
        DrawOutcome::Passed => "passed",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
