//! # Trade Ticket
//!
//! State of the buy/sell panel for one agent market.
//!
//! The ticket holds the raw stake text exactly as typed and parses it
//! leniently: the longest leading number wins, anything unparseable is
//! zero, negatives are zero.
//!
//! # Preview
//!
//! ```text
//! stake == 0           → Hidden
//! payout computes      → Available("To win" | "You'll receive", $x.xx, NN.N¢)
//! division by zero     → NoQuote
//! ```
//!
//! # Examples
//!
//! ```
//! use agent_arena::application::services::trade_ticket::{PreviewState, TradeTicket};
//! use agent_arena::domain::services::quote_model::QuoteModel;
//! use agent_arena::domain::value_objects::{AgentId, Cents, Outcome};
//! use rust_decimal::Decimal;
//!
//! let mut ticket = TradeTicket::new(AgentId::new("1"));
//! ticket.set_outcome(Outcome::Yes);
//! ticket.set_input("100");
//!
//! let model = QuoteModel::default();
//! let price = Cents::new(Decimal::from(50)).unwrap();
//! let state = ticket.preview_at(&model, price);
//! assert!(matches!(state, PreviewState::Available(_)));
//! assert_eq!(state.preview().map(|p| p.payout_label()).as_deref(), Some("$100.00"));
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::services::quote_model::{Quote, QuoteModel};
use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::usd::fixed;
use crate::domain::value_objects::{
    AgentId, Cents, Outcome, PayoutFraming, Timestamp, TradeIntentId, TradeMode, Usd,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which panel is rendering the ticket. Quick actions differ per layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelLayout {
    /// Side panel on wide screens.
    #[default]
    Desktop,
    /// Bottom sheet on narrow screens.
    Mobile,
}

/// What a quick action does to the stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    /// Adds to the current stake.
    Add(Decimal),
    /// Replaces the stake.
    Max(Decimal),
}

/// A one-tap stake button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    label: &'static str,
    kind: QuickActionKind,
}

impl QuickAction {
    const fn add(label: &'static str, amount: Decimal) -> Self {
        Self {
            label,
            kind: QuickActionKind::Add(amount),
        }
    }

    const fn max(amount: Decimal) -> Self {
        Self {
            label: "Max",
            kind: QuickActionKind::Max(amount),
        }
    }

    /// Button label.
    #[inline]
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Effect on the stake.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> QuickActionKind {
        self.kind
    }
}

const BUY_ACTIONS: [QuickAction; 4] = [
    QuickAction::add("+$1", dec!(1)),
    QuickAction::add("+$20", dec!(20)),
    QuickAction::add("+$100", dec!(100)),
    QuickAction::max(dec!(1000)),
];

// Labelled as percentages but add whole shares.
const DESKTOP_SELL_ACTIONS: [QuickAction; 3] = [
    QuickAction::add("25%", dec!(25)),
    QuickAction::add("50%", dec!(50)),
    QuickAction::max(dec!(100)),
];

const MOBILE_SELL_ACTIONS: [QuickAction; 4] = [
    QuickAction::add("+10", dec!(10)),
    QuickAction::add("+50", dec!(50)),
    QuickAction::add("+100", dec!(100)),
    QuickAction::max(dec!(500)),
];

/// Parses a stake the way a browser's `parseFloat` would, clamped at zero.
///
/// # Examples
///
/// ```
/// use agent_arena::application::services::trade_ticket::parse_stake;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_stake("12.5abc"), Decimal::new(125, 1));
/// assert_eq!(parse_stake("abc"), Decimal::ZERO);
/// assert_eq!(parse_stake("-3"), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_stake(input: &str) -> Decimal {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digit_count = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digit_count += frac_end - frac_start;
        end = frac_end;
    }
    if digit_count == 0 {
        return Decimal::ZERO;
    }

    let number = trimmed.get(..end).unwrap_or_default();
    let number = number.strip_suffix('.').unwrap_or(number);
    let number = match number.strip_prefix('+') {
        Some(rest) => rest,
        None => number,
    };
    let normalized = if number.starts_with('.') || number.starts_with("-.") {
        number.replacen('.', "0.", 1)
    } else {
        number.to_string()
    };

    Decimal::from_str(&normalized)
        .map(|value| value.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// A priced preview of the current stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePreview {
    framing: PayoutFraming,
    payout: Decimal,
    avg_price: Cents,
}

impl TradePreview {
    /// Whether the payout is a net win or a sale amount.
    #[inline]
    #[must_use]
    pub const fn framing(&self) -> PayoutFraming {
        self.framing
    }

    /// The computed payout.
    #[inline]
    #[must_use]
    pub fn payout(&self) -> Usd {
        Usd::new(self.payout)
    }

    /// The side price the payout was computed at.
    #[inline]
    #[must_use]
    pub const fn avg_price(&self) -> Cents {
        self.avg_price
    }

    /// `To win` or `You'll receive`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.framing.label()
    }

    /// Payout in dollars to two decimals, e.g. `$100.00`.
    #[must_use]
    pub fn payout_label(&self) -> String {
        format!("${}", fixed(self.payout, 2))
    }

    /// Average price to one decimal, e.g. `Avg. Price 65.0¢`.
    #[must_use]
    pub fn avg_price_label(&self) -> String {
        format!("Avg. Price {}", self.avg_price.precise())
    }
}

/// What the ticket shows under the stake input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing staked yet.
    Hidden,
    /// A priced preview.
    Available(TradePreview),
    /// The stake cannot be priced at this quote.
    NoQuote,
}

impl PreviewState {
    /// Returns the preview if one is available.
    #[must_use]
    pub fn preview(&self) -> Option<&TradePreview> {
        match self {
            Self::Available(preview) => Some(preview),
            Self::Hidden | Self::NoQuote => None,
        }
    }
}

/// A submitted trade. Not persisted or executed; the arena only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeIntent {
    /// Intent id.
    pub id: TradeIntentId,
    /// Agent whose market is traded.
    pub agent_id: AgentId,
    /// Buy or sell.
    pub mode: TradeMode,
    /// Side traded.
    pub outcome: Outcome,
    /// Stake: dollars when buying, shares when selling.
    pub stake: Decimal,
    /// Side price at submission.
    pub price: Cents,
    /// Payout shown at submission.
    pub payout: Decimal,
    /// Submission time.
    pub at: Timestamp,
}

/// The buy/sell panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTicket {
    agent_id: AgentId,
    mode: TradeMode,
    outcome: Outcome,
    layout: PanelLayout,
    input: String,
}

impl TradeTicket {
    /// Opens an empty buy ticket for `agent_id`.
    #[must_use]
    pub fn new(agent_id: AgentId) -> Self {
        Self {
            agent_id,
            mode: TradeMode::Buy,
            outcome: Outcome::Yes,
            layout: PanelLayout::Desktop,
            input: String::new(),
        }
    }

    /// Sets the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: PanelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the agent.
    #[inline]
    #[must_use]
    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns buy or sell.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> TradeMode {
        self.mode
    }

    /// Returns the selected side.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the layout.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Returns the raw stake text.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the parsed stake.
    #[must_use]
    pub fn stake(&self) -> Decimal {
        parse_stake(&self.input)
    }

    /// Points the ticket at another agent, keeping mode and side.
    pub fn set_agent(&mut self, agent_id: AgentId) {
        self.agent_id = agent_id;
    }

    /// Switches between buying and selling.
    pub fn set_mode(&mut self, mode: TradeMode) {
        tracing::debug!(agent = %self.agent_id, %mode, "ticket mode changed");
        self.mode = mode;
    }

    /// Selects the side.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Replaces the stake text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Switches layout.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        self.layout = layout;
    }

    /// Quick actions for the current mode and layout.
    #[must_use]
    pub fn quick_actions(&self) -> &'static [QuickAction] {
        match (self.mode, self.layout) {
            (TradeMode::Buy, _) => &BUY_ACTIONS,
            (TradeMode::Sell, PanelLayout::Desktop) => &DESKTOP_SELL_ACTIONS,
            (TradeMode::Sell, PanelLayout::Mobile) => &MOBILE_SELL_ACTIONS,
        }
    }

    /// Applies a quick action.
    pub fn apply(&mut self, action: QuickAction) {
        let next = match action.kind {
            QuickActionKind::Add(amount) => self.stake().saturating_add(amount),
            QuickActionKind::Max(amount) => amount,
        };
        self.set_stake(next);
    }

    /// Applies the quick action with `label`, if the current layout has one.
    ///
    /// Returns false when no action matches.
    pub fn apply_label(&mut self, label: &str) -> bool {
        match self.quick_actions().iter().find(|a| a.label == label) {
            Some(action) => {
                self.apply(*action);
                true
            }
            None => false,
        }
    }

    /// `+1` stepper.
    pub fn increment(&mut self) {
        self.set_stake(self.stake().saturating_add(Decimal::ONE));
    }

    /// `-1` stepper; never goes below zero.
    pub fn decrement(&mut self) {
        let next = self.stake().saturating_sub(Decimal::ONE).max(Decimal::ZERO);
        self.set_stake(next);
    }

    /// Clears the stake.
    pub fn reset(&mut self) {
        self.input.clear();
    }

    /// Closes the ticket without trading.
    pub fn cancel(&mut self) {
        tracing::debug!(agent = %self.agent_id, "ticket cancelled");
        self.reset();
    }

    fn set_stake(&mut self, stake: Decimal) {
        self.input = if stake.is_zero() {
            String::new()
        } else {
            stake.normalize().to_string()
        };
    }

    /// Preview at the quoted price of the selected side.
    #[must_use]
    pub fn preview(&self, model: &QuoteModel, quote: &Quote) -> PreviewState {
        self.preview_at(model, quote.price_for(self.outcome))
    }

    /// Preview at an explicit side price.
    #[must_use]
    pub fn preview_at(&self, model: &QuoteModel, price: Cents) -> PreviewState {
        let stake = self.stake();
        if stake.is_zero() {
            return PreviewState::Hidden;
        }

        let framing = self.mode.framing();
        match model.potential_payout(stake, price, framing) {
            Ok(payout) => PreviewState::Available(TradePreview {
                framing,
                payout,
                avg_price: price,
            }),
            Err(ArithmeticError::DivisionByZero) => {
                tracing::warn!(
                    agent = %self.agent_id,
                    outcome = %self.outcome,
                    %price,
                    "no quote available at zero price"
                );
                PreviewState::NoQuote
            }
            Err(error) => {
                tracing::warn!(
                    agent = %self.agent_id,
                    %error,
                    "payout could not be computed"
                );
                PreviewState::NoQuote
            }
        }
    }

    /// Submits the ticket at `quote` and clears the stake.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if nothing is staked
    /// - `ApplicationError::NoQuoteAvailable` if the stake cannot be priced
    pub fn submit(&mut self, model: &QuoteModel, quote: &Quote) -> ApplicationResult<TradeIntent> {
        let price = quote.price_for(self.outcome);
        let preview = match self.preview_at(model, price) {
            PreviewState::Available(preview) => preview,
            PreviewState::Hidden => {
                return Err(ApplicationError::validation("stake must be positive"));
            }
            PreviewState::NoQuote => {
                return Err(ApplicationError::no_quote(format!(
                    "{} {} at {price}",
                    self.agent_id, self.outcome
                )));
            }
        };

        let intent = TradeIntent {
            id: TradeIntentId::new_v4(),
            agent_id: self.agent_id.clone(),
            mode: self.mode,
            outcome: self.outcome,
            stake: self.stake(),
            price,
            payout: preview.payout,
            at: Timestamp::now(),
        };

        tracing::info!(
            intent_id = %intent.id,
            agent = %intent.agent_id,
            mode = %intent.mode,
            outcome = %intent.outcome,
            stake = %intent.stake,
            price = %intent.price,
            payout = %intent.payout,
            "trade submitted"
        );

        self.reset();
        Ok(intent)
    }
}
