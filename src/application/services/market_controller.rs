//! # Market Controller
//!
//! Owns all view state of the arena page: the agent board, which agent is
//! selected for betting, which row is expanded, the feed tab, the strategy
//! dialog and the trade ticket.
//!
//! The quote model is stateless and injected; every price the controller
//! shows comes from it.
//!
//! # Examples
//!
//! ```
//! use agent_arena::application::services::market_controller::MarketController;
//! use agent_arena::domain::services::quote_model::QuoteModel;
//! use agent_arena::domain::value_objects::{AgentId, Outcome};
//! use agent_arena::infrastructure::persistence::in_memory::InMemoryAgentRepository;
//!
//! let repo = InMemoryAgentRepository::with_fixtures();
//! let mut controller = MarketController::from_repository(&repo, QuoteModel::default()).unwrap();
//!
//! controller.select_outcome(&AgentId::new("2"), Outcome::No).unwrap();
//! controller.ticket_mut().set_input("10");
//! let intent = controller.submit().unwrap();
//! assert_eq!(intent.agent_id, AgentId::new("2"));
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::trade_ticket::{
    PanelLayout, PreviewState, TradeIntent, TradeTicket,
};
use crate::domain::entities::Agent;
use crate::domain::services::quote_model::{Quote, QuoteModel};
use crate::domain::value_objects::{AgentId, Outcome, TradeMode};
use crate::infrastructure::persistence::AgentRepository;
use serde::{Deserialize, Serialize};

/// Tab under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedTab {
    /// Recent trades.
    #[default]
    Activity,
    /// Largest Yes/No holders of the selected agent.
    TopHolders,
}

/// One rendered board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    /// 1-based list position.
    pub rank: usize,
    /// Agent id.
    pub agent_id: AgentId,
    /// Agent name.
    pub name: String,
    /// Avatar initials.
    pub initials: String,
    /// Volume, e.g. `$285.4K USDC`.
    pub volume: String,
    /// Portfolio, e.g. `$100,000`.
    pub portfolio: String,
    /// Signed change, e.g. `+2.85%`.
    pub change: String,
    /// True when P&L is zero or positive.
    pub is_gain: bool,
    /// Win rate, e.g. `72.3%`.
    pub win_rate: String,
    /// Yes button, e.g. `Buy Yes 79¢`.
    pub yes_label: String,
    /// No button, e.g. `Buy No 21¢`.
    pub no_label: String,
    /// True for the row currently expanded.
    pub expanded: bool,
    /// The quote behind the labels.
    pub quote: Quote,
}

/// The page controller.
#[derive(Debug, Clone)]
pub struct MarketController {
    agents: Vec<Agent>,
    model: QuoteModel,
    expanded: Option<AgentId>,
    feed_tab: FeedTab,
    strategy_dialog: Option<AgentId>,
    ticket: TradeTicket,
}

impl MarketController {
    /// Creates a controller over `agents` in board order.
    ///
    /// The first agent is selected for betting.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if `agents` is empty.
    pub fn new(agents: Vec<Agent>, model: QuoteModel) -> ApplicationResult<Self> {
        let first = agents
            .first()
            .map(|a| a.id().clone())
            .ok_or_else(|| ApplicationError::validation("the arena has no agents"))?;

        Ok(Self {
            agents,
            model,
            expanded: None,
            feed_tab: FeedTab::default(),
            strategy_dialog: None,
            ticket: TradeTicket::new(first),
        })
    }

    /// Creates a controller over every agent in `repo`.
    ///
    /// # Errors
    ///
    /// Returns a repository error, or `Validation` if the repository is empty.
    pub fn from_repository(
        repo: &dyn AgentRepository,
        model: QuoteModel,
    ) -> ApplicationResult<Self> {
        Self::new(repo.get_all()?, model)
    }

    /// Returns the agents in board order.
    #[inline]
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Returns the quote model.
    #[inline]
    #[must_use]
    pub const fn model(&self) -> &QuoteModel {
        &self.model
    }

    /// Looks up an agent.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown id.
    pub fn agent(&self, agent_id: &AgentId) -> ApplicationResult<&Agent> {
        self.agents
            .iter()
            .find(|a| a.id() == agent_id)
            .ok_or_else(|| ApplicationError::not_found("Agent", agent_id.as_str()))
    }

    /// The agent selected for betting.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the selection no longer names a board agent.
    pub fn selected_agent(&self) -> ApplicationResult<&Agent> {
        self.agent(self.ticket.agent_id())
    }

    /// Quote for an agent.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown id.
    pub fn quote_for(&self, agent_id: &AgentId) -> ApplicationResult<Quote> {
        Ok(self.model.quote(self.agent(agent_id)?))
    }

    /// Quote for the agent selected for betting.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the selection no longer names a board agent.
    pub fn current_quote(&self) -> ApplicationResult<Quote> {
        self.quote_for(self.ticket.agent_id())
    }

    /// Rendered board.
    #[must_use]
    pub fn board(&self) -> Vec<BoardRow> {
        let mode = self.ticket.mode();
        self.agents
            .iter()
            .enumerate()
            .map(|(index, agent)| {
                let quote = self.model.quote(agent);
                BoardRow {
                    rank: index + 1,
                    agent_id: agent.id().clone(),
                    name: agent.name().to_string(),
                    initials: agent.initials(),
                    volume: format!("{} USDC", agent.volume().compact_thousands()),
                    portfolio: agent.portfolio().grouped(0),
                    change: agent.percent_change_label(),
                    is_gain: agent.pnl().is_gain(),
                    win_rate: format!("{}%", agent.win_rate()),
                    yes_label: format!("{mode} {} {}", Outcome::Yes, quote.yes()),
                    no_label: format!("{mode} {} {}", Outcome::No, quote.no()),
                    expanded: self.expanded.as_ref() == Some(agent.id()),
                    quote,
                }
            })
            .collect()
    }

    /// Chooses a Yes/No button: selects the agent and side for the ticket.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown id.
    pub fn select_outcome(&mut self, agent_id: &AgentId, outcome: Outcome) -> ApplicationResult<()> {
        self.agent(agent_id)?;
        tracing::debug!(agent = %agent_id, %outcome, "outcome selected");
        self.ticket.set_agent(agent_id.clone());
        self.ticket.set_outcome(outcome);
        Ok(())
    }

    /// Opens the ticket for an agent and side.
    ///
    /// The mobile sheet always starts from an empty stake.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown id.
    pub fn open_ticket(
        &mut self,
        agent_id: &AgentId,
        outcome: Outcome,
        layout: PanelLayout,
    ) -> ApplicationResult<()> {
        self.select_outcome(agent_id, outcome)?;
        self.ticket.set_layout(layout);
        if layout == PanelLayout::Mobile {
            self.ticket.reset();
        }
        Ok(())
    }

    /// Expands a row, or collapses it if it is already expanded.
    pub fn toggle_expanded(&mut self, agent_id: &AgentId) {
        self.expanded = match self.expanded.take() {
            Some(current) if &current == agent_id => None,
            _ => Some(agent_id.clone()),
        };
    }

    /// Returns the expanded row.
    #[must_use]
    pub fn expanded(&self) -> Option<&AgentId> {
        self.expanded.as_ref()
    }

    /// Switches buy/sell for the ticket and the board labels.
    pub fn set_mode(&mut self, mode: TradeMode) {
        self.ticket.set_mode(mode);
    }

    /// Returns the trading mode.
    #[must_use]
    pub fn mode(&self) -> TradeMode {
        self.ticket.mode()
    }

    /// Switches the tab under the board.
    pub fn set_feed_tab(&mut self, tab: FeedTab) {
        self.feed_tab = tab;
    }

    /// Returns the tab under the board.
    #[must_use]
    pub const fn feed_tab(&self) -> FeedTab {
        self.feed_tab
    }

    /// Opens the strategy dialog for an agent.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown id.
    pub fn open_strategy(&mut self, agent_id: &AgentId) -> ApplicationResult<()> {
        self.agent(agent_id)?;
        self.strategy_dialog = Some(agent_id.clone());
        Ok(())
    }

    /// Closes the strategy dialog.
    pub fn close_strategy(&mut self) {
        self.strategy_dialog = None;
    }

    /// The agent whose strategy dialog is open.
    #[must_use]
    pub fn strategy_dialog(&self) -> Option<&Agent> {
        self.strategy_dialog
            .as_ref()
            .and_then(|id| self.agents.iter().find(|a| a.id() == id))
    }

    /// Returns the ticket.
    #[inline]
    #[must_use]
    pub fn ticket(&self) -> &TradeTicket {
        &self.ticket
    }

    /// Returns the ticket for editing the stake.
    #[inline]
    pub fn ticket_mut(&mut self) -> &mut TradeTicket {
        &mut self.ticket
    }

    /// Preview of the ticket at the current quote.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the selection no longer names a board agent.
    pub fn preview(&self) -> ApplicationResult<PreviewState> {
        let quote = self.current_quote()?;
        Ok(self.ticket.preview(&self.model, &quote))
    }

    /// Submits the ticket at the current quote.
    ///
    /// # Errors
    ///
    /// See [`TradeTicket::submit`].
    pub fn submit(&mut self) -> ApplicationResult<TradeIntent> {
        let quote = self.current_quote()?;
        self.ticket.submit(&self.model, &quote)
    }

    /// Closes the ticket without trading.
    pub fn cancel(&mut self) {
        self.ticket.cancel();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::in_memory::InMemoryAgentRepository;
    use rust_decimal_macros::dec;

    fn controller() -> MarketController {
        let repo = InMemoryAgentRepository::with_fixtures();
        MarketController::from_repository(&repo, QuoteModel::default()).unwrap()
    }

    mod board {
        use super::*;

        #[test]
        fn first_row_labels() {
            let board = controller().board();
            let row = board.first().unwrap();
            assert_eq!(row.rank, 1);
            assert_eq!(row.initials, "QA");
            assert_eq!(row.volume, "$285.4K USDC");
            assert_eq!(row.portfolio, "$100,000");
            assert_eq!(row.change, "+2.85%");
            assert_eq!(row.win_rate, "72.3%");
            assert_eq!(row.yes_label, "Buy Yes 79¢");
            assert_eq!(row.no_label, "Buy No 22¢");
        }

        #[test]
        fn losing_agent_row() {
            let board = controller().board();
            let row = board.last().unwrap();
            assert_eq!(row.rank, 5);
            assert!(!row.is_gain);
            assert_eq!(row.change, "-0.89%");
            assert_eq!(row.quote.yes().get(), dec!(41.1));
        }

        #[test]
        fn sell_mode_relabels_buttons() {
            let mut controller = controller();
            controller.set_mode(TradeMode::Sell);
            let board = controller.board();
            assert!(board.iter().all(|r| r.yes_label.starts_with("Sell Yes")));
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn defaults_to_first_agent() {
            let controller = controller();
            assert_eq!(controller.selected_agent().unwrap().name(), "QuantumTrader AI");
            assert_eq!(controller.ticket().outcome(), Outcome::Yes);
        }

        #[test]
        fn select_outcome_moves_ticket() {
            let mut controller = controller();
            controller
                .select_outcome(&AgentId::new("4"), Outcome::No)
                .unwrap();
            assert_eq!(controller.ticket().agent_id(), &AgentId::new("4"));
            assert_eq!(controller.ticket().outcome(), Outcome::No);
            let quote = controller.current_quote().unwrap();
            assert_eq!(quote.no().get(), dec!(53.2));
        }

        #[test]
        fn unknown_agent_is_not_found() {
            let mut controller = controller();
            let err = controller
                .select_outcome(&AgentId::new("42"), Outcome::Yes)
                .unwrap_err();
            assert!(err.is_not_found());
        }

        #[test]
        fn empty_board_rejected() {
            let result = MarketController::new(Vec::new(), QuoteModel::default());
            assert!(matches!(result, Err(ApplicationError::Validation(_))));
        }
    }

    mod view_state {
        use super::*;

        #[test]
        fn toggle_expanded_collapses_same_row() {
            let mut controller = controller();
            let id = AgentId::new("2");
            controller.toggle_expanded(&id);
            assert_eq!(controller.expanded(), Some(&id));
            controller.toggle_expanded(&AgentId::new("3"));
            assert_eq!(controller.expanded(), Some(&AgentId::new("3")));
            controller.toggle_expanded(&AgentId::new("3"));
            assert_eq!(controller.expanded(), None);
        }

        #[test]
        fn strategy_dialog_round_trip() {
            let mut controller = controller();
            controller.open_strategy(&AgentId::new("3")).unwrap();
            assert_eq!(
                controller.strategy_dialog().map(Agent::strategy),
                Some("Momentum & Trend Following (10x Leverage)")
            );
            controller.close_strategy();
            assert!(controller.strategy_dialog().is_none());
        }

        #[test]
        fn mobile_ticket_starts_empty() {
            let mut controller = controller();
            controller.ticket_mut().set_input("25");
            controller
                .open_ticket(&AgentId::new("1"), Outcome::Yes, PanelLayout::Desktop)
                .unwrap();
            assert_eq!(controller.ticket().input(), "25");
            controller
                .open_ticket(&AgentId::new("1"), Outcome::Yes, PanelLayout::Mobile)
                .unwrap();
            assert_eq!(controller.ticket().input(), "");
        }

        #[test]
        fn feed_tab_switches() {
            let mut controller = controller();
            assert_eq!(controller.feed_tab(), FeedTab::Activity);
            controller.set_feed_tab(FeedTab::TopHolders);
            assert_eq!(controller.feed_tab(), FeedTab::TopHolders);
        }
    }

    mod trading {
        use super::*;

        #[test]
        fn preview_uses_current_quote() {
            let mut controller = controller();
            controller.ticket_mut().set_input("100");
            let state = controller.preview().unwrap();
            let preview = state.preview().copied().unwrap();
            assert_eq!(preview.avg_price().get(), dec!(78.5));
            assert_eq!(preview.payout_label(), "$27.39");
        }

        #[test]
        fn submit_then_cancel() {
            let mut controller = controller();
            controller.ticket_mut().set_input("5");
            let intent = controller.submit().unwrap();
            assert_eq!(intent.mode, TradeMode::Buy);
            assert_eq!(controller.ticket().stake(), rust_decimal::Decimal::ZERO);

            controller.ticket_mut().set_input("5");
            controller.cancel();
            assert_eq!(controller.ticket().input(), "");
        }
    }
}
