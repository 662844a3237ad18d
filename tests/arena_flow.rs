//! End-to-end flows over the fixture repositories.

#![allow(clippy::unwrap_used)]

use agent_arena::application::services::{
    ActivityFeed, ActivityFilter, HoldersService, LeaderboardService, MarketController,
    PanelLayout, PortfolioService, PreviewState, ProfileView,
};
use agent_arena::domain::value_objects::{
    AgentId, LeaderboardPeriod, Outcome, PerformancePeriod, Timestamp, TradeMode,
};
use agent_arena::infrastructure::persistence::in_memory::{
    InMemoryActivityRepository, InMemoryAgentRepository, InMemoryHolderRepository,
    InMemoryLeaderboardRepository, InMemoryPortfolioRepository, InMemoryProfileRepository,
};
use agent_arena::{AppConfig, ApplicationError, QuoteModel};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn controller() -> MarketController {
    let model = QuoteModel::new(AppConfig::default().quote).unwrap();
    MarketController::from_repository(&InMemoryAgentRepository::with_fixtures(), model).unwrap()
}

#[test]
fn board_prices_every_agent() {
    let rows = controller().board();
    assert_eq!(rows.len(), 5);
    for row in &rows {
        let quote = row.quote.clone();
        assert_eq!(quote.yes().get() + quote.no().get(), dec!(100));
    }
    assert_eq!(rows.first().unwrap().yes_label, "Buy Yes 79¢");
}

#[test]
fn buy_no_then_submit() {
    let mut controller = controller();
    let agent = AgentId::new("1");
    controller
        .open_ticket(&agent, Outcome::No, PanelLayout::Desktop)
        .unwrap();
    controller.ticket_mut().set_input("100");

    let state = controller.preview().unwrap();
    let preview = state.preview().unwrap();
    assert_eq!(preview.label(), "To win");
    assert_eq!(preview.payout_label(), "$365.12");
    assert_eq!(preview.avg_price_label(), "Avg. Price 21.5¢");

    let intent = controller.submit().unwrap();
    assert_eq!(intent.agent_id, agent);
    assert_eq!(intent.outcome, Outcome::No);
    assert_eq!(intent.stake, dec!(100));
    assert_eq!(intent.price.get(), dec!(21.5));
    assert_eq!(controller.ticket().input(), "");
}

#[test]
fn sell_yes_receives_proceeds() {
    let mut controller = controller();
    controller
        .open_ticket(&AgentId::new("1"), Outcome::Yes, PanelLayout::Mobile)
        .unwrap();
    controller.set_mode(TradeMode::Sell);
    controller.ticket_mut().set_input("100");

    let state = controller.preview().unwrap();
    let preview = state.preview().unwrap();
    assert_eq!(preview.label(), "You'll receive");
    assert_eq!(preview.payout_label(), "$78.50");
}

#[test]
fn empty_stake_hides_preview_and_blocks_submit() {
    let mut controller = controller();
    controller.ticket_mut().set_input("");
    assert_eq!(controller.preview().unwrap(), PreviewState::Hidden);
    assert!(matches!(
        controller.submit(),
        Err(ApplicationError::Validation(_))
    ));
}

#[test]
fn weekly_leaders() {
    let service = LeaderboardService::new(Arc::new(InMemoryLeaderboardRepository::with_fixtures()));
    let leaders = service.profit_leaders(LeaderboardPeriod::Weekly).unwrap();
    assert_eq!(leaders.len(), 5);
    assert_eq!(leaders.first().unwrap().username(), "CryptoKing");
    assert_eq!(leaders.first().unwrap().total_profit().get(), dec!(2847.50));

    let volume = service.volume_leaders(LeaderboardPeriod::Weekly).unwrap();
    assert_eq!(volume.len(), 5);
    assert!(volume.windows(2).all(|w| w[0].volume.get() >= w[1].volume.get()));
}

#[test]
fn portfolio_summary() {
    let service = PortfolioService::new(Arc::new(InMemoryPortfolioRepository::with_fixtures()));
    let summary = service.summary().unwrap();
    assert_eq!(summary.total_value.get(), dec!(269.00));
    assert_eq!(summary.total_pnl.get(), dec!(26.50));
    assert_eq!(summary.markets_traded, 3);
}

#[test]
fn feeds_and_holders_for_one_agent() {
    let now = Timestamp::now();
    let feed = ActivityFeed::new(Arc::new(InMemoryActivityRepository::with_fixtures(now)));
    let agent = AgentId::new("1");

    let all = feed.items(&ActivityFilter::All).unwrap();
    let mine = feed.items(&ActivityFilter::Agent(agent.clone())).unwrap();
    assert!(!mine.is_empty());
    assert!(mine.len() <= all.len());
    assert!(mine.iter().all(|item| item.agent_id() == &agent));

    let holders = HoldersService::new(Arc::new(InMemoryHolderRepository::with_fixtures()));
    let columns = holders.for_agent(&agent).unwrap();
    assert!(columns.yes.windows(2).all(|w| w[0].shares() >= w[1].shares()));
    assert!(columns.no.windows(2).all(|w| w[0].shares() >= w[1].shares()));
}

#[test]
fn profile_periods() {
    let repo = InMemoryProfileRepository::with_fixtures();
    let mut view = ProfileView::load(&repo, &AgentId::new("1")).unwrap();
    assert_eq!(view.profile().name(), "QuantumTrader AI");
    view.set_period(PerformancePeriod::Weekly);
    assert!(view.series().last().unwrap().is_today());
}
