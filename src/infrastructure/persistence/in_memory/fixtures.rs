//! # Arena Fixtures
//!
//! The demo data set: five agents with their markets, holders, recent
//! activity, leaderboards, a sample user book and one agent profile.

use crate::domain::entities::{
    ActivityItem, Agent, AgentProfile, AssetPosition, HistoryEntry, Holder, HolderBook,
    LeaderboardEntry, PerformancePoint, StrategyNote, UserPosition,
};
use crate::domain::value_objects::{
    AgentId, AgentStatus, Asset, LeaderboardPeriod, Outcome, PerformancePeriod, PositionStatus,
    Timestamp, TradeMode,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PORTFOLIO: Decimal = dec!(100000);

type PositionRow = (Asset, Decimal, Decimal, u8);

fn agent(
    id: &str,
    name: &str,
    (pnl, pnl_percent, win_rate, volume): (Decimal, Decimal, Decimal, Decimal),
    strategy: &str,
    positions: [PositionRow; 5],
) -> Agent {
    positions
        .into_iter()
        .fold(
            Agent::builder(AgentId::new(id), name)
                .pnl(pnl)
                .pnl_percent(pnl_percent)
                .status(AgentStatus::Active)
                .portfolio(PORTFOLIO)
                .win_rate(win_rate)
                .volume(volume)
                .strategy(strategy),
            |builder, (asset, amount, pnl, leverage)| {
                builder.position(AssetPosition::new(asset, amount, pnl, leverage))
            },
        )
        .build()
}

/// The five competing agents, in board order.
#[must_use]
pub fn agents() -> Vec<Agent> {
    use Asset::{Bnb, Btc, Eth, Sol, Xrp};

    vec![
        agent(
            "1",
            "QuantumTrader AI",
            (dec!(2850.75), dec!(2.85), dec!(72.3), dec!(285430.50)),
            "Technical Analysis + Mean Reversion (5x Leverage)",
            [
                (Btc, dec!(35000), dec!(1205.30), 5),
                (Sol, dec!(30000), dec!(890.45), 4),
                (Eth, dec!(35000), dec!(755.00), 6),
                (Xrp, dec!(15000), dec!(325.50), 3),
                (Bnb, dec!(20000), dec!(280.75), 4),
            ],
        ),
        agent(
            "2",
            "ArbitrageHunter Pro",
            (dec!(1456.20), dec!(1.46), dec!(68.7), dec!(412350.75)),
            "Cross-Exchange Arbitrage (3x Leverage)",
            [
                (Btc, dec!(40000), dec!(680.15), 3),
                (Sol, dec!(25000), dec!(456.80), 5),
                (Eth, dec!(35000), dec!(319.25), 2),
                (Xrp, dec!(18000), dec!(245.30), 4),
                (Bnb, dec!(22000), dec!(165.85), 3),
            ],
        ),
        agent(
            "3",
            "TrendFollower Alpha",
            (dec!(850.40), dec!(0.85), dec!(64.2), dec!(195680.30)),
            "Momentum & Trend Following (10x Leverage)",
            [
                (Btc, dec!(45000), dec!(425.60), 10),
                (Sol, dec!(20000), dec!(180.25), 8),
                (Eth, dec!(35000), dec!(244.55), 12),
                (Xrp, dec!(12000), dec!(95.40), 6),
                (Bnb, dec!(18000), dec!(125.85), 8),
            ],
        ),
        agent(
            "4",
            "RiskParity Bot",
            (dec!(-320.85), dec!(-0.32), dec!(58.9), dec!(156780.90)),
            "Risk Parity & Volatility Targeting (2x Leverage)",
            [
                (Btc, dec!(33333), dec!(-145.20), 2),
                (Sol, dec!(33333), dec!(-85.65), 3),
                (Eth, dec!(33334), dec!(-90.00), 2),
                (Xrp, dec!(16000), dec!(-65.30), 2),
                (Bnb, dec!(17000), dec!(-45.85), 2),
            ],
        ),
        agent(
            "5",
            "DeepLearning Trader",
            (dec!(-890.50), dec!(-0.89), dec!(55.4), dec!(234560.40)),
            "Neural Networks & Pattern Recognition (8x Leverage)",
            [
                (Btc, dec!(42000), dec!(-425.30), 8),
                (Sol, dec!(28000), dec!(-265.90), 6),
                (Eth, dec!(30000), dec!(-199.30), 10),
                (Xrp, dec!(14000), dec!(-85.40), 5),
                (Bnb, dec!(16000), dec!(-115.25), 7),
            ],
        ),
    ]
}

/// Holder books for every fixture agent. Holder ids run across books.
#[must_use]
pub fn holder_books() -> Vec<HolderBook> {
    let sides: [(&str, [(&str, u64); 5], [(&str, u64); 5]); 5] = [
        (
            "1",
            [
                ("Bombarda", 22_860),
                ("Randomfool", 21_739),
                ("Vasek", 17_532),
                ("Leprechaun", 16_006),
                ("jimmyhasballs", 15_655),
            ],
            [
                ("kalcik", 66_886),
                ("WildRumpus2", 6_097),
                ("rdunjgiofnuei", 5_512),
                ("houskeskytarou", 3_250),
                ("biznisbiznis", 2_405),
            ],
        ),
        (
            "2",
            [
                ("TradeMaster", 18_500),
                ("CryptoKing", 15_200),
                ("AlphaTrader", 12_800),
                ("BetaBot", 11_400),
                ("GammaGains", 9_600),
            ],
            [
                ("BearMarket", 45_200),
                ("ShortSeller", 8_900),
                ("PutBuyer", 7_200),
                ("Pessimist", 5_800),
                ("DownTrend", 4_100),
            ],
        ),
        (
            "3",
            [
                ("MomentumMax", 16_800),
                ("TrendRider", 14_500),
                ("FollowFlow", 12_200),
                ("WaveWatcher", 10_800),
                ("SignalSeeker", 9_400),
            ],
            [
                ("CounterTrend", 38_900),
                ("Reversal", 7_800),
                ("Contrarian", 6_500),
                ("AntiMomentum", 5_200),
                ("FadeTrader", 3_800),
            ],
        ),
        (
            "4",
            [
                ("BalanceSeeker", 14_200),
                ("RiskAdjusted", 12_600),
                ("VolTrader", 11_100),
                ("ParityPlayer", 9_800),
                ("EqualWeight", 8_500),
            ],
            [
                ("HighRisk", 32_400),
                ("Volatile", 6_800),
                ("Unbalanced", 5_600),
                ("SkewedBets", 4_400),
                ("AsymmetricRisk", 3_200),
            ],
        ),
        (
            "5",
            [
                ("AIEnthusiast", 13_500),
                ("NeuralNet", 11_800),
                ("MLMaster", 10_200),
                ("DeepThought", 9_100),
                ("AlgoTrader", 7_900),
            ],
            [
                ("AntiAI", 28_700),
                ("HumanTouch", 6_200),
                ("ManualTrader", 5_100),
                ("OldSchool", 4_000),
                ("NoBot", 2_900),
            ],
        ),
    ];

    let mut next_id = 0u32;
    let mut holders = |rows: [(&str, u64); 5]| -> Vec<Holder> {
        rows.into_iter()
            .map(|(username, shares)| {
                next_id += 1;
                Holder::new(next_id.to_string(), username, shares)
            })
            .collect()
    };

    sides
        .into_iter()
        .map(|(agent_id, yes, no)| {
            let yes = holders(yes);
            let no = holders(no);
            HolderBook::new(AgentId::new(agent_id), yes, no)
        })
        .collect()
}

/// Recent activity, newest first, aged relative to `now`.
#[must_use]
pub fn activity(now: Timestamp) -> Vec<ActivityItem> {
    let rows: [(&str, TradeMode, u64, Outcome, &str, &str, Decimal, Decimal, i64); 7] = [
        ("CarTheFarmer", TradeMode::Sell, 97, Outcome::No, "1", "QuantumTrader AI", dec!(99.7), dec!(97), 7),
        ("abriellernaddox6", TradeMode::Sell, 46, Outcome::No, "2", "ArbitrageHunter Pro", dec!(99.4), dec!(46), 16),
        ("ffion748monika", TradeMode::Sell, 12, Outcome::No, "3", "TrendFollower Alpha", dec!(99.4), dec!(12), 16),
        ("Destinee117", TradeMode::Sell, 37, Outcome::No, "4", "RiskParity Bot", dec!(99.4), dec!(47), 16),
        ("Jean589", TradeMode::Sell, 58, Outcome::No, "5", "DeepLearning Trader", dec!(99.4), dec!(58), 16),
        ("Briellwukuu", TradeMode::Sell, 5, Outcome::No, "1", "QuantumTrader AI", dec!(99.7), dec!(5), 24),
        ("daniel122134", TradeMode::Buy, 84, Outcome::Yes, "2", "ArbitrageHunter Pro", dec!(96.5), dec!(81), 56),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(
            |((username, action, shares, outcome, agent_id, agent_name, price, value, mins), id)| {
                ActivityItem::new(
                    id.to_string(),
                    username,
                    action,
                    shares,
                    outcome,
                    AgentId::new(agent_id),
                    agent_name,
                    price,
                    value,
                    now.sub_mins(mins),
                )
            },
        )
        .collect()
}

/// One profit table.
#[must_use]
pub fn leaderboard(period: LeaderboardPeriod) -> Vec<LeaderboardEntry> {
    let rows: [(&str, Decimal); 10] = match period {
        LeaderboardPeriod::Weekly => [
            ("CryptoKing", dec!(2847.50)),
            ("TradeGuru", dec!(2156.30)),
            ("AlphaHunter", dec!(1892.75)),
            ("BetaMaster", dec!(1634.20)),
            ("GammaBot", dec!(1445.80)),
            ("DeltaForce", dec!(1298.60)),
            ("EpsilonEdge", dec!(1087.40)),
            ("ZetaZone", dec!(945.25)),
            ("EtaElite", dec!(823.90)),
            ("ThetaThrift", dec!(687.50)),
        ],
        LeaderboardPeriod::AllTime => [
            ("AlphaHunter", dec!(15847.50)),
            ("CryptoKing", dec!(14256.30)),
            ("TradeGuru", dec!(12892.75)),
            ("BetaMaster", dec!(11634.20)),
            ("DeltaForce", dec!(10445.80)),
            ("GammaBot", dec!(9298.60)),
            ("EpsilonEdge", dec!(8087.40)),
            ("ZetaZone", dec!(7945.25)),
            ("EtaElite", dec!(6823.90)),
            ("ThetaThrift", dec!(5687.50)),
        ],
    };

    rows.into_iter()
        .zip(1usize..)
        .map(|((username, profit), rank)| LeaderboardEntry::new(rank, username, profit))
        .collect()
}

fn market(agent: char) -> String {
    format!("Will Agent {agent} have the highest P&L at the end of the session?")
}

/// The sample user's positions.
#[must_use]
pub fn positions() -> Vec<UserPosition> {
    vec![
        UserPosition::new(
            "1",
            market('A'),
            Outcome::Yes,
            150,
            dec!(0.65),
            dec!(0.72),
            dec!(108.00),
            dec!(10.50),
            PositionStatus::Active,
        ),
        UserPosition::new(
            "2",
            market('B'),
            Outcome::No,
            200,
            dec!(0.45),
            dec!(0.38),
            dec!(76.00),
            dec!(-14.00),
            PositionStatus::Active,
        ),
        UserPosition::new(
            "3",
            market('C'),
            Outcome::Yes,
            100,
            dec!(0.55),
            dec!(0.85),
            dec!(85.00),
            dec!(30.00),
            PositionStatus::Resolved,
        ),
    ]
}

/// The sample user's trade history, newest first.
///
/// Rows whose timestamp fails to parse are skipped.
#[must_use]
pub fn history() -> Vec<HistoryEntry> {
    let rows = [
        ("1", 'A', TradeMode::Buy, Outcome::Yes, 150, dec!(0.65), dec!(97.50), "2024-01-30 14:30:25"),
        ("2", 'B', TradeMode::Buy, Outcome::No, 200, dec!(0.45), dec!(90.00), "2024-01-30 13:15:10"),
        ("3", 'C', TradeMode::Sell, Outcome::Yes, 50, dec!(0.80), dec!(40.00), "2024-01-30 12:05:45"),
        ("4", 'C', TradeMode::Buy, Outcome::Yes, 150, dec!(0.55), dec!(82.50), "2024-01-30 11:20:30"),
    ];

    rows.into_iter()
        .filter_map(|(id, agent, action, outcome, shares, price, value, at)| {
            let at = Timestamp::parse_history(at)?;
            Some(HistoryEntry::new(
                id,
                market(agent),
                action,
                outcome,
                shares,
                price,
                value,
                at,
            ))
        })
        .collect()
}

fn points(rows: &[(&str, Decimal, Decimal, u32)]) -> Vec<PerformancePoint> {
    let last = rows.len().saturating_sub(1);
    rows.iter()
        .enumerate()
        .map(|(i, (label, pnl, portfolio, rank))| {
            let point = PerformancePoint::new(*label, *pnl, *portfolio, *rank);
            if i == last { point.today() } else { point }
        })
        .collect()
}

/// Profiles for agents that have one.
#[must_use]
pub fn profiles() -> Vec<AgentProfile> {
    use Asset::{Bnb, Btc, Eth, Sol, Xrp};

    let quantum = AgentProfile::builder(AgentId::new("1"), "QuantumTrader AI")
        .description(
            "Advanced quantum-inspired trading algorithm with multi-dimensional market analysis",
        )
        .rates(dec!(72.3), dec!(37.5))
        .record(3, 8)
        .totals(1247, dec!(28507.50))
        .standing(1, 15_643, "March 2024")
        .performance(
            PerformancePeriod::Daily,
            points(&[
                ("Jan 1", dec!(1205), dec!(98795), 2),
                ("Jan 2", dec!(890), dec!(99685), 3),
                ("Jan 3", dec!(1567), dec!(101252), 1),
                ("Jan 4", dec!(-320), dec!(100932), 4),
                ("Jan 5", dec!(2150), dec!(103082), 1),
                ("Jan 6", dec!(445), dec!(103527), 3),
                ("Jan 7", dec!(1890), dec!(105417), 1),
            ]),
        )
        .performance(
            PerformancePeriod::Weekly,
            points(&[
                ("Week 1", dec!(5420), dec!(105420), 1),
                ("Week 2", dec!(3210), dec!(108630), 2),
                ("Week 3", dec!(7890), dec!(116520), 1),
                ("Week 4", dec!(2150), dec!(118670), 3),
            ]),
        )
        .performance(
            PerformancePeriod::Monthly,
            points(&[
                ("Oct", dec!(15420), dec!(115420), 1),
                ("Nov", dec!(12350), dec!(127770), 2),
                ("Dec", dec!(18900), dec!(146670), 1),
                ("Jan", dec!(8507), dec!(155177), 1),
            ]),
        )
        .strategy(StrategyNote::new(
            "Today",
            "Bullish momentum play on BTC breakout above $87K resistance",
            vec![(Btc, 40), (Eth, 30), (Sol, 20), (Xrp, 5), (Bnb, 5)],
            "5x avg",
            85,
        ))
        .strategy(StrategyNote::new(
            "Yesterday",
            "Risk-off positioning before Fed announcement, reduced leverage",
            vec![(Btc, 35), (Eth, 35), (Sol, 15), (Xrp, 10), (Bnb, 5)],
            "3x avg",
            72,
        ))
        .build();

    vec![quantum]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_active_agents() {
        let agents = agents();
        assert_eq!(agents.len(), 5);
        assert!(agents.iter().all(|a| a.status().is_active()));
        assert!(agents.iter().all(|a| a.positions().len() == 5));
    }

    #[test]
    fn holder_ids_run_across_books() {
        let books = holder_books();
        assert_eq!(books.len(), 5);
        let last = books
            .last()
            .and_then(|b| b.side(Outcome::No).last().map(|h| h.id().to_string()));
        assert_eq!(last.as_deref(), Some("50"));
    }

    #[test]
    fn all_history_rows_parse() {
        assert_eq!(history().len(), 4);
    }

    #[test]
    fn activity_is_newest_first() {
        let now = Timestamp::now();
        let items = activity(now);
        assert!(items.windows(2).all(|w| match w {
            [a, b] => !a.at().is_before(&b.at()),
            _ => true,
        }));
    }

    #[test]
    fn profile_series_end_today() {
        let profiles = profiles();
        let quantum = profiles.first();
        assert!(quantum.is_some_and(|p| {
            [
                PerformancePeriod::Daily,
                PerformancePeriod::Weekly,
                PerformancePeriod::Monthly,
            ]
            .into_iter()
            .all(|period| p.performance(period).last().is_some_and(PerformancePoint::is_today))
        }));
    }
}
