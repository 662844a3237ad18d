//! # Portfolio Service
//!
//! Summary figures over the current user's positions and trade history.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{HistoryEntry, UserPosition};
use crate::domain::value_objects::Usd;
use crate::domain::value_objects::arithmetic::checked_sum;
use crate::domain::DomainError;
use crate::infrastructure::persistence::PortfolioRepository;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Headline portfolio figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    /// Sum of position values.
    pub total_value: Usd,
    /// Sum of position P&L.
    pub total_pnl: Usd,
    /// Sum of history trade values.
    pub volume_traded: Usd,
    /// Distinct markets in the history.
    pub markets_traded: usize,
}

/// Read-side service for the user's book.
#[derive(Clone)]
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepository>,
}

impl std::fmt::Debug for PortfolioService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioService").finish_non_exhaustive()
    }
}

impl PortfolioService {
    /// Creates the service.
    #[must_use]
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Positions, in stored order.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the book cannot be read.
    pub fn positions(&self) -> ApplicationResult<Vec<UserPosition>> {
        Ok(self.repository.positions()?)
    }

    /// History, newest first.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the book cannot be read.
    pub fn history(&self) -> ApplicationResult<Vec<HistoryEntry>> {
        Ok(self.repository.history()?)
    }

    /// Computes the summary.
    ///
    /// # Errors
    ///
    /// Returns a repository error, or an arithmetic error if a sum overflows.
    pub fn summary(&self) -> ApplicationResult<PortfolioSummary> {
        let positions = self.repository.positions()?;
        let history = self.repository.history()?;
        Ok(summarize(&positions, &history)?)
    }
}

/// Summary over explicit positions and history.
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if a sum overflows.
pub fn summarize(
    positions: &[UserPosition],
    history: &[HistoryEntry],
) -> Result<PortfolioSummary, DomainError> {
    let total_value = checked_sum(positions.iter().map(|p| p.value().get()))?;
    let total_pnl = checked_sum(positions.iter().map(|p| p.pnl().get()))?;
    let volume_traded = checked_sum(history.iter().map(|h| h.value().get()))?;
    let markets_traded = history
        .iter()
        .map(HistoryEntry::market)
        .collect::<HashSet<_>>()
        .len();

    Ok(PortfolioSummary {
        total_value: Usd::new(total_value),
        total_pnl: Usd::new(total_pnl),
        volume_traded: Usd::new(volume_traded),
        markets_traded,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::in_memory::InMemoryPortfolioRepository;
    use rust_decimal_macros::dec;

    #[test]
    fn fixture_summary() {
        let service = PortfolioService::new(Arc::new(InMemoryPortfolioRepository::with_fixtures()));
        let summary = service.summary().unwrap();
        assert_eq!(summary.total_value.get(), dec!(269.00));
        assert_eq!(summary.total_pnl.get(), dec!(26.50));
        assert_eq!(summary.volume_traded.get(), dec!(310.00));
        assert_eq!(summary.markets_traded, 3);
        assert_eq!(summary.total_pnl.signed(), "+$26.50");
    }

    #[test]
    fn empty_book_is_zero() {
        let summary = summarize(&[], &[]).unwrap();
        assert_eq!(summary.total_value, Usd::zero());
        assert_eq!(summary.markets_traded, 0);
    }

    #[test]
    fn profitable_positions() {
        let service = PortfolioService::new(Arc::new(InMemoryPortfolioRepository::with_fixtures()));
        let winners = service
            .positions()
            .unwrap()
            .iter()
            .filter(|p| p.is_profitable())
            .count();
        assert_eq!(winners, 2);
    }
}
