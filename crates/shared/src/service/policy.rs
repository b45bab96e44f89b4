//! Backend-independent report rules. Adapters only fetch candidates; every
//! ranking, tie-break and due-date decision is made here.

use crate::model::{
    card::{CardDue, CardPurchaseCount},
    purchase::VoucherUsage,
    store::{StoreRevenue, StoreSummary},
};
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportPolicy {
    /// Applied to the total once the first due date has passed.
    pub surcharge_percentage: f64,
    pub first_due_after_days: i64,
    pub second_due_after_days: i64,
    pub top_cards_limit: usize,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            surcharge_percentage: 5.0,
            first_due_after_days: 15,
            second_due_after_days: 10,
            top_cards_limit: 10,
        }
    }
}

impl ReportPolicy {
    pub fn with_surcharge(surcharge_percentage: f64) -> Self {
        Self {
            surcharge_percentage,
            ..Self::default()
        }
    }

    pub fn due_dates(&self, today: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let first = today + Duration::days(self.first_due_after_days);
        let second = first + Duration::days(self.second_due_after_days);
        (first, second)
    }
}

pub fn summary_code(month: u32, year: i32) -> String {
    format!("SUMMARY-{year}-{month}")
}

/// Stable descending sort on total purchases, truncated to `limit`.
pub fn rank_top_cards(mut counts: Vec<CardPurchaseCount>, limit: usize) -> Vec<CardPurchaseCount> {
    counts.sort_by(|a, b| b.total().cmp(&a.total()));
    counts.truncate(limit);
    counts
}

/// Highest combined usage wins. On a tie the voucher with more single-payment
/// uses wins, then the lexically smaller voucher.
pub fn pick_most_used_voucher(usages: &[VoucherUsage]) -> Option<&VoucherUsage> {
    usages
        .iter()
        .filter(|u| u.total() > 0)
        .min_by(|a, b| {
            b.total()
                .cmp(&a.total())
                .then_with(|| b.single_count.cmp(&a.single_count))
                .then_with(|| a.payment_voucher.cmp(&b.payment_voucher))
        })
}

/// Highest combined revenue wins; ties go to the smaller store cuit.
pub fn pick_top_store(revenues: Vec<StoreRevenue>) -> Option<StoreSummary> {
    revenues
        .into_iter()
        .min_by(|a, b| match b.total().total_cmp(&a.total()) {
            Ordering::Equal => a.cuit_store.cmp(&b.cuit_store),
            other => other,
        })
        .map(StoreSummary::from)
}

/// One entry per card, keeping its earliest due date, ordered by due date then number.
pub fn dedup_due_cards(dues: Vec<CardDue>) -> Vec<CardDue> {
    let mut earliest: HashMap<String, CardDue> = HashMap::new();
    for due in dues {
        match earliest.get(&due.card.number) {
            Some(kept) if kept.first_expiration <= due.first_expiration => {}
            _ => {
                earliest.insert(due.card.number.clone(), due);
            }
        }
    }

    let mut cards: Vec<CardDue> = earliest.into_values().collect();
    cards.sort_by(|a, b| {
        a.first_expiration
            .cmp(&b.first_expiration)
            .then_with(|| a.card.number.cmp(&b.card.number))
    });
    cards
}
