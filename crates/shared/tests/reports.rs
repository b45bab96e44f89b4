mod common;

use chrono::{Datelike, Duration, NaiveDate};
use common::{CARD, MemoryStore, SANTANDER, STORE_O, at, engine, today};
use shared::{
    abstract_trait::{
        bank::service::BankServiceTrait, card::service::CardServiceTrait,
        store::service::StoreServiceTrait,
    },
    domain::requests::{
        ExpiringCardsRequest, PaymentSummaryRequest, PurchaseLookupRequest, StoreRevenueRequest,
    },
    errors::ServiceError,
};

const GALICIA: &str = "30-50000173-5";

fn october_summary() -> PaymentSummaryRequest {
    PaymentSummaryRequest {
        card_number: CARD.to_string(),
        month: 10,
        year: 2024,
    }
}

#[tokio::test]
async fn payment_summary_totals_the_month() {
    let store = MemoryStore::new();
    store.add_bank(SANTANDER, "Santander");
    store.add_card(CARD, SANTANDER);

    let shop = ("Store O", STORE_O);
    store.add_single("V-1", shop, 100.0, 90.0, CARD, at(2024, 10, 1));
    store.add_single("V-2", shop, 150.0, 150.0, CARD, at(2024, 10, 12));
    store.add_single("V-3", shop, 60.0, 54.0, CARD, at(2024, 10, 31));
    store.add_monthly("V-4", shop, 200.0, 212.0, 4, CARD, at(2024, 10, 20));
    store.add_single("V-5", shop, 999.0, 999.0, CARD, at(2024, 9, 30));
    store.add_single("V-6", shop, 999.0, 999.0, CARD, at(2024, 11, 1));

    let engine = engine(&store);
    let response = engine.card.payment_summary(&october_summary()).await.unwrap();
    let summary = response.data;

    assert_eq!(response.status, "success");
    assert_eq!(summary.code, "SUMMARY-2024-10");
    // Gross amounts; the final amounts of the same purchases add up to 506.00.
    assert!((summary.total_price - 510.0).abs() < 1e-9);
    assert_eq!(summary.single_payments.len(), 3);
    assert_eq!(summary.monthly_payments.len(), 1);
    assert_eq!(summary.monthly_payments[0].quotas.len(), 4);
    assert_eq!(summary.surcharge_percentage, 5.0);
    assert_eq!(summary.first_expiration, today() + Duration::days(15));
    assert_eq!(summary.second_expiration, today() + Duration::days(25));
    assert_eq!(summary.card.number, CARD);
}

#[tokio::test]
async fn payment_summary_is_persisted_once_per_period() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);
    store.add_single("V-1", ("Store O", STORE_O), 80.0, 80.0, CARD, at(2024, 10, 3));

    let engine = engine(&store);
    engine.card.payment_summary(&october_summary()).await.unwrap();
    engine.card.payment_summary(&october_summary()).await.unwrap();

    let saved = store.summaries();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].code, "SUMMARY-2024-10");
    assert_eq!(saved[0].card_number, CARD);
    assert!((saved[0].total_price - 80.0).abs() < 1e-9);
}

#[tokio::test]
async fn payment_summary_without_purchases_is_zero() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);

    let summary = engine(&store)
        .card
        .payment_summary(&october_summary())
        .await
        .unwrap()
        .data;

    assert_eq!(summary.total_price, 0.0);
    assert!(summary.single_payments.is_empty());
    assert!(summary.monthly_payments.is_empty());
}

#[tokio::test]
async fn payment_summary_rejects_unknown_card_and_bad_month() {
    let store = MemoryStore::new();
    let engine = engine(&store);

    let err = engine.card.payment_summary(&october_summary()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref what) if what.contains("1234****5678")));

    store.add_card(CARD, SANTANDER);
    let mut req = october_summary();
    req.month = 13;
    let err = engine.card.payment_summary(&req).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
    assert!(store.summaries().is_empty());
}

#[tokio::test]
async fn expiring_cards_lists_each_card_once() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);
    store.add_card("4000111122223333", GALICIA);
    store.add_card("5000111122223333", GALICIA);

    store.add_summary(CARD, "SUMMARY-2024-9", at(2024, 10, 20));
    store.add_summary(CARD, "SUMMARY-2024-10", at(2024, 11, 5));
    store.add_summary("4000111122223333", "SUMMARY-2024-9", at(2024, 10, 16));
    store.add_summary("5000111122223333", "SUMMARY-2024-9", at(2024, 12, 1));

    let req = ExpiringCardsRequest {
        day: 15,
        month: 10,
        year: 2024,
    };
    let cards = engine(&store).card.expiring_cards(&req).await.unwrap().data;

    let numbers: Vec<&str> = cards.iter().map(|c| c.card.number.as_str()).collect();
    assert_eq!(numbers, vec!["4000111122223333", CARD]);
    assert_eq!(cards[1].first_expiration, at(2024, 10, 20));
}

#[tokio::test]
async fn expiring_cards_rejects_impossible_date() {
    let store = MemoryStore::new();
    let req = ExpiringCardsRequest {
        day: 31,
        month: 2,
        year: 2024,
    };

    let err = engine(&store).card.expiring_cards(&req).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
}

#[tokio::test]
async fn purchase_lookups_match_store_amount_and_voucher() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);
    store.add_single("V-1", ("Store O", STORE_O), 120.5, 120.5, CARD, at(2024, 10, 3));
    store.add_monthly("V-2", ("Store O", STORE_O), 300.0, 300.0, 3, CARD, at(2024, 10, 4));
    let engine = engine(&store);

    let lookup = |voucher: &str, final_amount: f64| PurchaseLookupRequest {
        cuit: STORE_O.to_string(),
        final_amount,
        payment_voucher: voucher.to_string(),
    };

    let single = engine
        .card
        .find_single_purchase(&lookup("V-1", 120.5))
        .await
        .unwrap()
        .data;
    assert_eq!(single.payment_voucher, "V-1");

    let monthly = engine
        .card
        .find_monthly_purchase(&lookup("V-2", 300.0))
        .await
        .unwrap()
        .data;
    assert_eq!(monthly.number_of_quotas, 3);
    assert_eq!(monthly.quotas.len(), 3);

    let err = engine
        .card
        .find_single_purchase(&lookup("V-1", 99.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = engine
        .card
        .find_monthly_purchase(&lookup("V-1", 120.5))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn top_cards_are_capped_and_ordered() {
    let store = MemoryStore::new();
    for n in 0..12 {
        let number = format!("40000000000000{n:02}");
        store.add_card(&number, SANTANDER);
        for p in 0..n {
            store.add_single(&format!("V-{n}-{p}"), ("Store O", STORE_O), 10.0, 10.0, &number, at(2024, 10, 1));
        }
    }
    store.add_monthly("M-1", ("Store O", STORE_O), 90.0, 90.0, 3, "4000000000000000", at(2024, 10, 2));

    let ranked = engine(&store).card.top_cards().await.unwrap().data;

    assert_eq!(ranked.len(), 10);
    assert_eq!(ranked[0].card.number, "4000000000000011");
    assert_eq!(ranked[0].total_purchases, 11);
    assert!(ranked.windows(2).all(|w| w[0].total_purchases >= w[1].total_purchases));
}

#[tokio::test]
async fn top_cards_with_fewer_cards_returns_them_all() {
    let store = MemoryStore::new();
    store.add_card("4000000000000001", SANTANDER);
    store.add_card("4000000000000002", SANTANDER);
    store.add_card("4000000000000003", SANTANDER);
    store.add_single("V-1", ("Store O", STORE_O), 10.0, 10.0, "4000000000000003", at(2024, 10, 1));

    let ranked = engine(&store).card.top_cards().await.unwrap().data;

    let numbers: Vec<&str> = ranked.iter().map(|c| c.card.number.as_str()).collect();
    assert_eq!(
        numbers,
        vec!["4000000000000003", "4000000000000001", "4000000000000002"]
    );
}

#[tokio::test]
async fn highest_revenue_combines_both_purchase_shapes() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);

    store.add_single("V-1", ("Store O", STORE_O), 320.0, 300.0, CARD, at(2024, 10, 2));
    store.add_monthly("V-2", ("Store O", STORE_O), 470.0, 500.0, 5, CARD, at(2024, 10, 9));
    store.add_single("V-3", ("Store A", "30-22222222-2"), 850.0, 700.0, CARD, at(2024, 10, 5));
    store.add_monthly("V-4", ("Store B", "30-33333333-3"), 750.0, 750.0, 3, CARD, at(2024, 10, 7));
    store.add_single("V-5", ("Store B", "30-33333333-3"), 5000.0, 5000.0, CARD, at(2024, 11, 1));

    let req = StoreRevenueRequest {
        month: 10,
        year: 2024,
    };
    let top = engine(&store)
        .store
        .highest_revenue(&req)
        .await
        .unwrap()
        .data
        .unwrap();

    // Ranked on final amounts: by gross amount Store A (850.00) would win.
    assert_eq!(top.cuit, STORE_O);
    assert_eq!(top.name, "Store O");
    assert!((top.total_amount - 800.0).abs() < 1e-9);
}

#[tokio::test]
async fn highest_revenue_of_an_empty_month_is_null() {
    let store = MemoryStore::new();
    let req = StoreRevenueRequest {
        month: 2,
        year: 2024,
    };

    let response = engine(&store).store.highest_revenue(&req).await.unwrap();

    assert!(response.data.is_none());
    assert_eq!(response.status, "success");
}

#[tokio::test]
async fn customer_counts_include_banks_without_customers() {
    let store = MemoryStore::new();
    store.add_bank(SANTANDER, "Santander");
    store.add_bank(GALICIA, "Galicia");
    store.add_bank("30-99999999-9", "Nacion");
    store.add_customer("20-11111111-1", &[SANTANDER, GALICIA]);
    store.add_customer("20-22222222-2", &[SANTANDER]);

    let counts = engine(&store).bank.customer_counts().await.unwrap().data;

    let pairs: Vec<(&str, i64)> = counts
        .iter()
        .map(|c| (c.bank_cuit.as_str(), c.customer_count))
        .collect();
    assert_eq!(
        pairs,
        vec![(SANTANDER, 2), (GALICIA, 1), ("30-99999999-9", 0)]
    );
}

#[tokio::test]
async fn expiring_cards_past_the_calendar_is_invalid() {
    let store = MemoryStore::new();
    let last = NaiveDate::MAX;
    let req = ExpiringCardsRequest {
        day: last.day(),
        month: last.month(),
        year: last.year(),
    };

    let err = engine(&store).card.expiring_cards(&req).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
}

#[tokio::test]
async fn purchase_lookup_rejects_non_positive_amount() {
    let store = MemoryStore::new();
    store.add_card(CARD, SANTANDER);
    store.add_single("V-0", ("Store O", STORE_O), 0.0, 0.0, CARD, at(2024, 10, 3));

    let req = PurchaseLookupRequest {
        cuit: STORE_O.to_string(),
        final_amount: 0.0,
        payment_voucher: "V-0".to_string(),
    };
    let err = engine(&store)
        .card
        .find_single_purchase(&req)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(ref errors) if errors.iter().any(|e| e.contains("final_amount"))));
}
