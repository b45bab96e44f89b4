//! Assertions over [`october_2024`](super::dataset::october_2024), run
//! unchanged against every backend.

use super::{
    CARD, Engine, SANTANDER, STORE_O, at, date,
    dataset::{GALICIA, IDLE_CARD, NACION, SECOND_CARD},
    today,
};
use chrono::Duration;
use shared::{
    abstract_trait::{
        bank::service::BankServiceTrait, card::service::CardServiceTrait,
        promotion::service::PromotionServiceTrait, store::service::StoreServiceTrait,
    },
    domain::requests::{
        AddFinancingPromotionRequest, AvailablePromotionsRequest, ExpiringCardsRequest,
        ExtendValidityRequest, PaymentSummaryRequest, PurchaseLookupRequest, StoreRevenueRequest,
    },
    domain::responses::PromotionResponse,
    errors::ServiceError,
    model::promotion::PromotionType,
};

fn store_o_between(start: (i32, u32, u32), end: (i32, u32, u32)) -> AvailablePromotionsRequest {
    AvailablePromotionsRequest {
        cuit: STORE_O.to_string(),
        start_date: date(start.0, start.1, start.2),
        end_date: date(end.0, end.1, end.2),
    }
}

fn codes(promotions: &[PromotionResponse]) -> Vec<&str> {
    promotions.iter().map(|p| p.code.as_str()).collect()
}

pub async fn santander_financing_becomes_available(engine: &Engine) {
    let req = AddFinancingPromotionRequest {
        bank_cuit: SANTANDER.to_string(),
        code: "PROMO123".to_string(),
        promotion_title: "12 cuotas Santander".to_string(),
        name_store: "Store O".to_string(),
        cuit_store: STORE_O.to_string(),
        validity_start_date: today() - Duration::days(30),
        validity_end_date: today() + Duration::days(30),
        comments: "Valid on every product".to_string(),
        number_of_quotas: 12,
        interest: 5.5,
    };

    let added = engine.bank.add_financing_promotion(&req).await.unwrap().data;
    assert_eq!(added.code, "PROMO123");
    assert_eq!(added.bank, SANTANDER);

    let err = engine.bank.add_financing_promotion(&req).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let available = engine
        .promotion
        .available_for_store(&store_o_between((2024, 8, 15), (2024, 12, 15)))
        .await
        .unwrap()
        .data;

    assert_eq!(codes(&available.financings), vec!["PROMO123"]);
    assert_eq!(available.financings[0].interest, Some(5.5));
    assert_eq!(available.financings[0].number_of_quotas, Some(12));
    assert_eq!(
        available.financings[0].validity_end_date,
        today() + Duration::days(30)
    );
    assert_eq!(codes(&available.discounts), vec!["DISC-OCT"]);
}

pub async fn october_summary_totals_gross_amounts(engine: &Engine) {
    let req = PaymentSummaryRequest {
        card_number: CARD.to_string(),
        month: 10,
        year: 2024,
    };

    let summary = engine.card.payment_summary(&req).await.unwrap().data;

    assert_eq!(summary.code, "SUMMARY-2024-10");
    assert!((summary.total_price - 510.0).abs() < 1e-9);
    assert_eq!(summary.card.bank, SANTANDER);

    let mut vouchers: Vec<&str> = summary
        .single_payments
        .iter()
        .map(|p| p.payment_voucher.as_str())
        .collect();
    vouchers.sort_unstable();
    assert_eq!(vouchers, vec!["DISC-OCT", "V-1", "V-3"]);

    assert_eq!(summary.monthly_payments.len(), 1);
    let quotas: Vec<i32> = summary.monthly_payments[0]
        .quotas
        .iter()
        .map(|q| q.number)
        .collect();
    assert_eq!(quotas, vec![1, 2, 3, 4]);

    // Regenerating overwrites the stored summary.
    let again = engine.card.payment_summary(&req).await.unwrap().data;
    assert_eq!(again.code, summary.code);
    assert_eq!(again.first_expiration, summary.first_expiration);

    let due = engine
        .card
        .expiring_cards(&ExpiringCardsRequest {
            day: 15,
            month: 10,
            year: 2024,
        })
        .await
        .unwrap()
        .data;
    let numbers: Vec<&str> = due.iter().map(|c| c.card.number.as_str()).collect();
    assert_eq!(numbers, vec![CARD]);
    assert_eq!(due[0].first_expiration, summary.first_expiration);
}

pub async fn store_o_leads_october_revenue(engine: &Engine) {
    let top = engine
        .store
        .highest_revenue(&StoreRevenueRequest { month: 10, year: 2024 })
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(top.cuit, STORE_O);
    assert_eq!(top.name, "Store O");
    assert!((top.total_amount - 800.0).abs() < 1e-9);

    let quiet = engine
        .store
        .highest_revenue(&StoreRevenueRequest { month: 2, year: 2024 })
        .await
        .unwrap();
    assert!(quiet.data.is_none());
}

pub async fn extended_discount_is_visible_on_refetch(engine: &Engine) {
    let new_end = at(2024, 12, 31);
    let extended = engine
        .promotion
        .extend_validity(
            PromotionType::Discount,
            "DISC-OCT",
            &ExtendValidityRequest { new_date: new_end },
        )
        .await
        .unwrap()
        .data;
    assert_eq!(extended.validity_end_date, new_end);

    let december = engine
        .promotion
        .available_for_store(&store_o_between((2024, 12, 1), (2024, 12, 10)))
        .await
        .unwrap()
        .data;
    assert_eq!(codes(&december.discounts), vec!["DISC-OCT"]);
    assert_eq!(december.discounts[0].validity_end_date, new_end);

    let err = engine
        .promotion
        .extend_validity(
            PromotionType::Financing,
            "DISC-OCT",
            &ExtendValidityRequest { new_date: new_end },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

pub async fn deleted_discount_leaves_availability(engine: &Engine) {
    let first = engine
        .promotion
        .delete(PromotionType::Discount, "DISC-OCT")
        .await
        .unwrap();
    assert!(first.data);

    let october = engine
        .promotion
        .available_for_store(&store_o_between((2024, 10, 1), (2024, 10, 31)))
        .await
        .unwrap()
        .data;
    assert!(october.discounts.is_empty());
    assert!(october.financings.is_empty());

    let second = engine
        .promotion
        .delete(PromotionType::Discount, "DISC-OCT")
        .await
        .unwrap();
    assert!(!second.data);

    let err = engine
        .promotion
        .delete(PromotionType::Discount, "UNKNOWN")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

pub async fn most_used_promotion_counts_its_vouchers(engine: &Engine) {
    let used = engine.promotion.most_used().await.unwrap().data;

    assert_eq!(used.promotion.code, "DISC-OCT");
    assert_eq!(used.promotion.promotion_type, "discount");
    assert_eq!(used.single_count, 2);
    assert_eq!(used.monthly_count, 0);
}

pub async fn lookups_rankings_and_customer_counts(engine: &Engine) {
    let lookup = |voucher: &str, final_amount: f64| PurchaseLookupRequest {
        cuit: STORE_O.to_string(),
        final_amount,
        payment_voucher: voucher.to_string(),
    };

    let single = engine
        .card
        .find_single_purchase(&lookup("V-1", 90.0))
        .await
        .unwrap()
        .data;
    assert_eq!(single.amount, 100.0);

    let monthly = engine
        .card
        .find_monthly_purchase(&lookup("V-4", 212.0))
        .await
        .unwrap()
        .data;
    assert_eq!(monthly.number_of_quotas, 4);
    assert_eq!(monthly.quotas.len(), 4);

    // Lookups match the final amount, never the gross one.
    let err = engine
        .card
        .find_single_purchase(&lookup("V-1", 100.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let ranked = engine.card.top_cards().await.unwrap().data;
    let numbers: Vec<&str> = ranked.iter().map(|c| c.card.number.as_str()).collect();
    let totals: Vec<i64> = ranked.iter().map(|c| c.total_purchases).collect();
    assert_eq!(numbers, vec![CARD, SECOND_CARD, IDLE_CARD]);
    assert_eq!(totals, vec![6, 2, 0]);

    let counts = engine.bank.customer_counts().await.unwrap().data;
    let counts: Vec<(&str, i64)> = counts
        .iter()
        .map(|c| (c.bank_cuit.as_str(), c.customer_count))
        .collect();
    assert_eq!(counts, vec![(SANTANDER, 2), (GALICIA, 1), (NACION, 0)]);
}
