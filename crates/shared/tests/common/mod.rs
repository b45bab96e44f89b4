#![allow(dead_code)]

pub mod dataset;
pub mod scenarios;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, TimeZone, Utc};
use shared::{
    abstract_trait::{
        bank::repository::{BankRepositoryTrait, DynBankRepository},
        card::repository::{CardRepositoryTrait, DynCardRepository},
        promotion::repository::{DynPromotionRepository, PromotionRepositoryTrait},
        store::repository::{DynStoreRepository, StoreRepositoryTrait},
    },
    errors::RepositoryError,
    model::{
        bank::{BankCustomerCount, BankModel},
        card::{CardDue, CardModel, CardPurchaseCount},
        customer::CustomerModel,
        payment_summary::PaymentSummaryModel,
        promotion::{
            DiscountTerms, FinancingTerms, NewFinancingPromotion, PromotionBase, PromotionKind,
            PromotionModel, PromotionType,
        },
        purchase::{
            CardPurchases, MonthlyPaymentModel, PurchaseBase, QuotaModel, SinglePaymentModel,
            VoucherUsage,
        },
        store::StoreRevenue,
    },
    repository::Repositories,
    service::{BankService, CardService, EngineContext, PromotionService, ReportPolicy, StoreService},
    utils::FixedClock,
};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio_util::sync::CancellationToken;

use self::dataset::Dataset;

pub const SANTANDER: &str = "30-12345678-9";
pub const STORE_O: &str = "30-15066778-9";
pub const CARD: &str = "1234567812345678";
pub const HOLDER: &str = "20-11111111-1";

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Instant every engine built by [`engine`] believes to be "now".
pub fn today() -> DateTime<Utc> {
    at(2024, 10, 15)
}

#[derive(Default)]
struct State {
    banks: Vec<BankModel>,
    customers: Vec<(CustomerModel, Vec<String>)>,
    cards: Vec<CardModel>,
    singles: Vec<SinglePaymentModel>,
    monthlies: Vec<MonthlyPaymentModel>,
    promotions: Vec<PromotionModel>,
    summaries: Vec<PaymentSummaryModel>,
}

/// Implements every repository contract over plain vectors.
/// `delay` makes each call sleep first, to exercise timeouts and cancellation.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    delay: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::default(),
            delay: Some(delay),
        })
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn add_bank(&self, cuit: &str, name: &str) {
        self.state.lock().unwrap().banks.push(bank(cuit, name));
    }

    pub fn add_customer(&self, cuit: &str, banks: &[&str]) {
        let bank_cuits = banks.iter().map(|b| b.to_string()).collect();
        self.state
            .lock()
            .unwrap()
            .customers
            .push((customer(cuit), bank_cuits));
    }

    pub fn add_card(&self, number: &str, bank_cuit: &str) {
        self.state.lock().unwrap().cards.push(card(number, bank_cuit));
    }

    pub fn add_single(
        &self,
        voucher: &str,
        shop: (&str, &str),
        amount: f64,
        final_amount: f64,
        card_number: &str,
        created_at: DateTime<Utc>,
    ) {
        let purchase = single(voucher, shop, amount, final_amount, card_number, created_at);
        self.state.lock().unwrap().singles.push(purchase);
    }

    pub fn add_monthly(
        &self,
        voucher: &str,
        shop: (&str, &str),
        amount: f64,
        final_amount: f64,
        number_of_quotas: i32,
        card_number: &str,
        created_at: DateTime<Utc>,
    ) {
        let purchase = monthly(
            voucher,
            shop,
            amount,
            final_amount,
            number_of_quotas,
            card_number,
            created_at,
        );
        self.state.lock().unwrap().monthlies.push(purchase);
    }

    /// Replaces the current contents with `dataset`; summaries are cleared.
    pub fn load(&self, dataset: &Dataset) {
        let mut state = self.state.lock().unwrap();
        *state = State {
            banks: dataset.banks.clone(),
            customers: dataset.customers.clone(),
            cards: dataset.cards.clone(),
            singles: dataset.singles.clone(),
            monthlies: dataset.monthlies.clone(),
            promotions: dataset.promotions.clone(),
            summaries: Vec::new(),
        };
    }

    pub fn add_promotion(&self, promotion: PromotionModel) {
        self.state.lock().unwrap().promotions.push(promotion);
    }

    pub fn add_summary(&self, card_number: &str, code: &str, first_expiration: DateTime<Utc>) {
        self.state.lock().unwrap().summaries.push(PaymentSummaryModel {
            code: code.to_string(),
            card_number: card_number.to_string(),
            month: 9,
            year: 2024,
            first_expiration,
            second_expiration: first_expiration + ChronoDuration::days(10),
            surcharge_percentage: 5.0,
            total_price: 0.0,
            purchases: CardPurchases::default(),
        });
    }

    pub fn summaries(&self) -> Vec<PaymentSummaryModel> {
        self.state.lock().unwrap().summaries.clone()
    }

    pub fn promotion(&self, kind: PromotionType, code: &str) -> Option<PromotionModel> {
        self.state
            .lock()
            .unwrap()
            .promotions
            .iter()
            .find(|p| p.promotion_type() == kind && p.code() == code)
            .cloned()
    }
}

pub fn bank(cuit: &str, name: &str) -> BankModel {
    BankModel {
        cuit: cuit.to_string(),
        name: name.to_string(),
        address: "Av. Corrientes 1234".to_string(),
        telephone: "011-4000-0000".to_string(),
    }
}

pub fn customer(cuit: &str) -> CustomerModel {
    CustomerModel {
        cuit: cuit.to_string(),
        dni: cuit.replace('-', ""),
        complete_name: format!("Customer {cuit}"),
        address: String::new(),
        telephone: String::new(),
        entry_date: date(2020, 1, 1),
    }
}

/// Every card belongs to [`HOLDER`].
pub fn card(number: &str, bank_cuit: &str) -> CardModel {
    CardModel {
        number: number.to_string(),
        ccv: "123".to_string(),
        cardholder_name_in_card: "JUAN PEREZ".to_string(),
        since: at(2022, 1, 1),
        expiration_date: at(2027, 1, 1),
        bank_cuit: bank_cuit.to_string(),
        customer_cuit: HOLDER.to_string(),
    }
}

pub fn single(
    voucher: &str,
    (store, cuit_store): (&str, &str),
    amount: f64,
    final_amount: f64,
    card_number: &str,
    created_at: DateTime<Utc>,
) -> SinglePaymentModel {
    SinglePaymentModel {
        base: PurchaseBase {
            payment_voucher: voucher.to_string(),
            store: store.to_string(),
            cuit_store: cuit_store.to_string(),
            amount,
            final_amount,
            card_number: card_number.to_string(),
            created_at,
        },
        store_discount: amount - final_amount,
    }
}

/// Quotas split `final_amount` evenly and fall due from January 2025.
pub fn monthly(
    voucher: &str,
    (store, cuit_store): (&str, &str),
    amount: f64,
    final_amount: f64,
    number_of_quotas: i32,
    card_number: &str,
    created_at: DateTime<Utc>,
) -> MonthlyPaymentModel {
    let price = final_amount / f64::from(number_of_quotas);
    let quotas = (1..=number_of_quotas)
        .map(|number| QuotaModel {
            number,
            price,
            month: number,
            year: 2025,
        })
        .collect();

    MonthlyPaymentModel {
        base: PurchaseBase {
            payment_voucher: voucher.to_string(),
            store: store.to_string(),
            cuit_store: cuit_store.to_string(),
            amount,
            final_amount,
            card_number: card_number.to_string(),
            created_at,
        },
        interest: 0.0,
        number_of_quotas,
        quotas,
    }
}

pub fn promotion_base(
    code: &str,
    cuit_store: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> PromotionBase {
    PromotionBase {
        code: code.to_string(),
        promotion_title: format!("Promotion {code}"),
        name_store: "Store O".to_string(),
        cuit_store: cuit_store.to_string(),
        validity_start_date: start,
        validity_end_date: end,
        comments: String::new(),
        bank_cuit: SANTANDER.to_string(),
        is_deleted: false,
    }
}

pub fn discount(code: &str, cuit_store: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> PromotionModel {
    PromotionModel {
        base: promotion_base(code, cuit_store, start, end),
        kind: PromotionKind::Discount(DiscountTerms {
            discount_percentage: 10.0,
            price_cap: Some(5000.0),
            only_cash: false,
        }),
    }
}

pub fn financing(code: &str, cuit_store: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> PromotionModel {
    PromotionModel {
        base: promotion_base(code, cuit_store, start, end),
        kind: PromotionKind::Financing(FinancingTerms {
            number_of_quotas: 6,
            interest: 0.0,
        }),
    }
}

pub fn repositories(store: &Arc<MemoryStore>) -> Repositories {
    Repositories {
        bank: store.clone() as DynBankRepository,
        card: store.clone() as DynCardRepository,
        promotion: store.clone() as DynPromotionRepository,
        store: store.clone() as DynStoreRepository,
    }
}

pub struct Engine {
    pub bank: BankService,
    pub card: CardService,
    pub promotion: PromotionService,
    pub store: StoreService,
    pub ctx: EngineContext,
}

pub fn engine_with(store: &Arc<MemoryStore>, cancel: CancellationToken, timeout: Duration) -> Engine {
    engine_over(repositories(store), cancel, timeout)
}

/// Wires the four services over any backend, frozen at [`today`].
pub fn engine_over(repos: Repositories, cancel: CancellationToken, timeout: Duration) -> Engine {
    let ctx = EngineContext::new(ReportPolicy::default(), cancel, timeout)
        .with_clock(Arc::new(FixedClock(today())));

    Engine {
        bank: BankService::new(repos.bank.clone(), ctx.clone()),
        card: CardService::new(repos.card, ctx.clone()),
        promotion: PromotionService::new(repos.promotion, repos.bank, ctx.clone()),
        store: StoreService::new(repos.store, ctx.clone()),
        ctx,
    }
}

pub fn engine(store: &Arc<MemoryStore>) -> Engine {
    engine_with(store, CancellationToken::new(), Duration::from_secs(5))
}

#[async_trait]
impl BankRepositoryTrait for MemoryStore {
    async fn find_by_cuit(&self, cuit: &str) -> Result<BankModel, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        state
            .banks
            .iter()
            .find(|b| b.cuit == cuit)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn add_financing_promotion(
        &self,
        bank_cuit: &str,
        promotion: NewFinancingPromotion,
    ) -> Result<PromotionModel, RepositoryError> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();

        if !state.banks.iter().any(|b| b.cuit == bank_cuit) {
            return Err(RepositoryError::NotFound);
        }
        if state.promotions.iter().any(|p| p.code() == promotion.code) {
            return Err(RepositoryError::Conflict(format!(
                "promotion code {} already exists",
                promotion.code
            )));
        }

        let model = promotion.into_model(bank_cuit);
        state.promotions.push(model.clone());
        Ok(model)
    }

    async fn update_validity_end(
        &self,
        kind: PromotionType,
        code: &str,
        new_end: DateTime<Utc>,
    ) -> Result<PromotionModel, RepositoryError> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        let promotion = state
            .promotions
            .iter_mut()
            .find(|p| p.promotion_type() == kind && p.code() == code)
            .ok_or(RepositoryError::NotFound)?;

        promotion.base.validity_end_date = new_end;
        Ok(promotion.clone())
    }

    async fn soft_delete(&self, kind: PromotionType, code: &str) -> Result<bool, RepositoryError> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        let promotion = state
            .promotions
            .iter_mut()
            .find(|p| p.promotion_type() == kind && p.code() == code)
            .ok_or(RepositoryError::NotFound)?;

        let flipped = !promotion.base.is_deleted;
        promotion.base.is_deleted = true;
        Ok(flipped)
    }

    async fn customer_counts(&self) -> Result<Vec<BankCustomerCount>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        let mut counts: Vec<BankCustomerCount> = state
            .banks
            .iter()
            .map(|bank| BankCustomerCount {
                bank_cuit: bank.cuit.clone(),
                bank_name: bank.name.clone(),
                customer_count: state
                    .customers
                    .iter()
                    .filter(|(_, banks)| banks.contains(&bank.cuit))
                    .count() as i64,
            })
            .collect();
        counts.sort_by(|a, b| a.bank_cuit.cmp(&b.bank_cuit));
        Ok(counts)
    }
}

#[async_trait]
impl CardRepositoryTrait for MemoryStore {
    async fn find_by_number(&self, number: &str) -> Result<CardModel, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        state
            .cards
            .iter()
            .find(|c| c.number == number)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_purchases_between(
        &self,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<CardPurchases, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        let within = |base: &PurchaseBase| {
            base.card_number == number && base.created_at >= start && base.created_at < end
        };

        let mut single_payments: Vec<SinglePaymentModel> = state
            .singles
            .iter()
            .filter(|p| within(&p.base))
            .cloned()
            .collect();
        single_payments.sort_by_key(|p| p.base.created_at);

        let mut monthly_payments: Vec<MonthlyPaymentModel> = state
            .monthlies
            .iter()
            .filter(|p| within(&p.base))
            .cloned()
            .collect();
        monthly_payments.sort_by_key(|p| p.base.created_at);

        Ok(CardPurchases {
            single_payments,
            monthly_payments,
        })
    }

    async fn save_payment_summary(
        &self,
        summary: &PaymentSummaryModel,
    ) -> Result<(), RepositoryError> {
        self.pause().await;
        let mut state = self.state.lock().unwrap();
        state
            .summaries
            .retain(|s| !(s.card_number == summary.card_number && s.code == summary.code));
        state.summaries.push(summary.clone());
        Ok(())
    }

    async fn find_cards_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CardDue>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        Ok(state
            .summaries
            .iter()
            .filter(|s| s.first_expiration >= start && s.first_expiration <= end)
            .filter_map(|s| {
                state
                    .cards
                    .iter()
                    .find(|c| c.number == s.card_number)
                    .map(|card| CardDue {
                        card: card.clone(),
                        first_expiration: s.first_expiration,
                    })
            })
            .collect())
    }

    async fn find_single_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<SinglePaymentModel, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        state
            .singles
            .iter()
            .find(|p| {
                p.base.cuit_store == cuit
                    && p.base.final_amount == final_amount
                    && p.base.payment_voucher == voucher
            })
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_monthly_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<MonthlyPaymentModel, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        state
            .monthlies
            .iter()
            .find(|p| {
                p.base.cuit_store == cuit
                    && p.base.final_amount == final_amount
                    && p.base.payment_voucher == voucher
            })
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn purchase_counts(&self) -> Result<Vec<CardPurchaseCount>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        let mut counts: Vec<CardPurchaseCount> = state
            .cards
            .iter()
            .map(|card| CardPurchaseCount {
                card: card.clone(),
                single_count: state
                    .singles
                    .iter()
                    .filter(|p| p.base.card_number == card.number)
                    .count() as i64,
                monthly_count: state
                    .monthlies
                    .iter()
                    .filter(|p| p.base.card_number == card.number)
                    .count() as i64,
            })
            .collect();
        counts.sort_by(|a, b| a.card.number.cmp(&b.card.number));
        Ok(counts)
    }
}

#[async_trait]
impl PromotionRepositoryTrait for MemoryStore {
    async fn find_by_code(&self, code: &str) -> Result<PromotionModel, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        [PromotionType::Financing, PromotionType::Discount]
            .into_iter()
            .find_map(|kind| {
                state
                    .promotions
                    .iter()
                    .find(|p| p.promotion_type() == kind && p.code() == code)
                    .cloned()
            })
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_kind_and_code(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<PromotionModel, RepositoryError> {
        self.pause().await;
        self.promotion(kind, code).ok_or(RepositoryError::NotFound)
    }

    async fn find_available_for_store(
        &self,
        cuit: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PromotionModel>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        Ok(state
            .promotions
            .iter()
            .filter(|p| !p.base.is_deleted && p.base.cuit_store == cuit && p.overlaps(start, end))
            .cloned()
            .collect())
    }

    async fn voucher_usage(&self) -> Result<Vec<VoucherUsage>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        let mut usage: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for purchase in &state.singles {
            usage
                .entry(purchase.base.payment_voucher.clone())
                .or_default()
                .0 += 1;
        }
        for purchase in &state.monthlies {
            usage
                .entry(purchase.base.payment_voucher.clone())
                .or_default()
                .1 += 1;
        }

        Ok(usage
            .into_iter()
            .map(|(payment_voucher, (single_count, monthly_count))| VoucherUsage {
                payment_voucher,
                single_count,
                monthly_count,
            })
            .collect())
    }
}

#[async_trait]
impl StoreRepositoryTrait for MemoryStore {
    async fn revenue_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StoreRevenue>, RepositoryError> {
        self.pause().await;
        let state = self.state.lock().unwrap();
        let within = |base: &PurchaseBase| base.created_at >= start && base.created_at < end;

        let mut totals: BTreeMap<(String, String), (f64, f64)> = BTreeMap::new();
        for purchase in state.singles.iter().filter(|p| within(&p.base)) {
            totals
                .entry((purchase.base.cuit_store.clone(), purchase.base.store.clone()))
                .or_default()
                .0 += purchase.base.final_amount;
        }
        for purchase in state.monthlies.iter().filter(|p| within(&p.base)) {
            totals
                .entry((purchase.base.cuit_store.clone(), purchase.base.store.clone()))
                .or_default()
                .1 += purchase.base.final_amount;
        }

        Ok(totals
            .into_iter()
            .map(|((cuit_store, store), (single_total, monthly_total))| StoreRevenue {
                store,
                cuit_store,
                single_total,
                monthly_total,
            })
            .collect())
    }
}
