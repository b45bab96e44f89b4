use crate::{
    abstract_trait::card::{repository::DynCardRepository, service::CardServiceTrait},
    domain::{
        requests::{ExpiringCardsRequest, PaymentSummaryRequest, PurchaseLookupRequest},
        responses::{
            ApiResponse, ExpiringCardResponse, MonthlyPaymentResponse, PaymentSummaryResponse,
            SinglePaymentResponse, TopCardResponse,
        },
    },
    errors::{ServiceError, format_validation_errors},
    model::payment_summary::PaymentSummaryModel,
    service::{
        context::EngineContext,
        policy::{dedup_due_cards, rank_top_cards, summary_code},
    },
    utils::{Method, mask_card_number, month_window, thirty_day_window},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::info;
use validator::Validate;

pub struct CardService {
    repo: DynCardRepository,
    ctx: EngineContext,
}

impl CardService {
    pub fn new(repo: DynCardRepository, ctx: EngineContext) -> Self {
        Self { repo, ctx }
    }

    async fn build_payment_summary(
        &self,
        req: &PaymentSummaryRequest,
    ) -> Result<ApiResponse<PaymentSummaryResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let window = month_window(req.month, req.year)?;
        let masked = mask_card_number(&req.card_number);

        info!(
            "🧾 Building payment summary | Card: {masked}, Period: {}/{}",
            req.month, req.year
        );

        let card = self
            .ctx
            .call(
                &format!("card {masked}"),
                self.repo.find_by_number(&req.card_number),
            )
            .await?;

        let purchases = self
            .ctx
            .call(
                &format!("purchases of card {masked}"),
                self.repo
                    .find_purchases_between(&card.number, window.start, window.end),
            )
            .await?;

        let (first_expiration, second_expiration) = self.ctx.policy.due_dates(self.ctx.clock.now());

        let summary = PaymentSummaryModel {
            code: summary_code(req.month, req.year),
            card_number: card.number.clone(),
            month: req.month,
            year: req.year,
            first_expiration,
            second_expiration,
            surcharge_percentage: self.ctx.policy.surcharge_percentage,
            total_price: purchases.total_amount(),
            purchases,
        };

        self.ctx
            .call(
                &format!("payment summary {} of card {masked}", summary.code),
                self.repo.save_payment_summary(&summary),
            )
            .await?;

        info!(
            "🧾 Summary {} | Card: {masked}, Singles: {}, Monthlies: {}, Total: {:.2}",
            summary.code,
            summary.purchases.single_payments.len(),
            summary.purchases.monthly_payments.len(),
            summary.total_price
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Payment summary generated successfully".to_string(),
            data: PaymentSummaryResponse::assemble(summary, card),
        })
    }

    async fn list_expiring_cards(
        &self,
        req: &ExpiringCardsRequest,
    ) -> Result<ApiResponse<Vec<ExpiringCardResponse>>, ServiceError> {
        let window = thirty_day_window(req.day, req.month, req.year)?;

        info!(
            "📅 Searching cards due between {} and {}",
            window.start, window.end
        );

        let dues = self
            .ctx
            .call(
                &format!("cards due from {}/{}/{}", req.day, req.month, req.year),
                self.repo.find_cards_due_between(window.start, window.end),
            )
            .await?;

        let cards: Vec<ExpiringCardResponse> = dedup_due_cards(dues)
            .into_iter()
            .filter(|due| window.contains_inclusive(due.first_expiration))
            .map(ExpiringCardResponse::from)
            .collect();

        info!("📅 Found {} cards due in the next 30 days", cards.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Expiring cards retrieved successfully".to_string(),
            data: cards,
        })
    }

    async fn lookup_single(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<SinglePaymentResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!(
            "🔍 Looking up single payment | Store: {}, Voucher: {}, Final amount: {}",
            req.cuit, req.payment_voucher, req.final_amount
        );

        let purchase = self
            .ctx
            .call(
                &format!(
                    "single payment {} at store {}",
                    req.payment_voucher, req.cuit
                ),
                self.repo
                    .find_single_purchase(&req.cuit, req.final_amount, &req.payment_voucher),
            )
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Single payment retrieved successfully".to_string(),
            data: purchase.into(),
        })
    }

    async fn lookup_monthly(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<MonthlyPaymentResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!(
            "🔍 Looking up monthly payment | Store: {}, Voucher: {}, Final amount: {}",
            req.cuit, req.payment_voucher, req.final_amount
        );

        let purchase = self
            .ctx
            .call(
                &format!(
                    "monthly payment {} at store {}",
                    req.payment_voucher, req.cuit
                ),
                self.repo
                    .find_monthly_purchase(&req.cuit, req.final_amount, &req.payment_voucher),
            )
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Monthly payment retrieved successfully".to_string(),
            data: purchase.into(),
        })
    }

    async fn rank_cards(&self) -> Result<ApiResponse<Vec<TopCardResponse>>, ServiceError> {
        info!("🏆 Ranking cards by purchase count");

        let counts = self
            .ctx
            .call("card purchase counts", self.repo.purchase_counts())
            .await?;

        let ranked: Vec<TopCardResponse> = rank_top_cards(counts, self.ctx.policy.top_cards_limit)
            .into_iter()
            .map(TopCardResponse::from)
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Top cards retrieved successfully".to_string(),
            data: ranked,
        })
    }
}

#[async_trait]
impl CardServiceTrait for CardService {
    async fn payment_summary(
        &self,
        req: &PaymentSummaryRequest,
    ) -> Result<ApiResponse<PaymentSummaryResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.build_payment_summary(req).await;
        self.ctx
            .finish("payment_summary", Method::Get, started, &result);
        result
    }

    async fn expiring_cards(
        &self,
        req: &ExpiringCardsRequest,
    ) -> Result<ApiResponse<Vec<ExpiringCardResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.list_expiring_cards(req).await;
        self.ctx
            .finish("expiring_cards", Method::Get, started, &result);
        result
    }

    async fn find_single_purchase(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<SinglePaymentResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.lookup_single(req).await;
        self.ctx
            .finish("find_single_purchase", Method::Get, started, &result);
        result
    }

    async fn find_monthly_purchase(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<MonthlyPaymentResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.lookup_monthly(req).await;
        self.ctx
            .finish("find_monthly_purchase", Method::Get, started, &result);
        result
    }

    async fn top_cards(&self) -> Result<ApiResponse<Vec<TopCardResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.rank_cards().await;
        self.ctx.finish("top_cards", Method::Get, started, &result);
        result
    }
}
