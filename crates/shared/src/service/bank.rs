use crate::{
    abstract_trait::bank::{repository::DynBankRepository, service::BankServiceTrait},
    domain::{
        requests::AddFinancingPromotionRequest,
        responses::{ApiResponse, BankCustomerCountResponse, PromotionResponse},
    },
    errors::{ServiceError, format_validation_errors},
    model::promotion::NewFinancingPromotion,
    service::context::EngineContext,
    utils::Method,
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::info;
use validator::Validate;

pub struct BankService {
    repo: DynBankRepository,
    ctx: EngineContext,
}

impl BankService {
    pub fn new(repo: DynBankRepository, ctx: EngineContext) -> Self {
        Self { repo, ctx }
    }

    async fn register_financing(
        &self,
        req: &AddFinancingPromotionRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        info!(
            "🏦 Adding financing promotion | Bank: {}, Code: {}, Quotas: {}, Interest: {}",
            req.bank_cuit, req.code, req.number_of_quotas, req.interest
        );

        let promotion = self
            .ctx
            .call(
                &format!("bank {}", req.bank_cuit),
                self.repo
                    .add_financing_promotion(&req.bank_cuit, NewFinancingPromotion::from(req)),
            )
            .await?;

        info!("✅ Financing promotion {} stored", promotion.base.code);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Financing promotion added successfully".to_string(),
            data: promotion.into(),
        })
    }

    async fn count_customers(
        &self,
    ) -> Result<ApiResponse<Vec<BankCustomerCountResponse>>, ServiceError> {
        info!("👥 Counting customers per bank");

        let mut counts = self
            .ctx
            .call("bank customer counts", self.repo.customer_counts())
            .await?;
        counts.sort_by(|a, b| a.bank_cuit.cmp(&b.bank_cuit));

        info!("👥 Counted customers of {} banks", counts.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Bank customer counts retrieved successfully".to_string(),
            data: counts
                .into_iter()
                .map(BankCustomerCountResponse::from)
                .collect(),
        })
    }
}

#[async_trait]
impl BankServiceTrait for BankService {
    async fn add_financing_promotion(
        &self,
        req: &AddFinancingPromotionRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.register_financing(req).await;
        self.ctx
            .finish("add_financing_promotion", Method::Post, started, &result);
        result
    }

    async fn customer_counts(
        &self,
    ) -> Result<ApiResponse<Vec<BankCustomerCountResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.count_customers().await;
        self.ctx
            .finish("bank_customer_counts", Method::Get, started, &result);
        result
    }
}
