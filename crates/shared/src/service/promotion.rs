use crate::{
    abstract_trait::{
        bank::repository::DynBankRepository,
        promotion::{repository::DynPromotionRepository, service::PromotionServiceTrait},
    },
    domain::{
        requests::{AvailablePromotionsRequest, ExtendValidityRequest},
        responses::{
            ApiResponse, AvailablePromotionsResponse, MostUsedPromotionResponse,
            PromotionResponse,
        },
    },
    errors::{ServiceError, format_validation_errors},
    model::promotion::PromotionType,
    service::{context::EngineContext, policy::pick_most_used_voucher},
    utils::{Method, day_range_window},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::info;
use validator::Validate;

pub struct PromotionService {
    promotions: DynPromotionRepository,
    banks: DynBankRepository,
    ctx: EngineContext,
}

impl PromotionService {
    pub fn new(
        promotions: DynPromotionRepository,
        banks: DynBankRepository,
        ctx: EngineContext,
    ) -> Self {
        Self {
            promotions,
            banks,
            ctx,
        }
    }

    fn require_code(code: &str) -> Result<(), ServiceError> {
        if code.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "promotion code must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn change_validity_end(
        &self,
        kind: PromotionType,
        code: &str,
        req: &ExtendValidityRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError> {
        Self::require_code(code)?;

        info!(
            "🗓️ Extending {kind} promotion {code} until {}",
            req.new_date
        );

        let context = format!("{kind} promotion {code}");

        let current = self
            .ctx
            .call(&context, self.promotions.find_by_kind_and_code(kind, code))
            .await?;

        if req.new_date < current.base.validity_start_date {
            return Err(ServiceError::InvalidArgument(format!(
                "new end {} precedes validity start {} of {context}",
                req.new_date, current.base.validity_start_date
            )));
        }

        let updated = self
            .ctx
            .call(
                &context,
                self.banks.update_validity_end(kind, code, req.new_date),
            )
            .await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Promotion validity updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn remove(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        Self::require_code(code)?;

        info!("🗑️ Deleting {kind} promotion {code}");

        let flipped = self
            .ctx
            .call(
                &format!("{kind} promotion {code}"),
                self.banks.soft_delete(kind, code),
            )
            .await?;

        let message = if flipped {
            "Promotion deleted successfully"
        } else {
            "Promotion was already deleted"
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: flipped,
        })
    }

    async fn list_available(
        &self,
        req: &AvailablePromotionsRequest,
    ) -> Result<ApiResponse<AvailablePromotionsResponse>, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let window = day_range_window(req.start_date, req.end_date)?;

        info!(
            "🔍 Searching promotions | Store: {}, From: {}, To: {}",
            req.cuit, req.start_date, req.end_date
        );

        let candidates = self
            .ctx
            .call(
                &format!("promotions of store {}", req.cuit),
                self.promotions
                    .find_available_for_store(&req.cuit, window.start, window.end),
            )
            .await?;

        let available: Vec<_> = candidates
            .into_iter()
            .filter(|p| {
                !p.base.is_deleted
                    && p.base.cuit_store == req.cuit
                    && p.overlaps(window.start, window.end)
            })
            .collect();

        let data = AvailablePromotionsResponse::assemble(available);

        info!(
            "✅ Store {} has {} discounts and {} financings available",
            req.cuit,
            data.discounts.len(),
            data.financings.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Available promotions retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_most_used(
        &self,
    ) -> Result<ApiResponse<MostUsedPromotionResponse>, ServiceError> {
        info!("📈 Searching most used promotion");

        let usages = self
            .ctx
            .call("promotion usage", self.promotions.voucher_usage())
            .await?;

        let winner = pick_most_used_voucher(&usages)
            .ok_or_else(|| ServiceError::NotFound("promotion usage".to_string()))?;

        let promotion = self
            .ctx
            .call(
                &format!("promotion {}", winner.payment_voucher),
                self.promotions.find_by_code(&winner.payment_voucher),
            )
            .await?;

        info!(
            "📈 Most used promotion {} | Single: {}, Monthly: {}",
            winner.payment_voucher, winner.single_count, winner.monthly_count
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Most used promotion retrieved successfully".to_string(),
            data: MostUsedPromotionResponse::assemble(promotion, winner),
        })
    }
}

#[async_trait]
impl PromotionServiceTrait for PromotionService {
    async fn extend_validity(
        &self,
        kind: PromotionType,
        code: &str,
        req: &ExtendValidityRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.change_validity_end(kind, code, req).await;
        self.ctx
            .finish("extend_promotion_validity", Method::Patch, started, &result);
        result
    }

    async fn delete(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        let started = Instant::now();
        let result = self.remove(kind, code).await;
        self.ctx
            .finish("delete_promotion", Method::Delete, started, &result);
        result
    }

    async fn available_for_store(
        &self,
        req: &AvailablePromotionsRequest,
    ) -> Result<ApiResponse<AvailablePromotionsResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.list_available(req).await;
        self.ctx
            .finish("available_promotions", Method::Get, started, &result);
        result
    }

    async fn most_used(&self) -> Result<ApiResponse<MostUsedPromotionResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.find_most_used().await;
        self.ctx
            .finish("most_used_promotion", Method::Get, started, &result);
        result
    }
}
