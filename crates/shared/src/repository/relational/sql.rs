use crate::model::promotion::PromotionType;

const DISCOUNT_PROJECTION: &str = "code, promotion_title, name_store, cuit_store, \
     validity_start_date, validity_end_date, comments, bank_cuit, is_deleted, \
     'discount'::TEXT AS kind, discount_percentage, price_cap, only_cash, \
     NULL::INTEGER AS number_of_quotas, NULL::DOUBLE PRECISION AS interest";

const FINANCING_PROJECTION: &str = "code, promotion_title, name_store, cuit_store, \
     validity_start_date, validity_end_date, comments, bank_cuit, is_deleted, \
     'financing'::TEXT AS kind, NULL::DOUBLE PRECISION AS discount_percentage, \
     NULL::DOUBLE PRECISION AS price_cap, NULL::BOOLEAN AS only_cash, \
     number_of_quotas, interest";

pub const CARD_COLUMNS: &str =
    "c.number, c.ccv, c.cardholder_name_in_card, c.since, c.expiration_date, c.bank_cuit, c.customer_cuit";

pub fn promotion_projection(kind: PromotionType) -> &'static str {
    match kind {
        PromotionType::Discount => DISCOUNT_PROJECTION,
        PromotionType::Financing => FINANCING_PROJECTION,
    }
}

pub fn select_promotion_by_code(kind: PromotionType) -> String {
    format!(
        "SELECT {} FROM {} WHERE code = $1",
        promotion_projection(kind),
        kind.storage_name()
    )
}

pub fn update_validity_end(kind: PromotionType) -> String {
    format!(
        "UPDATE {} SET validity_end_date = $2 WHERE code = $1 RETURNING {}",
        kind.storage_name(),
        promotion_projection(kind)
    )
}

pub fn mark_deleted(kind: PromotionType) -> String {
    format!(
        "UPDATE {} SET is_deleted = TRUE WHERE code = $1 AND is_deleted = FALSE",
        kind.storage_name()
    )
}

pub fn promotion_exists(kind: PromotionType) -> String {
    format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE code = $1)",
        kind.storage_name()
    )
}

/// `$1` store cuit, `$2` window start, `$3` window end.
pub fn available_promotions() -> String {
    let filter = "cuit_store = $1 AND is_deleted = FALSE \
         AND validity_start_date <= $3 AND validity_end_date >= $2";
    format!(
        "SELECT {d} FROM discounts WHERE {filter} \
         UNION ALL \
         SELECT {f} FROM financings WHERE {filter} \
         ORDER BY validity_start_date, code",
        d = DISCOUNT_PROJECTION,
        f = FINANCING_PROJECTION,
    )
}

pub const INSERT_FINANCING: &str = "INSERT INTO financings (
        code, promotion_title, name_store, cuit_store, validity_start_date,
        validity_end_date, comments, bank_cuit, is_deleted, number_of_quotas, interest
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9, $10)";

pub const CODE_TAKEN: &str = "SELECT EXISTS (SELECT 1 FROM discounts WHERE code = $1)
        OR EXISTS (SELECT 1 FROM financings WHERE code = $1)";

pub const VOUCHER_USAGE: &str = "SELECT payment_voucher,
        SUM(is_single)::BIGINT AS single_count,
        SUM(is_monthly)::BIGINT AS monthly_count
    FROM (
        SELECT payment_voucher, 1 AS is_single, 0 AS is_monthly FROM purchase_single_payments
        UNION ALL
        SELECT payment_voucher, 0 AS is_single, 1 AS is_monthly FROM purchase_monthly_payments
    ) usage
    GROUP BY payment_voucher
    ORDER BY payment_voucher";

/// `$1` window start (inclusive), `$2` window end (exclusive).
pub const STORE_REVENUE: &str = "SELECT store, cuit_store,
        COALESCE(SUM(final_amount) FILTER (WHERE shape = 'single'), 0)::DOUBLE PRECISION AS single_total,
        COALESCE(SUM(final_amount) FILTER (WHERE shape = 'monthly'), 0)::DOUBLE PRECISION AS monthly_total
    FROM (
        SELECT store, cuit_store, final_amount, 'single' AS shape
        FROM purchase_single_payments
        WHERE created_at >= $1 AND created_at < $2
        UNION ALL
        SELECT store, cuit_store, final_amount, 'monthly' AS shape
        FROM purchase_monthly_payments
        WHERE created_at >= $1 AND created_at < $2
    ) purchases
    GROUP BY store, cuit_store
    ORDER BY cuit_store";
