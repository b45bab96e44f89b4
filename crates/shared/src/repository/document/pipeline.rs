use crate::repository::document::documents::{CARDS, CUSTOMERS, MONTHLY_PAYMENTS};
use chrono::{DateTime, Utc};
use mongodb::bson::{DateTime as BsonDateTime, Document, doc};

fn at(instant: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_chrono(instant)
}

/// Half-open `[start, end)` match on `created_at`.
fn created_within(start: DateTime<Utc>, end: DateTime<Utc>) -> Document {
    doc! { "created_at": { "$gte": at(start), "$lt": at(end) } }
}

pub fn card_purchases_filter(number: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Document {
    let mut filter = doc! { "card_number": number };
    filter.extend(created_within(start, end));
    filter
}

pub fn purchase_lookup_filter(cuit: &str, final_amount: f64, voucher: &str) -> Document {
    doc! {
        "cuit_store": cuit,
        "final_amount": final_amount,
        "payment_voucher": voucher,
    }
}

/// Non-deleted promotions of `cuit` whose validity overlaps `[start, end]`.
pub fn availability_filter(cuit: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Document {
    doc! {
        "cuit_store": cuit,
        "is_deleted": { "$ne": true },
        "validity_start_date": { "$lte": at(end) },
        "validity_end_date": { "$gte": at(start) },
    }
}

/// Runs on `payment_summaries`.
pub fn cards_due_pipeline(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Document> {
    vec![
        doc! { "$match": { "first_expiration": { "$gte": at(start), "$lte": at(end) } } },
        doc! {
            "$lookup": {
                "from": CARDS,
                "localField": "card_number",
                "foreignField": "number",
                "as": "card",
            }
        },
        doc! { "$unwind": "$card" },
        doc! { "$project": { "_id": 0, "card": 1, "first_expiration": 1 } },
        doc! { "$sort": { "first_expiration": 1, "card.number": 1 } },
    ]
}

fn count_of(from: &str, as_field: &str) -> Document {
    doc! {
        "$lookup": {
            "from": from,
            "localField": "number",
            "foreignField": "card_number",
            "pipeline": [ { "$project": { "_id": 1 } } ],
            "as": as_field,
        }
    }
}

/// Runs on `cards`; every card appears, even without purchases.
pub fn purchase_counts_pipeline(single: &str, monthly: &str) -> Vec<Document> {
    vec![
        count_of(single, "singles"),
        count_of(monthly, "monthlies"),
        doc! {
            "$project": {
                "_id": 0,
                "card": {
                    "number": "$number",
                    "ccv": "$ccv",
                    "cardholder_name_in_card": "$cardholder_name_in_card",
                    "since": "$since",
                    "expiration_date": "$expiration_date",
                    "bank_cuit": "$bank_cuit",
                    "customer_cuit": "$customer_cuit",
                },
                "single_count": { "$size": "$singles" },
                "monthly_count": { "$size": "$monthlies" },
            }
        },
        doc! { "$sort": { "card.number": 1 } },
    ]
}

/// Runs on `purchase_single_payments` and folds in the monthly collection.
pub fn voucher_usage_pipeline() -> Vec<Document> {
    let tag = |single: i32, monthly: i32| {
        doc! {
            "$project": {
                "_id": 0,
                "payment_voucher": 1,
                "is_single": { "$literal": single },
                "is_monthly": { "$literal": monthly },
            }
        }
    };

    vec![
        tag(1, 0),
        doc! { "$unionWith": { "coll": MONTHLY_PAYMENTS, "pipeline": [ tag(0, 1) ] } },
        doc! {
            "$group": {
                "_id": "$payment_voucher",
                "single_count": { "$sum": "$is_single" },
                "monthly_count": { "$sum": "$is_monthly" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "payment_voucher": "$_id",
                "single_count": { "$toLong": "$single_count" },
                "monthly_count": { "$toLong": "$monthly_count" },
            }
        },
        doc! { "$sort": { "payment_voucher": 1 } },
    ]
}

/// Runs on `purchase_single_payments` and folds in the monthly collection.
pub fn store_revenue_pipeline(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Document> {
    let shaped = |shape: &str| {
        doc! {
            "$project": {
                "_id": 0,
                "store": 1,
                "cuit_store": 1,
                "final_amount": 1,
                "shape": { "$literal": shape },
            }
        }
    };
    let total_of = |shape: &str| {
        doc! {
            "$sum": { "$cond": [ { "$eq": [ "$shape", shape ] }, "$final_amount", 0 ] }
        }
    };

    vec![
        doc! { "$match": created_within(start, end) },
        shaped("single"),
        doc! {
            "$unionWith": {
                "coll": MONTHLY_PAYMENTS,
                "pipeline": [ { "$match": created_within(start, end) }, shaped("monthly") ],
            }
        },
        doc! {
            "$group": {
                "_id": { "store": "$store", "cuit_store": "$cuit_store" },
                "single_total": total_of("single"),
                "monthly_total": total_of("monthly"),
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "store": "$_id.store",
                "cuit_store": "$_id.cuit_store",
                "single_total": { "$toDouble": "$single_total" },
                "monthly_total": { "$toDouble": "$monthly_total" },
            }
        },
        doc! { "$sort": { "cuit_store": 1 } },
    ]
}

/// Runs on `banks`; customers carry the cuits of their banks in `bank_cuits`.
pub fn customer_counts_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": CUSTOMERS,
                "localField": "cuit",
                "foreignField": "bank_cuits",
                "pipeline": [ { "$project": { "_id": 1 } } ],
                "as": "customers",
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "bank_cuit": "$cuit",
                "bank_name": "$name",
                "customer_count": { "$toLong": { "$size": "$customers" } },
            }
        },
        doc! { "$sort": { "bank_cuit": 1 } },
    ]
}
