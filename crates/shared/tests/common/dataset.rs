use super::{CARD, HOLDER, SANTANDER, STORE_O, at, bank, card, customer, discount, financing, monthly, single};
use shared::model::{
    bank::BankModel,
    card::CardModel,
    customer::CustomerModel,
    promotion::PromotionModel,
    purchase::{MonthlyPaymentModel, SinglePaymentModel},
};

pub const GALICIA: &str = "30-50000173-5";
pub const NACION: &str = "30-99999999-9";
pub const STORE_A: &str = "30-22222222-2";
pub const STORE_B: &str = "30-33333333-3";
pub const SECOND_CARD: &str = "4000111122223333";
pub const IDLE_CARD: &str = "5000111122223333";
pub const OTHER_HOLDER: &str = "20-22222222-2";

/// Rows every backend is seeded with before a scenario runs.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub banks: Vec<BankModel>,
    /// Customer plus the cuits of the banks it holds accounts with.
    pub customers: Vec<(CustomerModel, Vec<String>)>,
    pub cards: Vec<CardModel>,
    pub singles: Vec<SinglePaymentModel>,
    pub monthlies: Vec<MonthlyPaymentModel>,
    pub promotions: Vec<PromotionModel>,
}

/// October 2024 for three banks and three cards.
///
/// [`CARD`] buys 510.00 gross in October and Store O takes 800.00 of final
/// amounts across both cards, while Store A leads on gross amounts.
pub fn october_2024() -> Dataset {
    let store_o = ("Store O", STORE_O);
    let store_a = ("Store A", STORE_A);
    let store_b = ("Store B", STORE_B);

    let mut gone = financing("FIN-GONE", STORE_O, at(2024, 10, 1), at(2024, 10, 31));
    gone.base.is_deleted = true;

    Dataset {
        banks: vec![
            bank(SANTANDER, "Santander"),
            bank(GALICIA, "Galicia"),
            bank(NACION, "Nacion"),
        ],
        customers: vec![
            (customer(HOLDER), vec![SANTANDER.to_string(), GALICIA.to_string()]),
            (customer(OTHER_HOLDER), vec![SANTANDER.to_string()]),
        ],
        cards: vec![
            card(CARD, SANTANDER),
            card(SECOND_CARD, GALICIA),
            card(IDLE_CARD, GALICIA),
        ],
        singles: vec![
            single("V-1", store_o, 100.0, 90.0, CARD, at(2024, 10, 1)),
            single("DISC-OCT", store_o, 150.0, 150.0, CARD, at(2024, 10, 12)),
            single("V-3", store_a, 60.0, 54.0, CARD, at(2024, 10, 31)),
            single("V-5", store_b, 999.0, 999.0, CARD, at(2024, 9, 30)),
            single("V-6", store_b, 999.0, 999.0, CARD, at(2024, 11, 1)),
            single("DISC-OCT", store_a, 900.0, 500.0, SECOND_CARD, at(2024, 10, 5)),
        ],
        monthlies: vec![
            monthly("V-4", store_o, 200.0, 212.0, 4, CARD, at(2024, 10, 20)),
            monthly("FIN-OLD", store_o, 400.0, 348.0, 3, SECOND_CARD, at(2024, 10, 7)),
        ],
        promotions: vec![
            discount("DISC-OCT", STORE_O, at(2024, 10, 1), at(2024, 10, 20)),
            financing("FIN-OLD", STORE_O, at(2023, 1, 1), at(2023, 6, 30)),
            gone,
        ],
    }
}
