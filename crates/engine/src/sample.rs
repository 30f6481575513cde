//! Demo data offered to new accounts at the end of onboarding.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{CATEGORIES, MoneyCents, TransactionDraft, TransactionKind};

/// Days of history generated, counting back from (and including) today.
pub const SAMPLE_DAYS: u64 = 90;

const INCOME_DESCRIPTIONS: [&str; 5] = [
    "Salary",
    "Freelance work",
    "Bonus",
    "Investment return",
    "Side project",
];

fn expense_descriptions(category_id: &str) -> [&'static str; 5] {
    match category_id {
        "food" => ["Grocery shopping", "Restaurant dinner", "Coffee", "Lunch", "Food delivery"],
        "transport" => ["Gas", "Uber ride", "Public transport", "Parking", "Car maintenance"],
        "shopping" => ["Clothing", "Electronics", "Home decor", "Online shopping", "Gifts"],
        "entertainment" => ["Movie tickets", "Concert", "Streaming service", "Gaming", "Books"],
        "bills" => ["Internet bill", "Phone bill", "Electricity", "Water bill", "Rent"],
        "health" => ["Gym membership", "Pharmacy", "Doctor visit", "Health insurance", "Supplements"],
        "education" => ["Online course", "Books", "Tuition", "Certification", "Workshop"],
        "travel" => ["Flight tickets", "Hotel", "Vacation", "Travel insurance", "Tour package"],
        "savings" => ["Emergency fund", "Investment", "Retirement", "Fixed deposit", "Mutual fund"],
        _ => ["Miscellaneous", "Donation", "Gift", "Subscription", "Other expense"],
    }
}

/// Random history: each day has an even chance of one record; about 15 %
/// of records are income of ₹1,000–3,999, the rest expenses of ₹10–209.
pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<TransactionDraft> {
    let mut drafts = Vec::new();
    for back in 0..SAMPLE_DAYS {
        let Some(date) = today.checked_sub_days(Days::new(back)) else {
            break;
        };
        if !rng.gen_bool(0.5) {
            continue;
        }
        let category = &CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let income = rng.gen_bool(0.15);
        let (kind, amount, description) = if income {
            (
                TransactionKind::Income,
                rng.gen_range(1_000..4_000),
                INCOME_DESCRIPTIONS.choose(rng).copied(),
            )
        } else {
            (
                TransactionKind::Expense,
                rng.gen_range(10..210),
                expense_descriptions(category.id).choose(rng).copied(),
            )
        };
        drafts.push(TransactionDraft {
            kind,
            amount: MoneyCents::from_major(amount),
            category: category.id.to_string(),
            description: description.unwrap_or("Other expense").to_string(),
            date,
        });
    }
    drafts
}
