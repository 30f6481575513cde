//! Derived figures over a transaction list.
//!
//! Everything here is pure: callers pass the transactions and an explicit
//! reference date, so the same inputs always give the same dashboard. Calendar
//! buckets use `NaiveDate::year()`/`month()` only; no timezone conversion
//! happens past the point where the caller picked "today".

use chrono::{Datelike, Days, NaiveDate};

use crate::{
    CATEGORIES, Category, MoneyCents, Transaction, TransactionKind, UserProfile,
};

const MONTH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTH_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAY_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Dashboard trend window, in days.
pub const DAILY_TREND_DAYS: usize = 7;
/// Analytics trend window, in months.
pub const MONTHLY_TREND_MONTHS: usize = 6;
/// How many rows the "recent" and "top" lists keep.
pub const LIST_PREVIEW_LEN: usize = 5;

const APPROACHING_BUDGET_PERCENT: f64 = 80.0;
const TREND_CHANGE_PERCENT: f64 = 20.0;
const CONCENTRATION_BUDGET_PERCENT: f64 = 30.0;

/// A calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    /// 1..=12
    month: u32,
}

impl Period {
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month `months` before this one.
    #[must_use]
    pub fn back(self, months: u32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 - i64::from(months);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.back(1)
    }

    /// `"Oct"`
    pub fn short_name(self) -> &'static str {
        MONTH_SHORT[(self.month - 1) as usize]
    }

    /// `"October 2026"`
    pub fn label(self) -> String {
        format!("{} {}", MONTH_LONG[(self.month - 1) as usize], self.year)
    }
}

/// `"Mon"`
pub fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAY_SHORT[date.weekday().num_days_from_monday() as usize]
}

/// Sum of `kind` amounts dated inside `period`.
pub fn period_total(txs: &[Transaction], period: Period, kind: TransactionKind) -> MoneyCents {
    in_period(txs, period, kind).map(|tx| tx.amount).sum()
}

/// Number of `kind` records dated inside `period`.
pub fn period_count(txs: &[Transaction], period: Period, kind: TransactionKind) -> usize {
    in_period(txs, period, kind).count()
}

fn in_period(
    txs: &[Transaction],
    period: Period,
    kind: TransactionKind,
) -> impl Iterator<Item = &Transaction> {
    txs.iter()
        .filter(move |tx| tx.kind == kind && period.contains(tx.date))
}

/// Percentage change from `previous` to `current`.
///
/// A previous total of zero (or less) yields `0`, whatever `current` is.
pub fn month_over_month_delta(current: MoneyCents, previous: MoneyCents) -> f64 {
    if !previous.is_positive() {
        return 0.0;
    }
    (current - previous).percent_of(previous)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: &'static Category,
    pub total: MoneyCents,
    /// Share of the period expense total, in percent.
    pub share: f64,
}

/// Expense total per known category in `period`.
///
/// Only categories with a positive total are returned, largest first; ties
/// keep the enumeration order of [`CATEGORIES`].
pub fn category_breakdown(txs: &[Transaction], period: Period) -> Vec<CategoryTotal> {
    let period_expenses = period_total(txs, period, TransactionKind::Expense);

    let mut totals: Vec<CategoryTotal> = CATEGORIES
        .iter()
        .map(|category| {
            let total = in_period(txs, period, TransactionKind::Expense)
                .filter(|tx| tx.category == category.id)
                .map(|tx| tx.amount)
                .sum();
            CategoryTotal {
                category,
                total,
                share: 0.0,
            }
        })
        .filter(|entry| entry.total.is_positive())
        .collect();

    for entry in &mut totals {
        entry.share = entry.total.percent_of(period_expenses);
    }
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub label: &'static str,
    pub total: MoneyCents,
}

/// `months` monthly expense totals ending at `anchor` (inclusive), oldest
/// first.
pub fn monthly_trend(txs: &[Transaction], anchor: Period, months: usize) -> Vec<TrendPoint> {
    (0..months)
        .rev()
        .map(|back| {
            let period = anchor.back(back as u32);
            TrendPoint {
                label: period.short_name(),
                total: period_total(txs, period, TransactionKind::Expense),
            }
        })
        .collect()
}

/// `days` daily expense totals ending at `today` (inclusive), oldest first.
pub fn daily_trend(txs: &[Transaction], today: NaiveDate, days: usize) -> Vec<TrendPoint> {
    (0..days)
        .rev()
        .map(|back| {
            let day = today
                .checked_sub_days(Days::new(back as u64))
                .unwrap_or(NaiveDate::MIN);
            TrendPoint {
                label: weekday_short(day),
                total: txs
                    .iter()
                    .filter(|tx| tx.kind == TransactionKind::Expense && tx.date == day)
                    .map(|tx| tx.amount)
                    .sum(),
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetBand {
    /// used ≤ 80 %
    OnTrack,
    /// 80 % < used ≤ 100 %
    Approaching,
    /// used > 100 %
    Over,
}

impl BudgetBand {
    pub fn classify(used_percent: f64) -> Self {
        if used_percent > 100.0 {
            Self::Over
        } else if used_percent > APPROACHING_BUDGET_PERCENT {
            Self::Approaching
        } else {
            Self::OnTrack
        }
    }
}

/// Spent share of the budget in percent; `0` without a budget.
pub fn budget_used_percent(spent: MoneyCents, budget: MoneyCents) -> f64 {
    spent.percent_of(budget)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightTone {
    Warning,
    Success,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Insight {
    Budget {
        band: BudgetBand,
        used_percent: f64,
        /// Amount above the budget, zero unless `band` is `Over`.
        overspent: MoneyCents,
    },
    SpendingIncreased {
        percent: f64,
    },
    /// `percent` is the size of the decrease (positive).
    Savings {
        percent: f64,
    },
    Concentration {
        category: &'static Category,
        share_of_total: f64,
    },
}

impl Insight {
    pub fn tone(&self) -> InsightTone {
        match self {
            Self::Budget {
                band: BudgetBand::OnTrack,
                ..
            }
            | Self::Savings { .. } => InsightTone::Success,
            Self::Budget { .. } | Self::SpendingIncreased { .. } => InsightTone::Warning,
            Self::Concentration { .. } => InsightTone::Info,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Budget { band, .. } => match band {
                BudgetBand::Over => "Over Budget".to_string(),
                BudgetBand::Approaching => "Approaching Budget Limit".to_string(),
                BudgetBand::OnTrack => "On Track".to_string(),
            },
            Self::SpendingIncreased { .. } => "Increased Spending".to_string(),
            Self::Savings { .. } => "Great Savings".to_string(),
            Self::Concentration { category, .. } => format!("High {} Spending", category.name),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Budget {
                band: BudgetBand::Over,
                overspent,
                ..
            } => format!("You've exceeded your budget by {overspent} this month."),
            Self::Budget {
                band: BudgetBand::Approaching,
                used_percent,
                ..
            } => format!("You've used {used_percent:.0}% of your monthly budget."),
            Self::Budget { used_percent, .. } => {
                format!("You're doing great! Only {used_percent:.0}% of your budget used.")
            }
            Self::SpendingIncreased { percent } => {
                format!("Your spending increased by {percent:.1}% compared to last month.")
            }
            Self::Savings { percent } => {
                format!("Your spending decreased by {percent:.1}% compared to last month!")
            }
            Self::Concentration {
                category,
                share_of_total,
            } => format!(
                "{} {} accounts for {share_of_total:.0}% of your total spending.",
                category.icon, category.name
            ),
        }
    }
}

/// Builds the insight list: budget band, then trend, then concentration.
///
/// `breakdown` must be sorted largest first (as [`category_breakdown`]
/// returns it).
pub fn insights(
    current: MoneyCents,
    previous: MoneyCents,
    budget: MoneyCents,
    breakdown: &[CategoryTotal],
) -> Vec<Insight> {
    let mut out = Vec::with_capacity(3);

    if budget.is_positive() {
        let used_percent = budget_used_percent(current, budget);
        let band = BudgetBand::classify(used_percent);
        let overspent = if band == BudgetBand::Over {
            current - budget
        } else {
            MoneyCents::ZERO
        };
        out.push(Insight::Budget {
            band,
            used_percent,
            overspent,
        });
    }

    let delta = month_over_month_delta(current, previous);
    if delta > TREND_CHANGE_PERCENT {
        out.push(Insight::SpendingIncreased { percent: delta });
    } else if delta < -TREND_CHANGE_PERCENT {
        out.push(Insight::Savings { percent: delta.abs() });
    }

    if let Some(top) = breakdown.first() {
        if top.total.percent_of(budget) > CONCENTRATION_BUDGET_PERCENT {
            out.push(Insight::Concentration {
                category: top.category,
                share_of_total: top.total.percent_of(current),
            });
        }
    }

    out
}

/// `limit` most recent transactions, newest first (stable on equal dates).
pub fn recent(txs: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = txs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}

/// `limit` largest expenses of `period`, largest first.
pub fn top_expenses(txs: &[Transaction], period: Period, limit: usize) -> Vec<Transaction> {
    let mut expenses: Vec<&Transaction> =
        in_period(txs, period, TransactionKind::Expense).collect();
    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    expenses.into_iter().take(limit).cloned().collect()
}

/// Figures shown on the dashboard for the month containing `today`.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub period: Period,
    pub income: MoneyCents,
    pub expenses: MoneyCents,
    pub balance: MoneyCents,
    pub budget_used_percent: f64,
    /// `None` without a configured budget.
    pub budget_band: Option<BudgetBand>,
    pub breakdown: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
    pub recent: Vec<Transaction>,
}

impl DashboardSummary {
    pub fn compute(txs: &[Transaction], profile: Option<&UserProfile>, today: NaiveDate) -> Self {
        let period = Period::containing(today);
        let income = period_total(txs, period, TransactionKind::Income);
        let expenses = period_total(txs, period, TransactionKind::Expense);
        let budget = profile
            .map(|profile| profile.monthly_budget)
            .unwrap_or(MoneyCents::ZERO);
        let used = budget_used_percent(expenses, budget);

        Self {
            period,
            income,
            expenses,
            balance: income - expenses,
            budget_used_percent: used,
            budget_band: budget.is_positive().then(|| BudgetBand::classify(used)),
            breakdown: category_breakdown(txs, period),
            trend: daily_trend(txs, today, DAILY_TREND_DAYS),
            recent: recent(txs, LIST_PREVIEW_LEN),
        }
    }
}

/// Figures shown on the analytics screen for the month containing `today`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsSummary {
    pub period: Period,
    pub current_total: MoneyCents,
    pub current_count: usize,
    pub previous_total: MoneyCents,
    pub previous_count: usize,
    pub delta_percent: f64,
    pub average_transaction: MoneyCents,
    pub breakdown: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
    pub top_expenses: Vec<Transaction>,
    pub insights: Vec<Insight>,
}

impl AnalyticsSummary {
    pub fn compute(txs: &[Transaction], profile: Option<&UserProfile>, today: NaiveDate) -> Self {
        let period = Period::containing(today);
        let previous = period.previous();
        let budget = profile
            .map(|profile| profile.monthly_budget)
            .unwrap_or(MoneyCents::ZERO);

        let current_total = period_total(txs, period, TransactionKind::Expense);
        let current_count = period_count(txs, period, TransactionKind::Expense);
        let previous_total = period_total(txs, previous, TransactionKind::Expense);
        let breakdown = category_breakdown(txs, period);
        let insights = insights(current_total, previous_total, budget, &breakdown);

        Self {
            period,
            current_total,
            current_count,
            previous_total,
            previous_count: period_count(txs, previous, TransactionKind::Expense),
            delta_percent: month_over_month_delta(current_total, previous_total),
            average_transaction: current_total.div_count(current_count),
            breakdown,
            trend: monthly_trend(txs, period, MONTHLY_TREND_MONTHS),
            top_expenses: top_expenses(txs, period, LIST_PREVIEW_LEN),
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(kind: TransactionKind, rupees: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            amount: MoneyCents::from_major(rupees),
            category: category.to_string(),
            description: "test".to_string(),
            date: on,
        }
    }

    fn expense(rupees: i64, category: &str, on: NaiveDate) -> Transaction {
        tx(TransactionKind::Expense, rupees, category, on)
    }

    fn income(rupees: i64, on: NaiveDate) -> Transaction {
        tx(TransactionKind::Income, rupees, "other", on)
    }

    fn oct() -> Period {
        Period::new(2026, 10).unwrap()
    }

    #[test]
    fn period_total_filters_kind_and_month() {
        let txs = vec![
            expense(100, "food", date(2026, 10, 1)),
            expense(50, "food", date(2026, 10, 31)),
            expense(999, "food", date(2026, 9, 30)),
            expense(999, "food", date(2025, 10, 15)),
            income(5_000, date(2026, 10, 5)),
        ];
        assert_eq!(
            period_total(&txs, oct(), TransactionKind::Expense),
            MoneyCents::from_major(150)
        );
        assert_eq!(
            period_total(&txs, oct(), TransactionKind::Income),
            MoneyCents::from_major(5_000)
        );
        assert_eq!(period_count(&txs, oct(), TransactionKind::Expense), 2);
    }

    #[test]
    fn period_total_of_empty_list_is_zero() {
        assert_eq!(
            period_total(&[], oct(), TransactionKind::Expense),
            MoneyCents::ZERO
        );
    }

    #[test]
    fn period_back_wraps_years() {
        let jan = Period::new(2026, 1).unwrap();
        assert_eq!(jan.previous(), Period::new(2025, 12).unwrap());
        assert_eq!(jan.back(13), Period::new(2024, 12).unwrap());
        assert_eq!(oct().back(0), oct());
        assert!(Period::new(2026, 13).is_none());
        assert_eq!(oct().label(), "October 2026");
    }

    #[test]
    fn delta_with_zero_previous_is_zero() {
        assert_eq!(
            month_over_month_delta(MoneyCents::from_major(500), MoneyCents::ZERO),
            0.0
        );
        assert_eq!(
            month_over_month_delta(MoneyCents::from_major(150), MoneyCents::from_major(100)),
            50.0
        );
        assert_eq!(
            month_over_month_delta(MoneyCents::from_major(50), MoneyCents::from_major(100)),
            -50.0
        );
    }

    #[test]
    fn breakdown_skips_empty_categories_and_sorts_descending() {
        let txs = vec![
            expense(100, "transport", date(2026, 10, 2)),
            expense(300, "bills", date(2026, 10, 3)),
            expense(100, "food", date(2026, 10, 4)),
            expense(500, "mystery", date(2026, 10, 4)),
            income(9_000, date(2026, 10, 1)),
            expense(700, "health", date(2026, 9, 1)),
        ];
        let breakdown = category_breakdown(&txs, oct());
        let ids: Vec<_> = breakdown.iter().map(|entry| entry.category.id).collect();
        // food precedes transport in the enumeration, so it wins the tie
        assert_eq!(ids, vec!["bills", "food", "transport"]);
        assert!(breakdown.iter().all(|entry| entry.total.is_positive()));
        // unknown categories still count toward the period total
        assert_eq!(breakdown[0].share, 30.0);
    }

    #[test]
    fn monthly_trend_has_requested_points_oldest_first() {
        let txs = vec![
            expense(10, "food", date(2026, 5, 10)),
            expense(20, "food", date(2026, 10, 10)),
            income(1_000, date(2026, 10, 1)),
            expense(40, "food", date(2026, 4, 30)),
        ];
        let trend = monthly_trend(&txs, oct(), 6);
        assert_eq!(trend.len(), 6);
        let labels: Vec<_> = trend.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"]);
        assert_eq!(trend[0].total, MoneyCents::from_major(10));
        assert_eq!(trend[5].total, MoneyCents::from_major(20));
    }

    #[test]
    fn daily_trend_labels_weekdays() {
        // 2026-10-18 is a Sunday
        let today = date(2026, 10, 18);
        let txs = vec![
            expense(15, "food", today),
            expense(5, "food", date(2026, 10, 12)),
            expense(99, "food", date(2026, 10, 11)),
        ];
        let trend = daily_trend(&txs, today, 7);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].label, "Mon");
        assert_eq!(trend[6].label, "Sun");
        assert_eq!(trend[0].total, MoneyCents::from_major(5));
        assert_eq!(trend[6].total, MoneyCents::from_major(15));
    }

    #[test]
    fn budget_bands() {
        let budget = MoneyCents::from_major(1_000);
        let band = |spent| BudgetBand::classify(budget_used_percent(MoneyCents::from_major(spent), budget));
        assert_eq!(band(1_050), BudgetBand::Over);
        assert_eq!(band(1_000), BudgetBand::Approaching);
        assert_eq!(band(850), BudgetBand::Approaching);
        assert_eq!(band(800), BudgetBand::OnTrack);
        assert_eq!(band(500), BudgetBand::OnTrack);
    }

    #[test]
    fn no_budget_means_no_budget_insight() {
        let out = insights(
            MoneyCents::from_major(500),
            MoneyCents::from_major(500),
            MoneyCents::ZERO,
            &[],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn insights_follow_budget_trend_concentration_order() {
        let txs = vec![
            expense(700, "food", date(2026, 10, 2)),
            expense(350, "travel", date(2026, 10, 3)),
        ];
        let breakdown = category_breakdown(&txs, oct());
        let out = insights(
            MoneyCents::from_major(1_050),
            MoneyCents::from_major(500),
            MoneyCents::from_major(1_000),
            &breakdown,
        );
        assert_eq!(out.len(), 3);
        assert!(matches!(
            out[0],
            Insight::Budget {
                band: BudgetBand::Over,
                overspent,
                ..
            } if overspent == MoneyCents::from_major(50)
        ));
        assert!(matches!(out[1], Insight::SpendingIncreased { percent } if percent == 110.0));
        match &out[2] {
            Insight::Concentration {
                category,
                share_of_total,
            } => {
                assert_eq!(category.id, "food");
                assert_eq!(share_of_total.round(), 67.0);
            }
            other => panic!("unexpected insight {other:?}"),
        }
        assert_eq!(out[0].message(), "You've exceeded your budget by ₹50 this month.");
    }

    #[test]
    fn savings_insight_on_large_decrease() {
        let out = insights(
            MoneyCents::from_major(500),
            MoneyCents::from_major(1_000),
            MoneyCents::from_major(5_000),
            &[],
        );
        assert_eq!(out.len(), 2);
        assert!(matches!(out[1], Insight::Savings { percent } if percent == 50.0));
        assert_eq!(out[1].tone(), InsightTone::Success);
    }

    #[test]
    fn small_changes_emit_no_trend_insight() {
        let out = insights(
            MoneyCents::from_major(110),
            MoneyCents::from_major(100),
            MoneyCents::ZERO,
            &[],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn dashboard_summary_for_current_month() {
        let today = date(2026, 10, 18);
        let txs = vec![
            income(2_000, date(2026, 10, 1)),
            expense(850, "food", date(2026, 10, 17)),
            expense(100, "food", date(2026, 9, 17)),
        ];
        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: "Demo".to_string(),
            email: "demo@financeflow.com".to_string(),
            monthly_budget: MoneyCents::from_major(1_000),
            selected_categories: Vec::new(),
            onboarding_complete: true,
        };
        let summary = DashboardSummary::compute(&txs, Some(&profile), today);
        assert_eq!(summary.balance, MoneyCents::from_major(1_150));
        assert_eq!(summary.budget_band, Some(BudgetBand::Approaching));
        assert_eq!(summary.trend.len(), DAILY_TREND_DAYS);
        assert_eq!(summary.recent[0].date, date(2026, 10, 17));

        let without_profile = DashboardSummary::compute(&txs, None, today);
        assert_eq!(without_profile.budget_band, None);
        assert_eq!(without_profile.budget_used_percent, 0.0);
    }

    #[test]
    fn analytics_summary_averages_and_tops() {
        let today = date(2026, 10, 18);
        let txs = vec![
            expense(100, "food", date(2026, 10, 1)),
            expense(300, "bills", date(2026, 10, 2)),
            expense(200, "food", date(2026, 9, 2)),
        ];
        let summary = AnalyticsSummary::compute(&txs, None, today);
        assert_eq!(summary.current_count, 2);
        assert_eq!(summary.average_transaction, MoneyCents::from_major(200));
        assert_eq!(summary.previous_count, 1);
        assert_eq!(summary.delta_percent, 100.0);
        assert_eq!(summary.top_expenses[0].amount, MoneyCents::from_major(300));
        assert_eq!(summary.trend.len(), MONTHLY_TREND_MONTHS);
        assert!(matches!(summary.insights[..], [Insight::SpendingIncreased { .. }]));
    }

    #[test]
    fn oversized_stored_amounts_saturate_instead_of_panicking() {
        let today = date(2026, 10, 18);
        let mut a = expense(1, "food", date(2026, 10, 1));
        a.amount = MoneyCents::new(i64::MAX / 100 * 100);
        let mut b = a.clone();
        b.id = Uuid::new_v4();
        let txs = vec![a, b];

        let total = period_total(&txs, oct(), TransactionKind::Expense);
        assert_eq!(total, MoneyCents::new(i64::MAX));
        assert_eq!(category_breakdown(&txs, oct())[0].total, MoneyCents::new(i64::MAX));
        let summary = DashboardSummary::compute(&txs, None, today);
        assert_eq!(summary.balance, MoneyCents::new(i64::MIN + 1));
    }
}
