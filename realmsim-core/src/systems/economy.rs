//! Economy system - budget aggregation, loans, inflation and bankruptcy.

use realmdata::defines::{bankruptcy, economy as defines};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    Taxation,
    Production,
    Trade,
    Gold,
    Tribute,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    ArmyMaintenance,
    NavyMaintenance,
    FortMaintenance,
    Advisors,
    Interest,
    Other,
}

/// A monthly income line. `total = base_value * (1 + modifiers / 100)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: String,
    pub category: IncomeCategory,
    pub base_value: f64,
    /// Percent.
    pub modifiers: f64,
    pub total: f64,
}

impl IncomeSource {
    pub fn new(id: impl Into<String>, category: IncomeCategory, base_value: f64, modifiers: f64) -> Self {
        Self {
            id: id.into(),
            category,
            base_value,
            modifiers,
            total: apply_modifier(base_value, modifiers),
        }
    }
}

/// A monthly expense line. `total = base_value * (1 + modifiers / 100)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSource {
    pub id: String,
    pub category: ExpenseCategory,
    pub base_value: f64,
    pub modifiers: f64,
    pub total: f64,
}

impl ExpenseSource {
    pub fn new(id: impl Into<String>, category: ExpenseCategory, base_value: f64, modifiers: f64) -> Self {
        Self {
            id: id.into(),
            category,
            base_value,
            modifiers,
            total: apply_modifier(base_value, modifiers),
        }
    }
}

/// `value * (1 + percent / 100)`.
pub fn apply_modifier(value: f64, percent: f64) -> f64 {
    value * (1.0 + percent / 100.0)
}

/// Ceiling that ignores float noise below a millionth, so `600 * 1.1`
/// rounds up to 660 rather than 661.
pub fn round_up(value: f64) -> f64 {
    ((value * 1e6).round() / 1e6).ceil()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub principal: f64,
    /// Yearly percent.
    pub interest_rate: f64,
    pub months_remaining: u32,
}

impl Loan {
    pub fn monthly_interest(&self) -> f64 {
        calculate_loan_interest(self.principal, self.interest_rate)
    }
}

pub fn calculate_total_income(sources: &[IncomeSource]) -> f64 {
    sources.iter().map(|s| s.total).sum()
}

pub fn calculate_total_expenses(sources: &[ExpenseSource]) -> f64 {
    sources.iter().map(|s| s.total).sum()
}

pub fn calculate_balance(income: f64, expenses: f64) -> f64 {
    income - expenses
}

/// A country's monthly books.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub income: Vec<IncomeSource>,
    pub expenses: Vec<ExpenseSource>,
    pub loans: Vec<Loan>,
    pub treasury: f64,
    /// Percent.
    pub inflation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_income: f64,
    /// Listed expenses plus loan interest.
    pub total_expenses: f64,
    pub loan_interest: f64,
    pub balance: f64,
    pub debt: f64,
    pub payoff_months: f64,
    pub health: EconomicHealth,
    /// No loan room left and spending more than it earns.
    pub bankrupt: bool,
}

impl Budget {
    pub fn total_debt(&self) -> f64 {
        self.loans.iter().map(|l| l.principal).sum()
    }

    /// Loan room under the default cap.
    pub fn can_take_loan(&self) -> bool {
        can_take_loan(self.loans.len() as u32, defines::MAX_LOANS)
    }

    #[instrument(skip_all, name = "budget_summary")]
    pub fn summary(&self) -> BudgetSummary {
        let total_income = calculate_total_income(&self.income);
        let loan_interest: f64 = self.loans.iter().map(Loan::monthly_interest).sum();
        let total_expenses = calculate_total_expenses(&self.expenses) + loan_interest;
        let balance = calculate_balance(total_income, total_expenses);
        let debt = self.total_debt();
        let health = get_economic_health(self.loans.len() as u32, self.inflation);
        let bankrupt = is_bankrupt(self.can_take_loan(), balance);
        log::debug!(
            "Budget: income {:.2}, expenses {:.2}, balance {:.2}, {} loans ({:?})",
            total_income,
            total_expenses,
            balance,
            self.loans.len(),
            health
        );
        BudgetSummary {
            total_income,
            total_expenses,
            loan_interest,
            balance,
            debt,
            payoff_months: if debt > 0.0 {
                calculate_payoff_time(debt, balance)
            } else {
                0.0
            },
            health,
            bankrupt,
        }
    }
}

/// Size of a new loan: five months of income, shrunk by inflation.
pub fn calculate_loan_size(monthly_income: f64, inflation: f64) -> f64 {
    (defines::LOAN_SIZE_INCOME_MONTHS * monthly_income * (1.0 - inflation / 100.0))
        .floor()
        .max(0.0)
}

/// Monthly interest on `principal` at a yearly `rate` percent.
pub fn calculate_loan_interest(principal: f64, rate: f64) -> f64 {
    principal * rate / 100.0 / defines::MONTHS_PER_YEAR
}

/// Yearly rate offered for the next loan.
pub fn calculate_interest_rate(existing_loans: u32, modifiers: f64) -> f64 {
    apply_modifier(
        defines::BASE_INTEREST_RATE + defines::INTEREST_PER_LOAN * existing_loans as f64,
        modifiers,
    )
    .max(0.0)
}

pub fn can_take_loan(existing_loans: u32, max_loans: u32) -> bool {
    existing_loans < max_loans
}

/// Bankruptcy is the caller's call; this is the usual trigger.
pub fn is_bankrupt(can_take_loan: bool, balance: f64) -> bool {
    !can_take_loan && balance < 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankruptcyEffects {
    pub stability_change: i32,
    pub prestige_change: f64,
    pub inflation_change: f64,
    pub clears_loans: bool,
    pub duration_months: u32,
    /// Percent, for the duration.
    pub tax_modifier: f64,
    pub interest_modifier: f64,
}

pub fn get_bankruptcy_effects() -> BankruptcyEffects {
    BankruptcyEffects {
        stability_change: bankruptcy::STABILITY_CHANGE,
        prestige_change: bankruptcy::PRESTIGE_CHANGE,
        inflation_change: bankruptcy::INFLATION_CHANGE,
        clears_loans: true,
        duration_months: bankruptcy::DURATION_MONTHS,
        tax_modifier: bankruptcy::TAX_MODIFIER,
        interest_modifier: bankruptcy::INTEREST_MODIFIER,
    }
}

/// Months to clear `debt` from the monthly surplus. Infinite without a surplus.
pub fn calculate_payoff_time(debt: f64, balance: f64) -> f64 {
    if balance <= 0.0 {
        return f64::INFINITY;
    }
    round_up(debt.max(0.0) / balance)
}

/// Monthly inflation (percent) caused by gold's share of income.
pub fn calculate_inflation_from_gold(gold_income: f64, total_income: f64) -> f64 {
    if total_income <= 0.0 {
        return 0.0;
    }
    (gold_income / total_income * defines::GOLD_INFLATION_FACTOR * 100.0 / defines::MONTHS_PER_YEAR)
        .max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicHealth {
    Critical,
    Poor,
    Strained,
    Stable,
    Healthy,
}

impl EconomicHealth {
    pub fn label(self) -> &'static str {
        match self {
            EconomicHealth::Critical => "Critical",
            EconomicHealth::Poor => "Poor",
            EconomicHealth::Strained => "Strained",
            EconomicHealth::Stable => "Stable",
            EconomicHealth::Healthy => "Healthy",
        }
    }
}

/// First matching band wins, worst first.
pub fn get_economic_health(loans: u32, inflation: f64) -> EconomicHealth {
    let bands = [
        (defines::CRITICAL_THRESHOLD, EconomicHealth::Critical),
        (defines::POOR_THRESHOLD, EconomicHealth::Poor),
        (defines::STRAINED_THRESHOLD, EconomicHealth::Strained),
        (defines::STABLE_THRESHOLD, EconomicHealth::Stable),
    ];
    bands
        .iter()
        .find(|((max_loans, max_inflation), _)| loans >= *max_loans || inflation >= *max_inflation)
        .map(|(_, health)| *health)
        .unwrap_or(EconomicHealth::Healthy)
}
