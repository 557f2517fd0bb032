//! Generated fundamental and technical data for featured stocks.
//!
//! Five years of quarterly figures with Q4 seasonality, statements derived
//! from revenue with fixed margin assumptions, point-in-time technical
//! indicators, and oscillating historical series. All figures are in
//! billions of dollars unless noted. Generation is seeded per symbol, so a
//! given stock always reports the same numbers.

use serde::{Deserialize, Serialize};

use crate::rng::DeterministicRng;
use crate::stocks::FeaturedStock;

/// Top-line quarterly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyFinancial {
    /// Quarter label, e.g. "Q4 2025".
    pub quarter: String,
    /// Revenue in billions of dollars, as are the other line items.
    pub revenue: f64,
    pub expenses: f64,
    pub ebitda: f64,
    pub net_income: f64,
}

/// Income statement line items for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub quarter: String,
    pub revenue: f64,
    pub cost_of_revenue: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub operating_income: f64,
    pub interest_expense: f64,
    pub taxes_paid: f64,
    pub net_income: f64,
}

/// Balance sheet snapshot for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub quarter: String,
    pub total_assets: f64,
    pub current_assets: f64,
    pub total_liabilities: f64,
    pub current_liabilities: f64,
    pub total_equity: f64,
    pub cash_and_equivalents: f64,
    pub accounts_receivable: f64,
    pub inventory: f64,
}

/// Cash flow statement for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub quarter: String,
    pub operating_cash_flow: f64,
    pub capital_expenditures: f64,
    pub free_cash_flow: f64,
    pub financing_cash_flow: f64,
    pub investing_cash_flow: f64,
    pub ending_cash_balance: f64,
}

/// Point-in-time technical indicator readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    /// Relative strength index, 0-100.
    pub rsi: f64,
    /// MACD line value.
    pub macd: f64,
    /// MACD signal line value.
    pub macd_signal: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
    /// 20-day simple moving average.
    pub sma20: f64,
    /// 50-day simple moving average.
    pub sma50: f64,
    /// 200-day simple moving average.
    pub sma200: f64,
}

/// Valuation and balance-sheet ratios derived from the latest quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    pub pe: f64,
    pub peg: f64,
    pub ps: f64,
    pub pb: f64,
    pub pcf: f64,
    /// Return on equity, percent.
    pub roe: f64,
    /// Return on assets, percent.
    pub roa: f64,
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
}

/// One day of historical technical readings, `days_ago` before the present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTechnical {
    pub days_ago: u32,
    pub rsi: f64,
    pub macd: f64,
    pub bollinger_middle: f64,
}

/// One day of historical valuation ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRatio {
    pub days_ago: u32,
    pub pe: f64,
    pub ps: f64,
    pub pb: f64,
    pub roe: f64,
    pub debt_to_equity: f64,
}

/// Full generated dataset for one featured stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Financials {
    pub quarterly: Vec<QuarterlyFinancial>,
    pub income_statement: Vec<IncomeStatement>,
    pub balance_sheet: Vec<BalanceSheet>,
    pub cash_flow: Vec<CashFlow>,
    pub technical: TechnicalIndicators,
    pub ratios: FinancialRatios,
    pub historical_technical: Vec<HistoricalTechnical>,
    pub historical_ratios: Vec<HistoricalRatio>,
}

/// Historical series length: three years of daily data.
pub const HISTORY_DAYS: u32 = 1095;

impl Financials {
    /// Generate the full dataset for a featured stock, ending at `base_year`.
    ///
    /// Seeded by symbol: calling this twice for the same stock yields
    /// identical data.
    #[must_use]
    pub fn generate(stock: &FeaturedStock, base_year: u16) -> Self {
        let mut rng = DeterministicRng::for_symbol(stock.symbol);

        let quarterly =
            generate_quarterly(&mut rng, stock.base_revenue, stock.volatility, base_year);
        let income_statement = derive_income_statement(&quarterly);
        let balance_sheet = derive_balance_sheet(&quarterly);
        let cash_flow = derive_cash_flow(&mut rng, &quarterly);
        let technical = generate_technical(&mut rng);

        // Ratios come off the most recent quarter. Quarterly data is never
        // empty (20 quarters), so the unwraps below cannot fire.
        let latest_income = income_statement
            .last()
            .cloned()
            .expect("quarterly generation always yields 20 quarters");
        let latest_balance = balance_sheet
            .last()
            .cloned()
            .expect("quarterly generation always yields 20 quarters");
        let ratios = derive_ratios(stock.current_price, &latest_income, &latest_balance);

        let historical_technical = generate_historical_technical(&mut rng, HISTORY_DAYS);
        let historical_ratios = generate_historical_ratios(&mut rng, HISTORY_DAYS);

        Self {
            quarterly,
            income_statement,
            balance_sheet,
            cash_flow,
            technical,
            ratios,
            historical_technical,
            historical_ratios,
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Five years of quarterly top-line data with Q4 seasonality and ~8% annual
/// growth toward the base year.
fn generate_quarterly(
    rng: &mut DeterministicRng,
    base_revenue: f64,
    volatility: f64,
    base_year: u16,
) -> Vec<QuarterlyFinancial> {
    let mut data = Vec::with_capacity(20);
    for year in (base_year - 4)..=base_year {
        for q in 1..=4u8 {
            let seasonality = match q {
                4 => 1.15,
                1 => 0.95,
                _ => 1.0,
            };
            let variance = 1.0 + (rng.next_f64() - 0.5) * volatility;
            let growth = 1.0 + f64::from(i32::from(year) - i32::from(base_year)) * 0.08;
            let revenue = base_revenue * seasonality * variance * growth;
            let expenses = revenue * (0.55 + rng.next_f64() * 0.1);
            let ebitda = (revenue - expenses) * (1.0 + rng.next_f64() * 0.2);
            let net_income = ebitda * 0.65 * (1.0 + rng.next_f64() * 0.15);

            data.push(QuarterlyFinancial {
                quarter: format!("Q{q} {year}"),
                revenue: round1(revenue),
                expenses: round1(expenses),
                ebitda: round1(ebitda),
                net_income: round1(net_income),
            });
        }
    }
    data
}

fn derive_income_statement(quarterly: &[QuarterlyFinancial]) -> Vec<IncomeStatement> {
    quarterly
        .iter()
        .map(|q| IncomeStatement {
            quarter: q.quarter.clone(),
            revenue: q.revenue,
            cost_of_revenue: q.revenue * 0.45,
            gross_profit: q.revenue * 0.55,
            operating_expenses: q.expenses * 0.7,
            operating_income: q.ebitda * 0.85,
            interest_expense: q.revenue * 0.02,
            taxes_paid: q.net_income * 0.21,
            net_income: q.net_income,
        })
        .collect()
}

fn derive_balance_sheet(quarterly: &[QuarterlyFinancial]) -> Vec<BalanceSheet> {
    quarterly
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let asset_multiplier = 1.0 + i as f64 * 0.02;
            BalanceSheet {
                quarter: q.quarter.clone(),
                total_assets: q.revenue * 4.0 * asset_multiplier,
                current_assets: q.revenue * 2.0 * asset_multiplier,
                total_liabilities: q.revenue * 1.5 * asset_multiplier,
                current_liabilities: q.revenue * 0.8 * asset_multiplier,
                total_equity: q.revenue * 2.5 * asset_multiplier,
                cash_and_equivalents: q.revenue * 0.5 * asset_multiplier,
                accounts_receivable: q.revenue * 0.35 * asset_multiplier,
                inventory: q.revenue * 0.3 * asset_multiplier,
            }
        })
        .collect()
}

fn derive_cash_flow(rng: &mut DeterministicRng, quarterly: &[QuarterlyFinancial]) -> Vec<CashFlow> {
    quarterly
        .iter()
        .enumerate()
        .map(|(i, q)| CashFlow {
            quarter: q.quarter.clone(),
            operating_cash_flow: q.net_income * 1.2 + rng.next_f64() * 5.0,
            capital_expenditures: q.revenue * 0.08,
            free_cash_flow: q.net_income * 1.1,
            financing_cash_flow: -(q.revenue * 0.02),
            investing_cash_flow: -(q.revenue * 0.05),
            ending_cash_balance: 50.0 + i as f64 * 0.5,
        })
        .collect()
}

fn generate_technical(rng: &mut DeterministicRng) -> TechnicalIndicators {
    TechnicalIndicators {
        rsi: rng.next_f64_range(40.0, 70.0),
        macd: rng.next_f64_range(-2.0, 2.0),
        macd_signal: rng.next_f64_range(-1.0, 1.0),
        bollinger_upper: rng.next_f64_range(200.0, 250.0),
        bollinger_middle: rng.next_f64_range(170.0, 220.0),
        bollinger_lower: rng.next_f64_range(150.0, 190.0),
        sma20: rng.next_f64_range(165.0, 215.0),
        sma50: rng.next_f64_range(160.0, 210.0),
        sma200: rng.next_f64_range(155.0, 205.0),
    }
}

/// Ratio floors keep the simplified share-count model (2.5B shares) from
/// producing implausible multiples.
fn derive_ratios(
    current_price: f64,
    income: &IncomeStatement,
    balance: &BalanceSheet,
) -> FinancialRatios {
    let eps = income.net_income / 2.5;
    let pe = current_price / eps;
    let ps = current_price / (income.revenue / 2.5);
    let pb = current_price / (balance.total_equity / 2.5);
    let pcf = current_price / (balance.total_equity * 0.3);

    FinancialRatios {
        pe: pe.max(5.0),
        peg: pe / 20.0,
        ps: ps.max(2.0),
        pb: pb.max(1.5),
        pcf: pcf.max(8.0),
        roe: (income.net_income / balance.total_equity) * 100.0,
        roa: (income.net_income / balance.total_assets) * 100.0,
        debt_to_equity: balance.total_liabilities / balance.total_equity,
        current_ratio: balance.current_assets / balance.current_liabilities,
        quick_ratio: (balance.current_assets - balance.inventory) / balance.current_liabilities,
    }
}

fn generate_historical_technical(
    rng: &mut DeterministicRng,
    days: u32,
) -> Vec<HistoricalTechnical> {
    let mut data = Vec::with_capacity(days as usize);
    for i in (0..days).rev() {
        let day_fraction = f64::from(i) / f64::from(days);
        let trend = (day_fraction * std::f64::consts::PI * 4.0).sin() * 20.0;
        data.push(HistoricalTechnical {
            days_ago: i,
            rsi: 50.0 + trend + (rng.next_f64() - 0.5) * 15.0,
            macd: trend / 10.0 + (rng.next_f64() - 0.5) * 0.5,
            bollinger_middle: 170.0 + trend + (rng.next_f64() - 0.5) * 20.0,
        });
    }
    data
}

fn generate_historical_ratios(rng: &mut DeterministicRng, days: u32) -> Vec<HistoricalRatio> {
    let mut data = Vec::with_capacity(days as usize);
    for i in (0..days).rev() {
        let day_fraction = f64::from(i) / f64::from(days);
        let trend = (day_fraction * std::f64::consts::PI * 2.0).sin() * 3.0;
        data.push(HistoricalRatio {
            days_ago: i,
            pe: 20.0 + trend + (rng.next_f64() - 0.5) * 5.0,
            ps: 4.0 + trend * 0.2 + (rng.next_f64() - 0.5) * 1.0,
            pb: 3.0 + trend * 0.15 + (rng.next_f64() - 0.5) * 0.8,
            roe: 15.0 + trend + (rng.next_f64() - 0.5) * 5.0,
            debt_to_equity: 0.5 + trend * 0.05 + (rng.next_f64() - 0.5) * 0.2,
        });
    }
    data
}
