// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::FleetError;

/// Reporting granularity. Parsing rejects unknown values instead of
/// falling through to an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Daily,
    Monthly,
    Yearly,
}

impl FromStr for TimeRange {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(FleetError::InvalidTimeRange(other.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

/// Named chart indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Health,
    Pnl,
    CashFlow,
}

impl FromStr for Indicator {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Self::Health),
            "pnl" => Ok(Self::Pnl),
            "cashflow" => Ok(Self::CashFlow),
            other => Err(FleetError::InvalidIndicator(other.to_string())),
        }
    }
}

/// One accounting period's budgeted vs. actual performance. Monthly records
/// carry `month`; yearly aggregates leave it `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub month: Option<u32>, // 0-11
    pub year: i32,
    pub label: String,
    pub budget_trips: i64,
    pub actual_trips: i64,
    pub budget_revenue: i64,
    pub actual_revenue: i64,
    pub budget_expense: i64,
    pub actual_expense: i64,
    pub fuel_expense: i64,
    pub salary_expense: i64,
    pub maintenance_expense: i64,
    pub admin_expense: i64,
    pub other_expense: i64,
    pub health_score: i64,
    pub budget_health_score: i64,
    pub cash_inflow: i64,
    pub cash_outflow: i64,
    pub free_cash_flow: i64,
    pub cash_balance: i64,
    pub is_forecast: bool,
    pub is_current: bool,
}

/// Daily-granularity trip and money record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub label: String,
    pub budget_trips: i64,
    pub actual_trips: i64,
    pub completed_trips: i64,
    pub pending_trips: i64,
    pub revenue: i64,
    pub expense: i64,
    pub health_score: i64,
    pub budget_health_score: i64,
    pub is_forecast: bool,
    pub is_today: bool,
}

/// Static customer fixture; reference data, never generated.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub contact_person: &'static str,
    pub phone: &'static str,
    pub credit_days: i64,
    pub avg_trips_per_month: i64,
    pub avg_rate_per_trip: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

/// Invoice generated per customer per month from a seeded draw.
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_no: String,
    pub customer_id: &'static str,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total_amount: i64,
    pub status: InvoiceStatus,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentHistory {
    Good,
    Slow,
    Problematic,
}

impl PaymentHistory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Slow => "slow",
            Self::Problematic => "problematic",
        }
    }
}

/// Per-customer receivable aging snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerReceivable {
    pub customer_id: &'static str,
    pub customer_name: &'static str,
    pub customer_code: &'static str,
    pub total_owed: i64,
    pub current_amount: i64,
    pub overdue_amount: i64,
    pub oldest_overdue_days: i64,
    pub credit_days: i64,
    pub last_payment_date: NaiveDate,
    pub payment_history: PaymentHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayableCategory {
    Fuel,
    Salary,
    Maintenance,
    Insurance,
    Other,
}

/// A vendor obligation with due-date-relative fields computed against the
/// reference date.
#[derive(Debug, Clone, Serialize)]
pub struct PayableItem {
    pub id: &'static str,
    pub vendor: &'static str,
    pub category: PayableCategory,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub is_overdue: bool,
    pub is_priority: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    Critical,
    Warning,
    Caution,
    Normal,
}

impl CrisisLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Normal => "normal",
        }
    }
}

/// Point-in-time liquidity picture: cash position, receivable/payable aging
/// and a thresholded crisis classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowStatus {
    pub cash_on_hand: i64,
    pub min_cash_required: i64,
    pub cash_shortage: i64,
    pub total_receivable: i64,
    pub current_receivable: i64,
    pub overdue_receivable: i64,
    pub overdue_percent: i64,
    pub avg_collection_days: i64,
    pub total_payable: i64,
    pub urgent_payable: i64,
    pub overdue_payable: i64,
    pub crisis_level: CrisisLevel,
    pub days_until_crisis: i64,
}

/// Cross-sectional ratios combining cash, receivables and payables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub cash_on_hand: i64,
    pub cash_shortage: i64,
    pub crisis_level: CrisisLevel,
    pub days_until_crisis: i64,
    pub total_receivable: i64,
    pub overdue_receivable: i64,
    pub overdue_percent: i64,
    pub avg_collection_days: i64,
    pub problem_customers: usize,
    pub total_payable: i64,
    pub overdue_payable: i64,
    pub urgent_payable: i64,
    pub working_capital: i64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub monthly_revenue: i64,
    pub monthly_expense: i64,
    pub monthly_profit: i64,
    pub trips: i64,
    pub trip_variance_percent: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub trips: i64,
    pub success: i64,
    pub pending: i64,
    pub employees: i64,
    pub trip_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub total_invoices: usize,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub pending_amount: i64,
    pub overdue_amount: i64,
    pub collection_rate_percent: i64,
    pub invoices: Vec<Invoice>,
}

/// Current month vs. budget, as shown on the dashboard header card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub revenue: i64,
    pub budget_revenue: i64,
    pub revenue_variance_percent: i64,
    pub expense: i64,
    pub budget_expense: i64,
    pub expense_variance_percent: i64,
    pub profit: i64,
    pub trips: i64,
    pub budget_trips: i64,
    pub trip_variance_percent: i64,
    pub health_score: i64,
    pub cash_balance: i64,
}

/// Health banding used by the status cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Fit,
    Chill,
    Bad,
}

impl HealthStatus {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            Self::Fit
        } else if score >= 50 {
            Self::Chill
        } else {
            Self::Bad
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Chill => "chill",
            Self::Bad => "bad",
        }
    }
}

/// Trend direction on a manager KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub name: &'static str,
    pub value: f64,
    pub target: f64,
    pub unit: &'static str,
    pub trend: Trend,
}

/// Department manager card for the org view.
#[derive(Debug, Clone, Serialize)]
pub struct Manager {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub score: i64,
    pub health_status: HealthStatus,
    pub trend: Trend,
    pub kpis: Vec<Kpi>,
}

/// One point of the health-vs-budget chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPoint {
    pub date: String,
    pub actual: i64,
    pub budget: i64,
    pub is_forecast: bool,
    pub is_today: bool,
}

/// One point of the profit-and-loss chart, in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlPoint {
    pub date: String,
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
    pub is_forecast: bool,
    pub is_today: bool,
}

/// One point of the cash-flow chart, in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub date: String,
    pub cash_balance: f64,
    pub free_cash_flow: f64,
    pub is_forecast: bool,
    pub is_today: bool,
}

/// Indicator series, tagged by the indicator that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorSeries {
    Health(Vec<HealthPoint>),
    Pnl(Vec<PnlPoint>),
    CashFlow(Vec<CashFlowPoint>),
}
