// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

use crate::models::{
    Customer, HealthStatus, Kpi, Manager, PayableCategory, Trend,
};

/// Baseline business assumptions for the 650-trips-per-month fleet.
pub const BASE_TRIPS_PER_MONTH: i64 = 650;
pub const AVG_REVENUE_PER_TRIP: i64 = 10_500;
pub const AVG_COST_PER_TRIP: i64 = 7_800;
pub const WORKING_DAYS_PER_MONTH: i64 = 26;

/// Health target every period is budgeted against.
pub const BUDGET_HEALTH_SCORE: i64 = 80;

/// Headcount: 7 managers + 14 staff + 30 drivers + 17 admin/support.
pub const TOTAL_EMPLOYEES: i64 = 68;

/// The five contract customers. Immutable reference data.
pub static CUSTOMERS: [Customer; 5] = [
    Customer {
        id: "C001",
        name: "Siam Cement Group",
        code: "SCG",
        contact_person: "Somsak P.",
        phone: "02-123-4567",
        credit_days: 30,
        avg_trips_per_month: 180,
        avg_rate_per_trip: 12_000,
    },
    Customer {
        id: "C002",
        name: "CP All Plc.",
        code: "CPALL",
        contact_person: "Wilai K.",
        phone: "02-234-5678",
        credit_days: 45,
        avg_trips_per_month: 200,
        avg_rate_per_trip: 8_500,
    },
    Customer {
        id: "C003",
        name: "Thai Beverage Plc.",
        code: "THAIBEV",
        contact_person: "Prasert T.",
        phone: "02-345-6789",
        credit_days: 30,
        avg_trips_per_month: 150,
        avg_rate_per_trip: 9_500,
    },
    Customer {
        id: "C004",
        name: "Central Retail Corp.",
        code: "CRC",
        contact_person: "Napha S.",
        phone: "02-456-7890",
        credit_days: 60,
        avg_trips_per_month: 80,
        avg_rate_per_trip: 15_000,
    },
    Customer {
        id: "C005",
        name: "Big C Supercenter",
        code: "BIGC",
        contact_person: "Manee R.",
        phone: "02-567-8901",
        credit_days: 45,
        avg_trips_per_month: 90,
        avg_rate_per_trip: 11_000,
    },
];

/// When a payable falls due, relative to the reference date.
#[derive(Debug, Clone, Copy)]
pub enum DueRule {
    /// Fixed offset in days; negative means already overdue.
    OffsetDays(i64),
    /// Last day of the reference month (payroll).
    MonthEnd,
}

/// Vendor obligation template; due dates are resolved against the reference
/// date by `snapshot::payables`.
#[derive(Debug, Clone, Copy)]
pub struct PayableSpec {
    pub id: &'static str,
    pub vendor: &'static str,
    pub category: PayableCategory,
    pub amount: i64,
    pub due: DueRule,
    pub is_priority: bool,
}

pub static PAYABLE_SPECS: [PayableSpec; 7] = [
    PayableSpec {
        id: "AP001",
        vendor: "PTT fuel credit line",
        category: PayableCategory::Fuel,
        amount: 1_850_000,
        due: DueRule::OffsetDays(3),
        is_priority: true,
    },
    PayableSpec {
        id: "AP002",
        vendor: "Staff payroll",
        category: PayableCategory::Salary,
        amount: 2_400_000,
        due: DueRule::MonthEnd,
        is_priority: true,
    },
    PayableSpec {
        id: "AP003",
        vendor: "Heng Auto Parts garage",
        category: PayableCategory::Maintenance,
        amount: 680_000,
        due: DueRule::OffsetDays(-15),
        is_priority: false,
    },
    PayableSpec {
        id: "AP004",
        vendor: "Thai Tyre Co.",
        category: PayableCategory::Maintenance,
        amount: 520_000,
        due: DueRule::OffsetDays(-8),
        is_priority: false,
    },
    PayableSpec {
        id: "AP005",
        vendor: "Vehicle insurance (installment 2)",
        category: PayableCategory::Insurance,
        amount: 450_000,
        due: DueRule::OffsetDays(12),
        is_priority: false,
    },
    PayableSpec {
        id: "AP006",
        vendor: "Office and yard rent",
        category: PayableCategory::Other,
        amount: 180_000,
        due: DueRule::OffsetDays(5),
        is_priority: false,
    },
    PayableSpec {
        id: "AP007",
        vendor: "Phone and internet",
        category: PayableCategory::Other,
        amount: 35_000,
        due: DueRule::OffsetDays(10),
        is_priority: false,
    },
];

/// Department manager cards for the org view. Scores are fixed fixtures;
/// only the health banding is derived.
pub static MANAGERS: Lazy<Vec<Manager>> = Lazy::new(|| {
    let card = |id, name, position, department, score, trend, kpis: Vec<Kpi>| Manager {
        id,
        name,
        position,
        department,
        score,
        health_status: HealthStatus::from_score(score),
        trend,
        kpis,
    };
    let kpi = |name, value: f64, target: f64, unit, trend| Kpi {
        name,
        value,
        target,
        unit,
        trend,
    };
    vec![
        card(
            "1",
            "Somchai Wisetkul",
            "General Manager",
            "Executive",
            85,
            Trend::Up,
            vec![
                kpi("Company score", 85.0, 80.0, "%", Trend::Up),
                kpi("Decision speed", 92.0, 85.0, "%", Trend::Up),
                kpi("Strategic targets", 78.0, 75.0, "%", Trend::Stable),
            ],
        ),
        card(
            "2",
            "Wipha Khonsongdi",
            "Transport Manager",
            "Operations",
            72,
            Trend::Stable,
            vec![
                kpi("On-time delivery", 88.0, 95.0, "%", Trend::Down),
                kpi("Fleet utilisation", 75.0, 80.0, "%", Trend::Stable),
                kpi("Route efficiency", 68.0, 70.0, "%", Trend::Up),
            ],
        ),
        card(
            "3",
            "Mana Ngoenthong",
            "Finance Manager",
            "Finance",
            91,
            Trend::Up,
            vec![
                kpi("Cash flow", 95.0, 90.0, "%", Trend::Up),
                kpi("Budget usage", 88.0, 85.0, "%", Trend::Stable),
                kpi("Collection rate", 92.0, 90.0, "%", Trend::Up),
            ],
        ),
        card(
            "4",
            "Suda Banchikan",
            "Accounting Manager",
            "Accounting",
            88,
            Trend::Stable,
            vec![
                kpi("Accuracy", 99.0, 98.0, "%", Trend::Stable),
                kpi("Reports on time", 85.0, 90.0, "%", Trend::Up),
                kpi("Compliance", 92.0, 95.0, "%", Trend::Stable),
            ],
        ),
        card(
            "5",
            "Pimjai Raksakhon",
            "HR Manager",
            "Human Resources",
            45,
            Trend::Down,
            vec![
                kpi("Turnover rate", 15.0, 8.0, "%", Trend::Down),
                kpi("Time to hire", 42.0, 30.0, "days", Trend::Down),
                kpi("Staff satisfaction", 58.0, 75.0, "%", Trend::Down),
            ],
        ),
        card(
            "6",
            "Changchai Somkeng",
            "Maintenance Manager",
            "Maintenance",
            67,
            Trend::Up,
            vec![
                kpi("Fleet availability", 82.0, 90.0, "%", Trend::Up),
                kpi("Maintenance cost", 72.0, 80.0, "%", Trend::Stable),
                kpi("Response time", 65.0, 60.0, "min", Trend::Up),
            ],
        ),
        card(
            "7",
            "Market Talardrung",
            "Marketing Manager",
            "Marketing",
            78,
            Trend::Up,
            vec![
                kpi("Lead generation", 120.0, 100.0, "leads", Trend::Up),
                kpi("Conversion rate", 8.5, 10.0, "%", Trend::Stable),
                kpi("Brand awareness", 72.0, 75.0, "%", Trend::Up),
            ],
        ),
    ]
});
