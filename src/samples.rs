//! Fixed sample data backing the dashboard until the reporting backend
//! feeds it live numbers.

use crate::models::Series;
use serde::Serialize;

/// Monthly active clients, January through December.
pub fn active_clients() -> Series {
    let values = vec![
        90.0, 45.0, 100.0, 35.0, 95.0, 75.0, 240.0, 140.0, 85.0, 50.0, 275.0, 120.0,
    ];
    let labels = [
        "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    Series::new(values, labels).expect("sample lengths match")
}

/// Credits disbursed across the current week.
pub fn disbursed_credits() -> Series {
    let values = vec![20.0, 45.0, 60.0, 75.0, 80.0, 85.0, 90.0];
    let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Series::new(values, labels).expect("sample lengths match")
}

/// One headline card on the dashboard: a peso amount and its percentage
/// change against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioCard {
    pub title: &'static str,
    pub amount: f64,
    pub trend_pct: f64,
}

/// The four portfolio cards shown on the admin dashboard.
pub fn portfolio_cards() -> [PortfolioCard; 4] {
    [
        PortfolioCard {
            title: "Cartera vigente",
            amount: 124_043.0,
            trend_pct: 32.0,
        },
        PortfolioCard {
            title: "Monto cobrado",
            amount: 37_943.0,
            trend_pct: 24.0,
        },
        PortfolioCard {
            title: "Cartera en mora",
            amount: 24_043.0,
            trend_pct: -12.0,
        },
        PortfolioCard {
            title: "Monto recuperado",
            amount: 17_943.0,
            trend_pct: 32.0,
        },
    ]
}
