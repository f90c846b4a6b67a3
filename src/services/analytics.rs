// src/services/analytics.rs
//
// Agregações puras usadas pelos gráficos e relatórios. Recebem a lista
// inteira da coleção (já carregada) e não tocam em I/O.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::models::{
    activity::Activity,
    dashboard::{AmountEntry, CompanyTotal, CountEntry, DashboardStats, WinLoss},
    deal::{Deal, DealStatus},
    tax::{TaxRecord, TaxStatus, TaxType},
};

pub const TOP_COMPANIES_LIMIT: usize = 5;
pub const RECENT_ACTIVITIES_LIMIT: usize = 10;

#[derive(Clone, Copy)]
enum MonthFormat {
    Short, // "Jan"
    Long,  // "January"
}

fn month_label(month: u32, format: MonthFormat) -> String {
    let pattern = match format {
        MonthFormat::Short => "%b",
        MonthFormat::Long => "%B",
    };
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format(pattern).to_string())
        .unwrap_or_default()
}

// Soma por mês do calendário; a saída segue a ordem Jan..Dez.
fn sum_by_month(items: impl Iterator<Item = (NaiveDate, Decimal)>, format: MonthFormat) -> Vec<AmountEntry> {
    let mut totals: BTreeMap<u32, Decimal> = BTreeMap::new();
    for (date, amount) in items {
        *totals.entry(date.month()).or_default() += amount;
    }

    totals
        .into_iter()
        .map(|(month, total)| AmountEntry { label: month_label(month, format), total })
        .collect()
}

// Contagem em baldes abertos, na ordem em que cada rótulo aparece pela primeira vez.
fn count_open_buckets<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = Vec::new();
    for label in labels {
        match entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => entries.push(CountEntry { label: label.to_string(), count: 1 }),
        }
    }
    entries
}

/// Funil: seis baldes fixos, sempre presentes, zerados de início.
pub fn pipeline_by_stage(deals: &[Deal]) -> Vec<CountEntry> {
    DealStatus::ALL
        .iter()
        .map(|&status| CountEntry {
            label: status.label().to_string(),
            count: deals.iter().filter(|d| d.status == status).count(),
        })
        .collect()
}

/// Ganhos x perdidos. Qualquer outro estágio fica de fora.
pub fn win_loss(deals: &[Deal]) -> WinLoss {
    deals.iter().fold(WinLoss::default(), |mut acc, deal| {
        match deal.status {
            DealStatus::ClosedWon => acc.won += 1,
            DealStatus::ClosedLost => acc.lost += 1,
            _ => {}
        }
        acc
    })
}

/// Receita mensal: negócios ganhos com fechamento previsto no ano de `today`.
/// Negócios de outros anos ficam fora deste gráfico.
pub fn monthly_revenue(deals: &[Deal], today: NaiveDate) -> Vec<AmountEntry> {
    let year = today.year();
    let items = deals
        .iter()
        .filter(|d| d.status == DealStatus::ClosedWon)
        .filter_map(|d| d.expected_close_date.map(|date| (date, d.value)))
        .filter(|(date, _)| date.year() == year);

    sum_by_month(items, MonthFormat::Short)
}

/// Tipos das últimas atividades (as 10 mais recentes). Baldes abertos:
/// todo tipo que aparece é mantido.
pub fn activity_by_type(activities: &[Activity]) -> Vec<CountEntry> {
    let mut recent: Vec<&Activity> = activities.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(RECENT_ACTIVITIES_LIMIT);

    count_open_buckets(recent.into_iter().map(|a| a.activity_type.as_str()))
}

/// Soma do valor base por tipo de imposto (só os tipos presentes).
pub fn tax_by_type(records: &[TaxRecord]) -> Vec<AmountEntry> {
    TaxType::ALL
        .iter()
        .filter_map(|&tax_type| {
            let mut matching = records.iter().filter(|r| r.tax_type == tax_type).peekable();
            matching.peek()?;
            Some(AmountEntry {
                label: tax_type.label().to_string(),
                total: matching.map(|r| r.amount).sum(),
            })
        })
        .collect()
}

/// Status dos impostos: baldes fixos paid, pending, overdue.
pub fn tax_by_status(records: &[TaxRecord]) -> Vec<CountEntry> {
    TaxStatus::CHART_ORDER
        .iter()
        .map(|&status| CountEntry {
            label: status.as_str().to_string(),
            count: records.iter().filter(|r| r.status == status).count(),
        })
        .collect()
}

/// Valor base por mês de vencimento, SEM filtro de ano: janeiro de anos
/// diferentes cai no mesmo balde. Registros sem vencimento são ignorados.
pub fn monthly_tax_amount(records: &[TaxRecord]) -> Vec<AmountEntry> {
    let items = records
        .iter()
        .filter_map(|r| r.due_date.map(|date| (date, r.amount)));

    sum_by_month(items, MonthFormat::Short)
}

/// Contagem por estágio, só os estágios que aparecem (tabela do relatório).
pub fn deals_by_status(deals: &[Deal]) -> Vec<CountEntry> {
    DealStatus::ALL
        .iter()
        .filter_map(|&status| {
            let count = deals.iter().filter(|d| d.status == status).count();
            (count > 0).then(|| CountEntry { label: status.as_str().to_string(), count })
        })
        .collect()
}

pub fn total_value(deals: &[Deal]) -> Decimal {
    deals.iter().map(|d| d.value).sum()
}

/// Valor por mês (nome completo) do fechamento previsto, qualquer ano e estágio.
pub fn monthly_deal_value(deals: &[Deal]) -> Vec<AmountEntry> {
    let items = deals
        .iter()
        .filter_map(|d| d.expected_close_date.map(|date| (date, d.value)));

    sum_by_month(items, MonthFormat::Long)
}

/// Ranking de empresas por valor total, decrescente, no máximo `limit`.
/// Empates mantêm a ordem em que a empresa apareceu. Negócios sem empresa ficam de fora.
pub fn top_companies(deals: &[Deal], limit: usize) -> Vec<CompanyTotal> {
    let mut totals: Vec<CompanyTotal> = Vec::new();

    for deal in deals {
        let Some(company) = deal.company.as_deref().filter(|c| !c.trim().is_empty()) else {
            continue;
        };

        match totals.iter_mut().find(|t| t.company == company) {
            Some(entry) => {
                entry.total_value += deal.value;
                entry.deals_count += 1;
            }
            None => totals.push(CompanyTotal {
                company: company.to_string(),
                total_value: deal.value,
                deals_count: 1,
            }),
        }
    }

    // sort_by é estável
    totals.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    totals.truncate(limit);
    totals
}

/// Percentual de negócios ganhos sobre o total; 0 sem negócios.
pub fn conversion_rate(deals: &[Deal]) -> f64 {
    if deals.is_empty() {
        return 0.0;
    }
    let won = deals.iter().filter(|d| d.status == DealStatus::ClosedWon).count();
    (won as f64 / deals.len() as f64) * 100.0
}

pub fn dashboard_stats(total_contacts: usize, deals: &[Deal]) -> DashboardStats {
    DashboardStats {
        total_contacts,
        total_deals: deals.len(),
        active_deals: deals.iter().filter(|d| d.status.is_active()).count(),
        total_value: total_value(deals),
    }
}

/// Imposto = valor × alíquota / 100, arredondado em 2 casas ("180.00").
pub fn tax_amount(amount: Decimal, tax_rate: Decimal) -> String {
    let value = (amount * tax_rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn d(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn deal(status: DealStatus, value: Decimal, company: Option<&str>, close: Option<NaiveDate>) -> Deal {
        Deal {
            id: Uuid::new_v4(),
            title: "deal".into(),
            value,
            status,
            company: company.map(str::to_string),
            contact_person: None,
            expected_close_date: close,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn tax(tax_type: TaxType, status: TaxStatus, amount: Decimal, due: Option<NaiveDate>) -> TaxRecord {
        TaxRecord {
            id: Uuid::new_v4(),
            client_name: "client".into(),
            gst_number: None,
            pan_number: None,
            tax_type,
            amount,
            tax_rate: d("18"),
            tax_amount: tax_amount(amount, d("18")),
            due_date: due,
            status,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pipeline_counts_sum_to_known_deals() {
        let deals = vec![
            deal(DealStatus::New, d("1"), None, None),
            deal(DealStatus::New, d("1"), None, None),
            deal(DealStatus::Negotiation, d("1"), None, None),
            deal(DealStatus::ClosedLost, d("1"), None, None),
        ];

        let pipeline = pipeline_by_stage(&deals);

        assert_eq!(pipeline.len(), 6);
        assert_eq!(pipeline.iter().map(|e| e.count).sum::<usize>(), deals.len());
        assert_eq!(pipeline[0], CountEntry { label: "New".into(), count: 2 });
        assert_eq!(pipeline[1].count, 0);
        assert_eq!(pipeline[4].label, "Closed Won");
    }

    #[test]
    fn pipeline_of_nothing_is_six_zeroes() {
        let pipeline = pipeline_by_stage(&[]);
        assert_eq!(pipeline.len(), 6);
        assert!(pipeline.iter().all(|e| e.count == 0));
    }

    #[test]
    fn win_loss_ignores_open_deals() {
        let deals = vec![
            deal(DealStatus::ClosedWon, d("1"), None, None),
            deal(DealStatus::ClosedWon, d("1"), None, None),
            deal(DealStatus::ClosedLost, d("1"), None, None),
            deal(DealStatus::Qualified, d("1"), None, None),
            deal(DealStatus::Proposition, d("1"), None, None),
        ];

        assert_eq!(win_loss(&deals), WinLoss { won: 2, lost: 1 });
    }

    #[test]
    fn conversion_rate_is_zero_without_deals() {
        assert_eq!(conversion_rate(&[]), 0.0);
    }

    #[test]
    fn conversion_rate_two_of_eight_is_25() {
        let mut deals: Vec<Deal> = (0..6).map(|_| deal(DealStatus::New, d("1"), None, None)).collect();
        deals.push(deal(DealStatus::ClosedWon, d("1"), None, None));
        deals.push(deal(DealStatus::ClosedWon, d("1"), None, None));

        assert_eq!(conversion_rate(&deals), 25.0);
    }

    #[test]
    fn tax_amount_has_two_decimals() {
        assert_eq!(tax_amount(d("1000"), d("18")), "180.00");
        assert_eq!(tax_amount(d("199.99"), d("5")), "10.00");
        assert_eq!(tax_amount(d("333.33"), d("12.5")), "41.67");
        assert_eq!(tax_amount(d("0"), d("18")), "0.00");
    }

    #[test]
    fn top_companies_ranked_by_total_value() {
        let deals = vec![
            deal(DealStatus::New, d("300"), Some("A"), None),
            deal(DealStatus::New, d("900"), Some("B"), None),
            deal(DealStatus::New, d("40"), Some("C"), None),
            deal(DealStatus::New, d("200"), Some("A"), None),
            deal(DealStatus::New, d("30"), Some("C"), None),
            deal(DealStatus::New, d("30"), Some("C"), None),
        ];

        let ranked = top_companies(&deals, TOP_COMPANIES_LIMIT);
        let names: Vec<&str> = ranked.iter().map(|c| c.company.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(ranked[1].total_value, d("500"));
        assert_eq!(ranked[1].deals_count, 2);
        assert_eq!(ranked[2].total_value, d("100"));
        assert_eq!(ranked[2].deals_count, 3);
    }

    #[test]
    fn top_companies_truncates_to_limit() {
        let deals: Vec<Deal> = (0..8)
            .map(|i| deal(DealStatus::New, Decimal::from(i), Some(format!("C{i}").as_str()), None))
            .collect();

        let ranked = top_companies(&deals, TOP_COMPANIES_LIMIT);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].company, "C7");
        assert_eq!(ranked[4].company, "C3");
    }

    #[test]
    fn monthly_revenue_only_counts_won_deals_of_this_year() {
        let today = date(2025, 6, 15);
        let deals = vec![
            deal(DealStatus::ClosedWon, d("100"), None, Some(date(2025, 3, 2))),
            deal(DealStatus::ClosedWon, d("50"), None, Some(date(2025, 3, 28))),
            deal(DealStatus::ClosedWon, d("70"), None, Some(date(2025, 1, 10))),
            deal(DealStatus::ClosedWon, d("999"), None, Some(date(2024, 3, 2))),
            deal(DealStatus::Negotiation, d("500"), None, Some(date(2025, 3, 2))),
            deal(DealStatus::ClosedWon, d("10"), None, None),
        ];

        let revenue = monthly_revenue(&deals, today);
        assert_eq!(
            revenue,
            vec![
                AmountEntry { label: "Jan".into(), total: d("70") },
                AmountEntry { label: "Mar".into(), total: d("150") },
            ]
        );
    }

    #[test]
    fn monthly_tax_amount_ignores_the_year() {
        let records = vec![
            tax(TaxType::Gst, TaxStatus::Paid, d("100"), Some(date(2024, 1, 5))),
            tax(TaxType::Gst, TaxStatus::Paid, d("200"), Some(date(2025, 1, 20))),
            tax(TaxType::Tds, TaxStatus::Pending, d("50"), Some(date(2025, 2, 1))),
            tax(TaxType::Tds, TaxStatus::Pending, d("75"), None),
        ];

        let monthly = monthly_tax_amount(&records);
        assert_eq!(
            monthly,
            vec![
                AmountEntry { label: "Jan".into(), total: d("300") },
                AmountEntry { label: "Feb".into(), total: d("50") },
            ]
        );
    }

    #[test]
    fn tax_by_status_has_fixed_buckets() {
        let records = vec![
            tax(TaxType::Gst, TaxStatus::Overdue, d("1"), None),
            tax(TaxType::Gst, TaxStatus::Overdue, d("1"), None),
            tax(TaxType::Gst, TaxStatus::Pending, d("1"), None),
        ];

        let labels: Vec<(String, usize)> = tax_by_status(&records)
            .into_iter()
            .map(|e| (e.label, e.count))
            .collect();
        assert_eq!(
            labels,
            vec![("paid".into(), 0), ("pending".into(), 1), ("overdue".into(), 2)]
        );
    }

    #[test]
    fn tax_by_type_sums_amounts_of_present_types() {
        let records = vec![
            tax(TaxType::Gst, TaxStatus::Paid, d("1000"), None),
            tax(TaxType::IncomeTax, TaxStatus::Paid, d("250.5"), None),
            tax(TaxType::Gst, TaxStatus::Paid, d("500"), None),
        ];

        assert_eq!(
            tax_by_type(&records),
            vec![
                AmountEntry { label: "GST".into(), total: d("1500") },
                AmountEntry { label: "Income Tax".into(), total: d("250.5") },
            ]
        );
    }

    #[test]
    fn activity_by_type_uses_the_ten_most_recent() {
        let base = ts();
        let mut activities: Vec<Activity> = (0..12)
            .map(|i| Activity {
                id: Uuid::new_v4(),
                // as duas mais antigas são "note", que não deve aparecer
                activity_type: if i < 2 { "note".into() } else if i % 2 == 0 { "call".into() } else { "email".into() },
                timestamp: base + Duration::minutes(i),
                description: None,
                created_at: base,
                updated_at: base,
            })
            .collect();
        activities.reverse();

        let counts = activity_by_type(&activities);
        let total: usize = counts.iter().map(|c| c.count).sum();

        assert_eq!(total, 10);
        assert!(counts.iter().all(|c| c.label != "note"));
        assert_eq!(counts.iter().find(|c| c.label == "call").map(|c| c.count), Some(5));
    }

    #[test]
    fn report_helpers() {
        let deals = vec![
            deal(DealStatus::New, d("100"), Some("A"), Some(date(2024, 6, 1))),
            deal(DealStatus::ClosedWon, d("250"), Some("B"), Some(date(2025, 6, 9))),
            deal(DealStatus::New, d("50"), Some("A"), Some(date(2025, 2, 1))),
        ];

        assert_eq!(total_value(&deals), d("400"));
        assert_eq!(
            deals_by_status(&deals),
            vec![
                CountEntry { label: "new".into(), count: 2 },
                CountEntry { label: "closed-won".into(), count: 1 },
            ]
        );
        assert_eq!(
            monthly_deal_value(&deals),
            vec![
                AmountEntry { label: "February".into(), total: d("50") },
                AmountEntry { label: "June".into(), total: d("350") },
            ]
        );
    }

    #[test]
    fn dashboard_stats_counts_active_deals() {
        let deals = vec![
            deal(DealStatus::New, d("10"), None, None),
            deal(DealStatus::Negotiation, d("20"), None, None),
            deal(DealStatus::ClosedWon, d("30"), None, None),
        ];

        let stats = dashboard_stats(4, &deals);
        assert_eq!(stats.total_contacts, 4);
        assert_eq!(stats.total_deals, 3);
        assert_eq!(stats.active_deals, 2);
        assert_eq!(stats.total_value, d("60"));
    }
}
