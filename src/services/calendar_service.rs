// src/services/calendar_service.rs

use chrono::{Datelike, NaiveDate};

use crate::{
    common::error::AppError,
    models::{
        calendar::{CalendarEvent, EventType},
        deal::Deal,
        task::Task,
    },
    services::{deal_service::DealService, task_service::TaskService},
};

#[derive(Clone)]
pub struct CalendarService {
    tasks: TaskService,
    deals: DealService,
}

impl CalendarService {
    pub fn new(tasks: TaskService, deals: DealService) -> Self {
        Self { tasks, deals }
    }

    pub async fn events(&self, month: Option<&str>) -> Result<Vec<CalendarEvent>, AppError> {
        // Valida o filtro antes de ir ao store
        let month = month.filter(|m| !m.is_empty()).map(parse_month).transpose()?;

        let tasks = self.tasks.all().await?;
        let deals = self.deals.all().await?;

        Ok(calendar_events(&tasks, &deals, month))
    }
}

/// "2025-06" -> (2025, 6)
pub fn parse_month(raw: &str) -> Result<(i32, u32), AppError> {
    let invalid = || AppError::InvalidField(format!("month deve estar no formato YYYY-MM: '{raw}'"));

    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

/// Tarefas viram eventos pelo vencimento, negócios pelo fechamento previsto
/// (sem data, ficam de fora). Resultado ordenado por data.
pub fn calendar_events(tasks: &[Task], deals: &[Deal], month: Option<(i32, u32)>) -> Vec<CalendarEvent> {
    let in_month = |date: &NaiveDate| month.is_none_or(|(y, m)| date.year() == y && date.month() == m);

    let task_events = tasks.iter().map(|t| CalendarEvent {
        id: t.id,
        title: t.title.clone(),
        date: t.due_date,
        event_type: EventType::Task,
    });

    let deal_events = deals.iter().filter_map(|d| {
        d.expected_close_date.map(|date| CalendarEvent {
            id: d.id,
            title: d.title.clone(),
            date,
            event_type: EventType::Deal,
        })
    });

    let mut events: Vec<CalendarEvent> = task_events
        .chain(deal_events)
        .filter(|e| in_month(&e.date))
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{deal::DealStatus, task::{Priority, TaskStatus}};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, due: NaiveDate) -> Task {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Task {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            due_date: due,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            completed: false,
            user_id: Uuid::new_v4(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn deal(title: &str, close: Option<NaiveDate>) -> Deal {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Deal {
            id: Uuid::new_v4(),
            title: title.into(),
            value: Decimal::ZERO,
            status: DealStatus::New,
            company: None,
            contact_person: None,
            expected_close_date: close,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn merges_tasks_and_dated_deals_by_date() {
        let tasks = vec![task("t1", date(2025, 6, 20)), task("t2", date(2025, 6, 1))];
        let deals = vec![deal("d1", Some(date(2025, 6, 10))), deal("sem data", None)];

        let events = calendar_events(&tasks, &deals, None);
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(titles, vec!["t2", "d1", "t1"]);
        assert_eq!(events[1].event_type, EventType::Deal);
    }

    #[test]
    fn month_filter_keeps_only_that_month() {
        let tasks = vec![task("jun", date(2025, 6, 20)), task("jul", date(2025, 7, 1)), task("old", date(2024, 6, 3))];
        let events = calendar_events(&tasks, &[], Some((2025, 6)));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "jun");
    }

    #[test]
    fn parses_month_filter() {
        assert_eq!(parse_month("2025-06").unwrap(), (2025, 6));
        for bad in ["2025-13", "2025/06", "25-06", "2025-6", "abcd-ef"] {
            assert!(matches!(parse_month(bad), Err(AppError::InvalidField(_))), "{bad}");
        }
    }
}
