use crate::models::{Customer, CustomerBook, Visit};
use chrono::{DateTime, Utc};

/// Appends a new customer with a fresh id and empty visit history. Inputs are
/// trimmed; the caller is responsible for rejecting blank values beforehand.
/// Returns a clone of the created record so the caller can render it.
pub fn add_customer(
    book: &mut CustomerBook,
    name: &str,
    location: &str,
    now: DateTime<Utc>,
) -> Customer {
    let customer = Customer {
        id: next_customer_id(book, now),
        name: name.trim().to_string(),
        location: location.trim().to_string(),
        visits: Vec::new(),
        created_at: now.to_rfc3339(),
    };

    book.customers.push(customer.clone());
    customer
}

/// Records one visit for `today` on the given customer. An unknown id is a
/// no-op and returns `None`. A repeat visit on the same day increments the
/// existing entry; a first visit appends `{date: today, count: 1}` so the
/// history keeps first-visited order rather than date order.
pub fn record_visit<'a>(
    book: &'a mut CustomerBook,
    customer_id: &str,
    today: &str,
) -> Option<&'a Customer> {
    let customer = book.customers.iter_mut().find(|c| c.id == customer_id)?;

    match customer.visits.iter_mut().find(|v| v.date == today) {
        Some(visit) => visit.count = visit.count.saturating_add(1),
        None => customer.visits.push(Visit {
            date: today.to_string(),
            count: 1,
        }),
    }

    Some(customer)
}

pub fn find_customer<'a>(book: &'a CustomerBook, customer_id: &str) -> Option<&'a Customer> {
    book.customers.iter().find(|c| c.id == customer_id)
}

/// Millisecond-timestamp id, with a numeric suffix appended while the bare
/// timestamp collides with an existing customer. Creations are serialized by
/// the single handler task, so the collection itself is a sufficient
/// collision oracle.
fn next_customer_id(book: &CustomerBook, now: DateTime<Utc>) -> String {
    let base = now.timestamp_millis().to_string();
    if find_customer(book, &base).is_none() {
        return base;
    }

    let mut suffix = 1u32;
    loop {
        let candidate = format!("{base}-{suffix}");
        if find_customer(book, &candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn add_customer_trims_and_starts_empty() {
        let mut book = CustomerBook::default();
        let customer = add_customer(&mut book, "  Acme Store ", " 5th Ave  ", at(1_700_000_000_000));

        assert_eq!(customer.name, "Acme Store");
        assert_eq!(customer.location, "5th Ave");
        assert!(customer.visits.is_empty());
        assert_eq!(book.customers.len(), 1);
        assert_eq!(book.customers[0], customer);
    }

    #[test]
    fn ids_stay_unique_under_same_instant_creation() {
        let mut book = CustomerBook::default();
        let now = at(1_700_000_000_000);
        let first = add_customer(&mut book, "A", "X", now);
        let second = add_customer(&mut book, "B", "Y", now);
        let third = add_customer(&mut book, "C", "Z", now);

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_ne!(first.id, third.id);
    }

    #[test]
    fn first_visit_appends_count_one() {
        let mut book = CustomerBook::default();
        let id = add_customer(&mut book, "Acme", "5th Ave", at(0)).id;

        let customer = record_visit(&mut book, &id, "2024-01-15").expect("known id");
        assert_eq!(
            customer.visits,
            vec![Visit {
                date: "2024-01-15".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn repeat_visit_increments_without_new_entry() {
        let mut book = CustomerBook::default();
        let id = add_customer(&mut book, "Acme", "5th Ave", at(0)).id;

        record_visit(&mut book, &id, "2024-01-15");
        let customer = record_visit(&mut book, &id, "2024-01-15").expect("known id");

        assert_eq!(customer.visits.len(), 1);
        assert_eq!(customer.visits[0].count, 2);
    }

    #[test]
    fn visits_keep_first_visited_order_and_distinct_dates() {
        let mut book = CustomerBook::default();
        let id = add_customer(&mut book, "Acme", "5th Ave", at(0)).id;

        // Later date recorded first: insertion order wins over date order.
        record_visit(&mut book, &id, "2024-02-01");
        record_visit(&mut book, &id, "2024-01-15");
        record_visit(&mut book, &id, "2024-02-01");
        record_visit(&mut book, &id, "2024-01-20");

        let visits = &book.customers[0].visits;
        let dates: Vec<&str> = visits.iter().map(|v| v.date.as_str()).collect();
        assert_eq!(dates, ["2024-02-01", "2024-01-15", "2024-01-20"]);
        for (i, visit) in visits.iter().enumerate() {
            assert!(
                visits[i + 1..].iter().all(|other| other.date != visit.date),
                "duplicate date {}",
                visit.date
            );
        }
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut book = CustomerBook::default();
        add_customer(&mut book, "Acme", "5th Ave", at(0));
        let before = book.clone();

        assert!(record_visit(&mut book, "missing", "2024-01-15").is_none());
        assert_eq!(book, before);
    }

    #[test]
    fn acme_store_scenario() {
        let mut book = CustomerBook::default();
        let id = add_customer(&mut book, "Acme Store", "5th Ave", at(0)).id;
        assert!(book.customers[0].visits.is_empty());

        record_visit(&mut book, &id, "2024-01-15");
        record_visit(&mut book, &id, "2024-01-15");
        record_visit(&mut book, &id, "2024-01-16");

        let customer = find_customer(&book, &id).unwrap();
        assert_eq!(
            customer.visits,
            vec![
                Visit {
                    date: "2024-01-15".to_string(),
                    count: 2
                },
                Visit {
                    date: "2024-01-16".to_string(),
                    count: 1
                },
            ]
        );

        let stats = crate::stats::customer_stats(customer, "2024-01-16");
        assert_eq!(stats.total_visits, 3);
        assert_eq!(stats.total_days, 2);
    }
}
