use crate::models::{Customer, CustomerStats, Visit};

/// Display aggregates for one customer. Pure: the same history and `today`
/// always produce the same stats, and the input is never touched.
pub fn customer_stats(customer: &Customer, today: &str) -> CustomerStats {
    let total_visits = customer
        .visits
        .iter()
        .fold(0u64, |sum, visit| sum.saturating_add(visit.count));
    let total_days = customer.visits.len() as u64;
    let today_visit = customer.visits.iter().find(|v| v.date == today).cloned();

    CustomerStats {
        total_visits,
        total_days,
        today_visit,
    }
}

/// A fresh copy of the visit history, most recent date first. ISO
/// `YYYY-MM-DD` strings order lexicographically, so the string is the key.
pub fn sort_visits_desc(visits: &[Visit]) -> Vec<Visit> {
    let mut sorted = visits.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(date: &str, count: u64) -> Visit {
        Visit {
            date: date.to_string(),
            count,
        }
    }

    fn customer_with(visits: Vec<Visit>) -> Customer {
        Customer {
            id: "1700000000000".to_string(),
            name: "Acme Store".to_string(),
            location: "5th Ave".to_string(),
            visits,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn empty_history_yields_zeros() {
        let customer = customer_with(Vec::new());
        let stats = customer_stats(&customer, "2024-01-15");

        assert_eq!(stats.total_visits, 0);
        assert_eq!(stats.total_days, 0);
        assert!(stats.today_visit.is_none());
    }

    #[test]
    fn totals_sum_counts_and_count_days() {
        let customer = customer_with(vec![
            visit("2024-01-15", 2),
            visit("2024-01-16", 1),
            visit("2024-01-20", 5),
        ]);
        let stats = customer_stats(&customer, "2024-01-16");

        assert_eq!(stats.total_visits, 8);
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.today_visit, Some(visit("2024-01-16", 1)));
    }

    #[test]
    fn today_visit_absent_when_not_visited_today() {
        let customer = customer_with(vec![visit("2024-01-15", 2)]);
        let stats = customer_stats(&customer, "2024-01-16");
        assert!(stats.today_visit.is_none());
    }

    #[test]
    fn stats_are_pure() {
        let customer = customer_with(vec![visit("2024-01-16", 3), visit("2024-01-15", 1)]);
        let before = customer.clone();

        let first = customer_stats(&customer, "2024-01-16");
        let second = customer_stats(&customer, "2024-01-16");

        assert_eq!(first, second);
        assert_eq!(customer, before);
    }

    #[test]
    fn sort_desc_orders_without_mutating() {
        let visits = vec![
            visit("2024-01-15", 2),
            visit("2024-02-01", 1),
            visit("2024-01-20", 4),
        ];
        let original = visits.clone();

        let sorted = sort_visits_desc(&visits);

        let dates: Vec<&str> = sorted.iter().map(|v| v.date.as_str()).collect();
        assert_eq!(dates, ["2024-02-01", "2024-01-20", "2024-01-15"]);
        assert_eq!(visits, original);

        // Same elements, just reordered.
        let mut expected = original.clone();
        expected.sort_by(|a, b| a.date.cmp(&b.date));
        let mut actual = sorted;
        actual.sort_by(|a, b| a.date.cmp(&b.date));
        assert_eq!(actual, expected);
    }

    #[test]
    fn sort_desc_handles_empty_history() {
        assert!(sort_visits_desc(&[]).is_empty());
    }
}
