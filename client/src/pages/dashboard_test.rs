use super::*;

fn bucket(name: &str, value: u64) -> RiskBucket {
    RiskBucket { name: name.to_owned(), value }
}

#[test]
fn block_rate_is_zero_without_traffic() {
    assert!(block_rate(&AuditStats::default()).abs() < f64::EPSILON);
}

#[test]
fn block_rate_is_percentage_of_total() {
    let stats = AuditStats { total_requests: 200, blocked_requests: 30, ..AuditStats::default() };
    assert!((block_rate(&stats) - 15.0).abs() < 1e-9);
}

#[test]
fn bucket_share_rounds_to_whole_percent() {
    let buckets = vec![bucket("LOW", 2), bucket("HIGH", 1)];
    assert_eq!(bucket_share(&buckets[0], &buckets), 67);
    assert_eq!(bucket_share(&buckets[1], &buckets), 33);
}

#[test]
fn bucket_share_of_empty_distribution_is_zero() {
    let buckets = vec![bucket("LOW", 0)];
    assert_eq!(bucket_share(&buckets[0], &buckets), 0);
}
