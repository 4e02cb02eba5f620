use crate::{
    models::{clamp_k, ItemId},
    services::providers::{FetchFailure, RecommenderClient},
};

/// Item ids are synthesized upward from this base when the backend fails
pub const FALLBACK_BASE: ItemId = 100;

/// The `k` consecutive ids starting at `FALLBACK_BASE + 1`
///
/// `k` is clamped again here so the sequence is never empty and never longer
/// than a slate.
pub fn fallback_sequence(k: usize) -> Vec<ItemId> {
    let k = clamp_k(k.min(i64::MAX as usize) as i64) as ItemId;
    (FALLBACK_BASE + 1..=FALLBACK_BASE + k).collect()
}

/// Turns a backend outcome into the list the bot will show
pub fn resolve(outcome: Result<Vec<ItemId>, FetchFailure>, k: usize) -> Vec<ItemId> {
    match outcome {
        Ok(mut items) => {
            // backends may ignore `k`
            items.truncate(k);
            if items.is_empty() {
                fallback_sequence(k)
            } else {
                items
            }
        }
        Err(_) => fallback_sequence(k),
    }
}

/// Fetches a slate for the user, falling back to the synthetic sequence
///
/// Never fails: every backend problem is logged and absorbed.
pub async fn recommend_with_fallback(
    client: &dyn RecommenderClient,
    user_id: &str,
    k: usize,
) -> Vec<ItemId> {
    let outcome = client.fetch_slate(user_id, k).await;

    if let Err(failure) = &outcome {
        tracing::warn!(
            user_id = %user_id,
            k = k,
            endpoint = %client.endpoint(),
            reason = %failure,
            "Recommender unavailable, using fallback slate"
        );
    }

    resolve(outcome, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockRecommenderClient;

    fn failing_client(failure: FetchFailure) -> MockRecommenderClient {
        let mut client = MockRecommenderClient::new();
        client
            .expect_fetch_slate()
            .returning(move |_, _| Err(failure.clone()));
        client
            .expect_endpoint()
            .returning(|| "http://127.0.0.1:1/recommend".to_string());
        client
    }

    #[test]
    fn test_fallback_sequence_is_consecutive_from_101() {
        for k in 1..=10 {
            let expected: Vec<ItemId> = (101..101 + k as ItemId).collect();
            assert_eq!(fallback_sequence(k), expected);
        }
    }

    #[test]
    fn test_fallback_sequence_reclamps() {
        assert_eq!(fallback_sequence(0), vec![101]);
        assert_eq!(fallback_sequence(25).len(), 10);
        assert_eq!(fallback_sequence(usize::MAX).last(), Some(&110));
    }

    #[test]
    fn test_resolve_keeps_prefix_of_backend_list() {
        let items = resolve(Ok(vec![5, 6, 7, 8, 9]), 3);
        assert_eq!(items, vec![5, 6, 7]);
    }

    #[test]
    fn test_resolve_empty_list_falls_back() {
        assert_eq!(resolve(Ok(vec![]), 4), vec![101, 102, 103, 104]);
    }

    #[test]
    fn test_resolve_failures_fall_back() {
        let failures = vec![
            FetchFailure::Timeout,
            FetchFailure::Transport("connection refused".to_string()),
            FetchFailure::Status(500),
            FetchFailure::Malformed("not json".to_string()),
            FetchFailure::Empty,
        ];
        for failure in failures {
            assert_eq!(resolve(Err(failure), 2), vec![101, 102]);
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_k_fallback_items() {
        for k in 1..=10 {
            let client = failing_client(FetchFailure::Transport("refused".to_string()));
            let items = recommend_with_fallback(&client, "1", k).await;
            assert_eq!(items.len(), k);
            assert_eq!(items[0], 101);
            assert!(items.windows(2).all(|pair| pair[1] == pair[0] + 1));
        }
    }

    #[tokio::test]
    async fn test_backend_items_are_truncated() {
        let mut client = MockRecommenderClient::new();
        client
            .expect_fetch_slate()
            .withf(|user_id, k| user_id == "4" && *k == 2)
            .times(1)
            .returning(|_, _| Ok(vec![201, 202, 203]));

        let items = recommend_with_fallback(&client, "4", 2).await;
        assert_eq!(items, vec![201, 202]);
    }
}
