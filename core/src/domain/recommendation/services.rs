use std::collections::HashSet;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consumption::{ports::ConsumptionLogRepository, value_objects::RecentConsumption},
    dish::entities::DishWithIngredients,
    recommendation::entities::ScoredDish,
};

/// Collapse in-window log rows into the set of recently consumed ingredient
/// ids. Direct ingredient entries contribute their id; dish entries
/// contribute every ingredient id of the dish. Membership only: eating an
/// ingredient once or ten times in-window is equally "recent".
pub fn recent_ingredient_set(logs: &[RecentConsumption]) -> HashSet<Uuid> {
    let mut recent = HashSet::new();

    for log in logs {
        if let Some(ingredient_id) = log.ingredient_id {
            recent.insert(ingredient_id);
        }
        for ingredient_id in &log.dish_ingredient_ids {
            recent.insert(*ingredient_id);
        }
    }

    recent
}

/// Fetch the user's consumption logs over the inclusive lookback window and
/// aggregate them into a recency set. Repository failures propagate as-is.
pub async fn compute_recent_ingredients<C>(
    consumption_repository: &C,
    user_id: Uuid,
    window_days: u32,
) -> Result<HashSet<Uuid>, CoreError>
where
    C: ConsumptionLogRepository,
{
    let since = Utc::now() - Duration::days(i64::from(window_days));
    let logs = consumption_repository
        .get_recent_rows(user_id, since)
        .await?;

    Ok(recent_ingredient_set(&logs))
}

/// Score every dish against the recency set and return the `limit` freshest.
///
/// The score counts ingredient line items, not distinct ingredients: a dish
/// listing the same ingredient twice has it counted twice in both numerator
/// and denominator. The sort is stable, so equally scored dishes keep catalog
/// order, and the limit is applied after the full sort.
pub fn rank_dishes(
    dishes: &[DishWithIngredients],
    recent: &HashSet<Uuid>,
    limit: usize,
) -> Vec<ScoredDish> {
    let mut scored: Vec<ScoredDish> = dishes.iter().map(|dish| score_dish(dish, recent)).collect();

    scored.sort_by(|a, b| {
        b.freshness_score
            .partial_cmp(&a.freshness_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);

    scored
}

fn score_dish(dish: &DishWithIngredients, recent: &HashSet<Uuid>) -> ScoredDish {
    let total_ingredients = dish.dish_ingredients.len();
    let recent_ingredients = dish
        .dish_ingredients
        .iter()
        .filter(|item| recent.contains(&item.ingredient_id))
        .count();

    // A dish without line items cannot occur given upstream invariants, but
    // must not divide by zero.
    let freshness_score = if total_ingredients > 0 {
        (total_ingredients - recent_ingredients) as f64 / total_ingredients as f64
    } else {
        0.0
    };

    ScoredDish {
        dish: dish.clone(),
        freshness_score,
        recent_ingredients,
        total_ingredients,
        reason: reason_text(freshness_score, total_ingredients, recent_ingredients),
    }
}

fn reason_text(freshness_score: f64, total: usize, recent: usize) -> String {
    if freshness_score == 1.0 {
        "All ingredients are fresh (not recently consumed)".to_string()
    } else if freshness_score == 0.0 {
        "All ingredients were recently consumed".to_string()
    } else {
        format!("{} out of {} ingredients are fresh", total - recent, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        consumption::entities::{ConsumptionLog, ConsumptionLogDetails},
        dish::entities::{DishIngredient, DishWithIngredients},
        ingredient::entities::Ingredient,
    };
    use chrono::{DateTime, Utc};
    use std::future::Future;

    fn ingredient(id: Uuid, name: &str) -> Ingredient {
        let now = Utc::now();
        Ingredient {
            id,
            name: name.to_string(),
            category: "test".to_string(),
            nutritional_info: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn dish(name: &str, ingredient_ids: &[Uuid]) -> DishWithIngredients {
        let now = Utc::now();
        let dish_id = Uuid::new_v4();
        DishWithIngredients {
            id: dish_id,
            name: name.to_string(),
            description: None,
            instructions: None,
            created_at: now,
            updated_at: now,
            dish_ingredients: ingredient_ids
                .iter()
                .map(|&ingredient_id| DishIngredient {
                    id: Uuid::new_v4(),
                    dish_id,
                    ingredient_id,
                    quantity: 1.0,
                    unit: "g".to_string(),
                    ingredient: ingredient(ingredient_id, "x"),
                })
                .collect(),
        }
    }

    #[test]
    fn direct_log_entries_feed_the_recency_set() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let logs = vec![
            RecentConsumption {
                ingredient_id: Some(a),
                dish_ingredient_ids: vec![],
            },
            RecentConsumption {
                ingredient_id: Some(b),
                dish_ingredient_ids: vec![],
            },
            // Eating the same ingredient again does not change membership.
            RecentConsumption {
                ingredient_id: Some(a),
                dish_ingredient_ids: vec![],
            },
        ];

        let recent = recent_ingredient_set(&logs);
        assert_eq!(recent, HashSet::from([a, b]));
    }

    #[test]
    fn dish_log_entry_contributes_all_dish_ingredients() {
        // A log entry that names a dish but no direct ingredient still makes
        // every dish ingredient recent.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let logs = vec![RecentConsumption {
            ingredient_id: None,
            dish_ingredient_ids: vec![a, b],
        }];

        let recent = recent_ingredient_set(&logs);
        assert_eq!(recent, HashSet::from([a, b]));
    }

    #[test]
    fn no_logs_means_empty_recency_set() {
        assert!(recent_ingredient_set(&[]).is_empty());
    }

    #[test]
    fn empty_recency_set_scores_every_dish_fully_fresh() {
        let d1 = dish("D1", &[Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()]);
        let d2 = dish("D2", &[Uuid::new_v4()]);

        let ranked = rank_dishes(&[d1.clone(), d2.clone()], &HashSet::new(), 10);

        assert_eq!(ranked.len(), 2);
        for scored in &ranked {
            assert_eq!(scored.freshness_score, 1.0);
            assert_eq!(
                scored.reason,
                "All ingredients are fresh (not recently consumed)"
            );
        }
        // Tie keeps catalog order.
        assert_eq!(ranked[0].dish.id, d1.id);
        assert_eq!(ranked[1].dish.id, d2.id);
    }

    #[test]
    fn partially_recent_dish_scores_the_fresh_fraction() {
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();
        let z = Uuid::new_v4();
        let d1 = dish("D1", &[x, y, z]);
        let recent = HashSet::from([x]);

        let ranked = rank_dishes(&[d1], &recent, 10);

        assert_eq!(ranked[0].recent_ingredients, 1);
        assert_eq!(ranked[0].total_ingredients, 3);
        assert_eq!(ranked[0].freshness_score, 2.0 / 3.0);
        assert_eq!(ranked[0].reason, "2 out of 3 ingredients are fresh");
    }

    #[test]
    fn fully_recent_dish_scores_zero() {
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();
        let z = Uuid::new_v4();
        let d1 = dish("D1", &[x, y, z]);
        let recent = HashSet::from([x, y, z]);

        let ranked = rank_dishes(&[d1], &recent, 10);

        assert_eq!(ranked[0].freshness_score, 0.0);
        assert_eq!(ranked[0].reason, "All ingredients were recently consumed");
    }

    #[test]
    fn dish_without_line_items_scores_zero_without_panicking() {
        let empty = dish("empty", &[]);
        let ranked = rank_dishes(&[empty], &HashSet::new(), 10);

        assert_eq!(ranked[0].freshness_score, 0.0);
        assert_eq!(ranked[0].total_ingredients, 0);
        assert_eq!(ranked[0].reason, "All ingredients were recently consumed");
    }

    #[test]
    fn duplicate_line_items_count_per_occurrence() {
        // Two line items for the same ingredient (e.g. salt twice) inflate
        // both numerator and denominator.
        let salt = Uuid::new_v4();
        let pepper = Uuid::new_v4();
        let d = dish("D", &[salt, salt, pepper]);
        let recent = HashSet::from([salt]);

        let ranked = rank_dishes(&[d], &recent, 10);

        assert_eq!(ranked[0].total_ingredients, 3);
        assert_eq!(ranked[0].recent_ingredients, 2);
        assert_eq!(ranked[0].freshness_score, 1.0 / 3.0);
    }

    #[test]
    fn sorts_descending_and_truncates_after_sorting() {
        let x = Uuid::new_v4();
        let stale = dish("stale", &[x]);
        let fresh = dish("fresh", &[Uuid::new_v4()]);
        let recent = HashSet::from([x]);

        // The fresh dish is listed last in the catalog but must win.
        let ranked = rank_dishes(&[stale, fresh.clone()], &recent, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].dish.id, fresh.id);
    }

    #[test]
    fn limit_with_tied_scores_returns_first_in_catalog_order() {
        let d1 = dish("D1", &[Uuid::new_v4()]);
        let d2 = dish("D2", &[Uuid::new_v4()]);

        let ranked = rank_dishes(&[d1.clone(), d2], &HashSet::new(), 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].dish.id, d1.id);
    }

    #[test]
    fn result_length_is_min_of_limit_and_catalog_size() {
        let dishes: Vec<_> = (0..5).map(|i| dish(&format!("D{i}"), &[Uuid::new_v4()])).collect();

        assert_eq!(rank_dishes(&dishes, &HashSet::new(), 3).len(), 3);
        assert_eq!(rank_dishes(&dishes, &HashSet::new(), 10).len(), 5);
        assert_eq!(rank_dishes(&dishes, &HashSet::new(), 0).len(), 0);
        assert_eq!(rank_dishes(&[], &HashSet::new(), 10).len(), 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let x = Uuid::new_v4();
        let dishes = vec![dish("D1", &[x, Uuid::new_v4()]), dish("D2", &[x])];
        let recent = HashSet::from([x]);

        let first = rank_dishes(&dishes, &recent, 10);
        let second = rank_dishes(&dishes, &recent, 10);

        assert_eq!(first, second);
    }

    #[test]
    fn growing_the_recency_set_never_raises_a_score() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let dishes = vec![
            dish("D1", &[ids[0], ids[1]]),
            dish("D2", &[ids[1], ids[2], ids[3]]),
            dish("D3", &[ids[3]]),
        ];

        let scores_by_dish = |recent: &HashSet<Uuid>| -> std::collections::HashMap<Uuid, f64> {
            rank_dishes(&dishes, recent, 10)
                .into_iter()
                .map(|s| (s.dish.id, s.freshness_score))
                .collect()
        };

        let mut recent = HashSet::new();
        let mut previous = scores_by_dish(&recent);

        for id in &ids {
            recent.insert(*id);
            let current = scores_by_dish(&recent);
            for (dish_id, score) in &current {
                assert!(score <= &previous[dish_id]);
            }
            previous = current;
        }
    }

    struct FakeConsumptionLogs {
        rows: Vec<RecentConsumption>,
    }

    impl ConsumptionLogRepository for FakeConsumptionLogs {
        fn create(
            &self,
            _log: ConsumptionLog,
        ) -> impl Future<Output = Result<ConsumptionLogDetails, CoreError>> + Send {
            async { Err(CoreError::InternalServerError) }
        }

        fn get_logs_since(
            &self,
            _user_id: Uuid,
            _since: DateTime<Utc>,
        ) -> impl Future<Output = Result<Vec<ConsumptionLogDetails>, CoreError>> + Send {
            async { Ok(Vec::new()) }
        }

        fn get_recent_rows(
            &self,
            _user_id: Uuid,
            _since: DateTime<Utc>,
        ) -> impl Future<Output = Result<Vec<RecentConsumption>, CoreError>> + Send {
            let rows = self.rows.clone();
            async move { Ok(rows) }
        }
    }

    #[tokio::test]
    async fn compute_recent_ingredients_merges_direct_and_dish_rows() {
        let direct = Uuid::new_v4();
        let via_dish_a = Uuid::new_v4();
        let via_dish_b = Uuid::new_v4();
        let repository = FakeConsumptionLogs {
            rows: vec![
                RecentConsumption {
                    ingredient_id: Some(direct),
                    dish_ingredient_ids: vec![],
                },
                RecentConsumption {
                    ingredient_id: None,
                    dish_ingredient_ids: vec![via_dish_a, via_dish_b],
                },
            ],
        };

        let recent = compute_recent_ingredients(&repository, Uuid::new_v4(), 7)
            .await
            .unwrap();

        assert_eq!(recent, HashSet::from([direct, via_dish_a, via_dish_b]));
    }

    #[test]
    fn scores_stay_within_unit_interval_and_match_the_formula() {
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();
        let dishes = vec![
            dish("D1", &[x, y, Uuid::new_v4(), Uuid::new_v4()]),
            dish("D2", &[x]),
            dish("D3", &[Uuid::new_v4()]),
        ];
        let recent = HashSet::from([x, y]);

        for scored in rank_dishes(&dishes, &recent, 10) {
            assert!((0.0..=1.0).contains(&scored.freshness_score));
            if scored.total_ingredients > 0 {
                let expected = (scored.total_ingredients - scored.recent_ingredients) as f64
                    / scored.total_ingredients as f64;
                assert_eq!(scored.freshness_score, expected);
            }
        }
    }
}
