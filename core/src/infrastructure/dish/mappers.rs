use chrono::Utc;

use crate::domain::dish::entities::{Dish, DishIngredient, DishWithIngredients};
use crate::domain::ingredient::entities::Ingredient;
use crate::entity::{dish_ingredients, dishes};

impl From<dishes::Model> for Dish {
    fn from(model: dishes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            instructions: model.instructions,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Assemble a dish and its joined (line item, ingredient) pairs into the
/// domain view.
pub fn map_dish_with_ingredients(
    dish: dishes::Model,
    line_items: Vec<(dish_ingredients::Model, Ingredient)>,
) -> DishWithIngredients {
    DishWithIngredients {
        id: dish.id,
        name: dish.name,
        description: dish.description,
        instructions: dish.instructions,
        created_at: dish.created_at.with_timezone(&Utc),
        updated_at: dish.updated_at.with_timezone(&Utc),
        dish_ingredients: line_items
            .into_iter()
            .map(|(item, ingredient)| DishIngredient {
                id: item.id,
                dish_id: item.dish_id,
                ingredient_id: item.ingredient_id,
                quantity: item.quantity,
                unit: item.unit,
                ingredient,
            })
            .collect(),
    }
}
