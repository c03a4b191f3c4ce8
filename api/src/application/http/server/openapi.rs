use crate::application::http::{
    authentication::router::AuthenticationApiDoc, consumption::router::ConsumptionApiDoc,
    dish::router::DishApiDoc, ingredient::router::IngredientApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriTrack API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/dishes", api = DishApiDoc),
        (path = "/consumption", api = ConsumptionApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
    )
)]
pub struct ApiDoc;
