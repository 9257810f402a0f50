use crate::clients::ActorClient;
use crate::model::Restaurant;
use crate::restaurant_actor::RestaurantError;
use tracing::instrument;

impl_resource_client!(
    /// Client for interacting with the Restaurant actor.
    RestaurantClient,
    Restaurant,
    RestaurantError,
    restaurant
);

impl RestaurantClient {
    /// Restaurants sorted by id, optionally only those in `category`
    /// (case-insensitive).
    #[instrument(skip(self))]
    pub async fn list_restaurants(&self, category: Option<&str>) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants: Vec<Restaurant> = self
            .list()
            .await?
            .into_iter()
            .filter(|restaurant| match category {
                Some(wanted) => restaurant
                    .category
                    .as_deref()
                    .is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)),
                None => true,
            })
            .collect();
        restaurants.sort_by_key(|restaurant| restaurant.id);
        Ok(restaurants)
    }

    /// Restaurants whose name, category or address contains `query`
    /// (case-insensitive), sorted by id. A blank query returns every restaurant.
    #[instrument(skip(self))]
    pub async fn search_restaurants(&self, query: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants: Vec<Restaurant> = self
            .list()
            .await?
            .into_iter()
            .filter(|restaurant| restaurant.matches(query))
            .collect();
        restaurants.sort_by_key(|restaurant| restaurant.id);
        Ok(restaurants)
    }
}
