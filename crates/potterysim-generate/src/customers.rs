use fake::Fake;
use fake::faker::address::en::StateName;
use fake::faker::name::en::Name;
use rand::Rng;

use crate::model::Customer;

/// Probability that a customer is located in the home region.
pub const HOME_REGION_WEIGHT: f64 = 2.0 / 3.0;

/// Synthesize the customer population, ids sequential from 1.
///
/// Locations are biased toward the home region; the remainder get a random
/// US state name, which may occasionally also be the home region.
pub fn generate_customers(count: u32, home_region: &str, rng: &mut impl Rng) -> Vec<Customer> {
    (1..=count)
        .map(|id| {
            let name: String = Name().fake_with_rng(rng);
            let location: String = if rng.random_bool(HOME_REGION_WEIGHT) {
                home_region.to_string()
            } else {
                StateName().fake_with_rng(rng)
            };
            Customer {
                id: i64::from(id),
                name,
                location,
            }
        })
        .collect()
}
