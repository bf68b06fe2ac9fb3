use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rating: f64,
    pub cuisine: String,
    /// price tier token, `$` to `$$$$`
    pub price_range: String,
    /// path or url to image, never fetched
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Restaurant {
    fn sample(
        name: &str,
        description: &str,
        rating: f64,
        cuisine: &str,
        price_range: &str,
        image_text: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            rating,
            cuisine: cuisine.to_string(),
            price_range: price_range.to_string(),
            image: format!("/api/placeholder/800/400?text={image_text}"),
            review: None,
            address: None,
            hours: None,
            phone: None,
            location: None,
        }
    }
}

/// The embedded directory of Rabat restaurants, used when no dataset file is configured.
pub fn sample_restaurants() -> Vec<Restaurant> {
    let boho = Restaurant {
        review: Some(Review {
            text: "Loved this brunch place! Lots of healthy options.".to_string(),
            author: "kapil gupta".to_string(),
            rating: 5.0,
        }),
        address: Some("10 Rue EL Yamama, Rabat 10000, Morocco".to_string()),
        hours: Some("9:00 AM – 9:00 PM".to_string()),
        phone: Some("0690-036170".to_string()),
        location: Some(Location {
            lat: 34.0151034,
            lng: -6.8369946,
        }),
        ..Restaurant::sample(
            "Boho Café",
            "Modern café serving healthy options and artisanal coffee in a stylish, laid-back atmosphere",
            4.7,
            "Café",
            "$$",
            "Boho+Cafe",
        )
    };

    vec![
        boho,
        Restaurant::sample(
            "Restaurant Marea",
            "Elegant seafood restaurant with fresh Mediterranean cuisine and ocean-inspired ambiance",
            4.7,
            "Seafood",
            "$$$",
            "Restaurant+Marea",
        ),
        Restaurant::sample(
            "Dar El Medina",
            "Traditional Moroccan restaurant in a beautiful riad setting with authentic flavors",
            4.4,
            "Moroccan",
            "$$",
            "Dar+El+Medina",
        ),
        Restaurant::sample(
            "Agha Acham",
            "Authentic Middle Eastern flavors and mezze platters in an ornate setting",
            4.4,
            "Middle Eastern",
            "$$",
            "Agha+Acham",
        ),
        Restaurant::sample(
            "Dar Rbatia",
            "Luxurious Moroccan dining with traditional entertainment and royal ambiance",
            4.5,
            "Moroccan",
            "$$$",
            "Dar+Rbatia",
        ),
    ]
}

/// Read a JSON array of restaurant records.
pub fn load_dataset(path: &Path) -> anyhow::Result<Vec<Restaurant>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("fail to read dataset {}", path.display()))?;
    let restaurants: Vec<Restaurant> = serde_json::from_str(&raw)
        .with_context(|| format!("fail to parse dataset {}", path.display()))?;
    tracing::info!(
        "loaded {} restaurants from {}",
        restaurants.len(),
        path.display()
    );
    Ok(restaurants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_keeps_boho_details() {
        let data = sample_restaurants();
        assert_eq!(data.len(), 5);
        let boho = &data[0];
        assert_eq!(boho.name, "Boho Café");
        assert_eq!(boho.image, "/api/placeholder/800/400?text=Boho+Cafe");
        assert_eq!(boho.review.as_ref().unwrap().author, "kapil gupta");
        assert!(data[1].review.is_none());
    }

    #[test]
    fn load_camel_case_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
  {{"name": "Le Dhow", "rating": 4.1, "cuisine": "Bar", "priceRange": "$$", "image": "dhow.png"}},
  {{"name": "Ty Potes", "description": "Crêperie", "rating": 4.6, "cuisine": "French",
    "priceRange": "$", "image": "ty.png", "location": {{"lat": 34.0, "lng": -6.8}}}}
]"#
        )
        .unwrap();

        let data = load_dataset(file.path()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].price_range, "$$");
        assert_eq!(data[0].description, "");
        assert_eq!(data[1].location, Some(Location { lat: 34.0, lng: -6.8 }));
    }

    #[test]
    fn missing_dataset_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.json");
        let err = load_dataset(&path).unwrap_err();
        assert!(format!("{err}").contains("nowhere.json"));
    }
}
