//! Rocket detail record.

use serde::Deserialize;

/// Vehicle information fetched lazily for a launch's detail view.
///
/// Looked up by [`Launch::rocket`](crate::domain::Launch::rocket) and cached per
/// id for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub rocket_type: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stages: u32,
    #[serde(default)]
    pub boosters: u32,
    /// Cost per launch in US dollars.
    #[serde(default)]
    pub cost_per_launch: u64,
    #[serde(default)]
    pub success_rate_pct: f64,
    #[serde(default)]
    pub first_flight: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl Rocket {
    /// Cost per launch with thousands separators, e.g. `$50,000,000`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacex_explorer::domain::Rocket;
    /// # let json = r#"{"id":"r","name":"Falcon 1","cost_per_launch":6700000}"#;
    /// let rocket: Rocket = serde_json::from_str(json).unwrap();
    /// assert_eq!(rocket.cost_label(), "$6,700,000");
    /// ```
    #[must_use]
    pub fn cost_label(&self) -> String {
        let digits = self.cost_per_launch.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        grouped.push('$');
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        grouped
    }

    /// Success rate as a whole percentage, e.g. `97%`.
    #[must_use]
    pub fn success_rate_label(&self) -> String {
        format!("{:.0}%", self.success_rate_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rocket_payload() {
        let json = r#"{
            "id": "5e9d0d95eda69973a809d1ec",
            "name": "Falcon 9",
            "type": "rocket",
            "active": true,
            "stages": 2,
            "boosters": 0,
            "cost_per_launch": 50000000,
            "success_rate_pct": 98,
            "first_flight": "2010-06-04",
            "country": "United States",
            "company": "SpaceX",
            "description": "Falcon 9 is a two-stage rocket.",
            "height": { "meters": 70, "feet": 229.6 }
        }"#;

        let rocket: Rocket = serde_json::from_str(json).expect("valid rocket json");
        assert_eq!(rocket.rocket_type, "rocket");
        assert_eq!(rocket.stages, 2);
        assert!((rocket.success_rate_pct - 98.0).abs() < f64::EPSILON);
        assert_eq!(rocket.cost_label(), "$50,000,000");
        assert_eq!(rocket.success_rate_label(), "98%");
    }

    #[test]
    fn small_costs_have_no_separator() {
        let rocket: Rocket =
            serde_json::from_str(r#"{"id":"r","name":"Test","cost_per_launch":950}"#).expect("json");
        assert_eq!(rocket.cost_label(), "$950");
    }
}
