//! Read-only display content shown on the public pages
//!
//! Rows are created only by seeding. The request-serving path never writes
//! them. `id` is omitted when deserializing seed documents.

use serde::{Deserialize, Serialize};

/// Featured program card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Icon name understood by the front end (e.g. `Book`)
    pub icon: String,
    /// Color token (e.g. `bg-sunshine-yellow-300`)
    pub color: String,
    pub image: String,
}

/// Parent testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
}

/// Teacher profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
}

/// Educational game shown on the games page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub age_group: String,
}

/// Headline number (graduates, years of experience, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub id: i32,
    pub icon: String,
    /// Display value, kept as text ("500+")
    pub value: String,
    pub label: String,
    pub color: String,
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub id: i32,
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn program_wire_shape() {
        let program = Program {
            id: 1,
            title: "Program Tahfidz".into(),
            description: "Menghafal Al-Quran".into(),
            icon: "Book".into(),
            color: "bg-sunshine-yellow-300".into(),
            image: "/tahfidz-program.jpg".into(),
        };
        assert_eq!(
            serde_json::to_value(&program).unwrap(),
            json!({
                "id": 1,
                "title": "Program Tahfidz",
                "description": "Menghafal Al-Quran",
                "icon": "Book",
                "color": "bg-sunshine-yellow-300",
                "image": "/tahfidz-program.jpg"
            })
        );
    }

    #[test]
    fn game_uses_camel_case_age_group() {
        let game: Game = serde_json::from_value(json!({
            "name": "Menara Warna",
            "image": "/game-color-tower.jpg",
            "description": "Konsep warna",
            "ageGroup": "2-4 tahun"
        }))
        .unwrap();
        assert_eq!(game.id, 0);
        assert_eq!(game.age_group, "2-4 tahun");

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["ageGroup"], "2-4 tahun");
        assert!(value.get("age_group").is_none());
    }
}
