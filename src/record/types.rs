use serde::Serialize;

/// Placeholder substituted for any missing or invalid field.
pub const PLACEHOLDER: &str = "-";

/// One cast or crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastEntry {
    /// Display name; never empty.
    pub name: String,
    /// External staff id, present only when the source carried one.
    pub staff_id: Option<String>,
}

/// Raw box-office figures per slot, as "amount symbol" strings.
///
/// `None` means the slot never appeared in the response; formatting into
/// display money strings happens at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxOfficeFacts {
    pub budget: Option<String>,
    pub world: Option<String>,
    pub russia: Option<String>,
    pub usa: Option<String>,
    pub marketing: Option<String>,
}

/// Premiere dates, already display-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiereFacts {
    pub russia: String,
    pub world: String,
}

impl Default for PremiereFacts {
    fn default() -> Self {
        Self {
            russia: PLACEHOLDER.to_string(),
            world: PLACEHOLDER.to_string(),
        }
    }
}

/// The assembled film card: a fixed, total, ordered set of labeled
/// display values. Every field is always present, with "-" standing in
/// for anything the source did not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmRecord {
    pub title_ru: String,
    pub title_original: String,
    pub year: String,
    pub genres: String,
    pub countries: String,
    pub rating_imdb: String,
    pub rating_kinopoisk: String,
    pub vote_count: String,
    pub description: String,
    pub duration_minutes: String,
    pub budget: String,
    pub box_office_world: String,
    pub box_office_russia: String,
    pub box_office_usa: String,
    pub premiere_russia: String,
    pub premiere_world: String,
}

impl FilmRecord {
    /// Display labels and values in their fixed render/export order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Название (RU)", self.title_ru.as_str()),
            ("Оригинальное название", self.title_original.as_str()),
            ("Год", self.year.as_str()),
            ("Жанры", self.genres.as_str()),
            ("Страна", self.countries.as_str()),
            ("Рейтинг IMDB", self.rating_imdb.as_str()),
            ("Рейтинг Кинопоиска", self.rating_kinopoisk.as_str()),
            ("Кол-во голосов КП", self.vote_count.as_str()),
            ("Описание", self.description.as_str()),
            ("Продолжительность (мин)", self.duration_minutes.as_str()),
            ("Бюджет", self.budget.as_str()),
            ("Касса (мир)", self.box_office_world.as_str()),
            ("Касса (РФ)", self.box_office_russia.as_str()),
            ("Касса (США)", self.box_office_usa.as_str()),
            ("Премьера в РФ", self.premiere_russia.as_str()),
            ("Премьера мировая", self.premiere_world.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_fixed_order_and_size() {
        let record = FilmRecord {
            title_ru: "Матрица".to_string(),
            title_original: "The Matrix".to_string(),
            year: "1999".to_string(),
            genres: "фантастика, боевик".to_string(),
            countries: "США".to_string(),
            rating_imdb: "8.7".to_string(),
            rating_kinopoisk: "8.5".to_string(),
            vote_count: "600 000".to_string(),
            description: "Жизнь Томаса Андерсона...".to_string(),
            duration_minutes: "136".to_string(),
            budget: "63 000 000 $".to_string(),
            box_office_world: "463 517 383 $".to_string(),
            box_office_russia: PLACEHOLDER.to_string(),
            box_office_usa: "171 479 930 $".to_string(),
            premiere_russia: "14.10.1999".to_string(),
            premiere_world: "24.03.1999".to_string(),
        };

        let fields = record.fields();

        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], ("Название (RU)", "Матрица"));
        assert_eq!(fields[15], ("Премьера мировая", "24.03.1999"));
    }
}
