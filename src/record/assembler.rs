//! Builds one flat film card from the four upstream responses.

use tracing::{debug, info};

use crate::kinopoisk::{Fetched, KinopoiskClient, api_types::FilmDetails};
use crate::record::{
    BoxOfficeFacts, CastEntry, FilmRecord, PLACEHOLDER, PremiereFacts,
    format::{format_duration, format_money, format_vote_count},
};

/// A fully assembled fetch result.
#[derive(Debug, Clone)]
pub struct AssembledFilm {
    pub film_id: u64,
    pub record: FilmRecord,
    pub cast: Vec<CastEntry>,
}

/// Errors from the fetch/assemble cycle.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Film request failed: {0}")]
    FilmUnavailable(String),
}

/// Run the four API calls strictly sequentially and assemble the film
/// card. Auxiliary calls degrade to placeholders; a failed film card
/// aborts the fetch with its message.
pub async fn fetch_film(
    client: &KinopoiskClient,
    film_id: u64,
    api_key: &str,
) -> Result<AssembledFilm, AssembleError> {
    let details = client
        .film_details(film_id, api_key)
        .await
        .map_err(AssembleError::FilmUnavailable)?;

    let box_office = client.film_box_office(film_id, api_key).await;
    let premieres = client.film_premieres(film_id, api_key).await;
    let cast = client.film_cast(film_id, api_key).await;

    if box_office.is_unavailable() {
        debug!("Box office unavailable for {film_id}");
    }
    if premieres.is_unavailable() {
        debug!("Premieres unavailable for {film_id}");
    }
    if cast.is_unavailable() {
        debug!("Cast unavailable for {film_id}");
    }

    let record = build_record(&details, &box_office, &premieres);
    let cast = cast.data_or_default();

    info!("Assembled film {film_id}: {} cast entries", cast.len());

    Ok(AssembledFilm {
        film_id,
        record,
        cast,
    })
}

/// Pure assembly step; identical inputs produce identical records.
pub fn build_record(
    details: &FilmDetails,
    box_office: &Fetched<BoxOfficeFacts>,
    premieres: &Fetched<PremiereFacts>,
) -> FilmRecord {
    let facts = match box_office {
        Fetched::Data(facts) => facts.clone(),
        Fetched::Unavailable => BoxOfficeFacts::default(),
    };
    let premieres = match premieres {
        Fetched::Data(premieres) => premieres.clone(),
        Fetched::Unavailable => PremiereFacts::default(),
    };

    FilmRecord {
        title_ru: text_or_placeholder(details.name_ru.as_deref()),
        title_original: text_or_placeholder(details.name_original.as_deref()),
        year: details
            .year
            .map_or_else(|| PLACEHOLDER.to_string(), |year| year.to_string()),
        genres: join_names(details.genres.iter().filter_map(|g| g.genre.as_deref())),
        countries: join_names(details.countries.iter().filter_map(|c| c.country.as_deref())),
        rating_imdb: rating_or_placeholder(details.rating_imdb),
        rating_kinopoisk: rating_or_placeholder(details.rating_kinopoisk),
        vote_count: format_vote_count(details.rating_kinopoisk_vote_count),
        description: text_or_placeholder(details.description.as_deref()),
        duration_minutes: format_duration(details.film_length),
        budget: money_slot(facts.budget.as_deref()),
        box_office_world: money_slot(facts.world.as_deref()),
        box_office_russia: money_slot(facts.russia.as_deref()),
        box_office_usa: money_slot(facts.usa.as_deref()),
        premiere_russia: premieres.russia,
        premiere_world: premieres.world,
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn rating_or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |rating| format!("{rating:.1}"))
}

fn money_slot(value: Option<&str>) -> String {
    format_money(value.unwrap_or(PLACEHOLDER))
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined
    }
}
