use lineup::{SearchError, SearchResultItem};
use serde::Deserialize;

/// Body of `searchplayers.php`. `player` is `null` or missing when nothing
/// matched.
#[derive(Deserialize)]
pub struct PlayerSearchResponse {
    #[serde(default)]
    pub player: Option<Vec<PlayerEntity>>,
}

#[derive(Deserialize)]
pub struct PlayerEntity {
    #[serde(rename = "idPlayer", default)]
    pub id: Option<String>,
    #[serde(rename = "strPlayer", default)]
    pub name: Option<String>,
    #[serde(rename = "strThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strTeam", default)]
    pub team: Option<String>,
}

impl From<PlayerEntity> for SearchResultItem {
    fn from(entity: PlayerEntity) -> Self {
        SearchResultItem {
            external_id: entity.id,
            name: entity.name,
            thumb: entity.thumb.filter(|thumb| !thumb.is_empty()),
            team: entity.team,
        }
    }
}

pub fn parse_search_response(body: &str) -> Result<Vec<SearchResultItem>, SearchError> {
    let response: PlayerSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    Ok(response
        .player
        .unwrap_or_default()
        .into_iter()
        .map(SearchResultItem::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_players_and_ignores_extra_fields() {
        let body = r#"{
            "player": [
                {
                    "idPlayer": "34146370",
                    "idTeam": "133604",
                    "strPlayer": "Bukayo Saka",
                    "strTeam": "Arsenal",
                    "strThumb": "https://www.thesportsdb.com/images/media/player/thumb/saka.jpg",
                    "strNationality": "England",
                    "strPosition": "Right Winger"
                },
                {
                    "idPlayer": "34172345",
                    "strPlayer": "Saka Mbappe",
                    "strTeam": "_Retired Soccer",
                    "strThumb": null
                }
            ]
        }"#;

        let players = parse_search_response(body).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].external_id.as_deref(), Some("34146370"));
        assert_eq!(players[0].name.as_deref(), Some("Bukayo Saka"));
        assert_eq!(players[0].team.as_deref(), Some("Arsenal"));
        assert!(players[0].thumb.is_some());
        assert_eq!(players[1].thumb, None);
    }

    #[test]
    fn null_player_list_means_no_results() {
        assert!(parse_search_response(r#"{"player": null}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_player_field_means_no_results() {
        assert!(parse_search_response(r#"{"players": []}"#).unwrap().is_empty());
    }

    #[test]
    fn empty_thumb_counts_as_missing() {
        let players = parse_search_response(r#"{"player": [{"strPlayer": "X", "strThumb": ""}]}"#).unwrap();

        assert_eq!(players[0].thumb, None);
        assert_eq!(players[0].external_id, None);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_search_response("<html>Too Many Requests</html>").unwrap_err();

        assert!(matches!(err, SearchError::Malformed(_)));
    }
}
