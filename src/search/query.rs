use crate::error::ValidationError;
use crate::profile::Region;

/// One validated lookup, built per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
}

impl SearchQuery {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

/// Parse a raw `Name#TAG` Riot ID for the selected region.
pub fn validate(raw: &str, region: Region) -> Result<SearchQuery, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut parts = trimmed.split('#');
    let (Some(game_name), Some(tag_line), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::BadFormat);
    };

    if game_name.is_empty() || tag_line.is_empty() {
        return Err(ValidationError::BadFormat);
    }

    Ok(SearchQuery {
        game_name: game_name.to_string(),
        tag_line: tag_line.to_string(),
        region,
    })
}
