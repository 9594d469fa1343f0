//! Image references for champions and profile icons.

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";
const PLACEHOLDER_ROUTE: &str = "https://placehold.co/128x128/cccccc/ffffff";

/// Display names whose Data Dragon asset id is not derivable by stripping
/// punctuation. Keys are compared case-sensitively against the name the
/// profile service returns.
const CHAMPION_ALIASES: &[(&str, &str)] = &[
    ("Wukong", "MonkeyKing"),
    ("FiddleSticks", "Fiddlesticks"),
    ("Nunu & Willump", "Nunu"),
    ("Renata Glasc", "Renata"),
    ("LeBlanc", "Leblanc"),
    ("Bel'Veth", "Belveth"),
    ("Cho'Gath", "Chogath"),
    ("Kai'Sa", "Kaisa"),
    ("Kha'Zix", "Khazix"),
    ("Vel'Koz", "Velkoz"),
];

/// Map a champion display name to its Data Dragon asset id.
pub fn champion_asset_id(display_name: &str) -> String {
    let name = display_name.trim();

    if let Some((_, asset)) = CHAMPION_ALIASES.iter().find(|(alias, _)| *alias == name) {
        return (*asset).to_string();
    }

    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

pub fn champion_icon_url(ddragon_version: &str, display_name: &str) -> String {
    format!(
        "{}/{}/img/champion/{}.png",
        DDRAGON_CDN,
        ddragon_version,
        champion_asset_id(display_name)
    )
}

/// Generated avatar used when the service sends no profile icon.
pub fn placeholder_icon_url(initial: char) -> String {
    let mut buf = [0u8; 4];
    format!(
        "{}?text={}",
        PLACEHOLDER_ROUTE,
        urlencoding::encode(initial.encode_utf8(&mut buf))
    )
}

/// Avatar shown when the icon reference fails to load.
pub fn broken_icon_url() -> String {
    format!("{}?text=Error", PLACEHOLDER_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_take_precedence() {
        assert_eq!(champion_asset_id("Wukong"), "MonkeyKing");
        assert_eq!(champion_asset_id("FiddleSticks"), "Fiddlesticks");
        assert_eq!(champion_asset_id("Kai'Sa"), "Kaisa");
        assert_eq!(champion_asset_id("Nunu & Willump"), "Nunu");
    }

    #[test]
    fn generic_rule_strips_punctuation_and_spaces() {
        assert_eq!(champion_asset_id("Lux"), "Lux");
        assert_eq!(champion_asset_id("Lee Sin"), "LeeSin");
        assert_eq!(champion_asset_id("Dr. Mundo"), "DrMundo");
        assert_eq!(champion_asset_id("Kog'Maw"), "KogMaw");
        assert_eq!(champion_asset_id(" Jarvan IV "), "JarvanIV");
    }

    #[test]
    fn champion_icon_url_uses_version_and_asset_id() {
        assert_eq!(
            champion_icon_url("16.1.1", "Wukong"),
            "https://ddragon.leagueoflegends.com/cdn/16.1.1/img/champion/MonkeyKing.png"
        );
    }

    #[test]
    fn placeholder_urls() {
        assert_eq!(
            placeholder_icon_url('L'),
            "https://placehold.co/128x128/cccccc/ffffff?text=L"
        );
        assert_eq!(
            placeholder_icon_url('?'),
            "https://placehold.co/128x128/cccccc/ffffff?text=%3F"
        );
        assert_eq!(
            broken_icon_url(),
            "https://placehold.co/128x128/cccccc/ffffff?text=Error"
        );
    }
}
