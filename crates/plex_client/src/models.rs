//! Models intended to be used when deserializing Plex API responses.

use serde::Deserialize;

/// Envelope that Plex wraps every JSON response in.
#[derive(Deserialize, Debug)]
pub struct PlexResponse<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}

/// The `MediaContainer` returned by `/library/sections`.
#[derive(Deserialize, Debug, Default)]
pub struct SectionsContainer {
    #[serde(rename = "Directory", default)]
    pub directory: Vec<LibrarySection>,
}

/// One library section on the server, backed by one or more folders.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LibrarySection {
    #[serde(rename = "key")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub section_type: String,
    #[serde(rename = "Location", default)]
    pub locations: Vec<Location>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub id: u64,
    pub path: String,
}

/// The plex.tv account that owns a token.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlexUser {
    pub id: u64,
    pub uuid: String,
    pub username: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    const SECTIONS_BODY: &str = r#"{
    "MediaContainer": {
        "size": 2,
        "allowSync": false,
        "title1": "Plex Library",
        "Directory": [
            {
                "allowSync": true,
                "art": "/:/resources/show-fanart.jpg",
                "key": "2",
                "type": "show",
                "title": "TV Shows",
                "agent": "tv.plex.agents.series",
                "scanner": "Plex TV Series",
                "refreshing": false,
                "Location": [
                    { "id": 2, "path": "/data/tv" },
                    { "id": 7, "path": "/data/tv2" }
                ]
            },
            {
                "key": "5",
                "type": "artist",
                "title": "Music"
            }
        ]
    }
}"#;

    #[test]
    fn serde_deserialize_library_sections() {
        // Act
        let actual: PlexResponse<SectionsContainer> = serde_json::from_str(SECTIONS_BODY).unwrap();

        // Assert
        let sections = actual.media_container.directory;
        assert_eq!(2, sections.len());
        assert_eq!(
            LibrarySection {
                id: String::from("2"),
                title: String::from("TV Shows"),
                section_type: String::from("show"),
                locations: vec![
                    Location {
                        id: 2,
                        path: String::from("/data/tv")
                    },
                    Location {
                        id: 7,
                        path: String::from("/data/tv2")
                    },
                ],
            },
            sections[0]
        );
        assert!(sections[1].locations.is_empty());
    }

    #[test]
    fn serde_deserialize_sections_without_directory() {
        // Arrange
        let input = r#"{ "MediaContainer": { "size": 0 } }"#;

        // Act
        let actual: PlexResponse<SectionsContainer> = serde_json::from_str(input).unwrap();

        // Assert
        assert!(actual.media_container.directory.is_empty());
    }
}
